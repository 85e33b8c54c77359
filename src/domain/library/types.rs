// SPDX-License-Identifier: MPL-2.0
//! Media library value types.
//!
//! These types describe what a media library hands out: assets, pages of
//! assets, and the opaque cursor used to continue a listing.

use std::fmt;
use std::time::SystemTime;

/// Number of assets requested per page.
pub const PAGE_SIZE: usize = 20;

/// Stable identifier of a library item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque locator of an asset's media data (a URI or a filesystem path).
///
/// Consumers never interpret the value; they hand it back to the adapter
/// that produced it (thumbnail extraction, player creation).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceUri(String);

impl SourceUri {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A video item from the media library. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoAsset {
    pub id: AssetId,
    pub source: SourceUri,
    /// File name or title as reported by the library, if any.
    pub display_name: Option<String>,
    pub created_at: SystemTime,
    /// Duration in seconds. `None` when the library could not determine it.
    pub duration_secs: Option<f64>,
}

impl VideoAsset {
    /// Returns the display name, or `fallback` when the library reported none
    /// (or an empty one).
    #[must_use]
    pub fn display_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => fallback,
        }
    }
}

/// Opaque pagination token marking the end of the last fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageCursor(String);

impl PageCursor {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Kind of media requested from the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    #[default]
    Video,
}

/// Ordering of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Newest first.
    #[default]
    CreationTimeDesc,
}

/// Parameters of one `list_assets` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub media_kind: MediaKind,
    pub page_size: usize,
    /// Continue after this cursor; `None` starts from the beginning.
    pub after: Option<PageCursor>,
    pub sort_by: SortBy,
}

impl PageRequest {
    /// Request for the page following `after`, using the default page size.
    #[must_use]
    pub fn videos_after(after: Option<PageCursor>) -> Self {
        Self {
            media_kind: MediaKind::Video,
            page_size: PAGE_SIZE,
            after,
            sort_by: SortBy::CreationTimeDesc,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPage {
    pub items: Vec<VideoAsset>,
    pub next_cursor: Option<PageCursor>,
    pub has_more: bool,
}

impl AssetPage {
    /// A page with no items and nothing after it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
            has_more: false,
        }
    }
}

/// Outcome of an access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Granted,
    Denied,
}

impl AccessStatus {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}
