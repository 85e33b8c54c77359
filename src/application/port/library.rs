// SPDX-License-Identifier: MPL-2.0
//! Media library port definition.
//!
//! A media library enumerates the video assets available to the gallery.
//! It is treated as an opaque capability: the gallery asks for access once,
//! then pulls pages through an opaque cursor.

use crate::domain::error::LibraryError;
use crate::domain::library::{AccessStatus, AssetPage, PageRequest};

/// Port for enumerating video assets.
///
/// # Contract
///
/// - `request_access` may prompt the user or probe the platform; it never
///   fails, a refusal is reported as [`AccessStatus::Denied`].
/// - `list_assets` returns at most `request.page_size` items, ordered as
///   `request.sort_by` asks, starting strictly after `request.after`.
/// - `next_cursor` of a page, passed back as `after`, continues the listing.
/// - `has_more` is `false` once the listing is exhausted.
///
/// Both calls may block; run them on a blocking thread.
pub trait MediaLibrary: Send + Sync {
    /// Asks for permission to read the library.
    fn request_access(&self) -> AccessStatus;

    /// Lists one page of assets.
    ///
    /// # Errors
    ///
    /// Returns a [`LibraryError`] if access was not granted or the library
    /// cannot be read.
    fn list_assets(&self, request: &PageRequest) -> Result<AssetPage, LibraryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::library::{AssetId, PageCursor, SourceUri, VideoAsset};
    use std::time::SystemTime;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaLibrary) {}

    struct FixedLibrary {
        total: usize,
    }

    impl MediaLibrary for FixedLibrary {
        fn request_access(&self) -> AccessStatus {
            AccessStatus::Granted
        }

        fn list_assets(&self, request: &PageRequest) -> Result<AssetPage, LibraryError> {
            let start = match &request.after {
                Some(cursor) => cursor
                    .as_str()
                    .parse::<usize>()
                    .map_err(|e| LibraryError::Io(e.to_string()))?,
                None => 0,
            };
            let end = (start + request.page_size).min(self.total);
            let items = (start..end)
                .map(|i| VideoAsset {
                    id: AssetId::new(i.to_string()),
                    source: SourceUri::new(format!("mem://{i}")),
                    display_name: None,
                    created_at: SystemTime::UNIX_EPOCH,
                    duration_secs: Some(1.0),
                })
                .collect();
            Ok(AssetPage {
                items,
                next_cursor: Some(PageCursor::new(end.to_string())),
                has_more: end < self.total,
            })
        }
    }

    #[test]
    fn cursor_continues_listing_until_exhausted() {
        let library = FixedLibrary { total: 45 };
        let mut request = PageRequest::videos_after(None);
        let mut seen = 0;
        loop {
            let page = library.list_assets(&request).unwrap();
            seen += page.items.len();
            if !page.has_more {
                break;
            }
            request = PageRequest::videos_after(page.next_cursor);
        }
        assert_eq!(seen, 45);
    }
}
