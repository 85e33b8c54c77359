// SPDX-License-Identifier: MPL-2.0
//! Async wrappers around the blocking capability calls.
//!
//! Each function moves the call onto Tokio's blocking pool and always
//! resolves: a panicked or cancelled task is turned into an error value so
//! the gallery receives exactly one completion per issued fetch.

use crate::application::port::{MediaLibrary, ThumbnailExtractor};
use crate::domain::error::{LibraryError, VideoError};
use crate::domain::library::{AccessStatus, AssetPage, PageRequest, SourceUri};
use crate::domain::video::RawFrame;
use std::sync::Arc;

/// Asks the library for access. A failed task counts as a refusal.
pub async fn request_access(library: Arc<dyn MediaLibrary>) -> AccessStatus {
    tokio::task::spawn_blocking(move || library.request_access())
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "access request task failed");
            AccessStatus::Denied
        })
}

/// Fetches one page.
pub async fn fetch_page(
    library: Arc<dyn MediaLibrary>,
    request: PageRequest,
) -> Result<AssetPage, LibraryError> {
    tokio::task::spawn_blocking(move || library.list_assets(&request))
        .await
        .unwrap_or_else(|e| Err(LibraryError::Task(e.to_string())))
}

/// Extracts a thumbnail for `source`, returning the source alongside the
/// result so callers can key it.
pub async fn load_thumbnail(
    extractor: Arc<dyn ThumbnailExtractor>,
    source: SourceUri,
    max_width: u32,
) -> (SourceUri, Result<RawFrame, VideoError>) {
    let source_clone = source.clone();
    let result = tokio::task::spawn_blocking(move || extractor.extract(&source_clone, max_width))
        .await
        .unwrap_or_else(|e| Err(VideoError::Other(format!("Thumbnail task failed: {e}"))));

    (source, result)
}
