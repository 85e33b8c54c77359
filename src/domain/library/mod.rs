// SPDX-License-Identifier: MPL-2.0
//! Media library domain types.

mod duration;
mod types;

pub use duration::format_duration;
pub use types::{
    AccessStatus, AssetId, AssetPage, MediaKind, PageCursor, PageRequest, SortBy, SourceUri,
    VideoAsset, PAGE_SIZE,
};
