// SPDX-License-Identifier: MPL-2.0
//! Directory-backed media library.
//!
//! Lists the video files of a single directory (non-recursive), newest first.
//! Every call rescans the directory, so files added between pages show up
//! on later pages when they sort after the cursor, and deleted files never
//! break resumption.
//!
//! # Cursor format
//!
//! `"<created_millis>:<file name>"`: the sort key of the last item of a
//! page. The next page starts strictly after that key in the
//! `(created desc, name asc)` ordering.

use crate::application::port::MediaLibrary;
use crate::domain::error::LibraryError;
use crate::domain::library::{
    AccessStatus, AssetId, AssetPage, MediaKind, PageCursor, PageRequest, SortBy, SourceUri,
    VideoAsset,
};
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Supported video file extensions.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

/// Looks up the duration of a video file.
pub type DurationProbe = fn(&Path) -> Option<f64>;

/// Media library reading one directory.
#[derive(Debug, Clone)]
pub struct DirectoryLibrary {
    directory: PathBuf,
    probe: DurationProbe,
}

/// A directory entry with its sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    created_millis: i64,
    name: String,
    path: PathBuf,
}

impl Entry {
    fn sort_key(&self) -> (Reverse<i64>, &str) {
        (Reverse(self.created_millis), self.name.as_str())
    }
}

impl DirectoryLibrary {
    /// Library over `directory`, probing durations with `FFmpeg`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_probe(directory, crate::infrastructure::ffmpeg::probe_duration)
    }

    /// Library over `directory` with a custom duration probe.
    #[must_use]
    pub fn with_probe(directory: impl Into<PathBuf>, probe: DurationProbe) -> Self {
        Self {
            directory: directory.into(),
            probe,
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn scan(&self) -> Result<Vec<Entry>, LibraryError> {
        let read_dir = std::fs::read_dir(&self.directory).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => LibraryError::AccessDenied,
            std::io::ErrorKind::NotFound => {
                LibraryError::Unavailable(self.directory.display().to_string())
            }
            _ => LibraryError::from(e),
        })?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();

            if !path.is_file() || !is_supported_video(&path) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
                continue;
            };

            let metadata = dir_entry.metadata()?;
            let created_millis = to_millis(creation_time(&metadata));
            entries.push(Entry {
                created_millis,
                name: name.to_owned(),
                path,
            });
        }

        entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Ok(entries)
    }

    fn to_asset(&self, entry: Entry) -> VideoAsset {
        let duration_secs = (self.probe)(&entry.path);
        VideoAsset {
            id: AssetId::new(entry.name.clone()),
            source: SourceUri::new(entry.path.to_string_lossy()),
            display_name: Some(entry.name),
            created_at: from_millis(entry.created_millis),
            duration_secs,
        }
    }
}

impl MediaLibrary for DirectoryLibrary {
    fn request_access(&self) -> AccessStatus {
        match std::fs::read_dir(&self.directory) {
            Ok(_) => AccessStatus::Granted,
            Err(e) => {
                tracing::warn!(
                    directory = %self.directory.display(),
                    error = %e,
                    "media library directory is not readable"
                );
                AccessStatus::Denied
            }
        }
    }

    fn list_assets(&self, request: &PageRequest) -> Result<AssetPage, LibraryError> {
        debug_assert_eq!(request.media_kind, MediaKind::Video);
        debug_assert_eq!(request.sort_by, SortBy::CreationTimeDesc);

        let after = request.after.as_ref().map(parse_cursor).transpose()?;
        let entries = self.scan()?;

        let start = match &after {
            Some((millis, name)) => {
                let key = (Reverse(*millis), name.as_str());
                entries.partition_point(|e| e.sort_key() <= key)
            }
            None => 0,
        };

        let remaining = entries.len().saturating_sub(start);
        let take = request.page_size.min(remaining);
        let has_more = remaining > take;

        let page: Vec<Entry> = entries.into_iter().skip(start).take(take).collect();
        let next_cursor = page
            .last()
            .map(|last| encode_cursor(last.created_millis, &last.name))
            .or_else(|| request.after.clone());

        let items = page.into_iter().map(|e| self.to_asset(e)).collect();

        tracing::debug!(
            directory = %self.directory.display(),
            start,
            count = take,
            has_more,
            "listed video page"
        );

        Ok(AssetPage {
            items,
            next_cursor,
            has_more,
        })
    }
}

/// Checks if a file has a supported video extension.
#[must_use]
pub fn is_supported_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Earliest of the creation and modification times.
///
/// Copied files usually keep their original modification time while getting
/// a fresh creation time; the earlier of the two is closer to when the video
/// was recorded.
fn creation_time(metadata: &std::fs::Metadata) -> SystemTime {
    match (metadata.created().ok(), metadata.modified().ok()) {
        (Some(created), Some(modified)) => created.min(modified),
        (Some(time), None) | (None, Some(time)) => time,
        (None, None) => UNIX_EPOCH,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn to_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_millis() as i64,
        Err(before) => -(before.duration().as_millis() as i64),
    }
}

fn from_millis(millis: i64) -> SystemTime {
    let magnitude = Duration::from_millis(millis.unsigned_abs());
    if millis >= 0 {
        UNIX_EPOCH + magnitude
    } else {
        UNIX_EPOCH - magnitude
    }
}

fn encode_cursor(created_millis: i64, name: &str) -> PageCursor {
    PageCursor::new(format!("{created_millis}:{name}"))
}

fn parse_cursor(cursor: &PageCursor) -> Result<(i64, String), LibraryError> {
    let invalid = || LibraryError::Unavailable(format!("invalid page cursor: {}", cursor.as_str()));
    let (millis, name) = cursor.as_str().split_once(':').ok_or_else(invalid)?;
    let millis = millis.parse::<i64>().map_err(|_| invalid())?;
    Ok((millis, name.to_owned()))
}
