// SPDX-License-Identifier: MPL-2.0
//! Paginates a real directory through the gallery state machine.

use reel_play::application::gallery::{tasks, Gallery, LoadOutcome, LoadState};
use reel_play::application::port::MediaLibrary;
use reel_play::domain::library::{AccessStatus, PAGE_SIZE};
use reel_play::infrastructure::DirectoryLibrary;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};
use tempfile::tempdir;

fn no_probe(_: &Path) -> Option<f64> {
    None
}

/// Creates `count` videos; `clip-000.mp4` is the oldest.
fn populate(dir: &Path, count: usize) {
    for i in 0..count {
        let file = File::create(dir.join(format!("clip-{i:03}.mp4"))).expect("create video");
        file.set_modified(UNIX_EPOCH + Duration::from_secs(1_000_000 + i as u64 * 60))
            .expect("set mtime");
    }
    File::create(dir.join("notes.txt")).expect("create text file");
}

/// Runs one `load_more` round trip and returns what the gallery did.
async fn load_next(gallery: &mut Gallery, library: &Arc<dyn MediaLibrary>) -> Option<LoadOutcome> {
    let ticket = gallery.begin_load()?;
    let result = tasks::fetch_page(Arc::clone(library), ticket.request().clone()).await;
    Some(gallery.finish_load(ticket, result))
}

#[tokio::test]
async fn scrolls_through_a_directory_page_by_page() {
    let dir = tempdir().expect("tempdir");
    populate(dir.path(), 45);
    let library: Arc<dyn MediaLibrary> =
        Arc::new(DirectoryLibrary::with_probe(dir.path(), no_probe));

    let mut gallery = Gallery::new();
    let status = tasks::request_access(Arc::clone(&library)).await;
    assert_eq!(status, AccessStatus::Granted);
    let ticket = gallery.resolve_access(status).expect("first fetch");
    let result = tasks::fetch_page(Arc::clone(&library), ticket.request().clone()).await;
    assert_eq!(
        gallery.finish_load(ticket, result),
        LoadOutcome::Appended(0..PAGE_SIZE)
    );

    assert_eq!(
        load_next(&mut gallery, &library).await,
        Some(LoadOutcome::Appended(PAGE_SIZE..2 * PAGE_SIZE))
    );
    assert_eq!(
        load_next(&mut gallery, &library).await,
        Some(LoadOutcome::Appended(2 * PAGE_SIZE..45))
    );

    assert_eq!(gallery.load_state(), LoadState::Exhausted);
    assert_eq!(load_next(&mut gallery, &library).await, None);

    let names: Vec<_> = gallery
        .assets()
        .iter()
        .map(|asset| asset.id.as_str().to_owned())
        .collect();
    assert_eq!(names.first().map(String::as_str), Some("clip-044.mp4"));
    assert_eq!(names.last().map(String::as_str), Some("clip-000.mp4"));
    let mut deduped = names.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), 45);
}

#[tokio::test]
async fn missing_directory_denies_access_and_never_fetches() {
    let dir = tempdir().expect("tempdir");
    let library: Arc<dyn MediaLibrary> = Arc::new(DirectoryLibrary::with_probe(
        dir.path().join("does-not-exist"),
        no_probe,
    ));

    let mut gallery = Gallery::new();
    let status = tasks::request_access(Arc::clone(&library)).await;

    assert_eq!(status, AccessStatus::Denied);
    assert!(gallery.resolve_access(status).is_none());
    assert!(gallery.begin_load().is_none());
    assert!(gallery.is_empty());
}

#[tokio::test]
async fn directory_removed_mid_session_keeps_loaded_items() {
    let dir = tempdir().expect("tempdir");
    let videos = dir.path().join("videos");
    std::fs::create_dir(&videos).expect("mkdir");
    populate(&videos, 25);
    let library: Arc<dyn MediaLibrary> = Arc::new(DirectoryLibrary::with_probe(&videos, no_probe));

    let mut gallery = Gallery::new();
    let ticket = gallery
        .resolve_access(AccessStatus::Granted)
        .expect("first fetch");
    let result = tasks::fetch_page(Arc::clone(&library), ticket.request().clone()).await;
    gallery.finish_load(ticket, result);
    let cursor = gallery.cursor().cloned();

    std::fs::remove_dir_all(&videos).expect("remove videos");

    assert!(matches!(
        load_next(&mut gallery, &library).await,
        Some(LoadOutcome::Failed(_))
    ));
    assert_eq!(gallery.len(), PAGE_SIZE);
    assert_eq!(gallery.cursor().cloned(), cursor);
    assert!(gallery.has_more());
    assert!(!gallery.is_loading());
}
