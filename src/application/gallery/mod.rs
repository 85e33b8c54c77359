// SPDX-License-Identifier: MPL-2.0
//! Paginated gallery state machine.
//!
//! [`Gallery`] owns the append-only asset list, the pagination cursor, the
//! `has_more` flag and the in-flight guard. It performs no I/O: callers ask
//! it for a [`FetchTicket`], run the request against a
//! [`MediaLibrary`](crate::application::port::MediaLibrary) (see [`tasks`]),
//! and hand the result back through [`Gallery::finish_load`].
//!
//! ```text
//!             resolve_access(Granted)
//!  Pending ──────────────────────────▶ Idle ◀──────────────┐
//!     │                                 │ begin_load       │ finish_load
//!     │ resolve_access(Denied)          ▼                  │ (has_more)
//!     ▼                              Loading ──────────────┘
//!  Denied                               │ finish_load (!has_more)
//!                                       ▼
//!                                   Exhausted
//! ```

pub mod tasks;

use crate::domain::error::LibraryError;
use crate::domain::library::{AccessStatus, AssetPage, PageCursor, PageRequest, VideoAsset};

/// Whether the gallery may read the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessState {
    /// Access has not been requested or answered yet.
    #[default]
    Pending,
    Granted,
    Denied,
}

/// Derived pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch may be issued.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The library reported no more items.
    Exhausted,
}

/// Permission to run one page fetch.
///
/// Issued by [`Gallery::begin_load`]; exactly one ticket is outstanding while
/// the gallery is loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    id: u64,
    request: PageRequest,
}

impl FetchTicket {
    /// The request to send to the media library.
    #[must_use]
    pub fn request(&self) -> &PageRequest {
        &self.request
    }
}

/// What [`Gallery::finish_load`] did with a fetch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was appended; the range indexes the new assets.
    Appended(std::ops::Range<usize>),
    /// The fetch failed; nothing but the in-flight flag changed.
    Failed(LibraryError),
    /// The ticket does not belong to the outstanding fetch and was ignored.
    Stale,
}

/// Paginated, append-only collection of video assets.
#[derive(Debug, Clone)]
pub struct Gallery {
    assets: Vec<VideoAsset>,
    cursor: Option<PageCursor>,
    has_more: bool,
    in_flight: Option<u64>,
    next_ticket: u64,
    access: AccessState,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    /// Empty gallery waiting for an access decision.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            cursor: None,
            has_more: true,
            in_flight: None,
            next_ticket: 0,
            access: AccessState::Pending,
        }
    }

    #[must_use]
    pub fn assets(&self) -> &[VideoAsset] {
        &self.assets
    }

    #[must_use]
    pub fn asset(&self, index: usize) -> Option<&VideoAsset> {
        self.assets.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&PageCursor> {
        self.cursor.as_ref()
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn access(&self) -> AccessState {
        self.access
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        if self.in_flight.is_some() {
            LoadState::Loading
        } else if self.has_more {
            LoadState::Idle
        } else {
            LoadState::Exhausted
        }
    }

    /// Records the access decision. On `Granted` the first page is requested.
    ///
    /// Only the first decision counts; later calls return `None`.
    pub fn resolve_access(&mut self, status: AccessStatus) -> Option<FetchTicket> {
        if self.access != AccessState::Pending {
            return None;
        }
        match status {
            AccessStatus::Granted => {
                self.access = AccessState::Granted;
                self.begin_load()
            }
            AccessStatus::Denied => {
                self.access = AccessState::Denied;
                None
            }
        }
    }

    /// Starts a page fetch unless one is in flight, the listing is exhausted,
    /// or access is not granted.
    ///
    /// The in-flight flag is set before the ticket is returned.
    pub fn begin_load(&mut self) -> Option<FetchTicket> {
        if self.access != AccessState::Granted || !self.has_more || self.in_flight.is_some() {
            return None;
        }

        let id = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.in_flight = Some(id);

        Some(FetchTicket {
            id,
            request: PageRequest::videos_after(self.cursor.clone()),
        })
    }

    /// Applies the result of the fetch started with `ticket`.
    ///
    /// The in-flight flag is cleared first; list, cursor and `has_more` only
    /// change on success.
    pub fn finish_load(
        &mut self,
        ticket: FetchTicket,
        result: Result<AssetPage, LibraryError>,
    ) -> LoadOutcome {
        if self.in_flight != Some(ticket.id) {
            return LoadOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                let start = self.assets.len();
                self.assets.extend(page.items);
                self.cursor = page.next_cursor;
                self.has_more = page.has_more;
                LoadOutcome::Appended(start..self.assets.len())
            }
            Err(error) => LoadOutcome::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::library::{AssetId, SourceUri, PAGE_SIZE};
    use std::time::{Duration, SystemTime};

    fn asset(i: usize) -> VideoAsset {
        VideoAsset {
            id: AssetId::new(format!("asset-{i}")),
            source: SourceUri::new(format!("file:///videos/{i}.mp4")),
            display_name: Some(format!("{i}.mp4")),
            created_at: SystemTime::UNIX_EPOCH + Duration::from_secs(1_000 - i as u64),
            duration_secs: Some(i as f64),
        }
    }

    fn page(range: std::ops::Range<usize>, has_more: bool) -> AssetPage {
        let cursor = PageCursor::new(format!("cursor-{}", range.end));
        AssetPage {
            items: range.map(asset).collect(),
            next_cursor: Some(cursor),
            has_more,
        }
    }

    fn granted() -> (Gallery, FetchTicket) {
        let mut gallery = Gallery::new();
        let ticket = gallery
            .resolve_access(AccessStatus::Granted)
            .expect("granted access should start the first fetch");
        (gallery, ticket)
    }

    #[test]
    fn new_gallery_is_pending_and_empty() {
        let gallery = Gallery::new();
        assert_eq!(gallery.access(), AccessState::Pending);
        assert!(gallery.is_empty());
        assert!(gallery.has_more());
        assert_eq!(gallery.load_state(), LoadState::Idle);
    }

    #[test]
    fn load_is_refused_before_access_is_granted() {
        let mut gallery = Gallery::new();
        assert!(gallery.begin_load().is_none());
        assert!(!gallery.is_loading());
    }

    #[test]
    fn granted_access_requests_first_page() {
        let (gallery, ticket) = granted();
        assert_eq!(gallery.access(), AccessState::Granted);
        assert_eq!(gallery.load_state(), LoadState::Loading);
        assert_eq!(ticket.request().page_size, PAGE_SIZE);
        assert_eq!(ticket.request().after, None);
    }

    #[test]
    fn denied_access_leaves_gallery_empty_and_never_fetches() {
        let mut gallery = Gallery::new();
        assert!(gallery.resolve_access(AccessStatus::Denied).is_none());
        assert_eq!(gallery.access(), AccessState::Denied);
        assert!(gallery.begin_load().is_none());
        assert!(gallery.is_empty());
        assert!(!gallery.is_loading());
    }

    #[test]
    fn access_is_resolved_only_once() {
        let (mut gallery, _ticket) = granted();
        assert!(gallery.resolve_access(AccessStatus::Granted).is_none());
        assert!(gallery.resolve_access(AccessStatus::Denied).is_none());
        assert_eq!(gallery.access(), AccessState::Granted);
    }

    #[test]
    fn load_while_in_flight_is_a_noop() {
        let (mut gallery, _ticket) = granted();
        assert!(gallery.begin_load().is_none());
        assert!(gallery.begin_load().is_none());
        assert_eq!(gallery.len(), 0);
        assert!(gallery.is_loading());
    }

    #[test]
    fn successful_page_appends_and_allows_next_load() {
        let (mut gallery, ticket) = granted();

        let outcome = gallery.finish_load(ticket, Ok(page(0..20, true)));

        assert_eq!(outcome, LoadOutcome::Appended(0..20));
        assert_eq!(gallery.len(), 20);
        assert_eq!(gallery.cursor(), Some(&PageCursor::new("cursor-20")));
        assert!(gallery.has_more());
        assert!(!gallery.is_loading());

        let next = gallery.begin_load().expect("next page should be permitted");
        assert_eq!(next.request().after, Some(PageCursor::new("cursor-20")));
    }

    #[test]
    fn pages_are_appended_in_source_order() {
        let (mut gallery, ticket) = granted();
        gallery.finish_load(ticket, Ok(page(0..20, true)));
        let ticket = gallery.begin_load().unwrap();
        let outcome = gallery.finish_load(ticket, Ok(page(20..40, true)));

        assert_eq!(outcome, LoadOutcome::Appended(20..40));
        let ids: Vec<_> = gallery.assets().iter().map(|a| a.id.clone()).collect();
        let expected: Vec<_> = (0..40).map(|i| asset(i).id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn exhausted_gallery_refuses_to_load() {
        let (mut gallery, ticket) = granted();
        gallery.finish_load(ticket, Ok(page(0..7, false)));

        assert_eq!(gallery.load_state(), LoadState::Exhausted);
        assert!(gallery.begin_load().is_none());
        assert_eq!(gallery.len(), 7);
    }

    #[test]
    fn failed_fetch_changes_nothing_but_the_guard() {
        let (mut gallery, ticket) = granted();
        gallery.finish_load(ticket, Ok(page(0..20, true)));
        let before = (gallery.len(), gallery.cursor().cloned(), gallery.has_more());

        let ticket = gallery.begin_load().unwrap();
        let outcome = gallery.finish_load(ticket, Err(LibraryError::Io("disk gone".into())));

        assert_eq!(outcome, LoadOutcome::Failed(LibraryError::Io("disk gone".into())));
        assert_eq!(
            (gallery.len(), gallery.cursor().cloned(), gallery.has_more()),
            before
        );
        assert!(!gallery.is_loading());
        assert!(gallery.begin_load().is_some());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let (mut gallery, first) = granted();
        let stale = first.clone();
        gallery.finish_load(first, Ok(page(0..20, true)));
        let _current = gallery.begin_load().unwrap();

        let outcome = gallery.finish_load(stale, Ok(page(100..120, true)));

        assert_eq!(outcome, LoadOutcome::Stale);
        assert_eq!(gallery.len(), 20);
        assert!(gallery.is_loading());
    }

    #[test]
    fn empty_page_with_more_keeps_gallery_idle() {
        let (mut gallery, ticket) = granted();
        let outcome = gallery.finish_load(ticket, Ok(page(0..0, true)));
        assert_eq!(outcome, LoadOutcome::Appended(0..0));
        assert_eq!(gallery.load_state(), LoadState::Idle);
    }
}
