//! Per-view listing state with a stale-response guard.
//!
//! A view may dispatch several fetches before any of them completes (rapid
//! navigation, repeated refreshes). Each dispatch takes a [`Ticket`] with a
//! monotonically increasing sequence number; only the result of the most
//! recently dispatched fetch replaces the state. Results arriving for older
//! tickets, or after the view is closed, are dropped.
//!
//! State is replaced wholesale. Readers get an `Arc` snapshot that stays
//! valid while later fetches land.

use share_core::filter::{filter_entries, find_by_id, Searchable};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::listing::ListingSource;

/// Sequence number of one dispatched fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

struct ViewState<T> {
    entries: Arc<Vec<T>>,
    applied: Option<Ticket>,
    closed: bool,
}

pub struct ListingView<T> {
    dispatched: AtomicU64,
    state: Mutex<ViewState<T>>,
}

impl<T> Default for ListingView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListingView<T> {
    pub fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            state: Mutex::new(ViewState {
                entries: Arc::new(Vec::new()),
                applied: None,
                closed: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new fetch. Every earlier ticket becomes stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.dispatched.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Replace the state with `entries` if `ticket` is still the latest
    /// dispatch and the view is open. Returns whether it was applied.
    pub fn apply(&self, ticket: Ticket, entries: Vec<T>) -> bool {
        let mut state = self.lock();
        if state.closed {
            debug!(ticket = ticket.0, "view closed, dropping listing");
            return false;
        }
        let latest = self.dispatched.load(Ordering::SeqCst);
        if ticket.0 != latest {
            debug!(ticket = ticket.0, latest, "stale listing response dropped");
            return false;
        }
        state.entries = Arc::new(entries);
        state.applied = Some(ticket);
        true
    }

    /// Dispatch a fetch through `source` and apply its result.
    pub async fn refresh<S>(&self, source: &S) -> bool
    where
        S: ListingSource<Entry = T> + ?Sized,
    {
        let ticket = self.begin();
        let entries = source.fetch_listing().await;
        self.apply(ticket, entries)
    }

    /// Snapshot of the current listing.
    pub fn entries(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.lock().entries)
    }

    /// Ticket whose result is currently shown, if any.
    pub fn applied(&self) -> Option<Ticket> {
        self.lock().applied
    }

    /// Tear the view down; in-flight results are ignored from now on.
    pub fn close(&self) {
        self.lock().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

impl<T: Searchable + Clone> ListingView<T> {
    /// Current entries matching `query`.
    pub fn search(&self, query: &str) -> Vec<T> {
        let entries = self.entries();
        filter_entries(&entries, query).into_iter().cloned().collect()
    }

    /// Detail lookup in the current listing.
    pub fn find(&self, id: &str) -> Option<T> {
        find_by_id(&self.entries(), id).cloned()
    }
}
