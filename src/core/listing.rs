//! Loaded listing state with stale-response gating
//!
//! A listing page fetches its collection, keeps the rows in memory and
//! derives everything else (filtered view, facets) from them. Fetches may
//! resolve out of order or after the page is gone; each fetch therefore
//! carries a [`FetchTicket`] and only the most recent ticket of a live
//! listing may replace its rows.

use crate::core::{
    error::{PortalError, PortalResult, StoreError},
    query::FilterCriteria,
    record::Record,
    service::Repository,
    store::FetchRequest,
};
use std::sync::{Arc, RwLock, Weak};
use tokio::task::JoinHandle;

/// Where the listing is in its fetch lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,

    /// The last fetch failed; the previous rows are kept
    Failed { code: String, message: String },
}

/// Proof that a fetch was started for a given generation of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Rows of one collection as last fetched
#[derive(Debug, Clone)]
pub struct Listing<R: Record> {
    records: Vec<R>,
    state: LoadState,
    generation: u64,
    closed: bool,
}

impl<R: Record> Default for Listing<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Idle,
            generation: 0,
            closed: false,
        }
    }
}

impl<R: Record> Listing<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; any earlier outstanding ticket becomes stale
    pub fn begin_load(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        FetchTicket(self.generation)
    }

    /// Deliver a fetch result
    ///
    /// Returns `false` when the result was discarded because the ticket is
    /// stale or the listing was closed. On error the previous rows stay in
    /// place and the state records the failure.
    pub fn complete(&mut self, ticket: FetchTicket, result: PortalResult<Vec<R>>) -> bool {
        match result {
            Ok(records) => self.accept(ticket, records),
            Err(e) => self.fail(ticket, &e),
        }
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        if self.closed || ticket.0 != self.generation {
            tracing::debug!(
                collection = R::collection(),
                ticket = ticket.0,
                current = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }
        true
    }

    fn accept(&mut self, ticket: FetchTicket, records: Vec<R>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.records = records;
        self.state = LoadState::Loaded;
        true
    }

    /// Record a failed fetch, keeping the previous rows
    pub fn fail(&mut self, ticket: FetchTicket, error: &PortalError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        tracing::warn!(collection = R::collection(), error = %error, "Listing fetch failed");
        self.state = LoadState::Failed {
            code: error.error_code().to_string(),
            message: error.to_string(),
        };
        true
    }

    /// Stop accepting fetch results
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// All rows, unfiltered, in fetch order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Loaded successfully and the collection is empty
    pub fn is_empty_result(&self) -> bool {
        self.state == LoadState::Loaded && self.records.is_empty()
    }

    /// The rows visible under `criteria`
    pub fn view(&self, criteria: &FilterCriteria) -> Vec<&R> {
        criteria.apply_refs(&self.records)
    }
}

/// A listing shared between the page and its in-flight fetches
///
/// Background fetches only hold a weak reference: once every handle is
/// dropped, a late result has nowhere to land and is discarded.
pub struct ListingHandle<R: Record> {
    inner: Arc<RwLock<Listing<R>>>,
}

impl<R: Record> Clone for ListingHandle<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: Record> Default for ListingHandle<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> ListingHandle<R> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Listing::new())),
        }
    }

    /// Read the listing
    pub fn read<T>(&self, f: impl FnOnce(&Listing<R>) -> T) -> PortalResult<T> {
        let listing = self
            .inner
            .read()
            .map_err(|_| PortalError::Store(StoreError::Lock("listing read")))?;
        Ok(f(&listing))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Listing<R>) -> T) -> PortalResult<T> {
        write_listing(&self.inner, f)
    }

    /// Fetch and replace the rows, waiting for the result
    ///
    /// Returns whether the rows were applied; `Ok(false)` means a newer
    /// fetch or a close superseded this one. A failed fetch is returned as
    /// the error, after it has been recorded in the listing state.
    pub async fn refresh(&self, repo: &Repository<R>, request: &FetchRequest) -> PortalResult<bool> {
        let ticket = self.write(Listing::begin_load)?;
        match repo.fetch(request).await {
            Ok(records) => self.write(|l| l.accept(ticket, records)),
            Err(e) => {
                self.write(|l| l.fail(ticket, &e))?;
                Err(e)
            }
        }
    }

    /// Fetch in the background
    ///
    /// The task holds only a weak reference to the listing.
    pub fn spawn_refresh(&self, repo: Repository<R>, request: FetchRequest) -> PortalResult<JoinHandle<bool>> {
        let ticket = self.write(Listing::begin_load)?;
        let weak: Weak<RwLock<Listing<R>>> = Arc::downgrade(&self.inner);

        Ok(tokio::spawn(async move {
            let result = repo.fetch(&request).await;
            match weak.upgrade() {
                Some(inner) => write_listing(&inner, |l| l.complete(ticket, result)).unwrap_or(false),
                None => {
                    tracing::debug!(collection = R::collection(), "Listing dropped before fetch resolved");
                    false
                }
            }
        }))
    }

    /// Mark the listing as gone; in-flight results will be dropped
    pub fn close(&self) -> PortalResult<()> {
        self.write(Listing::close)
    }
}

fn write_listing<R: Record, T>(
    inner: &RwLock<Listing<R>>,
    f: impl FnOnce(&mut Listing<R>) -> T,
) -> PortalResult<T> {
    let mut listing = inner
        .write()
        .map_err(|_| PortalError::Store(StoreError::Lock("listing write")))?;
    Ok(f(&mut listing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use uuid::Uuid;

    fn job(title: &str) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut listing = Listing::<Job>::new();
        let first = listing.begin_load();
        let second = listing.begin_load();

        assert!(listing.complete(second, Ok(vec![job("new")])));
        assert!(!listing.complete(first, Ok(vec![job("old")])));
        assert_eq!(listing.records()[0].title.as_deref(), Some("new"));
    }

    #[test]
    fn test_closed_listing_ignores_results() {
        let mut listing = Listing::<Job>::new();
        let ticket = listing.begin_load();
        listing.close();

        assert!(!listing.complete(ticket, Ok(vec![job("late")])));
        assert!(listing.records().is_empty());
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut listing = Listing::<Job>::new();
        let ticket = listing.begin_load();
        listing.complete(ticket, Ok(vec![job("kept")]));

        let ticket = listing.begin_load();
        listing.complete(
            ticket,
            Err(PortalError::Store(StoreError::Network("offline".to_string()))),
        );

        assert_eq!(listing.records().len(), 1);
        assert!(matches!(
            listing.state(),
            LoadState::Failed { code, .. } if code == "STORE_UNREACHABLE"
        ));
        assert!(!listing.is_empty_result());
    }

    #[test]
    fn test_empty_result_is_distinct_from_failure() {
        let mut listing = Listing::<Job>::new();
        let ticket = listing.begin_load();
        listing.complete(ticket, Ok(vec![]));
        assert!(listing.is_empty_result());
    }
}
