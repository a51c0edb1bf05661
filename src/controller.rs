//! Page and search state behind every list page.
//!
//! A [`ListController`] belongs to one mounted list view. It keeps the
//! current page and search text, hands out [`FetchTicket`]s whenever new data
//! is needed, and applies settled tickets only when they are still the most
//! recent request. A slow response for a page the user already left is
//! dropped instead of overwriting newer rows.
//!
//! Search is applied client-side to the fetched page. Page-number controls
//! therefore span the server's unfiltered page count, and a filtered page may
//! hold fewer rows than the page size.

use std::sync::Arc;

use serde::Serialize;

use crate::dto::page::{PageRequest, PageResponse};
use crate::fetch::PageFetcher;
use crate::fetch::errors::FetchError;

/// Page and search text owned by one controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub page: usize,
    pub search: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

/// Outcome of the most recent request.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchResult<R> {
    Loading,
    Success(PageResponse<R>),
    Failure(FetchError),
}

impl<R> FetchResult<R> {
    pub fn status(&self) -> ListStatus {
        match self {
            FetchResult::Loading => ListStatus::Loading,
            FetchResult::Success(_) => ListStatus::Success,
            FetchResult::Failure(_) => ListStatus::Failure,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchResult::Failure(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    Loading,
    Success,
    Failure,
}

/// Everything a table and a pagination control need to render a list.
#[derive(Clone, Debug, Serialize)]
pub struct ListView<R> {
    pub status: ListStatus,
    pub rows: Vec<R>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Unfiltered number of records known to the server.
    pub total: usize,
    pub search: String,
    pub error: Option<String>,
}

/// A request issued by a controller that has not been answered yet.
///
/// The ticket owns a handle to the fetcher, so the controller stays free to
/// accept further input while the request is in flight.
#[must_use = "a ticket does nothing until it is fetched and settled"]
pub struct FetchTicket<F> {
    generation: u64,
    request: PageRequest,
    fetcher: Arc<F>,
}

impl<F: PageFetcher> FetchTicket<F> {
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Performs the request. Hand the result to [`ListController::settle`].
    pub async fn fetch(self) -> Settled<F::Record> {
        let result = self.fetcher.fetch_page(self.request).await;
        Settled {
            generation: self.generation,
            request: self.request,
            result,
        }
    }
}

/// An answered ticket.
pub struct Settled<R> {
    generation: u64,
    request: PageRequest,
    result: Result<PageResponse<R>, FetchError>,
}

impl<R> Settled<R> {
    pub fn request(&self) -> PageRequest {
        self.request
    }
}

pub struct ListController<F: PageFetcher, P> {
    fetcher: Arc<F>,
    predicate: P,
    state: QueryState,
    result: FetchResult<F::Record>,
    generation: u64,
    total_pages: Option<usize>,
}

impl<F, P> ListController<F, P>
where
    F: PageFetcher,
    P: Fn(&F::Record, &str) -> bool,
{
    /// Mounts a controller on page 1 with an empty search. Nothing is
    /// fetched until [`refresh`](Self::refresh) or a state change.
    pub fn new(fetcher: Arc<F>, predicate: P) -> Self {
        Self {
            fetcher,
            predicate,
            state: QueryState::default(),
            result: FetchResult::Loading,
            generation: 0,
            total_pages: None,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.page
    }

    /// Page count reported by the last successful response.
    pub fn total_pages(&self) -> Option<usize> {
        self.total_pages
    }

    /// Requests the current page again. Used for the initial load and for
    /// an explicit retry after a failure.
    pub fn refresh(&mut self) -> FetchTicket<F> {
        self.issue()
    }

    /// Moves to `page`, clamped to `[1, total_pages]` once the page count is
    /// known. Returns `None` when the page does not change.
    pub fn set_page(&mut self, page: usize) -> Option<FetchTicket<F>> {
        let page = self.clamp(page);
        if page == self.state.page {
            return None;
        }

        self.state.page = page;
        Some(self.issue())
    }

    /// Stores the search text and returns to page 1. Rows already loaded
    /// for page 1 are re-filtered without a fetch; any other page, or a
    /// page 1 that has not loaded successfully, is fetched again.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> Option<FetchTicket<F>> {
        self.state.search = text.into();
        if self.state.page == 1 && matches!(self.result, FetchResult::Success(_)) {
            return None;
        }

        self.state.page = 1;
        Some(self.issue())
    }

    /// Applies a settled ticket if it answers the latest request. Returns
    /// whether the result was applied.
    pub fn settle(&mut self, settled: Settled<F::Record>) -> bool {
        if settled.generation != self.generation {
            log::debug!(
                "Discarding stale response for page {} (request #{}, latest #{})",
                settled.request.page,
                settled.generation,
                self.generation
            );
            return false;
        }

        match settled.result {
            Ok(response) => {
                self.total_pages = Some(response.pages);
                self.state.page = response.page.max(1);
                self.result = FetchResult::Success(response);
            }
            Err(err) => {
                log::warn!("Failed to fetch page {}: {err}", settled.request.page);
                self.result = FetchResult::Failure(err);
            }
        }
        true
    }

    /// Fetches and settles a ticket in one step.
    pub async fn complete(&mut self, ticket: FetchTicket<F>) -> bool {
        let settled = ticket.fetch().await;
        self.settle(settled)
    }

    pub async fn go_to_page(&mut self, page: usize) {
        if let Some(ticket) = self.set_page(page) {
            self.complete(ticket).await;
        }
    }

    pub async fn search(&mut self, text: impl Into<String>) {
        if let Some(ticket) = self.set_search_text(text) {
            self.complete(ticket).await;
        }
    }

    /// Loads `page` filtered by `search` on a freshly mounted controller.
    ///
    /// A page past the end is accepted optimistically and then clamped to
    /// the last page once the server has reported the page count.
    pub async fn open(&mut self, search: &str, page: usize) {
        self.state.search = search.to_string();

        let ticket = match self.set_page(page) {
            Some(ticket) => ticket,
            None => self.refresh(),
        };
        self.complete(ticket).await;

        if let Some(ticket) = self.set_page(self.state.page) {
            self.complete(ticket).await;
        }
    }

    /// Current result. No side effects.
    pub fn resolve(&self) -> &FetchResult<F::Record> {
        &self.result
    }

    /// Rows of the current page that match the search text, plus the
    /// pagination metadata.
    pub fn view(&self) -> ListView<F::Record>
    where
        F::Record: Clone,
    {
        let query = self.state.search.trim();
        let (rows, total) = match &self.result {
            FetchResult::Success(response) => (
                response
                    .data
                    .iter()
                    .filter(|record| query.is_empty() || (self.predicate)(*record, query))
                    .cloned()
                    .collect(),
                response.total,
            ),
            _ => (Vec::new(), 0),
        };

        ListView {
            status: self.result.status(),
            rows,
            current_page: self.state.page,
            total_pages: self.total_pages.unwrap_or(0),
            total,
            search: self.state.search.clone(),
            error: self.result.error().map(ToString::to_string),
        }
    }

    fn clamp(&self, page: usize) -> usize {
        let page = page.max(1);
        match self.total_pages {
            Some(0) => 1,
            Some(total) => page.min(total),
            None => page,
        }
    }

    fn issue(&mut self) -> FetchTicket<F> {
        self.generation += 1;
        self.result = FetchResult::Loading;
        FetchTicket {
            generation: self.generation,
            request: PageRequest::new(self.state.page),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}
