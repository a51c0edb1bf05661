//! Injectable page cache keyed by entity and page number.
//!
//! Search is applied after fetching, so the search text is not part of the
//! key: one cached page serves every query typed on it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::domain::entity::{Entity, Mutation};
use crate::dto::page::{PageRequest, PageResponse};
use crate::fetch::PageFetcher;
use crate::fetch::errors::FetchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub entity: Entity,
    pub page: usize,
}

impl PageKey {
    pub fn new(entity: Entity, page: usize) -> Self {
        Self { entity, page }
    }
}

/// Storage for fetched pages.
pub trait PageCache {
    type Record;

    fn get(&self, key: &PageKey) -> Option<PageResponse<Self::Record>>;
    fn put(&self, key: PageKey, page: PageResponse<Self::Record>);
    /// Drops every page whose entity is affected by `mutation` and returns
    /// how many were removed.
    fn invalidate(&self, mutation: Mutation) -> usize;
}

struct CachedPage<R> {
    page: PageResponse<R>,
    stored_at: Instant,
}

/// In-process [`PageCache`] backed by a concurrent map.
pub struct MemoryPageCache<R> {
    entries: DashMap<PageKey, CachedPage<R>>,
    ttl: Option<Duration>,
}

impl<R> MemoryPageCache<R> {
    /// Creates a cache whose entries never expire on their own.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            ttl: None,
        }
    }

    /// Creates a cache whose entries are dropped once older than `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: Some(ttl),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, stored_at: Instant) -> bool {
        self.ttl.is_none_or(|ttl| stored_at.elapsed() < ttl)
    }
}

impl<R> Default for MemoryPageCache<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone> PageCache for MemoryPageCache<R> {
    type Record = R;

    fn get(&self, key: &PageKey) -> Option<PageResponse<R>> {
        let entry = self.entries.get(key)?;
        if self.is_fresh(entry.stored_at) {
            return Some(entry.page.clone());
        }
        drop(entry);
        self.entries.remove(key);
        None
    }

    fn put(&self, key: PageKey, page: PageResponse<R>) {
        self.entries.insert(
            key,
            CachedPage {
                page,
                stored_at: Instant::now(),
            },
        );
    }

    fn invalidate(&self, mutation: Mutation) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|key, _| !key.entity.is_affected_by(mutation));
        before.saturating_sub(self.entries.len())
    }
}

/// Wraps a fetcher so that pages are served from a [`PageCache`] when
/// present. Failed fetches and pages past the end are never cached.
pub struct CachedFetcher<F, C> {
    inner: F,
    cache: Arc<C>,
    entity: Entity,
}

impl<F, C> CachedFetcher<F, C> {
    pub fn new(inner: F, cache: Arc<C>, entity: Entity) -> Self {
        Self {
            inner,
            cache,
            entity,
        }
    }
}

impl<F, C> PageFetcher for CachedFetcher<F, C>
where
    F: PageFetcher,
    F::Record: Clone,
    C: PageCache<Record = F::Record>,
{
    type Record = F::Record;

    async fn fetch_page(
        &self,
        request: PageRequest,
    ) -> Result<PageResponse<Self::Record>, FetchError> {
        let key = PageKey::new(self.entity, request.page);
        if let Some(page) = self.cache.get(&key) {
            log::debug!("Serving {} page {} from cache", self.entity, request.page);
            return Ok(page);
        }

        let page = self.inner.fetch_page(request).await?;
        // Only pages that exist are stored, so arbitrary page numbers in
        // links cannot grow the cache.
        if page.page == request.page && page.page <= page.pages.max(1) {
            self.cache.put(key, page.clone());
        }
        Ok(page)
    }
}
