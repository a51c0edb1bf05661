//! Client-side pagination for collections the backend returns in one piece.

use std::sync::{Arc, Mutex};

use crate::dto::page::{PageRequest, PageResponse};
use crate::fetch::errors::FetchError;
use crate::fetch::{DatasetFetcher, PageFetcher};

/// Presents a [`DatasetFetcher`] as a [`PageFetcher`].
///
/// The dataset is loaded on the first page request and kept for the
/// lifetime of the adapter, so later page changes are pure re-slices.
pub struct LocalPages<D: DatasetFetcher> {
    source: D,
    page_size: usize,
    records: Mutex<Option<Arc<Vec<D::Record>>>>,
}

impl<D: DatasetFetcher> LocalPages<D> {
    pub fn new(source: D, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            records: Mutex::new(None),
        }
    }

    fn loaded(&self) -> Option<Arc<Vec<D::Record>>> {
        self.records.lock().ok().and_then(|records| records.clone())
    }

    async fn records(&self) -> Result<Arc<Vec<D::Record>>, FetchError> {
        if let Some(records) = self.loaded() {
            return Ok(records);
        }

        let records = Arc::new(self.source.fetch_all().await?);
        if let Ok(mut slot) = self.records.lock() {
            *slot = Some(Arc::clone(&records));
        }
        Ok(records)
    }
}

impl<D> PageFetcher for LocalPages<D>
where
    D: DatasetFetcher,
    D::Record: Clone,
{
    type Record = D::Record;

    async fn fetch_page(
        &self,
        request: PageRequest,
    ) -> Result<PageResponse<Self::Record>, FetchError> {
        let records = self.records().await?;
        Ok(PageResponse::from_records(
            &records,
            request.page,
            self.page_size,
        ))
    }
}

/// A dataset that is already in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticDataset<R>(pub Vec<R>);

impl<R: Clone> DatasetFetcher for StaticDataset<R> {
    type Record = R;

    async fn fetch_all(&self) -> Result<Vec<R>, FetchError> {
        Ok(self.0.clone())
    }
}
