//! Capabilities that supply pages of records to a list controller.

use std::future::Future;

use crate::dto::page::{PageRequest, PageResponse};
use crate::fetch::errors::FetchError;

pub mod cache;
pub mod errors;
pub mod local;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Loads one page of records, typically by calling the backend.
pub trait PageFetcher {
    type Record;

    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<PageResponse<Self::Record>, FetchError>>;
}

/// Loads a complete, unpaginated collection.
pub trait DatasetFetcher {
    type Record;

    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Self::Record>, FetchError>>;
}
