//! Page exchange types shared by the backend client and the list controller.

use serde::{Deserialize, Serialize};

use crate::fetch::errors::FetchError;

/// Request for one page of a collection. Pages are numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
}

impl PageRequest {
    pub fn new(page: usize) -> Self {
        Self { page: page.max(1) }
    }
}

/// One page of records together with the size of the whole collection.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub pages: usize,
}

impl<T> PageResponse<T> {
    /// Slices `records` into the requested page of `page_size` entries.
    ///
    /// Pages past the end are clamped to the last page; an empty collection
    /// always yields page 1 of 0.
    pub fn from_records(records: &[T], page: usize, page_size: usize) -> Self
    where
        T: Clone,
    {
        let page_size = page_size.max(1);
        let total = records.len();
        let pages = total.div_ceil(page_size);
        let page = page.clamp(1, pages.max(1));
        let start = (page - 1) * page_size;
        let data = records.iter().skip(start).take(page_size).cloned().collect();

        Self {
            data,
            total,
            page,
            pages,
        }
    }
}

/// Page payload as it arrives on the wire, before any shape checks.
#[derive(Debug, Deserialize)]
pub struct WirePage<T> {
    data: Option<Vec<T>>,
    total: i64,
    page: i64,
    pages: i64,
}

impl<T> WirePage<T> {
    /// Checks the payload against the server's fixed page size and turns it
    /// into a trusted [`PageResponse`].
    pub fn into_page(self, page_size: usize) -> Result<PageResponse<T>, FetchError> {
        let total = non_negative("total", self.total)?;
        let pages = non_negative("pages", self.pages)?;
        let page = non_negative("page", self.page)?;

        if page == 0 {
            return Err(FetchError::Malformed("page must be at least 1".to_string()));
        }

        let expected = total.div_ceil(page_size.max(1));
        if pages != expected {
            return Err(FetchError::Malformed(format!(
                "pages is {pages} but {total} records at {page_size} per page make {expected}"
            )));
        }

        // Go encodes an empty slice as `null`.
        let data = self.data.unwrap_or_default();
        if data.len() > page_size {
            return Err(FetchError::Malformed(format!(
                "page holds {} records, more than the page size of {page_size}",
                data.len()
            )));
        }

        Ok(PageResponse {
            data,
            total,
            page,
            pages,
        })
    }
}

fn non_negative(field: &str, value: i64) -> Result<usize, FetchError> {
    usize::try_from(value)
        .map_err(|_| FetchError::Malformed(format!("{field} must not be negative, got {value}")))
}
