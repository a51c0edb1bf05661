//! DTOs shared by every list page.

use serde::{Deserialize, Serialize};

use crate::controller::ListView;
use crate::pagination::Pager;

/// Query parameters accepted by list pages.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Optional search string entered by the user.
    pub q: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

impl ListQuery {
    pub fn search(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}

/// Data required to render a list template.
#[derive(Debug, Serialize)]
pub struct ListPageData<R> {
    /// Filtered rows and status of the current page.
    pub list: ListView<R>,
    /// Page-number buttons spanning the server's page count.
    pub pager: Pager,
}

impl<R> ListPageData<R> {
    pub fn new(list: ListView<R>) -> Self {
        let pager = Pager::new(list.current_page, list.total_pages);
        Self { list, pager }
    }
}
