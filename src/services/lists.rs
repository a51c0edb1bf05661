//! The one list flow shared by every list page.

use std::sync::Arc;

use crate::controller::ListController;
use crate::domain::search::{Searchable, matches_search};
use crate::dto::list::{ListPageData, ListQuery};
use crate::fetch::PageFetcher;

/// Mounts a controller on `fetcher`, opens the requested page and search,
/// and returns what the list template renders.
///
/// Fetch failures are part of the returned view rather than an error, so
/// the page always renders with its search and page controls.
pub async fn load_list_page<F>(fetcher: F, query: &ListQuery) -> ListPageData<F::Record>
where
    F: PageFetcher,
    F::Record: Searchable + Clone,
{
    let mut controller = ListController::new(Arc::new(fetcher), matches_search::<F::Record>);
    controller.open(query.search(), query.page()).await;
    ListPageData::new(controller.view())
}
