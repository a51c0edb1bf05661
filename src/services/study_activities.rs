//! Services backing the study activity launcher.

use std::sync::Arc;

use crate::api::ApiDataset;
use crate::domain::entity::Entity;
use crate::domain::study_activity::StudyActivity;
use crate::dto::list::{ListPageData, ListQuery};
use crate::fetch::cache::CachedFetcher;
use crate::fetch::local::LocalPages;
use crate::services::lists::load_list_page;
use crate::state::PortalState;

/// Loads one page of study activities.
///
/// The backend returns every activity at once; the list is sliced into
/// pages locally and then goes through the same controller as every other
/// list.
pub async fn load_study_activities(
    state: &PortalState,
    query: &ListQuery,
) -> ListPageData<StudyActivity> {
    let fetcher = CachedFetcher::new(
        LocalPages::new(
            ApiDataset::new(state.api.clone(), Entity::StudyActivities),
            state.page_size(),
        ),
        Arc::clone(&state.caches.study_activities),
        Entity::StudyActivities,
    );
    load_list_page(fetcher, query).await
}
