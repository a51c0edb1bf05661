//! Services backing the group list and the words of a single group.

use std::sync::Arc;

use serde::Serialize;

use crate::api::ApiFetcher;
use crate::domain::entity::Entity;
use crate::domain::group::Group;
use crate::domain::types::GroupId;
use crate::domain::word::Word;
use crate::dto::list::{ListPageData, ListQuery};
use crate::fetch::cache::CachedFetcher;
use crate::services::ServiceResult;
use crate::services::lists::load_list_page;
use crate::state::PortalState;

/// Data required to render the words of one group.
#[derive(Debug, Serialize)]
pub struct GroupWordsPageData {
    pub group_id: GroupId,
    #[serde(flatten)]
    pub words: ListPageData<Word>,
}

pub async fn load_groups(state: &PortalState, query: &ListQuery) -> ListPageData<Group> {
    let fetcher = CachedFetcher::new(
        ApiFetcher::new(state.api.clone(), Entity::Groups),
        Arc::clone(&state.caches.groups),
        Entity::Groups,
    );
    load_list_page(fetcher, query).await
}

/// Loads one page of the words in group `group_id`.
pub async fn load_group_words(
    state: &PortalState,
    group_id: i32,
    query: &ListQuery,
) -> ServiceResult<GroupWordsPageData> {
    let group_id = GroupId::new(group_id)?;
    let entity = Entity::GroupWords(group_id);

    let fetcher = CachedFetcher::new(
        ApiFetcher::new(state.api.clone(), entity),
        Arc::clone(&state.caches.words),
        entity,
    );
    let words = load_list_page(fetcher, query).await;

    Ok(GroupWordsPageData { group_id, words })
}
