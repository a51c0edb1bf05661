//! Services backing the vocabulary list and word details.

use std::sync::Arc;

use serde::Serialize;

use crate::api::ApiFetcher;
use crate::domain::entity::Entity;
use crate::domain::types::WordId;
use crate::domain::word::Word;
use crate::dto::list::{ListPageData, ListQuery};
use crate::fetch::cache::CachedFetcher;
use crate::services::ServiceResult;
use crate::services::lists::load_list_page;
use crate::state::PortalState;

/// Loads one page of words, served from the page cache when possible.
pub async fn load_words(state: &PortalState, query: &ListQuery) -> ListPageData<Word> {
    let fetcher = CachedFetcher::new(
        ApiFetcher::new(state.api.clone(), Entity::Words),
        Arc::clone(&state.caches.words),
        Entity::Words,
    );
    load_list_page(fetcher, query).await
}

/// Data required to render a single word.
#[derive(Debug, Serialize)]
pub struct WordPageData {
    pub word: Word,
    pub review_count: u32,
}

/// Loads word `word_id` straight from the backend.
pub async fn load_word(state: &PortalState, word_id: i32) -> ServiceResult<WordPageData> {
    let word = state.api.get_word(WordId::new(word_id)?).await?;
    let review_count = word.review_count();

    Ok(WordPageData { word, review_count })
}
