//! Services for listing study sessions and recording their progress.

use std::sync::Arc;

use crate::api::ApiFetcher;
use crate::domain::entity::{Entity, Mutation};
use crate::domain::study_session::{NewStudySession, NewWordReview, StudySession, WordReview};
use crate::domain::types::StudySessionId;
use crate::dto::list::{ListPageData, ListQuery};
use crate::fetch::cache::CachedFetcher;
use crate::forms::study_sessions::{CreateStudySessionForm, ReviewForm};
use crate::services::ServiceResult;
use crate::services::lists::load_list_page;
use crate::state::PortalState;

pub async fn load_study_sessions(
    state: &PortalState,
    query: &ListQuery,
) -> ListPageData<StudySession> {
    let fetcher = CachedFetcher::new(
        ApiFetcher::new(state.api.clone(), Entity::StudySessions),
        Arc::clone(&state.caches.study_sessions),
        Entity::StudySessions,
    );
    load_list_page(fetcher, query).await
}

/// Validates the form and opens a study session on the backend.
pub async fn create_study_session(
    state: &PortalState,
    form: CreateStudySessionForm,
) -> ServiceResult<StudySession> {
    let payload = NewStudySession::try_from(form)?;

    let session = state.api.create_study_session(&payload).await?;
    state.caches.invalidate(Mutation::StudySessionCreated);

    log::info!(
        "Started study session {} for group {}",
        session.id,
        session.group_id
    );
    Ok(session)
}

/// Records one answer of session `session_id`.
pub async fn log_review(
    state: &PortalState,
    session_id: i32,
    form: ReviewForm,
) -> ServiceResult<WordReview> {
    let session_id = StudySessionId::new(session_id)?;
    let payload = NewWordReview::try_from(form)?;

    let review = state.api.log_review(session_id, &payload).await?;
    state.caches.invalidate(Mutation::ReviewLogged);

    Ok(review)
}
