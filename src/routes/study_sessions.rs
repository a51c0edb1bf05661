use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::list::ListQuery;
use crate::forms::study_sessions::{CreateStudySessionForm, ReviewForm};
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, study_sessions as study_sessions_service};
use crate::state::PortalState;

#[get("/study_sessions")]
pub async fn study_sessions(
    params: web::Query<ListQuery>,
    state: web::Data<PortalState>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = study_sessions_service::load_study_sessions(&state, &params).await;

    let mut context = base_context(&flash_messages, "study_sessions");
    context.insert("list", &data.list);
    context.insert("pager", &data.pager);

    render_template(&tera, "study_sessions/index.html", &context)
}

#[post("/study_sessions")]
pub async fn create_study_session(
    state: web::Data<PortalState>,
    web::Form(form): web::Form<CreateStudySessionForm>,
) -> impl Responder {
    match study_sessions_service::create_study_session(&state, form).await {
        Ok(session) => {
            FlashMessage::success(format!("Study session #{} started.", session.id)).send();
            redirect("/study_sessions")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/study_activities")
        }
        Err(err) => {
            log::error!("Failed to start a study session: {err}");
            FlashMessage::error(format!("Could not start the study session: {err}")).send();
            redirect("/study_activities")
        }
    }
}

#[post("/study_sessions/{session_id}/review")]
pub async fn log_review(
    session_id: web::Path<i32>,
    state: web::Data<PortalState>,
    web::Form(form): web::Form<ReviewForm>,
) -> impl Responder {
    match study_sessions_service::log_review(&state, session_id.into_inner(), form).await {
        Ok(review) => {
            let verdict = if review.correct { "correct" } else { "wrong" };
            FlashMessage::success(format!("Answer recorded as {verdict}.")).send();
            redirect("/study_sessions")
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
            redirect("/study_sessions")
        }
        Err(err) => {
            log::error!("Failed to record the answer: {err}");
            FlashMessage::error(format!("Could not record the answer: {err}")).send();
            redirect("/study_sessions")
        }
    }
}
