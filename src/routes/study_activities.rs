use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::list::ListQuery;
use crate::routes::{base_context, render_template};
use crate::services::study_activities as study_activities_service;
use crate::state::PortalState;

#[get("/study_activities")]
pub async fn study_activities(
    params: web::Query<ListQuery>,
    state: web::Data<PortalState>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = study_activities_service::load_study_activities(&state, &params).await;

    let mut context = base_context(&flash_messages, "study_activities");
    context.insert("list", &data.list);
    context.insert("pager", &data.pager);

    render_template(&tera, "study_activities/index.html", &context)
}
