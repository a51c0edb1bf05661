use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::list::ListQuery;
use crate::routes::{base_context, render_template};
use crate::services::{ServiceError, groups as groups_service};
use crate::state::PortalState;

#[get("/groups")]
pub async fn groups(
    params: web::Query<ListQuery>,
    state: web::Data<PortalState>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = groups_service::load_groups(&state, &params).await;

    let mut context = base_context(&flash_messages, "groups");
    context.insert("list", &data.list);
    context.insert("pager", &data.pager);

    render_template(&tera, "groups/index.html", &context)
}

#[get("/groups/{group_id}")]
pub async fn group_words(
    group_id: web::Path<i32>,
    params: web::Query<ListQuery>,
    state: web::Data<PortalState>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match groups_service::load_group_words(&state, group_id.into_inner(), &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "groups");
            context.insert("group_id", &data.group_id);
            context.insert("list", &data.words.list);
            context.insert("pager", &data.words.pager);

            render_template(&tera, "groups/show.html", &context)
        }
        Err(ServiceError::TypeConstraint(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load group words: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
