use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::list::ListQuery;
use crate::routes::{base_context, render_template};
use crate::fetch::errors::FetchError;
use crate::services::{ServiceError, words as words_service};
use crate::state::PortalState;

#[get("/words")]
pub async fn words(
    params: web::Query<ListQuery>,
    state: web::Data<PortalState>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = words_service::load_words(&state, &params).await;

    let mut context = base_context(&flash_messages, "words");
    context.insert("list", &data.list);
    context.insert("pager", &data.pager);

    render_template(&tera, "words/index.html", &context)
}

#[get("/words/{word_id}")]
pub async fn show_word(
    word_id: web::Path<i32>,
    state: web::Data<PortalState>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match words_service::load_word(&state, word_id.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "words");
            context.insert("word", &data.word);
            context.insert("review_count", &data.review_count);

            render_template(&tera, "words/show.html", &context)
        }
        Err(
            ServiceError::TypeConstraint(_)
            | ServiceError::Backend(FetchError::Status { status: 404, .. }),
        ) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load word: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
