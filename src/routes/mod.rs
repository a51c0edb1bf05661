//! HTTP handlers of the portal.

use actix_web::{HttpResponse, http::header, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

pub mod groups;
pub mod main;
pub mod study_activities;
pub mod study_sessions;
pub mod words;

/// Registers every portal route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index)
        .service(words::words)
        .service(words::show_word)
        .service(groups::groups)
        .service(groups::group_words)
        .service(study_activities::study_activities)
        .service(study_sessions::study_sessions)
        .service(study_sessions::create_study_session)
        .service(study_sessions::log_review);
}

/// Maps a flash message level to the CSS class used by alerts.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every page: pending alerts and the active menu entry.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
