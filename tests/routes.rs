use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::cookie::Key;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use lang_portal::api::ApiClient;
use lang_portal::routes::{self, alert_level_to_str};
use lang_portal::state::PortalState;
use mockito::{Matcher, ServerGuard};
use serde_json::json;
use tera::Tera;

macro_rules! portal {
    ($server:expr) => {{
        let message_store = CookieMessageStore::builder(Key::generate()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();
        let tera = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).unwrap();
        let api = ApiClient::new(&$server.url(), Duration::from_secs(5), 10).unwrap();

        test::init_service(
            App::new()
                .wrap(message_framework)
                .configure(routes::configure)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(PortalState::new(api, None))),
        )
        .await
    }};
}

async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).unwrap()
}

async fn mock_words_page(server: &mut ServerGuard, hits: usize) -> mockito::Mock {
    server
        .mock("GET", "/words")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(
            json!({
                "data": [
                    {"id": 1, "german": "Hund", "english": "dog"},
                    {"id": 2, "german": "Katze", "english": "cat"}
                ],
                "total": 2,
                "page": 1,
                "pages": 1
            })
            .to_string(),
        )
        .expect(hits)
        .create_async()
        .await
}

#[::core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

/// Ensures the root page sends visitors to the word list.
#[actix_web::test]
async fn index_redirects_to_words() {
    let server = mockito::Server::new_async().await;
    let app = portal!(server);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/words");
}

/// Ensures the word list filters the fetched page by the search text.
#[actix_web::test]
async fn word_list_applies_search() {
    let mut server = mockito::Server::new_async().await;
    let _words = mock_words_page(&mut server, 1).await;
    let app = portal!(server);

    let req = test::TestRequest::get().uri("/words?q=HUN").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Hund"));
    assert!(!body.contains("Katze"));
    assert!(body.contains(r#"value="HUN""#));
}

/// Ensures a backend failure still renders the page with the error text.
#[actix_web::test]
async fn backend_failure_renders_error_block() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/groups")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("backend down")
        .create_async()
        .await;
    let app = portal!(server);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/groups").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Failed to load data"));
    assert!(body.contains("backend down"));
    assert!(body.contains(r#"name="q""#));
}

/// Ensures repeated page views are served from the cache.
#[actix_web::test]
async fn repeated_views_hit_the_cache() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_words_page(&mut server, 1).await;
    let app = portal!(server);

    for _ in 0..2 {
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/words").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    mock.assert_async().await;
}

/// Ensures a single word renders with its review totals and unknown words are not found.
#[actix_web::test]
async fn word_detail_page() {
    let mut server = mockito::Server::new_async().await;
    let _word = server
        .mock("GET", "/words/5")
        .with_status(200)
        .with_body(
            json!({
                "id": 5,
                "german": "Apfel",
                "english": "apple",
                "class": "noun",
                "correct_count": 4,
                "wrong_count": 2
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/words/6")
        .with_status(404)
        .with_body("word not found")
        .create_async()
        .await;
    let app = portal!(server);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/words/5").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Apfel"));
    assert!(body.contains("apple"));
    assert!(body.contains("noun"));
    assert!(body.contains(r#"<dd class="col-sm-9">6</dd>"#));

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/words/6").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/words/0").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

/// Ensures the words of a group are listed and invalid group ids are not found.
#[actix_web::test]
async fn group_words_page() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/groups/4")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(
            json!({
                "data": [{"id": 9, "german": "rot", "english": "red"}],
                "total": 1,
                "page": 1,
                "pages": 1
            })
            .to_string(),
        )
        .create_async()
        .await;
    let app = portal!(server);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/groups/4").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Words in group #4"));
    assert!(body.contains("rot"));

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/groups/0").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

/// Ensures study activities are paginated locally from the full list.
#[actix_web::test]
async fn study_activities_are_paginated_locally() {
    let mut server = mockito::Server::new_async().await;
    let activities: Vec<_> = (1..=12)
        .map(|id| json!({"id": id, "name": format!("Activity {id}"), "url": "http://localhost"}))
        .collect();
    let _mock = server
        .mock("GET", "/study_activities")
        .with_status(200)
        .with_body(json!(activities).to_string())
        .create_async()
        .await;
    let app = portal!(server);

    let req = test::TestRequest::get()
        .uri("/study_activities?page=2")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Activity 11"));
    assert!(body.contains("Activity 12"));
    assert!(!body.contains("Activity 3<"));
}

/// Ensures starting a session redirects to the session list and refreshes it.
#[actix_web::test]
async fn create_study_session_invalidates_session_pages() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/study_sessions")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(json!({"data": [], "total": 0, "page": 1, "pages": 0}).to_string())
        .expect(2)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/study_sessions")
        .match_body(Matcher::Json(json!({"group_id": 3, "study_activity_id": 1})))
        .with_status(201)
        .with_body(json!({"id": 7, "group_id": 3, "study_activity_id": 1}).to_string())
        .create_async()
        .await;
    let app = portal!(server);

    let view = || test::TestRequest::get().uri("/study_sessions").to_request();
    test::call_service(&app, view()).await;
    test::call_service(&app, view()).await;

    let req = test::TestRequest::post()
        .uri("/study_sessions")
        .set_form([("group_id", "3"), ("study_activity_id", "1")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/study_sessions"
    );

    test::call_service(&app, view()).await;

    create.assert_async().await;
    list.assert_async().await;
}

/// Ensures invalid session forms never reach the backend.
#[actix_web::test]
async fn invalid_session_form_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/study_sessions")
        .expect(0)
        .create_async()
        .await;
    let app = portal!(server);

    let req = test::TestRequest::post()
        .uri("/study_sessions")
        .set_form([("group_id", "0"), ("study_activity_id", "1")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/study_activities"
    );
    create.assert_async().await;
}

/// Ensures an answer is posted to the backend and the user is sent back.
#[actix_web::test]
async fn review_is_recorded() {
    let mut server = mockito::Server::new_async().await;
    let review = server
        .mock("POST", "/study_sessions/7/review")
        .match_body(Matcher::Json(json!({"word_id": 2, "correct": false})))
        .with_status(201)
        .with_body(
            json!({"id": 1, "word_id": 2, "study_session_id": 7, "correct": false}).to_string(),
        )
        .create_async()
        .await;
    let app = portal!(server);

    let req = test::TestRequest::post()
        .uri("/study_sessions/7/review")
        .set_form([("word_id", "2"), ("correct", "false")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    review.assert_async().await;
}
