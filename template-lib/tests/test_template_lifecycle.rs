extern crate serde_json;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::{json, Value};
use template_repo::template_repo::{Template, TemplateRepo};
use tracing::instrument;
use utils::repo;
use utils::tracing_setup;
use utils::welcome_email;

#[macro_use]
mod utils;

#[instrument(skip(repo))]
#[rstest]
#[actix_rt::test]
async fn test_template_lifecycle(_tracing_setup: &(), repo: Arc<dyn TemplateRepo>) {
    let service = test::init_service(build_app!(repo)).await;

    let request = TestRequest::post()
        .uri("/api/v1/templates/")
        .set_json(welcome_email(1))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created: Template = test::read_body_json(response).await;
    assert_eq!(created.id, 1);

    let request = TestRequest::post()
        .uri("/api/v1/templates/")
        .set_json(welcome_email(1))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"detail": "Template code already exists"}));

    let request = TestRequest::get()
        .uri("/api/v1/templates/welcome_email")
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Template = test::read_body_json(response).await;
    assert_eq!(fetched, created);

    let request = TestRequest::put()
        .uri("/api/v1/templates/welcome_email")
        .set_json(welcome_email(2))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Template = test::read_body_json(response).await;
    assert_eq!(updated.version, 2);
    assert_eq!(updated.id, created.id);

    let request = TestRequest::delete()
        .uri("/api/v1/templates/welcome_email")
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));

    let request = TestRequest::get()
        .uri("/api/v1/templates/welcome_email")
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
