use std::sync::Arc;

use rstest::*;
use serde_json::{json, Value};
use template_repo::template_repo::TemplateRepo;
use tracing::info;
use tracing::Level;

macro_rules! build_app {
    ($template_repo:expr) => {{
        build_app!(
            $template_repo,
            template_lib::config::DEFAULT_MAX_BODY_SIZE
        )
    }};
    ($template_repo:expr, $max_body_size:expr) => {{
        let app = actix_web::App::new()
            .wrap(template_lib::tracing::create_middleware())
            .configure(template_lib::app_config_func(
                $template_repo,
                $max_body_size,
            ));
        tracing::info!("Built app");
        app
    }};
}

macro_rules! create_template {
    (&$service:ident, $new_template:expr) => {{
        let request = actix_web::test::TestRequest::post()
            .uri("/api/v1/templates/")
            .set_json(&$new_template)
            .to_request();
        let response = actix_web::test::call_service(&$service, request).await;
        assert!(
            response.status().is_success(),
            "Got {} response when creating template",
            response.status()
        );
        actix_web::test::read_body_json(response).await
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repo() -> Arc<dyn TemplateRepo> {
    template_repo::mem_repo::create_repo()
}

#[allow(dead_code)]
pub fn welcome_email(version: i32) -> Value {
    json!({
        "code": "welcome_email",
        "language": "en",
        "content": "Hi {name}",
        "version": version,
    })
}
