#[macro_use]
extern crate actix_web;

use actix_web::error::JsonPayloadError;
use actix_web::web::{Data, JsonConfig, ServiceConfig};
use actix_web::HttpRequest;
use std::sync::Arc;
use template_repo::template_repo::TemplateRepo;
use ::tracing::error;

use crate::error::HandlerError;

pub mod config;
mod error;
pub mod health;
pub mod template;
pub mod tracing;

/// Registers the repo, the JSON error handler and every route on an app. Request bodies larger
/// than `max_body_size` bytes are rejected with 413.
pub fn app_config_func(
    template_repo: Arc<dyn TemplateRepo>,
    max_body_size: usize,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(template_repo))
            .app_data(
                JsonConfig::default()
                    .limit(max_body_size)
                    .error_handler(json_error_handler),
            )
            .service(template::template_service())
            .service(health::health_service());
    }
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    error!(req_path = req.path(), %err);
    match err {
        JsonPayloadError::Deserialize(deserialize_err) => {
            HandlerError::Validation(deserialize_err.to_string()).into()
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HandlerError::PayloadTooLarge(err.to_string()).into()
        }
        _ => HandlerError::Validation(err.to_string()).into(),
    }
}
