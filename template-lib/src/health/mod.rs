use actix_web::{web, HttpResponse, Responder, Scope};
use serde_json::json;

/// Liveness only, the store is not consulted.
#[get("/")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub fn health_service() -> Scope {
    web::scope("/health").service(health)
}
