use crate::error::HandlerError;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use template_repo::template_repo::{NewTemplate, TemplateRepo};
use tracing::info;
use tracing_actix_web::RootSpan;
use validator::Validate;

#[derive(Serialize)]
struct DeleteResponse {
    success: bool,
    message: &'static str,
}

#[post("/")]
pub async fn create_template(
    template_repo: web::Data<Arc<dyn TemplateRepo>>,
    root_span: RootSpan,
    new_template: web::Json<NewTemplate>,
) -> Result<impl Responder, HandlerError> {
    let new_template = new_template.into_inner();
    root_span.record("template_code", new_template.code.as_str());
    new_template.validate()?;

    let template = template_repo.create_template(new_template).await?;
    info!(template_id = template.id, "Created template");
    Ok(HttpResponse::Ok().json(template))
}

#[get("/")]
pub async fn get_all_templates(
    template_repo: web::Data<Arc<dyn TemplateRepo>>,
) -> Result<impl Responder, HandlerError> {
    let templates = template_repo.get_templates().await?;
    Ok(HttpResponse::Ok().json(templates))
}

#[get("/{code}")]
pub async fn get_template(
    template_repo: web::Data<Arc<dyn TemplateRepo>>,
    root_span: RootSpan,
    code: web::Path<String>,
) -> Result<impl Responder, HandlerError> {
    let code = code.into_inner();
    root_span.record("template_code", code.as_str());

    let template = template_repo.get_template(&code).await?;
    Ok(HttpResponse::Ok().json(template))
}

#[put("/{code}")]
pub async fn update_template(
    template_repo: web::Data<Arc<dyn TemplateRepo>>,
    root_span: RootSpan,
    code: web::Path<String>,
    updated_template: web::Json<NewTemplate>,
) -> Result<impl Responder, HandlerError> {
    let code = code.into_inner();
    root_span.record("template_code", code.as_str());
    let updated_template = updated_template.into_inner();
    updated_template.validate_update()?;

    let template = template_repo
        .update_template(&code, updated_template)
        .await?;
    Ok(HttpResponse::Ok().json(template))
}

#[delete("/{code}")]
pub async fn delete_template(
    template_repo: web::Data<Arc<dyn TemplateRepo>>,
    root_span: RootSpan,
    code: web::Path<String>,
) -> Result<impl Responder, HandlerError> {
    let code = code.into_inner();
    root_span.record("template_code", code.as_str());

    let template = template_repo.delete_template(&code).await?;
    info!(template_id = template.id, "Deleted template");
    Ok(HttpResponse::Ok().json(DeleteResponse {
        success: true,
        message: "Template deleted successfully",
    }))
}
