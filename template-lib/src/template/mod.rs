use actix_web::{web, Scope};

mod handlers;

pub fn template_service() -> Scope {
    web::scope("/api/v1/templates")
        .service(handlers::create_template)
        .service(handlers::get_all_templates)
        .service(handlers::get_template)
        .service(handlers::update_template)
        .service(handlers::delete_template)
}
