pub mod template_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlx_repo;
