use crate::template_repo::TemplateRepo;
use std::sync::Arc;

mod template_repo;

pub use template_repo::MemTemplateRepo;

pub fn create_repo() -> Arc<dyn TemplateRepo> {
    Arc::new(MemTemplateRepo::new())
}
