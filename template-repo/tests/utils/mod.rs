pub mod generator;

use std::env;
use std::sync::Arc;
use template_repo::template_repo::TemplateRepo;

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

/// Builds the repo under test. SQLx cases are `#[ignore]`d and run with
/// `TEST_DATABASE_URL=... cargo test -- --include-ignored`.
pub async fn build_repo(repo_type: RepoType) -> Arc<dyn TemplateRepo> {
    match repo_type {
        RepoType::SQLx => {
            let database_url =
                env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
            let repo = template_repo::sqlx_repo::create_repo(&database_url, 4)
                .await
                .unwrap();
            repo.create_schema().await.unwrap();
            repo
        }
        RepoType::Mem => template_repo::mem_repo::create_repo(),
    }
}
