mod template_repo;

use crate::template_repo::TemplateRepo;
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tracing::info;

pub struct SQLxRepo {
    pool: Pool<Postgres>,
}

impl SQLxRepo {
    pub fn new(pool: Pool<Postgres>) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

/// Connects a pool of at most `max_pool_size` connections. The pool lives as long as the
/// returned repo.
pub async fn create_repo(
    database_url: &str,
    max_pool_size: u32,
) -> Result<Arc<dyn TemplateRepo>, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(database_url)
        .await
        .context("Unable to connect to database")?;
    info!(max_pool_size, "Database pool created");

    Ok(Arc::new(SQLxRepo::new(pool)))
}
