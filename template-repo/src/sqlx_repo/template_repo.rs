use crate::sqlx_repo::SQLxRepo;
use crate::template_repo::{NewTemplate, Template, TemplateRepo, TemplateRepoError};
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{query, query_as};
use tracing::instrument;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS templates (
    id SERIAL PRIMARY KEY,
    code VARCHAR(100) NOT NULL UNIQUE,
    language VARCHAR(10) NOT NULL DEFAULT 'en',
    content TEXT NOT NULL,
    version INTEGER NOT NULL DEFAULT 1,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

#[derive(sqlx::FromRow)]
struct TemplateEntry {
    id: i32,
    code: String,
    language: String,
    content: String,
    version: i32,
    created_at: DateTime<Utc>,
}

impl From<TemplateEntry> for Template {
    fn from(value: TemplateEntry) -> Self {
        Template {
            id: value.id,
            code: value.code,
            language: value.language,
            content: value.content,
            version: value.version,
            created_at: value.created_at,
        }
    }
}

#[async_trait]
impl TemplateRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn create_schema(&self) -> Result<(), TemplateRepoError> {
        query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .context("Unable to create templates table")?;
        Ok(())
    }

    #[instrument(skip(self, new_template), fields(code = %new_template.code))]
    async fn create_template(
        &self,
        new_template: NewTemplate,
    ) -> Result<Template, TemplateRepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Unable to start transaction")?;

        // The unique constraint on code decides between concurrent creates.
        let template_entry: Option<TemplateEntry> = query_as(
            "INSERT INTO templates(code, language, content, version) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (code) DO NOTHING \
             RETURNING id, code, language, content, version, created_at",
        )
        .bind(&new_template.code)
        .bind(&new_template.language)
        .bind(&new_template.content)
        .bind(new_template.version)
        .fetch_optional(&mut *tx)
        .await
        .with_context(|| format!("Unable to insert template {}", new_template.code))?;

        let Some(template_entry) = template_entry else {
            return Err(TemplateRepoError::TemplateAlreadyExists(new_template.code));
        };
        tx.commit().await.context("Unable to commit transaction")?;

        Ok(template_entry.into())
    }

    #[instrument(skip(self))]
    async fn get_templates(&self) -> Result<Vec<Template>, TemplateRepoError> {
        let template_entries: Vec<TemplateEntry> = query_as(
            "SELECT id, code, language, content, version, created_at FROM templates ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Unable to retrieve templates")?;

        Ok(template_entries.into_iter().map(|t| t.into()).collect())
    }

    #[instrument(skip(self))]
    async fn get_template(&self, code: &str) -> Result<Template, TemplateRepoError> {
        let template_entry: Option<TemplateEntry> = query_as(
            "SELECT id, code, language, content, version, created_at FROM templates WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to get template {}", code))?;

        template_entry
            .map(|t| t.into())
            .ok_or_else(|| TemplateRepoError::TemplateNotFound(code.to_owned()))
    }

    #[instrument(skip(self, template))]
    async fn update_template(
        &self,
        code: &str,
        template: NewTemplate,
    ) -> Result<Template, TemplateRepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Unable to start transaction")?;

        let template_entry: Option<TemplateEntry> = query_as(
            "UPDATE templates SET language = $1, content = $2, version = $3 WHERE code = $4 \
             RETURNING id, code, language, content, version, created_at",
        )
        .bind(&template.language)
        .bind(&template.content)
        .bind(template.version)
        .bind(code)
        .fetch_optional(&mut *tx)
        .await
        .with_context(|| format!("Unable to update template {}", code))?;

        let Some(template_entry) = template_entry else {
            return Err(TemplateRepoError::TemplateNotFound(code.to_owned()));
        };
        tx.commit().await.context("Unable to commit transaction")?;

        Ok(template_entry.into())
    }

    #[instrument(skip(self))]
    async fn delete_template(&self, code: &str) -> Result<Template, TemplateRepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Unable to start transaction")?;

        let template_entry: Option<TemplateEntry> = query_as(
            "DELETE FROM templates WHERE code = $1 \
             RETURNING id, code, language, content, version, created_at",
        )
        .bind(code)
        .fetch_optional(&mut *tx)
        .await
        .with_context(|| format!("Unable to delete template {}", code))?;

        let Some(template_entry) = template_entry else {
            return Err(TemplateRepoError::TemplateNotFound(code.to_owned()));
        };
        tx.commit().await.context("Unable to commit transaction")?;

        Ok(template_entry.into())
    }
}
