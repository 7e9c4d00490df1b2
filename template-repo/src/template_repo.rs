use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

pub const DEFAULT_VERSION: i32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Template {
    pub id: i32,
    pub code: String,
    pub language: String,
    pub content: String,
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

/// Body of create and update requests. On update the `code` is ignored, a template's code
/// never changes after creation.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct NewTemplate {
    #[validate(length(min = 1, max = 100), custom(function = "no_nul_chars"))]
    pub code: String,
    #[validate(length(max = 10), custom(function = "no_nul_chars"))]
    pub language: String,
    #[validate(length(min = 1), custom(function = "no_nul_chars"))]
    pub content: String,
    #[serde(default = "default_version")]
    pub version: i32,
}

fn default_version() -> i32 {
    DEFAULT_VERSION
}

/// Postgres text columns cannot store U+0000.
fn no_nul_chars(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character"));
    }
    Ok(())
}

impl NewTemplate {
    pub fn new(code: String, language: String, content: String, version: i32) -> Self {
        NewTemplate {
            code,
            language,
            content,
            version,
        }
    }

    /// Like [Validate::validate] but ignores `code`, which an update never writes.
    pub fn validate_update(&self) -> Result<(), ValidationErrors> {
        let Err(mut errors) = self.validate() else {
            return Ok(());
        };
        errors.errors_mut().remove("code");
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_template(self, id: i32, created_at: DateTime<Utc>) -> Template {
        Template {
            id,
            code: self.code,
            language: self.language,
            content: self.content,
            version: self.version,
            created_at,
        }
    }
}

#[derive(Error, Debug)]
pub enum TemplateRepoError {
    #[error("Template {0} not found")]
    TemplateNotFound(String),
    #[error("Template {0} already exists")]
    TemplateAlreadyExists(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait TemplateRepo: Sync + Send {
    /// Creates the backing table if it does not exist yet.
    async fn create_schema(&self) -> Result<(), TemplateRepoError>;

    async fn create_template(&self, new_template: NewTemplate)
        -> Result<Template, TemplateRepoError>;

    async fn get_templates(&self) -> Result<Vec<Template>, TemplateRepoError>;

    async fn get_template(&self, code: &str) -> Result<Template, TemplateRepoError>;

    async fn update_template(
        &self,
        code: &str,
        template: NewTemplate,
    ) -> Result<Template, TemplateRepoError>;

    async fn delete_template(&self, code: &str) -> Result<Template, TemplateRepoError>;
}
