use crate::template_repo::{NewTemplate, Template, TemplateRepo, TemplateRepoError};
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    templates: BTreeMap<i32, Template>,
    ids_by_code: HashMap<String, i32>,
    next_id: i32,
}

pub struct MemTemplateRepo {
    state: RwLock<State>,
}

impl MemTemplateRepo {
    pub fn new() -> Self {
        let state = State {
            templates: BTreeMap::new(),
            ids_by_code: HashMap::new(),
            next_id: 1,
        };
        MemTemplateRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemTemplateRepo {
    fn default() -> Self {
        MemTemplateRepo::new()
    }
}

#[async_trait]
impl TemplateRepo for MemTemplateRepo {
    async fn create_schema(&self) -> Result<(), TemplateRepoError> {
        Ok(())
    }

    async fn create_template(
        &self,
        new_template: NewTemplate,
    ) -> Result<Template, TemplateRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.ids_by_code.contains_key(&new_template.code) {
            return Err(TemplateRepoError::TemplateAlreadyExists(new_template.code));
        }

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let template = new_template.to_template(id, Utc::now());
        write_guard.ids_by_code.insert(template.code.clone(), id);
        write_guard.templates.insert(id, template.clone());

        Ok(template)
    }

    async fn get_templates(&self) -> Result<Vec<Template>, TemplateRepoError> {
        let read_guard = self.read_lock()?;
        Ok(read_guard.templates.values().cloned().collect())
    }

    async fn get_template(&self, code: &str) -> Result<Template, TemplateRepoError> {
        let read_guard = self.read_lock()?;

        let Some(id) = read_guard.ids_by_code.get(code) else {
            return Err(TemplateRepoError::TemplateNotFound(code.to_owned()));
        };
        let template = read_guard
            .templates
            .get(id)
            .expect("templates should have all the ids in ids_by_code");
        Ok(template.clone())
    }

    async fn update_template(
        &self,
        code: &str,
        template: NewTemplate,
    ) -> Result<Template, TemplateRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(id) = write_guard.ids_by_code.get(code).copied() else {
            return Err(TemplateRepoError::TemplateNotFound(code.to_owned()));
        };
        let existing = write_guard
            .templates
            .get_mut(&id)
            .expect("templates should have all the ids in ids_by_code");

        existing.language = template.language;
        existing.content = template.content;
        existing.version = template.version;

        Ok(existing.clone())
    }

    async fn delete_template(&self, code: &str) -> Result<Template, TemplateRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(id) = write_guard.ids_by_code.remove(code) else {
            return Err(TemplateRepoError::TemplateNotFound(code.to_owned()));
        };
        let template = write_guard
            .templates
            .remove(&id)
            .expect("template should exist if there is an entry in ids_by_code");
        Ok(template)
    }
}
