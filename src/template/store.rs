//! Template storage with CRUD operations

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

use crate::metrics::TemplateMetrics;

use super::substitution::{extract_variables, substitute};
use super::types::{
    EmailTemplate, RenderedEmail, TemplateError, TemplateResult, TemplateVariablesResponse,
    UpdateTemplateRequest,
};

/// In-memory template storage
pub struct TemplateStore {
    templates: DashMap<String, EmailTemplate>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create a new template store
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Create a new template
    pub fn create(&self, template: EmailTemplate) -> TemplateResult<EmailTemplate> {
        if let Err(e) = template.validate() {
            TemplateMetrics::record_rejected(&e);
            return Err(e);
        }

        if self.templates.contains_key(&template.id) {
            return Err(TemplateError::AlreadyExists(template.id));
        }

        self.templates.insert(template.id.clone(), template.clone());
        TemplateMetrics::set_templates_total(self.templates.len());

        Ok(template)
    }

    /// Get a template by ID
    pub fn get(&self, id: &str) -> TemplateResult<EmailTemplate> {
        self.templates
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// List all templates
    pub fn list(&self) -> Vec<EmailTemplate> {
        self.templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Update an existing template
    pub fn update(&self, id: &str, updates: UpdateTemplateRequest) -> TemplateResult<EmailTemplate> {
        let mut template = self.get(id)?;

        if let Some(name) = updates.name {
            template.name = name;
        }

        if let Some(subject) = updates.subject {
            template.subject = subject;
        }

        if let Some(body) = updates.body {
            template.body = body;
        }

        if let Some(description) = updates.description {
            template.description = description;
        }

        template.updated_at = Utc::now();
        if let Err(e) = template.validate() {
            TemplateMetrics::record_rejected(&e);
            return Err(e);
        }

        self.templates.insert(id.to_string(), template.clone());

        Ok(template)
    }

    /// Delete a template by ID
    pub fn delete(&self, id: &str) -> TemplateResult<()> {
        self.templates
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))?;

        TemplateMetrics::set_templates_total(self.templates.len());
        Ok(())
    }

    /// Check if a template exists
    pub fn exists(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// List the placeholder names used by a template
    pub fn variables(&self, id: &str) -> TemplateResult<TemplateVariablesResponse> {
        let template = self.get(id)?;

        Ok(TemplateVariablesResponse {
            id: template.id,
            subject: extract_variables(&template.subject),
            body: extract_variables(&template.body),
        })
    }

    /// Render a template with variables
    pub fn render(
        &self,
        id: &str,
        variables: &HashMap<String, String>,
    ) -> TemplateResult<RenderedEmail> {
        let template = self.get(id)?;

        let rendered = RenderedEmail {
            subject: substitute(&template.subject, variables),
            body: substitute(&template.body, variables),
        };
        TemplateMetrics::record_render();

        Ok(rendered)
    }
}

/// Create an Arc-wrapped template store
pub fn create_template_store() -> Arc<TemplateStore> {
    Arc::new(TemplateStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_template(id: &str) -> EmailTemplate {
        EmailTemplate {
            id: id.to_string(),
            name: "Attendance Reminder".to_string(),
            subject: "Attendance for ${date}".to_string(),
            body: "Hello ${name}, please submit your attendance for ${date}.".to_string(),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_store_create_and_get() {
        let store = TemplateStore::new();

        let created = store.create(sample_template("attendance-reminder")).unwrap();
        assert_eq!(created.id, "attendance-reminder");

        let retrieved = store.get("attendance-reminder").unwrap();
        assert_eq!(retrieved.name, "Attendance Reminder");
    }

    #[test]
    fn test_store_create_duplicate() {
        let store = TemplateStore::new();

        store.create(sample_template("duplicate")).unwrap();
        assert!(matches!(
            store.create(sample_template("duplicate")),
            Err(TemplateError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_store_create_rejects_invalid_subject() {
        let store = TemplateStore::new();

        let template = EmailTemplate {
            subject: "no placeholders".to_string(),
            ..sample_template("bad-subject")
        };

        assert!(matches!(
            store.create(template),
            Err(TemplateError::InvalidSubject(_))
        ));
        assert!(!store.exists("bad-subject"));
    }

    #[test]
    fn test_store_update() {
        let store = TemplateStore::new();

        store.create(sample_template("update-test")).unwrap();

        let updates = UpdateTemplateRequest {
            name: Some("Updated".to_string()),
            subject: Some("Reminder for ${date}".to_string()),
            body: None,
            description: Some(Some("Sent on the last business day".to_string())),
        };

        let updated = store.update("update-test", updates).unwrap();
        assert_eq!(updated.name, "Updated");
        assert_eq!(updated.subject, "Reminder for ${date}");
        assert_eq!(
            updated.description.as_deref(),
            Some("Sent on the last business day")
        );
    }

    #[test]
    fn test_store_update_rejects_unbalanced_body() {
        let store = TemplateStore::new();

        store.create(sample_template("guarded")).unwrap();

        let updates = UpdateTemplateRequest {
            name: None,
            subject: None,
            body: Some("Hello ${name".to_string()),
            description: None,
        };

        assert!(matches!(
            store.update("guarded", updates),
            Err(TemplateError::InvalidBody(_))
        ));

        // Stored template is unchanged after a rejected update
        let stored = store.get("guarded").unwrap();
        assert_eq!(stored.body, sample_template("guarded").body);
    }

    #[test]
    fn test_store_delete() {
        let store = TemplateStore::new();

        store.create(sample_template("delete-test")).unwrap();
        assert!(store.exists("delete-test"));

        store.delete("delete-test").unwrap();
        assert!(!store.exists("delete-test"));
    }

    #[test]
    fn test_store_list() {
        let store = TemplateStore::new();

        for i in 0..3 {
            store.create(sample_template(&format!("template-{}", i))).unwrap();
        }

        let list = store.list();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_store_variables() {
        let store = TemplateStore::new();

        store.create(sample_template("vars-test")).unwrap();

        let vars_response = store.variables("vars-test").unwrap();
        assert_eq!(vars_response.subject, vec!["date"]);
        assert_eq!(vars_response.body, vec!["name", "date"]);
    }

    #[test]
    fn test_render_template() {
        let store = TemplateStore::new();

        store.create(sample_template("render-test")).unwrap();

        let rendered = store
            .render(
                "render-test",
                &vars(&[("name", "Yamada"), ("date", "2024-07-31")]),
            )
            .unwrap();

        assert_eq!(rendered.subject, "Attendance for 2024-07-31");
        assert_eq!(
            rendered.body,
            "Hello Yamada, please submit your attendance for 2024-07-31."
        );
    }

    #[test]
    fn test_render_missing_variables_dropped() {
        let store = TemplateStore::new();

        store.create(sample_template("render-partial")).unwrap();

        let rendered = store
            .render("render-partial", &vars(&[("name", "Yamada")]))
            .unwrap();

        assert_eq!(rendered.subject, "Attendance for ");
        assert_eq!(
            rendered.body,
            "Hello Yamada, please submit your attendance for ."
        );
    }

    #[test]
    fn test_render_missing_template() {
        let store = TemplateStore::new();

        assert!(matches!(
            store.render("nope", &HashMap::new()),
            Err(TemplateError::NotFound(_))
        ));
    }
}
