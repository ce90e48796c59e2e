//! Email template types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::substitution::is_valid;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid template ID: {0}")]
    InvalidId(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid subject template: {0}")]
    InvalidSubject(String),

    #[error("Invalid body template: {0}")]
    InvalidBody(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// An email template definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Unique template identifier (alphanumeric, dash, underscore)
    pub id: String,

    /// Human-readable template name
    pub name: String,

    /// Subject line template with ${variable} placeholders
    pub subject: String,

    /// Message body template with ${variable} placeholders
    pub body: String,

    /// Template description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl EmailTemplate {
    /// Validate the template
    pub fn validate(&self) -> TemplateResult<()> {
        // Validate ID
        if self.id.is_empty() || self.id.len() > 64 {
            return Err(TemplateError::InvalidId(
                "ID must be 1-64 characters".to_string(),
            ));
        }

        if !self
            .id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TemplateError::InvalidId(
                "ID must contain only alphanumeric, dash, or underscore".to_string(),
            ));
        }

        // Validate name
        if self.name.is_empty() || self.name.len() > 256 {
            return Err(TemplateError::InvalidTemplate(
                "Name must be 1-256 characters".to_string(),
            ));
        }

        // Subject and body must both be well-formed template strings
        if !is_valid(&self.subject) {
            return Err(TemplateError::InvalidSubject(
                "Subject must contain at least one ${variable} placeholder with balanced braces"
                    .to_string(),
            ));
        }

        if !is_valid(&self.body) {
            return Err(TemplateError::InvalidBody(
                "Body must contain at least one ${variable} placeholder with balanced braces"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// Request to create a new template
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    /// Unique template identifier
    pub id: String,

    /// Human-readable template name
    pub name: String,

    /// Subject line template with ${variable} placeholders
    pub subject: String,

    /// Message body template with ${variable} placeholders
    pub body: String,

    /// Template description (optional)
    pub description: Option<String>,
}

impl From<CreateTemplateRequest> for EmailTemplate {
    fn from(req: CreateTemplateRequest) -> Self {
        let now = Utc::now();
        EmailTemplate {
            id: req.id,
            name: req.name,
            subject: req.subject,
            body: req.body,
            description: req.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request to update an existing template
#[derive(Debug, Deserialize)]
pub struct UpdateTemplateRequest {
    /// Human-readable template name (optional)
    pub name: Option<String>,

    /// Subject line template (optional)
    pub subject: Option<String>,

    /// Message body template (optional)
    pub body: Option<String>,

    /// Template description (optional, use null to clear)
    pub description: Option<Option<String>>,
}

/// Response for listing templates
#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    /// List of templates
    pub templates: Vec<EmailTemplate>,

    /// Total count
    pub total: usize,
}

/// Placeholder names used by a template, per field
#[derive(Debug, Serialize)]
pub struct TemplateVariablesResponse {
    /// Template identifier
    pub id: String,

    /// Variable names in the subject, in source order
    pub subject: Vec<String>,

    /// Variable names in the body, in source order
    pub body: Vec<String>,
}

/// A rendered email ready for delivery
#[derive(Debug, Clone, Serialize)]
pub struct RenderedEmail {
    /// Rendered subject line
    pub subject: String,

    /// Rendered message body
    pub body: String,
}
