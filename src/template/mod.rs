//! Email template system.
//!
//! This module provides:
//! - Template definition with variable placeholders (${variable})
//! - In-memory template storage with CRUD operations
//! - Variable substitution engine for rendering subject and body strings
//!
//! # Example
//!
//! ```ignore
//! let store = TemplateStore::new();
//!
//! // Create a template
//! let template = EmailTemplate {
//!     id: "report-approved".to_string(),
//!     name: "Report Approved".to_string(),
//!     subject: "Your ${month} report was approved".to_string(),
//!     body: "Dear ${name}, your work report for ${month} has been approved.".to_string(),
//!     description: None,
//!     created_at: Utc::now(),
//!     updated_at: Utc::now(),
//! };
//!
//! store.create(template)?;
//!
//! // Render with variables
//! let mut variables = HashMap::new();
//! variables.insert("name".to_string(), "Tanaka".to_string());
//! variables.insert("month".to_string(), "July".to_string());
//!
//! let rendered = store.render("report-approved", &variables)?;
//! ```

mod store;
mod substitution;
mod types;

pub use store::{create_template_store, TemplateStore};
pub use substitution::{extract_variables, is_valid, substitute};
pub use types::{
    CreateTemplateRequest, EmailTemplate, RenderedEmail, TemplateError, TemplateListResponse,
    TemplateResult, TemplateVariablesResponse, UpdateTemplateRequest,
};
