//! API layer - HTTP endpoint handlers organized by domain.

mod health;
mod metrics;
mod routes;
mod template;

// Re-export all handlers for use in server/app.rs
pub use health::{health, stats};
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
pub use template::{
    create_template, delete_template, get_template, list_templates, render_template,
    template_variables, update_template, RenderTemplateRequest, TemplateErrorResponse,
};
