use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::server::{api_key_auth, AppState};

use super::health::{health, stats};
use super::metrics::prometheus_metrics;
use super::template::{
    create_template, delete_template, get_template, list_templates, render_template,
    template_variables, update_template,
};

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health & Stats
        .route("/health", get(health))
        .route("/stats", get(stats))
        // Prometheus metrics
        .route("/metrics", get(prometheus_metrics))
        // Template endpoints
        .nest(
            "/api/v1",
            Router::new()
                // CRUD
                .route("/templates", post(create_template).get(list_templates))
                .route(
                    "/templates/{id}",
                    get(get_template)
                        .put(update_template)
                        .delete(delete_template),
                )
                // Introspection & rendering
                .route("/templates/{id}/variables", get(template_variables))
                .route("/templates/{id}/render", post(render_template))
                // API key guard (no-op when no key is configured)
                .route_layer(middleware::from_fn_with_state(state, api_key_auth)),
        )
}
