//! Health check and statistics endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::metrics;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub templates: TemplateHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct TemplateHealthResponse {
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub templates: TemplateStats,
    pub renders: RenderStats,
}

#[derive(Debug, Serialize)]
pub struct TemplateStats {
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct RenderStats {
    pub total_rendered: u64,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime_seconds = state.start_time.elapsed().as_secs();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        templates: TemplateHealthResponse {
            total: state.template_store.count(),
        },
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        templates: TemplateStats {
            total: state.template_store.count(),
        },
        renders: RenderStats {
            total_rendered: metrics::RENDERS_TOTAL.get(),
        },
    })
}
