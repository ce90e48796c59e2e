//! Prometheus metrics for the template service.
//!
//! This module provides metrics for monitoring template management:
//! - Stored template count
//! - Render counts
//! - Rejected create/update operations by reason

use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, Encoder, IntCounter,
    IntCounterVec, IntGauge, TextEncoder,
};

use crate::template::TemplateError;

/// Prefix for all metrics
const METRIC_PREFIX: &str = "kintai";

lazy_static! {
    /// Number of templates currently stored
    pub static ref TEMPLATES_TOTAL: IntGauge = register_int_gauge!(
        format!("{}_templates_total", METRIC_PREFIX),
        "Number of templates currently stored"
    ).unwrap();

    /// Total successful template renders
    pub static ref RENDERS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total successful template renders"
    ).unwrap();

    /// Rejected create/update operations by validation failure reason
    pub static ref TEMPLATES_REJECTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_templates_rejected_total", METRIC_PREFIX),
        "Template create/update operations rejected by validation",
        &["reason"]
    ).unwrap();
}

/// Encode all registered metrics in the Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording template metrics
pub struct TemplateMetrics;

impl TemplateMetrics {
    /// Update the stored template gauge
    pub fn set_templates_total(count: usize) {
        TEMPLATES_TOTAL.set(count as i64);
    }

    /// Record a successful render
    pub fn record_render() {
        RENDERS_TOTAL.inc();
    }

    /// Record a create/update rejected by validation
    pub fn record_rejected(err: &TemplateError) {
        let reason = match err {
            TemplateError::InvalidId(_) => "invalid_id",
            TemplateError::InvalidTemplate(_) => "invalid_template",
            TemplateError::InvalidSubject(_) => "invalid_subject",
            TemplateError::InvalidBody(_) => "invalid_body",
            TemplateError::NotFound(_) => "not_found",
            TemplateError::AlreadyExists(_) => "already_exists",
        };
        TEMPLATES_REJECTED_TOTAL.with_label_values(&[reason]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_metrics() {
        // Initialize some metrics first (lazy_static requires first access)
        TEMPLATES_TOTAL.set(1);

        // Verify encoding doesn't panic and contains expected prefix
        let result = encode_metrics();
        assert!(result.is_ok());
        let output = result.unwrap();
        assert!(output.contains("kintai_templates_total"));
    }

    #[test]
    fn test_template_metrics() {
        TemplateMetrics::set_templates_total(3);
        TemplateMetrics::record_render();
        TemplateMetrics::record_rejected(&TemplateError::InvalidSubject("test".to_string()));
        // Just verify no panics
    }
}
