//! Prometheus metrics exposition endpoint.

use actix_web::{get, web, HttpResponse};
use prometheus::{Encoder, Registry, TextEncoder};

use crate::errors::AppError;

/// Expose registered metrics in the Prometheus text format
///
/// Returns 404 when the metrics registry is not wired in (METRICS_ENABLED=false).
#[get("/metrics")]
pub(super) async fn metrics(
    registry: Option<web::Data<Registry>>,
) -> Result<HttpResponse, AppError> {
    let registry = registry.ok_or_else(|| AppError::NotFound("Metrics are disabled".into()))?;

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(&registry.gather(), &mut buffer)
        .map_err(|e| AppError::internal(format!("Failed to encode metrics: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer))
}
