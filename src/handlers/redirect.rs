//! Redirect endpoint handler.

use actix_web::{get, web, HttpResponse};

use crate::errors::AppError;
use crate::metrics::AppMetrics;
use crate::store::LinkRegistry;

/// Redirect to the original URL
///
/// This is the main functionality - when someone visits /u/{token}, they get
/// redirected to the stored long URL. No authentication required.
#[get("/u/{token}")]
pub(super) async fn redirect_to_long_url(
    registry: web::Data<LinkRegistry>,
    metrics: Option<web::Data<AppMetrics>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let token = path.into_inner();
    let link = registry.get(&token)?;

    if let Some(m) = metrics {
        m.record_redirect();
    }

    log::info!("Redirecting {} -> {}", token, link.long_url);

    Ok(HttpResponse::Found()
        .append_header(("Location", link.long_url))
        .finish())
}
