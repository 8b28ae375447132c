//! Link endpoint handlers: create, list, show, update, delete.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::config::Config;
use crate::errors::AppError;
use crate::metrics::AppMetrics;
use crate::models::{
    CreateLinkRequest, LinkListResponse, LinkResponse, MessageResponse, UpdateLinkRequest,
};
use crate::session::AuthenticatedUser;
use crate::store::LinkRegistry;

/// Create a new short link
#[post("/links")]
pub(super) async fn create_link(
    user: AuthenticatedUser,
    registry: web::Data<LinkRegistry>,
    config: web::Data<Config>,
    metrics: Option<web::Data<AppMetrics>>,
    body: web::Json<CreateLinkRequest>,
) -> Result<HttpResponse, AppError> {
    let link = registry.create(&body.long_url, &user.user_id)?;

    if let Some(m) = metrics {
        m.record_link_created();
    }

    Ok(HttpResponse::Created().json(LinkResponse::from_link(link, &config.base_url)))
}

/// List all links owned by the authenticated user
#[get("/links")]
pub(super) async fn list_links(
    user: AuthenticatedUser,
    registry: web::Data<LinkRegistry>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let links = registry.list_by_owner(&user.user_id)?;

    let link_responses: Vec<LinkResponse> = links
        .into_iter()
        .map(|l| LinkResponse::from_link(l, &config.base_url))
        .collect();

    let response = LinkListResponse {
        total: link_responses.len(),
        links: link_responses,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Get link details by token (owner only)
#[get("/links/{token}")]
pub(super) async fn get_link(
    user: AuthenticatedUser,
    registry: web::Data<LinkRegistry>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let token = path.into_inner();
    let link = registry.get(&token)?;

    if link.owner_id != user.user_id {
        return Err(AppError::not_owner(&token));
    }

    Ok(HttpResponse::Ok().json(LinkResponse::from_link(link, &config.base_url)))
}

/// Replace a link's destination URL (owner only)
#[put("/links/{token}")]
pub(super) async fn update_link(
    user: AuthenticatedUser,
    registry: web::Data<LinkRegistry>,
    config: web::Data<Config>,
    path: web::Path<String>,
    body: web::Json<UpdateLinkRequest>,
) -> Result<HttpResponse, AppError> {
    let token = path.into_inner();
    let link = registry.update(&token, &body.long_url, &user.user_id)?;

    Ok(HttpResponse::Ok().json(LinkResponse::from_link(link, &config.base_url)))
}

/// Delete a link (owner only)
#[delete("/links/{token}")]
pub(super) async fn delete_link(
    user: AuthenticatedUser,
    registry: web::Data<LinkRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let token = path.into_inner();
    registry.delete(&token, &user.user_id)?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Link deleted successfully")))
}
