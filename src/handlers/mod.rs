//! HTTP request handlers for the URL shortener API.
//!
//! Defines all route handlers and configures the routing table.

mod auth;
mod health;
mod links;
mod metrics;
mod redirect;

use actix_web::web;

/// Configure all application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Auth routes (register/login/logout are public)
            .service(
                web::scope("/auth")
                    .service(auth::register)
                    .service(auth::login)
                    .service(auth::logout)
                    .service(auth::me),
            )
            // Link routes (all protected)
            .service(links::create_link)
            .service(links::list_links)
            .service(links::get_link)
            .service(links::update_link)
            .service(links::delete_link),
    )
    .service(health::health_check)
    .service(metrics::metrics)
    // Public redirect resolution
    .service(redirect::redirect_to_long_url);
}
