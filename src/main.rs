//! # TinyLink
//!
//! A small URL shortener built with Rust and Actix-web.
//!
//! ## Features
//! - Create short links from long URLs
//! - Redirect short links to original URLs
//! - Cookie-session user accounts with bcrypt credentials
//! - Per-owner link management (list, update, delete)
//! - Rate limiting for abuse protection
//! - Prometheus metrics

mod config;
mod constants;
mod errors;
mod handlers;
mod metrics;
mod models;
mod session;
mod store;
#[cfg(test)]
mod test_utils;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Key, SameSite};
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{info, warn};

use crate::config::Config;
use crate::constants::SESSION_COOKIE_NAME;
use crate::metrics::AppMetrics;
use crate::store::{LinkRegistry, UserDirectory};

/// Derive the session signing key from the configured secret, falling back to
/// an ephemeral key. Ephemeral keys invalidate all sessions on restart.
fn session_key(config: &Config) -> Key {
    match &config.session_secret {
        Some(secret) if secret.len() >= 32 => Key::derive_from(secret.as_bytes()),
        Some(_) => {
            warn!("SESSION_SECRET is shorter than 32 bytes; using an ephemeral key instead");
            Key::generate()
        }
        None => {
            warn!("SESSION_SECRET not set; sessions will not survive a restart");
            Key::generate()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load configuration
    let config = Config::from_env();

    // Initialize in-memory stores. All state lives here and is lost on
    // shutdown.
    let registry = web::Data::new(LinkRegistry::new(config.token_length));
    let directory = web::Data::new(UserDirectory::new(config.token_length));

    let key = session_key(&config);

    // Register business metrics unless disabled
    let metrics_registry = if config.metrics_enabled {
        let prometheus_registry = prometheus::Registry::new();
        let app_metrics = AppMetrics::new(&prometheus_registry)
            .expect("Failed to register application metrics");
        info!("Prometheus metrics enabled at /metrics");
        Some((prometheus_registry, app_metrics))
    } else {
        None
    };

    info!(
        "Starting TinyLink server at http://{}:{}",
        config.host, config.port
    );
    info!("API Documentation:");
    info!("   POST /api/auth/register     - Register with email and password");
    info!("   POST /api/auth/login        - Log in, start a session");
    info!("   POST /api/auth/logout       - End the current session");
    info!("   GET  /api/auth/me           - Current user details");
    info!("   POST /api/links             - Create a short link");
    info!("   GET  /api/links             - List your links");
    info!("   GET  /api/links/{{token}}     - Get link details");
    info!("   PUT  /api/links/{{token}}     - Update a link's destination");
    info!("   DELETE /api/links/{{token}}   - Delete a link");
    info!("   GET  /u/{{token}}             - Redirect to the original URL");

    // Capture bind address before moving config into closure
    let bind_addr = format!("{}:{}", config.host, config.port);

    // Configure rate limiting: 60 requests per minute per IP
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(1) // Refill rate: 1 token per second
        .burst_size(60) // Allow bursts up to 60 requests
        .finish()
        .expect("Failed to create rate limiter configuration");

    info!("Rate limiting enabled: 60 requests/minute per IP");
    info!(
        "Session cookies: name={}, secure={}, ttl={}h",
        SESSION_COOKIE_NAME, config.cookie_secure, config.session_ttl_hours
    );

    // Start HTTP server
    HttpServer::new(move || {
        let session_middleware =
            SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
                .cookie_name(SESSION_COOKIE_NAME.to_string())
                .cookie_secure(config.cookie_secure)
                .cookie_http_only(true)
                .cookie_same_site(SameSite::Lax)
                .session_lifecycle(
                    PersistentSession::default()
                        .session_ttl(Duration::hours(config.session_ttl_hours)),
                )
                .build();

        let mut app = App::new()
            // Add in-memory stores to app state
            .app_data(registry.clone())
            .app_data(directory.clone())
            .app_data(web::Data::new(config.clone()))
            // Enable rate limiting middleware
            .wrap(Governor::new(&governor_conf))
            // Session middleware runs before handlers so extractors see it
            .wrap(session_middleware)
            // Enable logger middleware
            .wrap(Logger::default());

        if let Some((prometheus_registry, app_metrics)) = &metrics_registry {
            app = app
                .app_data(web::Data::new(prometheus_registry.clone()))
                .app_data(web::Data::new(app_metrics.clone()));
        }

        // Configure routes
        app.configure(handlers::configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
