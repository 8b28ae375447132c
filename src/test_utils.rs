//! Shared helpers for unit and endpoint tests.
#![cfg(test)]

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use crate::config::Config;
use crate::constants::SESSION_COOKIE_NAME;
use crate::store::{LinkRegistry, UserDirectory};

pub fn test_config() -> Config {
    Config::default()
}

pub fn test_registry() -> LinkRegistry {
    LinkRegistry::new(6)
}

pub fn test_directory() -> UserDirectory {
    UserDirectory::new(6)
}

/// Session middleware with a throwaway signing key.
///
/// cookie_secure is off so plain-HTTP test requests carry the cookie.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_string())
        .cookie_secure(false)
        .build()
}

/// Pull the session cookie out of a response so it can be attached to
/// follow-up requests.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE_NAME)
        .map(|c| c.into_owned())
        .expect("response should set a session cookie")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_starts_empty() {
        assert!(test_registry().is_empty());
    }

    #[test]
    fn test_directory_starts_empty() {
        assert!(test_directory().is_empty());
    }

    #[test]
    fn test_config_has_defaults() {
        let config = test_config();
        assert_eq!(config.token_length, 6);
        assert!(!config.base_url.is_empty());
    }
}
