//! Session authentication module.
//!
//! Provides an extractor for resolving the logged-in user on protected
//! endpoints.

use actix_session::SessionExt;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::constants::SESSION_USER_ID_KEY;
use crate::errors::AppError;
use crate::store::UserDirectory;

/// Authenticated user extractor for protecting endpoints.
///
/// Add this to handler parameters to require a logged-in session. The caller
/// identity is the opaque `user_id` stored in the signed session cookie; the
/// handler never touches the cookie itself.
///
/// The ID is checked against the user directory so a stale cookie from a
/// previous process (the directory is in-memory only) does not authenticate.
pub struct AuthenticatedUser {
    pub user_id: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let directory = match req.app_data::<web::Data<UserDirectory>>() {
            Some(directory) => directory,
            None => {
                return ready(Err(AppError::internal("User directory not available")));
            }
        };

        let session = req.get_session();
        let user_id = match session.get::<String>(SESSION_USER_ID_KEY) {
            Ok(Some(id)) if !id.is_empty() => id,
            Ok(_) => return ready(Err(AppError::not_logged_in())),
            Err(e) => {
                log::warn!("Failed to read session: {}", e);
                return ready(Err(AppError::not_logged_in()));
            }
        };

        match directory.get(&user_id) {
            Ok(Some(_)) => ready(Ok(AuthenticatedUser { user_id })),
            Ok(None) => ready(Err(AppError::not_logged_in())),
            Err(e) => ready(Err(e)),
        }
    }
}
