//! Auth endpoint handlers: registration, login, and logout.

use actix_session::Session;
use actix_web::{get, post, web, HttpResponse};

use crate::constants::SESSION_USER_ID_KEY;
use crate::errors::AppError;
use crate::metrics::AppMetrics;
use crate::models::{LoginRequest, MessageResponse, RegisterRequest, UserResponse};
use crate::session::AuthenticatedUser;
use crate::store::UserDirectory;

/// Register a new user and start a session
#[post("/register")]
pub(super) async fn register(
    directory: web::Data<UserDirectory>,
    metrics: Option<web::Data<AppMetrics>>,
    session: Session,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = directory.register(&body.email, &body.password)?;

    session
        .insert(SESSION_USER_ID_KEY, &user.id)
        .map_err(|e| AppError::internal(format!("Failed to start session: {}", e)))?;

    if let Some(m) = metrics {
        m.record_user_registered();
    }

    Ok(HttpResponse::Created().json(UserResponse::from_user(&user)))
}

/// Log in with email and password
#[post("/login")]
pub(super) async fn login(
    directory: web::Data<UserDirectory>,
    metrics: Option<web::Data<AppMetrics>>,
    session: Session,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = match directory.verify(&body.email, &body.password) {
        Ok(user) => user,
        Err(e) => {
            if let Some(m) = metrics {
                match e {
                    AppError::UnknownEmail(_) => m.record_login_attempt("unknown_email"),
                    AppError::WrongPassword(_) => m.record_login_attempt("wrong_password"),
                    _ => {}
                }
            }
            return Err(e);
        }
    };

    session
        .insert(SESSION_USER_ID_KEY, &user.id)
        .map_err(|e| AppError::internal(format!("Failed to start session: {}", e)))?;

    if let Some(m) = metrics {
        m.record_login_attempt("success");
    }

    log::info!("User logged in: {} (ID: {})", user.email, user.id);
    Ok(HttpResponse::Ok().json(UserResponse::from_user(&user)))
}

/// Clear the caller's session
#[post("/logout")]
pub(super) async fn logout(session: Session) -> Result<HttpResponse, AppError> {
    session.purge();
    Ok(HttpResponse::Ok().json(MessageResponse::new("Logged out")))
}

/// Get the currently logged-in user
#[get("/me")]
pub(super) async fn me(
    user: AuthenticatedUser,
    directory: web::Data<UserDirectory>,
) -> Result<HttpResponse, AppError> {
    let user = directory
        .get(&user.user_id)?
        .ok_or_else(AppError::not_logged_in)?;

    Ok(HttpResponse::Ok().json(UserResponse::from_user(&user)))
}
