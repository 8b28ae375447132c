//! The user directory: registered users and credential verification.

use std::collections::HashMap;
use std::sync::RwLock;

use super::helpers::{generate_token, now_timestamp};
use crate::constants::{BCRYPT_COST, MAX_TOKEN_GENERATION_RETRIES};
use crate::errors::AppError;
use crate::models::User;

/// Registered users keyed by user ID.
///
/// User IDs are drawn from the same token generator as link tokens but live
/// in their own map, so the two namespaces never collide. Passwords are
/// stored only as salted bcrypt hashes.
pub struct UserDirectory {
    users: RwLock<HashMap<String, User>>,
    id_length: usize,
}

impl UserDirectory {
    /// Create an empty directory generating IDs of the given length
    pub fn new(id_length: usize) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            id_length,
        }
    }

    /// Find a user by email
    ///
    /// Linear scan comparing emails for exact string equality; returns the
    /// first match or `None`.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal("user directory lock poisoned"))?;

        Ok(users.values().find(|user| user.email == email).cloned())
    }

    /// Look up a user by ID
    pub fn get(&self, user_id: &str) -> Result<Option<User>, AppError> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal("user directory lock poisoned"))?;

        Ok(users.get(user_id).cloned())
    }

    /// Register a new user
    ///
    /// The password is hashed with bcrypt before it is stored; the plaintext
    /// is never kept.
    pub fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        if email.is_empty() {
            return Err(AppError::missing_field("email"));
        }
        if password.is_empty() {
            return Err(AppError::missing_field("password"));
        }

        let password_hash = bcrypt::hash(password, BCRYPT_COST)?;

        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::internal("user directory lock poisoned"))?;

        if users.values().any(|user| user.email == email) {
            return Err(AppError::duplicate_email(email));
        }

        let mut id = generate_token(self.id_length);
        let mut attempts = 0;
        while users.contains_key(&id) {
            attempts += 1;
            if attempts >= MAX_TOKEN_GENERATION_RETRIES {
                return Err(AppError::internal("Failed to generate unique user ID"));
            }
            id = generate_token(self.id_length);
        }

        let user = User {
            id: id.clone(),
            email: email.to_string(),
            password_hash,
            created_at: now_timestamp(),
        };
        users.insert(id.clone(), user.clone());

        log::info!("Registered new user: {} (ID: {})", email, id);
        Ok(user)
    }

    /// Verify a login attempt against the stored credential
    pub fn verify(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .find_by_email(email)?
            .ok_or_else(|| AppError::unknown_email(email))?;

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AppError::wrong_password());
        }

        Ok(user)
    }

    /// Total number of registered users
    pub fn len(&self) -> usize {
        self.users.read().map(|u| u.len()).unwrap_or(0)
    }

    /// Whether the directory holds no users
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
