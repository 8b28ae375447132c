//! The link registry: short token to long URL mappings and their owners.

use std::collections::HashMap;
use std::sync::RwLock;

use super::helpers::{generate_token, now_timestamp};
use crate::constants::MAX_TOKEN_GENERATION_RETRIES;
use crate::errors::AppError;
use crate::models::ShortLink;

/// Authoritative set of short-to-long URL mappings.
///
/// All operations take the lock exactly once, so the existence check and the
/// subsequent mutation of a create/update/delete are atomic with respect to
/// concurrent handlers.
pub struct LinkRegistry {
    links: RwLock<HashMap<String, ShortLink>>,
    token_length: usize,
}

impl LinkRegistry {
    /// Create an empty registry generating tokens of the given length
    pub fn new(token_length: usize) -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            token_length,
        }
    }

    /// Create a new shortened link owned by `owner_id`
    ///
    /// Generates a fresh token, retrying on collision so an existing entry is
    /// never silently overwritten.
    pub fn create(&self, long_url: &str, owner_id: &str) -> Result<ShortLink, AppError> {
        if owner_id.is_empty() {
            return Err(AppError::not_logged_in());
        }

        let mut links = self
            .links
            .write()
            .map_err(|_| AppError::internal("link registry lock poisoned"))?;

        let mut token = generate_token(self.token_length);
        let mut attempts = 0;
        while links.contains_key(&token) {
            attempts += 1;
            if attempts >= MAX_TOKEN_GENERATION_RETRIES {
                return Err(AppError::internal("Failed to generate unique token"));
            }
            token = generate_token(self.token_length);
        }

        let link = ShortLink {
            token: token.clone(),
            long_url: long_url.to_string(),
            owner_id: owner_id.to_string(),
            created_at: now_timestamp(),
        };
        links.insert(token.clone(), link.clone());

        log::info!("Created link: {} -> {} (owner: {})", token, long_url, owner_id);
        Ok(link)
    }

    /// Look up a link by token (for redirects - no ownership check)
    pub fn get(&self, token: &str) -> Result<ShortLink, AppError> {
        let links = self
            .links
            .read()
            .map_err(|_| AppError::internal("link registry lock poisoned"))?;

        links
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::link_not_found(token))
    }

    /// List all links owned by `owner_id`
    ///
    /// Linear scan over all entries; never returns another owner's link.
    pub fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ShortLink>, AppError> {
        let links = self
            .links
            .read()
            .map_err(|_| AppError::internal("link registry lock poisoned"))?;

        Ok(links
            .values()
            .filter(|link| link.owner_id == owner_id)
            .cloned()
            .collect())
    }

    /// Replace a link's destination URL (checks ownership)
    pub fn update(
        &self,
        token: &str,
        new_long_url: &str,
        caller_id: &str,
    ) -> Result<ShortLink, AppError> {
        let mut links = self
            .links
            .write()
            .map_err(|_| AppError::internal("link registry lock poisoned"))?;

        let link = links
            .get_mut(token)
            .ok_or_else(|| AppError::link_not_found(token))?;

        if link.owner_id != caller_id {
            return Err(AppError::not_owner(token));
        }

        link.long_url = new_long_url.to_string();
        log::info!("Updated link: {} -> {} (owner: {})", token, new_long_url, caller_id);
        Ok(link.clone())
    }

    /// Remove a link (checks ownership)
    pub fn delete(&self, token: &str, caller_id: &str) -> Result<(), AppError> {
        let mut links = self
            .links
            .write()
            .map_err(|_| AppError::internal("link registry lock poisoned"))?;

        let link = links
            .get(token)
            .ok_or_else(|| AppError::link_not_found(token))?;

        if link.owner_id != caller_id {
            return Err(AppError::not_owner(token));
        }

        links.remove(token);
        log::info!("Deleted link: {} (owner: {})", token, caller_id);
        Ok(())
    }

    /// Total number of links in the registry
    pub fn len(&self) -> usize {
        self.links.read().map(|l| l.len()).unwrap_or(0)
    }

    /// Whether the registry holds no links
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
