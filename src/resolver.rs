//! Alias resolver
//!
//! Business logic behind the HTTP handlers: submissions, lookups, removals
//! and listings. Storage access goes through the injected [`UrlStore`].

use tracing::{debug, info};

use crate::alias::{derive_alias, parse_target, validate_lengths};
use crate::database::UrlStore;
use crate::error::AppError;
use crate::model::{CreateRequest, ListParams, ShortenedUrl};

#[derive(Clone)]
pub struct AliasResolver {
    store: UrlStore,
}

impl AliasResolver {
    pub fn new(store: UrlStore) -> Self {
        Self { store }
    }

    /// Registers `req.url` under the supplied or derived alias
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] / [`AppError::InvalidUrl`] for bad input
    /// - [`AppError::DuplicateUrl`] when the URL is already registered
    /// - [`AppError::DuplicateAlias`] when the alias is already taken
    pub fn submit(&self, req: &CreateRequest) -> Result<ShortenedUrl, AppError> {
        let supplied = req.shorten_url.as_deref();
        validate_lengths(&req.url, supplied)?;

        let target = parse_target(&req.url)?;
        let alias = derive_alias(&target, supplied)?;
        debug!(url = %req.url, alias = %alias, "Resolved alias");

        // Stored verbatim: the URL index compares the string the client sent.
        let record = self.store.insert_unique(&req.url, &alias)?;
        info!(id = record.id, alias = %record.shorten_url, "Created short URL");
        Ok(record)
    }

    /// Returns the original URL behind `alias`
    pub fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.store
            .find_by_alias(alias)?
            .map(|record| record.url)
            .ok_or(AppError::NotFound)
    }

    pub fn remove(&self, alias: &str) -> Result<ShortenedUrl, AppError> {
        let removed = self.store.remove_by_alias(alias)?.ok_or(AppError::NotFound)?;
        info!(id = removed.id, alias = %alias, "Deleted short URL");
        Ok(removed)
    }

    pub fn list(&self, params: &ListParams) -> Result<Vec<ShortenedUrl>, AppError> {
        self.store.list(params.window())
    }
}
