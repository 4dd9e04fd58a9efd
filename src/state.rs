//! Shared application state
//!
//! Wires the storage handle into the resolver the handlers call.

use crate::database::UrlStore;
use crate::resolver::AliasResolver;

/// Application state shared across all request handlers
///
/// Built once at startup around an explicitly opened store and handed to
/// the router; handlers receive it through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub resolver: AliasResolver,
}

impl AppState {
    pub fn new(store: UrlStore) -> Self {
        Self {
            resolver: AliasResolver::new(store),
        }
    }
}
