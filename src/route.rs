//! Route definitions for the URL shortener API
//!
//! This module configures all HTTP routes and maps them to their respective handlers.

use axum::routing::get;
use axum::Router;

use crate::handler::{create_short_url, delete_short_url, list_urls, redirect_url};
use crate::state::AppState;

/// Creates and configures the Axum application router with all routes
///
/// # Route Definitions
///
/// - `POST /` - Creates a new short URL
/// - `GET /` - Lists stored URLs
/// - `GET /{alias}` - Redirects to the original URL
/// - `DELETE /{alias}` - Deletes a short URL
///
/// # Example Usage
///
/// ```no_run
/// # use urlalias::database::UrlStore;
/// # use urlalias::route::create_app;
/// # use urlalias::state::AppState;
/// let store = UrlStore::open("urls.db").unwrap();
/// let app = create_app(AppState::new(store));
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_urls).post(create_short_url))
        .route("/{alias}", get(redirect_url).delete(delete_short_url))
        .with_state(state)
}
