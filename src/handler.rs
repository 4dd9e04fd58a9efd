//! HTTP request handlers for the URL shortener API
//!
//! Handlers stay thin: they extract the request, call the
//! [`AliasResolver`](crate::resolver::AliasResolver) and shape the response.
//! Failures are returned as [`AppError`] and rendered by its `IntoResponse`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tracing::{debug, instrument, warn};

use crate::error::AppError;
use crate::model::{CreateRequest, DetailResponse, ListParams, ShortenedUrl};
use crate::state::AppState;

/// Creates a new short URL
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example123.com",
///   "shorten_url": "ex"  // Optional
/// }
/// ```
///
/// # Response
///
/// - **201 Created** - the stored record
/// - **409 Conflict** - URL or alias already registered
/// - **422 Unprocessable Entity** - malformed body, bad URL or over-long field
#[instrument(skip(state, payload))]
pub async fn create_short_url(
    State(state): State<AppState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected request body");
        AppError::Validation(rejection.body_text())
    })?;

    let record = state.resolver.submit(&payload)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Lists stored URLs in creation order
///
/// `GET /` returns every record. `?page=&limit=` narrows it to one page;
/// a query that does not parse is answered with **422**.
#[instrument(skip(state, params))]
pub async fn list_urls(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<ShortenedUrl>>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        warn!(error = %rejection, "Rejected list query");
        AppError::Validation(rejection.body_text())
    })?;
    debug!(page = ?params.page, limit = ?params.limit, "Listing URLs");

    let records = state.resolver.list(&params)?;
    Ok(Json(records))
}

/// Redirects an alias to its original URL
///
/// # Response
///
/// - **307 Temporary Redirect** - `Location` set to the original URL
/// - **404 Not Found** - alias does not exist
#[instrument(skip(state))]
pub async fn redirect_url(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.resolver.resolve(&alias)?;
    Ok(Redirect::temporary(&url))
}

/// Deletes a short URL by alias
///
/// # Response
///
/// - **200 OK** - `{"detail": "URL deleted successfully"}`
/// - **404 Not Found** - alias does not exist
#[instrument(skip(state))]
pub async fn delete_short_url(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DetailResponse>, AppError> {
    state.resolver.remove(&alias)?;
    Ok(Json(DetailResponse {
        detail: "URL deleted successfully".to_string(),
    }))
}
