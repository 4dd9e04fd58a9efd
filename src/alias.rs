//! Alias derivation
//!
//! A submitted URL gets a short alias either from the caller or from the
//! first label of its host: `https://example.com` becomes `exampl`.

use url::Url;

use crate::error::AppError;
use crate::model::{MAX_ALIAS_LEN, MAX_URL_LEN};

/// Checks the length constraints on an incoming submission
pub fn validate_lengths(url: &str, alias: Option<&str>) -> Result<(), AppError> {
    if url.chars().count() > MAX_URL_LEN {
        return Err(AppError::Validation(format!(
            "url must be at most {} characters",
            MAX_URL_LEN
        )));
    }

    if let Some(alias) = alias {
        if alias.chars().count() > MAX_ALIAS_LEN {
            return Err(AppError::Validation(format!(
                "shorten_url must be at most {} characters",
                MAX_ALIAS_LEN
            )));
        }
    }

    Ok(())
}

/// Parses a submitted URL, requiring it to be absolute and to carry a host
pub fn parse_target(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw).map_err(|e| AppError::InvalidUrl(format!("{raw}: {e}")))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(AppError::InvalidUrl(format!("{raw}: missing host"))),
    }
}

/// Picks the alias for `url`
///
/// A non-empty `supplied` alias is returned unchanged. Otherwise the host is
/// cut at its first `.` and truncated to [`MAX_ALIAS_LEN`] characters.
pub fn derive_alias(url: &Url, supplied: Option<&str>) -> Result<String, AppError> {
    if let Some(alias) = supplied.filter(|a| !a.is_empty()) {
        return Ok(alias.to_string());
    }

    let host = url
        .host_str()
        .ok_or_else(|| AppError::InvalidUrl(format!("{url}: missing host")))?;

    let label = host.split('.').next().unwrap_or_default();
    let alias: String = label.chars().take(MAX_ALIAS_LEN).collect();

    if alias.is_empty() {
        return Err(AppError::InvalidUrl(format!(
            "{url}: host does not yield an alias"
        )));
    }

    Ok(alias)
}
