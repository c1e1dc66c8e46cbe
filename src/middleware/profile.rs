// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile scope middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;

/// Cookie carrying the profile id.
pub const PROFILE_COOKIE: &str = "wildcord_profile";

/// Header checked when the cookie is absent.
pub const PROFILE_HEADER: &str = "x-wildcord-profile";

const MAX_PROFILE_ID_LEN: usize = 64;

/// The profile every record of this request is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileScope {
    pub profile_id: String,
}

/// Whether `id` is a usable profile id: 1-64 chars of `[A-Za-z0-9_-]`.
pub fn is_valid_profile_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_PROFILE_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Middleware that requires a valid profile scope.
pub async fn require_profile(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Try cookie first, then header
    let profile_id = match jar.get(PROFILE_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => request
            .headers()
            .get(PROFILE_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .ok_or(AppError::Unauthorized)?,
    };

    if !is_valid_profile_id(&profile_id) {
        tracing::debug!(len = profile_id.len(), "Rejected malformed profile id");
        return Err(AppError::Unauthorized);
    }

    request.extensions_mut().insert(ProfileScope { profile_id });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id_rules() {
        assert!(is_valid_profile_id("pack-7"));
        assert!(is_valid_profile_id("A_b-9"));
        assert!(is_valid_profile_id(&"x".repeat(64)));

        assert!(!is_valid_profile_id(""));
        assert!(!is_valid_profile_id(&"x".repeat(65)));
        assert!(!is_valid_profile_id("a/b"));
        assert!(!is_valid_profile_id("with space"));
        assert!(!is_valid_profile_id("émile"));
    }
}
