//! Middleware for protecting authenticated routes.
//!
//! Validates the session token carried by a request (cookie or bearer
//! header) against the revocation list, the token signature and expiry, and
//! the user store. On success the resolved user is attached to the request;
//! every failure mode is a plain 401 with no further detail.

use crate::config::Config;
use crate::repositories::revoked_token_repository::RevokedTokenRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use sqlx::SqlitePool;

/// Session token extraction shared by the middleware and the logout
/// handler: the `token` cookie wins, falling back to a bearer header.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get("token") {
        return Some(cookie.value().to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

/// Session authentication middleware.
///
/// A request without a token is rejected before any store access.
pub async fn require_auth(mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let token = token_from_headers(request.headers()).ok_or(StatusCode::UNAUTHORIZED)?;

    let pool = request
        .extensions()
        .get::<SqlitePool>()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    let config = request
        .extensions()
        .get::<Config>()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    // Revocation overrides an otherwise-valid token.
    let revoked = RevokedTokenRepository::new(&pool)
        .contains(&token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    if revoked {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let claims = JwtUtils::from_config(&config)
        .verify(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let user = UserRepository::new(&pool)
        .find_by_id(claims.user_id())
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
