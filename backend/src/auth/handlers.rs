//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for signup, login, logout,
//! and profile retrieval, parse request data, and interact with the
//! `auth::service` for core business logic.

use crate::api::common::{service_error_to_http, validation_error_response};
use crate::auth::middleware::token_from_headers;
use crate::auth::models::*;
use crate::auth::service::AccountService;
use crate::config::Config;
use crate::database::models::User;
use axum::{
    extract::{Extension, Json},
    http::{HeaderMap, StatusCode},
    response::Json as ResponseJson,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use sqlx::SqlitePool;
use validator::Validate;

/// Handle account registration.
#[axum::debug_handler]
pub async fn signup(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Config>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, ResponseJson<AuthResponse>), (StatusCode, String)> {
    if let Err(errors) = payload.validate() {
        return Err(validation_error_response(errors));
    }

    let service = AccountService::new(&pool, &config);

    match service.signup(payload).await {
        Ok(response) => Ok((StatusCode::CREATED, ResponseJson(response))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login. On success the session token is also set as a cookie.
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Config>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, ResponseJson<AuthResponse>), (StatusCode, String)> {
    if let Err(errors) = payload.validate() {
        return Err(validation_error_response(errors));
    }

    let service = AccountService::new(&pool, &config);

    match service.login(payload).await {
        Ok(response) => {
            let jar = jar.add(
                Cookie::build(("token", response.token.clone()))
                    .path("/")
                    .build(),
            );
            Ok((jar, ResponseJson(response)))
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Return the identity attached by the auth middleware.
#[axum::debug_handler]
pub async fn profile(Extension(user): Extension<User>) -> ResponseJson<User> {
    ResponseJson(user)
}

/// Handle logout: clear the session cookie and revoke the presented token.
///
/// The token may arrive in the cookie, the bearer header, or (if the client
/// already dropped it) neither; a missing token just skips revocation.
#[axum::debug_handler]
pub async fn logout(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Config>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<(CookieJar, ResponseJson<serde_json::Value>), (StatusCode, String)> {
    if let Some(token) = token_from_headers(&headers) {
        let service = AccountService::new(&pool, &config);
        if let Err(error) = service.revoke_token(&token).await {
            return Err(service_error_to_http(error));
        }
    }

    let jar = jar.remove(Cookie::build("token").path("/").build());

    Ok((
        jar,
        ResponseJson(serde_json::json!({
            "message": "Logged out successfully"
        })),
    ))
}
