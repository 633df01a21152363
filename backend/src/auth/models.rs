//! Data structures for authentication-related requests and responses.

use crate::database::models::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request payload
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, message = "Name must be 3 characters long"))]
    pub name: String,

    #[validate(
        email(message = "Invalid Email"),
        length(min = 5, message = "Email must be 5 characters long")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "Password length must be 6 characters long"))]
    pub password: String,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid Email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password length must be 6 characters long"))]
    pub password: String,
}

/// Response for signup and login: the session token plus the public user
/// projection (no password hash).
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
