//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that request/response models live with the API
//! layer and may differ from these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user account as returned by the default read projection.
///
/// The password hash is deliberately absent: queries that produce this type
/// never select it, so it cannot leak into a serialized response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Live-connection identifier, set when the user has an active
    /// realtime session.
    pub socket_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User row including the stored password hash.
///
/// Only the login path uses this projection; it is never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithPassword {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub socket_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserWithPassword {
    /// Drops the password hash, yielding the public projection.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            socket_id: self.socket_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Data required to insert a new user row.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// A session token that has been explicitly invalidated.
#[derive(Debug, Clone, FromRow)]
pub struct RevokedToken {
    pub token: String,
    pub created_at: DateTime<Utc>,
}
