//! Database repository for user management operations.
//!
//! Provides persistence operations for the User entity. The default read
//! projection excludes the password hash; the login path requests it
//! explicitly via `find_by_email_with_password`.

use crate::database::models::{CreateUser, User, UserWithPassword};
use crate::errors::{ServiceError, ServiceResult};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

const USER_COLUMNS: &str = "id, name, email, socket_id, created_at, updated_at";

/// Repository for user database operations.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database.
    ///
    /// The UNIQUE constraint on `email` is the authoritative duplicate
    /// guard; a violation maps to `ServiceError::AlreadyExists` so that
    /// concurrent signups racing past the pre-check still fail cleanly.
    pub async fn create_user(&self, user: CreateUser) -> ServiceResult<User> {
        let now = Utc::now();

        let created = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, name, email, password_hash, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                ServiceError::already_exists("User")
            } else {
                ServiceError::Database { source: e.into() }
            }
        })?;

        Ok(created)
    }

    /// Retrieves a user by their unique identifier.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by email. Case-sensitive exact match.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by email including the stored password hash.
    /// Login is the only caller.
    pub async fn find_by_email_with_password(
        &self,
        email: &str,
    ) -> Result<Option<UserWithPassword>> {
        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, password_hash, socket_id, created_at, updated_at \
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Checks if an email already exists in the system.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(self.pool)
            .await?;

        Ok(count > 0)
    }
}
