//! Database repository for the session-token revocation list.
//!
//! Tokens added here are rejected by the auth middleware even while still
//! cryptographically valid. Rows older than the token TTL can never validate
//! again, so `prune_expired` drops them to keep the list bounded.

use crate::database::models::RevokedToken;
use anyhow::Result;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;

/// Repository for revoked-token operations.
pub struct RevokedTokenRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> RevokedTokenRepository<'a> {
    /// Creates a new RevokedTokenRepository instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Marks a token as revoked. Idempotent.
    pub async fn add(&self, token: &str) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO revoked_tokens (token, created_at) VALUES (?, ?)")
            .bind(token)
            .bind(Utc::now())
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Returns whether a token has been revoked. Exact string match on the
    /// primary key.
    pub async fn contains(&self, token: &str) -> Result<bool> {
        let entry = sqlx::query_as::<_, RevokedToken>(
            "SELECT token, created_at FROM revoked_tokens WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(entry.is_some())
    }

    /// Deletes revocation entries older than the given token lifetime.
    /// Returns the number of rows removed.
    pub async fn prune_expired(&self, ttl_seconds: u64) -> Result<u64> {
        let cutoff = Utc::now() - Duration::seconds(ttl_seconds as i64);

        let result = sqlx::query("DELETE FROM revoked_tokens WHERE created_at < ?")
            .bind(cutoff)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
