//! Database repositories for persisted entities.

pub mod revoked_token_repository;
pub mod user_repository;
