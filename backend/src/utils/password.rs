//! Password hashing and verification.
//!
//! Wraps bcrypt with the service's fixed work factor. Verification goes
//! through bcrypt's own comparison rather than string equality.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{hash, verify};

/// bcrypt work factor for newly stored hashes.
const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    hash(password, HASH_COST)
        .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
    verify(password, hash)
        .map_err(|e| ServiceError::internal_error(format!("Password verification failed: {}", e)))
}
