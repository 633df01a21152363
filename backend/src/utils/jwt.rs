//! JWT token utilities for authentication.
//!
//! Provides secure token creation and validation for user sessions. Each
//! token binds a user id to an expiry; expiry is enforced on decode. Tokens
//! carry a real TTL here (default 24h) even though earlier revisions of this
//! service shipped non-expiring tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::ServiceError;

/// JWT claims for a user session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

/// JWT token utility for creating and validating tokens
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl JwtUtils {
    /// Create a JwtUtils instance from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::from_secret(&config.jwt_secret, config.jwt_expires_in_seconds)
    }

    /// Create a JwtUtils instance from an explicit secret and TTL.
    pub fn from_secret(secret: &str, ttl_seconds: u64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            ttl_seconds,
        }
    }

    /// Issue a signed session token for the given user id.
    pub fn issue(&self, user_id: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.ttl_seconds as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a session token. Fails on bad signature,
    /// malformed payload, or expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, ServiceError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ServiceError::Unauthorized)
    }

    /// Token lifetime in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}
