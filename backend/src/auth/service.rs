//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::config::Config;
use crate::database::models::CreateUser;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::revoked_token_repository::RevokedTokenRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::{hash_password, verify_password};
use sqlx::SqlitePool;
use validator::Validate;

/// Account service orchestrating signup, login, and token revocation.
pub struct AccountService<'a> {
    pool: &'a SqlitePool,
    jwt_utils: JwtUtils,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService instance.
    pub fn new(pool: &'a SqlitePool, config: &Config) -> Self {
        AccountService {
            pool,
            jwt_utils: JwtUtils::from_config(config),
        }
    }

    /// Register a new account and issue a session token.
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        Self::validate(&request)?;

        let repo = UserRepository::new(self.pool);

        // Fast path only; the UNIQUE constraint on email is the actual
        // duplicate guard (concurrent signups can race past this check).
        if repo.email_exists(&request.email).await? {
            return Err(ServiceError::already_exists("User"));
        }

        let password_hash = hash_password(&request.password)?;

        let user = repo
            .create_user(CreateUser {
                id: uuid::Uuid::now_v7().to_string(),
                name: request.name,
                email: request.email,
                password_hash,
            })
            .await?;

        let token = self.jwt_utils.issue(&user.id)?;

        Ok(AuthResponse { token, user })
    }

    /// Authenticate an existing account and issue a session token.
    ///
    /// Both the unknown-email and wrong-password failures display the same
    /// "Invalid email or password" message to the caller.
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        Self::validate(&request)?;

        let repo = UserRepository::new(self.pool);

        let user = repo
            .find_by_email_with_password(&request.email)
            .await?
            .ok_or(ServiceError::UnknownCredentials)?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(ServiceError::InvalidCredentials);
        }

        let token = self.jwt_utils.issue(&user.id)?;

        Ok(AuthResponse {
            token,
            user: user.into_user(),
        })
    }

    /// Add a session token to the revocation list, pruning entries that
    /// have outlived the token TTL first.
    pub async fn revoke_token(&self, token: &str) -> ServiceResult<()> {
        let repo = RevokedTokenRepository::new(self.pool);

        repo.prune_expired(self.jwt_utils.ttl_seconds()).await?;
        repo.add(token).await?;

        Ok(())
    }

    /// Flattens validator errors into a single validation failure.
    fn validate<T: Validate>(request: &T) -> ServiceResult<()> {
        if let Err(validation_errors) = request.validate() {
            let error_messages: Vec<String> = validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error.message.as_ref().unwrap_or(&"Invalid value".into())
                        )
                    })
                })
                .collect();
            return Err(ServiceError::validation(error_messages.join(", ")));
        }
        Ok(())
    }
}
