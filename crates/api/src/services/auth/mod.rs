//! Authentication service.
//!
//! Secrets are stored as Argon2id hashes and verified with the
//! `password_hash` machinery; the stored hash never reaches a response.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use mercadito_core::Username;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;

/// Minimum secret length.
const MIN_SECRET_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles user registration and login.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username format is invalid.
    /// Returns `AuthError::WeakSecret` if the secret doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the username is taken.
    pub async fn register(
        &self,
        name: &str,
        surname: &str,
        username: &str,
        secret: &str,
    ) -> Result<User, AuthError> {
        let username = Username::parse(username)?;

        validate_secret(secret)?;

        let password_hash = hash_secret(secret)?;

        let user = self
            .users
            .create(name, surname, &username, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with username and secret.
    ///
    /// Unknown user and wrong secret are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username/secret is wrong.
    pub async fn login(&self, username: &str, secret: &str) -> Result<User, AuthError> {
        let username = Username::parse(username)?;

        let (user, password_hash) = self
            .users
            .get_with_password_hash(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_secret(secret, &password_hash)?;

        Ok(user)
    }
}

/// Validate secret strength.
fn validate_secret(secret: &str) -> Result<(), AuthError> {
    if secret.len() < MIN_SECRET_LENGTH {
        return Err(AuthError::WeakSecret(format!(
            "secret must be at least {MIN_SECRET_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a secret using Argon2id.
fn hash_secret(secret: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a secret against a stored hash.
fn verify_secret(secret: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(secret.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
