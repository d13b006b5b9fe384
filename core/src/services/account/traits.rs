//! Trait for the account backend the flows call through

use async_trait::async_trait;

use crate::errors::AuthError;

/// Account operations offered by the backend.
///
/// The client never implements these itself; screens call through this seam
/// and map failures to inline messages.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Create an account with a PlanetScope API key
    async fn register(&self, email: &str, password: &str, api_key: &str) -> Result<(), AuthError>;

    /// Ask for a reset code to be delivered to `email`
    async fn request_password_reset_code(&self, email: &str) -> Result<(), AuthError>;

    /// Check a reset code previously delivered to `email`
    async fn verify_reset_code(&self, email: &str, code: &str) -> Result<(), AuthError>;

    /// Set a new password for the account whose reset code was verified
    async fn change_password(&self, new_password: &str) -> Result<(), AuthError>;
}
