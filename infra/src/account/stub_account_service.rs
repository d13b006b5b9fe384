//! In-memory account service

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use cams_core::{AccountServiceTrait, AuthError, Clock};
use cams_shared::email::mask_email;
use cams_shared::validation::validators;

use crate::config::StubAccountConfig;

/// Stored account; the password is kept as a salted digest
#[derive(Debug, Clone)]
struct StoredAccount {
    password_digest: String,
    salt: String,
    api_key: String,
    created_at: DateTime<Utc>,
}

/// A reset code waiting to be verified
#[derive(Debug, Clone)]
struct PendingReset {
    code: String,
    issued_at: DateTime<Utc>,
}

/// Account service keeping accounts and reset codes in memory
///
/// This implementation:
/// - Rejects duplicate registrations
/// - Issues random numeric reset codes with a limited lifetime
/// - Compares codes in constant time
/// - Remembers the verified email so `change_password` applies to it
pub struct StubAccountService {
    accounts: RwLock<HashMap<String, StoredAccount>>,
    pending_resets: RwLock<HashMap<String, PendingReset>>,
    /// Email whose reset code was verified last
    verified_email: RwLock<Option<String>>,
    /// Last issued code, for development tooling and tests
    last_issued_code: RwLock<Option<String>>,
    simulate_failure: AtomicBool,
    config: StubAccountConfig,
    clock: Arc<dyn Clock>,
}

impl StubAccountService {
    pub fn new(config: StubAccountConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            pending_resets: RwLock::new(HashMap::new()),
            verified_email: RwLock::new(None),
            last_issued_code: RwLock::new(None),
            simulate_failure: AtomicBool::new(false),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &StubAccountConfig {
        &self.config
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    pub async fn account_exists(&self, email: &str) -> bool {
        self.accounts.read().await.contains_key(&normalize(email))
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Check a password against the stored digest
    pub async fn check_password(&self, email: &str, password: &str) -> bool {
        match self.accounts.read().await.get(&normalize(email)) {
            Some(account) => {
                let digest = digest_password(&account.salt, password);
                constant_time_eq(digest.as_bytes(), account.password_digest.as_bytes())
            }
            None => false,
        }
    }

    /// API key registered with the account
    pub async fn api_key(&self, email: &str) -> Option<String> {
        self.accounts
            .read()
            .await
            .get(&normalize(email))
            .map(|account| account.api_key.clone())
    }

    pub async fn last_issued_code(&self) -> Option<String> {
        self.last_issued_code.read().await.clone()
    }

    fn check_available(&self) -> Result<(), AuthError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(AuthError::ServiceUnavailable {
                message: "Simulated account service outage".to_string(),
            });
        }
        Ok(())
    }

    fn generate_code(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.config.code_length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}

#[async_trait]
impl AccountServiceTrait for StubAccountService {
    async fn register(&self, email: &str, password: &str, api_key: &str) -> Result<(), AuthError> {
        self.check_available()?;

        if !validators::is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        if !validators::is_valid_password(password) {
            return Err(AuthError::WeakPassword);
        }
        if !validators::is_present(api_key) {
            return Err(AuthError::InvalidApiKey);
        }

        let key = normalize(email);
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            tracing::warn!(
                email = %mask_email(email),
                event = "duplicate_registration",
                "Account already exists"
            );
            return Err(AuthError::AccountAlreadyExists);
        }

        let salt = generate_salt();
        accounts.insert(
            key,
            StoredAccount {
                password_digest: digest_password(&salt, password),
                salt,
                api_key: api_key.trim().to_string(),
                created_at: self.clock.now(),
            },
        );

        tracing::info!(
            email = %mask_email(email),
            event = "account_created",
            "Account registered"
        );
        Ok(())
    }

    async fn request_password_reset_code(&self, email: &str) -> Result<(), AuthError> {
        self.check_available()?;

        if !validators::is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }

        // Codes are issued for unknown emails too, so the response does not
        // reveal which accounts exist
        let code = self.generate_code();
        let issued_at = self.clock.now();
        self.pending_resets.write().await.insert(
            normalize(email),
            PendingReset {
                code: code.clone(),
                issued_at,
            },
        );

        if self.config.log_codes {
            tracing::debug!(
                email = %mask_email(email),
                code = %code,
                event = "reset_code_issued",
                "Development reset code"
            );
        } else {
            tracing::info!(
                email = %mask_email(email),
                event = "reset_code_issued",
                "Reset code issued"
            );
        }
        *self.last_issued_code.write().await = Some(code);
        Ok(())
    }

    async fn verify_reset_code(&self, email: &str, code: &str) -> Result<(), AuthError> {
        self.check_available()?;

        let key = normalize(email);
        let mut pending = self.pending_resets.write().await;
        let reset = pending.get(&key).cloned().ok_or(AuthError::NoPendingReset)?;

        if self.clock.now() - reset.issued_at > self.config.code_ttl {
            pending.remove(&key);
            tracing::info!(
                email = %mask_email(email),
                event = "reset_code_expired",
                "Reset code expired"
            );
            return Err(AuthError::VerificationCodeExpired);
        }

        if !constant_time_eq(code.trim().as_bytes(), reset.code.as_bytes()) {
            tracing::warn!(
                email = %mask_email(email),
                event = "reset_code_mismatch",
                "Reset code did not match"
            );
            return Err(AuthError::InvalidVerificationCode);
        }

        pending.remove(&key);
        *self.verified_email.write().await = Some(key);
        tracing::info!(
            email = %mask_email(email),
            event = "reset_code_verified",
            "Reset code verified"
        );
        Ok(())
    }

    async fn change_password(&self, new_password: &str) -> Result<(), AuthError> {
        self.check_available()?;

        if !validators::is_valid_password(new_password) {
            return Err(AuthError::WeakPassword);
        }

        let mut verified = self.verified_email.write().await;
        let email = verified.clone().ok_or(AuthError::NoPendingReset)?;

        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&email).ok_or(AuthError::AccountNotFound)?;

        let salt = generate_salt();
        account.password_digest = digest_password(&salt, new_password);
        account.salt = salt;
        *verified = None;

        tracing::info!(
            email = %mask_email(&email),
            account_age_days = (self.clock.now() - account.created_at).num_days(),
            event = "password_changed",
            "Password updated"
        );
        Ok(())
    }
}

/// Emails are matched case-insensitively
fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
