//! Local Auth Backend
//!
//! In-memory account store for development and tests. Enforces the password
//! policy server-side and locks accounts after repeated failures.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::backend::AuthBackend;
use crate::payload::{AuthOutcome, SignInPayload, SignUpPayload};
use crate::Result;

const MAX_FAILED_ATTEMPTS: u32 = 5;
const LOCKOUT_WINDOW_MINUTES: i64 = 15;

/// Server-side password policy.
///
/// The entry forms enforce the same minimum client-side; this is the
/// backend's independent check.
#[derive(Clone, Debug)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

struct StoredAccount {
    id: String,
    full_name: String,
    email: String,
    password_hash: String,
    country: String,
    investment_goals: String,
    risk_tolerance: String,
    preferred_industry: String,
    created_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
}

struct FailedAttempts {
    count: u32,
    first_attempt: DateTime<Utc>,
}

/// Stored account view without credentials
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub investment_goals: String,
    pub risk_tolerance: String,
    pub preferred_industry: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// In-memory authentication backend
pub struct LocalAuthBackend {
    /// Accounts keyed by email
    accounts: DashMap<String, StoredAccount>,
    /// Failed sign-in tracker keyed by email
    failed_attempts: DashMap<String, FailedAttempts>,
    policy: PasswordPolicy,
}

impl LocalAuthBackend {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            failed_attempts: DashMap::new(),
            policy: PasswordPolicy::default(),
        }
    }

    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            ..Self::new()
        }
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Look up an account's onboarding profile by email.
    pub fn profile(&self, email: &str) -> Option<AccountProfile> {
        let account = self.accounts.get(&email.trim().to_lowercase())?;
        Some(AccountProfile {
            id: account.id.clone(),
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            country: account.country.clone(),
            investment_goals: account.investment_goals.clone(),
            risk_tolerance: account.risk_tolerance.clone(),
            preferred_industry: account.preferred_industry.clone(),
            created_at: account.created_at,
            last_login: account.last_login,
        })
    }

    fn hash_password(password: &str) -> String {
        // In production: use bcrypt/argon2
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn is_locked_out(&self, email: &str) -> bool {
        if let Some(attempts) = self.failed_attempts.get(email) {
            let window = Duration::minutes(LOCKOUT_WINDOW_MINUTES);
            let in_window = Utc::now() - attempts.first_attempt < window;
            in_window && attempts.count >= MAX_FAILED_ATTEMPTS
        } else {
            false
        }
    }

    fn record_failed_attempt(&self, email: &str) {
        let now = Utc::now();
        self.failed_attempts
            .entry(email.to_string())
            .and_modify(|a| a.count += 1)
            .or_insert(FailedAttempts {
                count: 1,
                first_attempt: now,
            });
    }
}

impl Default for LocalAuthBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AuthBackend for LocalAuthBackend {
    async fn sign_in(&self, payload: &SignInPayload) -> Result<AuthOutcome> {
        let email = payload.email.trim().to_lowercase();

        if self.is_locked_out(&email) {
            warn!(email = %email, "sign-in attempt on locked account");
            return Ok(AuthOutcome::rejected(
                "Account locked due to too many failed attempts",
            ));
        }

        let hash = Self::hash_password(&payload.password);
        match self.accounts.get_mut(&email) {
            Some(mut account) if account.password_hash == hash => {
                self.failed_attempts.remove(&email);
                account.last_login = Some(Utc::now());
                Ok(AuthOutcome::ok())
            }
            Some(_) => {
                self.record_failed_attempt(&email);
                Ok(AuthOutcome::rejected("Invalid email or password"))
            }
            None => {
                self.record_failed_attempt(&email);
                Ok(AuthOutcome::rejected("Invalid email or password"))
            }
        }
    }

    async fn sign_up(&self, payload: &SignUpPayload) -> Result<AuthOutcome> {
        let email = payload.email.trim().to_lowercase();

        if payload.password.len() < self.policy.min_length {
            return Ok(AuthOutcome::rejected(format!(
                "Password must be at least {} characters",
                self.policy.min_length
            )));
        }

        if self.accounts.contains_key(&email) {
            return Ok(AuthOutcome::rejected(
                "An account with this email already exists",
            ));
        }

        let id = uuid::Uuid::new_v4().to_string();
        self.accounts.insert(
            email.clone(),
            StoredAccount {
                id: id.clone(),
                full_name: payload.full_name.trim().to_string(),
                email: email.clone(),
                password_hash: Self::hash_password(&payload.password),
                country: payload.country.clone(),
                investment_goals: payload.investment_goals.clone(),
                risk_tolerance: payload.risk_tolerance.clone(),
                preferred_industry: payload.preferred_industry.clone(),
                created_at: Utc::now(),
                last_login: None,
            },
        );

        info!(account = %id, "account created");
        Ok(AuthOutcome::ok())
    }
}
