//! Auth Backend Port
//!
//! The narrow async contract the entry flows call. Implementations must
//! eventually settle or raise; retry policy belongs to the caller (which has
//! none).

use async_trait::async_trait;

use crate::payload::{AuthOutcome, SignInPayload, SignUpPayload};
use crate::Result;

/// Authentication backend port
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Authenticate an existing account
    async fn sign_in(&self, payload: &SignInPayload) -> Result<AuthOutcome>;

    /// Create an account with onboarding preferences
    async fn sign_up(&self, payload: &SignUpPayload) -> Result<AuthOutcome>;
}
