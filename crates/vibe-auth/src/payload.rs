//! Auth Payloads
//!
//! Wire shapes for the two authentication operations. Serialized camelCase
//! to match the gateway's JSON contract.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInPayload {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpPayload {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub investment_goals: String,
    pub risk_tolerance: String,
    pub preferred_industry: String,
}

/// Settled result of an authentication operation.
///
/// An explicit rejection carries a human-readable message; transport-level
/// failure is an `AuthError` instead.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl AuthOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
