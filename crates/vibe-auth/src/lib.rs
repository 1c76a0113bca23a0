//! VibeMarket Authentication
//!
//! Sign-in and sign-up behind a narrow async port. The entry flows call the
//! [`AuthBackend`] trait and never see transport details.
//!
//! ## Backends
//! - [`LocalAuthBackend`]: in-memory store with a server-side password
//!   policy and failed-attempt lockout
//! - [`HttpAuthBackend`]: REST client for the hosted auth gateway
//!
//! Explicit rejections (bad credentials, duplicate email) settle as
//! [`AuthOutcome`] with `success == false`; only transport-level failures
//! raise [`AuthError`].

use thiserror::Error;

pub mod backend;
pub mod http;
pub mod local;
pub mod payload;

pub use backend::AuthBackend;
pub use http::HttpAuthBackend;
pub use local::{AccountProfile, LocalAuthBackend, PasswordPolicy};
pub use payload::{AuthOutcome, SignInPayload, SignUpPayload};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
