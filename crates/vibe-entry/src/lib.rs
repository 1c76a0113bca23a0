//! VibeMarket Entry Flows
//!
//! The client-facing entry surface of the platform: sign-in, the sign-up
//! onboarding form that also captures personalization preferences, and the
//! page header that prefetches the shared stock-summary dataset.
//!
//! ## Components
//! - [`SignInFlow`] / [`SignUpFlow`]: one form engine plus one submission
//!   lifecycle per page instance, sharing the same machinery and differing
//!   only in field tables, payload shape and backend operation
//! - [`SubmitEngine`]: idle → validating → submitting → settled, a single
//!   remote call per trigger, side effects returned as data
//! - [`Header`]: one prefetch per render, shared read-only by the nav search
//!   and the user menu
//!
//! Routing, rendering and the concrete remote services are the host's
//! concern; this crate only requests effects and calls the narrow ports in
//! `vibe-auth` and `vibe-market-data`.

pub mod config;
pub mod header;
pub mod options;
pub mod sign_in;
pub mod sign_up;
pub mod submit;

pub use config::{EntryConfig, GatewayConfig};
pub use header::{Header, NavSearch, SessionUser, UserMenu};
pub use sign_in::SignInFlow;
pub use sign_up::SignUpFlow;
pub use submit::{EntryEffect, SubmitEngine, SubmitOutcome, SubmitPhase};
