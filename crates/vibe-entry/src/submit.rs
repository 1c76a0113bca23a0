//! Submission Lifecycle
//!
//! One submit-to-settlement cycle around a single remote call. Shared by the
//! sign-in and sign-up flows, parameterized only by the remote operation and
//! the failure wording.

use std::future::Future;

use parking_lot::RwLock;
use tracing::{info, warn};
use vibe_auth::AuthOutcome;
use vibe_forms::FormEngine;

/// Where one submission attempt currently stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Side effect the core requests from its host
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryEffect {
    /// Navigate to an application route
    Navigate { route: String },
    /// Show a transient, dismissible error notification
    Notify { title: String, description: String },
}

/// Settled result of one submit trigger
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Trigger arrived while an attempt was not settled; nothing ran
    Ignored,
    /// Validation failed; the remote operation was never invoked
    Invalid,
    /// Remote reported success; carries the navigation request
    Succeeded(EntryEffect),
    /// Remote rejected or raised; carries the error notification
    Failed(EntryEffect),
}

/// Submission lifecycle engine for one form instance
pub struct SubmitEngine {
    phase: RwLock<SubmitPhase>,
    landing_route: String,
    failure_title: String,
    failure_fallback: String,
}

impl SubmitEngine {
    pub fn new(
        landing_route: impl Into<String>,
        failure_title: impl Into<String>,
        failure_fallback: impl Into<String>,
    ) -> Self {
        Self {
            phase: RwLock::new(SubmitPhase::Idle),
            landing_route: landing_route.into(),
            failure_title: failure_title.into(),
            failure_fallback: failure_fallback.into(),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        *self.phase.read()
    }

    /// True exactly while the remote call is in flight. Hosts disable the
    /// submit control while this holds.
    pub fn is_busy(&self) -> bool {
        *self.phase.read() == SubmitPhase::Submitting
    }

    /// Run one submission attempt.
    ///
    /// Validates every field first; the remote operation is invoked at most
    /// once, and only when the whole form passes. A trigger is accepted only
    /// from the idle phase, so a second trigger while an attempt is in
    /// flight is a no-op. Every remote exit settles as either `Succeeded` or
    /// `Failed`; nothing escapes uncaught.
    pub async fn run<F, Fut>(&self, form: &FormEngine, call: F) -> SubmitOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = vibe_auth::Result<AuthOutcome>>,
    {
        {
            let mut phase = self.phase.write();
            if *phase != SubmitPhase::Idle {
                return SubmitOutcome::Ignored;
            }
            *phase = SubmitPhase::Validating;
        }

        if !form.validate_all() {
            *self.phase.write() = SubmitPhase::Idle;
            return SubmitOutcome::Invalid;
        }

        *self.phase.write() = SubmitPhase::Submitting;
        let result = call().await;

        match result {
            Ok(outcome) if outcome.success => {
                info!("submission succeeded");
                *self.phase.write() = SubmitPhase::Succeeded;
                SubmitOutcome::Succeeded(EntryEffect::Navigate {
                    route: self.landing_route.clone(),
                })
            }
            Ok(outcome) => self.settle_failed(outcome.message),
            Err(e) => {
                warn!(error = %e, "submission raised");
                self.settle_failed(Some(e.to_string()))
            }
        }
    }

    /// Failure is transient: the attempt settles back to idle and the form
    /// stays populated and editable.
    fn settle_failed(&self, message: Option<String>) -> SubmitOutcome {
        *self.phase.write() = SubmitPhase::Failed;

        let description = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.failure_fallback.clone());
        let effect = EntryEffect::Notify {
            title: self.failure_title.clone(),
            description,
        };

        *self.phase.write() = SubmitPhase::Idle;
        SubmitOutcome::Failed(effect)
    }
}
