//! Sign-Up & Onboarding Flow
//!
//! One form both creates the account and captures personalization
//! preferences; the preference selects are pre-populated so a fresh form
//! already shows partial profile progress.

use vibe_auth::{AuthBackend, SignUpPayload};
use vibe_forms::{FieldSpec, FormEngine};

use crate::config::EntryConfig;
use crate::options;
use crate::sign_in::{take, EMAIL_FORMAT_MESSAGE, EMAIL_PATTERN};
use crate::submit::{SubmitEngine, SubmitOutcome, SubmitPhase};

const FAILURE_TITLE: &str = "Sign up failed";
const FAILURE_FALLBACK: &str = "Failed to create an account.";

fn sign_up_fields() -> vibe_forms::Result<Vec<FieldSpec>> {
    Ok(vec![
        FieldSpec::text("full_name", "Full name").required().min_length(2),
        FieldSpec::text("email", "Email")
            .required()
            .pattern(EMAIL_PATTERN, EMAIL_FORMAT_MESSAGE)?,
        FieldSpec::password("password", "Password").required().min_length(8),
        FieldSpec::select("country", "Country", options::countries())
            .required()
            .default_value("US"),
        FieldSpec::select(
            "investment_goals",
            "Investment goals",
            options::investment_goals(),
        )
        .required()
        .default_value("Growth"),
        FieldSpec::select(
            "risk_tolerance",
            "Risk tolerance",
            options::risk_tolerance_options(),
        )
        .required()
        .default_value("Medium"),
        FieldSpec::select(
            "preferred_industry",
            "Preferred industry",
            options::preferred_industries(),
        )
        .required()
        .default_value("Technology"),
    ])
}

/// One sign-up page instance: the onboarding form plus its submission
/// lifecycle.
pub struct SignUpFlow {
    form: FormEngine,
    submit: SubmitEngine,
}

impl SignUpFlow {
    pub fn new(config: &EntryConfig) -> vibe_forms::Result<Self> {
        Ok(Self {
            form: FormEngine::new(sign_up_fields()?)?,
            submit: SubmitEngine::new(&config.landing_route, FAILURE_TITLE, FAILURE_FALLBACK),
        })
    }

    pub fn form(&self) -> &FormEngine {
        &self.form
    }

    pub fn phase(&self) -> SubmitPhase {
        self.submit.phase()
    }

    pub fn is_busy(&self) -> bool {
        self.submit.is_busy()
    }

    /// Profile setup percentage across all seven tracked fields.
    pub fn progress(&self) -> u8 {
        self.form.progress()
    }

    /// Current values as the remote payload shape.
    pub fn payload(&self) -> SignUpPayload {
        let mut snapshot = self.form.snapshot();
        SignUpPayload {
            full_name: take(&mut snapshot, "full_name"),
            email: take(&mut snapshot, "email"),
            password: take(&mut snapshot, "password"),
            country: take(&mut snapshot, "country"),
            investment_goals: take(&mut snapshot, "investment_goals"),
            risk_tolerance: take(&mut snapshot, "risk_tolerance"),
            preferred_industry: take(&mut snapshot, "preferred_industry"),
        }
    }

    /// Run one submission attempt against the auth backend.
    pub async fn submit(&self, backend: &dyn AuthBackend) -> SubmitOutcome {
        self.submit
            .run(&self.form, || async { backend.sign_up(&self.payload()).await })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::{EntryEffect, SubmitOutcome};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vibe_auth::{AuthOutcome, LocalAuthBackend, SignInPayload};

    struct CountingBackend {
        inner: LocalAuthBackend,
        sign_up_calls: AtomicUsize,
    }

    impl CountingBackend {
        fn new() -> Self {
            Self {
                inner: LocalAuthBackend::new(),
                sign_up_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AuthBackend for CountingBackend {
        async fn sign_in(&self, payload: &SignInPayload) -> vibe_auth::Result<AuthOutcome> {
            self.inner.sign_in(payload).await
        }

        async fn sign_up(&self, payload: &SignUpPayload) -> vibe_auth::Result<AuthOutcome> {
            self.sign_up_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.sign_up(payload).await
        }
    }

    fn flow() -> SignUpFlow {
        SignUpFlow::new(&EntryConfig::default()).unwrap()
    }

    fn fill_valid(flow: &SignUpFlow) {
        flow.form().set_value("full_name", "Jane Doe").unwrap();
        flow.form().set_value("email", "jane@site.com").unwrap();
        flow.form().set_value("password", "longenough1").unwrap();
    }

    #[test]
    fn test_seven_tracked_fields() {
        assert_eq!(flow().form().field_names().len(), 7);
    }

    #[test]
    fn test_fresh_form_progress_from_preference_defaults() {
        let flow = flow();
        // Four of seven fields are pre-populated selects.
        assert_eq!(flow.progress(), 57);
    }

    #[test]
    fn test_progress_with_name_only() {
        let flow = flow();
        flow.form().set_value("full_name", "Jane").unwrap();
        assert_eq!(flow.progress(), 71);
    }

    #[test]
    fn test_progress_complete() {
        let flow = flow();
        fill_valid(&flow);
        assert_eq!(flow.progress(), 100);
    }

    #[tokio::test]
    async fn test_short_name_blocks_submission() {
        let flow = flow();
        fill_valid(&flow);
        flow.form().set_value("full_name", "J").unwrap();

        let backend = CountingBackend::new();
        let outcome = flow.submit(&backend).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(backend.sign_up_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            flow.form().error("full_name").unwrap(),
            "Full name must be at least 2 characters"
        );
    }

    #[tokio::test]
    async fn test_successful_sign_up_creates_account_and_navigates() {
        let flow = flow();
        fill_valid(&flow);

        let backend = CountingBackend::new();
        let outcome = flow.submit(&backend).await;

        assert_eq!(backend.sign_up_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.inner.account_count(), 1);
        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded(EntryEffect::Navigate {
                route: "/".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_duplicate_account_surfaces_backend_message() {
        let flow = flow();
        fill_valid(&flow);
        let backend = CountingBackend::new();
        flow.submit(&backend).await;

        let again = SignUpFlow::new(&EntryConfig::default()).unwrap();
        fill_valid(&again);
        let outcome = again.submit(&backend).await;

        match outcome {
            SubmitOutcome::Failed(EntryEffect::Notify { title, description }) => {
                assert_eq!(title, "Sign up failed");
                assert_eq!(description, "An account with this email already exists");
            }
            other => panic!("expected failure, got {:?}", other),
        }
        // The rejected form stays populated and editable.
        assert_eq!(again.form().value("email").unwrap(), "jane@site.com");
        assert_eq!(again.phase(), SubmitPhase::Idle);
    }

    #[tokio::test]
    async fn test_tampered_select_rejected_client_side() {
        let flow = flow();
        fill_valid(&flow);
        flow.form().set_value("risk_tolerance", "Reckless").unwrap();

        let backend = CountingBackend::new();
        let outcome = flow.submit(&backend).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(backend.sign_up_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            flow.form().error("risk_tolerance").unwrap(),
            "Select a valid risk tolerance"
        );
    }

    #[test]
    fn test_payload_carries_preferences() {
        let flow = flow();
        fill_valid(&flow);

        let payload = flow.payload();
        assert_eq!(payload.full_name, "Jane Doe");
        assert_eq!(payload.country, "US");
        assert_eq!(payload.investment_goals, "Growth");
        assert_eq!(payload.risk_tolerance, "Medium");
        assert_eq!(payload.preferred_industry, "Technology");
    }
}
