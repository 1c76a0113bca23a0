//! Sign-In Flow

use std::collections::HashMap;

use vibe_auth::{AuthBackend, SignInPayload};
use vibe_forms::{FieldSpec, FormEngine};

use crate::config::EntryConfig;
use crate::submit::{SubmitEngine, SubmitOutcome, SubmitPhase};

pub(crate) const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";
pub(crate) const EMAIL_FORMAT_MESSAGE: &str = "Enter a valid email address";

const FAILURE_TITLE: &str = "Sign in failed";
const FAILURE_FALLBACK: &str = "Failed to sign in.";

fn sign_in_fields() -> vibe_forms::Result<Vec<FieldSpec>> {
    Ok(vec![
        FieldSpec::text("email", "Email")
            .required()
            .pattern(EMAIL_PATTERN, EMAIL_FORMAT_MESSAGE)?,
        FieldSpec::password("password", "Password").required().min_length(8),
    ])
}

/// One sign-in page instance: a form engine plus its submission lifecycle.
pub struct SignInFlow {
    form: FormEngine,
    submit: SubmitEngine,
}

impl SignInFlow {
    pub fn new(config: &EntryConfig) -> vibe_forms::Result<Self> {
        Ok(Self {
            form: FormEngine::new(sign_in_fields()?)?,
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

    /// Current values as the remote payload shape.
    pub fn payload(&self) -> SignInPayload {
        let mut snapshot = self.form.snapshot();
        SignInPayload {
            email: take(&mut snapshot, "email"),
            password: take(&mut snapshot, "password"),
        }
    }

    /// Run one submission attempt against the auth backend.
    pub async fn submit(&self, backend: &dyn AuthBackend) -> SubmitOutcome {
        self.submit
            .run(&self.form, || async { backend.sign_in(&self.payload()).await })
            .await
    }
}

pub(crate) fn take(snapshot: &mut HashMap<String, String>, name: &str) -> String {
    snapshot.remove(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::{EntryEffect, SubmitOutcome};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vibe_auth::{AuthError, AuthOutcome, SignUpPayload};

    struct MockBackend {
        sign_in_calls: AtomicUsize,
        result: fn() -> vibe_auth::Result<AuthOutcome>,
    }

    impl MockBackend {
        fn returning(result: fn() -> vibe_auth::Result<AuthOutcome>) -> Self {
            Self {
                sign_in_calls: AtomicUsize::new(0),
                result,
            }
        }

        fn calls(&self) -> usize {
            self.sign_in_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthBackend for MockBackend {
        async fn sign_in(&self, _payload: &SignInPayload) -> vibe_auth::Result<AuthOutcome> {
            self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }

        async fn sign_up(&self, _payload: &SignUpPayload) -> vibe_auth::Result<AuthOutcome> {
            unreachable!("sign-in flow must not call sign_up")
        }
    }

    fn flow() -> SignInFlow {
        SignInFlow::new(&EntryConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_credentials_block_remote_call() {
        let flow = flow();
        flow.form().set_value("email", "bad-email").unwrap();
        flow.form().set_value("password", "x").unwrap();

        let backend = MockBackend::returning(|| Ok(AuthOutcome::ok()));
        let outcome = flow.submit(&backend).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(backend.calls(), 0);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert_eq!(
            flow.form().error("email").unwrap(),
            "Enter a valid email address"
        );
        assert_eq!(
            flow.form().error("password").unwrap(),
            "Password must be at least 8 characters"
        );
    }

    #[tokio::test]
    async fn test_successful_sign_in_requests_navigation_once() {
        let flow = flow();
        flow.form().set_value("email", "user@site.com").unwrap();
        flow.form().set_value("password", "longenough1").unwrap();

        let backend = MockBackend::returning(|| Ok(AuthOutcome::ok()));
        let outcome = flow.submit(&backend).await;

        assert_eq!(backend.calls(), 1);
        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded(EntryEffect::Navigate {
                route: "/".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_rejection_preserves_form_values() {
        let flow = flow();
        flow.form().set_value("email", "user@site.com").unwrap();
        flow.form().set_value("password", "longenough1").unwrap();

        let backend = MockBackend::returning(|| Ok(AuthOutcome::rejected("Invalid email or password")));
        let outcome = flow.submit(&backend).await;

        match outcome {
            SubmitOutcome::Failed(EntryEffect::Notify { title, description }) => {
                assert_eq!(title, "Sign in failed");
                assert_eq!(description, "Invalid email or password");
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(flow.form().value("email").unwrap(), "user@site.com");
        assert_eq!(flow.form().value("password").unwrap(), "longenough1");
        assert_eq!(flow.phase(), SubmitPhase::Idle);
    }

    #[tokio::test]
    async fn test_network_failure_uses_error_message() {
        let flow = flow();
        flow.form().set_value("email", "user@site.com").unwrap();
        flow.form().set_value("password", "longenough1").unwrap();

        let backend =
            MockBackend::returning(|| Err(AuthError::Network("connection refused".to_string())));
        let outcome = flow.submit(&backend).await;

        match outcome {
            SubmitOutcome::Failed(EntryEffect::Notify { description, .. }) => {
                assert_eq!(description, "Network error: connection refused");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_payload_trims_input() {
        let flow = flow();
        flow.form().set_value("email", "  user@site.com  ").unwrap();
        flow.form().set_value("password", "longenough1").unwrap();

        let payload = flow.payload();
        assert_eq!(payload.email, "user@site.com");
        assert_eq!(payload.password, "longenough1");
    }
}
