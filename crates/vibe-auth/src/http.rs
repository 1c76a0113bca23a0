//! HTTP Auth Backend
//!
//! REST wrapper for the hosted auth gateway.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::backend::AuthBackend;
use crate::payload::{AuthOutcome, SignInPayload, SignUpPayload};
use crate::{AuthError, Result};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Auth gateway client
pub struct HttpAuthBackend {
    base_url: String,
    client: Client,
}

impl HttpAuthBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<AuthOutcome> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AuthError::Gateway(format!("{}: {}", status, text)));
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn sign_in(&self, payload: &SignInPayload) -> Result<AuthOutcome> {
        self.post("/api/v1/auth/sign-in", payload).await
    }

    async fn sign_up(&self, payload: &SignUpPayload) -> Result<AuthOutcome> {
        self.post("/api/v1/auth/sign-up", payload).await
    }
}
