//! HTTP client for the forms backend
//!
//! Thin JSON-over-HTTP wrapper around the auth and forms endpoints. Every
//! authenticated call takes the [`Session`] it should act as.

use super::session::{Credentials, Session};
use super::traits::FormsApi;
use crate::state::{FormRecord, SubmissionPayload};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Default API address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:5000/api";

/// Fallback shown when listing fails without a server message
const FETCH_FORMS_FAILED: &str = "Failed to fetch forms.";

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
struct FormsResponse {
    #[serde(default)]
    forms: Option<Vec<FormRecord>>,
}

/// Client for communicating with the forms API
pub struct FormsClient {
    http: reqwest::Client,
    /// Base address, without a trailing slash
    address: String,
}

impl FormsClient {
    /// Create a new client for the given base address
    pub fn new(address: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            address: address.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl FormsApi for FormsClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        tracing::debug!("Logging in as {}", credentials.email);
        let response = self
            .http
            .post(self.url("auth/login"))
            .json(credentials)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to log in: {}", e))?;

        let body: TokenResponse = read_json(response, "Failed to log in").await?;
        tracing::info!("Logged in as {}", credentials.email);
        Ok(Session::new(body.token, credentials.email.clone()))
    }

    async fn register(&self, credentials: &Credentials) -> Result<()> {
        let response = self
            .http
            .post(self.url("auth/register"))
            .json(credentials)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to register: {}", e))?;

        ensure_success(response, "Failed to register").await?;
        tracing::info!("Registered {}", credentials.email);
        Ok(())
    }

    async fn list_forms(&self, session: &Session) -> Result<Vec<FormRecord>> {
        let response = self
            .http
            .get(self.url("forms"))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .send()
            .await
            .map_err(|e| anyhow!("{}: {}", FETCH_FORMS_FAILED, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "{}",
                server_message(&body).unwrap_or_else(|| FETCH_FORMS_FAILED.to_string())
            ));
        }

        let body: FormsResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("{}: {}", FETCH_FORMS_FAILED, e))?;
        let forms = body.forms.unwrap_or_default();
        tracing::debug!("Fetched {} forms", forms.len());
        Ok(forms)
    }

    async fn create_form(
        &self,
        session: &Session,
        payload: &SubmissionPayload,
    ) -> Result<FormRecord> {
        let response = self
            .http
            .post(self.url("forms"))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .json(payload)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to create form: {}", e))?;

        let record: FormRecord = read_json(response, "Failed to create form").await?;
        tracing::info!("Created form {}", record.id);
        Ok(record)
    }

    async fn update_form(
        &self,
        session: &Session,
        id: &str,
        payload: &SubmissionPayload,
    ) -> Result<FormRecord> {
        let response = self
            .http
            .put(self.url(&format!("forms/{id}")))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .json(payload)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to update form: {}", e))?;

        let record: FormRecord = read_json(response, "Failed to update form").await?;
        tracing::info!("Updated form {}", id);
        Ok(record)
    }
}

/// Decode a successful JSON body, or turn an error response into a message
async fn read_json<T: DeserializeOwned>(response: reqwest::Response, context: &str) -> Result<T> {
    let response = ensure_success(response, context).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| anyhow!("{}: {}", context, e))
}

async fn ensure_success(response: reqwest::Response, context: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let reason = server_message(&body).unwrap_or_else(|| status.to_string());
    tracing::debug!("{} ({}): {}", context, status, reason);
    Err(anyhow!("{}: {}", context, reason))
}

/// Pull the `message` out of a JSON error body
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
