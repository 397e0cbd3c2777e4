//! Trait abstraction for the forms API to enable mocking in tests

use super::session::{Credentials, Session};
use crate::state::{FormRecord, SubmissionPayload};
use anyhow::Result;
use async_trait::async_trait;

/// Operations the backend offers this client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormsApi: Send + Sync {
    /// Exchange credentials for a session token
    async fn login(&self, credentials: &Credentials) -> Result<Session>;

    /// Create an account
    async fn register(&self, credentials: &Credentials) -> Result<()>;

    /// List the forms owned by the session's user
    async fn list_forms(&self, session: &Session) -> Result<Vec<FormRecord>>;

    /// Store a new form
    async fn create_form(
        &self,
        session: &Session,
        payload: &SubmissionPayload,
    ) -> Result<FormRecord>;

    /// Replace an existing form
    async fn update_form(
        &self,
        session: &Session,
        id: &str,
        payload: &SubmissionPayload,
    ) -> Result<FormRecord>;
}
