//! Application state definitions

use super::forms::{
    EditorCursor, EditorError, FieldDefinition, FormEditor, LoginForm, RegisterForm,
};
use crate::api::Session;
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Register,
    Dashboard,
    Editor,
}

impl View {
    /// Views holding unsaved input, skipped when going back
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Register | Self::Editor)
    }
}

/// A form as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFormRecord")]
pub struct FormRecord {
    pub id: String,
    #[serde(rename = "formName", default)]
    pub name: String,
    #[serde(rename = "formDescription", default)]
    pub description: String,
    #[serde(rename = "formFields", default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Backend keys this client does not model, kept for round-tripping
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire shape of a record; the backend may send `_id`, `id`, or both
#[derive(Deserialize)]
struct RawFormRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(rename = "formName", default)]
    name: String,
    #[serde(rename = "formDescription", default)]
    description: String,
    #[serde(rename = "formFields", default)]
    fields: Vec<FieldDefinition>,
    #[serde(rename = "createdAt", default)]
    created_at: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawFormRecord> for FormRecord {
    fn from(raw: RawFormRecord) -> Self {
        Self {
            id: raw.id.or(raw.mongo_id).unwrap_or_default(),
            name: raw.name,
            description: raw.description,
            fields: raw.fields,
            created_at: raw.created_at,
            extra: raw.extra,
        }
    }
}

impl FormRecord {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "(untitled)"
        } else {
            &self.name
        }
    }

    /// Creation date as `YYYY-MM-DD`, if the timestamp parses
    pub fn created_date(&self) -> Option<String> {
        let created_at = self.created_at.as_deref()?;
        DateTime::parse_from_rfc3339(created_at)
            .ok()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
    }
}

/// Result of a background submission, reported back to the event loop
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// The editor as it was submitted, restored if the save failed
    pub draft: FormEditor,
    pub result: Result<FormRecord, EditorError>,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Auth
    pub session: Option<Session>,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,

    // Dashboard
    pub forms: Vec<FormRecord>,
    pub selected_index: usize,
    pub forms_loaded: bool,

    // Editor
    pub editor: Option<FormEditor>,
    pub editor_cursor: EditorCursor,
    pub pending_submissions: usize,

    // Feedback
    pub error_queue: VecDeque<String>,
    pub status_message: Option<String>,
}

impl AppState {
    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::debug!("UI error: {message}");
        self.error_queue.push_back(message);
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Replace the dashboard list, keeping the selection in range
    pub fn set_forms(&mut self, forms: Vec<FormRecord>) {
        self.forms = forms;
        self.forms_loaded = true;
        if self.selected_index >= self.forms.len() {
            self.selected_index = self.forms.len().saturating_sub(1);
        }
    }

    pub fn selected_form(&self) -> Option<&FormRecord> {
        self.forms.get(self.selected_index)
    }

    pub fn move_selection_down(&mut self, count: usize) {
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Start editing: a copy of `record` in edit mode, or a blank form
    pub fn open_editor(&mut self, record: Option<&FormRecord>) {
        self.editor = Some(FormEditor::initialize(record));
        self.editor_cursor = EditorCursor::default();
    }

    /// Reopen the editor with a draft that failed to save
    pub fn restore_editor(&mut self, draft: FormEditor) {
        self.editor = Some(draft);
        self.editor_cursor = EditorCursor::default();
    }

    /// Throw away the in-progress editor
    pub fn close_editor(&mut self) -> Option<FormEditor> {
        self.editor_cursor = EditorCursor::default();
        self.editor.take()
    }

    /// Drop the session and everything fetched with it
    pub fn sign_out(&mut self) {
        self.session = None;
        self.forms.clear();
        self.forms_loaded = false;
        self.selected_index = 0;
        self.editor = None;
        self.editor_cursor = EditorCursor::default();
        self.register_form = RegisterForm::default();
    }
}
