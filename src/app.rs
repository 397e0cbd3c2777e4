//! Application state and core logic

use crate::api::FormsApi;
use crate::config::TuiConfig;
use crate::state::{
    AppState, EditorFocus, FieldPart, Form, LoginForm, MoveDirection, RegisterForm,
    SubmissionOutcome, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Forms API the app talks to
    pub api: Arc<dyn FormsApi>,
    /// User configuration
    pub config: TuiConfig,
    /// Whether config changes are written to disk
    persist_config: bool,
    /// Whether the app should quit
    quit: bool,
    /// Background submissions report here
    submission_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    submission_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn FormsApi>, config: TuiConfig) -> Self {
        let (submission_tx, submission_rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        if let Some(email) = &config.last_email {
            state.login_form = LoginForm::with_email(email);
        }

        Self {
            state,
            api,
            config,
            persist_config: true,
            quit: false,
            submission_tx,
            submission_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Return to the previous non-form view
    fn go_back(&mut self) {
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            return;
        }
        self.state.current_view = if self.state.is_logged_in() {
            View::Dashboard
        } else {
            View::Login
        };
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // An open error dialog swallows input until dismissed
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Login => self.handle_login_key(key).await,
            View::Register => self.handle_register_key(key).await,
            View::Dashboard => self.handle_dashboard_key(key).await,
            View::Editor => {
                self.handle_editor_key(key);
                Ok(())
            }
        }
    }

    /// Handle keys in the login view
    async fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.register_form = RegisterForm::default();
                self.navigate(View::Register);
            }
            KeyCode::Enter => self.login().await,
            _ => edit_auth_form(&mut self.state.login_form, key),
        }
        Ok(())
    }

    /// Handle keys in the registration view
    async fn handle_register_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => self.register().await,
            _ => edit_auth_form(&mut self.state.register_form, key),
        }
        Ok(())
    }

    /// Handle keys in the dashboard view
    async fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.state.forms.len();
                self.state.move_selection_down(count);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') => {
                self.state.open_editor(None);
                self.navigate(View::Editor);
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(record) = self.state.selected_form().cloned() {
                    self.state.open_editor(Some(&record));
                    self.navigate(View::Editor);
                }
            }
            KeyCode::Char('r') => self.refresh_forms().await,
            KeyCode::Char('l') => self.logout(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the form editor
    fn handle_editor_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('s') if ctrl => {
                self.save_form();
                return;
            }
            KeyCode::Esc => {
                self.state.close_editor();
                self.go_back();
                return;
            }
            _ => {}
        }

        let Some(editor) = self.state.editor.as_mut() else {
            return;
        };
        let cursor = &mut self.state.editor_cursor;

        let result = match key.code {
            KeyCode::Tab => {
                cursor.next_focus();
                Ok(())
            }
            KeyCode::BackTab => {
                cursor.prev_focus();
                Ok(())
            }
            KeyCode::Up if shift => {
                cursor.move_field(editor, MoveDirection::Up);
                Ok(())
            }
            KeyCode::Down if shift => {
                cursor.move_field(editor, MoveDirection::Down);
                Ok(())
            }
            KeyCode::Up => {
                cursor.move_up(editor);
                Ok(())
            }
            KeyCode::Down => {
                cursor.move_down(editor);
                Ok(())
            }
            KeyCode::Enter if cursor.focus == EditorFocus::Description => {
                cursor.input_char(editor, '\n')
            }
            KeyCode::Enter => cursor.activate(editor),
            KeyCode::Char(' ')
                if cursor.focus == EditorFocus::Fields
                    && cursor.current_part(editor) == Some(FieldPart::Required) =>
            {
                cursor.toggle_required(editor)
            }
            KeyCode::Backspace => cursor.backspace(editor),
            KeyCode::Char(c) if !ctrl => cursor.input_char(editor, c),
            _ => Ok(()),
        };
        cursor.clamp(editor);

        if let Err(err) = result {
            self.push_error(err.to_string());
        }
    }

    async fn login(&mut self) {
        let credentials = match self.state.login_form.validate() {
            Ok(credentials) => credentials,
            Err(errors) => {
                self.push_error(errors.join("\n"));
                return;
            }
        };

        match self.api.login(&credentials).await {
            Ok(session) => {
                self.state.session = Some(session);
                self.state.login_form.password.clear();
                self.remember_email(&credentials.email);
                self.state.view_history.clear();
                self.state.current_view = View::Dashboard;
                self.refresh_forms().await;
            }
            Err(e) => self.push_error(e.to_string()),
        }
    }

    async fn register(&mut self) {
        let credentials = match self.state.register_form.validate() {
            Ok(credentials) => credentials,
            Err(errors) => {
                self.push_error(errors.join("\n"));
                return;
            }
        };

        match self.api.register(&credentials).await {
            Ok(()) => {
                self.state.register_form = RegisterForm::default();
                self.state.login_form = LoginForm::with_email(&credentials.email);
                self.state.status_message = Some("Account created, please log in".to_string());
                self.go_back();
            }
            Err(e) => self.push_error(e.to_string()),
        }
    }

    fn logout(&mut self) {
        let email = self
            .state
            .session
            .as_ref()
            .map(|s| s.email().to_string());
        self.state.sign_out();
        self.state.login_form = match email {
            Some(email) => LoginForm::with_email(&email),
            None => LoginForm::default(),
        };
        self.state.view_history.clear();
        self.state.current_view = View::Login;
        self.state.status_message = Some("Logged out".to_string());
    }

    fn remember_email(&mut self, email: &str) {
        if self.config.last_email.as_deref() == Some(email) {
            return;
        }
        self.config.last_email = Some(email.to_string());
        if self.persist_config {
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save config: {e}");
            }
        }
    }

    /// Reload the dashboard list from the API
    pub async fn refresh_forms(&mut self) {
        let Some(session) = self.state.session.clone() else {
            return;
        };
        match self.api.list_forms(&session).await {
            Ok(forms) => self.state.set_forms(forms),
            Err(e) => self.push_error(e.to_string()),
        }
    }

    /// Hand the editor off to a background submission and leave the editor.
    ///
    /// The outcome arrives later through [`App::poll_submissions`].
    fn save_form(&mut self) {
        let Some(session) = self.state.session.clone() else {
            self.push_error("Not logged in");
            return;
        };
        let Some(problem) = self.state.editor.as_ref().map(|e| e.missing_input()) else {
            return;
        };
        if let Some(message) = problem {
            self.push_error(message);
            return;
        }
        let Some(draft) = self.state.close_editor() else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = self.submission_tx.clone();
        self.state.pending_submissions += 1;
        tracing::info!("Submitting form \"{}\"", draft.name());
        tokio::spawn(async move {
            let result = draft.submit(api.as_ref(), &session).await;
            // Receiver lives as long as the app; a send error means we are shutting down
            let _ = tx.send(SubmissionOutcome { draft, result });
        });

        self.state.status_message = Some("Saving form...".to_string());
        self.go_back();
    }

    /// Drain finished submissions
    pub async fn poll_submissions(&mut self) {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.submission_rx.try_recv() {
            outcomes.push(outcome);
        }
        for outcome in outcomes {
            self.handle_submission(outcome).await;
        }
    }

    async fn handle_submission(&mut self, outcome: SubmissionOutcome) {
        self.state.pending_submissions = self.state.pending_submissions.saturating_sub(1);
        match outcome.result {
            Ok(record) => {
                self.state.status_message = Some(format!("Saved \"{}\"", record.display_name()));
                self.refresh_forms().await;
            }
            Err(err) => {
                self.push_error(err.to_string());
                // Don't clobber an editor the user has opened since
                if self.state.editor.is_none() && self.state.is_logged_in() {
                    self.state.restore_editor(outcome.draft);
                    self.navigate(View::Editor);
                }
            }
        }
    }
}

/// Field navigation and typing shared by the login and register screens
fn edit_auth_form(form: &mut impl Form, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Backspace => form.get_active_field_mut().pop_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.get_active_field_mut().push_char(c)
        }
        _ => {}
    }
}
