//! Login and registration forms

use super::input::InputField;
use crate::api::Credentials;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length accepted at registration
const MIN_PASSWORD_LEN: usize = 8;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut InputField;
    fn get_field(&self, index: usize) -> Option<&InputField>;
}

/// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: InputField,
    pub password: InputField,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: InputField::text("email", "Email"),
            password: InputField::password("password", "Password"),
            active_field_index: 0,
        }
    }

    /// Prefill the email, e.g. from the last successful login
    pub fn with_email(email: &str) -> Self {
        Self {
            email: InputField::text_with_value("email", "Email", email.to_string()),
            active_field_index: 1,
            ..Self::new()
        }
    }

    /// Check the inputs and build credentials, or list what is wrong
    pub fn validate(&self) -> Result<Credentials, Vec<String>> {
        let mut errors = Vec::new();
        check_email(self.email.as_text(), &mut errors);
        if self.password.as_text().is_empty() {
            errors.push("Password is required.".to_string());
        }

        if errors.is_empty() {
            Ok(Credentials::new(self.email.as_text(), self.password.as_text()))
        } else {
            Err(errors)
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut InputField {
        match self.active_field_index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&InputField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
}

/// Registration Form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub email: InputField,
    pub password: InputField,
    pub confirm_password: InputField,
    pub active_field_index: usize,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            email: InputField::text("email", "Email"),
            password: InputField::password("password", "Password"),
            confirm_password: InputField::password("confirmPassword", "Confirm Password"),
            active_field_index: 0,
        }
    }

    /// Check the inputs and build credentials, or list what is wrong
    pub fn validate(&self) -> Result<Credentials, Vec<String>> {
        let mut errors = Vec::new();
        check_email(self.email.as_text(), &mut errors);

        let password = self.password.as_text();
        if password.is_empty() {
            errors.push("Password is required.".to_string());
        } else if password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
        }

        let confirm = self.confirm_password.as_text();
        if confirm.is_empty() {
            errors.push("Confirm Password is required.".to_string());
        } else if password != confirm {
            errors.push("Passwords do not match.".to_string());
        }

        if errors.is_empty() {
            Ok(Credentials::new(self.email.as_text(), password))
        } else {
            Err(errors)
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        3
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> &mut InputField {
        match self.active_field_index {
            0 => &mut self.email,
            1 => &mut self.password,
            _ => &mut self.confirm_password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&InputField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            2 => Some(&self.confirm_password),
            _ => None,
        }
    }
}

fn check_email(email: &str, errors: &mut Vec<String>) {
    if email.is_empty() {
        errors.push("Email is required.".to_string());
    } else if !looks_like_email(email) {
        errors.push("Email is invalid.".to_string());
    }
}

/// Loose `something@something.something` pattern, matched anywhere in the input
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

fn looks_like_email(value: &str) -> bool {
    EMAIL.is_match(value)
}
