//! Single-line text inputs used by the auth screens

/// A labelled text input with an optional masked display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub masked: bool,
}

impl InputField {
    /// Create a plain text input
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            masked: false,
        }
    }

    /// Create a text input with an initial value
    pub fn text_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            value,
            ..Self::text(name, label)
        }
    }

    /// Create a password input
    pub fn password(name: &str, label: &str) -> Self {
        Self {
            masked: true,
            ..Self::text(name, label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
