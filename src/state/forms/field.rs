//! Field definition value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input types a form field can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Radio,
    Textarea,
}

impl FieldType {
    /// Wire identifier used by the forms API
    pub fn id(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Radio => "radio",
            Self::Textarea => "textarea",
        }
    }

    /// Label shown in the palette
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Email => "Email",
            Self::Radio => "Radio Button",
            Self::Textarea => "Textarea",
        }
    }

    /// Whether fields of this type carry an option list
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Radio)
    }

    /// Whether the editor offers a placeholder input for this type
    pub fn has_placeholder(&self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Textarea)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The fixed palette fields are dragged from, in display order
pub const PALETTE: [FieldType; 4] = [
    FieldType::Text,
    FieldType::Email,
    FieldType::Radio,
    FieldType::Textarea,
];

/// One entry in a form definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    #[serde(rename = "fieldName", default)]
    pub label: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl FieldDefinition {
    /// Create a blank field of the given type.
    ///
    /// Radio fields start with a single empty option; every other type
    /// starts with none.
    pub fn new(field_type: FieldType) -> Self {
        let options = if field_type.has_options() {
            vec![String::new()]
        } else {
            Vec::new()
        };
        Self {
            label: String::new(),
            field_type,
            required: false,
            placeholder: String::new(),
            options,
        }
    }

    /// Project this field into what the editor renders for it
    pub fn view(&self) -> FieldView<'_> {
        let preview = match self.field_type {
            FieldType::Text | FieldType::Email => FieldPreview::None,
            FieldType::Textarea => FieldPreview::TextArea {
                hint: if self.placeholder.is_empty() {
                    "Textarea"
                } else {
                    self.placeholder.as_str()
                },
            },
            FieldType::Radio => FieldPreview::Radio {
                options: self
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, value)| OptionView {
                        value,
                        placeholder: option_placeholder(i),
                    })
                    .collect(),
            },
        };

        FieldView {
            field_type: self.field_type,
            label: &self.label,
            placeholder: &self.placeholder,
            show_placeholder_input: self.field_type.has_placeholder(),
            preview,
            required: self.required,
        }
    }
}

/// Placeholder text for the option at `index` ("Option 1" for index 0)
pub fn option_placeholder(index: usize) -> String {
    format!("Option {}", index + 1)
}

/// A settable scalar property of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProperty {
    Label(String),
    Placeholder(String),
    Required(bool),
}

impl FieldProperty {
    /// Write this property into a field
    pub(crate) fn apply(self, field: &mut FieldDefinition) {
        match self {
            FieldProperty::Label(value) => field.label = value,
            FieldProperty::Placeholder(value) => field.placeholder = value,
            FieldProperty::Required(value) => field.required = value,
        }
    }
}

/// Render model for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub field_type: FieldType,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub show_placeholder_input: bool,
    pub preview: FieldPreview<'a>,
    pub required: bool,
}

/// Type-specific part of a field's render model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPreview<'a> {
    None,
    TextArea { hint: &'a str },
    Radio { options: Vec<OptionView<'a>> },
}

/// One editable option row of a radio field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub value: &'a str,
    pub placeholder: String,
}
