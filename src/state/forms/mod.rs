//! Form domain layer
//!
//! The form editor (field definitions, reordering, option lists and the
//! submission payload), the keyboard cursor that drives it, and the small
//! input forms used by the login and registration screens.

mod auth_form;
mod cursor;
mod error;
mod field;
mod form_state;
mod input;

pub use auth_form::{Form, LoginForm, RegisterForm};
pub use cursor::{EditorCursor, EditorFocus, FieldPart, MoveDirection};
pub use error::EditorError;
pub use field::{FieldDefinition, FieldPreview, FieldType, PALETTE};
pub use form_state::{FormEditor, SubmissionPayload};
pub use input::InputField;
