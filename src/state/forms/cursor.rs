//! Keyboard cursor over the form editor
//!
//! The cursor tracks which pane has focus and which part of which field is
//! selected, and turns key presses into editor operations.

use super::error::EditorError;
use super::field::{FieldDefinition, FieldProperty, PALETTE};
use super::form_state::{DragLocation, DragResult, FormEditor};

/// Pane of the editor screen that receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    Palette,
    Name,
    Description,
    Fields,
}

impl EditorFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Palette => Self::Name,
            Self::Name => Self::Description,
            Self::Description => Self::Fields,
            Self::Fields => Self::Palette,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Palette => Self::Fields,
            Self::Name => Self::Palette,
            Self::Description => Self::Name,
            Self::Fields => Self::Description,
        }
    }
}

/// Selectable row inside a field card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPart {
    Label,
    Placeholder,
    Option(usize),
    AddOption,
    Required,
}

/// Rows a field card shows, in display order
pub fn field_parts(field: &FieldDefinition) -> Vec<FieldPart> {
    let mut parts = vec![FieldPart::Label];
    if field.field_type.has_placeholder() {
        parts.push(FieldPart::Placeholder);
    }
    if field.field_type.has_options() {
        parts.extend((0..field.options.len()).map(FieldPart::Option));
        parts.push(FieldPart::AddOption);
    }
    parts.push(FieldPart::Required);
    parts
}

/// Direction to drag the selected field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorCursor {
    pub focus: EditorFocus,
    pub palette_index: usize,
    pub field_index: usize,
    pub part_index: usize,
}

impl EditorCursor {
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The field part under the cursor, if the fields pane has one
    pub fn current_part(&self, editor: &FormEditor) -> Option<FieldPart> {
        let field = editor.field(self.field_index)?;
        field_parts(field).get(self.part_index).copied()
    }

    /// Whether the cursor sits on the given part of the given field
    pub fn is_on(&self, field_index: usize, part: FieldPart, editor: &FormEditor) -> bool {
        self.focus == EditorFocus::Fields
            && self.field_index == field_index
            && self.current_part(editor) == Some(part)
    }

    pub fn move_down(&mut self, editor: &FormEditor) {
        match self.focus {
            EditorFocus::Palette => {
                self.palette_index = (self.palette_index + 1).min(PALETTE.len() - 1);
            }
            EditorFocus::Fields => {
                let Some(field) = editor.field(self.field_index) else {
                    return;
                };
                if self.part_index + 1 < field_parts(field).len() {
                    self.part_index += 1;
                } else if self.field_index + 1 < editor.field_count() {
                    self.field_index += 1;
                    self.part_index = 0;
                }
            }
            EditorFocus::Name | EditorFocus::Description => {}
        }
    }

    pub fn move_up(&mut self, editor: &FormEditor) {
        match self.focus {
            EditorFocus::Palette => {
                self.palette_index = self.palette_index.saturating_sub(1);
            }
            EditorFocus::Fields => {
                if self.part_index > 0 {
                    self.part_index -= 1;
                } else if self.field_index > 0 {
                    self.field_index -= 1;
                    self.part_index = editor
                        .field(self.field_index)
                        .map(|f| field_parts(f).len() - 1)
                        .unwrap_or(0);
                }
            }
            EditorFocus::Name | EditorFocus::Description => {}
        }
    }

    /// Pull the cursor back inside the editor's current bounds
    pub fn clamp(&mut self, editor: &FormEditor) {
        self.palette_index = self.palette_index.min(PALETTE.len() - 1);
        match editor.field_count() {
            0 => {
                self.field_index = 0;
                self.part_index = 0;
            }
            count => {
                self.field_index = self.field_index.min(count - 1);
                let parts = editor
                    .field(self.field_index)
                    .map(|f| field_parts(f).len())
                    .unwrap_or(1);
                self.part_index = self.part_index.min(parts - 1);
            }
        }
    }

    /// Enter: drop a palette entry into the form, add an option, or toggle
    /// the required flag, depending on what is selected.
    pub fn activate(&mut self, editor: &mut FormEditor) -> Result<(), EditorError> {
        match self.focus {
            EditorFocus::Palette => {
                let dropped = editor.apply_drag(DragResult {
                    source: DragLocation::palette(self.palette_index),
                    destination: Some(DragLocation::fields(editor.field_count())),
                });
                if dropped {
                    self.focus = EditorFocus::Fields;
                    self.field_index = editor.field_count() - 1;
                    self.part_index = 0;
                }
                Ok(())
            }
            EditorFocus::Fields => match self.current_part(editor) {
                Some(FieldPart::AddOption) => {
                    editor.add_option(self.field_index)?;
                    // Keep the cursor on the "add" row, which moved down one
                    self.part_index += 1;
                    Ok(())
                }
                Some(FieldPart::Required) => self.toggle_required(editor),
                _ => Ok(()),
            },
            EditorFocus::Name | EditorFocus::Description => Ok(()),
        }
    }

    /// Space on the required row flips it; elsewhere it is typed
    pub fn toggle_required(&mut self, editor: &mut FormEditor) -> Result<(), EditorError> {
        let required = editor
            .field(self.field_index)
            .map(|f| f.required)
            .unwrap_or(false);
        editor.update_field_property(self.field_index, FieldProperty::Required(!required))
    }

    /// Type a character into whatever text input is selected
    pub fn input_char(&mut self, editor: &mut FormEditor, c: char) -> Result<(), EditorError> {
        self.edit_text(editor, |text| text.push(c))
    }

    /// Delete the last character of the selected text input
    pub fn backspace(&mut self, editor: &mut FormEditor) -> Result<(), EditorError> {
        self.edit_text(editor, |text| {
            text.pop();
        })
    }

    /// Drag the selected field one slot up or down
    pub fn move_field(&mut self, editor: &mut FormEditor, direction: MoveDirection) -> bool {
        if self.focus != EditorFocus::Fields {
            return false;
        }
        let target = match direction {
            MoveDirection::Up => match self.field_index.checked_sub(1) {
                Some(target) => target,
                None => return false,
            },
            MoveDirection::Down => self.field_index + 1,
        };

        let moved = editor.apply_drag(DragResult {
            source: DragLocation::fields(self.field_index),
            destination: Some(DragLocation::fields(target)),
        });
        if moved {
            self.field_index = target;
        }
        moved
    }

    fn edit_text(
        &mut self,
        editor: &mut FormEditor,
        edit: impl FnOnce(&mut String),
    ) -> Result<(), EditorError> {
        match self.focus {
            EditorFocus::Palette => Ok(()),
            EditorFocus::Name => {
                let mut name = editor.name().to_string();
                edit(&mut name);
                editor.set_name(name);
                Ok(())
            }
            EditorFocus::Description => {
                let mut description = editor.description().to_string();
                edit(&mut description);
                editor.set_description(description);
                Ok(())
            }
            EditorFocus::Fields => {
                let index = self.field_index;
                let Some(field) = editor.field(index) else {
                    return Ok(());
                };
                match self.current_part(editor) {
                    Some(FieldPart::Label) => {
                        let mut label = field.label.clone();
                        edit(&mut label);
                        editor.update_field_property(index, FieldProperty::Label(label))
                    }
                    Some(FieldPart::Placeholder) => {
                        let mut placeholder = field.placeholder.clone();
                        edit(&mut placeholder);
                        editor.update_field_property(index, FieldProperty::Placeholder(placeholder))
                    }
                    Some(FieldPart::Option(option_index)) => {
                        let mut option = field
                            .options
                            .get(option_index)
                            .cloned()
                            .unwrap_or_default();
                        edit(&mut option);
                        editor.update_option(index, option_index, option)
                    }
                    Some(FieldPart::AddOption) | Some(FieldPart::Required) | None => Ok(()),
                }
            }
        }
    }
}
