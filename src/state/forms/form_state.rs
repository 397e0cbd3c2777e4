//! Form editor state and submission payloads

use super::error::EditorError;
use super::field::{option_placeholder, FieldDefinition, FieldProperty, FieldType, PALETTE};
use crate::api::{FormsApi, Session};
use crate::state::FormRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Form metadata plus its ordered fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDefinition {
    pub name: String,
    pub description: String,
    pub fields: Vec<FieldDefinition>,
}

/// Where a submission goes, fixed when the editor is initialized
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionTarget {
    #[default]
    Create,
    Update { id: String },
}

/// Containers a drag can start from or end in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    Palette,
    Fields,
}

/// A position inside a drop zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    pub zone: DropZone,
    pub index: usize,
}

impl DragLocation {
    pub fn palette(index: usize) -> Self {
        Self {
            zone: DropZone::Palette,
            index,
        }
    }

    pub fn fields(index: usize) -> Self {
        Self {
            zone: DropZone::Fields,
            index,
        }
    }
}

/// A completed drag. `destination` is `None` when dropped outside any zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragResult {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

/// Body sent to the forms API on save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "formName")]
    pub name: String,
    #[serde(rename = "formDescription")]
    pub description: String,
    #[serde(rename = "formFields")]
    pub fields: Vec<FieldDefinition>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Keys of the existing record this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// In-progress form definition being created or edited
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormEditor {
    definition: FormDefinition,
    target: SubmissionTarget,
    extra: Map<String, Value>,
}

impl FormEditor {
    /// Start an empty editor in create mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record (edit mode) or from nothing (create mode).
    ///
    /// Fields are copied verbatim, including options on non-radio fields.
    pub fn initialize(existing: Option<&FormRecord>) -> Self {
        match existing {
            Some(record) => Self {
                definition: FormDefinition {
                    name: record.name.clone(),
                    description: record.description.clone(),
                    fields: record.fields.clone(),
                },
                target: SubmissionTarget::Update {
                    id: record.id.clone(),
                },
                extra: record.extra.clone(),
            },
            None => Self::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn description(&self) -> &str {
        &self.definition.description
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.definition.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldDefinition> {
        self.definition.fields.get(index)
    }

    pub fn field_count(&self) -> usize {
        self.definition.fields.len()
    }

    pub fn target(&self) -> &SubmissionTarget {
        &self.target
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.target, SubmissionTarget::Update { .. })
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.definition.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.definition.description = description.into();
    }

    /// Append a blank field of the given type to the end of the form
    pub fn append_field(&mut self, field_type: FieldType) {
        self.definition
            .fields
            .push(FieldDefinition::new(field_type));
    }

    /// Move the field at `from` so it ends up at `to`.
    ///
    /// Returns `false` without touching anything when either index is out
    /// of bounds.
    pub fn reorder_field(&mut self, from: usize, to: usize) -> bool {
        let len = self.definition.fields.len();
        if from >= len || to >= len {
            return false;
        }
        let field = self.definition.fields.remove(from);
        self.definition.fields.insert(to, field);
        true
    }

    /// Apply a finished drag. Returns whether the form changed.
    pub fn apply_drag(&mut self, drag: DragResult) -> bool {
        let Some(destination) = drag.destination else {
            return false;
        };

        match (drag.source.zone, destination.zone) {
            (DropZone::Palette, DropZone::Fields) => match PALETTE.get(drag.source.index) {
                Some(field_type) => {
                    self.append_field(*field_type);
                    true
                }
                None => false,
            },
            (DropZone::Fields, DropZone::Fields) => {
                self.reorder_field(drag.source.index, destination.index)
            }
            // The palette accepts no drops
            (_, DropZone::Palette) => false,
        }
    }

    /// Set a scalar property on the field at `index`
    pub fn update_field_property(
        &mut self,
        index: usize,
        property: FieldProperty,
    ) -> Result<(), EditorError> {
        let field = self.field_mut(index)?;
        property.apply(field);
        Ok(())
    }

    /// Replace the text of one option on the field at `field_index`
    pub fn update_option(
        &mut self,
        field_index: usize,
        option_index: usize,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let field = self.field_mut(field_index)?;
        let len = field.options.len();
        let option = field
            .options
            .get_mut(option_index)
            .ok_or(EditorError::IndexOutOfRange {
                index: option_index,
                len,
            })?;
        *option = value.into();
        Ok(())
    }

    /// Append an "Option N" entry to a radio field, returning its index.
    ///
    /// Blank options are committed to the placeholder they are displayed
    /// with before the new one is added.
    pub fn add_option(&mut self, field_index: usize) -> Result<usize, EditorError> {
        let field = self.field_mut(field_index)?;
        if !field.field_type.has_options() {
            return Err(EditorError::InvalidFieldType {
                expected: FieldType::Radio,
                actual: field.field_type,
            });
        }

        for (i, option) in field.options.iter_mut().enumerate() {
            if option.is_empty() {
                *option = option_placeholder(i);
            }
        }
        let index = field.options.len();
        field.options.push(option_placeholder(index));
        Ok(index)
    }

    /// First required input still left blank, as a message for the user.
    ///
    /// The form name, its description and every field's label must be
    /// filled in before saving.
    pub fn missing_input(&self) -> Option<String> {
        if self.definition.name.trim().is_empty() {
            return Some("Form name is required.".to_string());
        }
        if self.definition.description.trim().is_empty() {
            return Some("Form description is required.".to_string());
        }
        self.definition
            .fields
            .iter()
            .position(|f| f.label.trim().is_empty())
            .map(|i| format!("Field {} needs a name.", i + 1))
    }

    /// Build the payload for saving, stamped with the current time
    pub fn build_submission_payload(&self) -> SubmissionPayload {
        self.build_submission_payload_at(Utc::now())
    }

    /// Build the payload for saving, stamped with `now`
    pub fn build_submission_payload_at(&self, now: DateTime<Utc>) -> SubmissionPayload {
        let id = match &self.target {
            SubmissionTarget::Create => None,
            SubmissionTarget::Update { id } => Some(id.clone()),
        };

        SubmissionPayload {
            id,
            name: self.definition.name.clone(),
            description: self.definition.description.clone(),
            fields: self.definition.fields.clone(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            extra: self.extra.clone(),
        }
    }

    /// Send the form to the API: one create or update call, never retried
    pub async fn submit(
        &self,
        api: &dyn FormsApi,
        session: &Session,
    ) -> Result<FormRecord, EditorError> {
        let payload = self.build_submission_payload();
        let result = match &self.target {
            SubmissionTarget::Create => api.create_form(session, &payload).await,
            SubmissionTarget::Update { id } => api.update_form(session, id, &payload).await,
        };

        result.map_err(|e| {
            tracing::debug!("Form submission failed: {e:#}");
            EditorError::SubmissionFailed(e.to_string())
        })
    }

    fn field_mut(&mut self, index: usize) -> Result<&mut FieldDefinition, EditorError> {
        let len = self.definition.fields.len();
        self.definition
            .fields
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFormsApi;
    use anyhow::anyhow;
    use chrono::TimeZone;

    fn create_test_record() -> FormRecord {
        let mut color = FieldDefinition::new(FieldType::Radio);
        color.label = "Favourite colour".to_string();
        color.required = true;
        color.options = vec!["Red".to_string(), "Green".to_string()];

        let mut email = FieldDefinition::new(FieldType::Email);
        email.label = "Email".to_string();
        email.placeholder = "you@example.com".to_string();

        let mut extra = Map::new();
        extra.insert("userId".to_string(), Value::from("user-7"));

        FormRecord {
            id: "form-1".to_string(),
            name: "Survey".to_string(),
            description: "Quarterly survey".to_string(),
            fields: vec![color, email],
            created_at: Some("2024-01-01T00:00:00.000Z".to_string()),
            extra,
        }
    }

    fn editor_with_labels(labels: &[&str]) -> FormEditor {
        let mut editor = FormEditor::new();
        for (i, label) in labels.iter().enumerate() {
            editor.append_field(FieldType::Text);
            editor
                .update_field_property(i, FieldProperty::Label(label.to_string()))
                .unwrap();
        }
        editor
    }

    fn labels(editor: &FormEditor) -> Vec<&str> {
        editor.fields().iter().map(|f| f.label.as_str()).collect()
    }

    mod initialize {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_create_mode_starts_empty() {
            let editor = FormEditor::initialize(None);
            assert_eq!(editor.name(), "");
            assert_eq!(editor.description(), "");
            assert_eq!(editor.field_count(), 0);
            assert!(!editor.is_edit_mode());
            assert_eq!(editor.target(), &SubmissionTarget::Create);
        }

        #[test]
        fn test_edit_mode_copies_record() {
            let record = create_test_record();
            let editor = FormEditor::initialize(Some(&record));
            assert!(editor.is_edit_mode());
            assert_eq!(editor.name(), "Survey");
            assert_eq!(editor.description(), "Quarterly survey");
            assert_eq!(editor.fields(), record.fields.as_slice());
        }

        #[test]
        fn test_initialize_is_idempotent() {
            let record = create_test_record();
            assert_eq!(
                FormEditor::initialize(Some(&record)),
                FormEditor::initialize(Some(&record))
            );
            assert_eq!(FormEditor::initialize(None), FormEditor::new());
        }
    }

    mod append_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_radio_gets_one_option() {
            let mut editor = FormEditor::new();
            editor.append_field(FieldType::Radio);
            assert_eq!(editor.fields()[0].options.len(), 1);
        }

        #[test]
        fn test_other_types_get_no_options() {
            let mut editor = FormEditor::new();
            editor.append_field(FieldType::Text);
            editor.append_field(FieldType::Email);
            editor.append_field(FieldType::Textarea);
            assert!(editor.fields().iter().all(|f| f.options.is_empty()));
        }

        #[test]
        fn test_appends_at_end() {
            let mut editor = editor_with_labels(&["a"]);
            editor.append_field(FieldType::Textarea);
            assert_eq!(editor.field_count(), 2);
            assert_eq!(editor.fields()[1].field_type, FieldType::Textarea);
        }
    }

    mod reorder_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_moves_forward() {
            let mut editor = editor_with_labels(&["a", "b", "c", "d"]);
            assert!(editor.reorder_field(0, 2));
            assert_eq!(labels(&editor), vec!["b", "c", "a", "d"]);
        }

        #[test]
        fn test_moves_backward() {
            let mut editor = editor_with_labels(&["a", "b", "c", "d"]);
            assert!(editor.reorder_field(3, 1));
            assert_eq!(labels(&editor), vec!["a", "d", "b", "c"]);
        }

        #[test]
        fn test_same_index_is_noop() {
            let mut editor = editor_with_labels(&["a", "b"]);
            let before = editor.clone();
            editor.reorder_field(0, 0);
            assert_eq!(editor, before);
        }

        #[test]
        fn test_out_of_bounds_is_noop() {
            let mut editor = editor_with_labels(&["a", "b"]);
            let before = editor.clone();
            assert!(!editor.reorder_field(2, 0));
            assert!(!editor.reorder_field(0, 2));
            assert_eq!(editor, before);
        }

        #[test]
        fn test_preserves_contents_for_all_index_pairs() {
            let base = editor_with_labels(&["a", "b", "c", "d", "e"]);
            let mut expected: Vec<&str> = labels(&base);
            expected.sort();

            for from in 0..base.field_count() {
                for to in 0..base.field_count() {
                    let mut editor = base.clone();
                    assert!(editor.reorder_field(from, to));
                    assert_eq!(editor.field_count(), base.field_count());
                    let mut got = labels(&editor);
                    got.sort();
                    assert_eq!(got, expected, "reorder {from} -> {to}");
                    assert_eq!(editor.fields()[to], base.fields()[from]);
                }
            }
        }
    }

    mod apply_drag {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_palette_to_fields_appends_palette_entry() {
            let mut editor = FormEditor::new();
            let changed = editor.apply_drag(DragResult {
                source: DragLocation::palette(2),
                destination: Some(DragLocation::fields(0)),
            });
            assert!(changed);
            assert_eq!(editor.fields()[0].field_type, FieldType::Radio);
        }

        #[test]
        fn test_fields_to_fields_reorders() {
            let mut editor = editor_with_labels(&["a", "b", "c"]);
            editor.apply_drag(DragResult {
                source: DragLocation::fields(2),
                destination: Some(DragLocation::fields(0)),
            });
            assert_eq!(labels(&editor), vec!["c", "a", "b"]);
        }

        #[test]
        fn test_drop_outside_is_noop() {
            let mut editor = editor_with_labels(&["a", "b"]);
            let before = editor.clone();
            let changed = editor.apply_drag(DragResult {
                source: DragLocation::fields(0),
                destination: None,
            });
            assert!(!changed);
            assert_eq!(editor, before);
        }

        #[test]
        fn test_drop_onto_palette_is_noop() {
            let mut editor = editor_with_labels(&["a", "b"]);
            let before = editor.clone();
            assert!(!editor.apply_drag(DragResult {
                source: DragLocation::fields(0),
                destination: Some(DragLocation::palette(1)),
            }));
            assert!(!editor.apply_drag(DragResult {
                source: DragLocation::palette(0),
                destination: Some(DragLocation::palette(1)),
            }));
            assert_eq!(editor, before);
        }

        #[test]
        fn test_unknown_palette_index_is_noop() {
            let mut editor = FormEditor::new();
            assert!(!editor.apply_drag(DragResult {
                source: DragLocation::palette(PALETTE.len()),
                destination: Some(DragLocation::fields(0)),
            }));
            assert_eq!(editor.field_count(), 0);
        }
    }

    mod update_field_property {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_sets_each_property() {
            let mut editor = FormEditor::new();
            editor.append_field(FieldType::Text);
            editor
                .update_field_property(0, FieldProperty::Label("Name".to_string()))
                .unwrap();
            editor
                .update_field_property(0, FieldProperty::Placeholder("Jane Doe".to_string()))
                .unwrap();
            editor
                .update_field_property(0, FieldProperty::Required(true))
                .unwrap();

            let field = &editor.fields()[0];
            assert_eq!(field.label, "Name");
            assert_eq!(field.placeholder, "Jane Doe");
            assert!(field.required);
        }

        #[test]
        fn test_out_of_range_reports_and_leaves_state() {
            let mut editor = editor_with_labels(&["a"]);
            let before = editor.clone();
            let err = editor
                .update_field_property(1, FieldProperty::Required(true))
                .unwrap_err();
            assert_eq!(err, EditorError::IndexOutOfRange { index: 1, len: 1 });
            assert_eq!(editor, before);
        }
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_option() {
            let mut editor = FormEditor::new();
            editor.append_field(FieldType::Radio);
            editor.update_option(0, 0, "Yes").unwrap();
            assert_eq!(editor.fields()[0].options, vec!["Yes".to_string()]);
        }

        #[test]
        fn test_update_option_out_of_range() {
            let mut editor = FormEditor::new();
            editor.append_field(FieldType::Radio);
            let before = editor.clone();

            assert_eq!(
                editor.update_option(0, 1, "x"),
                Err(EditorError::IndexOutOfRange { index: 1, len: 1 })
            );
            assert_eq!(
                editor.update_option(3, 0, "x"),
                Err(EditorError::IndexOutOfRange { index: 3, len: 1 })
            );
            assert_eq!(editor, before);
        }

        #[test]
        fn test_add_option_third_defaults_to_option_3() {
            let mut editor = FormEditor::new();
            editor.append_field(FieldType::Radio);
            editor.update_option(0, 0, "Yes").unwrap();
            editor.add_option(0).unwrap();
            editor.update_option(0, 1, "No").unwrap();

            let index = editor.add_option(0).unwrap();
            assert_eq!(index, 2);
            assert_eq!(editor.fields()[0].options[2], "Option 3");
            assert_eq!(
                editor.fields()[0].options[..2].to_vec(),
                vec!["Yes".to_string(), "No".to_string()]
            );
        }

        #[test]
        fn test_add_option_commits_blank_options() {
            let mut editor = FormEditor::new();
            editor.append_field(FieldType::Radio);
            editor.add_option(0).unwrap();
            assert_eq!(
                editor.fields()[0].options,
                vec!["Option 1".to_string(), "Option 2".to_string()]
            );
        }

        #[test]
        fn test_add_option_rejects_non_radio() {
            let mut editor = FormEditor::new();
            editor.append_field(FieldType::Textarea);
            let before = editor.clone();
            assert_eq!(
                editor.add_option(0),
                Err(EditorError::InvalidFieldType {
                    expected: FieldType::Radio,
                    actual: FieldType::Textarea,
                })
            );
            assert_eq!(editor, before);
        }

        #[test]
        fn test_add_option_out_of_range() {
            let mut editor = FormEditor::new();
            assert_eq!(
                editor.add_option(0),
                Err(EditorError::IndexOutOfRange { index: 0, len: 0 })
            );
        }
    }

    mod missing_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reports_in_order() {
            let mut editor = FormEditor::new();
            assert_eq!(
                editor.missing_input().as_deref(),
                Some("Form name is required.")
            );
            editor.set_name("Survey");
            assert_eq!(
                editor.missing_input().as_deref(),
                Some("Form description is required.")
            );
            editor.set_description("About you");
            assert_eq!(editor.missing_input(), None);

            editor.append_field(FieldType::Text);
            editor.append_field(FieldType::Email);
            editor
                .update_field_property(0, FieldProperty::Label("Name".to_string()))
                .unwrap();
            assert_eq!(
                editor.missing_input().as_deref(),
                Some("Field 2 needs a name.")
            );
        }

        #[test]
        fn test_whitespace_counts_as_blank() {
            let mut editor = FormEditor::new();
            editor.set_name("   ");
            assert!(editor.missing_input().is_some());
        }
    }

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        fn fixed_now() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
        }

        #[test]
        fn test_created_at_is_iso_8601_millis() {
            let payload = FormEditor::new().build_submission_payload_at(fixed_now());
            assert_eq!(payload.created_at, "2024-05-06T07:08:09.000Z");
        }

        #[test]
        fn test_round_trip_reproduces_record() {
            let record = create_test_record();
            let payload = FormEditor::initialize(Some(&record)).build_submission_payload();
            assert_eq!(payload.id.as_deref(), Some("form-1"));
            assert_eq!(payload.name, record.name);
            assert_eq!(payload.description, record.description);
            assert_eq!(payload.fields, record.fields);
            assert_eq!(payload.extra, record.extra);
            assert_ne!(Some(payload.created_at), record.created_at);
        }

        #[test]
        fn test_stray_options_kept_verbatim() {
            let mut record = create_test_record();
            record.fields[1].options = vec!["leftover".to_string()];
            let payload = FormEditor::initialize(Some(&record)).build_submission_payload();
            assert_eq!(payload.fields[1].options, vec!["leftover".to_string()]);
        }

        #[test]
        fn test_radio_scenario() {
            let mut editor = FormEditor::initialize(None);
            editor.append_field(FieldType::Radio);
            editor.add_option(0).unwrap();
            editor.add_option(0).unwrap();
            editor.reorder_field(0, 0);

            let payload = editor.build_submission_payload();
            assert_eq!(payload.fields.len(), 1);
            assert_eq!(payload.fields[0].field_type, FieldType::Radio);
            assert_eq!(
                payload.fields[0].options,
                vec![
                    "Option 1".to_string(),
                    "Option 2".to_string(),
                    "Option 3".to_string()
                ]
            );
        }

        #[test]
        fn test_wire_shape_create_mode() {
            let mut editor = FormEditor::new();
            editor.set_name("Contact");
            editor.set_description("Reach us");
            editor.append_field(FieldType::Text);

            let json = serde_json::to_value(editor.build_submission_payload_at(fixed_now())).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "formName": "Contact",
                    "formDescription": "Reach us",
                    "formFields": [{
                        "fieldName": "",
                        "fieldType": "text",
                        "required": false,
                        "placeholder": "",
                        "options": []
                    }],
                    "createdAt": "2024-05-06T07:08:09.000Z"
                })
            );
        }

        #[test]
        fn test_wire_shape_edit_mode_merges_record_keys() {
            let record = create_test_record();
            let json = serde_json::to_value(
                FormEditor::initialize(Some(&record)).build_submission_payload_at(fixed_now()),
            )
            .unwrap();
            assert_eq!(json["id"], "form-1");
            assert_eq!(json["userId"], "user-7");
            assert_eq!(json["createdAt"], "2024-05-06T07:08:09.000Z");
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        fn session() -> Session {
            Session::new("token-123", "jane@example.com")
        }

        #[tokio::test]
        async fn test_create_mode_calls_create_once() {
            let mut api = MockFormsApi::new();
            api.expect_create_form()
                .times(1)
                .returning(|session, payload| {
                    assert_eq!(session.bearer(), "Bearer token-123");
                    assert!(payload.id.is_none());
                    Ok(FormRecord {
                        id: "new-id".to_string(),
                        name: payload.name.clone(),
                        description: payload.description.clone(),
                        fields: payload.fields.clone(),
                        created_at: Some(payload.created_at.clone()),
                        extra: Map::new(),
                    })
                });
            api.expect_update_form().times(0);

            let mut editor = FormEditor::new();
            editor.set_name("Contact");
            let record = editor.submit(&api, &session()).await.unwrap();
            assert_eq!(record.id, "new-id");
            assert_eq!(record.name, "Contact");
        }

        #[tokio::test]
        async fn test_edit_mode_calls_update_with_id() {
            let mut api = MockFormsApi::new();
            api.expect_create_form().times(0);
            api.expect_update_form()
                .times(1)
                .returning(|_, id, payload| {
                    assert_eq!(id.to_string(), "form-1");
                    assert_eq!(payload.id.as_deref(), Some("form-1"));
                    Ok(create_test_record())
                });

            let record = create_test_record();
            let editor = FormEditor::initialize(Some(&record));
            let saved = editor.submit(&api, &session()).await.unwrap();
            assert_eq!(saved.id, "form-1");
        }

        #[test]
        fn test_failure_maps_to_submission_failed_and_keeps_state() {
            let mut api = MockFormsApi::new();
            api.expect_create_form()
                .times(1)
                .returning(|_, _| Err(anyhow!("Form name is required")));

            let mut editor = FormEditor::new();
            editor.append_field(FieldType::Email);
            let before = editor.clone();

            let err = tokio_test::block_on(editor.submit(&api, &session())).unwrap_err();
            assert_eq!(
                err,
                EditorError::SubmissionFailed("Form name is required".to_string())
            );
            assert_eq!(editor, before);
        }
    }
}
