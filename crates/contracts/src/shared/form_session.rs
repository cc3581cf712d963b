//! Create/edit form lifecycle shared by every details form.
//!
//! A [`FormSession`] owns one draft record, its validation errors, and the
//! submit guard. The UI layer keeps the session behind a reactive signal and
//! delegates persistence to an async save it runs itself; the session only
//! decides whether a submission may proceed and how its outcome lands.

use super::validation::FieldErrors;

/// Message shown when a save is rejected with anything other than a
/// field-error payload.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save. Please try again.";

/// A draft record held by a form while it is being edited.
pub trait FormDraft: Clone {
    /// Full rule set for this record. Runs every rule in one pass; one
    /// failing field never hides another field's error.
    fn validate(&self) -> FieldErrors;

    /// Back to the create-mode seed, discarding entered values.
    fn reset(&mut self);
}

/// Why a save attempt did not persist.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveError {
    /// The backend rejected individual fields; rendered exactly like local
    /// validation errors.
    Fields(FieldErrors),
    /// Anything else, collapsed to one generic message.
    General(String),
}

impl SaveError {
    /// Classify a rejection body from the persistence layer. A JSON object
    /// of per-field messages becomes [`SaveError::Fields`]; any other shape
    /// becomes the generic failure.
    pub fn from_response_body(body: &str) -> Self {
        match serde_json::from_str::<FieldErrors>(body) {
            Ok(fields) if !fields.is_empty() => SaveError::Fields(fields),
            _ => SaveError::General(SAVE_FAILED_MESSAGE.to_string()),
        }
    }

    pub fn general() -> Self {
        SaveError::General(SAVE_FAILED_MESSAGE.to_string())
    }
}

/// State of one mounted form: the draft, its errors, and the submit guard.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession<D> {
    draft: D,
    errors: FieldErrors,
    general_error: Option<String>,
    submitting: bool,
    editing_id: Option<i64>,
}

impl<D: FormDraft> FormSession<D> {
    /// Seed for create mode.
    pub fn create(draft: D) -> Self {
        Self {
            draft,
            errors: FieldErrors::new(),
            general_error: None,
            submitting: false,
            editing_id: None,
        }
    }

    /// Seed for edit mode, from a copy of the persisted record.
    pub fn edit(id: i64, draft: D) -> Self {
        Self {
            editing_id: Some(id),
            ..Self::create(draft)
        }
    }

    /// Reset the whole session when the editing target changes. Unsaved
    /// edits for the previous target are discarded. A call with the current
    /// target identity is a no-op.
    pub fn reseed(&mut self, target: Option<i64>, seed: impl FnOnce() -> D) {
        if self.editing_id == target {
            return;
        }
        *self = match target {
            Some(id) => Self::edit(id, seed()),
            None => Self::create(seed()),
        };
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Mutate the draft in response to a field-level change event.
    pub fn update(&mut self, mutate: impl FnOnce(&mut D)) {
        mutate(&mut self.draft);
    }

    /// Drop the error for one field after the user edits it.
    pub fn clear_field_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
        self.general_error = None;
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Surface a form-wide error outside the submit path (e.g. the edit
    /// target failed to load).
    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.general_error = Some(message.into());
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate the draft and claim the submit slot. Returns the record to
    /// persist, or `None` when validation failed or a save is already in
    /// flight (the re-submission guard).
    pub fn begin_submit(&mut self) -> Option<D> {
        if self.submitting {
            return None;
        }
        let errors = self.draft.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors.clear();
        self.general_error = None;
        self.submitting = true;
        Some(self.draft.clone())
    }

    /// Record the save outcome and release the submit slot. The draft is
    /// kept intact on failure so the user's input survives; a successful
    /// create resets it to the seed (edit mode relies on the surrounding
    /// list refreshing instead).
    pub fn finish_submit(&mut self, outcome: Result<(), SaveError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                if self.editing_id.is_none() {
                    self.draft.reset();
                }
                self.errors.clear();
                self.general_error = None;
            }
            Err(SaveError::Fields(fields)) => self.errors.merge(fields),
            Err(SaveError::General(message)) => self.general_error = Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct NoteDraft {
        text: String,
    }

    impl NoteDraft {
        fn new() -> Self {
            Self {
                text: String::new(),
            }
        }
    }

    impl FormDraft for NoteDraft {
        fn validate(&self) -> FieldErrors {
            let mut errors = FieldErrors::new();
            if self.text.is_empty() {
                errors.set("text", "Text is required.");
            }
            errors
        }

        fn reset(&mut self) {
            *self = Self::new();
        }
    }

    fn valid_session() -> FormSession<NoteDraft> {
        let mut session = FormSession::create(NoteDraft::new());
        session.update(|d| d.text = "hello".to_string());
        session
    }

    #[test]
    fn test_invalid_draft_blocks_submit_and_reports_errors() {
        let mut session = FormSession::create(NoteDraft::new());
        assert!(session.begin_submit().is_none());
        assert_eq!(session.error("text"), Some("Text is required."));
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_resubmission_guard() {
        let mut session = valid_session();
        assert!(session.begin_submit().is_some());
        assert!(session.is_submitting());
        // a second submit while the save is pending must not proceed
        assert!(session.begin_submit().is_none());
        session.finish_submit(Ok(()));
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_successful_create_resets_draft() {
        let mut session = valid_session();
        session.begin_submit().unwrap();
        session.finish_submit(Ok(()));
        assert_eq!(session.draft().text, "");
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_successful_edit_keeps_draft() {
        let mut session = FormSession::edit(7, NoteDraft {
            text: "existing".to_string(),
        });
        session.begin_submit().unwrap();
        session.finish_submit(Ok(()));
        assert_eq!(session.draft().text, "existing");
        assert_eq!(session.editing_id(), Some(7));
    }

    #[test]
    fn test_field_level_rejection_merges_into_errors() {
        let mut session = valid_session();
        session.begin_submit().unwrap();
        let mut fields = FieldErrors::new();
        fields.set("text", "Text already exists.");
        session.finish_submit(Err(SaveError::Fields(fields)));
        assert_eq!(session.error("text"), Some("Text already exists."));
        assert_eq!(session.draft().text, "hello");
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_opaque_rejection_surfaces_general_message() {
        let mut session = valid_session();
        session.begin_submit().unwrap();
        session.finish_submit(Err(SaveError::general()));
        assert_eq!(session.general_error(), Some(SAVE_FAILED_MESSAGE));
        assert_eq!(session.draft().text, "hello");
    }

    #[test]
    fn test_reseed_on_identity_change_only() {
        let mut session = FormSession::edit(1, NoteDraft {
            text: "first".to_string(),
        });
        session.update(|d| d.text = "unsaved edit".to_string());

        // same target: unsaved edits survive
        session.reseed(Some(1), || NoteDraft {
            text: "first".to_string(),
        });
        assert_eq!(session.draft().text, "unsaved edit");

        // different target: full reset
        session.reseed(Some(2), || NoteDraft {
            text: "second".to_string(),
        });
        assert_eq!(session.draft().text, "second");
        assert_eq!(session.editing_id(), Some(2));

        // back to create mode
        session.reseed(None, NoteDraft::new);
        assert!(!session.is_editing());
        assert_eq!(session.draft().text, "");
    }

    #[test]
    fn test_save_error_classification() {
        let fields = SaveError::from_response_body(r#"{"text":"Too long."}"#);
        let mut expected = FieldErrors::new();
        expected.set("text", "Too long.");
        assert_eq!(fields, SaveError::Fields(expected));

        assert_eq!(
            SaveError::from_response_body("internal server error"),
            SaveError::general()
        );
        assert_eq!(SaveError::from_response_body("{}"), SaveError::general());
        assert_eq!(
            SaveError::from_response_body(r#"{"count":3}"#),
            SaveError::general()
        );
    }
}
