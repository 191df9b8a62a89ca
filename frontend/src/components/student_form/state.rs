//! State container for the student form (create and edit modes).
//!
//! Field values are the raw strings bound from the inputs; validation runs
//! wholesale on submit and its per-field errors live here next to the
//! submission slice. The redirect scheduled after a successful submission is
//! owned by this state so that dropping it (teardown, prop change) cancels
//! the pending navigation.

use chrono::NaiveDate;
use gloo_timers::callback::Timeout;

use common::model::student::{Student, StudentDraft};
use common::validate::{validate, DraftFields, ValidationErrors};

/// Delay before a successful submission navigates back to the directory.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit(String),
}

pub struct StudentFormComponent {
    pub mode: Mode,
    pub fields: DraftFields,
    pub errors: ValidationErrors,
    /// Edit-mode prefetch in flight.
    pub loading: bool,
    pub submitting: bool,
    pub submit_error: Option<String>,
    pub submit_success: Option<String>,
    /// Pending post-success redirect; dropping the handle cancels it.
    pub redirect_timer: Option<Timeout>,
    /// Guards the first-render fetch.
    pub loaded: bool,
}

impl StudentFormComponent {
    pub fn new(student_id: Option<String>) -> Self {
        let mode = match student_id {
            Some(id) => Mode::Edit(id),
            None => Mode::Create,
        };
        let loading = matches!(mode, Mode::Edit(_));
        Self {
            mode,
            fields: DraftFields::default(),
            errors: ValidationErrors::new(),
            loading,
            submitting: false,
            submit_error: None,
            submit_success: None,
            redirect_timer: None,
            loaded: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, Mode::Edit(_))
    }

    /// Whether a load response for `id` still belongs to this form. Late
    /// responses after the prefetch settled, or for a different record, are
    /// ignored by the caller.
    pub fn load_applies(&self, id: &str) -> bool {
        self.loading && matches!(&self.mode, Mode::Edit(edit_id) if edit_id == id)
    }

    /// Pre-populates all four fields from the fetched record.
    pub fn load_succeeded(&mut self, student: &Student) {
        self.fields = DraftFields {
            name: student.name.clone(),
            email: student.email.clone(),
            birth_date: student.birth_date.to_string(),
            program: student.program.as_str().to_string(),
        };
        self.loading = false;
    }

    /// Surfaces the facade message; no field is populated with partial data.
    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.submit_error = Some(message);
    }

    /// Validates the current fields; on success arms the submission slice
    /// and hands back the payload to send. On failure the per-field errors
    /// are stored and nothing leaves the form.
    pub fn try_submit(&mut self, today: NaiveDate) -> Option<StudentDraft> {
        match validate(&self.fields, today) {
            Ok(draft) => {
                self.errors.clear();
                self.submitting = true;
                self.submit_error = None;
                self.submit_success = None;
                Some(draft)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// In create mode the form resets for another entry; in edit mode the
    /// submitted values stay visible.
    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        match self.mode {
            Mode::Create => {
                self.submit_success = Some("Student created successfully!".to_string());
                self.fields = DraftFields::default();
                self.errors.clear();
            }
            Mode::Edit(_) => {
                self.submit_success = Some("Student updated successfully!".to_string());
            }
        }
    }

    /// Fields are preserved unchanged so the user can correct and retry.
    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.submit_error = Some(message);
    }
}
