//! Wholesale client-side validation for the student form.
//!
//! The form binds raw strings (including the `<input type="date">` value and
//! the `<select>` value); [`validate`] checks all four fields at once against
//! a caller-supplied "today" and either yields a typed [`StudentDraft`] ready
//! for the backend or a per-field error map. Invalid drafts are never sent
//! over the wire.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use regex::Regex;

use crate::model::student::{age_on, Program, StudentDraft};

const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

const MIN_AGE: i32 = 16;
const MAX_AGE: i32 = 100;

/// The four form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    BirthDate,
    Program,
}

/// Why a field was rejected. `Display` yields the inline message shown next
/// to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    NameTooShort,
    EmailRequired,
    EmailInvalid,
    BirthDateRequired,
    BirthDateUnparseable,
    BirthDateNotInPast,
    AgeOutOfRange,
    ProgramRequired,
    ProgramUnknown,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "Name is required",
            ValidationError::NameTooShort => "Name must be at least 2 characters",
            ValidationError::EmailRequired => "Email is required",
            ValidationError::EmailInvalid => "Please enter a valid email address",
            ValidationError::BirthDateRequired => "Birth date is required",
            ValidationError::BirthDateUnparseable => "Please enter a valid date",
            ValidationError::BirthDateNotInPast => "Birth date must be in the past",
            ValidationError::AgeOutOfRange => "Student must be between 16 and 100 years old",
            ValidationError::ProgramRequired => "Program is required",
            ValidationError::ProgramUnknown => "Please select a valid program",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Raw form field values, exactly as bound from the DOM inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftFields {
    pub name: String,
    pub email: String,
    /// `YYYY-MM-DD`, the value format of `<input type="date">`.
    pub birth_date: String,
    /// Display name of the selected program, empty when unselected.
    pub program: String,
}

/// Per-field rejection map; empty means the draft is valid.
pub type ValidationErrors = BTreeMap<Field, ValidationError>;

/// Validates all four fields against `today` and builds the wire payload.
///
/// All fields are required in both create and edit mode. Each field reports
/// at most one error, the first rule it breaks:
/// - name: non-empty, at least 2 characters;
/// - email: non-empty, `local-part@domain` with a dotted TLD of two or more
///   letters;
/// - birth date: present, parseable, strictly in the past, and yielding an
///   age between 16 and 100 inclusive (a future date is rejected as
///   not-in-past before any age check);
/// - program: one of the ten known programs.
pub fn validate(fields: &DraftFields, today: NaiveDate) -> Result<StudentDraft, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = fields.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, ValidationError::NameRequired);
    } else if name.chars().count() < 2 {
        errors.insert(Field::Name, ValidationError::NameTooShort);
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, ValidationError::EmailRequired);
    } else {
        let re = Regex::new(EMAIL_PATTERN).unwrap();
        if !re.is_match(email) {
            errors.insert(Field::Email, ValidationError::EmailInvalid);
        }
    }

    let mut birth_date = None;
    if fields.birth_date.trim().is_empty() {
        errors.insert(Field::BirthDate, ValidationError::BirthDateRequired);
    } else {
        match NaiveDate::from_str(fields.birth_date.trim()) {
            Err(_) => {
                errors.insert(Field::BirthDate, ValidationError::BirthDateUnparseable);
            }
            Ok(date) if date >= today => {
                errors.insert(Field::BirthDate, ValidationError::BirthDateNotInPast);
            }
            Ok(date) => {
                let age = age_on(date, today);
                if !(MIN_AGE..=MAX_AGE).contains(&age) {
                    errors.insert(Field::BirthDate, ValidationError::AgeOutOfRange);
                } else {
                    birth_date = Some(date);
                }
            }
        }
    }

    let mut program = None;
    if fields.program.is_empty() {
        errors.insert(Field::Program, ValidationError::ProgramRequired);
    } else {
        match Program::from_str(&fields.program) {
            Ok(p) => program = Some(p),
            Err(_) => {
                errors.insert(Field::Program, ValidationError::ProgramUnknown);
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All four options are Some once the error map is empty.
    Ok(StudentDraft {
        name: name.to_string(),
        email: email.to_string(),
        birth_date: birth_date.unwrap(),
        program: program.unwrap(),
    })
}
