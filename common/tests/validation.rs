use chrono::NaiveDate;
use common::model::student::Program;
use common::validate::{validate, DraftFields, Field, ValidationError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 6, 15)
}

fn valid_fields() -> DraftFields {
    DraftFields {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.edu".to_string(),
        birth_date: "2004-03-01".to_string(),
        program: "Computer Science".to_string(),
    }
}

#[test]
fn valid_draft_passes_and_is_typed() {
    let draft = validate(&valid_fields(), today()).unwrap();

    assert_eq!(draft.name, "Ada Lovelace");
    assert_eq!(draft.email, "ada@example.edu");
    assert_eq!(draft.birth_date, date(2004, 3, 1));
    assert_eq!(draft.program, Program::ComputerScience);
}

#[test]
fn all_fields_are_required() {
    let errors = validate(&DraftFields::default(), today()).unwrap_err();

    assert_eq!(errors.len(), 4);
    assert_eq!(errors[&Field::Name], ValidationError::NameRequired);
    assert_eq!(errors[&Field::Email], ValidationError::EmailRequired);
    assert_eq!(errors[&Field::BirthDate], ValidationError::BirthDateRequired);
    assert_eq!(errors[&Field::Program], ValidationError::ProgramRequired);
}

#[test]
fn one_char_name_is_too_short() {
    let mut fields = valid_fields();
    fields.name = "A".to_string();

    let errors = validate(&fields, today()).unwrap_err();
    assert_eq!(errors[&Field::Name], ValidationError::NameTooShort);
    assert_eq!(errors.len(), 1);
}

#[test]
fn malformed_email_is_rejected_with_field_message() {
    for bad in ["not-an-email", "a@b", "a@b.c", "a b@c.com", "@x.com"] {
        let mut fields = valid_fields();
        fields.email = bad.to_string();

        let errors = validate(&fields, today()).unwrap_err();
        assert_eq!(errors[&Field::Email], ValidationError::EmailInvalid, "{bad}");
        assert_eq!(errors[&Field::Email].message(), "Please enter a valid email address");
    }
}

#[test]
fn email_match_is_case_insensitive() {
    let mut fields = valid_fields();
    fields.email = "ADA.LOVELACE@Example.EDU".to_string();
    assert!(validate(&fields, today()).is_ok());
}

#[test]
fn age_fifteen_is_rejected() {
    let mut fields = valid_fields();
    // Turns 16 the day after "today".
    fields.birth_date = "2010-06-16".to_string();

    let errors = validate(&fields, today()).unwrap_err();
    assert_eq!(errors[&Field::BirthDate], ValidationError::AgeOutOfRange);
}

#[test]
fn age_sixteen_is_accepted() {
    let mut fields = valid_fields();
    // Sixteenth birthday is exactly "today".
    fields.birth_date = "2010-06-15".to_string();
    assert!(validate(&fields, today()).is_ok());
}

#[test]
fn age_one_hundred_is_accepted() {
    let mut fields = valid_fields();
    fields.birth_date = "1926-06-15".to_string();
    assert!(validate(&fields, today()).is_ok());
}

#[test]
fn age_one_hundred_one_is_rejected() {
    let mut fields = valid_fields();
    fields.birth_date = "1925-06-14".to_string();

    let errors = validate(&fields, today()).unwrap_err();
    assert_eq!(errors[&Field::BirthDate], ValidationError::AgeOutOfRange);
}

#[test]
fn future_date_is_rejected_as_not_in_past() {
    let mut fields = valid_fields();
    fields.birth_date = "2030-01-01".to_string();

    let errors = validate(&fields, today()).unwrap_err();
    assert_eq!(errors[&Field::BirthDate], ValidationError::BirthDateNotInPast);
}

#[test]
fn todays_date_is_not_in_the_past() {
    let mut fields = valid_fields();
    fields.birth_date = "2026-06-15".to_string();

    let errors = validate(&fields, today()).unwrap_err();
    assert_eq!(errors[&Field::BirthDate], ValidationError::BirthDateNotInPast);
}

#[test]
fn garbage_date_is_unparseable() {
    let mut fields = valid_fields();
    fields.birth_date = "15/06/2004".to_string();

    let errors = validate(&fields, today()).unwrap_err();
    assert_eq!(errors[&Field::BirthDate], ValidationError::BirthDateUnparseable);
}

#[test]
fn unknown_program_is_rejected() {
    let mut fields = valid_fields();
    fields.program = "Astrology".to_string();

    let errors = validate(&fields, today()).unwrap_err();
    assert_eq!(errors[&Field::Program], ValidationError::ProgramUnknown);
}

#[test]
fn whitespace_is_trimmed_from_text_fields() {
    let mut fields = valid_fields();
    fields.name = "  Ada Lovelace  ".to_string();
    fields.email = " ada@example.edu ".to_string();

    let draft = validate(&fields, today()).unwrap();
    assert_eq!(draft.name, "Ada Lovelace");
    assert_eq!(draft.email, "ada@example.edu");
}

#[test]
fn errors_iterate_in_display_order() {
    let errors = validate(&DraftFields::default(), today()).unwrap_err();
    let order: Vec<Field> = errors.keys().copied().collect();
    assert_eq!(
        order,
        vec![Field::Name, Field::Email, Field::BirthDate, Field::Program]
    );
}
