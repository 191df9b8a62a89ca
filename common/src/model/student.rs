//! Student record model shared between the frontend and the backend API.
//!
//! The wire shape mirrors the REST backend: records travel as JSON objects
//! with a camelCase `birthDate` field and the program spelled out as its
//! human-readable name. `age` is never part of the payload; it is derived
//! from `birth_date` and the current date wherever it is displayed.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The fixed set of academic programs a student can be enrolled in.
///
/// Serialized with the full display name (e.g. `"Computer Science"`), which
/// is also what the backend stores and returns.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Program {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Software Engineering")]
    SoftwareEngineering,
    #[serde(rename = "Information Systems")]
    InformationSystems,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "Game Development")]
    GameDevelopment,
    #[serde(rename = "Artificial Intelligence")]
    ArtificialIntelligence,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
}

impl Program {
    /// Every selectable program, in the order offered by the create form.
    pub const ALL: [Program; 10] = [
        Program::ComputerScience,
        Program::SoftwareEngineering,
        Program::InformationSystems,
        Program::DataScience,
        Program::Cybersecurity,
        Program::WebDevelopment,
        Program::MobileDevelopment,
        Program::GameDevelopment,
        Program::ArtificialIntelligence,
        Program::MachineLearning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Program::ComputerScience => "Computer Science",
            Program::SoftwareEngineering => "Software Engineering",
            Program::InformationSystems => "Information Systems",
            Program::DataScience => "Data Science",
            Program::Cybersecurity => "Cybersecurity",
            Program::WebDevelopment => "Web Development",
            Program::MobileDevelopment => "Mobile Development",
            Program::GameDevelopment => "Game Development",
            Program::ArtificialIntelligence => "Artificial Intelligence",
            Program::MachineLearning => "Machine Learning",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Program {
    type Err = UnknownProgram;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownProgram(s.to_string()))
    }
}

/// Error returned when a string does not name one of the ten programs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownProgram(pub String);

impl fmt::Display for UnknownProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown program: {}", self.0)
    }
}

impl std::error::Error for UnknownProgram {}

/// A complete student record as returned by the backend.
///
/// The `id` is assigned by the backend on creation and is opaque to the
/// client; it is only ever compared for identity and interpolated into
/// request paths.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
    pub program: Program,
}

impl Student {
    /// Local filter predicate of the student directory.
    ///
    /// A record matches when the search term (empty matches everything) is a
    /// case-insensitive substring of the name or the email, AND the selected
    /// program (`None` matches everything) equals the record's program.
    pub fn matches_filter(&self, search_term: &str, selected_program: Option<Program>) -> bool {
        let term = search_term.to_lowercase();
        let matches_search = term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term);
        let matches_program = selected_program.is_none_or(|p| p == self.program);
        matches_search && matches_program
    }
}

/// The create/update payload: a student's fields before (or without) a
/// server-assigned id. `POST /students` and `PUT /students/{id}` both take
/// this full shape; there are no partial updates.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
    pub program: Program,
}

/// Age in whole years on `today`, adjusted for whether the birthday has
/// already occurred this year. Negative for future dates.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Distinct programs present in `records`, lexicographically sorted by
/// display name. Feeds the directory's program filter dropdown, so the
/// options track the loaded data rather than the full enumeration.
pub fn programs_present(records: &[Student]) -> Vec<Program> {
    let mut programs: Vec<Program> = records.iter().map(|s| s.program).collect();
    programs.sort_by_key(|p| p.as_str());
    programs.dedup();
    programs
}
