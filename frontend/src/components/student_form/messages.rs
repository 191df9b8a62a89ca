use common::model::student::Student;

use crate::services::student_service::ServiceError;

pub enum Msg {
    NameChanged(String),
    EmailChanged(String),
    BirthDateChanged(String),
    ProgramChanged(String),
    Submit,
    SubmitFinished(Result<Student, ServiceError>),
    /// Result of the edit-mode prefetch; carries the requested id so stale
    /// responses can be dropped.
    StudentLoaded {
        id: String,
        result: Result<Student, ServiceError>,
    },
    RedirectNow,
    Cancel,
}
