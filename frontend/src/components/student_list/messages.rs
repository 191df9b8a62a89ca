use common::model::student::Student;

use crate::services::student_service::ServiceError;

pub enum Msg {
    /// Fetch (or re-fetch) the whole collection.
    Load,
    Loaded(Result<Vec<Student>, ServiceError>),
    SearchChanged(String),
    ProgramChanged(String),
    RequestDelete(Student),
    CancelDelete,
    ConfirmDelete,
    DeleteFinished {
        id: String,
        result: Result<(), ServiceError>,
    },
}
