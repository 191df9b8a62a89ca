//! Typed facade over the student REST backend.
//!
//! Five operations, one HTTP call each, no retries. Every failure - whether
//! the transport failed outright or the backend answered with a non-success
//! status - is normalized into a [`ServiceError`] whose display reads
//! `"Failed to <verb> student: <message>"`, where the message is the
//! backend's own error text when it sent one and a transport-level
//! description otherwise. Callers only ever render that string; they never
//! branch on status codes.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

use common::model::student::{Student, StudentDraft};

const STUDENTS_URL: &str = "/api/students";

/// Normalized failure of a facade operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to {action}: {message}")]
pub struct ServiceError {
    action: &'static str,
    message: String,
}

impl ServiceError {
    fn new(action: &'static str, message: impl Into<String>) -> Self {
        Self {
            action,
            message: message.into(),
        }
    }
}

/// `GET /students` - the complete collection, unpaginated and unfiltered.
pub async fn list_all() -> Result<Vec<Student>, ServiceError> {
    const ACTION: &str = "fetch students";
    let response = Request::get(STUDENTS_URL)
        .send()
        .await
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))?;
    if !response.ok() {
        return Err(ServiceError::new(ACTION, failure_message(response).await));
    }
    response
        .json()
        .await
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))
}

/// `GET /students/{id}` - a single record; a missing id surfaces as the
/// backend's not-found message.
pub async fn get_by_id(id: &str) -> Result<Student, ServiceError> {
    const ACTION: &str = "fetch student";
    let response = Request::get(&format!("{STUDENTS_URL}/{id}"))
        .send()
        .await
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))?;
    if !response.ok() {
        return Err(ServiceError::new(ACTION, failure_message(response).await));
    }
    response
        .json()
        .await
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))
}

/// `POST /students` - submits a draft, returns the record with its
/// server-assigned id.
pub async fn create(draft: &StudentDraft) -> Result<Student, ServiceError> {
    const ACTION: &str = "create student";
    let response = Request::post(STUDENTS_URL)
        .json(draft)
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))?
        .send()
        .await
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))?;
    if !response.ok() {
        return Err(ServiceError::new(ACTION, failure_message(response).await));
    }
    response
        .json()
        .await
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))
}

/// `PUT /students/{id}` - full-record replace with the same body shape as
/// create; there are no partial updates.
pub async fn update(id: &str, draft: &StudentDraft) -> Result<Student, ServiceError> {
    const ACTION: &str = "update student";
    let response = Request::put(&format!("{STUDENTS_URL}/{id}"))
        .json(draft)
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))?
        .send()
        .await
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))?;
    if !response.ok() {
        return Err(ServiceError::new(ACTION, failure_message(response).await));
    }
    response
        .json()
        .await
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))
}

/// `DELETE /students/{id}` - the success body is ignored; idempotency is the
/// backend's concern.
pub async fn delete(id: &str) -> Result<(), ServiceError> {
    const ACTION: &str = "delete student";
    let response = Request::delete(&format!("{STUDENTS_URL}/{id}"))
        .send()
        .await
        .map_err(|err| ServiceError::new(ACTION, err.to_string()))?;
    if !response.ok() {
        return Err(ServiceError::new(ACTION, failure_message(response).await));
    }
    Ok(())
}

async fn failure_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    backend_message(status, &body)
}

/// Extracts the backend's `message` field from an error body, falling back
/// to the raw body text, falling back to the bare status.
fn backend_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str(body)
    {
        return message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    format!("HTTP {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_verb_specific() {
        let err = ServiceError::new("fetch students", "connection refused");
        assert_eq!(err.to_string(), "Failed to fetch students: connection refused");

        let err = ServiceError::new("delete student", "Student not found with id 42");
        assert_eq!(
            err.to_string(),
            "Failed to delete student: Student not found with id 42"
        );
    }

    #[test]
    fn backend_message_prefers_the_message_field() {
        let body = r#"{"message":"Student not found with id 42","status":404}"#;
        assert_eq!(backend_message(404, body), "Student not found with id 42");
    }

    #[test]
    fn backend_message_falls_back_to_body_then_status() {
        assert_eq!(backend_message(500, "Internal Server Error"), "Internal Server Error");
        assert_eq!(backend_message(502, ""), "HTTP 502");
        assert_eq!(backend_message(400, r#"{"error":"no message field"}"#), r#"{"error":"no message field"}"#);
    }
}
