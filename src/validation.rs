//! Input validation for course requests.
//!
//! Checks structural integrity of a request list before scheduling.
//! Detects:
//! - Duplicate course IDs
//! - Missing identifying fields (id, professor, classroom)
//!
//! Professor and classroom ids are opaque here: whether they resolve to
//! real entities is the persistence layer's concern.

use crate::error::GenerateError;
use crate::models::CourseRequest;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending course id (may be empty when the id itself is missing).
    pub course_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two requests share the same id.
    DuplicateId,
    /// A required identifying field is empty.
    MissingField(&'static str),
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, course_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            course_id: course_id.to_string(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for GenerateError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ValidationErrorKind::DuplicateId => GenerateError::DuplicateRequestId {
                course_id: err.course_id,
            },
            ValidationErrorKind::MissingField(field) => GenerateError::InvalidRequest {
                course_id: err.course_id,
                field,
            },
        }
    }
}

/// Validates a list of course requests.
///
/// Checks:
/// 1. Every request has a non-empty id, professor id and classroom id
/// 2. No two requests share an id
///
/// Blank (whitespace-only) ids count as empty.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues
/// in request order.
pub fn validate_requests(requests: &[CourseRequest]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for req in requests {
        for (field, value) in [
            ("id", &req.id),
            ("professor_id", &req.professor_id),
            ("classroom_id", &req.classroom_id),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingField(field),
                    &req.id,
                    format!("Course '{}' has an empty {field}", req.id),
                ));
            }
        }

        if !req.id.trim().is_empty() && !seen.insert(req.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &req.id,
                format!("Duplicate course ID: {}", req.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
