//! Unified error handling for the HTTP layer.
//!
//! Provides a single error type that converts into an Axum response with a
//! stable JSON body, plus the flattening of `validator` reports into a list
//! of per-field violations.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, FieldIssue};
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Where a rejected value came from in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSource {
    Path,
    Query,
    Body,
    Form,
    Header,
    Cookie,
    File,
}

impl std::fmt::Display for ParamSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParamSource::Path => "path",
            ParamSource::Query => "query",
            ParamSource::Body => "body",
            ParamSource::Form => "form",
            ParamSource::Header => "header",
            ParamSource::Cookie => "cookie",
            ParamSource::File => "file",
        };
        f.write_str(name)
    }
}

/// A single failed constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Request part holding the field
    pub location: ParamSource,
    /// Dotted path to the field (`person.age`)
    pub field: String,
    /// Constraint that failed (`length`, `range`, `email`, ...)
    pub rule: String,
    pub message: String,
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation
    #[error("Request validation failed")]
    InvalidFields(Vec<FieldViolation>),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldViolation>>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidFields(_) | AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidFields(_) | AppError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::InvalidFields(violations) => violations
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    /// Per-field violations, when the error carries them
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            AppError::InvalidFields(violations) => Some(violations),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
                details: self.violations().map(<[FieldViolation]>::to_vec),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Validation Report Conversion
// =============================================================================

/// Flatten a (possibly nested) validator report into sorted field violations
pub fn collect_violations(location: ParamSource, errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    walk(location, None, errors, &mut violations);
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.rule.cmp(&b.rule)));
    violations
}

fn walk(
    location: ParamSource,
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<FieldViolation>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldViolation {
                    location,
                    field: path.clone(),
                    rule: e.code.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", path)),
                }));
            }
            ValidationErrorsKind::Struct(nested) => walk(location, Some(&path), nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    walk(location, Some(&format!("{}[{}]", path, index)), nested, out);
                }
            }
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::BadRequest(err.body_text())
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Build an `InvalidFields` error from fields that could not be read plus
    /// the rule report for the rest of the record.
    ///
    /// Rule failures on a field that was already unreadable are dropped, since
    /// they only describe the placeholder put in its place.
    pub fn invalid_input(
        location: ParamSource,
        issues: Vec<FieldIssue>,
        errors: Option<&ValidationErrors>,
    ) -> Self {
        let unreadable: Vec<String> = issues.iter().map(|issue| issue.path.clone()).collect();
        let covered = |field: &str| {
            unreadable.iter().any(|path| {
                field == path.as_str()
                    || field
                        .strip_prefix(path.as_str())
                        .is_some_and(|rest| rest.starts_with('.'))
            })
        };

        let mut violations: Vec<FieldViolation> = issues
            .into_iter()
            .map(|issue| FieldViolation {
                location,
                field: issue.path,
                rule: issue.rule.to_string(),
                message: issue.message,
            })
            .collect();
        if let Some(errors) = errors {
            violations.extend(
                collect_violations(location, errors)
                    .into_iter()
                    .filter(|violation| !covered(&violation.field)),
            );
        }
        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.rule.cmp(&b.rule)));

        AppError::InvalidFields(violations)
    }

    /// Merge two rejections of the same request, keeping every field violation.
    /// Any other error wins over field violations.
    pub fn combine(self, other: AppError) -> Self {
        match (self, other) {
            (AppError::InvalidFields(mut first), AppError::InvalidFields(second)) => {
                first.extend(second);
                AppError::InvalidFields(first)
            }
            (AppError::InvalidFields(_), other) => other,
            (first, _) => first,
        }
    }

    /// A single missing or malformed field that never reached the validator
    pub fn invalid_field(
        location: ParamSource,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        AppError::InvalidFields(vec![FieldViolation {
            location,
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        }])
    }
}
