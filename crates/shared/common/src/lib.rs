//! Common utilities shared by the API crates.
//!
//! This crate provides unified error handling for HTTP responses and the
//! conversion of validation reports into per-field violations.

pub mod error;

pub use error::{collect_violations, AppError, AppResult, FieldViolation, ParamSource};
