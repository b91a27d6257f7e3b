//! Shared reading step for the validating extractors.

use domain::{FieldReader, ReadFields, ValueKind};
use serde_json::{Map, Value};
use validator::Validate;

use common::{AppError, AppResult, ParamSource};

/// Read `T` out of a raw object and run its rules, reporting every
/// unreadable field and every rule failure in one error.
pub(crate) fn read_validated<T>(
    location: ParamSource,
    fields: &Map<String, Value>,
    kind: ValueKind,
) -> AppResult<T>
where
    T: ReadFields + Validate,
{
    let mut reader = FieldReader::new(fields, kind);
    let value = T::read_fields(&mut reader);
    let issues = reader.into_issues();

    match value.validate() {
        Ok(()) if issues.is_empty() => Ok(value),
        Ok(()) => Err(AppError::invalid_input(location, issues, None)),
        Err(errors) => Err(AppError::invalid_input(location, issues, Some(&errors))),
    }
}

/// Turn decoded name/value pairs into an object; later pairs win.
pub(crate) fn text_fields(pairs: Vec<(String, String)>) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(name, value)| (name, Value::String(value)))
        .collect()
}
