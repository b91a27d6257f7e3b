//! Validated path parameter extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use domain::{ReadFields, ValueKind};
use validator::Validate;

use common::{AppError, ParamSource};

use super::payload::{read_validated, text_fields};

/// Path extractor that validates the captured segments before the handler runs.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: ReadFields + Validate,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segments) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        read_validated(ParamSource::Path, &text_fields(segments), ValueKind::Text).map(ValidatedPath)
    }
}
