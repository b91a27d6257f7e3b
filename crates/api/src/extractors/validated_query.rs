//! Validated query string extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use domain::{ReadFields, ValueKind};
use validator::Validate;

use common::{AppError, ParamSource};

use super::payload::{read_validated, text_fields};

/// Query extractor that automatically validates the parameters.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: ReadFields + Validate,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        read_validated(ParamSource::Query, &text_fields(pairs), ValueKind::Text).map(ValidatedQuery)
    }
}
