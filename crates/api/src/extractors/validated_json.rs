//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use domain::{fields::RULE_TYPE, ReadFields, ValueKind};
use serde_json::Value;
use validator::Validate;

use common::{AppError, ParamSource};

use super::payload::read_validated;

/// JSON extractor that automatically validates the payload.
///
/// Every failing field is reported, not only the first one: missing and
/// mistyped fields are listed next to the rule failures of the rest.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: ReadFields + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        let Value::Object(fields) = body else {
            return Err(AppError::invalid_field(
                ParamSource::Body,
                "body",
                RULE_TYPE,
                "body must be a JSON object",
            ));
        };

        // Read and validate
        read_validated(ParamSource::Body, &fields, ValueKind::Typed).map(ValidatedJson)
    }
}
