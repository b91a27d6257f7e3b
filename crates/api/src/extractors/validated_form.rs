//! Validated form extractor.
//!
//! Accepts both `application/x-www-form-urlencoded` and `multipart/form-data`
//! bodies. Multipart text parts are collected by name and read the same way
//! as URL-encoded pairs.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use domain::{ReadFields, ValueKind};
use serde_json::{Map, Value};
use validator::Validate;

use common::{AppError, ParamSource};

use super::payload::{read_validated, text_fields};

/// Form extractor that automatically validates the payload.
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: ReadFields + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = if is_multipart(&req) {
            read_multipart_fields(req, state).await?
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            text_fields(pairs)
        };

        read_validated(ParamSource::Form, &fields, ValueKind::Text).map(ValidatedForm)
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

/// Collect named text parts; later parts with the same name win.
async fn read_multipart_fields<S>(req: Request, state: &S) -> Result<Map<String, Value>, AppError>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?;

    let mut fields = Map::new();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let text = field.text().await?;
        fields.insert(name, Value::String(text));
    }

    Ok(fields)
}
