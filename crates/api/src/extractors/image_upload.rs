//! Multipart file extractor for the `image` part.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
};

use common::{AppError, ParamSource};

/// Name of the multipart part carrying the upload
pub const IMAGE_FIELD: &str = "image";

/// An uploaded file, read fully into memory.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ImageUpload {
    /// Size in kilobytes (bytes / 1024), rounded to two decimals
    pub fn size_kb(&self) -> f64 {
        let kb = self.bytes.len() as f64 / 1024.0;
        (kb * 100.0).round() / 100.0
    }
}

#[async_trait]
impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        // Other parts are skipped; the first `image` part wins.
        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(IMAGE_FIELD) {
                continue;
            }

            let filename = field.file_name().map(str::to_owned);
            let content_type = field.content_type().map(str::to_owned);
            let bytes = field.bytes().await?;

            return Ok(ImageUpload {
                filename,
                content_type,
                bytes,
            });
        }

        Err(AppError::invalid_field(
            ParamSource::File,
            IMAGE_FIELD,
            "required",
            "image is required",
        ))
    }
}
