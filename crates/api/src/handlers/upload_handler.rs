//! File upload handler.

use axum::{response::Json, routing::post, Router};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppResult;

use crate::extractors::ImageUpload;
use crate::state::AppState;

/// Multipart body of an image upload (documentation only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadForm {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

/// Metadata reported back for an uploaded image
#[derive(Debug, Serialize, ToSchema)]
pub struct ImageInfo {
    #[serde(rename = "Filename")]
    #[schema(example = "cat.png")]
    pub filename: Option<String>,
    #[serde(rename = "Format")]
    #[schema(example = "image/png")]
    pub format: Option<String>,
    #[serde(rename = "Size(kb)")]
    #[schema(example = 2.0)]
    pub size_kb: f64,
}

impl From<&ImageUpload> for ImageInfo {
    fn from(upload: &ImageUpload) -> Self {
        Self {
            filename: upload.filename.clone(),
            format: upload.content_type.clone(),
            size_kb: upload.size_kb(),
        }
    }
}

/// Create upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/post-image", post(post_image))
}

/// Upload an image and report its metadata
#[utoipa::path(
    post,
    path = "/post-image",
    tag = "Uploads",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image metadata", body = ImageInfo),
        (status = 413, description = "Upload too large"),
        (status = 422, description = "Missing image part")
    )
)]
pub async fn post_image(upload: ImageUpload) -> AppResult<Json<ImageInfo>> {
    let info = ImageInfo::from(&upload);
    tracing::debug!(
        filename = ?info.filename,
        bytes = upload.bytes.len(),
        "Image received"
    );
    Ok(Json(info))
}
