//! Request extractors that validate input before a handler runs.

pub mod image_upload;
mod payload;
pub mod validated_form;
pub mod validated_json;
pub mod validated_path;
pub mod validated_query;

pub use image_upload::ImageUpload;
pub use validated_form::ValidatedForm;
pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
pub use validated_query::ValidatedQuery;
