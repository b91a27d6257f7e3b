//! Contact form.

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_CONTACT_NAME_LENGTH, MIN_CONTACT_MESSAGE_LENGTH, MIN_CONTACT_NAME_LENGTH};
use crate::fields::{FieldReader, ReadFields};

/// Message sent through the contact form
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactForm {
    #[validate(length(
        min = MIN_CONTACT_NAME_LENGTH,
        max = MAX_CONTACT_NAME_LENGTH,
        message = "first_name must be between 1 and 20 characters"
    ))]
    #[cfg_attr(feature = "openapi", schema(example = "Luis", max_length = 20))]
    pub first_name: String,
    #[validate(length(
        min = MIN_CONTACT_NAME_LENGTH,
        max = MAX_CONTACT_NAME_LENGTH,
        message = "last_name must be between 1 and 20 characters"
    ))]
    #[cfg_attr(feature = "openapi", schema(example = "Garcia", max_length = 20))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[cfg_attr(feature = "openapi", schema(example = "luis@example.com"))]
    pub email: String,
    #[validate(length(min = MIN_CONTACT_MESSAGE_LENGTH, message = "message must be at least 20 characters"))]
    #[cfg_attr(feature = "openapi", schema(min_length = 20))]
    pub message: String,
}

impl ReadFields for ContactForm {
    fn read_fields(reader: &mut FieldReader<'_>) -> Self {
        Self {
            first_name: reader.required("first_name"),
            last_name: reader.required("last_name"),
            email: reader.required("email"),
            message: reader.required("message"),
        }
    }
}
