//! Login form and its response.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    LOGIN_SUCCESS_MESSAGE, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
use crate::error::DomainResult;
use crate::fields::{FieldReader, ReadFields};

/// Credentials submitted through the login form
#[derive(Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginForm {
    #[validate(length(
        min = MIN_USERNAME_LENGTH,
        max = MAX_USERNAME_LENGTH,
        message = "username must be between 1 and 20 characters"
    ))]
    #[cfg_attr(feature = "openapi", schema(example = "luis2021", max_length = 20))]
    pub username: String,
    #[validate(length(min = MIN_PASSWORD_LENGTH, message = "password must be at least 8 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "holamundo", min_length = 8))]
    pub password: String,
}

impl ReadFields for LoginForm {
    fn read_fields(reader: &mut FieldReader<'_>) -> Self {
        Self {
            username: reader.required("username"),
            password: reader.required("password"),
        }
    }
}

// Don't expose the password in debug output
impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginOut {
    #[validate(length(max = MAX_USERNAME_LENGTH, message = "username must be at most 20 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "luis2021", max_length = 20))]
    pub username: String,
    #[cfg_attr(feature = "openapi", schema(example = "Login successful"))]
    pub message: String,
}

impl LoginOut {
    /// Build the response for `username`, rejecting usernames that break the output schema.
    pub fn new(username: impl Into<String>) -> DomainResult<Self> {
        let out = Self {
            username: username.into(),
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
        };
        out.validate()?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn test_login_out_carries_fixed_message() {
        let out = LoginOut::new("luis").unwrap();
        assert_eq!(out.username, "luis");
        assert_eq!(out.message, LOGIN_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_login_out_rejects_long_username() {
        let err = LoginOut::new("u".repeat(MAX_USERNAME_LENGTH as usize + 1)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg.contains("username")));
    }

    #[test]
    fn test_login_out_accepts_max_length_username() {
        assert!(LoginOut::new("u".repeat(MAX_USERNAME_LENGTH as usize)).is_ok());
    }

    #[test]
    fn test_login_form_constraints() {
        let form = LoginForm {
            username: String::new(),
            password: "short".to_string(),
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
    }
}
