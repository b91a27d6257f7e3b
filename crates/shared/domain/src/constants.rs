//! Domain-level constants.
//!
//! These constants define the field constraints shared by every record.

// =============================================================================
// Person
// =============================================================================

/// Minimum length of a person's first or last name
pub const MIN_NAME_LENGTH: u64 = 1;

/// Maximum length of a person's first or last name
pub const MAX_NAME_LENGTH: u64 = 50;

/// Smallest accepted age (age must be strictly positive)
pub const MIN_AGE: i64 = 1;

/// Largest accepted age
pub const MAX_AGE: i64 = 100;

/// Minimum length of each location field
pub const MIN_LOCATION_LENGTH: u64 = 1;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Smallest accepted person identifier
pub const MIN_PERSON_ID: i64 = 1;

/// Identifiers known to exist when no override is configured
pub const DEFAULT_PERSON_IDS: &[i64] = &[1, 2, 3, 4, 5];

/// Message returned when an identifier is missing from the registry
pub const PERSON_NOT_FOUND_MESSAGE: &str = "This person doesn't exist";

/// Message returned when an identifier is present in the registry
pub const PERSON_EXISTS_MESSAGE: &str = "It exists!";

// =============================================================================
// Login
// =============================================================================

/// Minimum username length
pub const MIN_USERNAME_LENGTH: u64 = 1;

/// Maximum username length
pub const MAX_USERNAME_LENGTH: u64 = 20;

/// Fixed message attached to every successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

// =============================================================================
// Contact
// =============================================================================

/// Minimum length of the names on the contact form
pub const MIN_CONTACT_NAME_LENGTH: u64 = 1;

/// Maximum length of the names on the contact form
pub const MAX_CONTACT_NAME_LENGTH: u64 = 20;

/// Minimum length of a contact message
pub const MIN_CONTACT_MESSAGE_LENGTH: u64 = 20;
