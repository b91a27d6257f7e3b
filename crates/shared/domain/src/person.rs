//! Person records and their safe output projection.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{
    MAX_AGE, MAX_NAME_LENGTH, MIN_AGE, MIN_LOCATION_LENGTH, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::fields::{FieldReader, ReadFields};

/// Hair colors a person may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

impl HairColor {
    /// Every accepted value, in declaration order
    pub const ALL: [HairColor; 5] = [
        HairColor::White,
        HairColor::Brown,
        HairColor::Black,
        HairColor::Blonde,
        HairColor::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HairColor::White => "white",
            HairColor::Brown => "brown",
            HairColor::Black => "black",
            HairColor::Blonde => "blonde",
            HairColor::Red => "red",
        }
    }
}

impl std::fmt::Display for HairColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire name of `Location::country`
const COUNTRY_KEY: &str = "conuntry";

/// Where a person lives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Location {
    #[cfg_attr(feature = "openapi", schema(example = "Guadalajara", min_length = 1))]
    pub city: String,
    #[cfg_attr(feature = "openapi", schema(example = "Jalisco", min_length = 1))]
    pub state: String,
    /// On the wire this key is spelled `conuntry`
    #[serde(rename = "conuntry", alias = "country")]
    #[cfg_attr(feature = "openapi", schema(example = "México", min_length = 1))]
    pub country: String,
}

// Hand-written so the country rule is reported under its wire name.
impl Validate for Location {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, value) in [
            ("city", &self.city),
            ("state", &self.state),
            (COUNTRY_KEY, &self.country),
        ] {
            if (value.chars().count() as u64) < MIN_LOCATION_LENGTH {
                let mut error = ValidationError::new("length");
                error.add_param("min".into(), &MIN_LOCATION_LENGTH);
                error.message = Some(format!("{} must not be empty", field).into());
                errors.add(field, error);
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl ReadFields for Location {
    fn read_fields(reader: &mut FieldReader<'_>) -> Self {
        Self {
            city: reader.required("city"),
            state: reader.required("state"),
            country: reader.required_aliased(COUNTRY_KEY, &["country"]),
        }
    }
}

/// Fields shared by every person-shaped record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonBase {
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "first_name must be between 1 and 50 characters"
    ))]
    #[cfg_attr(feature = "openapi", schema(example = "Luis", min_length = 1, max_length = 50))]
    pub first_name: String,
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "last_name must be between 1 and 50 characters"
    ))]
    #[cfg_attr(feature = "openapi", schema(example = "Garcia", min_length = 1, max_length = 50))]
    pub last_name: String,
    #[validate(range(min = MIN_AGE, max = MAX_AGE, message = "age must be greater than 0 and at most 100"))]
    #[cfg_attr(feature = "openapi", schema(example = 21, minimum = 1, maximum = 100))]
    pub age: i64,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "black"))]
    pub hair_color: Option<HairColor>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = false))]
    pub is_married: Option<bool>,
}

impl ReadFields for PersonBase {
    fn read_fields(reader: &mut FieldReader<'_>) -> Self {
        Self {
            first_name: reader.required("first_name"),
            last_name: reader.required("last_name"),
            age: reader.required("age"),
            hair_color: reader.optional("hair_color"),
            is_married: reader.optional("is_married"),
        }
    }
}

/// Person as submitted by a client, password included
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Person {
    #[serde(flatten)]
    pub base: PersonBase,
    #[cfg_attr(feature = "openapi", schema(example = "holamundo", min_length = 8))]
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Person")
            .field("base", &self.base)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// The base fields are read from the same flat object.
impl ReadFields for Person {
    fn read_fields(reader: &mut FieldReader<'_>) -> Self {
        Self {
            base: PersonBase::read_fields(reader),
            password: reader.required("password"),
        }
    }
}

// Hand-written so base field errors stay at the top level (`age`, not `base.age`).
impl Validate for Person {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.base.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if (self.password.chars().count() as u64) < MIN_PASSWORD_LENGTH {
            let mut error = ValidationError::new("length");
            error.add_param("min".into(), &MIN_PASSWORD_LENGTH);
            error.add_param("value".into(), &"[REDACTED]");
            error.message = Some(
                format!("password must be at least {} characters", MIN_PASSWORD_LENGTH).into(),
            );
            errors.add("password", error);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Person as returned to clients (never carries the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonOut {
    #[serde(flatten)]
    pub base: PersonBase,
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self { base: person.base }
    }
}

/// Person and location merged into a single flat record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonWithLocation {
    #[serde(flatten)]
    pub person: Person,
    #[serde(flatten)]
    pub location: Location,
}

impl PersonWithLocation {
    pub fn merge(person: Person, location: Location) -> Self {
        Self { person, location }
    }
}
