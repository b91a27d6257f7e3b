//! Domain layer - Records, field constraints and the person registry.
//!
//! This crate contains pure validation logic with no HTTP dependencies.
//! Every record implements `ReadFields`, to be read from a raw payload with
//! all unreadable fields reported, and `validator::Validate` for its rules.

pub mod auth;
pub mod constants;
pub mod contact;
pub mod error;
pub mod fields;
pub mod person;
pub mod registry;

pub use auth::{LoginForm, LoginOut};
pub use constants::*;
pub use contact::ContactForm;
pub use error::{DomainError, DomainResult};
pub use fields::{FieldIssue, FieldReader, ReadFields, ValueKind};
pub use person::{HairColor, Location, Person, PersonBase, PersonOut, PersonWithLocation};
pub use registry::PersonRegistry;
