//! Field-by-field reading of raw payloads.
//!
//! Typed deserialization stops at the first bad field. `FieldReader` reads
//! each declared field on its own, records every missing or mistyped one and
//! substitutes a default, so the record can still be built and validated and
//! all problems are reported together.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Rule reported for an absent required field
pub const RULE_MISSING: &str = "missing";

/// Rule reported for a value of the wrong type
pub const RULE_TYPE: &str = "type";

/// Rule reported for a value outside an enumeration
pub const RULE_ENUM: &str = "enum";

/// A field that could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Dotted path to the field (`person.age`)
    pub path: String,
    pub rule: &'static str,
    pub message: String,
}

/// How scalar values in the payload are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Values keep their JSON types
    Typed,
    /// Every value arrives as a string (forms, query strings, path segments)
    Text,
}

/// Records that can be built from a raw object one field at a time.
pub trait ReadFields: Sized {
    fn read_fields(reader: &mut FieldReader<'_>) -> Self;
}

/// Reads fields out of a raw object, collecting every issue it meets.
pub struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    kind: ValueKind,
    prefix: Option<String>,
    issues: Vec<FieldIssue>,
}

impl<'a> FieldReader<'a> {
    pub fn new(fields: &'a Map<String, Value>, kind: ValueKind) -> Self {
        Self {
            fields,
            kind,
            prefix: None,
            issues: Vec::new(),
        }
    }

    /// Read a required field, defaulting it when missing or malformed
    pub fn required<T>(&mut self, name: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        self.required_aliased(name, &[])
    }

    /// Read a required field that may also arrive under one of `aliases`
    pub fn required_aliased<T>(&mut self, name: &str, aliases: &[&str]) -> T
    where
        T: DeserializeOwned + Default,
    {
        let fields = self.fields;
        let raw = std::iter::once(name)
            .chain(aliases.iter().copied())
            .find_map(|key| fields.get(key));

        match raw {
            None | Some(Value::Null) => {
                let path = self.path(name);
                self.issues.push(FieldIssue {
                    message: format!("{} is required", path),
                    path,
                    rule: RULE_MISSING,
                });
                T::default()
            }
            Some(value) => self.parse(name, value).unwrap_or_default(),
        }
    }

    /// Read an optional field; absent and `null` both give `None`
    pub fn optional<T>(&mut self, name: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let fields = self.fields;
        match fields.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => self.parse(name, value),
        }
    }

    /// Read a nested record, reporting its fields under `name.`
    pub fn nested<T>(&mut self, name: &str) -> T
    where
        T: ReadFields + Default,
    {
        let path = self.path(name);
        let fields = self.fields;
        match fields.get(name) {
            None | Some(Value::Null) => {
                self.issues.push(FieldIssue {
                    message: format!("{} is required", path),
                    path,
                    rule: RULE_MISSING,
                });
                T::default()
            }
            Some(Value::Object(object)) => {
                let mut child = FieldReader {
                    fields: object,
                    kind: self.kind,
                    prefix: Some(path),
                    issues: Vec::new(),
                };
                let value = T::read_fields(&mut child);
                self.issues.append(&mut child.issues);
                value
            }
            Some(_) => {
                self.issues.push(FieldIssue {
                    message: format!("{} must be an object", path),
                    path,
                    rule: RULE_TYPE,
                });
                T::default()
            }
        }
    }

    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    fn path(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name.to_string(),
        }
    }

    fn parse<T>(&mut self, name: &str, value: &Value) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let err = match serde_json::from_value::<T>(value.clone()) {
            Ok(parsed) => return Some(parsed),
            Err(err) => err,
        };

        // Text payloads carry numbers and booleans as their literal spelling.
        if let (ValueKind::Text, Value::String(text)) = (self.kind, value) {
            if let Ok(parsed) = serde_json::from_str::<T>(text) {
                return Some(parsed);
            }
        }

        let reason = err.to_string();
        let rule = if reason.starts_with("unknown variant") {
            RULE_ENUM
        } else {
            RULE_TYPE
        };
        let path = self.path(name);
        self.issues.push(FieldIssue {
            message: format!("{}: {}", path, reason),
            path,
            rule,
        });
        None
    }
}
