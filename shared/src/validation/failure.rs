//! Validation failures and their two caller-facing projections

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message codes for a failure, most specific first.
///
/// `message_codes("range", "item", Some(("price", "integer")))` yields
/// `range.item.price`, `range.price`, `range.integer`, `range`. Object-level
/// failures yield `code.object` then `code`.
pub fn message_codes(code: &str, object_name: &str, field: Option<(&str, &str)>) -> Vec<String> {
    match field {
        Some((field, type_name)) => vec![
            format!("{code}.{object_name}.{field}"),
            format!("{code}.{field}"),
            format!("{code}.{type_name}"),
            code.to_string(),
        ],
        None => vec![format!("{code}.{object_name}"), code.to_string()],
    }
}

/// A failure bound to one input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFailure {
    pub object_name: String,
    pub field: String,
    pub rejected_value: Value,
    pub codes: Vec<String>,
    pub message: String,
}

/// A failure bound to the whole payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectFailure {
    pub object_name: String,
    pub codes: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Field(FieldFailure),
    Object(ObjectFailure),
}

impl Failure {
    pub fn field(
        object_name: &str,
        field: &str,
        type_name: &str,
        rejected_value: Value,
        code: &str,
        message: impl Into<String>,
    ) -> Self {
        Failure::Field(FieldFailure {
            object_name: object_name.to_string(),
            field: field.to_string(),
            rejected_value,
            codes: message_codes(code, object_name, Some((field, type_name))),
            message: message.into(),
        })
    }

    pub fn object(object_name: &str, code: &str, message: impl Into<String>) -> Self {
        Failure::Object(ObjectFailure {
            object_name: object_name.to_string(),
            codes: message_codes(code, object_name, None),
            message: message.into(),
        })
    }

    pub fn field_name(&self) -> Option<&str> {
        match self {
            Failure::Field(failure) => Some(&failure.field),
            Failure::Object(_) => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Failure::Field(failure) => &failure.message,
            Failure::Object(failure) => &failure.message,
        }
    }

    /// Least specific code, i.e. the one the rule was declared with
    pub fn code(&self) -> &str {
        let codes = match self {
            Failure::Field(failure) => &failure.codes,
            Failure::Object(failure) => &failure.codes,
        };
        codes.last().map(String::as_str).unwrap_or_default()
    }
}

/// Wire shape of a failure in API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureRecord {
    pub field: Option<String>,
    pub object_name: String,
    pub rejected_value: Value,
    pub codes: Vec<String>,
    pub message: String,
}

impl From<Failure> for FailureRecord {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::Field(f) => Self {
                field: Some(f.field),
                object_name: f.object_name,
                rejected_value: f.rejected_value,
                codes: f.codes,
                message: f.message,
            },
            Failure::Object(o) => Self {
                field: None,
                object_name: o.object_name,
                rejected_value: Value::Null,
                codes: o.codes,
                message: o.message,
            },
        }
    }
}

/// Failures keyed for a form view: messages per field plus unkeyed
/// object-level messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    pub field_errors: BTreeMap<String, Vec<String>>,
    pub global_errors: Vec<String>,
}

impl FormErrors {
    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || !self.global_errors.is_empty()
    }
}

/// Ordered result of one validation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Failures {
    failures: Vec<Failure>,
}

impl Failures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: Failure) -> &mut Self {
        self.failures.push(failure);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.field_errors().any(|f| f.field == field)
    }

    pub fn field_errors(&self) -> impl Iterator<Item = &FieldFailure> {
        self.failures.iter().filter_map(|f| match f {
            Failure::Field(field) => Some(field),
            Failure::Object(_) => None,
        })
    }

    pub fn global_errors(&self) -> impl Iterator<Item = &ObjectFailure> {
        self.failures.iter().filter_map(|f| match f {
            Failure::Object(object) => Some(object),
            Failure::Field(_) => None,
        })
    }

    /// `Ok` when nothing failed
    pub fn into_result(self) -> Result<(), Failures> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn to_form_errors(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        for failure in &self.failures {
            match failure {
                Failure::Field(f) => errors
                    .field_errors
                    .entry(f.field.clone())
                    .or_default()
                    .push(f.message.clone()),
                Failure::Object(o) => errors.global_errors.push(o.message.clone()),
            }
        }
        errors
    }

    pub fn into_records(self) -> Vec<FailureRecord> {
        self.failures.into_iter().map(FailureRecord::from).collect()
    }
}

impl IntoIterator for Failures {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a Failures {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl std::fmt::Display for Failures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self
            .failures
            .iter()
            .map(|failure| match failure.field_name() {
                Some(field) => format!("{field}: {}", failure.message()),
                None => failure.message().to_string(),
            })
            .collect();
        write!(f, "{} error(s): [{}]", self.failures.len(), messages.join("; "))
    }
}
