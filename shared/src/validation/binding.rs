//! Conversion of form-encoded text into a typed [`ItemForm`]

use std::str::FromStr;

use serde_json::Value;

use crate::models::{ItemForm, RawItemForm};

use super::failure::{Failure, Failures};
use super::rules::{Field, OBJECT_NAME};

/// Typed payload plus the failures raised while converting it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundForm {
    pub form: ItemForm,
    pub failures: Failures,
}

impl RawItemForm {
    /// Convert the submitted text into typed values.
    ///
    /// Blank numeric text binds to `None`. Text that does not parse yields a
    /// `typeMismatch` failure holding the raw text, and the value binds to
    /// `None`.
    pub fn bind(&self) -> BoundForm {
        let mut failures = Failures::new();

        let form = ItemForm {
            id: parse_field(Field::Id, self.id.as_deref(), &mut failures),
            name: self.name.clone(),
            price: parse_field(Field::Price, self.price.as_deref(), &mut failures),
            quantity: parse_field(Field::Quantity, self.quantity.as_deref(), &mut failures),
        };

        if !failures.is_empty() {
            tracing::debug!(errors = failures.error_count(), "form binding produced type mismatches");
        }

        BoundForm { form, failures }
    }
}

fn parse_field<T: FromStr>(field: Field, raw: Option<&str>, failures: &mut Failures) -> Option<T> {
    let text = raw.map(str::trim).filter(|text| !text.is_empty())?;

    match text.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            failures.push(Failure::field(
                OBJECT_NAME,
                field.name(),
                field.type_name(),
                Value::from(raw.unwrap_or_default()),
                "typeMismatch",
                format!("{} must be a number", field.name()),
            ));
            None
        }
    }
}
