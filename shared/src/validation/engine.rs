use crate::models::ItemForm;

use super::failure::{Failure, Failures};
use super::rules::{Field, FieldRule, RuleGroup, ITEM_RULES, MIN_TOTAL_PRICE, OBJECT_NAME};

/// Types that can be checked against a rule group
pub trait Validatable {
    fn validate(&self, group: RuleGroup) -> Failures;
}

impl Validatable for ItemForm {
    fn validate(&self, group: RuleGroup) -> Failures {
        ItemValidator::new(group).validate(self)
    }
}

/// Evaluates [`ITEM_RULES`] and the total price rule for one rule group
#[derive(Debug, Clone, Copy)]
pub struct ItemValidator {
    group: RuleGroup,
    rules: &'static [FieldRule],
}

impl ItemValidator {
    pub fn new(group: RuleGroup) -> Self {
        Self {
            group,
            rules: ITEM_RULES,
        }
    }

    pub fn validate(&self, form: &ItemForm) -> Failures {
        let mut failures = Failures::new();
        self.validate_into(form, &mut failures);
        failures
    }

    /// Append this run's failures to `failures`.
    ///
    /// Fields that already carry a failure (from binding) are not checked again.
    pub fn validate_into(&self, form: &ItemForm, failures: &mut Failures) {
        for field in Field::ALL {
            if failures.has_field_errors(field.name()) {
                continue;
            }

            let value = field.value(form);
            let failed = self
                .rules
                .iter()
                .filter(|rule| rule.field == field && rule.applies_to(self.group))
                .find(|rule| !rule.check.passes(&value));

            if let Some(rule) = failed {
                failures.push(Failure::field(
                    OBJECT_NAME,
                    field.name(),
                    field.type_name(),
                    value.to_json(),
                    rule.code,
                    rule.message,
                ));
            }
        }

        check_total_price(form, failures);
    }
}

/// Flag a payload whose id names a different record than the one being edited.
///
/// A missing id is left to the `required` rule of the Update group.
pub fn check_id_matches(form: &ItemForm, id: u64, failures: &mut Failures) {
    let Some(payload_id) = form.id else {
        return;
    };
    if payload_id == id || failures.has_field_errors(Field::Id.name()) {
        return;
    }

    failures.push(Failure::field(
        OBJECT_NAME,
        Field::Id.name(),
        Field::Id.type_name(),
        Field::Id.value(form).to_json(),
        "mismatch",
        format!("item id must match the edited item ({id})"),
    ));
}

/// Price × quantity must reach [`MIN_TOTAL_PRICE`] when both are given.
///
/// Runs regardless of the per-field outcome for either operand.
fn check_total_price(form: &ItemForm, failures: &mut Failures) {
    let (Some(price), Some(quantity)) = (form.price, form.quantity) else {
        return;
    };

    let total = i64::from(price) * i64::from(quantity);
    if total < MIN_TOTAL_PRICE {
        failures.push(Failure::object(
            OBJECT_NAME,
            "totalPriceMin",
            format!("price × quantity must be at least 10,000 (current value = {total})"),
        ));
    }
}
