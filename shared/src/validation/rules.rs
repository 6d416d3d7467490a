//! Declarative rule table for the item payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ItemForm;

/// Object name attached to every failure raised against an item payload
pub const OBJECT_NAME: &str = "item";

/// Lowest accepted price × quantity
pub const MIN_TOTAL_PRICE: i64 = 10_000;

const MIN_PRICE: i64 = 1_000;
const MAX_PRICE: i64 = 1_000_000;
/// Exclusive upper bound on quantity
const QUANTITY_LIMIT: i64 = 9_999;

// ─────────────────────────────────────────────────────────────────────────────
// Rule groups
// ─────────────────────────────────────────────────────────────────────────────

/// Named subset of rules applied by one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleGroup {
    /// Creating a new item
    Save,
    /// Editing an existing item
    Update,
}

impl RuleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleGroup::Save => "save",
            RuleGroup::Update => "update",
        }
    }
}

impl std::fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-level selector for a [`RuleGroup`], used where the group has to be
/// part of a type (e.g. a request extractor).
pub trait ValidationGroup: Send + Sync + 'static {
    const GROUP: RuleGroup;
}

/// Marker for [`RuleGroup::Save`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveCheck;

/// Marker for [`RuleGroup::Update`]
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateCheck;

impl ValidationGroup for SaveCheck {
    const GROUP: RuleGroup = RuleGroup::Save;
}

impl ValidationGroup for UpdateCheck {
    const GROUP: RuleGroup = RuleGroup::Update;
}

// ─────────────────────────────────────────────────────────────────────────────
// Fields
// ─────────────────────────────────────────────────────────────────────────────

/// A validated field of the item payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Price,
    Quantity,
}

/// A field value as seen by a [`Check`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<i64>),
}

impl FieldValue<'_> {
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.is_some(),
            FieldValue::Number(value) => value.is_some(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(Some(text)) => Value::from(*text),
            FieldValue::Number(Some(number)) => Value::from(*number),
            FieldValue::Text(None) | FieldValue::Number(None) => Value::Null,
        }
    }
}

impl Field {
    /// Evaluation order of the engine
    pub const ALL: [Field; 4] = [Field::Id, Field::Name, Field::Price, Field::Quantity];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Price => "price",
            Field::Quantity => "quantity",
        }
    }

    /// Type segment used when building message codes
    pub fn type_name(&self) -> &'static str {
        match self {
            Field::Id => "long",
            Field::Name => "string",
            Field::Price | Field::Quantity => "integer",
        }
    }

    pub fn value<'a>(&self, form: &'a ItemForm) -> FieldValue<'a> {
        match self {
            Field::Id => FieldValue::Number(form.id.and_then(|id| i64::try_from(id).ok())),
            Field::Name => FieldValue::Text(form.name.as_deref()),
            Field::Price => FieldValue::Number(form.price.map(i64::from)),
            Field::Quantity => FieldValue::Number(form.quantity.map(i64::from)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Checks
// ─────────────────────────────────────────────────────────────────────────────

/// A single-field predicate.
///
/// Every check except `Required` and `NotBlank` passes on an absent value;
/// presence is a separate row in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Required,
    /// Present and containing at least one non-whitespace character
    NotBlank,
    /// Inclusive on both ends
    Range { min: i64, max: i64 },
    /// Strictly below the limit
    LessThan(i64),
}

impl Check {
    pub fn passes(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Check::Required, value) => value.is_present(),
            (Check::NotBlank, FieldValue::Text(text)) => {
                text.is_some_and(|text| text.chars().any(|c| !c.is_whitespace()))
            }
            (Check::NotBlank, value) => value.is_present(),
            (Check::Range { min, max }, FieldValue::Number(Some(n))) => (*min..=*max).contains(n),
            (Check::LessThan(limit), FieldValue::Number(Some(n))) => n < limit,
            (Check::Range { .. } | Check::LessThan(_), _) => true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rule table
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the rule table
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub check: Check,
    pub groups: &'static [RuleGroup],
    pub code: &'static str,
    pub message: &'static str,
}

impl FieldRule {
    pub fn applies_to(&self, group: RuleGroup) -> bool {
        self.groups.contains(&group)
    }
}

const BOTH: &[RuleGroup] = &[RuleGroup::Save, RuleGroup::Update];

/// Per-field rules. Within a field the first failing row wins.
pub const ITEM_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Id,
        check: Check::Required,
        groups: &[RuleGroup::Update],
        code: "required",
        message: "item id is required",
    },
    FieldRule {
        field: Field::Name,
        check: Check::NotBlank,
        groups: BOTH,
        code: "required",
        message: "item name is required",
    },
    FieldRule {
        field: Field::Price,
        check: Check::Required,
        groups: BOTH,
        code: "required",
        message: "price is required",
    },
    FieldRule {
        field: Field::Price,
        check: Check::Range {
            min: MIN_PRICE,
            max: MAX_PRICE,
        },
        groups: BOTH,
        code: "range",
        message: "price must be 1,000–1,000,000",
    },
    FieldRule {
        field: Field::Quantity,
        check: Check::Required,
        groups: &[RuleGroup::Save],
        code: "required",
        message: "quantity is required",
    },
    FieldRule {
        field: Field::Quantity,
        check: Check::LessThan(QUANTITY_LIMIT),
        groups: BOTH,
        code: "max",
        message: "quantity must be at most 9,999",
    },
];
