//! Item validation
//!
//! Rules for the item payload live in one table ([`rules::ITEM_RULES`]) and are
//! evaluated by a single engine ([`engine::ItemValidator`]). Which rules apply
//! is chosen by a [`RuleGroup`]: creating an item uses [`RuleGroup::Save`],
//! editing one uses [`RuleGroup::Update`].
//!
//! Validation never fails. Every problem is reported as a [`Failure`] in the
//! returned [`Failures`], in insertion order:
//!
//! 1. binding failures (form text that is not a number),
//! 2. per-field rule failures, in table order,
//! 3. the cross-field total price rule.
//!
//! An empty [`Failures`] means the payload may be persisted.
//!
//! # Usage
//!
//! ```
//! use shared::validation::{RuleGroup, Validatable};
//! use shared::ItemForm;
//!
//! let form = ItemForm {
//!     id: None,
//!     name: Some("Pen".into()),
//!     price: Some(1000),
//!     quantity: Some(5),
//! };
//!
//! let failures = form.validate(RuleGroup::Save);
//! assert_eq!(failures.global_errors().count(), 1);
//! assert!(failures.global_errors().next().unwrap().message.contains("5000"));
//! ```

pub mod binding;
pub mod engine;
pub mod failure;
pub mod rules;

pub use binding::BoundForm;
pub use engine::{check_id_matches, ItemValidator, Validatable};
pub use failure::{
    message_codes, Failure, FailureRecord, Failures, FieldFailure, FormErrors, ObjectFailure,
};
pub use rules::{
    Check, Field, FieldRule, RuleGroup, SaveCheck, UpdateCheck, ValidationGroup, ITEM_RULES,
    MIN_TOTAL_PRICE, OBJECT_NAME,
};
