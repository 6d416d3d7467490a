//! Request validation for the HTTP layer
//!
//! The rules themselves live in [`shared::validation`]. This module adapts
//! them to axum:
//!
//! * the JSON API uses [`ValidatedJson`], which rejects an invalid payload
//!   with a 400 whose body is the list of failure records;
//! * the server-rendered forms bind a [`shared::RawItemForm`] and validate it
//!   in the handler so that the form can be re-rendered with the failures and
//!   the values exactly as submitted.
//!
//! # Validation Error Response (API)
//!
//! ```json
//! [
//!   {"field": "price", "objectName": "item", "rejectedValue": 500,
//!    "codes": ["range.item.price", "range.price", "range.integer", "range"],
//!    "message": "price must be 1,000–1,000,000"},
//!   {"field": null, "objectName": "item", "rejectedValue": null,
//!    "codes": ["totalPriceMin.item", "totalPriceMin"],
//!    "message": "price × quantity must be at least 10,000 (current value = 5000)"}
//! ]
//! ```

pub mod extractors;

pub use extractors::{ValidatedJson, ValidationRejection};
