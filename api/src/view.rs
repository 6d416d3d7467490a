//! Server-rendered responses
//!
//! Page rendering happens outside this service. A handler returns the name of
//! the template together with its model, serialized as
//! `{"view": "...", "model": {...}}`, or a redirect.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use shared::validation::{Failures, FormErrors};

pub const ITEMS_VIEW: &str = "validation/v4/items";
pub const ITEM_VIEW: &str = "validation/v4/item";
pub const ADD_FORM_VIEW: &str = "validation/v4/addForm";
pub const EDIT_FORM_VIEW: &str = "validation/v4/editForm";

/// Template name plus rendering context
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub view: &'static str,
    pub model: Map<String, Value>,
}

impl View {
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            model: Map::new(),
        }
    }

    /// Add a model attribute. Values that fail to serialize become `null`.
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|err| {
            tracing::warn!(key, error = %err, "model attribute could not be serialized");
            Value::Null
        });
        self.model.insert(key.to_string(), value);
        self
    }

    /// Attach failures under `errors`, keyed by field, with object failures
    /// under `globalErrors`
    pub fn with_errors(self, failures: &Failures) -> Self {
        self.with("errors", failures.to_form_errors())
    }

    pub fn errors(&self) -> Option<FormErrors> {
        self.model
            .get("errors")
            .and_then(|errors| serde_json::from_value(errors.clone()).ok())
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
