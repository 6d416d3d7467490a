//! Custom Axum extractors for validated input
//!
//! This module provides `ValidatedJson<T, G>` - a drop-in replacement for
//! `Json<T>` that validates the parsed payload against the rule group `G`.

use std::marker::PhantomData;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use shared::validation::{Failure, Failures, RuleGroup, SaveCheck, Validatable, ValidationGroup};

use crate::error::ApiError;
use crate::metrics;

/// Rejection of a [`ValidatedJson`] extraction
#[derive(Debug)]
pub enum ValidationRejection {
    /// The body could not be parsed into the payload type
    Malformed(ApiError),
    /// The payload parsed but broke one or more rules
    Invalid { group: RuleGroup, failures: Failures },
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        match self {
            ValidationRejection::Malformed(err) => err.into_response(),
            ValidationRejection::Invalid { group, failures } => {
                tracing::info!(%group, errors = %failures, "api payload rejected");
                metrics::observe_rejection("api", group.as_str(), failures.iter().map(Failure::code));
                (StatusCode::BAD_REQUEST, Json(failures.into_records())).into_response()
            }
        }
    }
}

/// JSON extractor that validates the payload against rule group `G`
///
/// On failure the response is a 400 whose body is the ordered list of
/// failure records.
///
/// # Example
///
/// ```ignore
/// pub async fn edit_item(
///     Path(id): Path<u64>,
///     ValidatedJson(form, _): ValidatedJson<ItemForm, UpdateCheck>,
/// ) -> impl IntoResponse {
///     // form passed every Update rule
/// }
/// ```
pub struct ValidatedJson<T, G = SaveCheck>(pub T, pub PhantomData<G>);

impl<T, G> ValidatedJson<T, G> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[async_trait]
impl<S, T, G> FromRequest<S> for ValidatedJson<T, G>
where
    T: DeserializeOwned + Validatable + Send,
    G: ValidationGroup,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| ValidationRejection::Malformed(ApiError::from(err)))?;

        data.validate(G::GROUP)
            .into_result()
            .map_err(|failures| ValidationRejection::Invalid {
                group: G::GROUP,
                failures,
            })?;

        Ok(ValidatedJson(data, PhantomData))
    }
}

impl<T, G> std::ops::Deref for ValidatedJson<T, G> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
