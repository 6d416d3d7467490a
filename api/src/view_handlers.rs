//! Server-rendered item pages
//!
//! Form posts are bound from `application/x-www-form-urlencoded` text. A
//! rejected submission re-renders its form with the failures and the values
//! exactly as typed; an accepted one redirects to the item page.

use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use shared::validation::{check_id_matches, BoundForm, Failure, Failures, ItemValidator, RuleGroup};
use shared::RawItemForm;

use crate::{
    error::{ApiError, ApiResult},
    metrics,
    state::AppState,
    view::{View, ADD_FORM_VIEW, EDIT_FORM_VIEW, ITEMS_VIEW, ITEM_VIEW},
};

pub const BASE_PATH: &str = "/validation/v4/items";

#[derive(Debug, Default, Deserialize)]
pub struct ItemPageQuery {
    /// Set on the redirect that follows a successful create
    pub status: Option<bool>,
}

/// Bind and validate a submitted form against `group`
fn bind_and_validate(raw: &RawItemForm, group: RuleGroup) -> BoundForm {
    let mut bound = raw.bind();
    ItemValidator::new(group).validate_into(&bound.form, &mut bound.failures);
    bound
}

fn reject(view: &'static str, group: RuleGroup, raw: RawItemForm, failures: &Failures) -> Response {
    tracing::info!(view, %group, errors = %failures, "form rejected");
    metrics::observe_rejection("view", group.as_str(), failures.iter().map(Failure::code));

    View::new(view)
        .with("item", raw)
        .with_errors(failures)
        .into_response()
}

pub async fn list_items(State(state): State<AppState>) -> View {
    let items = state.store.find_all().await;
    View::new(ITEMS_VIEW).with("items", items)
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<ItemPageQuery>,
) -> ApiResult<View> {
    let item = state
        .store
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::item_not_found(id))?;

    Ok(View::new(ITEM_VIEW)
        .with("item", item)
        .with("status", query.status.unwrap_or(false)))
}

pub async fn add_form() -> View {
    View::new(ADD_FORM_VIEW).with("item", RawItemForm::default())
}

pub async fn add_item(
    State(state): State<AppState>,
    payload: Result<Form<RawItemForm>, FormRejection>,
) -> ApiResult<Response> {
    let Form(raw) = payload?;
    let BoundForm { form, failures } = bind_and_validate(&raw, RuleGroup::Save);
    if !failures.is_empty() {
        return Ok(reject(ADD_FORM_VIEW, RuleGroup::Save, raw, &failures));
    }

    let saved = state.store.create(form.into_item()).await;
    metrics::ITEMS_CREATED.inc();

    let id = saved.id.unwrap_or_default();
    tracing::info!(item_id = id, "item created");
    Ok(Redirect::to(&format!("{BASE_PATH}/{id}?status=true")).into_response())
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<View> {
    let item = state
        .store
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::item_not_found(id))?;

    Ok(View::new(EDIT_FORM_VIEW).with("item", RawItemForm::from(&item)))
}

pub async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Form<RawItemForm>, FormRejection>,
) -> ApiResult<Response> {
    let Form(raw) = payload?;
    let BoundForm { form, mut failures } = bind_and_validate(&raw, RuleGroup::Update);
    check_id_matches(&form, id, &mut failures);
    if !failures.is_empty() {
        return Ok(reject(EDIT_FORM_VIEW, RuleGroup::Update, raw, &failures));
    }

    state.store.update(id, form.into_item()).await?;
    metrics::ITEMS_UPDATED.inc();
    tracing::info!(item_id = id, "item updated");

    Ok(Redirect::to(&format!("{BASE_PATH}/{id}")).into_response())
}
