// tests/item_view_tests.rs
//
// Server-rendered item pages, driven through the full router.

mod common;

use axum::http::{header::LOCATION, StatusCode};
use serde_json::json;
use shared::{Item, ItemStore};

use common::{body_json, call, get, post_form, post_json, seeded_app};

#[tokio::test]
async fn list_renders_items_view() {
    let (app, _) = seeded_app().await;

    let response = call(&app, get("/validation/v4/items")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["view"], "validation/v4/items");
    assert_eq!(body["model"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["model"]["items"][0]["name"], "itemA");
}

#[tokio::test]
async fn add_form_starts_empty() {
    let (app, _) = seeded_app().await;

    let body = body_json(call(&app, get("/validation/v4/items/add")).await).await;
    assert_eq!(body["view"], "validation/v4/addForm");
    assert_eq!(body["model"]["item"]["name"], serde_json::Value::Null);
}

#[tokio::test]
async fn valid_submission_redirects_to_item_page() {
    let (app, store) = seeded_app().await;

    let response = call(
        &app,
        post_form("/validation/v4/items/add", "name=Laptop&price=15000&quantity=2"),
    )
    .await;

    assert!(response.status().is_redirection());
    let location = response.headers()[LOCATION].to_str().unwrap().to_string();
    assert_eq!(location, "/validation/v4/items/3?status=true");

    let saved = store.find_by_id(3).await.unwrap();
    assert_eq!(saved.name.as_deref(), Some("Laptop"));
    assert_eq!(saved.price, Some(15000));
    assert_eq!(saved.quantity, Some(2));

    let page = body_json(call(&app, get(&location)).await).await;
    assert_eq!(page["view"], "validation/v4/item");
    assert_eq!(page["model"]["status"], true);
    assert_eq!(page["model"]["item"]["id"], 3);
}

#[tokio::test]
async fn rejected_submission_rerenders_form_with_original_values() {
    let (app, store) = seeded_app().await;

    let response = call(
        &app,
        post_form("/validation/v4/items/add", "name=&price=500&quantity=10000"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["view"], "validation/v4/addForm");
    assert_eq!(
        body["model"]["item"],
        json!({"id": null, "name": "", "price": "500", "quantity": "10000"})
    );

    let errors = &body["model"]["errors"];
    assert_eq!(errors["fieldErrors"]["name"][0], "item name is required");
    assert_eq!(errors["fieldErrors"]["price"][0], "price must be 1,000–1,000,000");
    assert_eq!(errors["fieldErrors"]["quantity"][0], "quantity must be at most 9,999");
    assert_eq!(errors["globalErrors"], json!([]));

    assert_eq!(store.len().await, 2, "nothing may be persisted");
}

#[tokio::test]
async fn total_price_failure_is_unkeyed() {
    let (app, _) = seeded_app().await;

    let body = body_json(
        call(
            &app,
            post_form("/validation/v4/items/add", "name=Pen&price=1000&quantity=5"),
        )
        .await,
    )
    .await;

    let errors = &body["model"]["errors"];
    assert_eq!(errors["fieldErrors"], json!({}));
    let global = errors["globalErrors"][0].as_str().unwrap();
    assert!(global.contains("5000"));
}

#[tokio::test]
async fn non_numeric_text_is_echoed_with_type_mismatch() {
    let (app, _) = seeded_app().await;

    let body = body_json(
        call(
            &app,
            post_form("/validation/v4/items/add", "name=Pen&price=abc&quantity=3"),
        )
        .await,
    )
    .await;

    assert_eq!(body["model"]["item"]["price"], "abc");
    let price_errors = body["model"]["errors"]["fieldErrors"]["price"]
        .as_array()
        .unwrap();
    assert_eq!(price_errors.len(), 1);
    assert_eq!(price_errors[0], "price must be a number");
}

#[tokio::test]
async fn edit_form_shows_stored_values() {
    let (app, _) = seeded_app().await;

    let body = body_json(call(&app, get("/validation/v4/items/2/edit")).await).await;
    assert_eq!(body["view"], "validation/v4/editForm");
    assert_eq!(
        body["model"]["item"],
        json!({"id": "2", "name": "itemB", "price": "20000", "quantity": "20"})
    );
}

#[tokio::test]
async fn valid_edit_updates_and_redirects() {
    let (app, store) = seeded_app().await;

    let response = call(
        &app,
        post_form(
            "/validation/v4/items/1/edit",
            "id=1&name=itemA2&price=30000&quantity=5",
        ),
    )
    .await;

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[LOCATION], "/validation/v4/items/1");

    let item = store.find_by_id(1).await.unwrap();
    assert_eq!(item.name.as_deref(), Some("itemA2"));
    assert_eq!(item.price, Some(30000));
    assert_eq!(item.quantity, Some(5));
}

#[tokio::test]
async fn edit_without_quantity_replaces_stored_quantity() {
    let (app, store) = seeded_app().await;
    store.create(Item::new("Pen", 5000, 2)).await;

    let response = call(
        &app,
        post_form("/validation/v4/items/3/edit", "id=3&name=Pen&price=1000&quantity="),
    )
    .await;

    assert!(response.status().is_redirection());
    let stored = store.find_by_id(3).await.unwrap();
    assert_eq!(stored.price, Some(1000));
    assert_eq!(stored.quantity, None);
}

#[tokio::test]
async fn edit_with_another_items_id_rerenders_edit_form() {
    let (app, store) = seeded_app().await;

    let response = call(
        &app,
        post_form("/validation/v4/items/1/edit", "id=2&name=x&price=20000&quantity=1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["view"], "validation/v4/editForm");
    assert_eq!(body["model"]["item"]["id"], "2");
    assert_eq!(
        body["model"]["errors"]["fieldErrors"]["id"][0],
        "item id must match the edited item (1)"
    );

    assert_eq!(store.find_by_id(1).await.unwrap().name.as_deref(), Some("itemA"));
}

#[tokio::test]
async fn unreadable_form_body_is_an_api_error() {
    let (app, store) = seeded_app().await;

    let response = call(
        &app,
        post_json(
            "/validation/v4/items/add",
            r#"{"name":"Laptop","price":15000,"quantity":2}"#,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(response.headers().contains_key("x-correlation-id"));
    assert_eq!(body_json(response).await["error"], "InvalidRequest");
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn rejected_edit_rerenders_edit_form() {
    let (app, store) = seeded_app().await;

    let body = body_json(
        call(
            &app,
            post_form("/validation/v4/items/1/edit", "name=itemA&price=1000&quantity=9999"),
        )
        .await,
    )
    .await;

    assert_eq!(body["view"], "validation/v4/editForm");
    let field_errors = &body["model"]["errors"]["fieldErrors"];
    assert_eq!(field_errors["id"][0], "item id is required");
    assert_eq!(field_errors["quantity"][0], "quantity must be at most 9,999");
    assert_eq!(body["model"]["item"]["quantity"], "9999");

    assert_eq!(store.find_by_id(1).await.unwrap().price, Some(10000));
}

#[tokio::test]
async fn unknown_item_is_404() {
    let (app, _) = seeded_app().await;

    assert_eq!(
        call(&app, get("/validation/v4/items/99")).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        call(&app, get("/validation/v4/items/99/edit")).await.status(),
        StatusCode::NOT_FOUND
    );

    let response = call(
        &app,
        post_form("/validation/v4/items/99/edit", "id=99&name=x&price=20000&quantity=1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "ItemNotFound");
}
