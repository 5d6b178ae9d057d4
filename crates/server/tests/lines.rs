//! Acceptance tests for the `/lines` resource.
//!
//! The not-found status codes are asymmetric on purpose: `GET` answers
//! `400 Bad Request`, while `PUT` and `DELETE` answer `204 No Content`.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, body_json, created_id, location, send, send_json};

#[tokio::test]
async fn test_create_line() {
    let app = app().await;

    let response = send_json(
        &app,
        "POST",
        "/lines",
        &json!({"name": "3호선", "color": "bg-orange-600"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(!location(&response).is_empty());

    let body = body_json(response).await;
    assert_eq!(body["name"], "3호선");
    assert_eq!(body["color"], "bg-orange-600");
}

#[tokio::test]
async fn test_create_line_with_duplicate_name_is_bad_request() {
    let app = app().await;
    let params = json!({"name": "4호선", "color": "bg-blue-600"});

    send_json(&app, "POST", "/lines", &params).await;
    let response = send_json(&app, "POST", "/lines", &params).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // no second row was added
    let lines = body_json(send(&app, "GET", "/lines").await).await;
    assert_eq!(lines.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_line() {
    let app = app().await;

    let created = send_json(
        &app,
        "POST",
        "/lines",
        &json!({"name": "1호선", "color": "bg-red-600"}),
    )
    .await;
    let uri = location(&created);

    let response = send(&app, "GET", &uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "1호선");
    assert_eq!(body["color"], "bg-red-600");
    assert_eq!(body["stations"], json!([]));
}

#[tokio::test]
async fn test_find_missing_line_is_bad_request() {
    let app = app().await;

    let response = send(&app, "GET", "/lines/0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_lines() {
    let app = app().await;

    let first = send_json(
        &app,
        "POST",
        "/lines",
        &json!({"name": "1호선", "color": "bg-blue-600"}),
    )
    .await;
    let second = send_json(
        &app,
        "POST",
        "/lines",
        &json!({"name": "2호선", "color": "bg-green-600"}),
    )
    .await;

    let first_id = created_id(first).await;
    let second_id = created_id(second).await;

    let response = send(&app, "GET", "/lines").await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<i64> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line["id"].as_i64().unwrap())
        .collect();
    assert!(listed.contains(&first_id));
    assert!(listed.contains(&second_id));
}

#[tokio::test]
async fn test_update_line() {
    let app = app().await;

    let created = send_json(
        &app,
        "POST",
        "/lines",
        &json!({"name": "1호선", "color": "bg-red-600"}),
    )
    .await;
    let uri = location(&created);

    let response = send_json(
        &app,
        "PUT",
        &uri,
        &json!({"name": "2호선", "color": "bg-green-600"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(send(&app, "GET", &uri).await).await;
    assert_eq!(body["name"], "2호선");
    assert_eq!(body["color"], "bg-green-600");
}

#[tokio::test]
async fn test_update_missing_line_is_no_content() {
    let app = app().await;

    let response = send_json(
        &app,
        "PUT",
        "/lines/1",
        &json!({"name": "1호선", "color": "bg-red-600"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_may_rename_into_an_existing_name() {
    // uniqueness is checked on create only
    let app = app().await;

    send_json(
        &app,
        "POST",
        "/lines",
        &json!({"name": "1호선", "color": "bg-blue-600"}),
    )
    .await;
    let second = send_json(
        &app,
        "POST",
        "/lines",
        &json!({"name": "2호선", "color": "bg-green-600"}),
    )
    .await;

    let response = send_json(
        &app,
        "PUT",
        &location(&second),
        &json!({"name": "1호선", "color": "bg-blue-600"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_line() {
    let app = app().await;

    let created = send_json(
        &app,
        "POST",
        "/lines",
        &json!({"name": "1호선", "color": "bg-blue-600"}),
    )
    .await;

    let response = send(&app, "DELETE", &location(&created)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let lines = body_json(send(&app, "GET", "/lines").await).await;
    assert!(lines.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_line_is_no_content() {
    let app = app().await;

    let response = send(&app, "DELETE", "/lines/1").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_create_line_with_initial_section() {
    let app = app().await;

    let up = created_id(send_json(&app, "POST", "/stations", &json!({"name": "강남역"})).await).await;
    let down =
        created_id(send_json(&app, "POST", "/stations", &json!({"name": "잠실역"})).await).await;

    let response = send_json(
        &app,
        "POST",
        "/lines",
        &json!({
            "name": "2호선",
            "color": "bg-green-600",
            "upStationId": up,
            "downStationId": down,
            "distance": 10,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let uri = location(&response);
    let body = body_json(response).await;
    assert_eq!(body["stations"][0]["name"], "강남역");
    assert_eq!(body["stations"][1]["name"], "잠실역");

    // the read path resolves the same stations
    let found = body_json(send(&app, "GET", &uri).await).await;
    assert_eq!(found["stations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_line_with_unknown_station_is_bad_request() {
    let app = app().await;

    let response = send_json(
        &app,
        "POST",
        "/lines",
        &json!({
            "name": "2호선",
            "color": "bg-green-600",
            "upStationId": 1,
            "downStationId": 2,
            "distance": 10,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
