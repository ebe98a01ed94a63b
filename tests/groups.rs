use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use gift_exchange::{app, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn call(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let req = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(b.to_string())),
        None => req.body(Body::empty()),
    }
    .unwrap();

    let res = router.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    call(router, Method::GET, uri, None).await
}

async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    call(router, Method::POST, uri, Some(body)).await
}

async fn put(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    call(router, Method::PUT, uri, Some(body)).await
}

#[tokio::test]
async fn should_create_groups_with_sequential_ids() {
    let router = app(AppState::init());

    let (status, body) = post(&router, "/group", json!({"name": "Team A"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"group_id": 1}));

    let (_, body) = post(&router, "/group", json!({"name": "Team B"})).await;
    assert_eq!(body, json!({"group_id": 2}));

    let (status, body) = get(&router, "/groups").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_reject_group_without_name() {
    let router = app(AppState::init());

    let (status, body) = post(&router, "/group", json!({"description": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "group name is required"}));

    let (status, _) = post(&router, "/group", json!({"name": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&router, "/groups").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_reject_malformed_body() {
    let router = app(AppState::init());

    let (status, body) = call(&router, Method::POST, "/group", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_group() {
    let router = app(AppState::init());

    for method in [Method::GET, Method::DELETE] {
        let (status, _) = call(&router, method, "/group/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (status, _) = put(&router, "/group/7", json!({"name": "x"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_update_group_and_reset_description() {
    let router = app(AppState::init());
    post(
        &router,
        "/group",
        json!({"name": "Office", "description": "floor 3"}),
    )
    .await;

    let (status, body) = put(&router, "/group/1", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "group updated successfully"}));

    let (_, body) = get(&router, "/group/1").await;
    assert_eq!(
        body,
        json!({"id": 1, "name": "Office", "description": "", "participants": []})
    );

    put(
        &router,
        "/group/1",
        json!({"name": "Office party", "description": "friday"}),
    )
    .await;

    let (_, body) = get(&router, "/group/1").await;
    assert_eq!(body["name"], "Office party");
    assert_eq!(body["description"], "friday");
}

#[tokio::test]
async fn should_reject_participant_list_on_update() {
    let router = app(AppState::init());
    post(&router, "/group", json!({"name": "Team A"})).await;

    let (status, _) = put(
        &router,
        "/group/1",
        json!({
            "name": "Team A",
            "description": "x",
            "participants": [{"id": 1, "name": "Alice"}]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = put(
        &router,
        "/group/1",
        json!({"participants": {"id": 1, "name": "Alice"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&router, "/group/1").await;
    assert_eq!(body["participants"], json!([{"id": 1, "name": "Alice", "wish": null}]));
}

#[tokio::test]
async fn should_delete_group_without_reusing_id() {
    let router = app(AppState::init());
    post(&router, "/group", json!({"name": "Team A"})).await;
    post(&router, "/group", json!({"name": "Team B"})).await;

    let (status, body) = call(&router, Method::DELETE, "/group/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = get(&router, "/group/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = post(&router, "/group", json!({"name": "Team C"})).await;
    assert_eq!(body, json!({"group_id": 3}));
}

#[tokio::test]
async fn should_attach_participant_to_group() {
    let router = app(AppState::init());
    post(&router, "/group", json!({"name": "Office"})).await;

    let (status, body) = post(
        &router,
        "/group/1/participant",
        json!({"name": "Alice", "wish": "socks"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"part_id": 1}));

    let (_, body) = get(&router, "/group/1").await;
    assert_eq!(
        body["participants"],
        json!([{"id": 1, "name": "Alice", "wish": "socks"}])
    );

    let (status, body) = get(&router, "/participant/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Alice", "wish": "socks"}));
}

#[tokio::test]
async fn should_not_attach_participant_to_unknown_group() {
    let router = app(AppState::init());

    let (status, _) = post(
        &router,
        "/group/1/participant",
        json!({"name": "Alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&router, "/participants").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_not_attach_participant_without_name() {
    let router = app(AppState::init());
    post(&router, "/group", json!({"name": "Office"})).await;

    let (status, body) = post(
        &router,
        "/group/1/participant",
        json!({"wish": "socks"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "participant name is required"}));
}

#[tokio::test]
async fn should_report_health() {
    let router = app(AppState::init());

    let (status, _) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
}
