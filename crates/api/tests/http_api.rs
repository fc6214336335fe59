//! HTTP-level integration tests: the full router + middleware stack over
//! in-memory collaborators, driven with `tower::ServiceExt::oneshot`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_state, get, post_json};

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app(build_test_state().state);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(build_test_state().state);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(build_test_state().state);
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: signup / login round-trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signup_then_login_issues_tokens() {
    let app = build_test_app(build_test_state().state);

    let credentials = serde_json::json!({
        "email": "player@example.com",
        "password": "correct-horse-battery-staple",
    });

    let response = post_json(app.clone(), "/api/v1/auth/signup", credentials.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["token"].is_string());
    assert_eq!(json["data"]["user"]["email"], "player@example.com");
    assert!(
        json["data"]["user"].get("password_hash").is_none(),
        "the password hash must never be serialized"
    );

    // Signing up again with the same email is a conflict.
    let response = post_json(app.clone(), "/api/v1/auth/signup", credentials.clone()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    // Correct credentials log in.
    let response = post_json(app.clone(), "/api/v1/auth/login", credentials).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["token"].is_string());

    // A wrong password does not.
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({
            "email": "player@example.com",
            "password": "wrong-password",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn signup_rejects_a_short_password() {
    let app = build_test_app(build_test_state().state);

    let response = post_json(
        app,
        "/api/v1/auth/signup",
        serde_json::json!({ "email": "a@example.com", "password": "short" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: launch then list via HTTP (cache coherence over the wire)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn launch_then_list_returns_the_new_game() {
    let app = build_test_app(build_test_state().state);

    // The pre-launch listing is empty (and now cached).
    let response = get(app.clone(), "/api/v1/games").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], serde_json::json!([]));

    let response = post_json(
        app.clone(),
        "/api/v1/games",
        serde_json::json!({
            "title": "Star Forge",
            "genre": "strategy",
            "release_date": "2024-05-01",
            "subscription_type_ids": [],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Star Forge");
    assert!(
        json.get("warnings").is_none(),
        "a clean launch carries no warnings"
    );

    // The launch invalidated the cached empty listing.
    let response = get(app, "/api/v1/games").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["title"], "Star Forge");
}

// ---------------------------------------------------------------------------
// Test: the full subscribe -> launch -> notification -> seen flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn subscription_notification_flow() {
    let app = build_test_app(build_test_state().state);

    // Sign up a user.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/signup",
        serde_json::json!({
            "email": "player@example.com",
            "password": "correct-horse-battery-staple",
        }),
    )
    .await;
    let user_id = body_json(response).await["data"]["user"]["id"]
        .as_i64()
        .expect("user id");

    // Create a subscription type.
    let response = post_json(
        app.clone(),
        "/api/v1/subscription-types",
        serde_json::json!({
            "name": "strategy-fans",
            "description": "Strategy game launches",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let subscription_type_id = body_json(response).await["data"]["id"]
        .as_i64()
        .expect("subscription type id");

    // Subscribe the user to it.
    let response = post_json(
        app.clone(),
        &format!("/api/v1/users/{user_id}/subscriptions"),
        serde_json::json!({ "subscription_type_id": subscription_type_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], true);

    // Launch a game against that subscription type.
    let response = post_json(
        app.clone(),
        "/api/v1/games",
        serde_json::json!({
            "title": "Star Forge",
            "genre": "strategy",
            "release_date": "2024-05-01",
            "subscription_type_ids": [subscription_type_id],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The user now has exactly one unseen notification.
    let response = get(app.clone(), &format!("/api/v1/users/{user_id}/notifications")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["content"], "New game launched: Star Forge");
    assert_eq!(json["data"][0]["seen"], false);
    let notification_id = json["data"][0]["id"].as_i64().expect("notification id");

    // Mark it seen, twice (idempotent).
    for _ in 0..2 {
        let response = post_json(
            app.clone(),
            &format!("/api/v1/notifications/{notification_id}/seen"),
            serde_json::json!({}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"], true);
    }

    // The invalidated cache now serves the flipped flag.
    let response = get(app, &format!("/api/v1/users/{user_id}/notifications")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["seen"], true);
}

// ---------------------------------------------------------------------------
// Test: domain errors map to their HTTP statuses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_user_subscription_is_404() {
    let app = build_test_app(build_test_state().state);

    let response = post_json(
        app,
        "/api/v1/users/9999/subscriptions",
        serde_json::json!({ "subscription_type_id": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unknown_notification_seen_is_404() {
    let app = build_test_app(build_test_state().state);

    let response = post_json(
        app,
        "/api/v1/notifications/9999/seen",
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
