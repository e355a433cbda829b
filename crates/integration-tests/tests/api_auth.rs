//! Integration tests for registration and login.
//!
//! End-to-end tests require a running API server and database; they are
//! `#[ignore]`-gated. The remaining tests exercise wire shapes only.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use mercadito_integration_tests::api_base_url;

/// A unique-enough username per test run, without clashing across runs.
fn unique_username(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{prefix}-{}-{nanos}", std::process::id())
}

// ============================================================================
// Wire shape tests (no server required)
// ============================================================================

#[test]
fn test_login_response_carries_no_credential_material() {
    use chrono::Utc;
    use mercadito_api::models::User;
    use mercadito_api::routes::auth::LoginResponse;
    use mercadito_core::{UserId, Username};

    let response = LoginResponse {
        status: "ok",
        msg: "login successful".to_owned(),
        user: User {
            id: UserId::new(1),
            name: "Ana".to_owned(),
            surname: "Perez".to_owned(),
            username: Username::parse("ana.perez").expect("valid username"),
            created_at: Utc::now(),
        },
    };

    let body = serde_json::to_string(&response).expect("serializable");
    assert!(body.contains("\"username\":\"ana.perez\""));
    assert!(!body.contains("secret"));
    assert!(!body.contains("password"));
    assert!(!body.contains("hash"));
}

#[test]
fn test_register_request_wire_names() {
    use mercadito_api::routes::auth::RegisterRequest;

    let parsed: RegisterRequest = serde_json::from_value(json!({
        "name": "Ana",
        "surname": "Perez",
        "username": "ana.perez",
        "secret": "correct horse battery"
    }))
    .expect("deserializable");

    assert_eq!(parsed.username, "ana.perez");
    assert_eq!(parsed.secret, "correct horse battery");
}

// ============================================================================
// End-to-end tests (require a running server)
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_register_then_login() {
    let client = Client::new();
    let base_url = api_base_url();
    let username = unique_username("ana");

    let resp = client
        .post(format!("{base_url}/register"))
        .json(&json!({
            "name": "Ana",
            "surname": "Perez",
            "username": username,
            "secret": "correct horse battery"
        }))
        .send()
        .await
        .expect("register request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/login"))
        .json(&json!({"username": username, "secret": "correct horse battery"}))
        .send()
        .await
        .expect("login request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("login body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["user"]["username"], username.as_str());
    // The stored hash must never appear in a response.
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_duplicate_username_is_rejected_without_a_second_row() {
    let client = Client::new();
    let base_url = api_base_url();
    let username = unique_username("dup");

    let register = |secret: &'static str| {
        let client = client.clone();
        let base_url = base_url.clone();
        let username = username.clone();
        async move {
            client
                .post(format!("{base_url}/register"))
                .json(&json!({
                    "name": "Ana",
                    "surname": "Perez",
                    "username": username,
                    "secret": secret
                }))
                .send()
                .await
                .expect("register request failed")
        }
    };

    assert_eq!(register("first secret 123").await.status(), StatusCode::OK);

    let resp = register("second secret 123").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The original credentials still log in; the duplicate never landed.
    let resp = client
        .post(format!("{base_url}/login"))
        .json(&json!({"username": username, "secret": "first secret 123"}))
        .send()
        .await
        .expect("login request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_wrong_secret_is_unauthorized() {
    let client = Client::new();
    let base_url = api_base_url();
    let username = unique_username("wrong");

    let resp = client
        .post(format!("{base_url}/register"))
        .json(&json!({
            "name": "Ana",
            "surname": "Perez",
            "username": username,
            "secret": "correct horse battery"
        }))
        .send()
        .await
        .expect("register request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/login"))
        .json(&json!({"username": username, "secret": "definitely not it"}))
        .send()
        .await
        .expect("login request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["status"], "error");
    assert!(body.get("user").is_none());
}
