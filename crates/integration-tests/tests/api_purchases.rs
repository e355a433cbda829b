//! Integration tests for purchase history.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use mercadito_integration_tests::api_base_url;

// ============================================================================
// Wire shape tests (no server required)
// ============================================================================

#[test]
fn test_history_entry_nests_product_fields() {
    use chrono::Utc;
    use mercadito_api::models::{PurchaseHistoryEntry, PurchasedProduct};
    use mercadito_core::{Price, ProductId, PurchaseId};
    use rust_decimal::Decimal;

    let entry = PurchaseHistoryEntry {
        id: PurchaseId::new(4),
        created_at: Utc::now(),
        product: PurchasedProduct {
            id: ProductId::new(7),
            name: "Taza artesanal".to_owned(),
            price: Price::new(Decimal::new(1450, 2)).expect("non-negative"),
            image: None,
        },
    };

    let body = serde_json::to_value(&entry).expect("serializable");
    assert_eq!(body["id"], 4);
    assert_eq!(body["product"]["id"], 7);
    assert_eq!(body["product"]["name"], "Taza artesanal");
}

// ============================================================================
// End-to-end tests (require a running server)
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_user_without_purchases_gets_empty_list() {
    let client = Client::new();
    let base_url = api_base_url();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    let username = format!("hist-{}-{nanos}", std::process::id());

    let resp = client
        .post(format!("{base_url}/register"))
        .json(&json!({
            "name": "Hugo",
            "surname": "Lopez",
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
    let body: Value = resp.json().await.expect("login body");
    let user_id = body["user"]["id"].as_i64().expect("user id");

    let resp = client
        .get(format!("{base_url}/purchases/{user_id}"))
        .send()
        .await
        .expect("history request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("history body");
    assert_eq!(body["purchases"], json!([]));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_unknown_user_is_not_found() {
    let client = Client::new();
    let base_url = api_base_url();

    let resp = client
        .get(format!("{base_url}/purchases/999999999"))
        .send()
        .await
        .expect("history request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["status"], "error");
}
