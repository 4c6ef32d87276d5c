//! Tests against a running server

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://127.0.0.1:8080";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_create_checkout_return_and_delete_book() {
    let client = Client::new();
    let id = format!("live-{}", std::process::id());

    // Create book
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "id": id,
            "title": "Test Book",
            "author": "Test Author",
            "quantity": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    // Checkout the only copy
    let response = client
        .patch(format!("{}/checkout", BASE_URL))
        .query(&[("id", id.as_str())])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 0);

    // Second checkout is refused
    let response = client
        .patch(format!("{}/checkout", BASE_URL))
        .query(&[("id", id.as_str())])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Return it
    let response = client
        .patch(format!("{}/return", BASE_URL))
        .query(&[("id", id.as_str())])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // Delete book
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_get_missing_book() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/does-not-exist", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
