//! Shared HTTP test suite for document store backends
//!
//! The `api_tests!` macro generates end-to-end tests that drive the full
//! router: JSON → HTTP request → validation → handler → DocumentStore →
//! HTTP response → JSON.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! api_tests!(InMemoryStore::new());
//! ```

#![allow(dead_code)]

use serde_json::{Value, json};

/// A temple payload with only the required fields
pub fn minimal_temple() -> Value {
    json!({
        "temple_name": "Rome Italy Temple",
        "city": "Rome",
        "date_of_announcement": "2008-10-04"
    })
}

/// A complete temple payload
pub fn full_temple() -> Value {
    json!({
        "temple_name": "Accra Ghana Temple",
        "city": "Accra",
        "date_of_announcement": "1998-02-16",
        "date_of_dedication": "2004-01-11",
        "size": "17,500 sq ft"
    })
}

/// A complete country statistics payload
pub fn country_stats(country: &str) -> Value {
    json!({
        "country": country,
        "stakes": 5,
        "temples": 1,
        "church_members": 120000,
        "temple_present": true,
        "temple_contributions": 10,
        "names_submitted_to_temple": 500
    })
}

/// Identifier that is well formed but never assigned
pub const MISSING_ID: &str = "507f1f77bcf86cd799439011";

/// Generate the HTTP test suite for a storage backend.
///
/// `$store_factory` must produce an `impl DocumentStore + 'static`. It may
/// contain `.await`.
///
/// # Generated Tests
///
/// ## Temples
/// - create then get, list order, field whitelisting, required fields
/// - partial replace, identical replace, empty replace, unknown id
/// - delete then get, malformed and unknown identifiers
/// - malformed identifiers on every item route of both resources
///
/// ## Church statistics
/// - create then get, counter validation, country trimming
/// - replace one counter leaves the others untouched
/// - whole-valued float counters are stored as integers
#[macro_export]
macro_rules! api_tests {
    ($store_factory:expr) => {
        mod api_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};
            use crate::storage_harness::{MISSING_ID, country_stats, full_temple, minimal_temple};
            use temples::server::ServerBuilder;

            async fn make_server() -> TestServer {
                let store = $store_factory;
                let router = ServerBuilder::new().with_store(store).build().unwrap();
                TestServer::try_new(router).unwrap()
            }

            async fn create(server: &TestServer, path: &str, payload: &Value) -> String {
                let response = server.post(path).json(payload).await;
                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                body["id"].as_str().unwrap().to_string()
            }

            fn error_fields(body: &Value) -> Vec<String> {
                body["errors"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|e| e["field"].as_str().unwrap().to_string())
                    .collect()
            }

            // ==============================================================
            // Service routes
            // ==============================================================

            #[tokio::test]
            async fn test_root_and_health() {
                let server = make_server().await;

                let root = server.get("/").await;
                root.assert_status_ok();
                root.assert_text("Hello World");

                let health = server.get("/health").await;
                health.assert_status_ok();
                let body: Value = health.json();
                assert_eq!(body["status"], "ok");
            }

            // ==============================================================
            // Temples: create / get / list
            // ==============================================================

            #[tokio::test]
            async fn test_create_temple_then_get() {
                let server = make_server().await;

                let response = server.post("/temples").json(&minimal_temple()).await;
                response.assert_status(StatusCode::CREATED);

                let body: Value = response.json();
                assert_eq!(body["message"], "Temple announced");
                let id = body["id"].as_str().unwrap();
                assert_eq!(id.len(), 24);
                assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

                let get_resp = server.get(&format!("/temples/{}", id)).await;
                get_resp.assert_status_ok();

                let temple: Value = get_resp.json();
                assert_eq!(temple["_id"], id);
                assert_eq!(temple["temple_name"], "Rome Italy Temple");
                assert_eq!(temple["city"], "Rome");
                assert_eq!(temple["date_of_announcement"], "2008-10-04");
                // Optional fields that were not supplied are absent
                assert!(temple.get("date_of_dedication").is_none());
                assert!(temple.get("size").is_none());
            }

            #[tokio::test]
            async fn test_list_temples_in_insertion_order() {
                let server = make_server().await;

                let empty: Value = server.get("/temples").await.json();
                assert_eq!(empty, json!([]));

                let first = create(&server, "/temples", &minimal_temple()).await;
                let second = create(&server, "/temples", &full_temple()).await;

                let response = server.get("/temples").await;
                response.assert_status_ok();

                let body: Value = response.json();
                let list = body.as_array().unwrap();
                assert_eq!(list.len(), 2);
                assert_eq!(list[0]["_id"], first.as_str());
                assert_eq!(list[1]["_id"], second.as_str());
                assert_eq!(list[1]["size"], "17,500 sq ft");
            }

            #[tokio::test]
            async fn test_create_temple_drops_undeclared_fields() {
                let server = make_server().await;

                let mut payload = minimal_temple();
                payload["_id"] = json!(MISSING_ID);
                payload["is_admin"] = json!(true);

                let id = create(&server, "/temples", &payload).await;
                assert_ne!(id, MISSING_ID);

                let temple: Value = server.get(&format!("/temples/{}", id)).await.json();
                assert!(temple.get("is_admin").is_none());
            }

            #[tokio::test]
            async fn test_create_temple_reports_every_invalid_field() {
                let server = make_server().await;

                let response = server
                    .post("/temples")
                    .json(&json!({ "temple_name": "Ro", "size": 42 }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(
                    error_fields(&body),
                    vec!["temple_name", "city", "date_of_announcement", "size"]
                );
                assert_eq!(
                    body["errors"][0]["message"],
                    "Temple name must be at least 3 characters"
                );

                // Nothing was written
                let list: Value = server.get("/temples").await.json();
                assert_eq!(list, json!([]));
            }

            #[tokio::test]
            async fn test_create_temple_with_malformed_json() {
                let server = make_server().await;

                let response = server
                    .post("/temples")
                    .bytes(axum::body::Bytes::from_static(b"{\"temple_name\": "))
                    .content_type("application/json")
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(error_fields(&body), vec!["body"]);
            }

            // ==============================================================
            // Temples: identifiers
            // ==============================================================

            #[tokio::test]
            async fn test_malformed_id_is_rejected_before_lookup() {
                let server = make_server().await;

                for path in ["/temples/123", "/temples/zzzzzzzzzzzzzzzzzzzzzzzz"] {
                    let response = server.get(path).await;
                    response.assert_status(StatusCode::BAD_REQUEST);

                    let body: Value = response.json();
                    assert_eq!(body["errors"][0]["field"], "id");
                    assert_eq!(
                        body["errors"][0]["message"],
                        "Invalid temple ID format (must be a 24-character hex string)"
                    );
                }

                let response = server.delete("/temples/not-an-id").await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_malformed_id_is_rejected_on_every_item_route() {
                let server = make_server().await;
                let temple_message =
                    "Invalid temple ID format (must be a 24-character hex string)";
                let country_message = "ID must be a valid MongoDB ObjectId";

                let cases = [
                    (
                        server
                            .put("/temples/not-a-valid-id")
                            .json(&json!({ "city": "Paris" }))
                            .await,
                        temple_message,
                    ),
                    (server.delete("/temples/not-a-valid-id").await, temple_message),
                    (server.get("/churchstats/not-a-valid-id").await, country_message),
                    (
                        server
                            .put("/churchstats/not-a-valid-id")
                            .json(&json!({ "stakes": 6 }))
                            .await,
                        country_message,
                    ),
                    (server.delete("/churchstats/not-a-valid-id").await, country_message),
                ];

                for (response, message) in cases {
                    response.assert_status(StatusCode::BAD_REQUEST);
                    let body: Value = response.json();
                    assert_eq!(error_fields(&body), vec!["id"]);
                    assert_eq!(body["errors"][0]["message"], message);
                }

                // Nothing was written along the way
                let temples: Value = server.get("/temples").await.json();
                assert_eq!(temples, json!([]));
                let countries: Value = server.get("/churchstats").await.json();
                assert_eq!(countries, json!([]));
            }

            #[tokio::test]
            async fn test_unknown_temple_returns_404() {
                let server = make_server().await;

                let response = server.get(&format!("/temples/{}", MISSING_ID)).await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: Value = response.json();
                assert_eq!(body, json!({ "message": "Temple not found" }));
            }

            // ==============================================================
            // Temples: replace
            // ==============================================================

            #[tokio::test]
            async fn test_replace_temple_keeps_omitted_fields() {
                let server = make_server().await;
                let id = create(&server, "/temples", &full_temple()).await;

                let response = server
                    .put(&format!("/temples/{}", id))
                    .json(&json!({ "size": "18,000 sq ft" }))
                    .await;
                response.assert_status(StatusCode::NO_CONTENT);

                let temple: Value = server.get(&format!("/temples/{}", id)).await.json();
                assert_eq!(temple["size"], "18,000 sq ft");
                assert_eq!(temple["temple_name"], "Accra Ghana Temple");
                assert_eq!(temple["date_of_dedication"], "2004-01-11");
            }

            #[tokio::test]
            async fn test_identical_replace_reports_no_changes() {
                let server = make_server().await;
                let id = create(&server, "/temples", &minimal_temple()).await;

                let response = server
                    .put(&format!("/temples/{}", id))
                    .json(&json!({ "city": "Rome" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body, json!({ "message": "No changes made to temple" }));
            }

            #[tokio::test]
            async fn test_empty_replace_is_rejected() {
                let server = make_server().await;
                let id = create(&server, "/temples", &minimal_temple()).await;

                let response = server
                    .put(&format!("/temples/{}", id))
                    .json(&json!({ "unknown": 1 }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(error_fields(&body), vec!["body"]);
                assert_eq!(
                    body["errors"][0]["message"],
                    "At least one field must be provided"
                );
            }

            #[tokio::test]
            async fn test_replace_unknown_temple_returns_404() {
                let server = make_server().await;

                let response = server
                    .put(&format!("/temples/{}", MISSING_ID))
                    .json(&json!({ "city": "Paris" }))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Temples: delete
            // ==============================================================

            #[tokio::test]
            async fn test_delete_temple_then_get() {
                let server = make_server().await;
                let id = create(&server, "/temples", &minimal_temple()).await;
                let path = format!("/temples/{}", id);

                server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
                server.get(&path).await.assert_status(StatusCode::NOT_FOUND);

                // Second delete has nothing to remove
                let again = server.delete(&path).await;
                again.assert_status(StatusCode::NOT_FOUND);
                let body: Value = again.json();
                assert_eq!(body["message"], "Temple not found");
            }

            // ==============================================================
            // Church statistics
            // ==============================================================

            #[tokio::test]
            async fn test_create_country_then_get() {
                let server = make_server().await;

                let response = server
                    .post("/churchstats")
                    .json(&country_stats("  Ghana "))
                    .await;
                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["message"], "Country opened");

                let id = body["id"].as_str().unwrap();
                let stats: Value = server.get(&format!("/churchstats/{}", id)).await.json();
                assert_eq!(stats["country"], "Ghana");
                assert_eq!(stats["church_members"], 120000);
                assert_eq!(stats["temple_present"], true);
            }

            #[tokio::test]
            async fn test_replace_single_counter_leaves_others_unchanged() {
                let server = make_server().await;
                let id = create(&server, "/churchstats", &country_stats("Ghana")).await;
                let path = format!("/churchstats/{}", id);

                let response = server.put(&path).json(&json!({ "stakes": 6 })).await;
                response.assert_status(StatusCode::NO_CONTENT);

                let stats: Value = server.get(&path).await.json();
                assert_eq!(stats["stakes"], 6);
                assert_eq!(stats["country"], "Ghana");
                assert_eq!(stats["temples"], 1);
                assert_eq!(stats["church_members"], 120000);
                assert_eq!(stats["temple_present"], true);
                assert_eq!(stats["temple_contributions"], 10);
                assert_eq!(stats["names_submitted_to_temple"], 500);
            }

            #[tokio::test]
            async fn test_whole_float_counter_is_accepted() {
                let server = make_server().await;
                let id = create(&server, "/churchstats", &country_stats("Ghana")).await;
                let path = format!("/churchstats/{}", id);

                let response = server.put(&path).json(&json!({ "stakes": 7.0 })).await;
                response.assert_status(StatusCode::NO_CONTENT);

                let stats: Value = server.get(&path).await.json();
                assert_eq!(stats["stakes"], 7);
                assert!(stats["stakes"].is_i64());

                let response = server.put(&path).json(&json!({ "stakes": 7.5 })).await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_country_counters_are_validated() {
                let server = make_server().await;

                let mut payload = country_stats("Ghana");
                payload["stakes"] = json!(-1);
                payload["temple_present"] = json!("yes");

                let response = server.post("/churchstats").json(&payload).await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(error_fields(&body), vec!["stakes", "temple_present"]);
                assert_eq!(
                    body["errors"][0]["message"],
                    "Stakes must be a non-negative integer"
                );
            }

            #[tokio::test]
            async fn test_country_id_and_missing_country() {
                let server = make_server().await;

                let response = server.get("/churchstats/abc").await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(
                    body["errors"][0]["message"],
                    "ID must be a valid MongoDB ObjectId"
                );

                let response = server.get(&format!("/churchstats/{}", MISSING_ID)).await;
                response.assert_status(StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert_eq!(body["message"], "Country not found");
            }

            #[tokio::test]
            async fn test_delete_country() {
                let server = make_server().await;
                let id = create(&server, "/churchstats", &country_stats("Chile")).await;
                let path = format!("/churchstats/{}", id);

                server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);

                let list: Value = server.get("/churchstats").await.json();
                assert_eq!(list, json!([]));
            }
        }
    };
}
