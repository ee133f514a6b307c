//! Provider client tests against a mock trivia API served on a local port.

use std::time::Duration;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use jeopardy::loader::{BoardLoader, LoaderSettings};
use jeopardy::provider::{ClueDetails, ProviderClient, ProviderError, TriviaProvider};
use jeopardy_core::{BoardError, CategoryId};

fn clues(prefix: &str) -> Value {
    let clues: Vec<Value> = (0..5)
        .map(|i| json!({ "question": format!("{prefix} question {i}"), "answer": format!("{prefix} answer {i}") }))
        .collect();
    Value::Array(clues)
}

async fn categories() -> Json<Value> {
    Json(json!({
        "categories": [
            { "id": 1, "title": "math" },
            { "id": 2, "title": "history" },
            { "id": "3", "title": "flaky" },
            { "id": 4, "title": "mislabeled" },
            { "id": 5, "title": "slow" },
            { "id": 6, "title": "broken" }
        ]
    }))
}

async fn details(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, String)> {
    match id.as_str() {
        "1" => Ok(Json(json!({
            "details": {
                "1": {
                    "title": "Math",
                    "clues": [
                        { "question": "2+2", "answer": 4 },
                        { "question": "1+1", "answer": 2 },
                        { "question": "3*3", "answer": 9 },
                        { "question": "10/2", "answer": 5 },
                        { "question": "7-7", "answer": 0 }
                    ]
                }
            }
        }))),
        "2" => Ok(Json(json!({
            "details": { "2": { "title": "History", "clues": clues("History") } }
        }))),
        "3" => Err((StatusCode::SERVICE_UNAVAILABLE, "try later".to_string())),
        "4" => Ok(Json(json!({
            "details": { "40": { "title": "Wrong", "clues": clues("Wrong") } }
        }))),
        "5" => {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(Json(json!({ "details": {} })))
        }
        "6" => Ok(Json(json!({ "details": "not a map" }))),
        _ => Err((StatusCode::NOT_FOUND, "no such category".to_string())),
    }
}

/// Serve a mock trivia API and return its base URL.
async fn spawn_provider() -> String {
    let app = Router::new()
        .route("/api/categories", get(categories))
        .route("/api/details/{id}", get(details));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock provider failed");
    });
    format!("http://{}/api", addr)
}

async fn client(timeout: Duration) -> ProviderClient {
    ProviderClient::new(spawn_provider().await, timeout).expect("Failed to build client")
}

#[tokio::test]
async fn lists_numeric_and_string_ids() {
    let client = client(Duration::from_secs(5)).await;

    let ids = client.category_ids().await.expect("Listing failed");

    let expected: Vec<CategoryId> = ["1", "2", "3", "4", "5", "6"]
        .into_iter()
        .map(CategoryId::from)
        .collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn decodes_category_details_with_numeric_answers() {
    let client = client(Duration::from_secs(5)).await;

    let details = client
        .category_details(&CategoryId::from("1"))
        .await
        .expect("Details failed");

    assert_eq!(details.title.as_deref(), Some("Math"));
    assert_eq!(details.clues.len(), 5);
    assert_eq!(details.clues[0], ClueDetails::new("2+2", "4"));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let base = spawn_provider().await;
    let client = ProviderClient::new(format!("{base}/"), Duration::from_secs(5)).unwrap();

    assert_eq!(client.base_url(), base);
    assert!(client.category_ids().await.is_ok());
}

#[tokio::test]
async fn missing_entry_is_a_shape_error() {
    let client = client(Duration::from_secs(5)).await;

    let err = client
        .category_details(&CategoryId::from("4"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Shape(_)), "{err:?}");
}

#[tokio::test]
async fn malformed_body_is_a_shape_error() {
    let client = client(Duration::from_secs(5)).await;

    let err = client
        .category_details(&CategoryId::from("6"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Shape(_)), "{err:?}");
    assert!(!err.is_transient());
}

#[tokio::test]
async fn status_codes_map_to_errors() {
    let client = client(Duration::from_secs(5)).await;

    let unavailable = client
        .category_details(&CategoryId::from("3"))
        .await
        .unwrap_err();
    assert!(matches!(unavailable, ProviderError::Server(ref msg) if msg.contains("503")));
    assert!(unavailable.is_transient());

    let missing = client
        .category_details(&CategoryId::from("99"))
        .await
        .unwrap_err();
    assert!(matches!(missing, ProviderError::NotFound(ref body) if body == "no such category"));
}

#[tokio::test]
async fn slow_response_times_out() {
    let client = client(Duration::from_millis(100)).await;

    let err = client
        .category_details(&CategoryId::from("5"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Http(ref e) if e.is_timeout()), "{err:?}");
    assert!(err.is_transient());
}

#[tokio::test]
async fn loads_a_board_over_http() {
    let loader = BoardLoader::new(
        client(Duration::from_secs(5)).await,
        LoaderSettings {
            categories: 2,
            retries: 0,
            ..LoaderSettings::default()
        },
    );
    let ids = [CategoryId::from("1"), CategoryId::from("2")];

    let board = loader.load_selected(&ids).await.expect("Load failed");

    assert_eq!(board.categories()[0].title, "Math");
    assert_eq!(board.categories()[0].clues[4].answer, "0");
    assert_eq!(board.categories()[1].clues[2].question, "History question 2");
}

#[tokio::test]
async fn http_failure_mid_load_fails_the_board() {
    let loader = BoardLoader::new(
        client(Duration::from_secs(5)).await,
        LoaderSettings {
            retries: 0,
            ..LoaderSettings::default()
        },
    );
    let ids = [CategoryId::from("1"), CategoryId::from("3")];

    let err = loader.load_selected(&ids).await.unwrap_err();

    assert!(
        matches!(err, BoardError::CategoryFetch { ref id, .. } if id.as_str() == "3"),
        "{err:?}"
    );
}
