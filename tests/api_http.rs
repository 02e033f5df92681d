// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /analyse
// - POST /analyse/batch (order, undefined records)

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use article_sentiment_analyzer::{router, Lexicons, MetricsEngine};

const BODY_LIMIT: usize = 1024 * 1024;

fn test_router() -> Router {
    let engine = MetricsEngine::new(Lexicons::from_words(
        ["love", "great", "well"],
        ["bad"],
        ["this", "it"],
    ));
    router(engine, None)
}

fn post_json(uri: &str, payload: &Json) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST")
}

async fn json_body(resp: axum::response::Response) -> Json {
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = test_router().oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK, "health should be 200");

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    assert_eq!(String::from_utf8_lossy(&bytes).trim(), "OK");
}

#[tokio::test]
async fn api_analyse_returns_metrics_record() {
    let payload = json!({
        "id": "ex",
        "url": "https://example.com/ex",
        "text": "I love this great product. It works well."
    });
    let resp = test_router()
        .oneshot(post_json("/analyse", &payload))
        .await
        .expect("oneshot /analyse");
    assert_eq!(resp.status(), StatusCode::OK);

    let v = json_body(resp).await;
    assert_eq!(v["id"], "ex");
    assert_eq!(v["url"], "https://example.com/ex");
    let m = &v["metrics"];
    assert_eq!(m["positive_score"], 3);
    assert_eq!(m["negative_score"], 0);
    assert_eq!(m["personal_pronouns"], 1);
    for field in [
        "polarity_score",
        "subjectivity_score",
        "avg_sentence_length",
        "percentage_complex_words",
        "fog_index",
        "avg_words_per_sentence",
        "complex_word_count",
        "word_count",
        "syllables_per_word",
        "avg_word_length",
    ] {
        assert!(m.get(field).is_some(), "missing field {field}");
    }
}

#[tokio::test]
async fn api_analyse_empty_text_is_undefined() {
    // `url` and `text` may be omitted.
    let resp = test_router()
        .oneshot(post_json("/analyse", &json!({ "id": "blank" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = json_body(resp).await;
    assert_eq!(v["id"], "blank");
    assert!(v["metrics"].is_null());
}

#[tokio::test]
async fn api_batch_preserves_order() {
    let payload = json!([
        { "id": "a", "url": "u1", "text": "This is bad." },
        { "id": "b", "url": "u2", "text": "" },
        { "id": "c", "url": "u3", "text": "Great news. We love it." }
    ]);
    let resp = test_router()
        .oneshot(post_json("/analyse/batch", &payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = json_body(resp).await;
    let arr = v.as_array().expect("array");
    let ids: Vec<&str> = arr.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(arr[0]["metrics"]["negative_score"], 1);
    assert!(arr[1]["metrics"].is_null());
    assert_eq!(arr[2]["metrics"]["positive_score"], 2);
}

#[tokio::test]
async fn api_rejects_malformed_json() {
    let req = Request::builder()
        .method("POST")
        .uri("/analyse")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = test_router().oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error(), "got {}", resp.status());
}
