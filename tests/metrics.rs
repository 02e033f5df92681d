// tests/metrics.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use article_sentiment_analyzer::metrics::Metrics;
use article_sentiment_analyzer::{router, Lexicons, MetricsEngine};

// Full in-process app with the Prometheus recorder installed.
fn build_app() -> Router {
    let lex = Lexicons::from_words(["good"], ["bad", "worse"], ["the"]);
    let metrics = Metrics::install().expect("install recorder");
    metrics.record_lexicon_sizes(&lex);
    router(MetricsEngine::new(lex), Some(metrics))
}

async fn scrape(app: Router) -> String {
    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    // axum::body::to_bytes requires an explicit limit
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn metrics_endpoint_counts_analysed_documents() {
    let app = build_app();

    for text in ["The good part.", ""] {
        let payload = serde_json::json!({ "id": "m", "text": text }).to_string();
        let resp = app
            .clone()
            .oneshot(
                Request::post("/analyse")
                    .header("content-type", "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let text = scrape(app).await;
    assert!(text.contains("documents_analysed_total"), "{text}");
    assert!(text.contains("documents_undefined_total"), "{text}");
    assert!(text.contains("lexicon_negative_words"), "{text}");
}

#[tokio::test]
async fn metrics_route_absent_without_recorder() {
    let app = router(MetricsEngine::new(Lexicons::default()), None);
    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
