use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::engine::MetricsEngine;
use crate::ingest::Document;
use crate::metrics::Metrics;
use crate::record::MetricsRecord;

#[derive(Clone)]
pub struct AppState {
    engine: MetricsEngine,
}

/// Build the HTTP router. `/metrics` is mounted only when a recorder is given.
pub fn router(engine: MetricsEngine, metrics: Option<&Metrics>) -> Router {
    let state = AppState { engine };

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyse", post(analyse))
        .route("/analyse/batch", post(analyse_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state);

    match metrics {
        Some(m) => app.merge(m.router()),
        None => app,
    }
}

fn count(record: &MetricsRecord) {
    counter!("documents_analysed_total").increment(1);
    if record.is_undefined() {
        counter!("documents_undefined_total").increment(1);
    }
}

/// Analysis is CPU-bound, so both handlers run it on the blocking pool.
async fn run_blocking<T, F>(f: F) -> Result<T, (StatusCode, String)>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("analysis failed: {e}")))
}

async fn analyse(
    State(state): State<AppState>,
    Json(doc): Json<Document>,
) -> Result<Json<MetricsRecord>, (StatusCode, String)> {
    let engine = state.engine.clone();
    let record = run_blocking(move || engine.analyse(&doc)).await?;
    count(&record);
    Ok(Json(record))
}

async fn analyse_batch(
    State(state): State<AppState>,
    Json(docs): Json<Vec<Document>>,
) -> Result<Json<Vec<MetricsRecord>>, (StatusCode, String)> {
    let engine = state.engine.clone();
    let records =
        run_blocking(move || docs.iter().map(|d| engine.analyse(d)).collect::<Vec<_>>()).await?;

    records.iter().for_each(count);
    Ok(Json(records))
}

/// Bind and serve until the process is stopped.
pub async fn serve(cfg: &AnalyzerConfig, engine: MetricsEngine) -> anyhow::Result<()> {
    let metrics = Metrics::install()?;
    metrics.record_lexicon_sizes(engine.lexicons());

    let app = router(engine, Some(metrics));
    let listener = tokio::net::TcpListener::bind(&cfg.server.bind).await?;
    info!(target: "api", bind = %cfg.server.bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
