use axum::{routing::get, Router};
use metrics::gauge;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::lexicon::Lexicons;

static INSTALLED: OnceCell<Metrics> = OnceCell::new();

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the process-wide Prometheus recorder (first call wins; later calls
    /// return the same instance).
    pub fn install() -> anyhow::Result<&'static Metrics> {
        INSTALLED.get_or_try_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))?;
            Ok(Self { handle })
        })
    }

    /// Static gauges describing the loaded lexicons.
    pub fn record_lexicon_sizes(&self, lex: &Lexicons) {
        gauge!("lexicon_positive_words").set(lex.positive.len() as f64);
        gauge!("lexicon_negative_words").set(lex.negative.len() as f64);
        gauge!("lexicon_stopwords").set(lex.stopwords.len() as f64);
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
