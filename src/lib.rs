// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod lexicon;
pub mod metrics;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod sentiment;
pub mod sink;
pub mod syllables;
pub mod tokenize;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::config::AnalyzerConfig;
pub use crate::engine::MetricsEngine;
pub use crate::ingest::{Document, DocumentSource};
pub use crate::lexicon::{Lexicon, Lexicons};
pub use crate::pipeline::{run_batch, BatchOptions, BatchSummary};
pub use crate::record::{DocumentMetrics, MetricsRecord, OUTPUT_FIELDS};
pub use crate::sink::ResultSink;
pub use crate::syllables::syllable_estimate;
