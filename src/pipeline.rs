// src/pipeline.rs
//! Batch driver: URL list → document source → engine → result sink.
//!
//! Per-document source failures are logged and produce the undefined record; the
//! batch continues. A sink failure stops the batch. With `parallel`, analysis runs
//! on rayon's pool chunk by chunk; records are still written one by one, in input order.

use std::time::Instant;

use anyhow::Context;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::AnalyzerConfig;
use crate::engine::MetricsEngine;
use crate::error::SinkError;
use crate::ingest::{load_url_list, DocumentSource, TextDirSource, UrlEntry};
use crate::record::MetricsRecord;
use crate::sink::{CsvSink, ResultSink};

#[derive(Clone, Copy, Debug, Default)]
pub struct BatchOptions {
    pub parallel: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub undefined: usize,
    pub source_errors: usize,
}

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("documents_analysed_total", "Documents turned into records.");
        describe_counter!(
            "documents_undefined_total",
            "Records emitted with undefined metrics (empty or unreadable document)."
        );
        describe_counter!(
            "document_source_errors_total",
            "Documents the source failed to supply."
        );
        describe_histogram!("analyse_duration_ms", "Per-document analysis time in milliseconds.");
    });
}

struct Outcome {
    record: MetricsRecord,
    source_error: bool,
}

fn analyse_entry<S>(engine: &MetricsEngine, source: &S, entry: &UrlEntry) -> Outcome
where
    S: DocumentSource + ?Sized,
{
    match source.get(&entry.id) {
        Ok(mut doc) => {
            if doc.url.is_empty() {
                doc.url = entry.url.clone();
            }
            let started = Instant::now();
            let record = engine.analyse(&doc);
            histogram!("analyse_duration_ms").record(started.elapsed().as_secs_f64() * 1000.0);
            Outcome {
                record,
                source_error: false,
            }
        }
        Err(e) => {
            warn!(target: "pipeline", error = %e, id = %entry.id, source = source.name(), "document unavailable; writing undefined record");
            counter!("document_source_errors_total").increment(1);
            Outcome {
                record: MetricsRecord::undefined(&entry.id, &entry.url),
                source_error: true,
            }
        }
    }
}

/// Entries analysed together on the rayon pool before their records are written.
const PARALLEL_CHUNK: usize = 64;

/// Analyse every entry and hand the records to `sink` in input order.
///
/// Sequential runs fetch, analyse and write one entry at a time. Parallel runs do
/// the same per chunk of [`PARALLEL_CHUNK`] entries, so written rows never lag
/// far behind.
pub fn run_batch<S, K>(
    engine: &MetricsEngine,
    source: &S,
    sink: &mut K,
    entries: &[UrlEntry],
    opts: BatchOptions,
) -> Result<BatchSummary, SinkError>
where
    S: DocumentSource + ?Sized,
    K: ResultSink + ?Sized,
{
    ensure_metrics_described();
    let started = Instant::now();
    let mut summary = BatchSummary::default();

    if opts.parallel {
        for chunk in entries.chunks(PARALLEL_CHUNK) {
            let outcomes: Vec<Outcome> = chunk
                .par_iter()
                .map(|e| analyse_entry(engine, source, e))
                .collect();
            for o in outcomes {
                emit(sink, o, &mut summary)?;
            }
        }
    } else {
        for e in entries {
            emit(sink, analyse_entry(engine, source, e), &mut summary)?;
        }
    }

    info!(
        target: "pipeline",
        processed = summary.processed,
        undefined = summary.undefined,
        source_errors = summary.source_errors,
        parallel = opts.parallel,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch finished"
    );
    Ok(summary)
}

fn emit<K>(sink: &mut K, o: Outcome, summary: &mut BatchSummary) -> Result<(), SinkError>
where
    K: ResultSink + ?Sized,
{
    sink.write(&o.record)?;
    summary.processed += 1;
    if o.record.is_undefined() {
        summary.undefined += 1;
        counter!("documents_undefined_total").increment(1);
    }
    if o.source_error {
        summary.source_errors += 1;
    }
    counter!("documents_analysed_total").increment(1);
    Ok(())
}

/// Full batch as configured: URL list + text directory in, CSV out.
pub fn run_from_config(cfg: &AnalyzerConfig, engine: &MetricsEngine) -> anyhow::Result<BatchSummary> {
    let b = &cfg.batch;
    let entries = load_url_list(&b.input)?;
    info!(target: "pipeline", input = %b.input.display(), documents = entries.len(), "url list loaded");

    let source = TextDirSource::new(&b.text_dir).with_locators(&entries);
    let mut sink = if b.append {
        CsvSink::append(&b.output)?
    } else {
        CsvSink::create(&b.output)?
    };

    run_batch(
        engine,
        &source,
        &mut sink,
        &entries,
        BatchOptions {
            parallel: b.parallel,
        },
    )
    .with_context(|| format!("writing {}", b.output.display()))
}
