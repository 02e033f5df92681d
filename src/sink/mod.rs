// src/sink/mod.rs
//! Result sinks: where finished records go. Sinks are driven from one thread
//! (`&mut self`), so rows are never interleaved.

pub mod csv_file;

use crate::error::SinkError;
use crate::record::MetricsRecord;

pub use csv_file::CsvSink;

pub trait ResultSink {
    /// Append one record, after any rows already written.
    fn write(&mut self, record: &MetricsRecord) -> Result<(), SinkError>;
}

/// Collects records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<MetricsRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for MemorySink {
    fn write(&mut self, record: &MetricsRecord) -> Result<(), SinkError> {
        self.records.push(record.clone());
        Ok(())
    }
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn write(&mut self, record: &MetricsRecord) -> Result<(), SinkError> {
        (**self).write(record)
    }
}
