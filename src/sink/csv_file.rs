// src/sink/csv_file.rs
//! CSV result sink. One header row (fixed column order), then one row per record,
//! flushed after every write so a crash keeps completed rows.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::info;

use super::ResultSink;
use crate::error::SinkError;
use crate::record::{MetricsRecord, OUTPUT_FIELDS};

pub struct CsvSink {
    writer: csv::Writer<File>,
    path: PathBuf,
    rows: usize,
}

impl CsvSink {
    /// Start a fresh output: truncate (or create) and write the header now.
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        let file = File::create(path).map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut sink = Self::from_file(file, path);
        sink.write_header()?;
        info!(target: "sink", path = %path.display(), "output created");
        Ok(sink)
    }

    /// Continue an existing output. The header is written only if the file is
    /// new or empty.
    pub fn append(path: &Path) -> Result<Self, SinkError> {
        let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let mut sink = Self::from_file(file, path);
        if needs_header {
            sink.write_header()?;
        }
        info!(target: "sink", path = %path.display(), needs_header, "output opened for append");
        Ok(sink)
    }

    fn from_file(file: File, path: &Path) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        Self {
            writer,
            path: path.to_path_buf(),
            rows: 0,
        }
    }

    fn write_header(&mut self) -> Result<(), SinkError> {
        self.writer.write_record(OUTPUT_FIELDS)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records written through this sink (header excluded).
    pub fn rows_written(&self) -> usize {
        self.rows
    }
}

impl ResultSink for CsvSink {
    fn write(&mut self, record: &MetricsRecord) -> Result<(), SinkError> {
        self.writer.write_record(record.to_row())?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }
}
