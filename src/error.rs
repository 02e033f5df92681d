// src/error.rs
//! Error types at the library boundaries (lexicons, document sources, sinks).
//! Application glue (config, CLI) uses `anyhow` on top of these.

use std::path::PathBuf;
use thiserror::Error;

/// Lexicon loading failed. Fatal: nothing can be scored without lexicons.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("reading lexicon file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading stopword directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A document could not be supplied (anything other than "not found").
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("reading document `{id}` from {path}: {source}")]
    Io {
        id: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading url list {path}: {source}")]
    UrlList {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("url list {path} is missing the `{column}` column")]
    MissingColumn { path: PathBuf, column: &'static str },
}

/// Persisting a record failed. Fatal for a batch: rows must not be dropped silently.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("opening output {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing csv row: {0}")]
    Csv(#[from] csv::Error),
    #[error("flushing output: {0}")]
    Io(#[from] std::io::Error),
}
