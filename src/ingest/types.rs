// src/ingest/types.rs
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// One document to analyse. `text` may be empty (the undefined path).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: String, // e.g. "blackassign0001"
    #[serde(default)]
    pub url: String, // source locator, echoed into the record
    #[serde(default)]
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            text: text.into(),
        }
    }
}

/// Supplies raw text and locator for a document id.
///
/// A missing document must come back as `Ok` with empty text; `Err` is reserved
/// for failures the batch should log and skip.
pub trait DocumentSource: Send + Sync {
    fn get(&self, id: &str) -> Result<Document, SourceError>;
    fn name(&self) -> &'static str;
}
