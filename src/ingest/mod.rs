// src/ingest/mod.rs
//! Document sources: where the engine's input text comes from.

pub mod text_dir;
pub mod types;
pub mod url_list;

use std::collections::HashMap;

use crate::error::SourceError;

pub use text_dir::TextDirSource;
pub use types::{Document, DocumentSource};
pub use url_list::{load_url_list, UrlEntry};

/// In-memory source, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<String, Document>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc: Document) {
        self.docs.insert(doc.id.clone(), doc);
    }

    pub fn with(mut self, doc: Document) -> Self {
        self.insert(doc);
        self
    }
}

impl FromIterator<Document> for MemorySource {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        let mut s = Self::new();
        for d in iter {
            s.insert(d);
        }
        s
    }
}

impl DocumentSource for MemorySource {
    fn get(&self, id: &str) -> Result<Document, SourceError> {
        Ok(self
            .docs
            .get(id)
            .cloned()
            .unwrap_or_else(|| Document::new(id, "", "")))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
