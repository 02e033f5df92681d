// src/ingest/text_dir.rs
//! Document source over a directory of extracted article texts (`<id>.txt`).

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SourceError;
use crate::ingest::types::{Document, DocumentSource};
use crate::ingest::url_list::UrlEntry;

pub struct TextDirSource {
    dir: PathBuf,
    locators: HashMap<String, String>,
}

impl TextDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            locators: HashMap::new(),
        }
    }

    /// Attach the id → URL mapping used to fill each document's locator.
    pub fn with_locators<'a, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a UrlEntry>,
    {
        self.locators
            .extend(entries.into_iter().map(|e| (e.id.clone(), e.url.clone())));
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.txt"))
    }
}

impl DocumentSource for TextDirSource {
    fn get(&self, id: &str) -> Result<Document, SourceError> {
        let url = self.locators.get(id).cloned().unwrap_or_default();
        let path = self.path_for(id);
        let text = match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(target: "ingest", id, path = %path.display(), "no extracted text");
                String::new()
            }
            Err(source) => {
                return Err(SourceError::Io {
                    id: id.to_string(),
                    path,
                    source,
                })
            }
        };
        Ok(Document::new(id, url, text))
    }

    fn name(&self) -> &'static str {
        "text_dir"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_and_attaches_locator() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a1.txt"), "Hello there.").unwrap();
        let entries = vec![UrlEntry {
            id: "a1".into(),
            url: "https://example.com/a1".into(),
        }];
        let src = TextDirSource::new(tmp.path()).with_locators(&entries);

        let d = src.get("a1").unwrap();
        assert_eq!(d.text, "Hello there.");
        assert_eq!(d.url, "https://example.com/a1");
    }

    #[test]
    fn missing_file_is_empty_text() {
        let tmp = tempfile::tempdir().unwrap();
        let src = TextDirSource::new(tmp.path());
        let d = src.get("nope").unwrap();
        assert!(d.text.is_empty());
        assert!(d.url.is_empty());
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("b.txt"), b"caf\xe9 ok").unwrap();
        let d = TextDirSource::new(tmp.path()).get("b").unwrap();
        assert!(d.text.starts_with("caf"));
        assert!(d.text.ends_with(" ok"));
    }
}
