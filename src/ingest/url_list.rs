// src/ingest/url_list.rs
//! Reads the list of documents to process: a CSV with `URL_ID` and `URL` columns.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub id: String,
    pub url: String,
}

/// Load entries from a CSV file, preserving row order. Rows with an empty id are skipped.
pub fn load_url_list(path: &Path) -> Result<Vec<UrlEntry>, SourceError> {
    let wrap = |source| SourceError::UrlList {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(wrap)?;

    let headers = rdr.headers().map_err(wrap)?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or(SourceError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let id_col = column("URL_ID")?;
    let url_col = column("URL")?;

    let mut out = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(wrap)?;
        let id = row.get(id_col).unwrap_or_default();
        if id.is_empty() {
            continue;
        }
        out.push(UrlEntry {
            id: id.to_string(),
            url: row.get(url_col).unwrap_or_default().to_string(),
        });
    }
    Ok(out)
}
