// src/config/analyzer.rs
//! Run configuration (TOML), with env overrides on top.
//!
//! Resolution:
//! 1) `$ANALYZER_CONFIG_PATH` (must exist)
//! 2) `config/analyzer.toml`
//! 3) built-in defaults
//!
//! Then `ANALYZER_OUTPUT_PATH`, `ANALYZER_TEXT_DIR`, `ANALYZER_PARALLEL`,
//! `ANALYZER_BIND` override single fields.

use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;
use crate::lexicon::Lexicons;

pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_OUTPUT_PATH: &str = "ANALYZER_OUTPUT_PATH";
pub const ENV_TEXT_DIR: &str = "ANALYZER_TEXT_DIR";
pub const ENV_PARALLEL: &str = "ANALYZER_PARALLEL";
pub const ENV_BIND: &str = "ANALYZER_BIND";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub lexicon: LexiconPaths,
    pub batch: BatchConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconPaths {
    pub positive: PathBuf,
    pub negative: PathBuf,
    pub stopwords_dir: PathBuf,
}

impl Default for LexiconPaths {
    fn default() -> Self {
        Self {
            positive: PathBuf::from("data/MasterDictionary/positive-words.txt"),
            negative: PathBuf::from("data/MasterDictionary/negative-words.txt"),
            stopwords_dir: PathBuf::from("data/StopWords"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// CSV with `URL_ID` and `URL` columns.
    pub input: PathBuf,
    /// Directory holding `<URL_ID>.txt` files.
    pub text_dir: PathBuf,
    pub output: PathBuf,
    pub parallel: bool,
    /// Keep existing rows in `output` instead of starting a fresh file.
    pub append: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/urls.csv"),
            text_dir: PathBuf::from("extracted_text_files"),
            output: PathBuf::from("output.csv"),
            parallel: false,
            append: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| anyhow!("invalid analyzer config: {e}"))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading analyzer config from {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Resolve the config file (env → default path → built-ins), then apply env overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = match env::var(ENV_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    return Err(anyhow!(
                        "{ENV_CONFIG_PATH} points to non-existent path {}",
                        pb.display()
                    ));
                }
                Self::load_from_file(&pb)?
            }
            Err(_) => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::load_from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(p) = non_empty_env(ENV_OUTPUT_PATH) {
            self.batch.output = PathBuf::from(p);
        }
        if let Some(p) = non_empty_env(ENV_TEXT_DIR) {
            self.batch.text_dir = PathBuf::from(p);
        }
        if let Some(v) = non_empty_env(ENV_PARALLEL) {
            self.batch.parallel = parse_flag(&v);
        }
        if let Some(b) = non_empty_env(ENV_BIND) {
            self.server.bind = b;
        }
    }

    /// Load all three lexicons named by this config. Failure is fatal for a run.
    pub fn load_lexicons(&self) -> Result<Lexicons, LexiconError> {
        Lexicons::load(
            &self.lexicon.positive,
            &self.lexicon.negative,
            &self.lexicon.stopwords_dir,
        )
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
