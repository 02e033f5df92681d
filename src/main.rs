//! Article Sentiment Analyzer: binary entrypoint.
//! `run` scores every document of the configured URL list into a CSV;
//! `serve` exposes the same engine over HTTP.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use article_sentiment_analyzer::config::analyzer::ENV_CONFIG_PATH;
use article_sentiment_analyzer::{api, pipeline, AnalyzerConfig, MetricsEngine};

#[derive(Parser)]
#[command(
    name = "article-sentiment-analyzer",
    about = "Sentiment and readability metrics for extracted article texts",
    version
)]
struct Cli {
    /// Config file (TOML); falls back to config/analyzer.toml, then built-in defaults
    #[arg(long, global = true, env = ENV_CONFIG_PATH)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse every document in the URL list and write the output CSV
    Run {
        /// Analyse documents on all cores (output order is unchanged)
        #[arg(long)]
        parallel: bool,
        /// Append to an existing output instead of starting a new one
        #[arg(long)]
        append: bool,
    },
    /// Serve the engine over HTTP
    Serve {
        /// Address to bind, e.g. 127.0.0.1:8080
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Compact logs by default; `LOG_FORMAT=json` for structured output.
/// Filter comes from `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("article_sentiment_analyzer=info,warn"));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<AnalyzerConfig> {
    match explicit {
        Some(path) => {
            let mut cfg = AnalyzerConfig::load_from_file(&path)?;
            cfg.apply_env_overrides();
            Ok(cfg)
        }
        None => AnalyzerConfig::load(),
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let mut cfg = load_config(cli.config)?;

    // Lexicons are required before any document is touched.
    let lexicons = cfg.load_lexicons().context("loading lexicons")?;
    let engine = MetricsEngine::new(lexicons);

    match cli.command {
        Command::Run { parallel, append } => {
            cfg.batch.parallel |= parallel;
            cfg.batch.append |= append;
            let summary = pipeline::run_from_config(&cfg, &engine)?;
            info!(
                processed = summary.processed,
                undefined = summary.undefined,
                source_errors = summary.source_errors,
                output = %cfg.batch.output.display(),
                "done"
            );
        }
        Command::Serve { bind } => {
            if let Some(b) = bind {
                cfg.server.bind = b;
            }
            tokio::runtime::Runtime::new()
                .context("starting tokio runtime")?
                .block_on(api::serve(&cfg, engine))?;
        }
    }
    Ok(())
}
