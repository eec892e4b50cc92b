//! session-share transcript sanitizer CLI.
//!
//! The serving layer runs every transcript through the sanitizer before it
//! is persisted; this binary exposes the same path for operators and
//! pipelines:
//! - `ss sanitize` reads a transcript JSON document and writes the redacted
//!   document.
//! - `ss scan` reports detection counts by secret kind without emitting any
//!   matched content.
//!
//! stdout carries command payloads only; all logging goes to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ss_redact::{scan, PatternRegistry, Sanitizer};
use ss_schema::Transcript;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Sanitize shared session transcripts.
#[derive(Parser)]
#[command(name = "ss", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Redact secrets from a transcript JSON document
    Sanitize {
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print the output document
        #[arg(long)]
        pretty: bool,
    },

    /// Count secret detections in a transcript without emitting content
    Scan {
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Sanitize {
            input,
            output,
            pretty,
        } => run_sanitize(input.as_deref(), output.as_deref(), pretty),
        Commands::Scan { input } => run_scan(input.as_deref()),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ss={level},ss_redact={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn run_sanitize(input: Option<&Path>, output: Option<&Path>, pretty: bool) -> Result<()> {
    let raw = read_input(input)?;
    let transcript = Transcript::from_json(&raw).context("invalid transcript document")?;

    let sanitized = Sanitizer::shared().sanitize_session(&transcript);

    let rendered = if pretty {
        sanitized.to_json_pretty()
    } else {
        sanitized.to_json()
    }
    .context("failed to serialize sanitized transcript")?;

    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    tracing::info!(
        session = %sanitized.meta.id,
        entries = sanitized.entries.len(),
        "sanitized transcript"
    );
    Ok(())
}

fn run_scan(input: Option<&Path>) -> Result<()> {
    let raw = read_input(input)?;

    // Scan the raw document text: this covers every field the sanitizer
    // would visit, plus keys and metadata, which is the right bias for a
    // detect-only report.
    let matches = scan(PatternRegistry::builtin(), &raw);

    let mut by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
    for m in &matches {
        *by_kind.entry(m.kind.as_str()).or_insert(0) += 1;
    }

    let report = serde_json::json!({
        "total": matches.len(),
        "byKind": by_kind,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
