use std::{io::{self, Write}, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trie_autocomplete::{read_seed, Suggestions, Trie};

/// Sample words used when no seed file is given
const SAMPLE_WORDS: [(&str, i64); 4] = [("hello", 5), ("hell", 10), ("heaven", 7), ("heavy", 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// one word per line
    Plain,
    /// one JSON object per prefix
    Json,
}

/// Seed a trie and print popularity ranked completions
#[derive(Debug, Parser)]
#[command(name = "trie-autocomplete", version)]
struct Args {
    /// prefixes to complete
    #[arg(default_values_t = vec!["hea".to_string()])]
    prefixes: Vec<String>,

    /// seed file with `word<TAB>popularity` lines (built-in sample if omitted)
    #[arg(long, env = "TRIE_SEED")]
    seed: Option<PathBuf>,

    /// print at most N completions per prefix
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// output format
    #[arg(long, value_enum, default_value_t = Format::Plain)]
    format: Format,
}

#[derive(Serialize)]
struct PrefixReport<'a> {
    prefix: &'a str,
    #[serde(flatten)]
    suggestions: Suggestions<i64>,
}

fn build_trie(seed: Option<&PathBuf>) -> Result<Trie> {
    let start = Instant::now();
    let trie: Trie = match seed {
        Some(path) => {
            let pairs = read_seed::<i64, _>(path)
                .with_context(|| format!("loading seed file {}", path.display()))?;
            if pairs.is_empty() {
                warn!(path = %path.display(), "seed file has no entries");
            }
            pairs.into_iter().collect()
        }
        None => SAMPLE_WORDS.into_iter().collect(),
    };
    info!(
        words = trie.len(),
        nodes = trie.node_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "trie built"
    );
    Ok(trie)
}

fn run(args: Args) -> Result<()> {
    let trie = build_trie(args.seed.as_ref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for prefix in &args.prefixes {
        let mut suggestions = trie.suggestions(prefix);
        if let Some(limit) = args.limit {
            suggestions.truncate(limit);
        }
        info!(prefix = %prefix, hits = suggestions.len(), "completed");
        match args.format {
            Format::Plain => {
                for word in suggestions.words() {
                    writeln!(out, "{word}")?;
                }
            }
            Format::Json => {
                let report = PrefixReport {
                    prefix,
                    suggestions,
                };
                serde_json::to_writer(&mut out, &report)?;
                writeln!(out)?;
            }
        }
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    run(Args::parse())
}
