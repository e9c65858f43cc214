//! Redline - inspect and correct annotated documents.
//!
//! # Usage
//!
//! ```bash
//! redline document.ann
//! redline --source document.ann
//! redline --corrected --level 1 document.ann
//! redline --annotations document.ann
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use redline::AnnotatedText;

/// Inspect and correct annotated documents
#[derive(Parser, Debug)]
#[command(name = "redline", version, about, long_about = None)]
struct Cli {
    /// Annotated document to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the plain text with all markup stripped
    #[arg(long)]
    source: bool,

    /// Print the corrected text
    #[arg(long)]
    corrected: bool,

    /// Suggestion index to apply with --corrected
    #[arg(long, default_value_t = 0)]
    level: usize,

    /// Print the annotation list as JSON
    #[arg(long)]
    annotations: bool,

    /// Omit metadata when printing markup
    #[arg(long)]
    no_meta: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let text = AnnotatedText::from_markup(&raw)
        .with_context(|| format!("Failed to parse {}", cli.file.display()))?;

    if cli.source {
        println!("{}", text.original_text());
    } else if cli.corrected {
        println!("{}", text.corrected_text(cli.level));
    } else if cli.annotations {
        let json = serde_json::to_string_pretty(text.annotations())
            .context("Failed to serialize annotations")?;
        println!("{json}");
    } else {
        println!("{}", text.to_markup(!cli.no_meta));
    }

    Ok(())
}
