//! CLI tool for parsing slide-deck markdown into structured JSON.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{read_deck_file, DeckDigester, DeckParser, DeckSource, LocalDeckSource};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Parse slide-deck markdown into structured JSON for automated review.
#[derive(Parser, Debug)]
#[command(name = "deck-parse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input deck file(s) (markdown)
    #[arg(required_unless_present = "deck")]
    input: Vec<PathBuf>,

    /// Deck name(s) to read from <root>/decks/<name>/slides.md
    #[arg(short, long)]
    deck: Vec<String>,

    /// Repository root used to resolve --deck names
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Emit the condensed review digest instead of the full model
    #[arg(long)]
    digest: bool,

    /// Maximum body-text characters per slide in the digest
    #[arg(long, default_value_t = deck_core::digest::DEFAULT_BODY_LIMIT)]
    body_limit: usize,

    /// Emit compact single-line JSON
    #[arg(short, long)]
    compact: bool,

    /// Output directory (default: print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// One deck to process: a display name plus where its text comes from.
enum Input<'a> {
    File(&'a Path),
    Deck(&'a str),
}

impl Input<'_> {
    fn label(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Deck(name) => name.to_string(),
        }
    }

    fn stem(&self) -> &str {
        match self {
            Input::File(path) => path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("deck"),
            Input::Deck(name) => name,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let parser = DeckParser::new();
    let digester = DeckDigester::new().with_body_limit(args.body_limit);
    let source = LocalDeckSource::new(&args.root);

    let inputs = args
        .input
        .iter()
        .map(|p| Input::File(p))
        .chain(args.deck.iter().map(|d| Input::Deck(d)));

    for input in inputs {
        if args.verbose {
            eprintln!("Processing: {}", input.label());
        }

        match process_input(&input, &args, &source, &parser, &digester) {
            Ok(output) => {
                if let Some(dir) = args.output.as_ref() {
                    let output_path = get_output_path(input.stem(), dir)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                } else {
                    println!("{}", output);
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input.label(), e);
            }
        }
    }

    Ok(())
}

/// Read, parse and render a single deck.
fn process_input(
    input: &Input<'_>,
    args: &Args,
    source: &LocalDeckSource,
    parser: &DeckParser,
    digester: &DeckDigester,
) -> Result<String> {
    let markdown = match input {
        Input::File(path) => {
            read_deck_file(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        Input::Deck(name) => source
            .fetch(name)
            .with_context(|| format!("Failed to fetch deck '{}'", name))?,
    };

    let deck = parser.parse(&markdown);

    if args.verbose {
        eprintln!("  Found {} slides", deck.slide_count());
    }

    if args.digest {
        render(&digester.digest(&deck), args.compact)
    } else {
        render(&deck, args.compact)
    }
}

fn render<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("Failed to serialize deck")
}

/// Determine the output path for a processed deck.
fn get_output_path(stem: &str, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    Ok(output_dir.join(format!("{}.json", stem)))
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    writeln!(file, "{}", content).with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
