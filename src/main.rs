use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use cjk_autojoin::{Pipeline, default_pipeline, process_file, process_text};
use clap::{ArgAction, Parser};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    version,
    about = "Remove line breaks between CJK characters in Markdown documents"
)]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// Print the preprocessing stages in execution order and exit
    #[arg(long = "list-stages")]
    list_stages: bool,
    /// Increase log verbosity (repeatable); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Markdown files to process
    files: Vec<PathBuf>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "cjk_autojoin=warn",
        1 => "cjk_autojoin=debug",
        _ => "cjk_autojoin=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn handle_file(pipeline: &Pipeline, path: &Path, in_place: bool) -> anyhow::Result<String> {
    let fixed =
        process_file(pipeline, path).with_context(|| format!("reading {}", path.display()))?;
    if in_place {
        fs::write(path, &fixed).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "rewrote file");
        return Ok(String::new());
    }
    Ok(fixed)
}

/// Entry point for the command-line tool that rejoins hard-wrapped CJK text.
///
/// Reads standard input when no files are given. Files are processed in
/// parallel but printed in argument order; a file that fails does not stop the
/// others from being emitted, and the first failure is reported on exit.
///
/// # Examples
///
/// ```sh
/// # Print the rejoined document
/// cjk-autojoin notes.md
///
/// # Rewrite files in place
/// cjk-autojoin --in-place a.md b.md
///
/// # Filter standard input
/// cat notes.md | cjk-autojoin
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let pipeline = default_pipeline();

    if cli.list_stages {
        for (name, priority) in pipeline.stages() {
            println!("{name} {priority}");
        }
        return Ok(());
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", process_text(&pipeline, &input));
        return Ok(());
    }

    let results: Vec<anyhow::Result<String>> = cli
        .files
        .par_iter()
        .map(|path| handle_file(&pipeline, path, cli.in_place))
        .collect();

    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(text) => print!("{text}"),
            Err(err) => errors.push(err),
        }
    }

    let mut errors = errors.into_iter();
    let Some(first) = errors.next() else {
        return Ok(());
    };
    for err in errors {
        eprintln!("Error: {err:#}");
    }
    Err(first)
}
