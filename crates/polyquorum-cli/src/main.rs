//! Polyquorum CLI — reconstruct a shared secret from a JSON share document.
//!
//! # Usage
//!
//! ```bash
//! polyquorum shares.json
//! polyquorum --log-level debug shares.json
//! ```
//!
//! The reconstructed secret is printed on stdout; diagnostics (skipped
//! records, vote details) go to the log.

use anyhow::{Context, Result};
use polyquorum_core::reconstruct_secret;
use polyquorum_resolver::ShareDocument;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Parse CLI args (minimal — no clap dependency needed)
    let args: Vec<String> = std::env::args().collect();

    let mut input_path: Option<PathBuf> = None;
    let mut log_level = String::from("info");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--log-level" | "-l" => {
                i += 1;
                if i < args.len() {
                    log_level = args[i].clone();
                } else {
                    anyhow::bail!("--log-level requires a level argument");
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("polyquorum {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other if other.starts_with('-') => {
                anyhow::bail!("Unknown argument: {}", other);
            }
            path => {
                if input_path.is_some() {
                    anyhow::bail!("Only one share document may be given");
                }
                input_path = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    // Init logger (RUST_LOG in the environment wins over --log-level)
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &log_level);
    }
    env_logger::init();

    let input_path =
        input_path.ok_or_else(|| anyhow::anyhow!("Missing share document path (see --help)"))?;

    let doc = ShareDocument::from_file(&input_path)
        .with_context(|| format!("Failed to load share document {}", input_path.display()))?;
    log::info!(
        "Loaded document: n = {}, k = {}, {} record(s)",
        doc.n,
        doc.k,
        doc.shares.len()
    );

    let shares = doc.resolve();
    log::info!("{} share(s) resolved", shares.len());

    let secret = reconstruct_secret(&shares, doc.k).context("Reconstruction failed")?;
    println!("{}", secret);

    Ok(())
}

fn print_help() {
    println!(
        r#"polyquorum — reconstruct a shared secret from possibly corrupted shares

USAGE:
    polyquorum [OPTIONS] <SHARES_FILE>

ARGS:
    <SHARES_FILE>    JSON document: {{"n": .., "k": .., "shares": {{"<x>": "<expr>"}}}}

OPTIONS:
    -l, --log-level <LEVEL>    Log level: error, warn, info, debug, trace [default: info]
    -h, --help                 Print this help
    -V, --version              Print version
"#
    );
}
