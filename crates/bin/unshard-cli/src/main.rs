use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "unshard")]
#[command(about = "recover shamir-split secrets from json share batches", long_about = None)]
struct Args {
    /// path to the json batch document
    input: PathBuf,

    /// threshold to assume for cases whose keys record omits k
    #[arg(long, default_value_t = 3)]
    default_threshold: usize,

    /// also print each secret in hexadecimal
    #[arg(long)]
    hex: bool,
}

fn main() -> Result<ExitCode> {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unshard=info".into()),
        )
        .init();

    let args = Args::parse();
    debug!("reading {}", args.input.display());

    let doc = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let outcomes = unshard::solve_batch(&doc, Some(args.default_threshold))
        .context("parsing batch document")?;
    info!("processing {} case(s)", outcomes.len());

    let mut failures = 0usize;
    for (idx, outcome) in outcomes.iter().enumerate() {
        let n = idx + 1;
        match outcome {
            Ok(secret) => {
                if args.hex {
                    println!("Test case {n}: C = {secret} (hex: {secret:x})");
                } else {
                    println!("Test case {n}: C = {secret}");
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("Test case {n}: failed: {e}");
            }
        }
    }

    if failures > 0 {
        info!("{failures} case(s) failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
