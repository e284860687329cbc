//! radb - evaluates relational-algebra queries over CSV-loaded relations.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Relational-algebra query runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing one .csv file per relation
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Query file, one query expression per line
    #[arg(short, long, default_value = "./queries.txt")]
    queries: PathBuf,

    /// Report output file
    #[arg(short, long, default_value = "./output.csv")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let store = radb::store::loader::load_directory(&args.data_dir)
        .with_context(|| format!("failed to load relations from {}", args.data_dir.display()))?;
    println!(
        "Loaded {} relations from {}",
        store.len(),
        args.data_dir.display()
    );

    let (succeeded, failed) =
        radb::report::process_query_file(&store, &args.queries, &args.output)
            .with_context(|| format!("failed to process {}", args.queries.display()))?;

    println!(
        "Wrote {} ({} queries succeeded, {} failed)",
        args.output.display(),
        succeeded,
        failed
    );
    Ok(())
}
