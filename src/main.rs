use std::process;

use airbyte_registry_seed::{run, Args, FileWriter, HttpFetcher, SeedError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute(&args).await {
        eprintln!("\n❌ Error: {}", e);
        process::exit(1);
    }
}

async fn execute(args: &Args) -> Result<(), SeedError> {
    let fetcher = HttpFetcher::new(args.url.clone(), args.timeout())?;
    let writer = FileWriter::new(&args.output);
    let summary = run(&fetcher, &writer).await?;
    tracing::info!(
        output = %writer.path().display(),
        records = summary.records_written,
        "conversion complete"
    );
    Ok(())
}
