use anyhow::Result;
use clap::Parser;
use paperdex_core::{build_and_query, PdfSource};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "paperdex")]
#[command(about = "Rank a PDF corpus against a free-text query with TF-IDF", long_about = None)]
struct Cli {
    /// Corpus root directory (walked recursively)
    #[arg(long, default_value = "./papers")]
    root: PathBuf,
    /// Per-document size ceiling, e.g. 400K or 2M
    #[arg(long, default_value = "400K")]
    max_size: String,
    /// Number of extraction worker threads
    #[arg(long, default_value_t = 4)]
    workers: usize,
    /// Maximum number of ranked results
    #[arg(long, default_value_t = 10)]
    max_results: usize,
    /// Query terms
    #[arg(required = true)]
    query: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    tracing::info!(root = %cli.root.display(), workers = cli.workers, "indexing corpus");
    let hits = build_and_query(
        &PdfSource,
        &cli.root,
        &cli.max_size,
        cli.workers,
        &cli.query,
        cli.max_results,
    )?;

    for hit in &hits {
        println!("{:<60} {:.4}", hit.name, hit.score);
    }
    Ok(())
}
