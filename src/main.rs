mod clock;
mod error;
mod record;
mod report;

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::clock::LocalTimeProvider;
use crate::report::ReportGenerator;

const DEFAULT_OUTPUT: &str = "planilha_financeira.csv";

#[derive(Parser)]
#[command(name = "relatorio")]
#[command(about = "Generates a financial report skeleton", long_about = None)]
#[command(version)]
struct Cli {
    /// User name shown in the report title
    #[arg(short, long, env = "RELATORIO_USER")]
    user: String,

    /// Output file, overwritten if it exists
    #[arg(short, long, env = "RELATORIO_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Category names, one report row each
    categories: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let clock = LocalTimeProvider::new().context("time provider unavailable")?;
    let generator = ReportGenerator::new(Rc::new(clock));

    generator
        .generate(&cli.user, &cli.categories, &cli.output)
        .with_context(|| format!("failed to generate {}", cli.output.display()))?;

    Ok(())
}
