//! specgloss CLI: rationale annotation for requirement documents.
//!
//! Scans Markdown requirement documents and inserts a generated
//! `**Rationale**:` line after every requirement that lacks one.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
