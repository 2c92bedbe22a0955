use anyhow::{Context, Result};
use clap::Parser;
use merchant_guide::NoteProcessor;
use merchant_guide::cli::GuideCli;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub fn main() -> Result<()> {
    let cli = GuideCli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let source = cli.source();
    let notes = source
        .read()
        .with_context(|| format!("Could not read notes from {source}"))?;
    info!(%source, notes = notes.len(), "Read notes");

    let mut processor = NoteProcessor::new(cli.config());
    let report = processor.process(&notes);

    for answer in &report.answers {
        println!("{answer}");
    }
    if cli.show_unknown {
        for unknown in &report.unknown {
            println!("Unknown note: {}", unknown.raw);
        }
    }

    Ok(())
}
