use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod datasets;

use self::datasets::DatasetId;

/// Convert raw textbook word lists into JSON vocabulary datasets
#[derive(Parser)]
#[command(name = "goi", version, about)]
struct Cli {
    /// Dataset to convert
    #[arg(value_enum, default_value_t = DatasetId::Group30)]
    dataset: DatasetId,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let dataset = cli.dataset.dataset();

    tracing::info!("Converting dataset {}", dataset.name);
    let count = goi_core::convert_dataset(&dataset)
        .with_context(|| format!("converting dataset {}", dataset.name))?;

    println!("Generated {count} words.");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}
