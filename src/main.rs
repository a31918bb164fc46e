use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use tract_density::{run, AppConfig};

const DEFAULT_CONFIG: &str = "config.toml";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file naming the input and output paths; built-in defaults are
    /// used when the default file is absent
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?.relative_to(parent_dir(path)),
        None => {
            let path = Path::new(DEFAULT_CONFIG);
            AppConfig::load_or_default(path)?
        }
    };

    let summary = run(&app_config)?;

    println!(
        "Assessed {} tracts; wrote {:?} and {:?}",
        summary.tracts().len(),
        app_config.output.densities,
        app_config.output.min_max
    );

    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}
