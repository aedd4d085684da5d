//! TutorLens - Entry Point

use clap::Parser;
use tutorlens::cli::{Cli, execute};
use tutorlens_infrastructure::ConfigLoader;
use tutorlens_infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let output = execute(&cli, config).await?;
    println!("{output}");
    Ok(())
}
