//! Главный исполняемый файл shardsql

use clap::Parser;
use shardsql::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    env_logger::Builder::new()
        .parse_filters(&config.logging.level)
        .init();
    log::debug!("Effective dialect: {}", config.dialect);

    let output = cli.execute(&config)?;
    println!("{}", output.trim_end());
    Ok(())
}
