use anyhow::Context;
use clap::Parser;
use vibelook::cli::{Cli, Command};
use vibelook::{commands, config, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config =
        config::resolve_config(cli.config.as_deref(), cli.favorites.clone(), cli.log_level.clone())
            .into_result()
            .map_err(vibelook::AppError::Config)?;

    logger::setup_logger(app_config.logging()).context("Failed to initialize logger")?;
    log::info!("Starting vibelook {}", env!("CARGO_PKG_VERSION"));

    let command = cli.command.unwrap_or(Command::Session);
    commands::run(command, &app_config).await?;

    log::info!("Exiting vibelook");
    Ok(())
}
