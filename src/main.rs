use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};

use pgp_key_extractor_bridge_lib::{
    commands,
    config::{AppConfig, CONFIG_FILE_NAME},
    logging::ConsoleLogger,
    state::AppState,
};

#[derive(Parser)]
#[command(name = "pgp-key-extractor-bridge")]
#[command(about = "Validates and prints the BLE identifiers of the PGP Key Extractor")]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the validated identity registry
    Show,
    /// Validate the configured identifiers and list every invalid one
    Check,
    /// Write a default configuration file
    InitConfig { path: PathBuf },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if let Command::InitConfig { path } = &cli.command {
        setup_logging(&AppConfig::default());
        commands::init_config(path).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = AppConfig::load_config(&cli.config).await?;
    setup_logging(&config);
    info!("Using configuration at {:?}", cli.config);

    match cli.command {
        Command::Show => {
            let state = AppState::from_config(config)?;
            println!("{}", commands::show_identity(&state)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let failures = commands::check_config(&config);
            if failures.is_empty() {
                println!("All identifiers are valid.");
                return Ok(ExitCode::SUCCESS);
            }
            for failure in &failures {
                println!("invalid {}: {}", failure.role, failure.reason);
            }
            Ok(ExitCode::FAILURE)
        }
        Command::InitConfig { .. } => Ok(ExitCode::SUCCESS),
    }
}

fn setup_logging(config: &AppConfig) {
    let level = config.logging.level_filter();
    if ConsoleLogger::init(level, config.logging.json).is_err() {
        // Only fall back to env_logger if the console logger could not be installed
        let _ = env_logger::builder().filter_level(level).try_init();
    }
}
