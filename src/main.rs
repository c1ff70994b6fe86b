use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use passbook::account::AccountStore;
use passbook::cli::{ops, Cli};
use passbook::config::PassbookConfig;
use passbook::error::PassbookError;
use passbook::interactive;
use passbook::storage::JsonFileStorage;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging exists; report how it went afterwards.
    let loaded = PassbookConfig::load(&cli.config);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => PassbookConfig::default(),
    };

    let level = cli.log_level.clone().unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)))
        .with_writer(io::stderr)
        .init();

    match loaded {
        Ok(Some(_)) => info!("Config loaded from {}", cli.config.display()),
        Ok(None) => info!("Config file not found at '{}'. Using defaults.", cli.config.display()),
        Err(e) => warn!("{}. Using defaults.", e),
    }

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: PassbookConfig) -> Result<(), PassbookError> {
    let data_file = cli
        .data_file
        .unwrap_or_else(|| PathBuf::from(&config.store.data_file));
    info!("Account data: {}", data_file.display());

    let mut store = AccountStore::open(JsonFileStorage::new(data_file));
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(cmd) => ops::handle_command(&mut store, cmd, &mut stdout),
        None => interactive::run(&mut store, &mut io::stdin().lock(), &mut stdout),
    }
}
