use anyhow::{Context, Result};
use clap::Parser;
use secp_bridge::{BridgeConfig, SignatureBridge};
use secp_bridge_cli::{execute, CliArgs, LogLevel};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: LogLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    // stdout carries command output only.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &CliArgs) -> Result<BridgeConfig> {
    match &cli.config {
        Some(path) => BridgeConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(BridgeConfig::default()),
    }
}

fn run(cli: &CliArgs) -> Result<bool> {
    let config = load_config(cli)?;
    debug!(?config, "bridge configuration");
    let bridge = SignatureBridge::new(config);

    let outcome = execute(&cli.command, &bridge)?;
    println!("{}", outcome.output);
    Ok(outcome.success)
}

fn main() -> ExitCode {
    let cli = CliArgs::parse();
    init_tracing(cli.log_level);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
