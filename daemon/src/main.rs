//! permchain simulator: runs a scripted scenario against a fresh ledger.

mod config;
mod scenario;

use anyhow::Context;
use clap::Parser;
use config::SimConfig;
use permchain_ledger::Ledger;
use permchain_utils::{format_elapsed, init_logging, LogFormat};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "permchain-sim", about = "Permissioned ledger consensus simulator")]
struct Cli {
    /// Path to a TOML scenario file. If provided, file settings are used as
    /// the base; CLI flags and env vars override them.
    #[arg(long, env = "PERMCHAIN_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for voter randomness, for reproducible runs.
    #[arg(long, env = "PERMCHAIN_SEED")]
    seed: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "PERMCHAIN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "PERMCHAIN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the scenario and print a JSON report.
    Run,
    /// Print the effective configuration as TOML.
    PrintConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    match cli.command {
        Command::PrintConfig => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        Command::Run => run(&config),
    }
}

fn run(config: &SimConfig) -> anyhow::Result<()> {
    init_logging(config.log_format, &config.log_level);

    let mut ledger = match config.seed {
        Some(seed) => Ledger::seeded(config.params.clone(), seed),
        None => Ledger::new(config.params.clone()),
    }
    .context("creating ledger")?;

    tracing::info!(
        participants = config.participants.len(),
        steps = config.steps.len(),
        seed = ?config.seed,
        policy = ?config.params.approval_policy,
        "starting scenario"
    );

    let started = Instant::now();
    let report = scenario::run(config, &mut ledger)?;
    tracing::info!(
        elapsed = %format_elapsed(started.elapsed()),
        admitted = report.admitted,
        rejected = report.rejected,
        "scenario finished"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    if !report.integrity_ok {
        anyhow::bail!("ledger failed its integrity check");
    }
    Ok(())
}
