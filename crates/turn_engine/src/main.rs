use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use minimax_engine::{EngineConfig, MinimaxEngine};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod session;

use session::{Reply, Session};

#[derive(Parser, Debug)]
#[command(name = "turn_engine", version, about = "Answers each position with one move", long_about = None)]
struct Args {
    /// Engine settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = load_config(args.config)?;
    info!(?config, "engine ready");
    let mut session = Session::new(MinimaxEngine::new(config));

    // Protocol output goes to stdout, logs to stderr.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match session.handle(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Lines(lines)) => {
                for out in lines {
                    writeln!(stdout, "{out}")?;
                }
                stdout.flush()?;
            }
            Err(err) => error!("{err:#}"),
        }
    }
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) if path.exists() => EngineConfig::load(&path)
            .with_context(|| format!("loading {}", path.display())),
        Some(path) => {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(EngineConfig::default())
        }
        None => Ok(EngineConfig::default()),
    }
}
