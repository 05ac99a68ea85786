//! Adaptive number guessing game CLI

use adaptive_guess::GameSettings;
use adaptive_guess::app::run_session;
use adaptive_guess::console::{CancelFlag, LineConsole};
use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::thread;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "adaptive-guess")]
#[command(about = "Number guessing game that adapts its hints to you", long_about = None)]
#[command(version)]
struct Cli {
    /// Player name (prompted for when omitted)
    #[arg(short, long)]
    username: Option<String>,

    /// Directory holding saved profiles
    #[arg(long, default_value = ".")]
    profile_dir: PathBuf,

    /// Guesses per game the hot/cold hint aims for
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    target_guesses: u32,

    /// Hot/cold threshold step size
    #[arg(long, default_value_t = 0.1)]
    learning_rate: f64,

    /// Probability of trying a random hint style
    #[arg(long, default_value_t = 0.1)]
    exploration_rate: f64,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = GameSettings {
        target_guesses: cli.target_guesses,
        learning_rate: cli.learning_rate,
        exploration_rate: cli.exploration_rate,
        profile_dir: cli.profile_dir,
    };
    settings.validate()?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!(?settings, seed = ?cli.seed, "starting session");

    let cancel = CancelFlag::new();
    if let Err(e) = watch_ctrl_c(cancel.clone()) {
        warn!(error = %e, "Ctrl-C will end the process");
    }

    let mut console = LineConsole::new(io::stdin().lock(), io::stdout()).with_cancel(cancel);
    run_session(&mut console, &settings, cli.username, rng)
}

/// Raise `cancel` on every Ctrl-C instead of terminating
fn watch_ctrl_c(cancel: CancelFlag) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(move || {
            runtime.block_on(async {
                while tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                    eprintln!("\n(cancelled, press Enter)");
                }
            });
        })?;
    Ok(())
}

/// Logs go to stderr so they never mix with the game on stdout
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
