//! Hex against a flat Monte Carlo opponent.
//!
//! ## Usage
//!
//! - `hex-mc` - Play against the computer (prompts for size and side)
//! - `hex-mc play --size 7 --side blue` - Same, skipping the prompts
//! - `hex-mc demo --size 5` - Watch the computer play itself

use std::io::{self, BufWriter, Write};
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use hex_mc::board::Player;
use hex_mc::constants::{DEFAULT_TIME_SECS, DEFAULT_TRIALS, MAX_SIZE, MIN_SIZE};
use hex_mc::evaluator::{EvaluatorConfig, MonteCarloEvaluator};
use hex_mc::game::{Game, prompt_side, prompt_size, self_play};

/// Hex with a Monte Carlo computer opponent
#[derive(Parser)]
#[command(name = "hex-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "info", "hex_mc=debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play {
        /// Board size; prompted for when omitted
        #[arg(long, value_parser = clap::value_parser!(u16).range(MIN_SIZE as i64..=MAX_SIZE as i64))]
        size: Option<u16>,
        /// Your side; prompted for when omitted
        #[arg(long, value_enum)]
        side: Option<Side>,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Let the computer play both sides
    Demo {
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(MIN_SIZE as i64..=MAX_SIZE as i64))]
        size: u16,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args, Clone)]
struct EngineArgs {
    /// Random rollouts per candidate move
    #[arg(long, default_value_t = DEFAULT_TRIALS, value_parser = clap::value_parser!(u32).range(1..))]
    trials: u32,
    /// Thinking time budget per move, in seconds
    #[arg(long, default_value_t = DEFAULT_TIME_SECS)]
    time: u64,
    /// Seed for reproducible play
    #[arg(long)]
    seed: Option<u64>,
}

impl EngineArgs {
    fn evaluator(&self) -> MonteCarloEvaluator {
        let mut config = EvaluatorConfig::new(self.trials, Duration::from_secs(self.time));
        config.seed = self.seed;
        MonteCarloEvaluator::new(config)
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Side {
    Blue,
    Red,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Blue => Player::Blue,
            Side::Red => Player::Red,
        }
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(io::stdout().lock());

    match cli.command {
        Some(Commands::Play { size, side, engine }) => {
            play(&mut input, &mut out, size, side, &engine)?;
        }
        Some(Commands::Demo { size, engine }) => {
            let mut ai = engine.evaluator();
            let config = ai.config();
            info!(size, trials = config.max_trials, budget = ?config.time_budget, "running demo");
            self_play(size.into(), &mut ai, &mut out)?;
        }
        None => {
            let engine = EngineArgs {
                trials: DEFAULT_TRIALS,
                time: DEFAULT_TIME_SECS,
                seed: None,
            };
            play(&mut input, &mut out, None, None, &engine)?;
        }
    }

    writeln!(out, "Game over!")?;
    out.flush()?;
    Ok(())
}

fn play(
    input: &mut impl io::BufRead,
    out: &mut impl Write,
    size: Option<u16>,
    side: Option<Side>,
    engine: &EngineArgs,
) -> Result<()> {
    writeln!(out, "Welcome to Hex!")?;
    writeln!(out, "Blue joins the left and right edges, Red joins top and bottom.")?;

    let size = match size {
        Some(s) => s.into(),
        None => prompt_size(input, out)?,
    };
    let human = match side {
        Some(s) => s.into(),
        None => prompt_side(input, out)?,
    };

    let mut game = Game::new(size, human, engine.evaluator());
    game.run(input, out)?;
    Ok(())
}
