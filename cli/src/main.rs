mod config;
mod console;
mod game_runner;
mod mode;

use std::io;

use clap::Parser;
use common::games::SessionRng;
use common::{log, logger};

use config::get_config_manager;
use game_runner::{RunOptions, run};
use mode::PlayerArg;

#[derive(Parser)]
#[command(name = "tic_tac_toe", about = "Tic-Tac-Toe against a friend or an unbeatable AI")]
struct Args {
    /// Game mode to play without showing the menu (1-4)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    mode: Option<u8>,
    /// Seed for the random AI
    #[arg(long)]
    seed: Option<u64>,
    /// Who plays X, overriding the mode
    #[arg(long, value_enum)]
    x: Option<PlayerArg>,
    /// Who plays O, overriding the mode
    #[arg(long, value_enum)]
    o: Option<PlayerArg>,
    /// Play this many games instead of asking to play again
    #[arg(long)]
    games: Option<u32>,
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.verbose);
    log!("Loaded config: {:?}", config);

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Random AI seed: {}", rng.seed());

    let options = RunOptions {
        mode: args.mode.or(config.default_mode),
        x_override: args.x.map(Into::into),
        o_override: args.o.map(Into::into),
        games: args.games,
        ai_vs_ai: config.ai_vs_ai,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = run(&options, &mut stdin.lock(), &mut stdout.lock(), &mut rng)?;
    log!("Session over: {:?}", stats);

    Ok(())
}
