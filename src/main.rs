use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use offset_chess::config::{Cli, DEFAULT_LOG_LEVEL, LOG_ENV};
use offset_chess::game_logic::TurnController;
use offset_chess::terminal::run_session;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_LOG_LEVEL)).init();

    let cli = Cli::parse();
    let mut controller = TurnController::new();
    let mut move_log = cli.move_log();
    log::info!("recording moves to {}", move_log.path().display());

    let stdin = io::stdin();
    match run_session(
        &mut controller,
        &mut move_log,
        stdin.lock(),
        &mut io::stdout(),
        cli.session_options(),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
