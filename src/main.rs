use std::process::ExitCode;

use columbus::cli::args;
use columbus::io::TerminalIO;
use columbus::services::game::Game;
use columbus::services::session::GameSession;
use columbus::GameEngine;
use tracing::error;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    println!("*** CHRISTOPHER COLUMBUS ADVENTURE ***");
    println!();

    let engine = match GameEngine::new(args.difficulty(), seed) {
        Ok(engine) => engine,
        Err(err) => {
            error!(%err, "could not build the ocean");
            return ExitCode::FAILURE;
        }
    };

    let mut game = Game::new(GameSession::new("session_1", engine), args.json);
    let mut io = TerminalIO;
    let mut output = TerminalIO;
    if let Err(err) = game.run(&mut io, &mut output) {
        error!(%err, "voyage aborted");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
