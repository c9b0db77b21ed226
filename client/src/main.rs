mod move_source;
mod scores_store;
mod terminal_game;

use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};
use move_source::{HttpMoveSource, MoveSource, OfflineMoveSource};
use terminal_game::TerminalGame;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Server base address, e.g. http://localhost:3000. Plays offline when omitted
    #[arg(long)]
    server: Option<String>,

    /// Where win counters are kept between runs
    #[arg(long)]
    scores: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let move_source: Box<dyn MoveSource> = match args.server {
        Some(ref server) => {
            log!("Asking {} for computer moves", server);
            Box::new(HttpMoveSource::new(server)?)
        }
        None => Box::new(OfflineMoveSource),
    };

    let scores = scores_store::file_scores_store(args.scores);
    let mut game = TerminalGame::new(scores, move_source, rand::rng());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    game.run(stdin.lock(), &mut stdout)?;

    let final_scores = game.scores().scores();
    log!(
        "Final score: computer {}, player {}",
        final_scores.computer,
        final_scores.player
    );

    Ok(())
}
