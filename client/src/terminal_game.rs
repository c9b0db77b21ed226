use std::io::{self, BufRead, Write};

use common::config::ConfigContentProvider;
use common::games::tictactoe::{
    AI_MARK, GameRound, OPPONENT_MARK, RoundStatus, resolve_ai_move,
};
use common::log;
use rand::Rng;

use crate::move_source::MoveSource;
use crate::scores_store::ScoresStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    NewRound,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "q" | "quit" => Some(Command::Quit),
        "n" | "new" => Some(Command::NewRound),
        other => other.parse().ok().map(Command::Place),
    }
}

pub struct TerminalGame<P: ConfigContentProvider, G: Rng> {
    round: GameRound,
    scores: ScoresStore<P>,
    move_source: Box<dyn MoveSource>,
    rng: G,
}

impl<P: ConfigContentProvider, G: Rng> TerminalGame<P, G> {
    pub fn new(scores: ScoresStore<P>, move_source: Box<dyn MoveSource>, rng: G) -> Self {
        Self {
            round: GameRound::new(),
            scores,
            move_source,
            rng,
        }
    }

    pub fn scores(&self) -> &ScoresStore<P> {
        &self.scores
    }

    /// Plays until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            if self.round.status() == RoundStatus::ComputerTurn {
                self.play_computer_move();
                continue;
            }

            self.render(output)?;

            let Some(line) = lines.next() else {
                break;
            };

            match parse_command(&line?) {
                Some(Command::Quit) => break,
                Some(Command::NewRound) => self.round.reset(),
                Some(Command::Place(index)) => {
                    if let Err(e) = self.round.place_mark(index, OPPONENT_MARK) {
                        writeln!(output, "{}", e)?;
                    } else {
                        self.finish_if_over();
                    }
                }
                None => writeln!(output, "Enter a cell 0-8, n for a new round or q to quit")?,
            }
        }

        Ok(())
    }

    fn play_computer_move(&mut self) {
        let board = *self.round.board();
        let suggestion = self.move_source.next_move(&board);
        let Some(index) = resolve_ai_move(&board, suggestion, &mut self.rng) else {
            return;
        };

        match self.round.place_mark(index, AI_MARK) {
            Ok(_) => self.finish_if_over(),
            Err(e) => log!("Computer move {} rejected: {}", index, e),
        }
    }

    fn finish_if_over(&mut self) {
        let status = self.round.status();
        if status.is_over() {
            self.scores.record(status);
        }
    }

    fn render<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let scores = self.scores.scores();
        writeln!(output)?;
        writeln!(
            output,
            "Computer (X): {}  You (O): {}",
            scores.computer, scores.player
        )?;
        writeln!(output, "{}", self.round.board())?;

        if let Some(index) = self.round.last_move() {
            writeln!(output, "Last move: {}", index)?;
        }

        let status = self.round.status();
        if let Some(line) = self.round.winning_line() {
            writeln!(output, "Winning line: {:?}", line)?;
        }
        writeln!(output, "{}", status.message())?;

        if status.is_over() {
            write!(output, "n = new round, q = quit > ")?;
        } else {
            write!(output, "cell 0-8 > ")?;
        }
        output.flush()
    }
}
