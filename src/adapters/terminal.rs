//! Terminal frontend over any line reader and writer
//!
//! Generic over `BufRead`/`Write` so the same code drives stdin/stdout in the
//! binary and in-memory buffers in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::trace;

use crate::{
    Error, Result,
    ports::Frontend,
    tictactoe::{Board, Coordinate, GameOutcome, Mark, SessionSummary},
};

/// Interpret a replay answer. Accepts `y`, `yes`, `s` and `sim` in any case.
pub fn wants_replay(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

/// Console implementation of [`Frontend`]
pub struct TerminalFrontend<R, W> {
    reader: R,
    writer: W,
}

impl TerminalFrontend<StdinLock<'static>, Stdout> {
    /// Frontend bound to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the frontend, returning the writer (used to inspect output)
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.writer, "{text}").map_err(|e| Error::io("write to terminal", e))?;
        self.writer
            .flush()
            .map_err(|e| Error::io("flush terminal", e))
    }

    /// Read one line; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become replacement characters, so a garbled
    /// line is rejected by the parser like any other bad entry.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io("read from terminal", e))?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn on_round_start(&mut self, round_num: usize, human_first: bool) -> Result<()> {
        self.say("|----------------------|")?;
        self.say("|   New game started!  |")?;
        self.say("|----------------------|")?;
        let opener = if human_first { "You move" } else { "The computer moves" };
        self.say(format_args!("Round {round_num}. {opener} first.\n"))
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        self.say(board)
    }

    fn human_move(&mut self, board: &mut Board) -> Result<usize> {
        loop {
            self.say(format_args!(
                "\nPlace '{}' on an empty square (row and column, e.g. '1 3' for the first row, third column):",
                Mark::Human
            ))?;
            let line = self.read_line()?.ok_or(Error::InputClosed)?;

            let placed = Coordinate::parse(&line).and_then(|coord| {
                board.place_at(coord, Mark::Human)?;
                Ok(coord)
            });

            match placed {
                Ok(coord) => {
                    trace!(row = coord.row, col = coord.col, "human move accepted");
                    return Ok(coord.index());
                }
                Err(err) if err.is_recoverable_input() => {
                    trace!(input = line.trim(), %err, "human move rejected");
                    self.say(&err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn announce_outcome(&mut self, outcome: GameOutcome) -> Result<()> {
        self.say(outcome)
    }

    fn play_again(&mut self) -> Result<bool> {
        self.say("Play again? (y/n)")?;
        Ok(self.read_line()?.is_some_and(|answer| wants_replay(&answer)))
    }

    fn on_session_end(&mut self, summary: &SessionSummary) -> Result<()> {
        self.say(format_args!("\n{summary}"))
    }
}
