//! Frontend port - display, human input and replay prompts
//!
//! This port defines everything the round controller needs from the person at
//! the keyboard. The console game uses [`crate::adapters::TerminalFrontend`];
//! tests plug in scripted implementations.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, SessionSummary},
};

/// Frontend trait - the human side of a session
///
/// # Event Sequence
///
/// 1. For each round:
///    - `on_round_start(round_num, human_first)`
///    - `show_board(board)` once for the empty board
///    - `human_move(board)` on the human's turns, then `show_board(board)`
///      after every move of either side
///    - `announce_outcome(outcome)`
///    - `play_again()`
/// 2. `on_session_end(summary)` - once, after the last round
pub trait Frontend {
    /// Called when a new round starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_round_start(&mut self, _round_num: usize, _human_first: bool) -> Result<()> {
        Ok(())
    }

    /// Render the board. Must not mutate it.
    fn show_board(&mut self, board: &Board) -> Result<()>;

    /// Obtain the human's move and write the human mark into that cell.
    ///
    /// Implementations keep asking until a legal empty cell is chosen and
    /// return its index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InputClosed`] if no further input can be read.
    fn human_move(&mut self, board: &mut Board) -> Result<usize>;

    /// Report the result of a finished round.
    fn announce_outcome(&mut self, outcome: GameOutcome) -> Result<()>;

    /// Ask whether to play another round.
    fn play_again(&mut self) -> Result<bool>;

    /// Called once when the session ends.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_session_end(&mut self, _summary: &SessionSummary) -> Result<()> {
        Ok(())
    }
}
