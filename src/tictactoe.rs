//! Tic-Tac-Toe rules: board, winning lines and outcomes

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_CELLS, BOARD_SIDE, Board, Cell, Coordinate, Mark};
pub use game::{GameOutcome, Move, RoundRecord, SessionSummary};
pub use lines::{LineAnalyzer, WINNING_LINES};
