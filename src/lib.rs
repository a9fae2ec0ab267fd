//! Tic-tac-toe against an exhaustive minimax opponent
//!
//! This crate provides:
//! - Board, winning-line and outcome rules for the 3x3 game
//! - A backtracking minimax search that plays perfectly
//! - A round controller that drives human-vs-machine sessions through a
//!   frontend port, with a terminal adapter for the console game

pub mod adapters;
pub mod cli;
pub mod error;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Evaluation, Minimax, choose_machine_move, evaluate};
pub use session::{PlayConfig, RoundController};
pub use tictactoe::{Board, Cell, GameOutcome, Mark};
