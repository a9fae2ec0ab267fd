//! CLI infrastructure for the tic-tac-toe game
//!
//! Command arguments and their implementations live under `commands`; the
//! binary in `src/bin/tictactoe.rs` only parses and dispatches.

pub mod commands;
pub mod output;
