//! Common test utilities for the tic-tac-toe test suite.
//!
//! Provides board generators and scripted frontends shared across tests.

#![allow(dead_code)]

use minimax_tictactoe::{
    Board, Mark, Result, evaluate,
    ports::Frontend,
    tictactoe::{GameOutcome, SessionSummary},
};
use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

/// Play random legal moves from an empty board, alternating sides, and stop
/// after `plies` moves or at the first finished position.
///
/// Returns the board and the side to move next.
pub fn random_board(rng: &mut StdRng, plies: usize) -> (Board, Mark) {
    let mut board = Board::new();
    let mut turn = if rng.random_bool(0.5) {
        Mark::Human
    } else {
        Mark::Machine
    };

    for _ in 0..plies {
        if GameOutcome::of(&board).is_terminal() {
            break;
        }
        let empty = board.empty_positions();
        let &pos = empty.choose(rng).expect("non-terminal board has an empty cell");
        board.place(pos, turn).unwrap();
        turn = turn.opponent();
    }

    (board, turn)
}

/// The human's minimax reply: the empty cell with the lowest machine score,
/// earliest index on ties.
pub fn optimal_human_move(board: &Board) -> usize {
    let mut best: Option<(usize, i32)> = None;
    for pos in board.empty_positions() {
        let mut next = *board;
        next.place(pos, Mark::Human).unwrap();
        let score = evaluate(&mut next, true);
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((pos, score));
        }
    }
    best.expect("board has an empty cell").0
}

/// How the scripted human picks moves
pub enum Strategy {
    Optimal,
    Random(StdRng),
}

/// Frontend whose human plays by a strategy and replays a fixed number of times
pub struct StrategyFrontend {
    pub strategy: Strategy,
    pub replays_left: usize,
    pub outcomes: Vec<GameOutcome>,
    pub boards: Vec<Board>,
    pub summary: Option<SessionSummary>,
}

impl StrategyFrontend {
    pub fn new(strategy: Strategy, rounds: usize) -> Self {
        Self {
            strategy,
            replays_left: rounds.saturating_sub(1),
            outcomes: Vec::new(),
            boards: Vec::new(),
            summary: None,
        }
    }
}

impl Frontend for StrategyFrontend {
    fn show_board(&mut self, board: &Board) -> Result<()> {
        self.boards.push(*board);
        Ok(())
    }

    fn human_move(&mut self, board: &mut Board) -> Result<usize> {
        let pos = match &mut self.strategy {
            Strategy::Optimal => optimal_human_move(board),
            Strategy::Random(rng) => {
                let empty = board.empty_positions();
                *empty.choose(rng).expect("human asked to move on a full board")
            }
        };
        board.place(pos, Mark::Human)?;
        Ok(pos)
    }

    fn announce_outcome(&mut self, outcome: GameOutcome) -> Result<()> {
        self.outcomes.push(outcome);
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool> {
        if self.replays_left == 0 {
            return Ok(false);
        }
        self.replays_left -= 1;
        Ok(true)
    }

    fn on_session_end(&mut self, summary: &SessionSummary) -> Result<()> {
        self.summary = Some(*summary);
        Ok(())
    }
}
