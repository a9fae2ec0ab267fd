//! Exhaustive minimax search for the machine player
//!
//! The search walks the full game tree depth-first on a single borrowed
//! [`Board`], placing a mark, recursing and clearing it again. Scores are
//! from the machine's point of view: `+1` machine win, `-1` human win, `0` tie.
//!
//! Alongside the score the search tracks how many plies optimal play lasts.
//! That length only separates moves whose scores are equal: the winning side
//! prefers the quicker win, the losing side the slower loss. It never changes
//! the score itself.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{BOARD_CELLS, Board, LineAnalyzer, Mark},
};

/// Score of a position the machine wins with best play
pub const MACHINE_WIN: i32 = 1;
/// Score of a position the human wins with best play
pub const HUMAN_WIN: i32 = -1;
/// Score of a position that ends in a tie with best play
pub const TIE: i32 = 0;

/// Minimax value of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// `+1`, `0` or `-1` from the machine's point of view
    pub score: i32,
    /// Plies until the game ends under optimal play (0 for a finished board)
    pub plies: u32,
}

impl Evaluation {
    fn terminal(score: i32) -> Self {
        Evaluation { score, plies: 0 }
    }

    /// Ordering key from the machine's side: larger is better for the machine.
    fn machine_preference(self) -> (i32, i64) {
        let plies = i64::from(self.plies);
        let urgency = match self.score.cmp(&TIE) {
            Ordering::Greater => -plies,
            Ordering::Less => plies,
            Ordering::Equal => 0,
        };
        (self.score, urgency)
    }
}

/// Minimax searcher with a visited-node counter
#[derive(Debug, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes evaluated since creation
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Best achievable score assuming both sides play optimally.
    /// `maximizing` means the machine moves next.
    ///
    /// The board is returned unchanged.
    pub fn evaluate(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.search(board, maximizing).score
    }

    /// Full minimax value, including the length of optimal play.
    ///
    /// Terminal checks run before any expansion, in order: human line,
    /// machine line, full board. Empty cells are tried in ascending index
    /// order and each tentative mark is cleared before the next one is placed.
    pub fn search(&mut self, board: &mut Board, maximizing: bool) -> Evaluation {
        self.nodes += 1;

        if board.is_winning(Mark::Human) {
            return Evaluation::terminal(HUMAN_WIN);
        }
        if board.is_winning(Mark::Machine) {
            return Evaluation::terminal(MACHINE_WIN);
        }
        if board.is_tie() {
            return Evaluation::terminal(TIE);
        }

        let mark = if maximizing { Mark::Machine } else { Mark::Human };
        let mut best: Option<Evaluation> = None;

        for pos in 0..BOARD_CELLS {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, mark);
            let child = self.search(board, !maximizing);
            board.clear(pos);

            let candidate = Evaluation {
                score: child.score,
                plies: child.plies + 1,
            };
            let improves = best.is_none_or(|current| {
                let ord = candidate
                    .machine_preference()
                    .cmp(&current.machine_preference());
                if maximizing {
                    ord == Ordering::Greater
                } else {
                    ord == Ordering::Less
                }
            });
            if improves {
                best = Some(candidate);
            }
        }

        // A non-terminal board always has an empty cell.
        best.unwrap_or(Evaluation::terminal(TIE))
    }

    /// Evaluate every empty cell as a machine move, in ascending index order.
    ///
    /// The board is returned unchanged.
    pub fn score_moves(&mut self, board: &mut Board) -> Vec<(usize, Evaluation)> {
        let mut scored = Vec::with_capacity(BOARD_CELLS - board.occupied_count());
        for pos in 0..BOARD_CELLS {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Mark::Machine);
            let evaluation = self.search(board, false);
            board.clear(pos);
            scored.push((pos, evaluation));
        }
        scored
    }

    /// Pick the machine's move and commit it to the board.
    ///
    /// Candidates are ranked by score, then by game length (win sooner, lose
    /// later), then by the number of winning lines through the cell. A
    /// candidate replaces the current best only when it ranks strictly higher,
    /// so full ties resolve to the lowest index. On an empty board every
    /// opening is a tie of equal length and the center wins on lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the board is full.
    pub fn choose_machine_move(&mut self, board: &mut Board) -> Result<usize> {
        let start = self.nodes;
        let mut best: Option<(usize, Evaluation, ((i32, i64), usize))> = None;

        for (pos, evaluation) in self.score_moves(board) {
            let rank = (
                evaluation.machine_preference(),
                LineAnalyzer::lines_through(pos),
            );
            if best.is_none_or(|(_, _, best_rank)| rank > best_rank) {
                best = Some((pos, evaluation, rank));
            }
        }

        let (pos, evaluation, _) = best.ok_or(Error::NoValidMoves)?;
        board.set(pos, Mark::Machine);

        debug!(
            position = pos,
            score = evaluation.score,
            plies = evaluation.plies,
            nodes = self.nodes - start,
            "machine move chosen"
        );
        Ok(pos)
    }
}

/// Evaluate a position with a fresh searcher
pub fn evaluate(board: &mut Board, maximizing: bool) -> i32 {
    Minimax::new().evaluate(board, maximizing)
}

/// Choose and commit the machine's move with a fresh searcher
pub fn choose_machine_move(board: &mut Board) -> Result<usize> {
    Minimax::new().choose_machine_move(board)
}
