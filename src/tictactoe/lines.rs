//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a mark has three in a row
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Check if every cell holds a mark
    pub fn is_full(cells: &[Cell; 9]) -> bool {
        cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// The first line completed by `mark`, if any
    pub fn completed_line(cells: &[Cell; 9], mark: Mark) -> Option<[usize; 3]> {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Number of winning lines passing through a cell
    pub fn lines_through(pos: usize) -> usize {
        WINNING_LINES
            .iter()
            .filter(|line| line.contains(&pos))
            .count()
    }
}
