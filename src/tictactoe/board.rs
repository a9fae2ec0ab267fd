//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the 3x3 board
pub const BOARD_CELLS: usize = 9;

/// Number of rows (and columns) on the board
pub const BOARD_SIDE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Machine,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => Mark::Human.glyph(),
            Cell::Machine => Mark::Machine.glyph(),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | ' ' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Human),
            'O' | 'o' | '0' => Some(Cell::Machine),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Human => Some(Mark::Human),
            Cell::Machine => Some(Mark::Machine),
            Cell::Empty => None,
        }
    }
}

/// A mark placed by one of the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Human,
    Machine,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Human => Mark::Machine,
            Mark::Machine => Mark::Human,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::Human => Cell::Human,
            Mark::Machine => Cell::Machine,
        }
    }

    /// Character shown on the board for this mark
    pub fn glyph(self) -> char {
        match self {
            Mark::Human => 'X',
            Mark::Machine => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A 1-based row/column pair as typed by the human
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Build a coordinate, rejecting rows or columns outside 1-3
    pub fn new(row: i64, col: i64) -> Result<Self, crate::Error> {
        let in_range = |v: i64| (1..=BOARD_SIDE as i64).contains(&v);
        if !in_range(row) || !in_range(col) {
            return Err(crate::Error::CoordinatesOutOfRange { row, col });
        }
        Ok(Coordinate {
            row: row as usize,
            col: col as usize,
        })
    }

    /// Parse a line of the form "row col".
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinates`] unless the line holds exactly
    /// two integers, and [`crate::Error::CoordinatesOutOfRange`] when either is
    /// outside 1-3.
    pub fn parse(line: &str) -> Result<Self, crate::Error> {
        let malformed = || crate::Error::InvalidCoordinates {
            input: line.trim().to_string(),
        };

        let values = line
            .split_whitespace()
            .map(|token| token.parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        match values.as_slice() {
            [row, col] => Self::new(*row, *col),
            _ => Err(malformed()),
        }
    }

    /// Row-major cell index (0-8)
    pub fn index(self) -> usize {
        (self.row - 1) * BOARD_SIDE + (self.col - 1)
    }

    /// Coordinate of a cell index
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        if index >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position: index });
        }
        Ok(Coordinate {
            row: index / BOARD_SIDE + 1,
            col: index % BOARD_SIDE + 1,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// The 9-cell board, row-major.
///
/// The search mutates a single board in place with the crate-private
/// `Board::set` and `Board::clear`, so this type is `Copy` only for snapshots taken by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace and `|` separators are ignored, so both `"XO......."` and
    /// grid-style layouts like `"X|O|.\n.|X|.\n.|.|O"` work. `X` is the human,
    /// `O` the machine, and `.`, `_` or `-` an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 cells remain or if a character is not a cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();

        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Write `mark` into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if `pos` is off the board or already holds a mark.
    pub fn place(&mut self, pos: usize, mark: Mark) -> Result<(), crate::Error> {
        if pos >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.cells[pos] = mark.to_cell();
        Ok(())
    }

    /// Place a mark from a 1-based coordinate, reporting an occupied cell in
    /// the human's terms
    pub fn place_at(&mut self, coord: Coordinate, mark: Mark) -> Result<(), crate::Error> {
        self.place(coord.index(), mark)
            .map_err(|_| crate::Error::CellOccupied {
                row: coord.row,
                col: coord.col,
            })
    }

    /// Reset a cell to empty; used to undo tentative moves
    pub(crate) fn clear(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
    }

    /// Set a cell without checking occupancy; only valid on an empty cell
    pub(crate) fn set(&mut self, pos: usize, mark: Mark) {
        debug_assert!(self.is_empty(pos), "cell {pos} already occupied");
        self.cells[pos] = mark.to_cell();
    }

    /// Check if a mark has three in a row
    pub fn is_winning(&self, mark: Mark) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, mark)
    }

    /// Check if the board is full; a win must be checked first
    pub fn is_tie(&self) -> bool {
        super::lines::LineAnalyzer::is_full(&self.cells)
    }

    /// Get a compact string representation, e.g. `"XO..X...."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    1   2   3")?;
        for row in 0..BOARD_SIDE {
            if row > 0 {
                writeln!(f, "   ---+---+---")?;
            }
            let glyph = |col: usize| {
                self.cells[row * BOARD_SIDE + col]
                    .mark()
                    .map_or(' ', Mark::glyph)
            };
            writeln!(f, "{}   {} | {} | {}", row + 1, glyph(0), glyph(1), glyph(2))?;
        }
        Ok(())
    }
}
