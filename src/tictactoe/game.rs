//! Game outcome and move history

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Mark},
    lines::LineAnalyzer,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

/// Outcome of a board, derived on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    HumanWins,
    MachineWins,
    Tie,
    InProgress,
}

impl GameOutcome {
    /// Classify a board. A win takes precedence over a full board.
    pub fn of(board: &Board) -> Self {
        if board.is_winning(Mark::Human) {
            GameOutcome::HumanWins
        } else if board.is_winning(Mark::Machine) {
            GameOutcome::MachineWins
        } else if board.is_tie() {
            GameOutcome::Tie
        } else {
            GameOutcome::InProgress
        }
    }

    /// Whether the round is over
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// The winning mark, if any
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::HumanWins => Some(Mark::Human),
            GameOutcome::MachineWins => Some(Mark::Machine),
            GameOutcome::Tie | GameOutcome::InProgress => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameOutcome::HumanWins => "You won!",
            GameOutcome::MachineWins => "The computer won, it was inevitable.",
            GameOutcome::Tie => "It's a tie!",
            GameOutcome::InProgress => "Game in progress",
        };
        f.write_str(text)
    }
}

/// A finished (or abandoned) round with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub human_first: bool,
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
}

impl RoundRecord {
    /// Start an empty record
    pub fn new(human_first: bool) -> Self {
        RoundRecord {
            human_first,
            moves: Vec::new(),
            outcome: GameOutcome::InProgress,
        }
    }

    /// Replay the recorded moves onto an empty board
    ///
    /// # Errors
    ///
    /// Returns error if the history contains an illegal move, which indicates
    /// corrupted round data.
    pub fn final_board(&self) -> Result<Board, crate::Error> {
        let mut board = Board::new();
        for m in &self.moves {
            board.place(m.position, m.mark)?;
        }
        Ok(board)
    }

    /// The line that decided the round, if it was won
    pub fn winning_line(&self) -> Result<Option<[usize; 3]>, crate::Error> {
        let Some(mark) = self.outcome.winner() else {
            return Ok(None);
        };
        let board = self.final_board()?;
        Ok(LineAnalyzer::completed_line(&board.cells, mark))
    }
}

/// Running tally over a session of rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub human_wins: usize,
    pub machine_wins: usize,
    pub ties: usize,
}

impl SessionSummary {
    /// Count a finished round
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::HumanWins => self.human_wins += 1,
            GameOutcome::MachineWins => self.machine_wins += 1,
            GameOutcome::Tie => self.ties += 1,
            GameOutcome::InProgress => {}
        }
    }

    /// Number of finished rounds
    pub fn rounds(&self) -> usize {
        self.human_wins + self.machine_wins + self.ties
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rounds: {} | You: {} | Computer: {} | Ties: {}",
            self.rounds(),
            self.human_wins,
            self.machine_wins,
            self.ties
        )
    }
}
