//! Round controller: human vs. minimax sessions

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    Error, Result,
    ports::Frontend,
    search::Minimax,
    tictactoe::{Board, GameOutcome, Mark, Move, RoundRecord, SessionSummary},
};

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Whether the human opens the first round; flips every round after
    pub human_first: bool,

    /// Stop after this many rounds without asking to replay
    pub max_rounds: Option<usize>,
}

impl PlayConfig {
    /// Set which side opens the first round.
    pub fn with_human_first(mut self, human_first: bool) -> Self {
        self.human_first = human_first;
        self
    }

    /// Limit the number of rounds.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_first: true,
            max_rounds: None,
        }
    }
}

/// Drives rounds between the frontend's human and the minimax machine
pub struct RoundController<F> {
    frontend: F,
    search: Minimax,
    config: PlayConfig,
    history: Vec<RoundRecord>,
}

impl<F: Frontend> RoundController<F> {
    /// Create a new controller
    pub fn new(frontend: F, config: PlayConfig) -> Self {
        Self {
            frontend,
            search: Minimax::new(),
            config,
            history: Vec::new(),
        }
    }

    /// Completed rounds, oldest first
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Total search nodes spent on machine moves
    pub fn nodes_searched(&self) -> u64 {
        self.search.nodes_visited()
    }

    /// Give back the frontend
    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Play rounds until the human declines a replay, the round limit is
    /// reached, or input runs out. The first mover flips between rounds.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut human_first = self.config.human_first;
        let mut round_num = 1;

        loop {
            if self.round_limit_reached(round_num - 1) {
                break;
            }
            let record = match self.play_round(round_num, human_first) {
                Ok(record) => record,
                Err(Error::InputClosed) => {
                    warn!(round_num, "input closed mid-round, ending session");
                    break;
                }
                Err(err) => return Err(err),
            };

            summary.record(record.outcome);
            self.history.push(record);

            if self.round_limit_reached(round_num) {
                break;
            }
            if !self.frontend.play_again()? {
                break;
            }

            human_first = !human_first;
            round_num += 1;
        }

        info!(
            rounds = summary.rounds(),
            human_wins = summary.human_wins,
            machine_wins = summary.machine_wins,
            ties = summary.ties,
            "session finished"
        );
        self.frontend.on_session_end(&summary)?;
        Ok(summary)
    }

    fn round_limit_reached(&self, rounds_played: usize) -> bool {
        self.config
            .max_rounds
            .is_some_and(|max_rounds| rounds_played >= max_rounds)
    }

    /// Play one round on a fresh board, checking for a result after every move.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, round_num: usize, human_first: bool) -> Result<RoundRecord> {
        let mut board = Board::new();
        let mut record = RoundRecord::new(human_first);

        self.frontend.on_round_start(round_num, human_first)?;
        self.frontend.show_board(&board)?;

        let mut turn = if human_first {
            Mark::Human
        } else {
            Mark::Machine
        };

        loop {
            let position = match turn {
                Mark::Human => self.frontend.human_move(&mut board)?,
                Mark::Machine => self.search.choose_machine_move(&mut board)?,
            };
            debug_assert_eq!(board.get(position), turn.to_cell());
            debug_assert_eq!(board.occupied_count(), record.moves.len() + 1);

            record.moves.push(Move {
                position,
                mark: turn,
            });
            self.frontend.show_board(&board)?;

            if board.is_winning(turn) || board.is_tie() {
                break;
            }
            turn = turn.opponent();
        }

        record.outcome = GameOutcome::of(&board);
        info!(outcome = ?record.outcome, moves = record.moves.len(), "round finished");
        self.frontend.announce_outcome(record.outcome)?;
        Ok(record)
    }
}
