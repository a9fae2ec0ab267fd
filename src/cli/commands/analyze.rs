//! Analyze command - minimax scores for every machine move on a board

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{describe_score, print_kv, print_section},
    search::Minimax,
    tictactoe::{Board, Coordinate, GameOutcome, LineAnalyzer},
};

#[derive(Parser, Debug)]
#[command(about = "Show how the computer scores each move on a board")]
pub struct AnalyzeArgs {
    /// Board as 9 cells, row by row: X = human, O = computer, . = empty
    /// (whitespace and '|' are ignored), e.g. "XX..O...."
    pub board: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// One candidate machine move
#[derive(Debug, Clone, Serialize)]
pub struct MoveAnalysis {
    pub position: usize,
    pub row: usize,
    pub col: usize,
    pub score: i32,
    pub plies: u32,
}

/// Complete analysis of a board with the machine to move
#[derive(Debug, Clone, Serialize)]
pub struct BoardAnalysis {
    pub board: String,
    pub outcome: GameOutcome,
    pub winning_line: Option<[usize; 3]>,
    pub moves: Vec<MoveAnalysis>,
    pub chosen: Option<usize>,
    pub nodes: u64,
}

/// Analyze a board with the machine to move
pub fn analyze_board(board: &Board) -> Result<BoardAnalysis> {
    let outcome = GameOutcome::of(board);
    let winning_line = outcome
        .winner()
        .and_then(|mark| LineAnalyzer::completed_line(&board.cells, mark));

    let mut search = Minimax::new();
    let mut scratch = *board;
    let mut moves = Vec::new();
    let mut chosen = None;

    if !outcome.is_terminal() {
        for (position, evaluation) in search.score_moves(&mut scratch) {
            let coord = Coordinate::from_index(position)?;
            moves.push(MoveAnalysis {
                position,
                row: coord.row,
                col: coord.col,
                score: evaluation.score,
                plies: evaluation.plies,
            });
        }
        chosen = Some(search.choose_machine_move(&mut scratch)?);
    }

    Ok(BoardAnalysis {
        board: board.encode(),
        outcome,
        winning_line,
        moves,
        chosen,
        nodes: search.nodes_visited(),
    })
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let analysis = analyze_board(&board)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section("Board");
    println!("{board}");
    print_kv("Outcome", &analysis.outcome.to_string());
    if let Some(line) = analysis.winning_line {
        print_kv("Winning line", &format!("{line:?}"));
    }

    if analysis.moves.is_empty() {
        println!("\n  (board is finished, no moves to score)");
        return Ok(());
    }

    print_section("Computer moves (row col)");
    for m in &analysis.moves {
        print_kv(
            &format!("{} {}", m.row, m.col),
            &format!("{:+} {} in {} plies", m.score, describe_score(m.score), m.plies),
        );
    }

    if let Some(position) = analysis.chosen {
        let coord = Coordinate::from_index(position)?;
        println!();
        print_kv("Chosen move", &format!("{coord} (cell {position})"));
    }
    print_kv("Nodes searched", &analysis.nodes.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_board() {
        let analysis = analyze_board(&Board::new()).unwrap();
        assert_eq!(analysis.outcome, GameOutcome::InProgress);
        assert_eq!(analysis.moves.len(), 9);
        assert!(analysis.moves.iter().all(|m| m.score == 0));
        assert_eq!(analysis.chosen, Some(4));
        assert!(analysis.nodes > 0);
    }

    #[test]
    fn test_analyze_finished_board() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        let analysis = analyze_board(&board).unwrap();
        assert_eq!(analysis.outcome, GameOutcome::HumanWins);
        assert_eq!(analysis.winning_line, Some([0, 1, 2]));
        assert!(analysis.moves.is_empty());
        assert_eq!(analysis.chosen, None);
    }

    #[test]
    fn test_analyze_does_not_touch_input() {
        let board = Board::from_string("XX..O....").unwrap();
        let analysis = analyze_board(&board).unwrap();
        assert_eq!(board.encode(), "XX..O....");
        assert_eq!(analysis.chosen, Some(2));
        let blocking = analysis.moves.iter().find(|m| m.position == 2).unwrap();
        assert_eq!((blocking.row, blocking.col, blocking.score), (1, 3, 0));
    }

    #[test]
    fn test_analysis_serializes() {
        let analysis = analyze_board(&Board::from_string("XX..O....").unwrap()).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["board"], "XX..O....");
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["chosen"], 2);
    }
}
