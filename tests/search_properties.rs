//! Properties of the rules and the minimax search over many positions

mod common;

use minimax_tictactoe::{
    Board, Cell, GameOutcome, Mark, Minimax, choose_machine_move, evaluate,
    search::{HUMAN_WIN, TIE},
    tictactoe::WINNING_LINES,
};
use rand::{SeedableRng, rngs::StdRng};

use common::random_board;

/// Every assignment of the 9 cells to the two marks (full boards)
fn full_boards() -> impl Iterator<Item = Board> {
    (0u32..512).map(|bits| {
        let mut board = Board::new();
        for pos in 0..9 {
            board.cells[pos] = if bits & (1 << pos) != 0 {
                Cell::Human
            } else {
                Cell::Machine
            };
        }
        board
    })
}

mod rules {
    use super::*;

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in WINNING_LINES {
            for mark in [Mark::Human, Mark::Machine] {
                let mut board = Board::new();
                for pos in line {
                    board.place(pos, mark).unwrap();
                }
                assert!(board.is_winning(mark), "{line:?} for {mark:?}");
                assert!(!board.is_winning(mark.opponent()));
                assert!(GameOutcome::of(&board).is_terminal());
            }
        }
    }

    #[test]
    fn test_full_boards_are_wins_or_ties() {
        for board in full_boards() {
            assert!(board.is_tie());
            let human = board.is_winning(Mark::Human);
            let machine = board.is_winning(Mark::Machine);
            let outcome = GameOutcome::of(&board);
            match (human, machine) {
                (false, false) => assert_eq!(outcome, GameOutcome::Tie),
                (true, _) => assert_eq!(outcome, GameOutcome::HumanWins),
                (false, true) => assert_eq!(outcome, GameOutcome::MachineWins),
            }
        }
    }

    #[test]
    fn test_some_full_boards_have_no_line() {
        let ties = full_boards()
            .filter(|b| !b.is_winning(Mark::Human) && !b.is_winning(Mark::Machine))
            .count();
        assert!(ties > 0);
    }

    #[test]
    fn test_partial_board_is_not_a_tie() {
        let mut rng = StdRng::seed_from_u64(7);
        for plies in 0..9 {
            let (board, _) = random_board(&mut rng, plies);
            if board.occupied_count() < 9 {
                assert!(!board.is_tie());
            }
        }
    }
}

mod search {
    use super::*;

    #[test]
    fn test_empty_board_evaluates_to_tie() {
        let mut board = Board::new();
        assert_eq!(evaluate(&mut board, true), TIE);
    }

    #[test]
    fn test_evaluate_restores_board() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..60 {
            let (mut board, turn) = random_board(&mut rng, round % 8);
            let before = board;
            evaluate(&mut board, turn == Mark::Machine);
            assert_eq!(board, before, "evaluate changed {}", before.encode());
        }
    }

    #[test]
    fn test_choose_changes_exactly_one_empty_cell() {
        let mut rng = StdRng::seed_from_u64(1234);
        for round in 0..60 {
            let (mut board, _) = random_board(&mut rng, round % 8);
            if GameOutcome::of(&board).is_terminal() {
                continue;
            }
            let before = board;
            let pos = choose_machine_move(&mut board).unwrap();

            assert_eq!(before.get(pos), Cell::Empty);
            assert_eq!(board.get(pos), Cell::Machine);
            for other in (0..9).filter(|&p| p != pos) {
                assert_eq!(board.get(other), before.get(other));
            }
        }
    }

    #[test]
    fn test_never_picks_a_losing_move_when_avoidable() {
        let mut rng = StdRng::seed_from_u64(99);
        for round in 0..80 {
            let (board, _) = random_board(&mut rng, round % 8);
            if GameOutcome::of(&board).is_terminal() {
                continue;
            }

            let mut scratch = board;
            let moves = Minimax::new().score_moves(&mut scratch);
            let best = moves.iter().map(|&(_, e)| e.score).max().unwrap();

            let mut played = board;
            let pos = choose_machine_move(&mut played).unwrap();
            let chosen = moves.iter().find(|&&(p, _)| p == pos).unwrap().1.score;

            assert_eq!(chosen, best, "suboptimal move {pos} on {}", board.encode());
            if best >= TIE {
                assert_ne!(chosen, HUMAN_WIN);
            }
            assert_eq!(evaluate(&mut played, false), best);
        }
    }

    #[test]
    fn test_scores_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for round in 0..40 {
            let (mut board, turn) = random_board(&mut rng, round % 9);
            let score = evaluate(&mut board, turn == Mark::Machine);
            assert!((-1..=1).contains(&score));
        }
    }

    #[test]
    fn test_machine_first_opens_center() {
        let mut board = Board::new();
        assert_eq!(choose_machine_move(&mut board).unwrap(), 4);
    }

    #[test]
    fn test_blocks_two_in_a_row() {
        for (board, block) in [
            ("XX.......", 2),
            ("XX..O....", 2),
            ("X.OX.....", 6),
            (".O..X...X", 0),
            ("O...X.X..", 2),
            (".X..X.O..", 7),
        ] {
            let mut board = Board::from_string(board).unwrap();
            assert_eq!(choose_machine_move(&mut board).unwrap(), block);
        }
    }
}
