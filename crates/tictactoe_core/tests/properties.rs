//! Property-based tests for the win evaluator and session transitions.

use proptest::prelude::*;
use tictactoe_core::invariants::{InvariantSet, SessionInvariants};
use tictactoe_core::rules::LINES;
use tictactoe_core::{Board, GameSession, Player, Position, Square, evaluate};

// =============================================================================
// Strategies
// =============================================================================

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_square()).prop_map(|squares| {
        let mut board = Board::new();
        for (pos, square) in Position::ALL.into_iter().zip(squares) {
            board.set(pos, square);
        }
        board
    })
}

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// A user interaction: either a cell click or a history click.
#[derive(Debug, Clone)]
enum Action {
    Cell(usize),
    Jump(usize),
}

fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    proptest::collection::vec(
        prop_oneof![
            4 => (0usize..9).prop_map(Action::Cell),
            1 => (0usize..10).prop_map(Action::Jump),
        ],
        0..30,
    )
}

fn run(actions: &[Action]) -> GameSession {
    actions
        .iter()
        .fold(GameSession::new(), |session, action| match action {
            Action::Cell(index) => session.apply_move(*index),
            Action::Jump(step) => session.jump_to(*step),
        })
}

fn line_complete(board: &Board, line: [Position; 3]) -> Option<Player> {
    let player = board.get(line[0]).player()?;
    line.iter()
        .all(|pos| board.get(*pos) == Square::Occupied(player))
        .then_some(player)
}

// =============================================================================
// Win evaluator
// =============================================================================

proptest! {
    /// A completed line is always reported, and the first completed line in
    /// evaluation order is the one returned.
    #[test]
    fn prop_evaluate_returns_first_completed_line(board in arb_board()) {
        let first = LINES
            .into_iter()
            .find_map(|line| line_complete(&board, line).map(|player| (player, line)));

        match (evaluate(&board), first) {
            (Some(found), Some((player, line))) => {
                prop_assert_eq!(found.player, player);
                prop_assert_eq!(found.positions, line);
            }
            (None, None) => {}
            (found, expected) => prop_assert!(false, "{:?} vs {:?}", found, expected),
        }
    }

    /// Filling any single line on an empty board is detected as that line.
    #[test]
    fn prop_single_line_detected(line_idx in 0usize..8, player in arb_player()) {
        let line = LINES[line_idx];
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(player));
        }
        let found = evaluate(&board).expect("line should win");
        prop_assert_eq!(found.player, player);
        prop_assert_eq!(found.positions, line);
    }
}

// =============================================================================
// Session transitions
// =============================================================================

proptest! {
    /// Every reachable session satisfies all session invariants.
    #[test]
    fn prop_reachable_sessions_hold_invariants(actions in arb_actions()) {
        let session = run(&actions);
        prop_assert!(SessionInvariants::check_all(&session).is_ok());
    }

    /// Playing on an occupied cell never changes the session.
    #[test]
    fn prop_occupied_cell_is_noop(actions in arb_actions(), index in 0usize..9) {
        let session = run(&actions);
        let pos = Position::from_index(index).expect("index in range");
        prop_assume!(!session.board().is_empty(pos));
        prop_assert_eq!(session.apply_move(index), session);
    }

    /// Once the displayed board is won, no move changes the session.
    #[test]
    fn prop_won_board_is_final(actions in arb_actions(), index in 0usize..9) {
        let session = run(&actions);
        prop_assume!(session.winner().is_some());
        prop_assert_eq!(session.apply_move(index), session);
    }

    /// Reset always yields the initial session.
    #[test]
    fn prop_reset_is_initial(actions in arb_actions(), toggles in 0usize..3) {
        let session = (0..toggles).fold(run(&actions), |s, _| s.toggle_order());
        prop_assert_eq!(session.reset(), GameSession::new());
    }

    /// Jumping never changes the recorded history.
    #[test]
    fn prop_jump_preserves_history(actions in arb_actions(), step in 0usize..10) {
        let session = run(&actions);
        let jumped = session.jump_to(step);
        prop_assert_eq!(jumped.history(), session.history());
    }
}
