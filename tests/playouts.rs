//! Random Playout Testing
//!
//! Plays seeded random games to the end and checks the invariants that must
//! hold after every move:
//! - No two cells of one color share an edge
//! - Owned cells never change
//! - Rejected moves leave the state untouched
//! - Pass counting and termination

use blokus_core::{
    can_move, list_moves, Board, Coord, GameError, GameState, Move, Orientation, PieceKind,
    Player,
};
use rand::prelude::*;
use rand::rngs::StdRng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_no_same_color_edges(board: &Board) {
    for c in board.coords() {
        let Some(owner) = board.get(c) else {
            continue;
        };
        for n in [Coord::new(c.x + 1, c.y), Coord::new(c.x, c.y + 1)] {
            assert_ne!(
                board.get(n),
                Some(owner),
                "{owner:?} touches itself at {c} / {n}\n{board}"
            );
        }
    }
}

fn assert_cells_kept(before: &Board, after: &Board) {
    for (i, (&old, &new)) in before.cells().iter().zip(after.cells()).enumerate() {
        if old != 0 {
            assert_eq!(old, new, "cell {i} changed owner");
        }
    }
}

/// A move that is certainly illegal right now, when one is easy to build.
fn illegal_move(game: &GameState) -> Option<Move> {
    let occupied = game.board().coords().find(|&c| game.board().get(c).is_some())?;
    Some(Move::place(PieceKind::One, Orientation::North, occupied))
}

/// Play one random game. Returns the number of placements made.
fn playout(game: &mut GameState, rng: &mut StdRng) -> usize {
    let mut placements = 0;
    while !game.is_terminal() {
        let moves = list_moves(game);
        assert_eq!(can_move(game), !moves.is_empty());

        if let Some(bad) = illegal_move(game) {
            let before = game.clone();
            assert!(matches!(game.apply_move(bad), Err(GameError::IllegalMove(_))));
            assert_eq!(*game, before);
        }

        let before = game.board().clone();
        let mover = game.turn();
        let passes = game.pass_count();

        if moves.is_empty() {
            game.apply_move(Move::Pass).unwrap();
            assert_eq!(game.pass_count(), passes + 1);
        } else {
            let mov = moves[rng.random_range(0..moves.len())];
            let hand_before = game.hand(mover);
            game.apply_move(mov).unwrap();
            placements += 1;

            let kind = mov.kind().unwrap();
            assert_eq!(game.pass_count(), 0);
            assert_eq!(game.last_played(mover), Some(kind));
            assert!(hand_before.contains(kind));
            assert!(!game.hand(mover).contains(kind));
            assert_eq!(
                game.board().count(mover),
                before.count(mover) + kind.size()
            );
        }

        assert_eq!(game.turn(), mover.next());
        assert_cells_kept(&before, game.board());
        assert_no_same_color_edges(game.board());
    }
    placements
}

#[test]
fn test_random_playouts_full_board() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..3 {
        let mut game = GameState::default();
        let placements = playout(&mut game, &mut rng);

        assert!(placements >= 4, "every player has an opening move");
        assert!(game.is_terminal());
        assert_eq!(game.pass_count(), 4);
        assert!(list_moves(&game).is_empty());
        assert_eq!(game.pass(), Err(GameError::GameOver));
    }
}

#[test]
fn test_random_playouts_small_boards() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(7);

    for size in [1, 2, 3, 5, 8, 11, 14] {
        for _ in 0..4 {
            let mut game = GameState::with_board_size(size).unwrap();
            playout(&mut game, &mut rng);
            assert!(game.is_terminal(), "size {size}");
        }
    }
}

#[test]
fn test_scores_match_hands() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = GameState::with_board_size(14).unwrap();
    playout(&mut game, &mut rng);

    let scores = game.scores();
    for player in Player::ALL {
        let remaining = game.hand(player).total_size() as i32;
        let expected = if game.last_played(player).is_some() {
            -remaining
        } else {
            -remaining - 5
        };
        assert_eq!(scores[player.index()], expected, "{player:?}");
        assert!(scores[player.index()] <= 0);
    }
    let placed: usize = Player::ALL.iter().map(|&p| game.board().count(p)).sum();
    let left: usize = Player::ALL.iter().map(|&p| game.hand(p).total_size()).sum();
    assert_eq!(placed + left, 4 * 89);
}

#[test]
fn test_open_corners_point_at_empty_or_own_cells() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(1234);
    let mut game = GameState::default();

    for _ in 0..24 {
        let moves = list_moves(&game);
        if moves.is_empty() {
            break;
        }
        game.apply_move(moves[rng.random_range(0..moves.len())]).unwrap();

        for player in Player::ALL {
            for corner in game.open_corners(player) {
                // Exteriors stay on the board. Interiors are the player's own
                // cells, or off the board for an untouched start corner.
                assert!(game.board().contains(corner.exterior));
                match game.board().get(corner.interior) {
                    Some(owner) => assert_eq!(owner, player),
                    None => assert!(game.last_played(player).is_none()),
                }
            }
        }
    }
}
