//! Four-player Blokus rules engine: pieces, orientations, legality and move
//! enumeration.
//!
//! # Board Encoding
//!
//! ```text
//! Row-major Vec<u8>, index = y * size + x
//!   0    = empty
//!   1..4 = owned by that player (cells never change owner)
//!
//! Start corners on an N x N board (open corner interior -> exterior):
//!   P1 (-1, -1) -> (0, 0)        P2 (-1, N) -> (0, N-1)
//!   P3 (N, N)   -> (N-1, N-1)    P4 (N, -1) -> (N-1, 0)
//! ```
//!
//! # Orientation Encoding (3-bit)
//!
//! ```text
//! Bit 2: axis       Bit 1: direction       Bit 0: flipped
//!
//!   0 North   (x, y)        1 North flipped  (-x, y)
//!   2 South   (-x, -y)      3 South flipped  (x, -y)
//!   4 West    (y, -x)       5 West flipped   (y, x)
//!   6 East    (-y, x)       7 East flipped   (-y, -x)
//! ```
//!
//! Codes that give the same footprint for a piece collapse to one
//! representative: the lowest unflipped code, else the lowest flipped one.
//! Across the 21 pieces there are 91 distinct orientations.
//!
//! # Move Encoding (JSON)
//!
//! ```text
//! {"type": "pass"}
//! {"type": "place", "pieceName": "F", "orientation": 0..7,
//!  "anchorX": x, "anchorY": y}       anchor = bounding-box minimum
//! ```
//!
//! # Corners
//!
//! A corner is an `(interior, exterior)` pair one diagonal step apart. A piece
//! corner and an open corner match when they point at each other; the piece is
//! then shifted so its interior lands on the open corner's exterior.

pub mod board;
pub mod config;
pub mod coord;
pub mod corners;
pub mod error;
pub mod game;
pub mod hand;
pub mod kind;
pub mod movegen;
pub mod orientation;
pub mod piece;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::{Board, Player};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use coord::{Coord, Corner};
pub use corners::CornerSet;
pub use error::{GameError, IllegalMove, InvalidOrientation};
pub use game::{GameState, PlayerState};
pub use hand::Hand;
pub use kind::{PieceKind, Symmetry};
pub use movegen::{can_move, list_moves, Move};
pub use orientation::Orientation;
pub use piece::Piece;

#[cfg(feature = "parallel")]
pub use movegen::list_moves_par;

/// Start a game on a `board_size` square board.
pub fn new_game(board_size: usize) -> Result<GameState, GameError> {
    GameState::with_board_size(board_size)
}
