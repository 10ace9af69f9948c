//! Error types for the rules engine.

use thiserror::Error;

use crate::config::MAX_BOARD_SIZE;
use crate::coord::Coord;
use crate::kind::PieceKind;
use crate::orientation::Orientation;

/// Anything the engine can reject.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A placement was refused. State is left untouched.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    /// A transform or orientation code the piece cannot take.
    #[error("invalid orientation: {0}")]
    InvalidOrientation(#[from] InvalidOrientation),

    #[error("board size {0} outside 1..={max}", max = MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    #[error("unknown piece name {0:?}")]
    UnknownPiece(String),

    /// Four consecutive passes already ended the game.
    #[error("game is over")]
    GameOver,
}

/// Why a placement was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("{0} is not in the mover's hand")]
    NotInHand(PieceKind),

    #[error("no open corner touches the placement diagonally")]
    NoCornerContact,

    #[error("cell {0} is off the board")]
    OffBoard(Coord),

    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("cell {0} shares an edge with the mover's own color")]
    EdgeContact(Coord),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidOrientation {
    #[error("orientation code {0} outside 0..=7")]
    Code(u8),

    #[error("{kind} has no distinct rotation by {turns} quarter turns")]
    Rotation { kind: PieceKind, turns: u8 },

    #[error("{0} is not chiral, flipping it is never distinct")]
    Flip(PieceKind),

    #[error("{kind} cannot reach orientation {target:?}")]
    Unreachable { kind: PieceKind, target: Orientation },
}
