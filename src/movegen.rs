//! Moves and legal-move enumeration.
//!
//! Enumeration pairs every corner of every symmetry-distinct orientation of
//! every piece in hand with every open corner of the mover. A compatible pair
//! fixes the translation; the translated cells then go through the same
//! geometric check [`GameState::apply_move`] uses.

use std::collections::HashSet;
use std::ops::ControlFlow;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::game::GameState;
use crate::kind::PieceKind;
use crate::orientation::Orientation;
use crate::piece::templates;

/// A turn's action.
///
/// JSON form: `{"type":"pass"}` or
/// `{"type":"place","pieceName":"L4","orientation":6,"anchorX":3,"anchorY":0}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    Pass,
    Place {
        #[serde(rename = "pieceName")]
        kind: PieceKind,
        orientation: Orientation,
        /// Bounding-box minimum of the placed cells.
        #[serde(rename = "anchorX")]
        x: i32,
        #[serde(rename = "anchorY")]
        y: i32,
    },
}

impl Move {
    #[inline]
    pub fn place(kind: PieceKind, orientation: Orientation, anchor: Coord) -> Move {
        Move::Place {
            kind,
            orientation,
            x: anchor.x,
            y: anchor.y,
        }
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Move::Pass => None,
            Move::Place { kind, .. } => Some(kind),
        }
    }

    pub fn anchor(self) -> Option<Coord> {
        match self {
            Move::Pass => None,
            Move::Place { x, y, .. } => Some(Coord::new(x, y)),
        }
    }
}

/// Walk every legal placement of `kind` for the player to move.
fn visit_kind<F>(state: &GameState, kind: PieceKind, f: &mut F) -> ControlFlow<()>
where
    F: FnMut(Move) -> ControlFlow<()>,
{
    let mover = state.turn();
    let open = state.open_corners(mover);
    for template in templates(kind) {
        for &piece_corner in template.corners() {
            for &open_corner in open {
                if !piece_corner.is_compatible(open_corner) {
                    continue;
                }
                // Templates are anchored at the origin, so the offset is the anchor.
                let offset = piece_corner.offset_to(open_corner);
                let cells = template.shape().iter().map(move |&c| c + offset);
                if state.check_cells(cells, mover).is_ok() {
                    f(Move::place(kind, template.orientation(), offset))?;
                }
            }
        }
    }
    ControlFlow::Continue(())
}

fn visit<F>(state: &GameState, mut f: F) -> ControlFlow<()>
where
    F: FnMut(Move) -> ControlFlow<()>,
{
    let mover = state.turn();
    if state.open_corners(mover).is_empty() {
        return ControlFlow::Continue(());
    }
    for kind in state.hand(mover).iter() {
        visit_kind(state, kind, &mut f)?;
    }
    ControlFlow::Continue(())
}

/// Every legal placement for the player to move, without duplicates.
///
/// Order follows the hand (largest piece first), then orientation, then
/// piece corner, then open corner. Empty for a finished game. Passing is
/// always allowed and never listed.
pub fn list_moves(state: &GameState) -> Vec<Move> {
    if state.is_terminal() {
        return Vec::new();
    }
    let mut seen = HashSet::new();
    let mut moves = Vec::new();
    let _ = visit(state, |mov| {
        if seen.insert(mov) {
            moves.push(mov);
        }
        ControlFlow::Continue(())
    });
    trace!("{:?} has {} legal placements", state.turn(), moves.len());
    moves
}

/// True when the player to move has at least one legal placement.
pub fn can_move(state: &GameState) -> bool {
    !state.is_terminal() && visit(state, |_| ControlFlow::Break(())).is_break()
}

/// [`list_moves`] with one rayon task per piece kind. Same moves, same order.
#[cfg(feature = "parallel")]
pub fn list_moves_par(state: &GameState) -> Vec<Move> {
    use rayon::prelude::*;

    if state.is_terminal() || state.open_corners(state.turn()).is_empty() {
        return Vec::new();
    }
    let kinds: Vec<PieceKind> = state.hand(state.turn()).iter().collect();
    let per_kind: Vec<Vec<Move>> = kinds
        .into_par_iter()
        .map(|kind| {
            let mut seen = HashSet::new();
            let mut moves = Vec::new();
            let _ = visit_kind(state, kind, &mut |mov| {
                if seen.insert(mov) {
                    moves.push(mov);
                }
                ControlFlow::Continue(())
            });
            moves
        })
        .collect();
    per_kind.into_iter().flatten().collect()
}

impl GameState {
    /// See [`list_moves`].
    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        list_moves(self)
    }

    /// See [`can_move`].
    #[inline]
    pub fn can_move(&self) -> bool {
        can_move(self)
    }
}
