//! Per-player open corners.

use crate::board::Board;
use crate::coord::Corner;

/// Ordered list of corners a player may extend from.
///
/// Order is insertion order; enumeration walks it front to back.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CornerSet {
    corners: Vec<Corner>,
}

impl CornerSet {
    pub fn new() -> CornerSet {
        CornerSet::default()
    }

    /// A set holding only `corner`.
    pub fn seeded(corner: Corner) -> CornerSet {
        CornerSet {
            corners: vec![corner],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Corner> {
        self.corners.iter()
    }

    #[inline]
    pub fn contains(&self, corner: &Corner) -> bool {
        self.corners.contains(corner)
    }

    pub fn push(&mut self, corner: Corner) {
        self.corners.push(corner);
    }

    /// Remove the first occurrence of `corner`; returns whether one was found.
    pub fn remove(&mut self, corner: &Corner) -> bool {
        match self.corners.iter().position(|c| c == corner) {
            Some(i) => {
                self.corners.remove(i);
                true
            }
            None => false,
        }
    }

    /// True when some corner of a placed piece points straight into one of
    /// these open corners, i.e. the piece touches them diagonally.
    pub fn touches(&self, placed: &[Corner]) -> bool {
        placed.iter().any(|corner| self.contains(&corner.mirrored()))
    }

    /// Fold the corners of a freshly placed piece into the set.
    ///
    /// A piece corner whose mirror is open obliterates that open corner.
    /// Every other piece corner with both endpoints on the board opens up.
    pub fn absorb(&mut self, placed: &[Corner], board: &Board) {
        for corner in placed {
            if self.remove(&corner.mirrored()) {
                continue;
            }
            if board.contains(corner.interior) && board.contains(corner.exterior) {
                self.push(*corner);
            }
        }
    }
}

impl<'a> IntoIterator for &'a CornerSet {
    type Item = &'a Corner;
    type IntoIter = std::slice::Iter<'a, Corner>;

    fn into_iter(self) -> Self::IntoIter {
        self.corners.iter()
    }
}
