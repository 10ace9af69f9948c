//! A player's remaining pieces.

use std::fmt;

use crate::kind::PieceKind;

/// Set of piece kinds, one bit per kind (bit = `PieceKind::index`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Hand(u32);

impl Hand {
    const FULL_BITS: u32 = (1 << PieceKind::COUNT) - 1;

    /// All 21 kinds.
    pub const fn full() -> Hand {
        Hand(Self::FULL_BITS)
    }

    pub const fn empty() -> Hand {
        Hand(0)
    }

    #[inline]
    pub const fn contains(self, kind: PieceKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    /// Remove `kind`; returns whether it was present.
    #[inline]
    pub fn remove(&mut self, kind: PieceKind) -> bool {
        let present = self.contains(kind);
        self.0 &= !(1 << kind.index());
        present
    }

    #[inline]
    pub fn insert(&mut self, kind: PieceKind) {
        self.0 |= 1 << kind.index();
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Remaining kinds, largest first.
    pub fn iter(self) -> impl Iterator<Item = PieceKind> {
        PieceKind::ALL.into_iter().filter(move |&kind| self.contains(kind))
    }

    /// Total cell count of the remaining kinds.
    pub fn total_size(self) -> usize {
        self.iter().map(PieceKind::size).sum()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::full()
    }
}

impl FromIterator<PieceKind> for Hand {
    fn from_iter<I: IntoIterator<Item = PieceKind>>(iter: I) -> Hand {
        let mut hand = Hand::empty();
        for kind in iter {
            hand.insert(kind);
        }
        hand
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(PieceKind::name).collect();
        f.write_str(&names.join(" "))
    }
}
