//! The 21 piece kinds: shapes, symmetry classes and corner candidates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::{Coord, Corner, DIAGONAL_STEPS};
use crate::error::GameError;
use crate::orientation::Orientation;
use crate::piece;

/// A polyomino kind. Variant order is largest first, which is also the order
/// hands are iterated in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    F,
    I,
    L,
    N,
    P,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    I4,
    L4,
    N4,
    O,
    T4,
    I3,
    V3,
    Two,
    One,
}

/// Which rigid motions change a piece's footprint.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Symmetry {
    /// A quarter turn yields a different footprint.
    pub distinct_90: bool,
    /// A half turn yields a different footprint.
    pub distinct_180: bool,
    /// The mirror image is not a rotation of the piece.
    pub chiral: bool,
}

impl Symmetry {
    const fn new(distinct_90: bool, distinct_180: bool, chiral: bool) -> Symmetry {
        Symmetry {
            distinct_90,
            distinct_180,
            chiral,
        }
    }

    /// Number of distinct orientations the piece can take.
    pub const fn orbit_size(self) -> usize {
        let turns = match (self.distinct_90, self.distinct_180) {
            (true, true) => 4,
            (true, false) | (false, true) => 2,
            (false, false) => 1,
        };
        if self.chiral {
            turns * 2
        } else {
            turns
        }
    }
}

const fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

const SHAPE_F: [Coord; 5] = [c(0, 0), c(-1, 0), c(-1, 1), c(-2, 1), c(-1, 2)];
const SHAPE_I: [Coord; 5] = [c(0, 0), c(0, 1), c(0, 2), c(0, 3), c(0, 4)];
const SHAPE_L: [Coord; 5] = [c(0, 0), c(0, -1), c(0, -2), c(0, -3), c(1, 0)];
const SHAPE_N: [Coord; 5] = [c(0, 0), c(0, -1), c(0, -2), c(1, -2), c(1, -3)];
const SHAPE_P: [Coord; 5] = [c(0, 0), c(1, 0), c(0, 1), c(1, 1), c(0, 2)];
const SHAPE_T: [Coord; 5] = [c(0, 0), c(1, 0), c(2, 0), c(1, 1), c(1, 2)];
const SHAPE_U: [Coord; 5] = [c(0, 0), c(0, 1), c(1, 1), c(2, 1), c(2, 0)];
const SHAPE_V: [Coord; 5] = [c(0, 0), c(0, -1), c(1, 0), c(0, -2), c(2, 0)];
const SHAPE_W: [Coord; 5] = [c(0, 0), c(-1, 0), c(-1, -1), c(-2, -1), c(-2, -2)];
const SHAPE_X: [Coord; 5] = [c(1, 0), c(0, 1), c(1, 1), c(2, 1), c(1, 2)];
const SHAPE_Y: [Coord; 5] = [c(0, 0), c(0, 1), c(0, 2), c(0, 3), c(-1, 1)];
const SHAPE_Z: [Coord; 5] = [c(0, 0), c(1, 0), c(1, 1), c(1, 2), c(2, 2)];
const SHAPE_I4: [Coord; 4] = [c(0, 0), c(0, 1), c(0, 2), c(0, 3)];
const SHAPE_L4: [Coord; 4] = [c(0, 0), c(1, 0), c(0, -1), c(0, -2)];
const SHAPE_N4: [Coord; 4] = [c(0, 0), c(0, 1), c(-1, 1), c(-1, 2)];
const SHAPE_O: [Coord; 4] = [c(0, 0), c(1, 0), c(0, 1), c(1, 1)];
const SHAPE_T4: [Coord; 4] = [c(0, 0), c(1, 0), c(1, 1), c(2, 0)];
const SHAPE_I3: [Coord; 3] = [c(0, 0), c(0, 1), c(0, 2)];
const SHAPE_V3: [Coord; 3] = [c(0, 0), c(-1, 0), c(-1, -1)];
const SHAPE_TWO: [Coord; 2] = [c(0, 0), c(0, 1)];
const SHAPE_ONE: [Coord; 1] = [c(0, 0)];

impl PieceKind {
    pub const COUNT: usize = 21;

    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::F,
        PieceKind::I,
        PieceKind::L,
        PieceKind::N,
        PieceKind::P,
        PieceKind::T,
        PieceKind::U,
        PieceKind::V,
        PieceKind::W,
        PieceKind::X,
        PieceKind::Y,
        PieceKind::Z,
        PieceKind::I4,
        PieceKind::L4,
        PieceKind::N4,
        PieceKind::O,
        PieceKind::T4,
        PieceKind::I3,
        PieceKind::V3,
        PieceKind::Two,
        PieceKind::One,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<PieceKind> {
        Self::ALL.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::F => "F",
            PieceKind::I => "I",
            PieceKind::L => "L",
            PieceKind::N => "N",
            PieceKind::P => "P",
            PieceKind::T => "T",
            PieceKind::U => "U",
            PieceKind::V => "V",
            PieceKind::W => "W",
            PieceKind::X => "X",
            PieceKind::Y => "Y",
            PieceKind::Z => "Z",
            PieceKind::I4 => "I4",
            PieceKind::L4 => "L4",
            PieceKind::N4 => "N4",
            PieceKind::O => "O",
            PieceKind::T4 => "T4",
            PieceKind::I3 => "I3",
            PieceKind::V3 => "V3",
            PieceKind::Two => "Two",
            PieceKind::One => "One",
        }
    }

    /// Cells in the catalog frame. Not normalized; only self-consistent.
    pub const fn base_shape(self) -> &'static [Coord] {
        match self {
            PieceKind::F => &SHAPE_F,
            PieceKind::I => &SHAPE_I,
            PieceKind::L => &SHAPE_L,
            PieceKind::N => &SHAPE_N,
            PieceKind::P => &SHAPE_P,
            PieceKind::T => &SHAPE_T,
            PieceKind::U => &SHAPE_U,
            PieceKind::V => &SHAPE_V,
            PieceKind::W => &SHAPE_W,
            PieceKind::X => &SHAPE_X,
            PieceKind::Y => &SHAPE_Y,
            PieceKind::Z => &SHAPE_Z,
            PieceKind::I4 => &SHAPE_I4,
            PieceKind::L4 => &SHAPE_L4,
            PieceKind::N4 => &SHAPE_N4,
            PieceKind::O => &SHAPE_O,
            PieceKind::T4 => &SHAPE_T4,
            PieceKind::I3 => &SHAPE_I3,
            PieceKind::V3 => &SHAPE_V3,
            PieceKind::Two => &SHAPE_TWO,
            PieceKind::One => &SHAPE_ONE,
        }
    }

    #[inline]
    pub const fn size(self) -> usize {
        self.base_shape().len()
    }

    pub const fn symmetry(self) -> Symmetry {
        use PieceKind::*;
        match self {
            F | L | N | P | Y | L4 => Symmetry::new(true, true, true),
            T | U | V | W | T4 | V3 => Symmetry::new(true, true, false),
            Z | N4 => Symmetry::new(true, false, true),
            I | I4 | I3 | Two => Symmetry::new(true, false, false),
            X | O | One => Symmetry::new(false, false, false),
        }
    }

    /// Corner candidates of [`base_shape`](Self::base_shape).
    pub fn base_corners(self) -> &'static [Corner] {
        &piece::tables(self).base_corners
    }

    /// The symmetry-distinct orientations, ascending by code.
    pub fn orientations(self) -> &'static [Orientation] {
        &piece::tables(self).orbit
    }

    /// Representative of `orientation`'s class for this kind: the lowest
    /// unflipped code with the same footprint, else the lowest flipped one.
    #[inline]
    pub fn canonical(self, orientation: Orientation) -> Orientation {
        piece::tables(self).canonical[orientation.code() as usize]
    }

    /// Find the orientation whose footprint equals `cells` up to translation.
    pub fn orientation_of(self, cells: &[Coord]) -> Option<Orientation> {
        if cells.len() != self.size() {
            return None;
        }
        let wanted = normalized(cells.iter().copied());
        piece::templates(self)
            .iter()
            .find(|template| normalized(template.shape().iter().copied()) == wanted)
            .map(|template| template.orientation())
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<PieceKind, GameError> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GameError::UnknownPiece(s.to_string()))
    }
}

/// Corner candidates of an arbitrary cell set: every diagonal step out of a
/// cell whose target and both flanking cells are outside the set.
pub fn corner_candidates(cells: &[Coord]) -> Vec<Corner> {
    let occupied = |c: Coord| cells.contains(&c);
    let mut corners = Vec::new();
    for &cell in cells {
        for step in DIAGONAL_STEPS {
            let exterior = cell + step;
            let flank_x = Coord::new(exterior.x, cell.y);
            let flank_y = Coord::new(cell.x, exterior.y);
            if !occupied(exterior) && !occupied(flank_x) && !occupied(flank_y) {
                corners.push(Corner::new(cell, exterior));
            }
        }
    }
    corners
}

/// Component-wise minimum of a cell set; the origin for an empty set.
pub(crate) fn bounding_min(cells: &[Coord]) -> Coord {
    let x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    Coord::new(x, y)
}

/// Translation-free, order-free key for a footprint.
pub(crate) fn normalized(cells: impl IntoIterator<Item = Coord>) -> Vec<Coord> {
    let cells: Vec<Coord> = cells.into_iter().collect();
    let min = bounding_min(&cells);
    let mut out: Vec<Coord> = cells.into_iter().map(|c| c - min).collect();
    out.sort();
    out
}
