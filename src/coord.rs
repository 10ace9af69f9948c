//! Board coordinates and diagonal corner candidates.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Integer cell coordinate. `x` is the column, `y` the row; both grow away
/// from player one's starting corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// Quarter turn: `(x, y) -> (y, -x)`.
    #[inline]
    pub const fn rotated_quarter(self) -> Coord {
        Coord::new(self.y, -self.x)
    }

    /// Reflection over the y axis: `(x, y) -> (-x, y)`.
    #[inline]
    pub const fn mirrored_x(self) -> Coord {
        Coord::new(-self.x, self.y)
    }

    /// Reflection over the x axis: `(x, y) -> (x, -y)`.
    #[inline]
    pub const fn mirrored_y(self) -> Coord {
        Coord::new(self.x, -self.y)
    }

    /// The four edge-sharing neighbours.
    #[inline]
    pub fn neighbors(self) -> [Coord; 4] {
        ORTHOGONAL_STEPS.map(|step| self + step)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// East, south, west, north.
pub const ORTHOGONAL_STEPS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: -1 },
];

/// The four diagonal steps, in the order corner candidates are derived.
pub const DIAGONAL_STEPS: [Coord; 4] = [
    Coord { x: -1, y: -1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: 1, y: 1 },
];

/// A corner candidate: a cell the piece occupies (`interior`) and the
/// diagonally adjacent cell it can reach across that corner (`exterior`).
///
/// An open corner on the board uses the same shape: `interior` is a cell the
/// player already owns (or the off-board seed cell), `exterior` is the empty
/// slot a new piece may occupy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Corner {
    pub interior: Coord,
    pub exterior: Coord,
}

impl Corner {
    #[inline]
    pub fn new(interior: Coord, exterior: Coord) -> Corner {
        debug_assert!(
            DIAGONAL_STEPS.contains(&(exterior - interior)),
            "corner {interior} -> {exterior} is not diagonal"
        );
        Corner { interior, exterior }
    }

    /// Diagonal unit vector from interior to exterior.
    #[inline]
    pub fn direction(self) -> Coord {
        self.exterior - self.interior
    }

    /// Same corner seen from the other side.
    #[inline]
    pub fn mirrored(self) -> Corner {
        Corner {
            interior: self.exterior,
            exterior: self.interior,
        }
    }

    /// True when this piece corner points straight back at `open`.
    #[inline]
    pub fn is_compatible(self, open: Corner) -> bool {
        self.direction() == -open.direction()
    }

    /// Translation that lands this corner's interior on `open.exterior`.
    #[inline]
    pub fn offset_to(self, open: Corner) -> Coord {
        open.exterior - self.interior
    }

    #[inline]
    pub fn translated(self, by: Coord) -> Corner {
        Corner {
            interior: self.interior + by,
            exterior: self.exterior + by,
        }
    }

    /// Apply a linear map to both endpoints.
    #[inline]
    pub fn map(self, f: impl Fn(Coord) -> Coord) -> Corner {
        Corner {
            interior: f(self.interior),
            exterior: f(self.exterior),
        }
    }
}
