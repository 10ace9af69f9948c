//! The eight rotation/reflection states of a piece and their 3-bit codes.
//!
//! # Code layout
//!
//! ```text
//! Bit 2: axis       (0 = north/south, 1 = west/east)
//! Bit 1: direction  (0 = north/west,  1 = south/east)
//! Bit 0: flipped
//!
//!   0b000 North          0b001 North flipped
//!   0b010 South          0b011 South flipped
//!   0b100 West           0b101 West flipped
//!   0b110 East           0b111 East flipped
//! ```
//!
//! With `R(x, y) = (y, -x)` and `H(x, y) = (-x, y)`, West is `R`, South `R²`,
//! East `R³`, and each flipped state is `H` applied after the unflipped state
//! of the same code with the direction bit adjusted (see [`Orientation::apply`]).

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::{GameError, InvalidOrientation};

const AXIS_BIT: u8 = 0b100;
const DIRECTION_BIT: u8 = 0b010;
const FLIP_BIT: u8 = 0b001;

/// One element of the dihedral group of order 8.
///
/// Which of these are distinct for a given piece depends on its symmetry; the
/// per-piece orbit lives in [`PieceKind::orientations`](crate::PieceKind::orientations).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Orientation {
    North = 0b000,
    NorthFlipped = 0b001,
    South = 0b010,
    SouthFlipped = 0b011,
    West = 0b100,
    WestFlipped = 0b101,
    East = 0b110,
    EastFlipped = 0b111,
}

impl Orientation {
    /// All eight states, indexed by code.
    pub const ALL: [Orientation; 8] = [
        Orientation::North,
        Orientation::NorthFlipped,
        Orientation::South,
        Orientation::SouthFlipped,
        Orientation::West,
        Orientation::WestFlipped,
        Orientation::East,
        Orientation::EastFlipped,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse a wire code, rejecting anything outside 0-7.
    pub fn from_code(code: u8) -> Result<Orientation, GameError> {
        if code > 0b111 {
            return Err(InvalidOrientation::Code(code).into());
        }
        Ok(Self::from_bits(code))
    }

    #[inline]
    const fn from_bits(bits: u8) -> Orientation {
        Self::ALL[(bits & 0b111) as usize]
    }

    #[inline]
    pub const fn is_flipped(self) -> bool {
        self.code() & FLIP_BIT != 0
    }

    #[inline]
    const fn is_horizontal(self) -> bool {
        self.code() & AXIS_BIT != 0
    }

    /// Map a point of the base shape into this orientation.
    #[inline]
    pub const fn apply(self, c: Coord) -> Coord {
        let Coord { x, y } = c;
        match self {
            Orientation::North => Coord::new(x, y),
            Orientation::West => Coord::new(y, -x),
            Orientation::South => Coord::new(-x, -y),
            Orientation::East => Coord::new(-y, x),
            Orientation::NorthFlipped => Coord::new(-x, y),
            Orientation::EastFlipped => Coord::new(-y, -x),
            Orientation::SouthFlipped => Coord::new(x, -y),
            Orientation::WestFlipped => Coord::new(y, x),
        }
    }

    /// State reached after `turns` further quarter turns.
    pub const fn rotated(self, turns: u8) -> Orientation {
        let bits = self.code();
        let next = match turns % 4 {
            0 => bits,
            1 => {
                if self.is_horizontal() {
                    bits ^ (AXIS_BIT | DIRECTION_BIT)
                } else {
                    bits ^ AXIS_BIT
                }
            }
            2 => bits ^ DIRECTION_BIT,
            _ => {
                if self.is_horizontal() {
                    bits ^ AXIS_BIT
                } else {
                    bits ^ (AXIS_BIT | DIRECTION_BIT)
                }
            }
        };
        Self::from_bits(next)
    }

    /// State reached after reflecting over the y axis.
    pub const fn flipped_horizontal(self) -> Orientation {
        let mut bits = self.code() ^ FLIP_BIT;
        if self.is_horizontal() {
            bits ^= DIRECTION_BIT;
        }
        Self::from_bits(bits)
    }

    /// State reached after reflecting over the x axis.
    pub const fn flipped_vertical(self) -> Orientation {
        let mut bits = self.code() ^ FLIP_BIT;
        if !self.is_horizontal() {
            bits ^= DIRECTION_BIT;
        }
        Self::from_bits(bits)
    }
}

impl From<Orientation> for u8 {
    fn from(o: Orientation) -> u8 {
        o.code()
    }
}

impl TryFrom<u8> for Orientation {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Orientation, GameError> {
        Orientation::from_code(code)
    }
}
