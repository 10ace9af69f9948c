//! Piece instances and the per-kind orientation tables.
//!
//! A [`Piece`] is an immutable value: a kind, a canonical orientation, and the
//! transformed (and possibly translated) footprint and corner candidates.
//! Every transform returns a new piece, so enumeration never shares a mutable
//! scratch piece between candidates.

use std::sync::LazyLock;

use crate::coord::{Coord, Corner};
use crate::error::{GameError, InvalidOrientation};
use crate::kind::{bounding_min, corner_candidates, normalized, PieceKind};
use crate::orientation::Orientation;

/// Orientation data derived once per kind from its base shape.
#[derive(Debug)]
pub(crate) struct KindTables {
    pub(crate) base_corners: Vec<Corner>,
    /// Indexed by orientation code.
    pub(crate) canonical: [Orientation; 8],
    pub(crate) orbit: Vec<Orientation>,
    /// One piece per orbit entry, bounding box anchored at the origin.
    pub(crate) templates: Vec<Piece>,
}

impl KindTables {
    fn build(kind: PieceKind) -> KindTables {
        let base = kind.base_shape();
        let base_corners = corner_candidates(base);

        let footprints: [Vec<Coord>; 8] =
            Orientation::ALL.map(|o| normalized(base.iter().map(|&c| o.apply(c))));

        let mut canonical = Orientation::ALL;
        for o in Orientation::ALL {
            let footprint = &footprints[o.code() as usize];
            canonical[o.code() as usize] = Orientation::ALL
                .into_iter()
                .filter(|other| &footprints[other.code() as usize] == footprint)
                .min_by_key(|other| (other.is_flipped(), other.code()))
                .unwrap_or(o);
        }

        let mut orbit = canonical.to_vec();
        orbit.sort();
        orbit.dedup();

        let templates = orbit
            .iter()
            .map(|&o| {
                let shape: Vec<Coord> = base.iter().map(|&c| o.apply(c)).collect();
                let shift = -bounding_min(&shape);
                Piece {
                    kind,
                    orientation: o,
                    shape: shape.into_iter().map(|c| c + shift).collect(),
                    corners: base_corners
                        .iter()
                        .map(|corner| corner.map(|c| o.apply(c)).translated(shift))
                        .collect(),
                }
            })
            .collect();

        KindTables {
            base_corners,
            canonical,
            orbit,
            templates,
        }
    }
}

static TABLES: LazyLock<Vec<KindTables>> =
    LazyLock::new(|| PieceKind::ALL.into_iter().map(KindTables::build).collect());

#[inline]
pub(crate) fn tables(kind: PieceKind) -> &'static KindTables {
    &TABLES[kind.index()]
}

/// Every distinct orientation of `kind`, anchored at the origin.
#[inline]
pub(crate) fn templates(kind: PieceKind) -> &'static [Piece] {
    &tables(kind).templates
}

/// A piece of a given kind in a given orientation and position.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    kind: PieceKind,
    orientation: Orientation,
    shape: Vec<Coord>,
    corners: Vec<Corner>,
}

impl Piece {
    /// The kind's catalog shape, unrotated and untranslated.
    pub fn new(kind: PieceKind) -> Piece {
        Piece {
            kind,
            orientation: Orientation::North,
            shape: kind.base_shape().to_vec(),
            corners: kind.base_corners().to_vec(),
        }
    }

    /// `kind` in `orientation` (canonicalized), bounding box at the origin.
    pub fn oriented(kind: PieceKind, orientation: Orientation) -> Piece {
        let canonical = kind.canonical(orientation);
        templates(kind)
            .iter()
            .find(|template| template.orientation == canonical)
            .cloned()
            .unwrap_or_else(|| Piece::new(kind))
    }

    /// `kind` in `orientation` with its bounding-box minimum at `anchor`.
    pub fn placed(kind: PieceKind, orientation: Orientation, anchor: Coord) -> Piece {
        Piece::oriented(kind, orientation).translate(anchor)
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Always canonical for the kind.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn shape(&self) -> &[Coord] {
        &self.shape
    }

    #[inline]
    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    /// Bounding-box minimum; the anchor a move names.
    pub fn anchor(&self) -> Coord {
        bounding_min(&self.shape)
    }

    /// Footprint with translation and cell order factored out.
    pub fn footprint(&self) -> Vec<Coord> {
        normalized(self.shape.iter().copied())
    }

    /// Rotate by `turns` quarter turns about the local origin.
    ///
    /// Fails when the kind's symmetry makes that rotation a no-op.
    pub fn rotate(&self, turns: u8) -> Result<Piece, GameError> {
        let symmetry = self.kind.symmetry();
        let distinct = match turns {
            1 | 3 => symmetry.distinct_90,
            2 => symmetry.distinct_180,
            _ => false,
        };
        if !distinct {
            return Err(InvalidOrientation::Rotation {
                kind: self.kind,
                turns,
            }
            .into());
        }
        let turn = move |c: Coord| (0..turns).fold(c, |c, _| c.rotated_quarter());
        Ok(self.transformed(self.orientation.rotated(turns), turn))
    }

    /// Reflect over the y axis. Only chiral kinds have a distinct mirror image.
    pub fn flip_horizontal(&self) -> Result<Piece, GameError> {
        if !self.kind.symmetry().chiral {
            return Err(InvalidOrientation::Flip(self.kind).into());
        }
        Ok(self.transformed(self.orientation.flipped_horizontal(), Coord::mirrored_x))
    }

    /// Reflect over the x axis. Only chiral kinds have a distinct mirror image.
    pub fn flip_vertical(&self) -> Result<Piece, GameError> {
        if !self.kind.symmetry().chiral {
            return Err(InvalidOrientation::Flip(self.kind).into());
        }
        Ok(self.transformed(self.orientation.flipped_vertical(), Coord::mirrored_y))
    }

    pub fn translate(&self, by: Coord) -> Piece {
        Piece {
            kind: self.kind,
            orientation: self.orientation,
            shape: self.shape.iter().map(|&c| c + by).collect(),
            corners: self.corners.iter().map(|corner| corner.translated(by)).collect(),
        }
    }

    /// Reach `target` with at most one flip followed by quarter turns.
    pub fn set_orientation(&self, target: Orientation) -> Result<Piece, GameError> {
        let target = self.kind.canonical(target);
        let mut piece = if self.orientation.is_flipped() != target.is_flipped() {
            self.flip_horizontal()?
        } else {
            self.clone()
        };
        for _ in 0..3 {
            if piece.orientation == target {
                return Ok(piece);
            }
            piece = piece.rotate(1)?;
        }
        if piece.orientation == target {
            Ok(piece)
        } else {
            Err(InvalidOrientation::Unreachable {
                kind: self.kind,
                target,
            }
            .into())
        }
    }

    fn transformed(&self, orientation: Orientation, f: impl Fn(Coord) -> Coord + Copy) -> Piece {
        Piece {
            kind: self.kind,
            orientation: self.kind.canonical(orientation),
            shape: self.shape.iter().map(|&c| f(c)).collect(),
            corners: self.corners.iter().map(|corner| corner.map(f)).collect(),
        }
    }
}
