use std::fmt;

use crate::attacks::AttackSet;
use crate::coord::{Coordinate, GridPosition};
use crate::piece::PieceKind;

/// A piece placed on the board, with its grid position cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    kind: PieceKind,
    coordinate: Coordinate,
    position: GridPosition,
}

impl PlacedPiece {
    pub fn new(kind: PieceKind, coordinate: Coordinate) -> Self {
        Self {
            kind,
            coordinate,
            position: coordinate.to_grid_position(),
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn position(&self) -> GridPosition {
        self.position
    }
}

/// Formats as `"knight at b4"`.
impl fmt::Display for PlacedPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.coordinate)
    }
}

/// Black pieces standing on an attacked square, in the order they were added.
pub fn find_capturable(attacks: &AttackSet, black_pieces: &[PlacedPiece]) -> Vec<PlacedPiece> {
    black_pieces
        .iter()
        .filter(|piece| attacks.contains(piece.position()))
        .copied()
        .collect()
}
