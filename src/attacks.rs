//! Attack geometry for a single piece on an otherwise empty board.
//!
//! Occupancy is never consulted: sliding pieces see through other pieces
//! all the way to the edge of the board.

use std::ops::BitOr;

use shakmaty::{Bitboard, Square};

use crate::coord::GridPosition;
use crate::piece::PieceKind;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Set of grid positions threatened by a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackSet(Bitboard);

impl AttackSet {
    /// Create an empty attack set
    #[inline]
    pub const fn new() -> Self {
        Self(Bitboard::EMPTY)
    }

    #[inline]
    pub fn contains(&self, position: GridPosition) -> bool {
        self.0.contains(Square::from(position))
    }

    #[inline]
    pub fn insert(&mut self, position: GridPosition) {
        self.0 |= Bitboard::from(Square::from(position));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the threatened positions.
    pub fn iter(&self) -> impl Iterator<Item = GridPosition> + '_ {
        self.0.into_iter().map(GridPosition::from)
    }

    /// The underlying bitboard, for interop with `shakmaty`.
    #[inline]
    pub fn bitboard(&self) -> Bitboard {
        self.0
    }
}

impl FromIterator<GridPosition> for AttackSet {
    fn from_iter<I: IntoIterator<Item = GridPosition>>(iter: I) -> Self {
        let mut set = AttackSet::new();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl BitOr for AttackSet {
    type Output = AttackSet;

    fn bitor(self, rhs: AttackSet) -> AttackSet {
        AttackSet(self.0 | rhs.0)
    }
}

/// Squares threatened by `kind` standing on `position`.
pub fn attack_positions(kind: PieceKind, position: GridPosition) -> AttackSet {
    let attacks = match kind {
        PieceKind::Pawn => pawn_targets(position),
        PieceKind::Rook => rook_targets(position),
        PieceKind::Knight => knight_targets(position),
        PieceKind::Bishop => bishop_targets(position),
        PieceKind::Queen => queen_targets(position),
        PieceKind::King => king_targets(position),
    };
    log::debug!(
        "{kind} at {} attacks {} squares",
        position.to_coordinate(),
        attacks.len()
    );
    attacks
}

/// Pawns attack diagonally toward row 0 (white's direction of travel).
pub fn pawn_targets(position: GridPosition) -> AttackSet {
    leaper_targets(position, &[(-1, -1), (-1, 1)])
}

pub fn rook_targets(position: GridPosition) -> AttackSet {
    slider_targets(position, &ORTHOGONAL_DIRECTIONS)
}

pub fn knight_targets(position: GridPosition) -> AttackSet {
    leaper_targets(position, &KNIGHT_OFFSETS)
}

pub fn bishop_targets(position: GridPosition) -> AttackSet {
    slider_targets(position, &DIAGONAL_DIRECTIONS)
}

/// Rook and bishop rays combined; the two never share a square.
pub fn queen_targets(position: GridPosition) -> AttackSet {
    rook_targets(position) | bishop_targets(position)
}

pub fn king_targets(position: GridPosition) -> AttackSet {
    leaper_targets(position, &KING_OFFSETS)
}

/// Single-step offsets, keeping only those that stay on the board.
fn leaper_targets(position: GridPosition, offsets: &[(i8, i8)]) -> AttackSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| position.offset(d_row, d_col))
        .collect()
}

/// Rays stepped outward until they leave the board.
fn slider_targets(position: GridPosition, directions: &[(i8, i8)]) -> AttackSet {
    directions
        .iter()
        .flat_map(|&(d_row, d_col)| {
            std::iter::successors(position.offset(d_row, d_col), move |current| {
                current.offset(d_row, d_col)
            })
        })
        .collect()
}
