use shakmaty::{Bitboard, Square};
use thiserror::Error;

use crate::attacks::{AttackSet, attack_positions};
use crate::capture::{PlacedPiece, find_capturable};
use crate::coord::Coordinate;
use crate::input::parse_entry;

/// Word that ends black piece entry (case-insensitive).
pub const SENTINEL: &str = "done";

/// Which input the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the single white piece.
    CollectingWhite,
    /// Waiting for black pieces or the sentinel.
    CollectingBlack,
    /// Input is complete; the analysis can be read.
    Ready,
}

/// Reasons an input line is rejected. None of them change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("expected 'piece coordinate'")]
    Format,
    #[error("unknown piece or invalid coordinate")]
    InvalidPieceOrPosition,
    #[error("a piece already exists at {0}")]
    DuplicatePosition(Coordinate),
    #[error("at least one black piece is required")]
    InsufficientBlackPieces,
    #[error("all pieces have already been entered")]
    SessionComplete,
}

impl EntryError {
    /// Stable machine-readable code for this rejection.
    pub const fn reason_code(&self) -> &'static str {
        match self {
            EntryError::Format => "format_error",
            EntryError::InvalidPieceOrPosition => "invalid_piece_or_position",
            EntryError::DuplicatePosition(_) => "duplicate_position",
            EntryError::InsufficientBlackPieces => "insufficient_black_pieces",
            EntryError::SessionComplete => "session_complete",
        }
    }
}

/// Outcome of an accepted input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    White(PlacedPiece),
    Black(PlacedPiece),
    /// The sentinel was accepted and the session is ready.
    Finished,
}

/// The result of analysing a complete session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub white: PlacedPiece,
    pub black: Vec<PlacedPiece>,
    pub attacks: AttackSet,
    pub capturable: Vec<PlacedPiece>,
}

impl Analysis {
    /// Compute which of `black` the `white` piece attacks.
    pub fn compute(white: PlacedPiece, black: &[PlacedPiece]) -> Self {
        let attacks = attack_positions(white.kind(), white.position());
        let capturable = find_capturable(&attacks, black);
        Self {
            white,
            black: black.to_vec(),
            attacks,
            capturable,
        }
    }
}

/// Collects one white piece and one or more black pieces, line by line.
///
/// Owns the occupied squares and the black piece list; a rejected line
/// leaves both untouched.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    white: Option<PlacedPiece>,
    black: Vec<PlacedPiece>,
    occupied: Bitboard,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::CollectingWhite,
            white: None,
            black: Vec::new(),
            occupied: Bitboard::EMPTY,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn white(&self) -> Option<PlacedPiece> {
        self.white
    }

    #[inline]
    pub fn black_pieces(&self) -> &[PlacedPiece] {
        &self.black
    }

    /// Process one line of input according to the current phase.
    pub fn submit(&mut self, line: &str) -> Result<Accepted, EntryError> {
        let result = match self.phase {
            Phase::CollectingWhite => self.submit_white(line),
            Phase::CollectingBlack => self.submit_black(line),
            Phase::Ready => Err(EntryError::SessionComplete),
        };

        match &result {
            Ok(accepted) => log::debug!("accepted {accepted:?}, now {:?}", self.phase),
            Err(e) => log::warn!("rejected {:?}: {}", line.trim(), e.reason_code()),
        }
        result
    }

    fn submit_white(&mut self, line: &str) -> Result<Accepted, EntryError> {
        let (kind, coordinate) = parse_entry(line)?;
        let piece = PlacedPiece::new(kind, coordinate);

        self.occupied |= Bitboard::from(Square::from(piece.position()));
        self.white = Some(piece);
        self.phase = Phase::CollectingBlack;
        Ok(Accepted::White(piece))
    }

    fn submit_black(&mut self, line: &str) -> Result<Accepted, EntryError> {
        if line.trim().eq_ignore_ascii_case(SENTINEL) {
            if self.black.is_empty() {
                return Err(EntryError::InsufficientBlackPieces);
            }
            self.phase = Phase::Ready;
            return Ok(Accepted::Finished);
        }

        let (kind, coordinate) = parse_entry(line)?;
        let piece = PlacedPiece::new(kind, coordinate);
        let square = Square::from(piece.position());
        if self.occupied.contains(square) {
            return Err(EntryError::DuplicatePosition(coordinate));
        }

        self.occupied |= Bitboard::from(square);
        self.black.push(piece);
        Ok(Accepted::Black(piece))
    }

    /// The capture analysis, once the session is ready.
    pub fn analysis(&self) -> Option<Analysis> {
        match (self.phase, self.white) {
            (Phase::Ready, Some(white)) => Some(Analysis::compute(white, &self.black)),
            _ => None,
        }
    }
}
