use crate::coord::{Coordinate, is_valid_coordinate};
use crate::piece::{PieceKind, is_valid_piece_kind};
use crate::session::EntryError;

/// A line split into its two tokens, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub piece: String,
    pub coordinate: String,
}

/// Split a line like `"Knight B4"` into lower-cased piece and coordinate tokens.
///
/// Returns `None` unless the line holds exactly two whitespace-separated tokens.
pub fn parse_input(raw_line: &str) -> Option<RawEntry> {
    let lowered = raw_line.to_lowercase();
    let mut tokens = lowered.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(piece), Some(coordinate), None) => Some(RawEntry {
            piece: piece.to_string(),
            coordinate: coordinate.to_string(),
        }),
        _ => None,
    }
}

/// Returns true if both the piece name and the coordinate are well-formed.
pub fn validate(piece: &str, coordinate: &str) -> bool {
    is_valid_piece_kind(piece) && is_valid_coordinate(coordinate)
}

/// Tokenize and validate a line into a typed piece and coordinate.
pub fn parse_entry(raw_line: &str) -> Result<(PieceKind, Coordinate), EntryError> {
    let entry = parse_input(raw_line).ok_or(EntryError::Format)?;
    if !validate(&entry.piece, &entry.coordinate) {
        return Err(EntryError::InvalidPieceOrPosition);
    }

    let kind = entry
        .piece
        .parse()
        .map_err(|_| EntryError::InvalidPieceOrPosition)?;
    let coordinate = entry
        .coordinate
        .parse()
        .map_err(|_| EntryError::InvalidPieceOrPosition)?;
    Ok((kind, coordinate))
}
