use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The kind of a chess piece, without colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds, in the order they are listed to the user.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lower-case English name, as typed by the user.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Comma-separated list of every valid name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse a piece name, ignoring case.
impl FromStr for PieceKind {
    type Err = PieceKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PieceKindParseError(s.to_string()))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when a name is not one of the six piece kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown piece '{0}'")]
pub struct PieceKindParseError(String);

/// Returns true if `text` names one of the six piece kinds.
pub fn is_valid_piece_kind(text: &str) -> bool {
    text.parse::<PieceKind>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("pawn", PieceKind::Pawn)]
    #[test_case("rook", PieceKind::Rook)]
    #[test_case("knight", PieceKind::Knight)]
    #[test_case("bishop", PieceKind::Bishop)]
    #[test_case("queen", PieceKind::Queen)]
    #[test_case("king", PieceKind::King)]
    #[test_case("KNIGHT", PieceKind::Knight; "upper case")]
    #[test_case("Queen", PieceKind::Queen; "title case")]
    fn test_parse_piece_kind(text: &str, expected: PieceKind) {
        assert_eq!(text.parse::<PieceKind>(), Ok(expected));
    }

    #[test_case("pown"; "typo")]
    #[test_case(""; "empty")]
    #[test_case("horse"; "nickname")]
    #[test_case("kings"; "plural")]
    fn test_invalid_piece_kind(text: &str) {
        assert!(!is_valid_piece_kind(text));
        assert_eq!(
            text.parse::<PieceKind>(),
            Err(PieceKindParseError(text.to_string()))
        );
    }

    #[test]
    fn test_name_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.to_string().parse::<PieceKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_valid_names() {
        assert_eq!(
            PieceKind::valid_names(),
            "pawn, rook, knight, bishop, queen, king"
        );
    }
}
