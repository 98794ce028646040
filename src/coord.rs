use std::fmt;
use std::str::FromStr;

use shakmaty::{File, Rank, Square};
use thiserror::Error;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square in chess notation: file `a`-`h` followed by rank `1`-`8`.
///
/// Only constructible from valid text or from a [`GridPosition`], so every
/// value maps to exactly one square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

impl Coordinate {
    /// The file letter (`'a'`-`'h'`).
    #[inline]
    pub fn file(&self) -> char {
        self.file as char
    }

    /// The rank digit (`'1'`-`'8'`).
    #[inline]
    pub fn rank(&self) -> char {
        self.rank as char
    }

    /// Convert to zero-based grid indices (row 0 is rank 8).
    #[inline]
    pub fn to_grid_position(self) -> GridPosition {
        GridPosition {
            row: b'8' - self.rank,
            col: self.file - b'a',
        }
    }
}

/// Parse notation like `"e4"` into a [`Coordinate`].
///
/// Only lower-case files are accepted; callers normalise case first.
///
/// # Examples
/// ```
/// # use capture_analyzer::coord::Coordinate;
/// let coord: Coordinate = "e4".parse().unwrap();
/// assert_eq!(coord.to_grid_position().row(), 4);
/// ```
impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[file, rank] = s.as_bytes() else {
            return Err(CoordinateParseError::WrongLength);
        };

        if !(b'a'..=b'h').contains(&file) {
            return Err(CoordinateParseError::BadFile);
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(CoordinateParseError::BadRank);
        }

        Ok(Coordinate { file, rank })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl From<GridPosition> for Coordinate {
    fn from(position: GridPosition) -> Self {
        position.to_coordinate()
    }
}

/// Error type for parsing coordinate notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateParseError {
    /// Coordinate must be exactly 2 characters
    #[error("coordinate must be 2 characters (e.g., 'e4')")]
    WrongLength,
    /// File must be a letter from a-h
    #[error("file must be a-h")]
    BadFile,
    /// Rank must be a digit from 1-8
    #[error("rank must be 1-8")]
    BadRank,
}

/// Returns true if `text` is a well-formed coordinate such as `"a1"` or `"h8"`.
pub fn is_valid_coordinate(text: &str) -> bool {
    text.parse::<Coordinate>().is_ok()
}

/// Zero-based (row, column) indices into the 8x8 grid.
///
/// Row 0 is rank 8 (top of the board), row 7 is rank 1. Column 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    row: u8,
    col: u8,
}

impl GridPosition {
    /// Creates a grid position if both indices are within 0-7.
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by a signed offset, returning `None` when the result leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    /// Convert back to chess notation.
    #[inline]
    pub fn to_coordinate(self) -> Coordinate {
        Coordinate {
            file: b'a' + self.col,
            rank: b'8' - self.row,
        }
    }

    /// Iterate over all 64 positions, row by row from the top.
    pub fn all() -> impl Iterator<Item = GridPosition> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| GridPosition { row, col }))
    }
}

impl From<Coordinate> for GridPosition {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_grid_position()
    }
}

impl From<GridPosition> for Square {
    fn from(position: GridPosition) -> Self {
        Square::from_coords(
            File::new(u32::from(position.col)),
            Rank::new(u32::from(BOARD_SIZE - 1 - position.row)),
        )
    }
}

impl From<Square> for GridPosition {
    fn from(square: Square) -> Self {
        GridPosition {
            row: BOARD_SIZE - 1 - square.rank() as u8,
            col: square.file() as u8,
        }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("a1", 7, 0; "bottom left")]
    #[test_case("h1", 7, 7; "bottom right")]
    #[test_case("a8", 0, 0; "top left")]
    #[test_case("h8", 0, 7; "top right")]
    #[test_case("d4", 4, 3; "centre")]
    #[test_case("e2", 6, 4; "king pawn")]
    fn test_coordinate_to_grid_position(text: &str, row: u8, col: u8) {
        let coord: Coordinate = text.parse().expect("valid coordinate");
        let position = coord.to_grid_position();
        assert_eq!(position.row(), row);
        assert_eq!(position.col(), col);
    }

    #[test]
    fn test_coordinate_roundtrip() {
        for file in 'a'..='h' {
            for rank in '1'..='8' {
                let text = format!("{file}{rank}");
                let coord: Coordinate = text.parse().expect("valid coordinate");
                assert_eq!(coord.to_grid_position().to_coordinate(), coord);
                assert_eq!(coord.to_string(), text);
            }
        }
    }

    #[test]
    fn test_grid_position_roundtrip() {
        for position in GridPosition::all() {
            assert_eq!(position.to_coordinate().to_grid_position(), position);
        }
        assert_eq!(GridPosition::all().count(), 64);
    }

    #[test_case("a1", true)]
    #[test_case("h8", true)]
    #[test_case("i9", false)]
    #[test_case("a9", false)]
    #[test_case("a0", false)]
    #[test_case("", false; "empty")]
    #[test_case("a", false; "too short")]
    #[test_case("a1x", false; "too long")]
    #[test_case("1a", false; "swapped")]
    #[test_case("A1", false; "upper case file")]
    #[test_case("é1", false; "multibyte file")]
    fn test_is_valid_coordinate(text: &str, expected: bool) {
        assert_eq!(is_valid_coordinate(text), expected);
    }

    #[test]
    fn test_coordinate_parse_errors() {
        assert_eq!(
            "a".parse::<Coordinate>(),
            Err(CoordinateParseError::WrongLength)
        );
        assert_eq!("z1".parse::<Coordinate>(), Err(CoordinateParseError::BadFile));
        assert_eq!("a9".parse::<Coordinate>(), Err(CoordinateParseError::BadRank));
    }

    #[test]
    fn test_grid_position_new_bounds() {
        assert!(GridPosition::new(0, 0).is_some());
        assert!(GridPosition::new(7, 7).is_some());
        assert!(GridPosition::new(8, 0).is_none());
        assert!(GridPosition::new(0, 8).is_none());
    }

    #[test]
    fn test_grid_position_offset() {
        let a1 = GridPosition::new(7, 0).unwrap();
        assert_eq!(a1.offset(-1, 1), GridPosition::new(6, 1));
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn test_grid_position_matches_shakmaty_square() {
        for position in GridPosition::all() {
            let square = Square::from(position);
            assert_eq!(square.to_string(), position.to_coordinate().to_string());
            assert_eq!(GridPosition::from(square), position);
        }
    }
}
