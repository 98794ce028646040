use std::io::{self, Write};

use shakmaty::{File, Rank, Square};

use crate::capture::PlacedPiece;
use crate::coord::GridPosition;
use crate::piece::PieceKind;
use crate::session::Analysis;

/// How the final analysis is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw the 8×8 board after the textual report.
    pub board: bool,
    /// Use ANSI background colours on the board.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            board: true,
            color: true,
        }
    }
}

/// What occupies (or threatens) a single square on the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Attacked,
    White(PieceKind),
    Black(PieceKind),
    Capturable(PieceKind),
}

/// Write the list of capturable pieces.
pub fn render_report(w: &mut impl Write, analysis: &Analysis) -> io::Result<()> {
    if analysis.capturable.is_empty() {
        writeln!(w, "No black pieces can be captured.")?;
    } else {
        writeln!(
            w,
            "The white {} at {} can capture:",
            analysis.white.kind(),
            analysis.white.coordinate()
        )?;
        for piece in &analysis.capturable {
            writeln!(w, "  - {piece}")?;
        }
    }
    Ok(())
}

/// Render the board with rank 8 at the top. White pieces are upper case,
/// black pieces lower case; attacked squares and capturable pieces are
/// highlighted.
pub fn render_board(w: &mut impl Write, analysis: &Analysis, color: bool) -> io::Result<()> {
    for rank in Rank::ALL.iter().rev() {
        write!(w, " {} ", rank.char())?;
        for file in File::ALL {
            let position = GridPosition::from(Square::from_coords(file, *rank));
            let cell = classify(analysis, position);
            if color {
                write!(w, "{}", format_colored(cell))?;
            } else {
                write!(w, "{}", format_plain(cell))?;
            }
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()
}

fn classify(analysis: &Analysis, position: GridPosition) -> Cell {
    if analysis.white.position() == position {
        return Cell::White(analysis.white.kind());
    }
    let attacked = analysis.attacks.contains(position);
    match find_at(&analysis.black, position) {
        Some(piece) if attacked => Cell::Capturable(piece.kind()),
        Some(piece) => Cell::Black(piece.kind()),
        None if attacked => Cell::Attacked,
        None => Cell::Empty,
    }
}

fn find_at(pieces: &[PlacedPiece], position: GridPosition) -> Option<&PlacedPiece> {
    pieces.iter().find(|piece| piece.position() == position)
}

fn letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Rook => 'r',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    }
}

/// Map a cell to an ANSI-coloured 3-column string.
fn format_colored(cell: Cell) -> String {
    match cell {
        Cell::Empty => " · ".to_string(),
        Cell::Attacked => "\x1b[44m · \x1b[0m".to_string(),
        Cell::White(kind) => format!("\x1b[42m {} \x1b[0m", letter(kind).to_ascii_uppercase()),
        Cell::Black(kind) => format!(" {} ", letter(kind)),
        Cell::Capturable(kind) => format!("\x1b[41m {} \x1b[0m", letter(kind)),
    }
}

fn format_plain(cell: Cell) -> String {
    match cell {
        Cell::Empty => " · ".to_string(),
        Cell::Attacked => " + ".to_string(),
        Cell::White(kind) => format!(" {} ", letter(kind).to_ascii_uppercase()),
        Cell::Black(kind) => format!(" {} ", letter(kind)),
        Cell::Capturable(kind) => format!("[{}]", letter(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(white: (PieceKind, &str), black: &[(PieceKind, &str)]) -> Analysis {
        let place = |(kind, text): (PieceKind, &str)| {
            PlacedPiece::new(kind, text.parse().expect("valid coordinate"))
        };
        let black: Vec<_> = black.iter().copied().map(place).collect();
        Analysis::compute(place(white), &black)
    }

    fn report_to_string(analysis: &Analysis) -> String {
        let mut buf = Vec::new();
        render_report(&mut buf, analysis).expect("rendering to buffer should succeed");
        String::from_utf8(buf).expect("output should be valid UTF-8")
    }

    fn board_to_string(analysis: &Analysis, color: bool) -> String {
        let mut buf = Vec::new();
        render_board(&mut buf, analysis, color).expect("rendering to buffer should succeed");
        String::from_utf8(buf).expect("output should be valid UTF-8")
    }

    #[test]
    fn report_lists_capturable_pieces() {
        let analysis = analysis(
            (PieceKind::Rook, "a1"),
            &[(PieceKind::Pawn, "a8"), (PieceKind::Pawn, "h1")],
        );

        assert_eq!(
            report_to_string(&analysis),
            "The white rook at a1 can capture:\n  - pawn at a8\n  - pawn at h1\n"
        );
    }

    #[test]
    fn report_without_captures() {
        let analysis = analysis((PieceKind::Pawn, "e4"), &[(PieceKind::Pawn, "e5")]);

        assert_eq!(
            report_to_string(&analysis),
            "No black pieces can be captured.\n"
        );
    }

    #[test]
    fn plain_board_marks_pieces_and_attacks() {
        let analysis = analysis(
            (PieceKind::Knight, "a1"),
            &[(PieceKind::Queen, "b3"), (PieceKind::King, "h8")],
        );

        let output = board_to_string(&analysis, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], " 8  ·  ·  ·  ·  ·  ·  ·  k ");
        assert_eq!(lines[5], " 3  · [q] ·  ·  ·  ·  ·  · ");
        assert_eq!(lines[6], " 2  ·  ·  +  ·  ·  ·  ·  · ");
        assert_eq!(lines[7], " 1  N  ·  ·  ·  ·  ·  ·  · ");
        assert_eq!(lines[8], "    a  b  c  d  e  f  g  h");
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn colored_board_uses_red_for_captures() {
        let analysis = analysis((PieceKind::King, "e4"), &[(PieceKind::Pawn, "d5")]);

        let output = board_to_string(&analysis, true);

        assert!(output.contains("\x1b[41m p \x1b[0m"));
        assert!(output.contains("\x1b[42m K \x1b[0m"));
        assert!(output.contains("\x1b[44m"));
    }
}
