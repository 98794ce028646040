use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::LineSource;
use crate::display::{RenderOptions, render_board, render_report};
use crate::piece::PieceKind;
use crate::session::{Accepted, Analysis, EntryError, Phase, Session};

/// Error type for the interactive session loop.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
    #[error("failed to read input: {0}")]
    Read(String),
    #[error("input closed before all pieces were entered")]
    InputClosed,
}

/// Line source backed by standard input.
#[derive(Debug)]
pub struct StdinSource {
    stdin: io::Stdin,
}

impl StdinSource {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinSource {
    type Error = io::Error;

    fn next_line(&mut self) -> Result<Option<String>, Self::Error> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Runs the prompt loop until a complete session is collected, then prints
/// the analysis.
///
/// Every rejected line is reported and prompted for again; only I/O failures
/// or running out of input end the loop early.
pub fn run_session<S, W>(
    source: &mut S,
    out: &mut W,
    options: RenderOptions,
) -> Result<Analysis, TerminalError>
where
    S: LineSource,
    W: Write,
{
    let mut session = Session::new();

    writeln!(out, "=== Chess Piece Capture Analyzer ===")?;
    writeln!(out)?;

    let analysis = loop {
        write_prompt(out, &session)?;
        out.flush()?;

        let line = source
            .next_line()
            .map_err(|e| TerminalError::Read(e.to_string()))?
            .ok_or(TerminalError::InputClosed)?;

        let phase = session.phase();
        match session.submit(&line) {
            Ok(Accepted::White(_)) => {
                writeln!(out)?;
                writeln!(
                    out,
                    "Add black pieces (type 'done' when finished, minimum 1 piece required):"
                )?;
                writeln!(out)?;
            }
            Ok(Accepted::Black(piece)) => {
                writeln!(out, "Added {piece}")?;
                writeln!(out)?;
            }
            Ok(Accepted::Finished) => {
                if let Some(analysis) = session.analysis() {
                    break analysis;
                }
            }
            Err(e) => {
                writeln!(out, "{}", error_message(&e, phase))?;
                writeln!(out)?;
            }
        }
    };

    log::info!(
        "{} of {} black pieces capturable by {}",
        analysis.capturable.len(),
        analysis.black.len(),
        analysis.white
    );

    writeln!(out)?;
    writeln!(out, "=== Analysis ===")?;
    writeln!(out)?;
    render_report(out, &analysis)?;
    if options.board {
        writeln!(out)?;
        render_board(out, &analysis, options.color)?;
    }
    writeln!(out)?;
    writeln!(out, "=== Game Over ===")?;
    out.flush()?;

    Ok(analysis)
}

fn write_prompt(out: &mut impl Write, session: &Session) -> io::Result<()> {
    match session.phase() {
        Phase::CollectingWhite => {
            write!(out, "Enter white piece and position (e.g., 'knight a5'): ")
        }
        Phase::CollectingBlack | Phase::Ready => write!(
            out,
            "Enter black piece {} (or 'done' to finish): ",
            session.black_pieces().len() + 1
        ),
    }
}

/// User-facing text for a rejected line.
fn error_message(error: &EntryError, phase: Phase) -> String {
    match (error, phase) {
        (EntryError::Format, _) => {
            "Error: Invalid format. Please use 'piece coordinates'.".to_string()
        }
        (EntryError::InvalidPieceOrPosition, Phase::CollectingWhite) => format!(
            "Error: Invalid piece or coordinates. Valid pieces: {}",
            PieceKind::valid_names()
        ),
        (EntryError::InvalidPieceOrPosition, _) => {
            "Error: Invalid piece or coordinates.".to_string()
        }
        (EntryError::DuplicatePosition(_), _) => {
            "Error: A piece already exists at that position.".to_string()
        }
        (EntryError::InsufficientBlackPieces, _) => {
            "Error: You must add at least one black piece.".to_string()
        }
        (EntryError::SessionComplete, _) => {
            "Error: All pieces have already been entered.".to_string()
        }
    }
}
