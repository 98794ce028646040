pub mod attacks;
pub mod capture;
pub mod config;
pub mod coord;
pub mod display;
pub mod input;
pub mod piece;
pub mod script;
pub mod session;
pub mod terminal;

/// Trait for reading one line of user input at a time.
///
/// Abstracts over the interactive terminal and scripted input,
/// providing a uniform interface for the session loop.
pub trait LineSource {
    /// Error type for read failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Read the next line, or `None` once the input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>, Self::Error>;
}
