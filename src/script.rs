use std::collections::VecDeque;
use std::convert::Infallible;

use crate::LineSource;

/// A scripted line source that replays pre-recorded input.
///
/// Each line of the script is handed out as one entry, so a whole
/// session can be described as a single string:
///
/// ```
/// # use capture_analyzer::LineSource;
/// # use capture_analyzer::script::ScriptedInput;
/// let mut input = ScriptedInput::from_script("rook a1\npawn a8\ndone");
/// assert_eq!(input.next_line().unwrap().as_deref(), Some("rook a1"));
/// assert_eq!(input.remaining(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending_lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Create with no pending input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a newline-separated script.
    pub fn from_script(script: &str) -> Self {
        let mut input = Self::new();
        input.push_script(script);
        input
    }

    /// Queue additional lines. Trailing empty lines are dropped.
    pub fn push_script(&mut self, script: &str) {
        self.pending_lines
            .extend(script.lines().map(str::to_string));
        while self.pending_lines.back().is_some_and(|l| l.trim().is_empty()) {
            self.pending_lines.pop_back();
        }
    }

    /// Number of lines not yet read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.pending_lines.len()
    }
}

impl LineSource for ScriptedInput {
    type Error = Infallible;

    fn next_line(&mut self) -> Result<Option<String>, Self::Error> {
        Ok(self.pending_lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_in_order() {
        let mut input = ScriptedInput::from_script("queen d4\r\nking h8\n");

        assert_eq!(input.next_line(), Ok(Some("queen d4".to_string())));
        assert_eq!(input.next_line(), Ok(Some("king h8".to_string())));
        assert_eq!(input.next_line(), Ok(None));
    }

    #[test]
    fn test_inner_blank_lines_kept() {
        let mut input = ScriptedInput::from_script("rook a1\n\npawn a8\n\n\n");

        assert_eq!(input.remaining(), 3);
        input.next_line().unwrap();
        assert_eq!(input.next_line(), Ok(Some(String::new())));
    }

    #[test]
    fn test_push_script_appends() {
        let mut input = ScriptedInput::from_script("rook a1");
        input.push_script("pawn a8\ndone");

        assert_eq!(input.remaining(), 3);
    }
}
