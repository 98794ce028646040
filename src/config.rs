use std::path::PathBuf;

use clap::Parser;

use crate::display::RenderOptions;

/// Report which black pieces a single white piece can capture.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "capture-analyzer", version, about, long_about = None)]
pub struct Config {
    /// Read entries from a file (one per line) instead of standard input
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Skip drawing the board after the report
    #[arg(long)]
    pub no_board: bool,

    /// Draw the board without ANSI colours
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            board: !self.no_board,
            color: !self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_colored_board() {
        let config = Config::parse_from(["capture-analyzer"]);

        assert_eq!(config.script, None);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn flags_disable_board_and_color() {
        let config = Config::parse_from([
            "capture-analyzer",
            "--no-board",
            "--no-color",
            "--script",
            "game.txt",
        ]);

        assert_eq!(config.script, Some(PathBuf::from("game.txt")));
        assert_eq!(
            config.render_options(),
            RenderOptions {
                board: false,
                color: false,
            }
        );
    }
}
