use std::io;
use std::process::ExitCode;

use capture_analyzer::config::Config;
use capture_analyzer::script::ScriptedInput;
use capture_analyzer::terminal::{StdinSource, TerminalError, run_session};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    log::debug!("{config:?}");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), TerminalError> {
    let mut stdout = io::stdout().lock();
    let options = config.render_options();

    match &config.script {
        Some(path) => {
            let script = std::fs::read_to_string(path)?;
            run_session(&mut ScriptedInput::from_script(&script), &mut stdout, options)?;
        }
        None => {
            run_session(&mut StdinSource::new(), &mut stdout, options)?;
        }
    }
    Ok(())
}
