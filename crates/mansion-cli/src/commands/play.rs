//! Play command implementation.

use crate::cli::PlayArgs;
use crate::config::Config;
use crate::error::Result;
use crate::game::{self, GameOptions, GameReport};
use crate::input::{InteractiveReader, LineReader, ScriptReader, TokenInput};
use crate::output::Formatter;
use std::io;
use std::path::Path;

/// Execute the play command.
pub fn execute_play(args: PlayArgs, config: &Config, formatter: &Formatter) -> Result<GameReport> {
    let options = game_options(&args, config);
    let reader = open_reader(args.script.as_deref(), config)?;
    let mut input = TokenInput::new(reader);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    game::play(&mut input, formatter, &mut out, &options)
}

/// Merge command-line overrides into the configured settings.
fn game_options(args: &PlayArgs, config: &Config) -> GameOptions {
    let mut exploration = config.exploration.clone();
    if let Some(discovery) = args.discovery {
        exploration.discovery = discovery.into();
    }
    GameOptions {
        exploration,
        accused: args.accuse.clone(),
    }
}

fn open_reader(script: Option<&Path>, config: &Config) -> Result<Box<dyn LineReader>> {
    match script {
        Some(path) if path == Path::new("-") => {
            tracing::debug!("reading commands from stdin");
            Ok(Box::new(ScriptReader::from_reader(io::stdin().lock())?))
        }
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading commands from script");
            Ok(Box::new(ScriptReader::from_path(path)?))
        }
        None => Ok(Box::new(InteractiveReader::new(config.settings.history_size)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DiscoveryArg;
    use crate::config::Discovery;

    #[test]
    fn test_game_options_use_config() {
        let config = Config::default();
        let options = game_options(&PlayArgs::default(), &config);
        assert_eq!(options.exploration.discovery, Discovery::FirstVisit);
        assert_eq!(options.exploration.index_buckets, 20);
        assert!(options.accused.is_none());
    }

    #[test]
    fn test_game_options_overrides() {
        let config = Config::default();
        let args = PlayArgs {
            script: None,
            accuse: Some("Clara".to_string()),
            discovery: Some(DiscoveryArg::EveryVisit),
        };
        let options = game_options(&args, &config);
        assert_eq!(options.exploration.discovery, Discovery::EveryVisit);
        assert_eq!(options.accused.as_deref(), Some("Clara"));
    }

    #[test]
    fn test_script_reader_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.txt");
        std::fs::write(&path, "e s").unwrap();

        let mut reader = open_reader(Some(&path), &Config::default()).unwrap();
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("e s"));
        assert_eq!(reader.read_line("").unwrap(), None);
    }
}
