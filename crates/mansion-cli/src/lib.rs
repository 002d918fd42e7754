//! Mansion CLI library.
//!
//! This library provides the terminal front end of the mansion game:
//! configuration, input sources, output formatting and the game driver.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
