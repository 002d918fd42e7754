//! Input sources for the game.
//!
//! Lines come from the interactive line editor or from a script. Either way
//! they are split on whitespace and every token is consumed on its own, so
//! `e e s` on a single line makes three moves.

use crate::error::Result;
use mansion_domain::traits::CommandSource;
use mansion_domain::Command;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Prompt shown before each move.
pub const MOVE_PROMPT: &str = "Mover para (e) esquerda, (d) direita ou (s) sair: ";

/// Prompt shown before the accusation.
pub const ACCUSE_PROMPT: &str = "Quem você acusa? ";

/// A source of input lines.
pub trait LineReader {
    /// Read one line, or `None` once input is over.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl<R: LineReader + ?Sized> LineReader for Box<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Keyboard input through rustyline.
pub struct InteractiveReader {
    editor: DefaultEditor,
}

impl InteractiveReader {
    /// Create a reader keeping at most `history_size` lines of history.
    pub fn new(history_size: usize) -> Result<Self> {
        let config = rustyline::Config::builder()
            .max_history_size(history_size)?
            .auto_add_history(true)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { editor })
    }
}

impl LineReader for InteractiveReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C and Ctrl-D both end the input.
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Pre-recorded input.
#[derive(Debug, Default)]
pub struct ScriptReader {
    lines: VecDeque<String>,
}

impl ScriptReader {
    /// Use the lines of `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Read every line from `reader` up front.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<VecDeque<_>>>()?;
        Ok(Self { lines })
    }

    /// Read a script file.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::from_text(&fs::read_to_string(path)?))
    }
}

impl LineReader for ScriptReader {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Splits lines into whitespace-separated tokens.
pub struct TokenInput<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: LineReader> TokenInput<R> {
    /// Wrap a line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. Blank lines are skipped.
    pub fn next_token(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            match self.reader.read_line(prompt)? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                None => return Ok(None),
            }
        }
    }
}

impl<R: LineReader> CommandSource for TokenInput<R> {
    type Error = crate::error::CliError;

    fn next_command(&mut self) -> Result<Option<Command>> {
        Ok(self.next_token(MOVE_PROMPT)?.map(|token| Command::parse(&token)))
    }
}
