use std::fmt;
use std::io;

use thiserror::Error;

/// 1-based location of a decode problem in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML encode error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML decode error{}: {message}", at(.position))]
    Decode {
        message: String,
        position: Option<Position>,
    },
}

impl Error {
    /// True when the source text itself was rejected, as opposed to a
    /// filesystem or encoding failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    pub(crate) fn from_toml(err: toml::de::Error, input: &str) -> Self {
        let position = err.span().map(|span| position_of(input, span.start));
        Error::Decode {
            message: err.message().trim_end().to_string(),
            position,
        }
    }
}

fn at(position: &Option<Position>) -> String {
    match position {
        Some(p) => format!(" at {}", p),
        None => String::new(),
    }
}

fn position_of(input: &str, offset: usize) -> Position {
    let offset = offset.min(input.len());
    let before = input.get(..offset).unwrap_or(input);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    Position { line, column }
}

pub type Result<T> = core::result::Result<T, Error>;
