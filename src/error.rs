//! Error types for the reader

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::parser::Delimiter;

/// Location of a character in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Character offset from the start of the input (0-indexed)
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Position {
    /// Creates a new position
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

/// Reader errors
///
/// Every error is fatal to the parse that raised it: no partial result is
/// returned and scanning does not resume.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Opening quote never matched by a closing unescaped quote
    ///
    /// **Example:** `"abc` or `"abc\"`
    #[error("Unterminated string starting at {position}")]
    UnterminatedString {
        /// Position of the opening quote
        position: Position,
    },

    /// `(` or `[` still open when the input ends
    ///
    /// **Example:** `(1 2 [3]`
    #[error("Unclosed `{}` opened at {position}", .delimiter.open())]
    UnclosedDelimiter {
        /// Kind of the unmatched opener
        delimiter: Delimiter,
        /// Position of the unmatched opener
        position: Position,
    },

    /// Closing delimiter does not match the type of its opener
    ///
    /// **Example:** `(1]`
    #[error(
        "Mismatched delimiter at {position}: expected `{}`, found `{}`",
        .expected.close(),
        .found.close()
    )]
    MismatchedDelimiter {
        /// Kind of the innermost open collection
        expected: Delimiter,
        /// Kind of the closer actually found
        found: Delimiter,
        /// Position of the offending closer
        position: Position,
    },

    /// Character that starts no grammar rule
    ///
    /// **Example:** `)` with no opener, `@`, or a control character outside a string
    #[error("Invalid character {character:?} at {position}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Position of the character
        position: Position,
    },

    /// Numeric literal that breaks off mid-syntax
    ///
    /// **Example:** `1.`, `1.5e`, `1.5e+`, `12abc`
    #[error("Malformed number at {position}: {reason}")]
    MalformedNumber {
        /// What the number scan expected
        reason: String,
        /// Position where the scan gave up
        position: Position,
    },

    /// `:` with no following symbol-continuation character
    #[error("Empty keyword at {position}")]
    EmptyKeyword {
        /// Position of the colon
        position: Position,
    },
}

impl Error {
    /// Position at which the error was detected
    pub fn position(&self) -> Position {
        match self {
            Error::UnterminatedString { position }
            | Error::UnclosedDelimiter { position, .. }
            | Error::MismatchedDelimiter { position, .. }
            | Error::InvalidCharacter { position, .. }
            | Error::MalformedNumber { position, .. }
            | Error::EmptyKeyword { position } => *position,
        }
    }

    /// Character offset at which the error was detected
    pub fn offset(&self) -> usize {
        self.position().offset
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, Error>;
