use serde::{Deserialize, Serialize};

use crate::error::Position;
use crate::parser::{FloatLiteral, IntegerLiteral};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Where the token starts
    pub position: Position,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, position: Position) -> Self {
        Token {
            kind,
            lexeme,
            position,
        }
    }
}

/// All possible token types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Integer literal, sign and digits as written
    Integer(IntegerLiteral),
    /// Floating-point literal, every part as written
    Float(FloatLiteral),
    /// String literal content between the quotes, escapes kept verbatim
    String(String),
    /// `true` or `false`
    Boolean(bool),
    /// Keyword including its leading colon
    Keyword(String),
    /// Symbol
    Symbol(String),

    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left bracket [
    LeftBracket,
    /// Right bracket ]
    RightBracket,

    // Special
    /// End of file marker
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Integer(n) => write!(f, "{}", n),
            TokenKind::Float(fl) => write!(f, "{}", fl),
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::Boolean(b) => write!(f, "{}", b),
            TokenKind::Keyword(k) => write!(f, "{}", k),
            TokenKind::Symbol(s) => write!(f, "{}", s),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::LeftBracket => write!(f, "["),
            TokenKind::RightBracket => write!(f, "]"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
