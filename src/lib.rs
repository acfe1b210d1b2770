//! # lisp-reader - Reader for a Lisp-style notation
//!
//! Turns source text into an ordered sequence of syntax-tree nodes
//! ([`Form`]s). Literals are captured as the exact text that was read: numbers
//! keep their sign and leading zeros, strings keep `\"` escapes as written.
//! Nothing is evaluated.
//!
//! ## Quick Start
//!
//! ```rust
//! use lisp_reader::{parse, Form, IntegerLiteral};
//!
//! # fn main() -> lisp_reader::Result<()> {
//! let forms = parse("(inc 41) :done")?;
//!
//! assert_eq!(
//!     forms,
//!     vec![
//!         Form::list([
//!             Form::symbol("inc"),
//!             Form::Integer(IntegerLiteral::new("41")),
//!         ]),
//!         Form::keyword(":done"),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Notation
//!
//! - **Numbers**: `42`, `-007`, `+1.5`, `6.02E+23`
//! - **Strings**: `"text"`, with `\"` for an embedded quote
//! - **Booleans**: `true`, `false`
//! - **Keywords**: `:name`
//! - **Symbols**: `foo`, `set!`, `+`, `->x`, `+++`
//! - **Lists**: `(a b c)`; **Vectors**: `[a b c]`
//!
//! Spaces, tabs, newlines and commas all separate tokens and are
//! interchangeable.
//!
//! A leading `+` or `-` is a number sign only when a digit follows
//! immediately, so `+9` is an integer while `+`, `+a` and `+++` are symbols.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → Forms
//! ```
//!
//! - [`Scanner`] - Tokenizes source text
//! - [`Parser`] - Builds forms from tokens
//! - [`parse`] - Runs both over one input
//!
//! ## Error Handling
//!
//! The first error aborts the read; no partial result is returned.
//!
//! ```rust
//! use lisp_reader::{parse, Error};
//!
//! let err = parse("(1 2").unwrap_err();
//! assert!(matches!(err, Error::UnclosedDelimiter { .. }));
//! assert_eq!(err.offset(), 0);
//! ```
//!
//! ## Printing
//!
//! [`Form`] implements `Display`, printing source text that reads back to an
//! equal form:
//!
//! ```rust
//! # use lisp_reader::parse;
//! let forms = parse("[+1.50e3,  \"a\\\"b\"]").unwrap();
//! assert_eq!(forms[0].to_string(), "[+1.50e3 \"a\\\"b\"]");
//! assert_eq!(parse(&forms[0].to_string()).unwrap(), forms);
//! ```

/// Version of the reader
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Position, Result};
pub use lexer::{SExprScanner, Token, TokenKind};
pub use parser::{
    parse, Delimiter, Exponent, ExponentMarker, FloatLiteral, Form, IntegerLiteral, SExprParser,
    Sign,
};

/// Type alias for the S-expression scanner (lexer).
/// Converts raw source text into tokens for the parser.
pub type Scanner = SExprScanner;

/// Type alias for the S-expression parser.
/// Converts tokens into forms.
pub type Parser = SExprParser;
