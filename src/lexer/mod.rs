//! Lexical analysis
//!
//! Converts source text into a stream of tokens. Separators are dropped here;
//! the number-vs-symbol decision for `+`, `-` and `.` is made here too.

pub mod classify;
mod sexpr_scanner;
mod token;

pub use classify::{is_digit, is_separator, is_symbol_continuation, is_symbol_start};
pub use sexpr_scanner::SExprScanner;
pub use token::{Token, TokenKind};
