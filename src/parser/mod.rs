//! Parser Module
//!
//! Builds the form tree from tokens, recursing into lists and vectors.

mod ast;
mod sexpr_parser;

pub use ast::{Delimiter, Exponent, ExponentMarker, FloatLiteral, Form, IntegerLiteral, Sign};
pub use sexpr_parser::{parse, SExprParser};
