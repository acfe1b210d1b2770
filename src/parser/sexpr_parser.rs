use super::ast::{Delimiter, Form};
use crate::error::{Error, Position, Result};
use crate::lexer::{SExprScanner, Token, TokenKind};

/// Collection still waiting for its closer: kind, opener position, elements so far
type OpenCollection = (Delimiter, Position, Vec<Form>);

/// S-expression parser: builds forms from a scanned token stream
pub struct SExprParser {
    tokens: std::vec::IntoIter<Token>,
    end: Position,
}

impl SExprParser {
    /// Creates a new S-expression parser
    ///
    /// A trailing [`TokenKind::Eof`], as produced by
    /// [`SExprScanner::scan_tokens`], is optional.
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map(|t| t.position).unwrap_or_default();
        SExprParser {
            tokens: tokens.into_iter(),
            end,
        }
    }

    /// Parses every top-level form, in source order
    pub fn parse(&mut self) -> Result<Vec<Form>> {
        let mut forms = Vec::new();

        while let Some(form) = self.parse_form()? {
            forms.push(form);
        }

        Ok(forms)
    }

    /// Reads one top-level form, or `None` at end of input.
    ///
    /// Open collections live on an explicit stack, so nesting depth is
    /// bounded by heap memory rather than the call stack.
    fn parse_form(&mut self) -> Result<Option<Form>> {
        let mut open: Vec<OpenCollection> = Vec::new();

        loop {
            let Token { kind, position, .. } = self.advance();

            let form = match kind {
                TokenKind::LeftParen => {
                    open.push((Delimiter::Paren, position, Vec::new()));
                    continue;
                }
                TokenKind::LeftBracket => {
                    open.push((Delimiter::Bracket, position, Vec::new()));
                    continue;
                }
                TokenKind::RightParen => Self::close(&mut open, Delimiter::Paren, position)?,
                TokenKind::RightBracket => Self::close(&mut open, Delimiter::Bracket, position)?,
                TokenKind::Integer(n) => Form::Integer(n),
                TokenKind::Float(n) => Form::Float(n),
                TokenKind::Boolean(b) => Form::Boolean(b),
                TokenKind::Keyword(k) => Form::Keyword(k),
                TokenKind::String(s) => Form::StringLiteral(s),
                TokenKind::Symbol(s) => Form::Symbol(s),
                TokenKind::Eof => {
                    return match open.pop() {
                        // Innermost unmatched opener
                        Some((delimiter, opened_at, _)) => Err(Error::UnclosedDelimiter {
                            delimiter,
                            position: opened_at,
                        }),
                        None => Ok(None),
                    };
                }
            };

            match open.last_mut() {
                Some((_, _, elements)) => elements.push(form),
                None => return Ok(Some(form)),
            }
        }
    }

    /// Pops the innermost open collection if `found` closes it
    fn close(
        open: &mut Vec<OpenCollection>,
        found: Delimiter,
        position: Position,
    ) -> Result<Form> {
        let (delimiter, _, elements) = match open.pop() {
            Some(collection) => collection,
            // A closer with nothing open
            None => {
                return Err(Error::InvalidCharacter {
                    character: found.close(),
                    position,
                });
            }
        };

        if found != delimiter {
            return Err(Error::MismatchedDelimiter {
                expected: delimiter,
                found,
                position,
            });
        }

        Ok(match delimiter {
            Delimiter::Paren => Form::List(elements),
            Delimiter::Bracket => Form::Vector(elements),
        })
    }

    /// Next token by value; end of input reads as `Eof` forever
    fn advance(&mut self) -> Token {
        let end = self.end;
        self.tokens
            .next()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, String::new(), end))
    }
}

/// Reads every form in `source`
///
/// Separators around and between forms are skipped. Empty or separator-only
/// input yields an empty vector. The first error aborts the whole read.
pub fn parse(source: &str) -> Result<Vec<Form>> {
    let result = SExprScanner::new(source)
        .scan_tokens()
        .and_then(|tokens| SExprParser::new(tokens).parse());

    match &result {
        Ok(forms) => tracing::debug!(forms = forms.len(), "parsed source"),
        Err(error) => tracing::debug!(%error, "parse failed"),
    }
    result
}
