use super::classify::{is_digit, is_separator, is_symbol_continuation, is_symbol_start};
use super::token::{Token, TokenKind};
use crate::error::{Error, Position, Result};
use crate::parser::{Exponent, ExponentMarker, FloatLiteral, IntegerLiteral, Sign};

/// Scanner for S-expression source text
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start index of current token
    start: usize,
    /// Start position of current token
    start_position: Position,
    /// Current index in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl SExprScanner {
    /// Creates a new S-expression scanner from source code
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            start_position: Position::new(0, 1, 1),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    ///
    /// Separators are dropped; the last token is always [`TokenKind::Eof`].
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_position = self.position();
            self.scan_token()?;
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), self.position()));

        tracing::debug!(tokens = self.tokens.len(), "scanned source");
        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            c if is_separator(c) => {}

            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '[' => self.add_token(TokenKind::LeftBracket),
            ']' => self.add_token(TokenKind::RightBracket),

            '"' => self.scan_string()?,
            ':' => self.scan_keyword()?,

            // A sign is only numeric when a digit follows right away
            '+' | '-' => {
                if is_digit(self.peek()) {
                    let sign = if c == '+' { Sign::Plus } else { Sign::Minus };
                    self.scan_number(Some(sign))?;
                } else {
                    self.scan_symbol();
                }
            }
            '.' => self.scan_symbol(),

            c if is_digit(c) => self.scan_number(None)?,
            c if is_symbol_start(c) => self.scan_symbol(),

            _ => {
                return Err(Error::InvalidCharacter {
                    character: c,
                    position: self.start_position,
                });
            }
        }

        Ok(())
    }

    fn scan_string(&mut self) -> Result<()> {
        let mut value = String::new();

        loop {
            if self.is_at_end() {
                return Err(Error::UnterminatedString {
                    position: self.start_position,
                });
            }

            match self.advance() {
                '"' => break,
                '\\' if self.peek() == '"' => {
                    value.push('\\');
                    value.push(self.advance());
                }
                c => value.push(c),
            }
        }

        self.add_token(TokenKind::String(value));
        Ok(())
    }

    fn scan_keyword(&mut self) -> Result<()> {
        while is_symbol_continuation(self.peek()) {
            self.advance();
        }

        if self.current - self.start == 1 {
            return Err(Error::EmptyKeyword {
                position: self.start_position,
            });
        }

        let text = self.lexeme();
        self.add_token(TokenKind::Keyword(text));
        Ok(())
    }

    /// Maximal munch, then classify: `true`/`false` only when the whole token matches
    fn scan_symbol(&mut self) {
        while is_symbol_continuation(self.peek()) {
            self.advance();
        }

        let text = self.lexeme();
        let kind = match text.as_str() {
            "true" => TokenKind::Boolean(true),
            "false" => TokenKind::Boolean(false),
            _ => TokenKind::Symbol(text),
        };
        self.add_token(kind);
    }

    /// Scans a number whose optional sign is already consumed.
    ///
    /// Without a sign the first digit has been consumed as well.
    fn scan_number(&mut self, sign: Option<Sign>) -> Result<()> {
        let digits_start = if sign.is_some() {
            self.current
        } else {
            self.current - 1
        };
        self.skip_digits();
        let integer_part = self.slice(digits_start, self.current);

        if self.peek() != '.' {
            self.expect_number_end()?;
            let mut literal = IntegerLiteral::new(integer_part);
            if let Some(sign) = sign {
                literal = literal.with_sign(sign);
            }
            self.add_token(TokenKind::Integer(literal));
            return Ok(());
        }

        self.advance(); // consume .
        if !is_digit(self.peek()) {
            return Err(self.malformed_number("expected a digit after the decimal point"));
        }
        let decimal_start = self.current;
        self.skip_digits();
        let decimal_part = self.slice(decimal_start, self.current);

        let mut literal = FloatLiteral::new(integer_part, decimal_part);
        if let Some(sign) = sign {
            literal = literal.with_sign(sign);
        }
        if let Some(exponent) = self.scan_exponent()? {
            literal = literal.with_exponent(exponent);
        }

        self.expect_number_end()?;
        self.add_token(TokenKind::Float(literal));
        Ok(())
    }

    /// Once `e`/`E` is seen the exponent is committed: digits must follow
    fn scan_exponent(&mut self) -> Result<Option<Exponent>> {
        let marker = match self.peek() {
            'e' => ExponentMarker::Lower,
            'E' => ExponentMarker::Upper,
            _ => return Ok(None),
        };
        self.advance();

        let sign = match self.peek() {
            '+' => Some(Sign::Plus),
            '-' => Some(Sign::Minus),
            _ => None,
        };
        if sign.is_some() {
            self.advance();
        }

        if !is_digit(self.peek()) {
            return Err(self.malformed_number("expected exponent digits"));
        }
        let digits_start = self.current;
        self.skip_digits();

        let mut exponent = Exponent::new(marker, self.slice(digits_start, self.current));
        if let Some(sign) = sign {
            exponent = exponent.with_sign(sign);
        }
        Ok(Some(exponent))
    }

    fn expect_number_end(&self) -> Result<()> {
        let next = self.peek();
        if !self.is_at_end() && is_symbol_continuation(next) {
            return Err(self.malformed_number(format!("unexpected {:?} after number", next)));
        }
        Ok(())
    }

    fn malformed_number(&self, reason: impl Into<String>) -> Error {
        Error::MalformedNumber {
            reason: reason.into(),
            position: self.position(),
        }
    }

    fn skip_digits(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn position(&self) -> Position {
        Position::new(self.current, self.line, self.column)
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn slice(&self, from: usize, to: usize) -> String {
        self.source[from..to].iter().collect()
    }

    fn lexeme(&self) -> String {
        self.slice(self.start, self.current)
    }

    fn add_token(&mut self, kind: TokenKind) {
        tracing::trace!(?kind, offset = self.start, "token");
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(kind, lexeme, self.start_position));
    }
}
