use serde::{Deserialize, Serialize};
use std::fmt;

/// Explicit sign written in front of a number or exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

impl Sign {
    /// The sign as it appears in source
    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

fn write_sign(f: &mut fmt::Formatter, sign: Option<Sign>) -> fmt::Result {
    match sign {
        Some(sign) => write!(f, "{}", sign),
        None => Ok(()),
    }
}

/// Exponent label, `e` or `E`, kept as written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExponentMarker {
    /// `e`
    Lower,
    /// `E`
    Upper,
}

impl fmt::Display for ExponentMarker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExponentMarker::Lower => write!(f, "e"),
            ExponentMarker::Upper => write!(f, "E"),
        }
    }
}

/// Exponent suffix of a float: label, optional sign and digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exponent {
    /// `e` or `E`
    pub label: ExponentMarker,
    /// Sign written after the label, if any
    pub sign: Option<Sign>,
    /// Exponent digits (never empty)
    pub digits: String,
}

impl Exponent {
    /// Creates an unsigned exponent
    pub fn new(label: ExponentMarker, digits: impl Into<String>) -> Self {
        Exponent {
            label,
            sign: None,
            digits: digits.into(),
        }
    }

    /// Same exponent with the given sign
    pub fn with_sign(self, sign: Sign) -> Self {
        Exponent {
            sign: Some(sign),
            ..self
        }
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label)?;
        write_sign(f, self.sign)?;
        write!(f, "{}", self.digits)
    }
}

/// Integer literal captured as text; leading zeros are kept
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegerLiteral {
    /// Sign written in front of the digits, if any
    pub sign: Option<Sign>,
    /// Digits (never empty)
    pub digits: String,
}

impl IntegerLiteral {
    /// Creates an unsigned integer literal
    pub fn new(digits: impl Into<String>) -> Self {
        IntegerLiteral {
            sign: None,
            digits: digits.into(),
        }
    }

    /// Same literal with the given sign
    pub fn with_sign(self, sign: Sign) -> Self {
        IntegerLiteral {
            sign: Some(sign),
            ..self
        }
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_sign(f, self.sign)?;
        write!(f, "{}", self.digits)
    }
}

/// Float literal captured as text: `[sign] integer . decimal [exponent]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatLiteral {
    /// Sign written in front of the number, if any
    pub sign: Option<Sign>,
    /// Digits before the decimal point (never empty)
    pub integer_part: String,
    /// Digits after the decimal point (never empty)
    pub decimal_part: String,
    /// Exponent suffix, if any
    pub exponent: Option<Exponent>,
}

impl FloatLiteral {
    /// Creates an unsigned float literal with no exponent
    pub fn new(integer_part: impl Into<String>, decimal_part: impl Into<String>) -> Self {
        FloatLiteral {
            sign: None,
            integer_part: integer_part.into(),
            decimal_part: decimal_part.into(),
            exponent: None,
        }
    }

    /// Same literal with the given sign
    pub fn with_sign(self, sign: Sign) -> Self {
        FloatLiteral {
            sign: Some(sign),
            ..self
        }
    }

    /// Same literal with the given exponent
    pub fn with_exponent(self, exponent: Exponent) -> Self {
        FloatLiteral {
            exponent: Some(exponent),
            ..self
        }
    }
}

impl fmt::Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_sign(f, self.sign)?;
        write!(f, "{}.{}", self.integer_part, self.decimal_part)?;
        if let Some(exponent) = &self.exponent {
            write!(f, "{}", exponent)?;
        }
        Ok(())
    }
}

/// Collection delimiter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    /// `(` ... `)`, a list
    Paren,
    /// `[` ... `]`, a vector
    Bracket,
}

impl Delimiter {
    /// Opening character
    pub fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
        }
    }

    /// Closing character
    pub fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
        }
    }
}

/// One parsed syntax unit
///
/// Textual fields hold the exact source text; nothing is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form {
    /// Integer literal: `42`, `-007`
    Integer(IntegerLiteral),
    /// Float literal: `1.5`, `+2.0e-3`
    Float(FloatLiteral),
    /// `true` or `false`
    Boolean(bool),
    /// Keyword including the colon: `:name`
    Keyword(String),
    /// Content between the quotes, `\"` kept as two characters
    StringLiteral(String),
    /// Symbol: `foo`, `+`, `set!`
    Symbol(String),
    /// Parenthesized sequence: `(a b c)`
    List(Vec<Form>),
    /// Bracketed sequence: `[a b c]`
    Vector(Vec<Form>),
}

impl Form {
    /// Symbol form
    pub fn symbol(name: impl Into<String>) -> Self {
        Form::Symbol(name.into())
    }

    /// Keyword form; `text` includes the leading colon
    pub fn keyword(text: impl Into<String>) -> Self {
        Form::Keyword(text.into())
    }

    /// String literal form; `text` is the content between the quotes, escapes kept as written
    pub fn string(text: impl Into<String>) -> Self {
        Form::StringLiteral(text.into())
    }

    /// List form
    pub fn list(elements: impl IntoIterator<Item = Form>) -> Self {
        Form::List(elements.into_iter().collect())
    }

    /// Vector form
    pub fn vector(elements: impl IntoIterator<Item = Form>) -> Self {
        Form::Vector(elements.into_iter().collect())
    }

    /// Human-readable name of the form kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Form::Integer(_) => "integer",
            Form::Float(_) => "float",
            Form::Boolean(_) => "boolean",
            Form::Keyword(_) => "keyword",
            Form::StringLiteral(_) => "string",
            Form::Symbol(_) => "symbol",
            Form::List(_) => "list",
            Form::Vector(_) => "vector",
        }
    }

    /// Elements of a list or vector
    pub fn elements(&self) -> Option<&[Form]> {
        match self {
            Form::List(elements) | Form::Vector(elements) => Some(elements),
            _ => None,
        }
    }
}

impl From<IntegerLiteral> for Form {
    fn from(literal: IntegerLiteral) -> Self {
        Form::Integer(literal)
    }
}

impl From<FloatLiteral> for Form {
    fn from(literal: FloatLiteral) -> Self {
        Form::Float(literal)
    }
}

impl From<bool> for Form {
    fn from(value: bool) -> Self {
        Form::Boolean(value)
    }
}

/// Drops nested collections through a work list instead of recursion
impl Drop for Form {
    fn drop(&mut self) {
        let mut pending = match self {
            Form::List(elements) | Form::Vector(elements) if !elements.is_empty() => {
                std::mem::take(elements)
            }
            _ => return,
        };

        while let Some(mut form) = pending.pop() {
            if let Form::List(elements) | Form::Vector(elements) = &mut form {
                pending.append(elements);
            }
        }
    }
}

fn write_elements(f: &mut fmt::Formatter, delimiter: Delimiter, elements: &[Form]) -> fmt::Result {
    write!(f, "{}", delimiter.open())?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", element)?;
    }
    write!(f, "{}", delimiter.close())
}

/// Prints the form back as source text that reads to an equal form
impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Form::Integer(n) => write!(f, "{}", n),
            Form::Float(n) => write!(f, "{}", n),
            Form::Boolean(b) => write!(f, "{}", b),
            Form::Keyword(k) => write!(f, "{}", k),
            Form::StringLiteral(s) => write!(f, "\"{}\"", s),
            Form::Symbol(s) => write!(f, "{}", s),
            Form::List(elements) => write_elements(f, Delimiter::Paren, elements),
            Form::Vector(elements) => write_elements(f, Delimiter::Bracket, elements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_sign_builds_new_value() {
        let unsigned = IntegerLiteral::new("12");
        let signed = unsigned.clone().with_sign(Sign::Minus);
        assert_eq!(unsigned.sign, None);
        assert_eq!(signed.sign, Some(Sign::Minus));
        assert_eq!(signed.digits, "12");
    }

    #[test]
    fn test_number_display() {
        assert_eq!(IntegerLiteral::new("0042").to_string(), "0042");
        let float = FloatLiteral::new("3", "14")
            .with_sign(Sign::Plus)
            .with_exponent(Exponent::new(ExponentMarker::Lower, "10").with_sign(Sign::Minus));
        assert_eq!(float.to_string(), "+3.14e-10");
        assert_eq!(FloatLiteral::new("0", "5").to_string(), "0.5");
    }

    #[test]
    fn test_collection_display() {
        let form = Form::list([
            Form::symbol("def"),
            Form::keyword(":k"),
            Form::vector([Form::from(true), Form::string(r#"a\"b"#)]),
            Form::List(Vec::new()),
        ]);
        assert_eq!(form.to_string(), r#"(def :k [true "a\"b"] ())"#);
    }

    #[test]
    fn test_elements() {
        let form = Form::vector([Form::from(IntegerLiteral::new("1"))]);
        assert_eq!(form.elements().map(<[Form]>::len), Some(1));
        assert_eq!(form.kind_name(), "vector");
        assert_eq!(Form::symbol("x").elements(), None);
    }

    #[test]
    fn test_drop_deeply_nested_form() {
        let mut form = Form::symbol("leaf");
        for i in 0..200_000 {
            form = if i % 2 == 0 {
                Form::List(vec![form])
            } else {
                Form::Vector(vec![form, Form::from(false)])
            };
        }
        drop(form);
    }
}
