//! Character classes shared by the scanner

/// `0`-`9`
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Characters that may begin a symbol
///
/// `+`, `-` and `.` also prefix numbers; the scanner resolves them with one
/// character of lookahead.
#[inline]
pub fn is_symbol_start(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            '/' | '*' | '!' | '_' | '?' | '$' | '%' | '&' | '=' | '<' | '>'
        )
}

/// Characters permitted after the first character of a symbol or keyword
#[inline]
pub fn is_symbol_continuation(c: char) -> bool {
    is_symbol_start(c) || is_digit(c) || matches!(c, '+' | '-' | '.' | ':' | '#')
}

/// Space, tab, newline or comma
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert!(('0'..='9').all(is_digit));
        assert!(!is_digit('a'));
        assert!(!is_digit('٣')); // non-ASCII digits are not numeric here
    }

    #[test]
    fn test_symbol_start() {
        for c in "azAZ/*!_?$%&=<>".chars() {
            assert!(is_symbol_start(c), "{c:?} should start a symbol");
        }
        for c in "+-.:#09\"()[] ,".chars() {
            assert!(!is_symbol_start(c), "{c:?} should not start a symbol");
        }
    }

    #[test]
    fn test_symbol_continuation() {
        for c in "aZ09+-.:#?!".chars() {
            assert!(is_symbol_continuation(c), "{c:?} should continue a symbol");
        }
        for c in "\"()[] ,\t\n@'`".chars() {
            assert!(!is_symbol_continuation(c), "{c:?} should end a symbol");
        }
    }

    #[test]
    fn test_separators() {
        assert!(" \t\n,".chars().all(is_separator));
        assert!(!is_separator('\r'));
        assert!(!is_separator(';'));
    }
}
