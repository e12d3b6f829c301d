use cursor::Cursor;
use errors::{DiagnosticKind, Result};

pub mod token;
pub use token::{Token, TokenType};
use TokenType::*;

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token<'a>>,
}

/// Splits `source` into tokens, ending with a single `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>> {
    Scanner::new(source).scan_tokens()
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), tokens: Vec::new() }
    }

    fn add_token(&mut self, ty: TokenType, start: &Cursor<'a>) {
        let token = Token::new(ty, start.slice_until(&self.cursor), start.line(), start.col());
        log::trace!("Scanned {:?} '{}' at {}:{}", token.ty, token, token.line, token.col);
        self.tokens.push(token);
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token<'a>>> {
        loop {
            self.cursor.advance_while(is_whitespace);

            let start = self.cursor.clone();
            let Some(c) = self.cursor.next() else {
                break;
            };

            let ty = match c {
                '+' => Plus,
                '*' => Star,
                '/' => Slash,

                // RPN has no unary minus, so a '-' directly followed by a digit
                // can only be the sign of a number literal.
                '-' if self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) => self.number(),
                '-' => Minus,

                d if d.is_ascii_digit() => self.number(),

                c => {
                    return Err(DiagnosticKind::UnexpectedCharacter(c).at(start.line(), start.col()))
                }
            };

            self.add_token(ty, &start);
        }

        self.tokens.push(Token::eof(self.cursor.line(), self.cursor.col()));
        log::debug!("Scanned {} tokens", self.tokens.len());

        Ok(self.tokens)
    }

    fn number(&mut self) -> TokenType {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.next(); // '.'
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        Number
    }
}

#[cfg(test)]
mod tests {
    use cursor::{Col, Line};
    use errors::Diagnostic;
    use pretty_assertions::assert_eq;

    use super::*;

    fn token(ty: TokenType, lexeme: &str, line: usize, col: usize) -> Token<'_> {
        Token::new(ty, lexeme, Line(line), Col(col))
    }

    fn eof(line: usize, col: usize) -> Token<'static> {
        Token::eof(Line(line), Col(col))
    }

    #[test]
    fn tokens_display_their_lexeme() {
        let tokens = tokenize("-0.50 7 /").unwrap();
        let printed: Vec<_> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(printed, vec!["-0.50", "7", "/", ""]);
    }

    #[test]
    fn empty_source() {
        assert_eq!(tokenize("").unwrap(), vec![eof(1, 1)]);
        assert_eq!(tokenize("  \t").unwrap(), vec![eof(1, 4)]);
    }

    #[test]
    fn operators() {
        assert_eq!(
            tokenize("+ - * /").unwrap(),
            vec![
                token(Plus, "+", 1, 1),
                token(Minus, "-", 1, 3),
                token(Star, "*", 1, 5),
                token(Slash, "/", 1, 7),
                eof(1, 8),
            ]
        );
    }

    #[test]
    fn number_literals() {
        assert_eq!(
            tokenize("5 3.14 -2 -0.50 100").unwrap(),
            vec![
                token(Number, "5", 1, 1),
                token(Number, "3.14", 1, 3),
                token(Number, "-2", 1, 8),
                token(Number, "-0.50", 1, 11),
                token(Number, "100", 1, 17),
                eof(1, 20),
            ]
        );
    }

    #[test]
    fn minus_needs_digit_to_be_a_sign() {
        assert_eq!(
            tokenize("5 3 -").unwrap(),
            vec![token(Number, "5", 1, 1), token(Number, "3", 1, 3), token(Minus, "-", 1, 5), eof(1, 6)]
        );
        assert_eq!(
            tokenize("- 3").unwrap(),
            vec![token(Minus, "-", 1, 1), token(Number, "3", 1, 3), eof(1, 4)]
        );
        assert_eq!(
            tokenize("5-3").unwrap(),
            vec![token(Number, "5", 1, 1), token(Number, "-3", 1, 2), eof(1, 4)]
        );
    }

    #[test]
    fn operators_need_no_surrounding_whitespace() {
        assert_eq!(
            tokenize("1 2+").unwrap(),
            vec![token(Number, "1", 1, 1), token(Number, "2", 1, 3), token(Plus, "+", 1, 4), eof(1, 5)]
        );
    }

    #[test]
    fn positions_across_lines() {
        assert_eq!(
            tokenize("5\n  3\r\n+\n").unwrap(),
            vec![
                token(Number, "5", 1, 1),
                token(Number, "3", 2, 3),
                token(Plus, "+", 3, 1),
                eof(4, 1),
            ]
        );
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(
            tokenize("2 3 ^").unwrap_err(),
            Diagnostic::new(DiagnosticKind::UnexpectedCharacter('^'), Line(1), Col(5))
        );
        assert_eq!(
            tokenize("1 2 +\n3 @").unwrap_err(),
            Diagnostic::new(DiagnosticKind::UnexpectedCharacter('@'), Line(2), Col(3))
        );
    }

    #[test]
    fn stops_at_first_invalid_character() {
        assert_eq!(
            tokenize("a b").unwrap_err(),
            Diagnostic::new(DiagnosticKind::UnexpectedCharacter('a'), Line(1), Col(1))
        );
    }

    #[test]
    fn incomplete_decimal_is_not_a_number() {
        // "3." scans the "3" and then fails on the dangling dot.
        assert_eq!(
            tokenize("3.").unwrap_err(),
            Diagnostic::new(DiagnosticKind::UnexpectedCharacter('.'), Line(1), Col(2))
        );
        assert_eq!(
            tokenize(".5").unwrap_err(),
            Diagnostic::new(DiagnosticKind::UnexpectedCharacter('.'), Line(1), Col(1))
        );
        assert_eq!(
            tokenize("1e5").unwrap_err(),
            Diagnostic::new(DiagnosticKind::UnexpectedCharacter('e'), Line(1), Col(2))
        );
    }

    #[test]
    fn non_ascii_characters_count_as_one_column() {
        assert_eq!(
            tokenize("5 é").unwrap_err(),
            Diagnostic::new(DiagnosticKind::UnexpectedCharacter('é'), Line(1), Col(3))
        );
    }
}
