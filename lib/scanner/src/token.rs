use std::fmt::Display;

use cursor::{Col, Line};

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub ty: TokenType,
    pub lexeme: &'a str,
    pub line: Line,
    pub col: Col,
}

impl<'a> Token<'a> {
    pub fn new(ty: TokenType, lexeme: &'a str, line: Line, col: Col) -> Token<'a> {
        Self { ty, lexeme, line, col }
    }

    pub fn eof(line: Line, col: Col) -> Token<'a> {
        Self::new(TokenType::Eof, "", line, col)
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Literals.
    Number,

    // Operators.
    Plus,
    Minus,
    Star,
    Slash,

    Eof,
}
