mod expr;

use cursor::{Col, Line};
use errors::{DiagnosticKind, Result};
use itertools::Itertools;
use scanner::{Token, TokenType};

pub use expr::{Expr, Operator};

use TokenType::*;

/// Builds an expression tree from a postfix token sequence.
pub fn parse(tokens: Vec<Token<'_>>) -> Result<Expr<'_>> {
    Parser::new(tokens).parse()
}

#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens }
    }

    pub fn parse(self) -> Result<Expr<'a>> {
        let mut stack: Vec<Expr<'a>> = Vec::new();
        // Only used if the sequence is missing its Eof token.
        let (mut end_line, mut end_col) = (Line(1), Col(1));

        for token in self.tokens {
            let operator = match token.ty {
                Number => {
                    stack.push(Expr::number(token.lexeme, token.line, token.col));
                    log::trace!("Stack: [{}]", stack.iter().join(", "));
                    continue;
                }
                Plus => Operator::Add,
                Minus => Operator::Sub,
                Star => Operator::Mul,
                Slash => Operator::Div,
                Eof => {
                    (end_line, end_col) = (token.line, token.col);
                    break;
                }
            };

            // The most recently pushed value is the right operand.
            let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                return Err(DiagnosticKind::NotEnoughOperands(token.lexeme.to_string())
                    .at(token.line, token.col));
            };

            stack.push(Expr::binary(operator, left, right, token.line, token.col));
            log::trace!("Stack: [{}]", stack.iter().join(", "));
        }

        if stack.len() > 1 {
            return Err(DiagnosticKind::TooManyOperands(stack.len()).at(end_line, end_col));
        }

        let expr = stack.pop().ok_or_else(|| DiagnosticKind::EmptyExpression.at(end_line, end_col))?;
        log::debug!("Parsed {}", expr);
        Ok(expr)
    }
}
