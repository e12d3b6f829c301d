use std::fmt::{self, Display, Formatter};

use cursor::{Col, Line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

/// Expression tree built by the parser. Every node remembers the position of
/// the token it was created from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    /// The literal is kept exactly as written, e.g. `-0.50`.
    Number { value: &'a str, line: Line, col: Col },
    Binary { operator: Operator, left: Box<Expr<'a>>, right: Box<Expr<'a>>, line: Line, col: Col },
}

impl<'a> Expr<'a> {
    pub fn number(value: &'a str, line: Line, col: Col) -> Self {
        Expr::Number { value, line, col }
    }

    pub fn binary(operator: Operator, left: Expr<'a>, right: Expr<'a>, line: Line, col: Col) -> Self {
        Expr::Binary { operator, left: Box::new(left), right: Box::new(right), line, col }
    }

    pub fn line(&self) -> Line {
        match self {
            Expr::Number { line, .. } | Expr::Binary { line, .. } => *line,
        }
    }

    pub fn col(&self) -> Col {
        match self {
            Expr::Number { col, .. } | Expr::Binary { col, .. } => *col,
        }
    }
}

impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number { value, .. } => write!(f, "{}", value),
            Expr::Binary { operator, left, right, .. } => {
                write!(f, "({} {} {})", operator, left, right)
            }
        }
    }
}
