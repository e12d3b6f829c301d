use cursor::{Col, Line};

mod report;
pub use report::format;

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("error (l. {line}, c. {col}): {kind}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: Line,
    pub col: Col,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum DiagnosticKind {
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("Operator '{0}' requires two operands")]
    NotEnoughOperands(String),
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Invalid RPN: {0} values remain on stack (missing operators?)")]
    TooManyOperands(usize),
}

impl DiagnosticKind {
    pub fn at(self, line: Line, col: Col) -> Diagnostic {
        Diagnostic { kind: self, line, col }
    }
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: Line, col: Col) -> Self {
        Self { kind, line, col }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Renders this diagnostic against the text it was produced from.
    pub fn render(&self, source: &str) -> String {
        format(&self.message(), source, self.line, self.col)
    }
}

pub type Result<T> = std::result::Result<T, Diagnostic>;
