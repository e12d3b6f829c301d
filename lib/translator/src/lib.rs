use errors::Diagnostic;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    #[error("{0}")]
    Scan(Diagnostic),
    #[error("{0}")]
    Parse(Diagnostic),
}

impl TranslateError {
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            TranslateError::Scan(diagnostic) | TranslateError::Parse(diagnostic) => diagnostic,
        }
    }

    /// Formats the error with the offending line of `source` and a caret under
    /// the reported column. `source` must be the text passed to [`translate`].
    pub fn report(&self, source: &str) -> String {
        self.diagnostic().render(source)
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Translates a postfix expression into inline LaTeX math.
pub fn translate(source: &str) -> Result<String> {
    let tokens = scanner::tokenize(source).map_err(TranslateError::Scan)?;
    log::debug!("Tokens: {:?}", tokens);

    let expr = parser::parse(tokens).map_err(TranslateError::Parse)?;

    Ok(latex::generate(&expr))
}
