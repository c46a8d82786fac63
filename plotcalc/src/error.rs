use thiserror::Error;

/// Malformed input: bad brackets, unknown tokens, operands that don't add up.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("unbalanced brackets in \"{0}\"")]
    UnbalancedBrackets(String),
    #[error("mismatched parenthesis, missing opening paren")]
    MissingOParen,
    #[error("mismatched parenthesis, missing closing paren")]
    MissingCParen,
    #[error("unknown token \"{0}\"")]
    UnknownToken(String),
    #[error("\"{0}\" is not a valid operand")]
    InvalidOperand(String),
    #[error("not enough operands for \"{token}\" in \"{expr}\"")]
    StackUnderflow { token: String, expr: String },
    #[error("operands left without an operator in \"{0}\"")]
    DanglingOperands(String),
    #[error("empty expression")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    NumericDomain,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// The expression is well formed but its value is NaN or infinite.
    #[error("math error: result is {0}")]
    NumericDomain(f64),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            CalcError::Syntax(_) => ErrorKind::Syntax,
            CalcError::NumericDomain(_) => ErrorKind::NumericDomain,
        }
    }
}
