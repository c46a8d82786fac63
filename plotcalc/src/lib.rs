//! Evaluate infix math expressions with an optional free variable `x`.
//!
//! The pipeline is normalize -> bracket check -> shunting-yard -> RPN eval,
//! each stage failing fast with a [`CalcError`].

extern crate lexers;

pub use error::{CalcError, ErrorKind, SyntaxError};
pub use normalize::{beautify, check_brackets, normalize};
pub use ops::{Assoc, Func, Operator, NEGATE, OPERATORS};
pub use parser::{RPNExpr, ShuntingParser};
pub use rpneval::eval_rpn;
pub use sweep::{ConfigError, SweepConfig, SweepError};
pub use token::{is_number, Token};

mod error;
mod normalize;
mod ops;
pub mod parser;
mod rpneval;
mod rpnprint;
pub mod sweep;
mod token;

use log::debug;

/// Normalize, check brackets and convert to postfix.
pub fn compile(expr: &str) -> Result<RPNExpr, CalcError> {
    let normalized = normalize(expr);
    debug!("infix: \"{}\" normalized: \"{}\"", expr, normalized);
    check_brackets(&normalized)?;
    Ok(ShuntingParser::parse_str(&normalized)?)
}

pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    compile(expr)?.eval()
}

/// Replace every `x`/`X` with the parenthesized value, `x ^ 2` at -2.5
/// becomes `(-2.5) ^ 2`.
pub fn substitute(expr: &str, x: f64) -> String {
    expr.replace(['x', 'X'], &format!("({})", x))
}

pub fn evaluate_at(expr: &str, x: f64) -> Result<f64, CalcError> {
    evaluate(&substitute(expr, x))
}
