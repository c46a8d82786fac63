use crate::error::SyntaxError;
use lexers::{MathToken, MathTokenizer, NEGATE};

/// Canonical form of an expression: one space between tokens, scientific
/// exponents glued (`1E-5`), and unary minus spelled as the negate symbol.
///
/// Normalizing a normalized string returns it unchanged.
pub fn normalize(expr: &str) -> String {
    MathTokenizer::new(expr)
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Depth-count the parentheses, every `)` needs an open `(` to its left and
/// nothing may be left open at the end.
pub fn check_brackets(normalized: &str) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    for c in normalized.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => {
                return Err(SyntaxError::UnbalancedBrackets(normalized.to_string()))
            }
            ')' => depth -= 1,
            _ => (),
        }
    }
    if depth != 0 {
        return Err(SyntaxError::UnbalancedBrackets(normalized.to_string()));
    }
    Ok(())
}

/// Human facing form, `-(x+1)*sin(x)` -> `-(x + 1) * sin(x)`.
pub fn beautify(expr: &str) -> String {
    let mut out = String::new();
    let mut prev: Option<MathToken> = None;
    for token in MathTokenizer::new(expr) {
        let glued = match (&prev, &token) {
            (None, _) => true,
            (_, MathToken::CParen) => true,
            (Some(MathToken::OParen), _) => true,
            (Some(MathToken::Op(op)), _) if op == NEGATE => true,
            (Some(MathToken::Op(f)), MathToken::OParen) => f.chars().all(char::is_alphabetic),
            _ => false,
        };
        if !glued {
            out.push(' ');
        }
        match token {
            MathToken::Op(ref op) if op == NEGATE => out.push('-'),
            ref other => out.push_str(other.lexeme()),
        }
        prev = Some(token);
    }
    out
}
