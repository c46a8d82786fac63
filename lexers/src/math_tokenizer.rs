#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

/// Symbol the tokenizer emits for a unary minus.
pub const NEGATE: &str = "±";

#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Unknown(String),
    Number(String), // literal text, validated by the consumer
    Op(String),     // operator symbol or function name
    Variable(String),
    OParen, CParen,
}

impl MathToken {
    pub fn lexeme(&self) -> &str {
        match *self {
            MathToken::Unknown(ref s) | MathToken::Number(ref s) |
            MathToken::Op(ref s) | MathToken::Variable(ref s) => s,
            MathToken::OParen => "(",
            MathToken::CParen => ")",
        }
    }
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

pub struct MathTokenizer {
    src: Scanner,
    prev: Option<MathToken>
}

impl MathTokenizer {
    pub fn new(source: &str) -> Self {
        MathTokenizer{src: Scanner::new(source), prev: None}
    }

    // a minus is unary at the start, after an operator or after '('
    fn makes_unary(prev: &Option<MathToken>) -> bool {
        matches!(*prev, None | Some(MathToken::Op(_)) | Some(MathToken::OParen))
    }

    fn get_token(&mut self) -> Option<MathToken> {
        self.src.ignore_ws(); // discard whatever came before + and spaces
        if let Some(op) = self.src.scan_math_op() {
            match op.as_ref() {
                "(" => Some(MathToken::OParen),
                ")" => Some(MathToken::CParen),
                "-" if Self::makes_unary(&self.prev) => Some(MathToken::Op(NEGATE.to_string())),
                _ => Some(MathToken::Op(op)),
            }
        } else if let Some(id) = self.src.scan_identifier() {
            match id.as_ref() {
                "x" | "X" => Some(MathToken::Variable(id)),
                _ => Some(MathToken::Op(id)),
            }
        } else if let Some(num) = self.src.scan_number() {
            Some(MathToken::Number(num))
        } else if self.src.next().is_some() {
            Some(MathToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl Iterator for MathTokenizer {
    type Item = MathToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        self.prev = token.clone();
        token
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{MathToken, MathTokenizer};

    fn num(n: &str) -> MathToken { MathToken::Number(n.to_string()) }
    fn op(o: &str) -> MathToken { MathToken::Op(o.to_string()) }
    fn var(v: &str) -> MathToken { MathToken::Variable(v.to_string()) }

    #[test]
    fn basic_ops() {
        let lx = MathTokenizer::new("3+4*2/-(1-5)^2^3");
        let expect = vec![
            num("3"), op("+"), num("4"), op("*"), num("2"), op("/"), op("±"),
            MathToken::OParen, num("1"), op("-"), num("5"), MathToken::CParen,
            op("^"), num("2"), op("^"), num("3"),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn functions_and_exponents() {
        let lx = MathTokenizer::new("3.4E-2 * sin(x)/ln (1 E - 5)");
        let expect = vec![
            num("3.4E-2"), op("*"), op("sin"), MathToken::OParen, var("x"),
            MathToken::CParen, op("/"), op("ln"), MathToken::OParen, num("1E-5"),
            MathToken::CParen,
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn unary_ops() {
        let lx = MathTokenizer::new("2---(3)");
        let expect = vec![
            num("2"), op("-"), op("±"), op("±"), MathToken::OParen, num("3"),
            MathToken::CParen,
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);

        let lx = MathTokenizer::new("-5 + cos -1");
        let expect = vec![op("±"), num("5"), op("+"), op("cos"), op("±"), num("1")];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn minus_after_variable_is_binary() {
        let lx = MathTokenizer::new("x - 1 * -X-2");
        let expect = vec![
            var("x"), op("-"), num("1"), op("*"), op("±"), var("X"), op("-"), num("2"),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
        // other names are still operators
        let lx = MathTokenizer::new("ln -1");
        assert_eq!(lx.collect::<Vec<_>>(), vec![op("ln"), op("±"), num("1")]);
    }

    #[test]
    fn negate_symbol_is_read_back() {
        let lx = MathTokenizer::new("± 5 - ± 2");
        let expect = vec![op("±"), num("5"), op("-"), op("±"), num("2")];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }

    #[test]
    fn unknown_chars() {
        let lx = MathTokenizer::new("2 % 3 -1");
        let expect = vec![
            num("2"), MathToken::Unknown("%".to_string()), num("3"), op("-"), num("1"),
        ];
        assert_eq!(lx.collect::<Vec<_>>(), expect);
    }
}
