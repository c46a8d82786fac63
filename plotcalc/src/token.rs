use crate::error::SyntaxError;
use crate::ops::Operator;
use lexers::{MathToken, Scanner};

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    Operator(&'static Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Classify a lexeme, rejecting anything that's neither a valid number
    /// nor a known operator.
    pub fn from_lexeme(lexeme: MathToken) -> Result<Token, SyntaxError> {
        match lexeme {
            MathToken::Number(ref num) => Ok(Token::Number(parse_number(num)?)),
            MathToken::Op(ref sym) => Operator::lookup(sym)
                .map(Token::Operator)
                .ok_or_else(|| SyntaxError::UnknownToken(sym.clone())),
            MathToken::OParen => Ok(Token::LeftParen),
            MathToken::CParen => Ok(Token::RightParen),
            // a variable must be substituted before evaluation
            MathToken::Variable(name) | MathToken::Unknown(name) => {
                Err(SyntaxError::UnknownToken(name))
            }
        }
    }
}

// match -?(0|[1-9][0-9]*)(\.[0-9]+)?(E-?[1-9][0-9]*)?
pub fn is_number(text: &str) -> bool {
    let mut s = Scanner::new(text);
    s.accept('-');
    if s.accept('0').is_none() {
        if s.accept_any(&DIGITS[1..]).is_none() {
            return false;
        }
        s.skip_all(DIGITS);
    }
    if s.accept('.').is_some() && !s.skip_all(DIGITS) {
        return false;
    }
    if s.accept('E').is_some() {
        s.accept('-');
        if s.accept_any(&DIGITS[1..]).is_none() {
            return false;
        }
        s.skip_all(DIGITS);
    }
    s.is_done()
}

pub fn parse_number(text: &str) -> Result<f64, SyntaxError> {
    if !is_number(text) {
        return Err(SyntaxError::InvalidOperand(text.to_string()));
    }
    text.parse::<f64>()
        .map_err(|_| SyntaxError::InvalidOperand(text.to_string()))
}
