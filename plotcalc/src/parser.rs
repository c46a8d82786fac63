use crate::error::SyntaxError;
use crate::ops::Operator;
use crate::token::{parse_number, Token};
use lexers::{MathToken, MathTokenizer};
use log::debug;
use std::ops::Deref;
use std::str::FromStr;

/// An expression in postfix order, holding only numbers and operators.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr {
    pub tokens: Vec<Token>,
    /// Text the tokens were read from, quoted back in errors.
    pub source: String,
}

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl RPNExpr {
    pub fn new(tokens: Vec<Token>, source: &str) -> Self {
        RPNExpr { tokens, source: source.to_string() }
    }

    /// Space separated postfix text, e.g. `2 3 ^`.
    pub fn postfix(&self) -> String {
        self.tokens
            .iter()
            .map(|token| match *token {
                Token::Number(n) => n.to_string(),
                Token::Operator(op) => op.symbol.to_string(),
                Token::LeftParen => "(".to_string(),
                Token::RightParen => ")".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Read postfix text directly: each whitespace separated word is an
/// operator symbol or a number.
impl FromStr for RPNExpr {
    type Err = SyntaxError;
    fn from_str(src: &str) -> Result<RPNExpr, SyntaxError> {
        let mut out = Vec::new();
        let words = src.split_whitespace().collect::<Vec<_>>();
        for &word in words.iter() {
            match word {
                "(" | ")" => return Err(SyntaxError::UnknownToken(word.to_string())),
                _ => match Operator::lookup(word) {
                    Some(op) => out.push(Token::Operator(op)),
                    None => out.push(Token::Number(parse_number(word)?)),
                },
            }
        }
        Ok(RPNExpr::new(out, &words.join(" ")))
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, SyntaxError> {
        Self::parse(&mut MathTokenizer::new(expr))
    }

    pub fn parse(lex: &mut impl Iterator<Item = MathToken>) -> Result<RPNExpr, SyntaxError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut source = Vec::new();

        for lexeme in lex {
            source.push(lexeme.to_string());
            match Token::from_lexeme(lexeme)? {
                token @ Token::Number(_) => out.push(token),
                Token::LeftParen => stack.push(Token::LeftParen),
                Token::RightParen => loop {
                    match stack.pop() {
                        Some(Token::LeftParen) => break, // peel matching paren
                        Some(token) => out.push(token),
                        None => return Err(SyntaxError::MissingOParen),
                    }
                },
                Token::Operator(op) => {
                    while let Some(&Token::Operator(top)) = stack.last() {
                        if !op.flushes(top) {
                            break;
                        }
                        out.push(Token::Operator(top));
                        stack.pop();
                    }
                    stack.push(Token::Operator(op));
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::LeftParen => return Err(SyntaxError::MissingCParen),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr::new(out, &source.join(" "));
        debug!("postfix: \"{}\"", rpn.postfix());
        Ok(rpn)
    }
}
