use crate::error::{CalcError, SyntaxError};
use crate::ops::{Func, Operator};
use crate::parser::RPNExpr;
use crate::token::Token;
use log::trace;

fn underflow(op: &Operator, rpn: &RPNExpr) -> SyntaxError {
    SyntaxError::StackUnderflow {
        token: op.symbol.to_string(),
        expr: rpn.source.clone(),
    }
}

impl RPNExpr {
    /// Run the postfix stream on a value stack. The result must be the only
    /// value left and must be finite.
    pub fn eval(&self) -> Result<f64, CalcError> {
        let mut operands = Vec::new();

        for token in self.iter() {
            match *token {
                Token::Number(num) => operands.push(num),
                Token::Operator(op) => {
                    let value = match op.func {
                        Func::Unary(f) => {
                            let o = operands.pop().ok_or_else(|| underflow(op, self))?;
                            f(o)
                        }
                        Func::Binary(f) => {
                            let r = operands.pop().ok_or_else(|| underflow(op, self))?;
                            let l = operands.pop().ok_or_else(|| underflow(op, self))?;
                            f(l, r)
                        }
                    };
                    trace!("{} -> {}", op.symbol, value);
                    operands.push(value);
                }
                Token::LeftParen => return Err(SyntaxError::UnknownToken("(".to_string()).into()),
                Token::RightParen => return Err(SyntaxError::UnknownToken(")".to_string()).into()),
            }
        }
        let result = operands.pop().ok_or(SyntaxError::Empty)?;
        if !operands.is_empty() {
            return Err(SyntaxError::DanglingOperands(self.source.clone()).into());
        }
        if !result.is_finite() {
            return Err(CalcError::NumericDomain(result));
        }
        Ok(result)
    }
}

/// Evaluate space separated postfix text, e.g. `2 3 ^ 1 -`.
pub fn eval_rpn(src: &str) -> Result<f64, CalcError> {
    src.parse::<RPNExpr>()?.eval()
}
