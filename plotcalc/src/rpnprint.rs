use crate::ops::{Assoc, Func, Operator};
use crate::parser::RPNExpr;
use crate::token::Token;
use std::fmt;

// leaves bind tighter than any operator
const LEAF: (usize, Assoc) = (99, Assoc::Left);

// an already rendered subexpression
struct Fragment {
    text: String,
    prec: (usize, Assoc),
    binary: bool,
}

fn leaf(n: f64) -> Fragment {
    Fragment { text: n.to_string(), prec: LEAF, binary: false }
}

fn unary(op: &Operator, arg: Fragment) -> Fragment {
    let text = if !op.is_negate() {
        format!("{}({})", op.symbol, arg.text)
    } else if arg.binary {
        // prefix operands never need grouping, binary ones always do
        format!("-({})", arg.text)
    } else {
        format!("-{}", arg.text)
    };
    Fragment { text, prec: (op.priority, op.assoc), binary: false }
}

fn binary(op: &Operator, lhs: Fragment, rhs: Fragment) -> Fragment {
    let (prec, assoc) = (op.priority, op.assoc);
    let lh = if prec > lhs.prec.0 || (prec == lhs.prec.0 && assoc != Assoc::Left) {
        format!("({})", lhs.text)
    } else {
        lhs.text
    };
    let rh = if prec > rhs.prec.0 || (prec == rhs.prec.0 && assoc != Assoc::Right) {
        format!("({})", rhs.text)
    } else {
        rhs.text
    };
    Fragment { text: format!("{} {} {}", lh, op.symbol, rh), prec: (prec, assoc), binary: true }
}

impl RPNExpr {
    // None if the postfix stream doesn't reduce to a single expression
    fn infix(&self) -> Option<String> {
        let mut stack: Vec<Fragment> = Vec::new();
        for token in self.iter() {
            let fragment = match *token {
                Token::Number(n) => leaf(n),
                Token::Operator(op) => match op.func {
                    Func::Unary(_) => {
                        let arg = stack.pop()?;
                        unary(op, arg)
                    }
                    Func::Binary(_) => {
                        let rhs = stack.pop()?;
                        let lhs = stack.pop()?;
                        binary(op, lhs, rhs)
                    }
                },
                Token::LeftParen | Token::RightParen => return None,
            };
            stack.push(fragment);
        }
        match stack.len() {
            1 => stack.pop().map(|f| f.text),
            _ => None,
        }
    }
}

/// Infix rendering with only the parentheses precedence requires.
/// Malformed streams print as postfix.
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.infix() {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "{}", self.postfix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{RPNExpr, ShuntingParser};

    fn infix(expr: &str) -> String {
        ShuntingParser::parse_str(expr).unwrap().to_string()
    }

    #[test]
    fn minimal_parens() {
        assert_eq!(infix("2 ^ 3 ^ 2"), "2 ^ 3 ^ 2");
        assert_eq!(infix("(2 ^ 3) ^ 2"), "(2 ^ 3) ^ 2");
        assert_eq!(infix("10 - (2 - 3)"), "10 - (2 - 3)");
        assert_eq!(infix("(10 - 2) - 3"), "10 - 2 - 3");
        assert_eq!(infix("(1 + 2) * 3"), "(1 + 2) * 3");
        assert_eq!(infix("3 - -5"), "3 - -5");
        assert_eq!(infix("-(2 ^ 2)"), "-(2 ^ 2)");
        assert_eq!(infix("-sin(0.5) * 2"), "-sin(0.5) * 2");
    }

    #[test]
    fn function_under_power() {
        // 'sin x ^ 2' means sin(x ^ 2), so a squared sine keeps its parens
        assert_eq!(infix("(sin(1)) ^ 2"), "(sin(1)) ^ 2");
        assert_eq!(infix("sin(1) ^ 2"), "sin(1 ^ 2)");
    }

    #[test]
    fn long_negate_runs() {
        let expr = format!("{}1", "-".repeat(20_000));
        let rpn = ShuntingParser::parse_str(&expr).unwrap();
        assert_eq!(rpn.eval(), Ok(1.0));
        assert_eq!(rpn.to_string(), expr);
        let expr = format!("{}2", "-".repeat(20_001));
        assert_eq!(infix(&expr), expr);
    }

    #[test]
    fn malformed_prints_postfix() {
        let rpn: RPNExpr = "1 2".parse().unwrap();
        assert_eq!(rpn.to_string(), "1 2");
        let rpn: RPNExpr = "+ 1".parse().unwrap();
        assert_eq!(rpn.to_string(), "+ 1");
    }
}
