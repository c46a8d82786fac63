use std::fmt;

pub use lexers::NEGATE;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy)]
pub enum Func {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

/// One entry of the operator table.
pub struct Operator {
    pub symbol: &'static str,
    pub priority: usize, // higher binds tighter
    pub assoc: Assoc,
    pub func: Func,
}

fn add(l: f64, r: f64) -> f64 { l + r }
fn sub(l: f64, r: f64) -> f64 { l - r }
fn mul(l: f64, r: f64) -> f64 { l * r }
fn div(l: f64, r: f64) -> f64 { l / r }
fn neg(o: f64) -> f64 { -o }
fn cot(o: f64) -> f64 { 1.0 / o.tan() }

macro_rules! op {
    ($sym:expr, $prio:expr, $assoc:ident, $kind:ident($f:expr)) => {
        Operator { symbol: $sym, priority: $prio, assoc: Assoc::$assoc, func: Func::$kind($f) }
    };
}

// Every operator lives here. Unary operators are all prefix.
pub static OPERATORS: &[Operator] = &[
    op!("+", 2, Left, Binary(add)),
    op!("-", 2, Left, Binary(sub)),
    op!("*", 3, Left, Binary(mul)),
    op!("/", 3, Left, Binary(div)),
    op!("^", 4, Right, Binary(f64::powf)),
    op!("sin", 4, Right, Unary(f64::sin)),
    op!("cos", 4, Right, Unary(f64::cos)),
    op!("tan", 4, Right, Unary(f64::tan)),
    op!("cot", 4, Right, Unary(cot)),
    op!("ctg", 4, Right, Unary(cot)),
    op!("ln", 4, Right, Unary(f64::ln)),
    op!(NEGATE, 5, Right, Unary(neg)),
];

impl Operator {
    pub fn lookup(symbol: &str) -> Option<&'static Operator> {
        OPERATORS.iter().find(|op| op.symbol == symbol)
    }

    pub fn arity(&self) -> usize {
        match self.func {
            Func::Unary(_) => 1,
            Func::Binary(_) => 2,
        }
    }

    pub fn is_negate(&self) -> bool {
        self.symbol == NEGATE
    }

    // Should 'top', sitting on the operator stack, be emitted before self?
    // Prefix operators have no left operand so they never flush the stack.
    pub fn flushes(&self, top: &Operator) -> bool {
        match (self.arity(), self.assoc) {
            (1, _) => false,
            (_, Assoc::Left) => self.priority <= top.priority,
            (_, Assoc::Right) => self.priority < top.priority,
        }
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Operator) -> bool {
        self.symbol == other.symbol
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Operator({:?})", self.symbol)
    }
}
