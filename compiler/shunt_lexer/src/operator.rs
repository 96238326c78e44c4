//! Static operator metadata.
//!
//! Every operator the language understands is a variant of [`Operator`]. The
//! table answers the questions later stages ask: how tightly an operator
//! binds in its binary and unary forms, whether it groups right-to-left, and
//! how to compute it.

use std::fmt;

/// The closed set of arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// `+`, binary addition or unary identity
    Add,
    /// `-`, binary subtraction or unary negation
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, right-associative exponentiation
    Pow,
    /// `log(base, value)`
    Log,
}

/// Precedence and associativity of one operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    /// Source symbol, e.g. `"^"` or `"log"`
    pub symbol: &'static str,
    /// Precedence of the binary form
    pub binary_precedence: u8,
    /// Precedence of the unary (prefix) form, if the operator has one
    pub unary_precedence: Option<u8>,
    /// Whether chains of this operator group right-to-left
    pub right_associative: bool,
}

const ADD: OperatorSpec = OperatorSpec {
    symbol: "+",
    binary_precedence: 1,
    unary_precedence: Some(2),
    right_associative: false,
};
const SUB: OperatorSpec = OperatorSpec {
    symbol: "-",
    binary_precedence: 1,
    unary_precedence: Some(2),
    right_associative: false,
};
const MUL: OperatorSpec = OperatorSpec {
    symbol: "*",
    binary_precedence: 3,
    unary_precedence: None,
    right_associative: false,
};
const DIV: OperatorSpec = OperatorSpec {
    symbol: "/",
    binary_precedence: 3,
    unary_precedence: None,
    right_associative: false,
};
const POW: OperatorSpec = OperatorSpec {
    symbol: "^",
    binary_precedence: 4,
    unary_precedence: None,
    right_associative: true,
};
// log is placed structurally by its bracket, the precedence is never compared
const LOG: OperatorSpec = OperatorSpec {
    symbol: "log",
    binary_precedence: 5,
    unary_precedence: None,
    right_associative: false,
};

impl Operator {
    /// The table entry for this operator.
    pub const fn spec(self) -> &'static OperatorSpec {
        match self {
            Operator::Add => &ADD,
            Operator::Sub => &SUB,
            Operator::Mul => &MUL,
            Operator::Div => &DIV,
            Operator::Pow => &POW,
            Operator::Log => &LOG,
        }
    }

    /// The source symbol.
    pub const fn symbol(self) -> &'static str {
        self.spec().symbol
    }

    /// Whether operand order can be swapped for memoization.
    ///
    /// Only multiplication is treated as commutative here.
    pub const fn is_commutative(self) -> bool {
        matches!(self, Operator::Mul)
    }

    /// Computes the binary form. Domain errors surface as IEEE infinities
    /// and NaNs rather than failures.
    pub fn apply_binary(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
            Operator::Pow => lhs.powf(rhs),
            // log base lhs of rhs
            Operator::Log => rhs.ln() / lhs.ln(),
        }
    }

    /// Computes the unary form, or `None` for binary-only operators.
    pub fn apply_unary(self, operand: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(operand),
            Operator::Sub => Some(-operand),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The precedence used when `op` sits in an operator stack, picking the
/// unary entry for unary-flagged operators.
pub fn precedence(op: Operator, unary: bool) -> Option<u8> {
    let spec = op.spec();
    if unary {
        spec.unary_precedence
    } else {
        Some(spec.binary_precedence)
    }
}

/// Does the stacked operator `top` execute before the incoming `incoming`?
///
/// A right-associative incoming operator only yields to strictly higher
/// precedence; everything else yields on ties as well, which gives
/// left-to-right grouping.
pub fn executes_before(top: (Operator, bool), incoming: (Operator, bool)) -> bool {
    let (Some(top_prec), Some(incoming_prec)) = (
        precedence(top.0, top.1),
        precedence(incoming.0, incoming.1),
    ) else {
        return false;
    };

    if incoming.0.spec().right_associative {
        top_prec > incoming_prec
    } else {
        top_prec >= incoming_prec
    }
}
