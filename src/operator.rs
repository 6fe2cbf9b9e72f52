//! Binary operators and their families.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseOperatorError;

/// Binary operator of the analyzed language.
///
/// String concatenation is not a binary operation of this evaluator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    Identical,
    NotIdentical,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    And,
    Or,
    Xor,
}

/// Operator family. Families partition the operators.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Family {
    Identity,
    Comparison,
    Arithmetic,
    Modulo,
    Bitwise,
    Logical,
}

impl Operator {
    pub const ALL: [Operator; 21] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::Identical,
        Operator::NotIdentical,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::BitAnd,
        Operator::BitOr,
        Operator::BitXor,
        Operator::ShiftLeft,
        Operator::ShiftRight,
        Operator::And,
        Operator::Or,
        Operator::Xor,
    ];

    pub fn family(self) -> Family {
        match self {
            Operator::Identical | Operator::NotIdentical => Family::Identity,
            Operator::Equal
            | Operator::NotEqual
            | Operator::LessThan
            | Operator::LessThanOrEqual
            | Operator::GreaterThan
            | Operator::GreaterThanOrEqual => Family::Comparison,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => Family::Arithmetic,
            Operator::Mod => Family::Modulo,
            Operator::BitAnd | Operator::BitOr | Operator::BitXor | Operator::ShiftLeft | Operator::ShiftRight => {
                Family::Bitwise
            }
            Operator::And | Operator::Or | Operator::Xor => Family::Logical,
        }
    }

    pub fn is_comparison(self) -> bool {
        self.family() == Family::Comparison
    }

    pub fn is_arithmetic(self) -> bool {
        self.family() == Family::Arithmetic
    }

    pub fn is_bitwise(self) -> bool {
        self.family() == Family::Bitwise
    }

    pub fn is_logical(self) -> bool {
        self.family() == Family::Logical
    }

    /// Arithmetic, modulo and bitwise operators all need numeric operands.
    pub fn is_numeric(self) -> bool {
        matches!(self.family(), Family::Arithmetic | Family::Modulo | Family::Bitwise)
    }

    /// The comparison `op'` such that `a op b == b op' a`.
    ///
    /// Returns `None` for operators that are not comparisons.
    pub fn swapped(self) -> Option<Operator> {
        match self {
            Operator::Equal => Some(Operator::Equal),
            Operator::NotEqual => Some(Operator::NotEqual),
            Operator::LessThan => Some(Operator::GreaterThan),
            Operator::LessThanOrEqual => Some(Operator::GreaterThanOrEqual),
            Operator::GreaterThan => Some(Operator::LessThan),
            Operator::GreaterThanOrEqual => Some(Operator::LessThanOrEqual),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Identical => "===",
            Operator::NotIdentical => "!==",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Xor => "xor",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "==" => Operator::Equal,
            "!=" | "<>" => Operator::NotEqual,
            "===" => Operator::Identical,
            "!==" => Operator::NotIdentical,
            "<" => Operator::LessThan,
            "<=" => Operator::LessThanOrEqual,
            ">" => Operator::GreaterThan,
            ">=" => Operator::GreaterThanOrEqual,
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "/" => Operator::Div,
            "%" => Operator::Mod,
            "&" => Operator::BitAnd,
            "|" => Operator::BitOr,
            "^" => Operator::BitXor,
            "<<" => Operator::ShiftLeft,
            ">>" => Operator::ShiftRight,
            "&&" | "and" => Operator::And,
            "||" | "or" => Operator::Or,
            "xor" => Operator::Xor,
            _ => return Err(ParseOperatorError(s.to_string())),
        };
        Ok(op)
    }
}
