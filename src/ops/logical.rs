//! Logical family: `and`, `or`, `xor`.
//!
//! Both operands are reduced to their truth value first. An unknown truth value (`None`) stands
//! for "either", and the result is concrete whenever every combination agrees: `false and x` is
//! `false` whatever `x` is.

use crate::operator::Operator;
use crate::ops::over_truths;
use crate::value::Value;

/// Evaluates a logical operator on truth values, or `None` if `op` is not logical.
pub fn logical(op: Operator, left: Option<bool>, right: Option<bool>) -> Option<Value> {
    let f: fn(bool, bool) -> bool = match op {
        Operator::And => |a, b| a && b,
        Operator::Or => |a, b| a || b,
        Operator::Xor => |a, b| a ^ b,
        _ => return None,
    };
    Some(over_truths(left, right, f))
}
