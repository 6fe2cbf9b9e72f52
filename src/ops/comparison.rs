//! Comparison family: `==`, `!=`, `<`, `<=`, `>`, `>=`.
//!
//! Loose comparison converts operands before comparing. Which conversion applies depends on the
//! operand types and is chosen by the dispatcher:
//!
//! - [`booleans`] when either side is a bool or null,
//! - [`strings`] for two strings (numerically when both look like numbers),
//! - [`numbers`] for numbers and numeric projections of strings.
//!
//! Over ranges, a comparison is decided only when it holds (or fails) for every pair of members;
//! otherwise the result is any bool.

use std::cmp::Ordering;

use crate::convert::{scan_number, Number};
use crate::operator::Operator;
use crate::ops::{over_truths, Num};
use crate::value::Value;

/// Evaluates a comparison operator on a decided ordering; `None` ordering means unordered (NaN).
pub fn holds(op: Operator, ordering: Option<Ordering>) -> bool {
    match op {
        Operator::Equal => ordering == Some(Ordering::Equal),
        Operator::NotEqual => ordering != Some(Ordering::Equal),
        Operator::LessThan => ordering == Some(Ordering::Less),
        Operator::LessThanOrEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        Operator::GreaterThan => ordering == Some(Ordering::Greater),
        Operator::GreaterThanOrEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        _ => false,
    }
}

/// Comparison result for a known ordering, or `None` if `op` is not a comparison.
pub fn ordered(op: Operator, ordering: Ordering) -> Option<Value> {
    op.is_comparison().then(|| Value::Bool(holds(op, Some(ordering))))
}

/// The left operand is greater than anything on the right.
pub fn left_greater(op: Operator) -> Option<Value> {
    ordered(op, Ordering::Greater)
}

/// The right operand is greater than anything on the left.
pub fn right_greater(op: Operator) -> Option<Value> {
    ordered(op, Ordering::Less)
}

/// Both operands denote the same entity.
pub fn same(op: Operator) -> Option<Value> {
    ordered(op, Ordering::Equal)
}

/// Undecidable comparison: any bool.
pub fn unknown(op: Operator) -> Option<Value> {
    op.is_comparison().then_some(Value::ANY_BOOL)
}

/// Compares after converting both sides to bool (`false < true`).
pub fn booleans(op: Operator, left: Option<bool>, right: Option<bool>) -> Option<Value> {
    if !op.is_comparison() {
        return None;
    }
    Some(over_truths(left, right, |a, b| holds(op, Some(a.cmp(&b)))))
}

pub fn compare_numbers(left: Number, right: Number) -> Option<Ordering> {
    match (left, right) {
        (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
        (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
    }
}

/// Compares numeric projections.
pub fn numbers(op: Operator, left: Num, right: Num) -> Option<Value> {
    if !op.is_comparison() {
        return None;
    }
    if let (Some(a), Some(b)) = (left.as_point(), right.as_point()) {
        return Some(Value::Bool(holds(op, compare_numbers(a, b))));
    }
    let (Some((llo, lhi)), Some((rlo, rhi))) = (left.bounds(), right.bounds()) else {
        return Some(Value::ANY_BOOL);
    };
    if llo.is_nan() || rlo.is_nan() {
        // A NaN point against a range: unordered with every member.
        return Some(Value::Bool(holds(op, None)));
    }
    let decided = match op {
        Operator::Equal | Operator::NotEqual => {
            let equal = if lhi < rlo || rhi < llo {
                Some(false)
            } else if llo == lhi && rlo == rhi && llo == rlo {
                Some(true)
            } else {
                None
            };
            if op == Operator::Equal {
                equal
            } else {
                equal.map(|b| !b)
            }
        }
        Operator::LessThan => decide(lhi < rlo, llo >= rhi),
        Operator::LessThanOrEqual => decide(lhi <= rlo, llo > rhi),
        Operator::GreaterThan => decide(llo > rhi, lhi <= rlo),
        Operator::GreaterThanOrEqual => decide(llo >= rhi, lhi < rlo),
        _ => None,
    };
    Some(decided.map_or(Value::ANY_BOOL, Value::Bool))
}

fn decide(always: bool, never: bool) -> Option<bool> {
    if always {
        Some(true)
    } else if never {
        Some(false)
    } else {
        None
    }
}

/// Ordering of two strings: numeric if both are numeric strings, bytewise otherwise.
pub fn compare_strings(left: &str, right: &str) -> Option<Ordering> {
    let (a, b) = (scan_number(left, true), scan_number(right, true));
    if a.has_digits && a.is_whole && b.has_digits && b.is_whole {
        compare_numbers(a.number, b.number)
    } else {
        Some(left.as_bytes().cmp(right.as_bytes()))
    }
}

pub fn strings(op: Operator, left: &str, right: &str) -> Option<Value> {
    op.is_comparison().then(|| Value::Bool(holds(op, compare_strings(left, right))))
}

/// Compares the empty string (left) with an unknown string (right).
///
/// The empty string is not numeric, so the comparison is bytewise and `""` is the smallest string.
pub fn empty_string_against_unknown(op: Operator) -> Option<Value> {
    match op {
        Operator::LessThanOrEqual => Some(Value::Bool(true)),
        Operator::GreaterThan => Some(Value::Bool(false)),
        _ => unknown(op),
    }
}

/// Mirror of [`empty_string_against_unknown`]: an unknown string (left) against `""` (right).
pub fn unknown_against_empty_string(op: Operator) -> Option<Value> {
    empty_string_against_unknown(op.swapped()?)
}
