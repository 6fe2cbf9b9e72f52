//! Bitwise family: `&`, `|`, `^`, `<<`, `>>`.
//!
//! Operands are integer projections (strings are read base 10, see
//! [`str_to_int`](crate::convert::str_to_int)). Shift counts are taken modulo 32. Two strings
//! combined with `&`, `|` or `^` are combined byte by byte instead, see [`strings`].

use crate::operator::Operator;
use crate::ops::int_point;
use crate::value::{Interval, Value};

/// Evaluates a bitwise operator on integer projections, or `None` if `op` is not bitwise.
pub fn bitwise(op: Operator, left: Interval<i32>, right: Interval<i32>) -> Option<Value> {
    if !op.is_bitwise() {
        return None;
    }
    if let (Some(a), Some(b)) = (int_point(left), int_point(right)) {
        return apply(op, a, b).map(Value::Int);
    }
    let range = match op {
        Operator::BitAnd => and_range(left, right),
        Operator::BitOr => or_range(left, right),
        Operator::BitXor => xor_range(left, right),
        Operator::ShiftLeft => shl_range(left, right),
        Operator::ShiftRight => shr_range(left, right),
        _ => None,
    };
    Some(range.map_or(Value::ANY_INT, |(lo, hi)| Value::int_interval(lo, hi)))
}

/// Result of a bitwise operator when nothing is known about the operands.
pub fn unknown(op: Operator) -> Option<Value> {
    op.is_bitwise().then_some(Value::ANY_INT)
}

fn apply(op: Operator, a: i32, b: i32) -> Option<i32> {
    match op {
        Operator::BitAnd => Some(a & b),
        Operator::BitOr => Some(a | b),
        Operator::BitXor => Some(a ^ b),
        Operator::ShiftLeft => Some(a.wrapping_shl(b as u32)),
        Operator::ShiftRight => Some(a.wrapping_shr(b as u32)),
        _ => None,
    }
}

/// Smallest all-ones mask covering every non-negative value up to `max`.
fn mask(max: i32) -> i32 {
    u32::MAX.checked_shr((max as u32).leading_zeros()).unwrap_or(0) as i32
}

fn and_range(left: Interval<i32>, right: Interval<i32>) -> Option<(i32, i32)> {
    if int_point(left) == Some(0) || int_point(right) == Some(0) {
        return Some((0, 0));
    }
    match (left.start() >= 0, right.start() >= 0) {
        (true, true) => Some((0, left.end().min(right.end()))),
        (true, false) => Some((0, left.end())),
        (false, true) => Some((0, right.end())),
        // Both negative: the sign bit survives and the result is below both operands.
        (false, false) if left.end() < 0 && right.end() < 0 => Some((i32::MIN, left.end().min(right.end()))),
        (false, false) => None,
    }
}

/// `x | 0` and `x ^ 0` are `x`.
fn zero_identity(left: Interval<i32>, right: Interval<i32>) -> Option<(i32, i32)> {
    match (int_point(left), int_point(right)) {
        (_, Some(0)) => Some((left.start(), left.end())),
        (Some(0), _) => Some((right.start(), right.end())),
        _ => None,
    }
}

fn or_range(left: Interval<i32>, right: Interval<i32>) -> Option<(i32, i32)> {
    if let Some(range) = zero_identity(left, right) {
        return Some(range);
    }
    if left.start() >= 0 && right.start() >= 0 {
        let hi = mask(left.end().max(right.end()));
        return Some((left.start().max(right.start()), hi));
    }
    if left.end() < 0 && right.end() < 0 {
        return Some((left.start().max(right.start()), -1));
    }
    None
}

fn xor_range(left: Interval<i32>, right: Interval<i32>) -> Option<(i32, i32)> {
    if let Some(range) = zero_identity(left, right) {
        return Some(range);
    }
    if left.start() >= 0 && right.start() >= 0 {
        return Some((0, mask(left.end().max(right.end()))));
    }
    None
}

fn shl_range(left: Interval<i32>, right: Interval<i32>) -> Option<(i32, i32)> {
    let count = int_point(right)? as u32 % 32;
    let lo = (left.start() as i64) << count;
    let hi = (left.end() as i64) << count;
    if lo >= i32::MIN as i64 && hi <= i32::MAX as i64 {
        Some((lo as i32, hi as i32))
    } else {
        None
    }
}

fn shr_range(left: Interval<i32>, right: Interval<i32>) -> Option<(i32, i32)> {
    let count = int_point(right)? as u32 % 32;
    Some((left.start() >> count, left.end() >> count))
}

/// Combines two strings byte by byte with `&`, `|` or `^`.
///
/// `&` and `^` stop at the end of the shorter string, `|` keeps the tail of the longer one.
/// Returns `None` for the shifts, which always convert to integers. A result that is not valid
/// UTF-8 cannot be represented and is reported as any string.
pub fn strings(op: Operator, left: &str, right: &str) -> Option<Value> {
    let (a, b) = (left.as_bytes(), right.as_bytes());
    let bytes: Vec<u8> = match op {
        Operator::BitAnd => a.iter().zip(b).map(|(x, y)| x & y).collect(),
        Operator::BitXor => a.iter().zip(b).map(|(x, y)| x ^ y).collect(),
        Operator::BitOr => {
            let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
            let mut bytes = long.to_vec();
            for (byte, other) in bytes.iter_mut().zip(short) {
                *byte |= other;
            }
            bytes
        }
        _ => return None,
    };
    Some(String::from_utf8(bytes).map_or(Value::ANY_STRING, Value::String))
}
