//! Arithmetic family: `+`, `-`, `*`, `/`.
//!
//! Integer arithmetic is 32-bit. A result that does not fit is promoted to float rather than
//! wrapped, for single values and for range bounds alike. Division of two integers stays an
//! integer only when it is exact. Division by zero is not a number at all: the result is `false`
//! and a `DIVISION_BY_ZERO` warning is emitted.

use log::debug;

use crate::context::EvaluationContext;
use crate::convert::Number;
use crate::operator::Operator;
use crate::ops::{warn_with, Num};
use crate::value::Value;
use crate::warning::Warning;

/// Evaluates an arithmetic operator on numeric projections, or `None` if `op` is not arithmetic.
pub fn arithmetic(ctx: &mut dyn EvaluationContext, op: Operator, left: Num, right: Num) -> Option<Value> {
    let result = match op {
        Operator::Add => add(left, right),
        Operator::Sub => sub(left, right),
        Operator::Mul => mul(left, right),
        Operator::Div => div(ctx, left, right),
        _ => return None,
    };
    Some(result)
}

/// `false` plus a division-by-zero warning.
pub fn division_by_zero(ctx: &mut dyn EvaluationContext) -> Value {
    warn_with(ctx, Warning::division_by_zero(), Value::Bool(false))
}

/// Any value plus a possible-division-by-zero warning.
pub fn possible_division_by_zero(ctx: &mut dyn EvaluationContext) -> Value {
    warn_with(ctx, Warning::possible_division_by_zero(), Value::ANY)
}

/// Result kind when a side is unbounded: float arithmetic stays float, anything else may be either.
fn unbounded(left: Num, right: Num) -> Option<Value> {
    let is_float = |n: Num| matches!(n, Num::Float { .. } | Num::AnyFloat);
    match (left, right) {
        (Num::AnyFloat, _) | (_, Num::AnyFloat) => Some(Value::ANY_FLOAT),
        (Num::Unknown, other) | (other, Num::Unknown) if is_float(other) => Some(Value::ANY_FLOAT),
        (Num::Unknown, _) | (_, Num::Unknown) => Some(Value::ANY_NUMERIC),
        _ => None,
    }
}

/// Integer range result, promoted to a float range when it leaves the `i32` domain.
fn int_range(lo: i64, hi: i64) -> Value {
    if lo >= i32::MIN as i64 && hi <= i32::MAX as i64 {
        Value::int_interval(lo as i32, hi as i32)
    } else {
        debug!("int range [{}, {}] overflows, promoting to float", lo, hi);
        Value::float_interval(lo as f64, hi as f64)
    }
}

/// Float range spanned by `candidates`, or any float if one of them is NaN.
///
/// Only sound for corner candidates of monotone operations: a NaN reached inside the ranges
/// (`0 * inf`, `inf - inf`) must be ruled out by the caller.
fn float_range(candidates: &[f64]) -> Value {
    if candidates.iter().any(|c| c.is_nan()) {
        return Value::ANY_FLOAT;
    }
    let lo = candidates.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = candidates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Value::float_interval(lo, hi)
}

fn add(left: Num, right: Num) -> Value {
    if let Some(value) = unbounded(left, right) {
        return value;
    }
    match (left.as_point(), right.as_point()) {
        (Some(Number::Int(a)), Some(Number::Int(b))) => {
            return a.checked_add(b).map_or(Value::float(a as f64 + b as f64), Value::Int);
        }
        (Some(a), Some(b)) => return Value::float(a.to_f64() + b.to_f64()),
        _ => {}
    }
    match (left, right) {
        (Num::Int(a), Num::Int(b)) => int_range(
            a.start() as i64 + b.start() as i64,
            a.end() as i64 + b.end() as i64,
        ),
        _ => {
            let ((llo, lhi), (rlo, rhi)) = bounds(left, right);
            if (lhi == f64::INFINITY && rlo == f64::NEG_INFINITY)
                || (llo == f64::NEG_INFINITY && rhi == f64::INFINITY)
            {
                // `inf + -inf` is NaN.
                return Value::ANY_FLOAT;
            }
            float_range(&[llo + rlo, lhi + rhi])
        }
    }
}

fn sub(left: Num, right: Num) -> Value {
    if let Some(value) = unbounded(left, right) {
        return value;
    }
    match (left.as_point(), right.as_point()) {
        (Some(Number::Int(a)), Some(Number::Int(b))) => {
            return a.checked_sub(b).map_or(Value::float(a as f64 - b as f64), Value::Int);
        }
        (Some(a), Some(b)) => return Value::float(a.to_f64() - b.to_f64()),
        _ => {}
    }
    match (left, right) {
        (Num::Int(a), Num::Int(b)) => int_range(
            a.start() as i64 - b.end() as i64,
            a.end() as i64 - b.start() as i64,
        ),
        _ => {
            let ((llo, lhi), (rlo, rhi)) = bounds(left, right);
            if (lhi == f64::INFINITY && rhi == f64::INFINITY)
                || (llo == f64::NEG_INFINITY && rlo == f64::NEG_INFINITY)
            {
                // `inf - inf` is NaN.
                return Value::ANY_FLOAT;
            }
            float_range(&[llo - rhi, lhi - rlo])
        }
    }
}

fn mul(left: Num, right: Num) -> Value {
    if let Some(value) = unbounded(left, right) {
        return value;
    }
    match (left.as_point(), right.as_point()) {
        (Some(Number::Int(a)), Some(Number::Int(b))) => {
            return a.checked_mul(b).map_or(Value::float(a as f64 * b as f64), Value::Int);
        }
        (Some(a), Some(b)) => return Value::float(a.to_f64() * b.to_f64()),
        _ => {}
    }
    match (left, right) {
        (Num::Int(a), Num::Int(b)) => {
            let corners = [
                a.start() as i64 * b.start() as i64,
                a.start() as i64 * b.end() as i64,
                a.end() as i64 * b.start() as i64,
                a.end() as i64 * b.end() as i64,
            ];
            let lo = corners.iter().copied().min().unwrap_or(0);
            let hi = corners.iter().copied().max().unwrap_or(0);
            int_range(lo, hi)
        }
        _ => {
            let (l, r) = bounds(left, right);
            if (contains_zero(l) && is_infinite(r)) || (is_infinite(l) && contains_zero(r)) {
                // `0 * inf` is NaN.
                return Value::ANY_FLOAT;
            }
            let ((llo, lhi), (rlo, rhi)) = (l, r);
            float_range(&[llo * rlo, llo * rhi, lhi * rlo, lhi * rhi])
        }
    }
}

fn div(ctx: &mut dyn EvaluationContext, left: Num, right: Num) -> Value {
    if right.is_zero() {
        return division_by_zero(ctx);
    }
    if right.may_be_zero() {
        return possible_division_by_zero(ctx);
    }
    if let Some(value) = unbounded(left, right) {
        return value;
    }
    match (left.as_point(), right.as_point()) {
        (Some(Number::Int(a)), Some(Number::Int(b))) => {
            return match (a.checked_rem(b), a.checked_div(b)) {
                (Some(0), Some(q)) => Value::Int(q),
                _ => Value::float(a as f64 / b as f64),
            };
        }
        (Some(a), Some(b)) => return Value::float(a.to_f64() / b.to_f64()),
        // Zero over a nonzero integer is an exact quotient.
        (Some(Number::Int(0)), None) if matches!(right, Num::Int(_)) => return Value::Int(0),
        _ => {}
    }
    // The divisor keeps one sign, so the extremes are among the corner quotients.
    let ((llo, lhi), (rlo, rhi)) = bounds(left, right);
    float_range(&[llo / rlo, llo / rhi, lhi / rlo, lhi / rhi])
}

fn contains_zero((lo, hi): (f64, f64)) -> bool {
    lo <= 0.0 && 0.0 <= hi
}

fn is_infinite((lo, hi): (f64, f64)) -> bool {
    lo.is_infinite() || hi.is_infinite()
}

fn bounds(left: Num, right: Num) -> ((f64, f64), (f64, f64)) {
    let l = left.bounds().unwrap_or((f64::NEG_INFINITY, f64::INFINITY));
    let r = right.bounds().unwrap_or((f64::NEG_INFINITY, f64::INFINITY));
    (l, r)
}
