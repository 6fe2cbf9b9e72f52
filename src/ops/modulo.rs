//! Modulo family: `%`.
//!
//! Both operands are converted to integers first (see [`to_int_range`](crate::convert::to_int_range)).
//! The remainder takes the sign of the dividend. A zero divisor yields `false` with a
//! `DIVISION_BY_ZERO` warning, like division.

use crate::context::EvaluationContext;
use crate::operator::Operator;
use crate::ops::{int_point, warn_with};
use crate::value::{Interval, Value};
use crate::warning::Warning;

/// Evaluates `%` on integer projections, or `None` for any other operator.
pub fn modulo(
    ctx: &mut dyn EvaluationContext,
    op: Operator,
    dividend: Interval<i32>,
    divisor: Interval<i32>,
) -> Option<Value> {
    if op != Operator::Mod {
        return None;
    }
    Some(remainder(ctx, dividend, divisor))
}

/// `false` plus a modulo-by-zero warning.
pub fn modulo_by_zero(ctx: &mut dyn EvaluationContext) -> Value {
    warn_with(ctx, Warning::modulo_by_zero(), Value::Bool(false))
}

/// Any value plus a possible-modulo-by-zero warning.
pub fn possible_modulo_by_zero(ctx: &mut dyn EvaluationContext) -> Value {
    warn_with(ctx, Warning::possible_modulo_by_zero(), Value::ANY)
}

fn remainder(ctx: &mut dyn EvaluationContext, dividend: Interval<i32>, divisor: Interval<i32>) -> Value {
    if int_point(divisor) == Some(0) {
        return modulo_by_zero(ctx);
    }
    if divisor.contains(0) {
        return possible_modulo_by_zero(ctx);
    }
    if let (Some(a), Some(b)) = (int_point(dividend), int_point(divisor)) {
        // `MIN % -1` is 0, not an overflow.
        return Value::Int(a.wrapping_rem(b));
    }
    worst_case(dividend, divisor)
}

/// Bounds of `x % d` over the ranges, knowing `divisor` does not contain zero.
///
/// The remainder is smaller than the divisor in magnitude, no larger than the dividend in
/// magnitude, and has the sign of the dividend.
fn worst_case(dividend: Interval<i32>, divisor: Interval<i32>) -> Value {
    let (d_lo, d_hi) = (divisor.start() as i64, divisor.end() as i64);
    let (min_abs, max_abs) = if d_lo > 0 { (d_lo, d_hi) } else { (-d_hi, -d_lo) };
    let (x_lo, x_hi) = (dividend.start() as i64, dividend.end() as i64);

    if x_lo > -min_abs && x_hi < min_abs {
        // Every dividend is already smaller than every divisor.
        return Value::int_interval(dividend.start(), dividend.end());
    }

    let bound = max_abs - 1;
    let lo = if x_lo >= 0 { 0 } else { x_lo.max(-bound) };
    let hi = if x_hi <= 0 { 0 } else { x_hi.min(bound) };
    Value::int_interval(lo as i32, hi as i32)
}
