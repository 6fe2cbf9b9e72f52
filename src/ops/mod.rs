//! Operator families.
//!
//! Each family exposes pure functions shaped like `attempt(op, left, right) -> Option<Value>`:
//! `None` means "this operator is not mine" and the caller moves on to the next family. Families
//! never decide anything about operand types; the [dispatchers](crate::dispatch) project the
//! operands first ([`Num`], truth values, integer ranges) and pick the right family entry.

pub mod arithmetic;
pub mod bitwise;
pub mod comparison;
pub mod identity;
pub mod logical;
pub mod modulo;

use crate::context::EvaluationContext;
use crate::convert::{float_to_int, scan_number, Number};
use crate::value::{AnyKind, Interval, Value};

/// Numeric projection of an operand, as seen by arithmetic and comparison.
///
/// A concrete number is a single-point range. The float variant may hold the single point NaN,
/// otherwise `lo <= hi`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Num {
    Int(Interval<i32>),
    Float { lo: f64, hi: f64 },
    /// Any float, NaN and infinities included.
    AnyFloat,
    /// Any int or float.
    Unknown,
}

impl Num {
    pub fn int(value: i32) -> Num {
        Num::Int(Interval::point(value))
    }

    pub fn float(value: f64) -> Num {
        Num::Float { lo: value, hi: value }
    }

    pub fn int_range(start: i32, end: i32) -> Num {
        Num::Int(Interval::new(start, end))
    }

    pub fn from_number(number: Number) -> Num {
        match number {
            Number::Int(v) => Num::int(v),
            Number::Float(v) => Num::float(v),
        }
    }

    /// Numeric projection of a value.
    ///
    /// Arrays have no numeric projection: they must be filtered out by the caller, and are
    /// reported as [`Num::Unknown`] here.
    pub fn of(value: &Value) -> Num {
        match value {
            Value::Null => Num::int(0),
            Value::Bool(b) => Num::int(i32::from(*b)),
            Value::Int(v) => Num::int(*v),
            Value::Float(f) => Num::float(f.0),
            Value::String(s) => Num::from_number(scan_number(s, true).number),
            Value::IntInterval(i) => Num::Int(*i),
            Value::FloatInterval(i) => Num::Float {
                lo: i.start().0,
                hi: i.end().0,
            },
            Value::Object(_) | Value::Any(AnyKind::Object) | Value::Any(AnyKind::Int) => Num::Int(Interval::FULL),
            Value::Resource(_) | Value::Any(AnyKind::Resource) => Num::int_range(1, i32::MAX),
            Value::Any(AnyKind::Bool) => Num::int_range(0, 1),
            Value::Any(AnyKind::Float) => Num::AnyFloat,
            _ => Num::Unknown,
        }
    }

    /// Bounds as floats, or `None` for the unbounded projections.
    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            Num::Int(i) => Some((i.start() as f64, i.end() as f64)),
            Num::Float { lo, hi } => Some((lo, hi)),
            Num::AnyFloat | Num::Unknown => None,
        }
    }

    /// The single number this projection denotes, if any.
    pub fn as_point(self) -> Option<Number> {
        match self {
            Num::Int(i) if i.is_point() => Some(Number::Int(i.start())),
            Num::Float { lo, hi } if lo == hi || (lo.is_nan() && hi.is_nan()) => Some(Number::Float(lo)),
            _ => None,
        }
    }

    /// Returns `true` if zero is a possible value.
    pub fn may_be_zero(self) -> bool {
        match self {
            Num::Int(i) => i.contains(0),
            Num::Float { lo, hi } => lo <= 0.0 && 0.0 <= hi,
            Num::AnyFloat | Num::Unknown => true,
        }
    }

    /// Returns `true` if zero is the only possible value.
    pub fn is_zero(self) -> bool {
        match self.as_point() {
            Some(Number::Int(v)) => v == 0,
            Some(Number::Float(v)) => v == 0.0,
            None => false,
        }
    }

    /// Integer projection: the range of integers the members convert to.
    pub fn to_int_range(self) -> Interval<i32> {
        match self {
            Num::Int(i) => i,
            Num::Float { lo, hi } if lo.is_nan() => {
                debug_assert!(hi.is_nan());
                Interval::point(float_to_int(lo))
            }
            Num::Float { lo, hi } => crate::convert::float_range_to_int(lo, hi),
            Num::AnyFloat | Num::Unknown => Interval::FULL,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Num::Int(i) => Value::int_interval(i.start(), i.end()),
            Num::Float { lo, hi } => match self.as_point() {
                Some(_) => Value::float(lo),
                None => Value::float_interval(lo, hi),
            },
            Num::AnyFloat => Value::ANY_FLOAT,
            Num::Unknown => Value::ANY_NUMERIC,
        }
    }
}

/// Single-value projection of an integer range.
pub fn int_point(range: Interval<i32>) -> Option<i32> {
    if range.is_point() {
        Some(range.start())
    } else {
        None
    }
}

/// Decides `f` over every combination of possible truth values.
///
/// Returns a concrete bool when all combinations agree, any bool otherwise.
pub fn over_truths(left: Option<bool>, right: Option<bool>, f: impl Fn(bool, bool) -> bool) -> Value {
    let mut seen = [false; 2];
    for &a in possible(left) {
        for &b in possible(right) {
            seen[usize::from(f(a, b))] = true;
        }
    }
    match seen {
        [true, true] => Value::ANY_BOOL,
        [_, true] => Value::Bool(true),
        _ => Value::Bool(false),
    }
}

fn possible(truth: Option<bool>) -> &'static [bool] {
    match truth {
        Some(false) => &[false],
        Some(true) => &[true],
        None => &[false, true],
    }
}

/// Emits a warning and returns `value`.
pub fn warn_with(ctx: &mut dyn EvaluationContext, warning: crate::warning::Warning, value: Value) -> Value {
    ctx.emit_warning(warning);
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_num_of_values() {
        assert_eq!(Num::of(&Value::Null), Num::int(0));
        assert_eq!(Num::of(&Value::Bool(true)), Num::int(1));
        assert_eq!(Num::of(&Value::string("0x10")), Num::int(16));
        assert_eq!(Num::of(&Value::string("2.5kg")), Num::float(2.5));
        assert_eq!(Num::of(&Value::ANY_BOOL), Num::int_range(0, 1));
        assert_eq!(Num::of(&Value::ANY_INT), Num::Int(Interval::FULL));
        assert_eq!(Num::of(&Value::ANY_FLOAT), Num::AnyFloat);
        assert_eq!(Num::of(&Value::ANY_STRING), Num::Unknown);
    }

    #[test]
    fn test_num_points_and_zero() {
        assert_eq!(Num::int(3).as_point(), Some(Number::Int(3)));
        assert_eq!(Num::int_range(1, 2).as_point(), None);
        assert!(matches!(Num::float(f64::NAN).as_point(), Some(Number::Float(v)) if v.is_nan()));
        assert!(Num::int(0).is_zero());
        assert!(Num::float(-0.0).is_zero());
        assert!(!Num::int_range(-1, 1).is_zero());
        assert!(Num::int_range(-1, 1).may_be_zero());
        assert!(!Num::int_range(1, 5).may_be_zero());
        assert!(Num::Unknown.may_be_zero());
    }

    #[test]
    fn test_num_into_value() {
        assert_eq!(Num::int(4).into_value(), Value::Int(4));
        assert_eq!(Num::int_range(1, 4).into_value(), Value::int_interval(1, 4));
        assert_eq!(Num::Float { lo: 0.5, hi: 1.5 }.into_value(), Value::float_interval(0.5, 1.5));
        assert!(matches!(Num::float(f64::NAN).into_value(), Value::Float(f) if f.0.is_nan()));
        assert_eq!(Num::Unknown.into_value(), Value::ANY_NUMERIC);
    }

    #[test]
    fn test_over_truths() {
        assert_eq!(over_truths(Some(true), Some(false), |a, b| a && b), Value::Bool(false));
        assert_eq!(over_truths(None, Some(false), |a, b| a && b), Value::Bool(false));
        assert_eq!(over_truths(None, Some(true), |a, b| a && b), Value::ANY_BOOL);
        assert_eq!(over_truths(None, None, |a, b| a || !b || b), Value::Bool(true));
    }

    #[test]
    fn test_num_int_projection() {
        assert_eq!(Num::float(2.9).to_int_range(), Interval::point(2));
        assert_eq!(Num::float(f64::NAN).to_int_range(), Interval::point(0));
        assert_eq!(Num::AnyFloat.to_int_range(), Interval::FULL);
    }
}
