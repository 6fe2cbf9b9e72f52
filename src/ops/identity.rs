//! Identity family: `===`, `!==`.
//!
//! Identity never converts. Two values are identical when they have the same type and the same
//! value, so operands whose possible types do not overlap are decided without looking any
//! further.

use std::ops::BitOr;

use crate::context::EvaluationContext;
use crate::operator::Operator;
use crate::ops::{comparison, Num};
use crate::value::{AnyKind, Value};

/// Set of runtime types a value may have.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Kinds(u8);

impl Kinds {
    pub const NONE: Kinds = Kinds(0);
    pub const NULL: Kinds = Kinds(1);
    pub const BOOL: Kinds = Kinds(1 << 1);
    pub const INT: Kinds = Kinds(1 << 2);
    pub const FLOAT: Kinds = Kinds(1 << 3);
    pub const STRING: Kinds = Kinds(1 << 4);
    pub const ARRAY: Kinds = Kinds(1 << 5);
    pub const OBJECT: Kinds = Kinds(1 << 6);
    pub const RESOURCE: Kinds = Kinds(1 << 7);

    pub const NUMERIC: Kinds = Kinds(Self::INT.0 | Self::FLOAT.0);
    pub const SCALAR: Kinds = Kinds(Self::BOOL.0 | Self::NUMERIC.0 | Self::STRING.0);
    pub const COMPOUND: Kinds = Kinds(Self::ARRAY.0 | Self::OBJECT.0 | Self::RESOURCE.0);
    pub const ALL: Kinds = Kinds(u8::MAX);

    /// Possible runtime types of `value`.
    ///
    /// Long integers share the integer type.
    pub fn of(value: &Value) -> Kinds {
        match value {
            Value::Null => Kinds::NULL,
            Value::Bool(_) => Kinds::BOOL,
            Value::Int(_) | Value::IntInterval(_) | Value::Long(_) | Value::LongInterval(_) => Kinds::INT,
            Value::Float(_) | Value::FloatInterval(_) => Kinds::FLOAT,
            Value::String(_) => Kinds::STRING,
            Value::Array(_) => Kinds::ARRAY,
            Value::Object(_) => Kinds::OBJECT,
            Value::Resource(_) => Kinds::RESOURCE,
            Value::Any(kind) => Kinds::of_kind(*kind),
        }
    }

    fn of_kind(kind: AnyKind) -> Kinds {
        match kind {
            AnyKind::Value => Kinds::ALL,
            AnyKind::Scalar => Kinds::SCALAR,
            AnyKind::Numeric => Kinds::NUMERIC,
            AnyKind::Int | AnyKind::Long => Kinds::INT,
            AnyKind::Float => Kinds::FLOAT,
            AnyKind::Bool => Kinds::BOOL,
            AnyKind::String => Kinds::STRING,
            AnyKind::Compound => Kinds::COMPOUND,
            AnyKind::Array => Kinds::ARRAY,
            AnyKind::Object => Kinds::OBJECT,
            AnyKind::Resource => Kinds::RESOURCE,
        }
    }

    pub fn intersects(self, other: Kinds) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if every type in `self` is also in `other`.
    pub fn is_within(self, other: Kinds) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns `true` if exactly one type is possible.
    pub fn is_single(self) -> bool {
        self.0.count_ones() == 1
    }
}

impl BitOr for Kinds {
    type Output = Kinds;

    fn bitor(self, rhs: Kinds) -> Kinds {
        Kinds(self.0 | rhs.0)
    }
}

/// Evaluates `===` or `!==`, or `None` for any other operator.
pub fn identity(ctx: &dyn EvaluationContext, op: Operator, left: &Value, right: &Value) -> Option<Value> {
    let identical = match op {
        Operator::Identical => identical(ctx, left, right),
        Operator::NotIdentical => match identical(ctx, left, right) {
            Value::Bool(b) => Value::Bool(!b),
            other => other,
        },
        _ => return None,
    };
    Some(identical)
}

fn identical(ctx: &dyn EvaluationContext, left: &Value, right: &Value) -> Value {
    let (lk, rk) = (Kinds::of(left), Kinds::of(right));
    if !lk.intersects(rk) {
        return Value::Bool(false);
    }
    match (left, right) {
        (Value::Null, Value::Null) => Value::Bool(true),
        (Value::Bool(a), Value::Bool(b)) => Value::Bool(a == b),
        (Value::String(a), Value::String(b)) => Value::Bool(a == b),
        (Value::Array(a), Value::Array(b)) if a == b => Value::Bool(true),
        (Value::Object(a), Value::Object(b)) => ctx.same_object(*a, *b).map_or(Value::ANY_BOOL, Value::Bool),
        (Value::Resource(a), Value::Resource(b)) => Value::Bool(a == b),
        // Same single numeric type: identity is numeric equality, NaN included.
        _ if lk == rk && lk.is_within(Kinds::NUMERIC) && lk.is_single() => {
            comparison::numbers(Operator::Equal, Num::of(left), Num::of(right)).unwrap_or(Value::ANY_BOOL)
        }
        _ => Value::ANY_BOOL,
    }
}
