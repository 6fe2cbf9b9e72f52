//! Float left operands: `float`, float intervals and any float.

use crate::error::EvalError;
use crate::ops::comparison;
use crate::value::{AnyKind, Value};

use super::numeric::against_scalar;
use super::Call;

pub(super) fn float_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let Value::Float(left) = *call.left else {
        return Ok(None);
    };
    let right_value = match right {
        Value::Float(f) => f.0,
        Value::Int(i) => *i as f64,
        Value::Null | Value::Bool(_) | Value::String(_) => return against_scalar(call, right),
        _ => return Ok(None),
    };
    // NaN is unordered: every comparison but `!=` fails.
    let compared = match left.0.partial_cmp(&right_value) {
        Some(ordering) => comparison::ordered(call.op, ordering),
        None => call.op.is_comparison().then(|| Value::Bool(comparison::holds(call.op, None))),
    };
    call.cascade(compared, right)
}

pub(super) fn float_interval_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    match right {
        Value::Null
        | Value::Bool(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::IntInterval(_)
        | Value::FloatInterval(_) => against_scalar(call, right),
        _ => Ok(None),
    }
}

pub(super) fn any_float_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    match right {
        Value::Any(AnyKind::Int | AnyKind::Float | AnyKind::Numeric | AnyKind::Bool | AnyKind::String) => {
            against_scalar(call, right)
        }
        _ => Ok(None),
    }
}
