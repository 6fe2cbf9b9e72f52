//! Integer left operands: `int`, int intervals and any int.

use crate::error::EvalError;
use crate::ops::comparison;
use crate::value::{AnyKind, Value};

use super::numeric::against_scalar;
use super::Call;

pub(super) fn int_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let Value::Int(left) = *call.left else {
        return Ok(None);
    };
    match right {
        Value::Int(right_value) => {
            let compared = comparison::ordered(call.op, left.cmp(right_value));
            call.cascade(compared, right)
        }
        Value::Null | Value::Bool(_) | Value::Float(_) | Value::String(_) => against_scalar(call, right),
        _ => Ok(None),
    }
}

pub(super) fn int_interval_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
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

pub(super) fn any_int_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    match right {
        Value::Any(AnyKind::Int | AnyKind::Float | AnyKind::Numeric | AnyKind::Bool | AnyKind::String) => {
            against_scalar(call, right)
        }
        _ => Ok(None),
    }
}
