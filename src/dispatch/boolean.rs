//! Boolean left operands.
//!
//! A bool compared with anything converts the other side to bool. Arithmetic and the other
//! families see it as `0` or `1`.

use crate::error::EvalError;
use crate::value::{AnyKind, Value};

use super::Call;

pub(super) fn bool_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    match right {
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
            let compared = call.compare_truths(right);
            call.cascade(compared, right)
        }
        _ => Ok(None),
    }
}

pub(super) fn any_bool_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    if call.op.is_comparison() {
        return Ok(call.compare_truths(right));
    }
    match right {
        Value::Null
        | Value::Bool(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::IntInterval(_)
        | Value::FloatInterval(_) => call.families(right),
        Value::Any(kind) if kind.is_within(AnyKind::Scalar) => call.families(right),
        _ => Ok(None),
    }
}
