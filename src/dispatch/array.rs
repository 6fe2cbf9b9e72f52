//! Array left operands.
//!
//! An array is greater than any scalar except `null` and bools, which convert it to bool, and
//! smaller than any object. Arithmetic with an array is an error of the analyzed program, except
//! `array + array`, which is the union of both arrays.

use crate::error::EvalError;
use crate::ops::comparison;
use crate::ops::identity::Kinds;
use crate::value::Value;

use super::{is_boolish, Call};

pub(super) fn array_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let Value::Array(left) = *call.left else {
        return Ok(None);
    };
    let compared = match right {
        Value::Array(right_array) if left == *right_array => comparison::same(call.op),
        // Element-wise comparison of arrays the evaluator cannot see into.
        Value::Array(_) => comparison::unknown(call.op),
        Value::Null | Value::Bool(_) => call.compare_truths(right),
        _ => return Ok(None),
    };
    call.cascade(compared, right)
}

pub(super) fn any_array_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let kinds = Kinds::of(right);
    let compared = if is_boolish(kinds) {
        call.compare_truths(right)
    } else if kinds == Kinds::ARRAY {
        comparison::unknown(call.op)
    } else if kinds == Kinds::OBJECT {
        comparison::right_greater(call.op)
    } else if kinds.is_within(Kinds::NUMERIC | Kinds::STRING | Kinds::RESOURCE) {
        comparison::left_greater(call.op)
    } else {
        return Ok(None);
    };
    call.cascade(compared, right)
}
