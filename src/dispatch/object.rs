//! Object left operands.
//!
//! Objects are greater than arrays. Against numbers they are converted to integer, which the
//! language reports and which makes the comparison undecidable. Two objects compare by their
//! properties, which the evaluator does not see: only the same instance is known to be equal.

use crate::error::EvalError;
use crate::ops::comparison;
use crate::ops::identity::Kinds;
use crate::value::Value;

use super::{is_boolish, Call};

pub(super) fn object_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let Value::Object(left) = *call.left else {
        return Ok(None);
    };
    let compared = match right {
        Value::Object(right_object) => match call.ctx.same_object(left, *right_object) {
            Some(true) => comparison::same(call.op),
            _ => comparison::unknown(call.op),
        },
        Value::Null | Value::Bool(_) => call.compare_truths(right),
        _ => return Ok(None),
    };
    call.cascade(compared, right)
}

pub(super) fn any_object_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let kinds = Kinds::of(right);
    let compared = if is_boolish(kinds) {
        call.compare_truths(right)
    } else if kinds == Kinds::OBJECT || kinds == Kinds::STRING {
        // A string is compared with the result of `__toString`.
        comparison::unknown(call.op)
    } else if kinds == Kinds::ARRAY {
        comparison::left_greater(call.op)
    } else if kinds.is_within(Kinds::NUMERIC | Kinds::RESOURCE) {
        call.compare_object_with_number()
    } else {
        return Ok(None);
    };
    call.cascade(compared, right)
}
