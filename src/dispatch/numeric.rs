//! Numeric left operands of unknown type, and rules shared by all numeric dispatchers.

use crate::error::EvalError;
use crate::ops::identity::Kinds;
use crate::value::{AnyKind, Value};

use super::{is_boolish, Call};

/// A number against a null, a bool, a number or a string.
///
/// Returns `None` for any other right operand.
pub(super) fn against_scalar(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let kinds = Kinds::of(right);
    let compared = if is_boolish(kinds) {
        call.compare_truths(right)
    } else if kinds.is_within(Kinds::NUMERIC) || kinds == Kinds::STRING {
        // Strings are read as numbers.
        call.compare_numbers(right)
    } else {
        return Ok(None);
    };
    call.cascade(compared, right)
}

pub(super) fn any_numeric_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    match right {
        Value::Object(_) | Value::Any(AnyKind::Object) => {
            let compared = call.compare_object_with_number();
            call.cascade(compared, right)
        }
        _ => against_scalar(call, right),
    }
}
