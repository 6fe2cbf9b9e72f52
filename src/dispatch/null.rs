//! `null` left operand.
//!
//! `null` is the empty string when compared with a string and `false` when compared with anything
//! else. In arithmetic it is `0`.

use crate::error::EvalError;
use crate::ops::comparison;
use crate::ops::identity::Kinds;
use crate::value::Value;

use super::Call;

pub(super) fn null_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let op = call.op;
    let compared = match right {
        Value::Null => comparison::same(op),
        Value::String(s) => comparison::strings(op, "", s),
        // Either a string compared with "", or anything else compared with false: both agree that
        // null is the smallest value.
        _ if Kinds::of(right).intersects(Kinds::STRING) => comparison::empty_string_against_unknown(op),
        _ => call.compare_truths(right),
    };
    call.cascade(compared, right)
}
