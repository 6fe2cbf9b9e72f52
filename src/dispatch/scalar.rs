//! Scalar left operands against compound and unconstrained right operands.
//!
//! Reached by every scalar dispatcher once its own table declines the right operand, and by
//! scalars of unknown type.

use crate::error::EvalError;
use crate::ops::comparison;
use crate::ops::identity::Kinds;
use crate::value::Value;

use super::{is_boolish, Call};

pub(super) fn any_scalar_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let op = call.op;
    let (lk, rk) = (Kinds::of(call.left), Kinds::of(right));
    let compared = if rk == Kinds::NULL && lk.intersects(Kinds::STRING) {
        comparison::unknown_against_empty_string(op)
    } else if is_boolish(rk) || is_boolish(lk) {
        call.compare_truths(right)
    } else if lk.intersects(Kinds::NULL | Kinds::BOOL) {
        // A scalar of unknown type may be a bool, which converts the other side.
        comparison::unknown(op)
    } else if rk == Kinds::ARRAY {
        comparison::right_greater(op)
    } else if rk == Kinds::OBJECT && lk.is_within(Kinds::NUMERIC) {
        call.compare_object_with_number()
    } else if rk == Kinds::RESOURCE {
        call.compare_numbers(right)
    } else {
        comparison::unknown(op)
    };
    call.cascade(compared, right)
}
