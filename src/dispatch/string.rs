//! String left operands.
//!
//! Two strings compare numerically when both look like numbers, bytewise otherwise. `null`
//! compares as the empty string. Against a number, the string is read as a number.

use crate::error::EvalError;
use crate::ops::comparison;
use crate::ops::identity::Kinds;
use crate::value::Value;

use super::Call;

pub(super) fn string_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let Value::String(left) = call.left else {
        return Ok(None);
    };
    let compared = match right {
        Value::String(right_value) => comparison::strings(call.op, left, right_value),
        Value::Null => comparison::strings(call.op, left, ""),
        Value::Bool(_) => call.compare_truths(right),
        Value::Int(_) | Value::Float(_) | Value::IntInterval(_) | Value::FloatInterval(_) => {
            call.compare_numbers(right)
        }
        _ => return Ok(None),
    };
    call.cascade(compared, right)
}

/// Rules with an unknown string on at least one side.
pub(super) fn any_string_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let op = call.op;
    let kinds = Kinds::of(right);
    let compared = if kinds == Kinds::STRING || kinds == Kinds::NULL {
        // Nothing is smaller than the empty string, and null is the empty string here.
        match (call.left, right) {
            (Value::String(s), _) if s.is_empty() => comparison::empty_string_against_unknown(op),
            (_, Value::String(s)) if s.is_empty() => comparison::unknown_against_empty_string(op),
            (_, Value::Null) => comparison::unknown_against_empty_string(op),
            _ => comparison::unknown(op),
        }
    } else if kinds == Kinds::BOOL {
        call.compare_truths(right)
    } else if kinds.is_within(Kinds::NUMERIC) {
        call.compare_numbers(right)
    } else {
        return Ok(None);
    };
    call.cascade(compared, right)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::config::EvaluatorConfig;
    use crate::context::Snapshot;
    use crate::dispatch::{resolve, Call};
    use crate::operator::Operator::{self, *};
    use crate::value::Value;
    use crate::warning::WarningCause;

    fn eval(left: Value, op: Operator, right: Value) -> (Value, Snapshot) {
        let mut snapshot = Snapshot::new();
        let config = EvaluatorConfig::default();
        let value = resolve(&mut Call::new(op, &left, &mut snapshot, &config), &right).unwrap();
        (value, snapshot)
    }

    fn s(value: &str) -> Value {
        Value::string(value)
    }

    #[test]
    fn test_string_comparison() {
        assert_eq!(eval(s("10"), Equal, s("1e1")).0, Value::Bool(true));
        assert_eq!(eval(s("abc"), LessThan, s("abd")).0, Value::Bool(true));
        assert_eq!(eval(s("10"), GreaterThan, s("9")).0, Value::Bool(true));
        assert_eq!(eval(s("10a"), GreaterThan, s("9a")).0, Value::Bool(false));
        assert_eq!(eval(s(""), Equal, Value::Null).0, Value::Bool(true));
        assert_eq!(eval(s("0"), Equal, Value::Null).0, Value::Bool(false));
        assert_eq!(eval(s("0"), Equal, Value::Bool(false)).0, Value::Bool(true));
        assert_eq!(eval(s("1.0"), Equal, Value::Int(1)).0, Value::Bool(true));
        assert_eq!(eval(s("abc"), Equal, Value::Int(0)).0, Value::Bool(true));
    }

    #[test]
    fn test_string_arithmetic() {
        assert_eq!(eval(s("12abc"), Add, Value::Int(1)).0, Value::Int(13));
        assert_eq!(eval(s("abc"), Add, Value::Int(1)).0, Value::Int(1));
        assert_eq!(eval(s("1.5"), Add, s("1.5")).0, Value::float(3.0));
        assert_eq!(eval(s("1e3"), Mod, Value::Int(7)).0, Value::Int(1));
        let (value, snapshot) = eval(s("x"), Div, Value::Null);
        assert_eq!(value, Value::Bool(false));
        assert!(snapshot.has_warning(WarningCause::DivisionByZero));
    }

    #[test]
    fn test_string_bitwise() {
        assert_eq!(eval(s("ab"), BitAnd, s("a")).0, s("a"));
        assert_eq!(eval(s("12"), BitAnd, Value::Int(7)).0, Value::Int(4));
        assert_eq!(eval(s("12"), ShiftRight, s("2")).0, Value::Int(3));
    }

    #[test]
    fn test_any_string() {
        assert_eq!(eval(s(""), LessThanOrEqual, Value::ANY_STRING).0, Value::Bool(true));
        assert_eq!(eval(Value::ANY_STRING, LessThan, s("")).0, Value::Bool(false));
        assert_eq!(eval(Value::ANY_STRING, GreaterThanOrEqual, Value::Null).0, Value::Bool(true));
        assert_eq!(eval(Value::ANY_STRING, Equal, s("a")).0, Value::ANY_BOOL);
        assert_eq!(eval(Value::ANY_STRING, Add, Value::Int(1)).0, Value::ANY_NUMERIC);
        assert_eq!(eval(Value::ANY_STRING, BitOr, Value::ANY_STRING).0, Value::ANY_STRING);
        assert_eq!(eval(s("a"), Or, Value::ANY_STRING).0, Value::Bool(true));
    }
}
