//! Resource left operands.
//!
//! A resource converts to its positive integer id, which the evaluator does not know: numerically
//! it is somewhere in `[1, i32::MAX]`.

use crate::error::EvalError;
use crate::operator::Operator;
use crate::ops::comparison;
use crate::ops::identity::Kinds;
use crate::value::Value;

use super::{is_boolish, Call};

pub(super) fn resource_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let Value::Resource(left) = *call.left else {
        return Ok(None);
    };
    let op = call.op;
    let compared = match right {
        Value::Resource(right_resource) if left == *right_resource => comparison::same(op),
        // Distinct resources have distinct ids, in an unknown order.
        Value::Resource(_) => match op {
            Operator::Equal => Some(Value::Bool(false)),
            Operator::NotEqual => Some(Value::Bool(true)),
            _ => comparison::unknown(op),
        },
        Value::Null | Value::Bool(_) => call.compare_truths(right),
        Value::Int(_) | Value::Float(_) | Value::String(_) => call.compare_numbers(right),
        _ => return Ok(None),
    };
    call.cascade(compared, right)
}

pub(super) fn any_resource_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let kinds = Kinds::of(right);
    let compared = if is_boolish(kinds) {
        call.compare_truths(right)
    } else if kinds == Kinds::RESOURCE {
        comparison::unknown(call.op)
    } else if kinds == Kinds::ARRAY {
        comparison::right_greater(call.op)
    } else if kinds == Kinds::OBJECT {
        call.compare_object_with_number()
    } else if kinds.is_within(Kinds::NUMERIC | Kinds::STRING) {
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
    use crate::value::{AnyKind, Value};
    use crate::warning::WarningCause;

    fn eval(left: &Value, op: Operator, right: &Value, snapshot: &mut Snapshot) -> Value {
        let config = EvaluatorConfig::default();
        resolve(&mut Call::new(op, left, snapshot, &config), right).unwrap()
    }

    #[test]
    fn test_resource_against_resource() {
        let mut snapshot = Snapshot::new();
        let (a, b) = (snapshot.new_resource(), snapshot.new_resource());
        assert_eq!(eval(&a, Equal, &a, &mut snapshot), Value::Bool(true));
        assert_eq!(eval(&a, Equal, &b, &mut snapshot), Value::Bool(false));
        assert_eq!(eval(&a, NotEqual, &b, &mut snapshot), Value::Bool(true));
        assert_eq!(eval(&a, LessThan, &b, &mut snapshot), Value::ANY_BOOL);
        assert_eq!(eval(&a, Identical, &b, &mut snapshot), Value::Bool(false));
        assert_eq!(eval(&a, Equal, &Value::any(AnyKind::Resource), &mut snapshot), Value::ANY_BOOL);
    }

    #[test]
    fn test_resource_as_number() {
        let mut snapshot = Snapshot::new();
        let resource = snapshot.new_resource();
        assert_eq!(eval(&resource, GreaterThan, &Value::Int(0), &mut snapshot), Value::Bool(true));
        assert_eq!(eval(&resource, Equal, &Value::string("0"), &mut snapshot), Value::Bool(false));
        assert_eq!(eval(&resource, Equal, &Value::Int(3), &mut snapshot), Value::ANY_BOOL);
        assert_eq!(eval(&resource, GreaterThanOrEqual, &Value::int_interval(-5, 1), &mut snapshot), Value::Bool(true));
        assert_eq!(eval(&resource, Equal, &Value::Bool(true), &mut snapshot), Value::Bool(true));
        assert_eq!(eval(&resource, Sub, &Value::Int(1), &mut snapshot), Value::int_interval(0, i32::MAX - 1));
        assert_eq!(eval(&resource, BitAnd, &Value::Int(0), &mut snapshot), Value::Int(0));
        assert_eq!(eval(&resource, Mod, &Value::Int(1), &mut snapshot), Value::Int(0));
        assert!(snapshot.warnings().is_empty());
    }

    #[test]
    fn test_resource_against_compound() {
        let mut snapshot = Snapshot::new();
        let resource = snapshot.new_resource();
        let array = snapshot.new_array(0);
        let object = snapshot.new_object();
        assert_eq!(eval(&resource, LessThan, &array, &mut snapshot), Value::Bool(true));
        assert!(snapshot.warnings().is_empty());
        assert_eq!(eval(&resource, Equal, &object, &mut snapshot), Value::ANY_BOOL);
        assert!(snapshot.has_warning(WarningCause::ObjectConvertedToInteger));
    }
}
