//! Root of every dispatcher chain: left operands of any kind, or right operands no other table
//! handles.
//!
//! Every comparison and every operator family yields a result here, so resolution never runs off
//! the chain for a modelled value.

use crate::error::EvalError;
use crate::ops::comparison;
use crate::ops::identity::Kinds;
use crate::value::Value;

use super::{is_boolish, Call};

pub(super) fn any_value_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let op = call.op;
    let (lk, rk) = (Kinds::of(call.left), Kinds::of(right));
    let compared = if rk == Kinds::NULL && lk.intersects(Kinds::STRING) {
        comparison::unknown_against_empty_string(op)
    } else if is_boolish(lk) || is_boolish(rk) {
        call.compare_truths(right)
    } else {
        comparison::unknown(op)
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

    fn eval(left: &Value, op: Operator, right: &Value, snapshot: &mut Snapshot) -> Value {
        let config = EvaluatorConfig::default();
        resolve(&mut Call::new(op, left, snapshot, &config), right).unwrap()
    }

    #[test]
    fn test_any_value() {
        let mut snapshot = Snapshot::new();
        assert_eq!(eval(&Value::ANY, GreaterThanOrEqual, &Value::Null, &mut snapshot), Value::Bool(true));
        assert_eq!(eval(&Value::ANY, LessThan, &Value::Null, &mut snapshot), Value::Bool(false));
        assert_eq!(eval(&Value::ANY, Equal, &Value::Null, &mut snapshot), Value::ANY_BOOL);
        assert_eq!(eval(&Value::ANY, LessThanOrEqual, &Value::Bool(true), &mut snapshot), Value::Bool(true));
        assert_eq!(eval(&Value::ANY, Equal, &Value::ANY, &mut snapshot), Value::ANY_BOOL);
        assert_eq!(eval(&Value::ANY, Identical, &Value::ANY, &mut snapshot), Value::ANY_BOOL);
    }

    #[test]
    fn test_any_value_families() {
        let mut snapshot = Snapshot::new();
        assert_eq!(eval(&Value::ANY, Mul, &Value::Int(0), &mut snapshot), Value::ANY);
        assert_eq!(eval(&Value::ANY, Or, &Value::Bool(true), &mut snapshot), Value::Bool(true));
        assert_eq!(eval(&Value::ANY, And, &Value::Null, &mut snapshot), Value::Bool(false));
        assert_eq!(eval(&Value::ANY, BitAnd, &Value::Int(0), &mut snapshot), Value::Int(0));
        assert_eq!(eval(&Value::ANY, ShiftRight, &Value::Int(31), &mut snapshot), Value::int_interval(-1, 0));
        // Might be an array: nothing to report for modulo either.
        assert_eq!(eval(&Value::ANY, Mod, &Value::Int(0), &mut snapshot), Value::ANY);
        assert!(snapshot.warnings().is_empty());
    }
}
