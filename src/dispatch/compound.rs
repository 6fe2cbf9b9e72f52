//! Compound left operands of unknown kind.

use crate::error::EvalError;
use crate::ops::comparison;
use crate::ops::identity::Kinds;
use crate::value::Value;

use super::{is_boolish, Call};

pub(super) fn any_compound_rules(call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
    let compared = if is_boolish(Kinds::of(right)) {
        call.compare_truths(right)
    } else {
        comparison::unknown(call.op)
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
    fn test_any_compound() {
        let mut snapshot = Snapshot::new();
        let compound = Value::any(AnyKind::Compound);
        assert_eq!(eval(&compound, Equal, &Value::Int(1), &mut snapshot), Value::ANY_BOOL);
        assert_eq!(eval(&compound, Equal, &Value::Null, &mut snapshot), Value::ANY_BOOL);
        assert_eq!(eval(&compound, GreaterThanOrEqual, &Value::Bool(false), &mut snapshot), Value::Bool(true));
        assert_eq!(eval(&compound, Identical, &Value::Int(1), &mut snapshot), Value::Bool(false));
        assert_eq!(eval(&compound, Xor, &Value::Bool(false), &mut snapshot), Value::ANY_BOOL);
        assert!(snapshot.warnings().is_empty());
    }

    #[test]
    fn test_any_compound_arithmetic() {
        let mut snapshot = Snapshot::new();
        let compound = Value::any(AnyKind::Compound);
        // May be an array, which is not reported.
        assert_eq!(eval(&compound, Add, &Value::Int(1), &mut snapshot), Value::ANY);
        assert!(snapshot.warnings().is_empty());
        let array = snapshot.new_array(1);
        assert_eq!(eval(&compound, Add, &array, &mut snapshot), Value::ANY);
        assert_eq!(eval(&compound, Div, &array, &mut snapshot), Value::ANY);
        assert!(snapshot.has_warning(WarningCause::UnsupportedOperandType));
    }
}
