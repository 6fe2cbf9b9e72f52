use php_binop::config::{ArrayArithmeticPolicy, EvaluatorConfig};
use php_binop::context::Snapshot;
use php_binop::error::EvalError;
use php_binop::evaluator::Evaluator;
use php_binop::operator::Operator::{self, *};
use php_binop::value::{AnyKind, Value};
use php_binop::value_set::ValueSet;
use php_binop::warning::WarningCause;

use test_log::test;

fn eval(left: &Value, op: Operator, right: &Value) -> (Value, Snapshot) {
    let mut snapshot = Snapshot::new();
    let value = Evaluator::new().evaluate(&mut snapshot, left, op, right).unwrap();
    (value, snapshot)
}

#[test]
fn test_division_by_zero() {
    for op in [Div, Mod] {
        let (value, snapshot) = eval(&Value::Int(5), op, &Value::Int(0));
        assert_eq!(value, Value::Bool(false), "5 {} 0", op);
        assert!(snapshot.has_warning(WarningCause::DivisionByZero));
    }

    let (value, snapshot) = eval(&Value::Bool(true), Mod, &Value::Bool(false));
    assert_eq!(value, Value::Bool(false));
    assert_eq!(snapshot.warnings()[0].message, "Modulo by zero");

    let (value, snapshot) = eval(&Value::Int(5), Div, &Value::int_interval(-1, 1));
    assert_eq!(value, Value::ANY);
    assert_eq!(snapshot.warnings()[0].message, "Possible division by zero");
}

#[test]
fn test_overflow_promotion() {
    let (value, _) = eval(&Value::Int(i32::MAX), Add, &Value::Int(1));
    assert_eq!(value, Value::float(i32::MAX as f64 + 1.0));
    let (value, _) = eval(&Value::Int(i32::MIN), Sub, &Value::Int(1));
    assert_eq!(value, Value::float(i32::MIN as f64 - 1.0));
    let (value, _) = eval(&Value::Int(65_536), Mul, &Value::Int(65_536));
    assert_eq!(value, Value::float(4_294_967_296.0));
    let (value, _) = eval(&Value::Int(i32::MIN), Div, &Value::Int(-1));
    assert_eq!(value, Value::float(2_147_483_648.0));
    let (value, _) = eval(&Value::int_interval(0, i32::MAX), Add, &Value::Int(1));
    assert_eq!(value, Value::float_interval(1.0, i32::MAX as f64 + 1.0));
}

#[test]
fn test_array_arithmetic() {
    let mut snapshot = Snapshot::new();
    let array = snapshot.new_array(3);
    let value = Evaluator::new().evaluate(&mut snapshot, &array, Add, &Value::Int(5));
    assert_eq!(value, Ok(Value::ANY));
    assert!(snapshot.has_warning(WarningCause::UnsupportedOperandType));

    let strict = Evaluator::with_config(EvaluatorConfig {
        array_arithmetic: ArrayArithmeticPolicy::Reject,
        ..Default::default()
    });
    let value = strict.evaluate(&mut snapshot, &array, Add, &Value::Int(5));
    assert_eq!(
        value,
        Err(EvalError::UnsupportedOperands {
            operator: Add,
            left: "array",
            right: "int",
        })
    );
    // Array union is not arithmetic on an array.
    let other = snapshot.new_array(0);
    let value = strict.evaluate(&mut snapshot, &array, Add, &other);
    assert_eq!(value, Ok(Value::any(AnyKind::Array)));
}

#[test]
fn test_object_with_array_operand() {
    let causes = |snapshot: &mut Snapshot| {
        snapshot.take_warnings().into_iter().map(|w| w.cause).collect::<Vec<_>>()
    };
    let mut snapshot = Snapshot::new();
    let object = snapshot.new_object();
    let array = snapshot.new_array(1);
    let evaluator = Evaluator::new();

    for (left, right) in [(&object, &array), (&array, &object)] {
        let value = evaluator.evaluate(&mut snapshot, left, Mul, right);
        assert_eq!(value, Ok(Value::ANY), "{} * {}", left, right);
        assert_eq!(
            causes(&mut snapshot),
            [WarningCause::ObjectConvertedToInteger, WarningCause::UnsupportedOperandType]
        );
    }

    let value = evaluator.evaluate(&mut snapshot, &object, Mod, &Value::ANY);
    assert_eq!(value, Ok(Value::ANY));
    assert_eq!(causes(&mut snapshot), [WarningCause::ObjectConvertedToInteger]);

    // Comparisons do not convert the object.
    let value = evaluator.evaluate(&mut snapshot, &object, GreaterThan, &array);
    assert_eq!(value, Ok(Value::Bool(true)));
    assert!(snapshot.warnings().is_empty());
}

#[test]
fn test_unbounded_ranges() {
    let (value, _) = eval(&Value::ANY_INT, Add, &Value::Int(0));
    assert_eq!(value, Value::ANY_INT);
    let (value, _) = eval(&Value::ANY_INT, ShiftRight, &Value::Int(0));
    assert_eq!(value, Value::ANY_INT);

    // 0 * inf and inf - inf are NaN.
    let (value, _) = eval(&Value::int_interval(-1, 1), Mul, &Value::float(f64::INFINITY));
    assert_eq!(value, Value::ANY_FLOAT);
    let (value, _) = eval(&Value::float_interval(0.0, f64::INFINITY), Sub, &Value::float(f64::INFINITY));
    assert_eq!(value, Value::ANY_FLOAT);
    let (value, _) = eval(&Value::float_interval(1.0, f64::INFINITY), Mul, &Value::Int(2));
    assert_eq!(value, Value::float_interval(2.0, f64::INFINITY));
}

#[test]
fn test_set_fan_out() {
    let mut snapshot = Snapshot::new();
    let left: ValueSet = [Value::Int(1), Value::Int(2)].into_iter().collect();
    let right: ValueSet = [Value::Int(10), Value::Int(20)].into_iter().collect();
    let result = Evaluator::new().evaluate_all(&mut snapshot, &left, Add, &right).unwrap();
    let expected: ValueSet = [11, 12, 21, 22].into_iter().map(Value::Int).collect();
    assert_eq!(result, expected);

    let right: ValueSet = [Value::Int(0), Value::Int(2)].into_iter().collect();
    let result = Evaluator::new().evaluate_all(&mut snapshot, &left, Div, &right).unwrap();
    let expected: ValueSet = [Value::Bool(false), Value::float(0.5), Value::Int(1)].into_iter().collect();
    assert_eq!(result, expected);
    assert_eq!(snapshot.take_warnings().len(), 2);
}

#[test]
fn test_interval_comparison() {
    let (value, _) = eval(&Value::int_interval(1, 5), LessThan, &Value::Int(10));
    assert_eq!(value, Value::Bool(true));
    let (value, _) = eval(&Value::int_interval(1, 15), LessThan, &Value::Int(10));
    assert_eq!(value, Value::ANY_BOOL);
    let (value, _) = eval(&Value::Int(10), GreaterThanOrEqual, &Value::float_interval(-0.5, 10.0));
    assert_eq!(value, Value::Bool(true));
    let (value, _) = eval(&Value::int_interval(1, 5), Equal, &Value::int_interval(6, 9));
    assert_eq!(value, Value::Bool(false));
}

#[test]
fn test_identity_short_circuit() {
    let mut snapshot = Snapshot::new();
    let array = snapshot.new_array(0);
    let cases = [
        (Value::Int(1), Value::float(1.0), false),
        (Value::string("1"), Value::string("1"), true),
        (Value::Null, Value::Bool(false), false),
        (array.clone(), Value::Int(0), false),
        (Value::any(AnyKind::Array), Value::ANY_STRING, false),
        (array.clone(), array, true),
        (Value::float(f64::NAN), Value::float(f64::NAN), false),
    ];
    let evaluator = Evaluator::new();
    for (left, right, identical) in cases {
        let value = evaluator.evaluate(&mut snapshot, &left, Identical, &right);
        assert_eq!(value, Ok(Value::Bool(identical)), "{} === {}", left, right);
        let value = evaluator.evaluate(&mut snapshot, &left, NotIdentical, &right);
        assert_eq!(value, Ok(Value::Bool(!identical)), "{} !== {}", left, right);
    }
    assert!(snapshot.warnings().is_empty());
}

#[test]
fn test_loose_comparison_table() {
    let cases = [
        (Value::Null, Value::Bool(false), true),
        (Value::Null, Value::string("0"), false),
        (Value::string("0"), Value::Bool(false), true),
        (Value::string("abc"), Value::Int(0), true),
        (Value::string("1e3"), Value::string("1000"), true),
        (Value::string("10"), Value::string("010"), true),
        (Value::Int(1), Value::float(1.0), true),
        (Value::float(f64::NAN), Value::float(f64::NAN), false),
    ];
    for (left, right, equal) in cases {
        let (value, _) = eval(&left, Equal, &right);
        assert_eq!(value, Value::Bool(equal), "{} == {}", left, right);
    }
}

#[test]
fn test_long_integers_are_unsupported() {
    let mut snapshot = Snapshot::new();
    let value = Evaluator::new().evaluate(&mut snapshot, &Value::Long(1), Add, &Value::Int(1));
    assert_eq!(value, Err(EvalError::Unsupported { kind: "long" }));
    let value = Evaluator::new().evaluate(&mut snapshot, &Value::Int(1), Identical, &Value::any(AnyKind::Long));
    assert_eq!(value, Err(EvalError::Unsupported { kind: "any long" }));
}

#[test]
fn test_collapse_results() {
    let mut snapshot = Snapshot::new();
    let left: ValueSet = [Value::Null, Value::ANY].into_iter().collect();
    let right = ValueSet::singleton(Value::Int(1));
    let result = Evaluator::new().evaluate_all(&mut snapshot, &left, Add, &right).unwrap();
    assert_eq!(result, ValueSet::singleton(Value::ANY));
    let right: ValueSet = [Value::Int(0), Value::Int(1)].into_iter().collect();
    let result = Evaluator::new().evaluate_all(&mut snapshot, &left, Equal, &right).unwrap();
    // null == 0 and null == 1 disagree: both booleans merge into any bool.
    assert_eq!(result, ValueSet::singleton(Value::ANY_BOOL));
}
