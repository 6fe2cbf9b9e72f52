//! Left-operand dispatch.
//!
//! Evaluating `left op right` is a double dispatch. The shape of the left operand selects a
//! [`Dispatcher`], and the dispatcher's rule table is keyed by the shape of the right operand.
//! A table may decline a right operand (`Ok(None)`), in which case resolution moves to the
//! dispatcher's [parent](Dispatcher::parent), a less specific dispatcher whose rules are written
//! for a wider class of left operands:
//!
//! ```text
//! bool ─ any bool ──────────────────────┐
//! int, int interval ─ any int ──┐       │
//!                               ├─ any numeric ─ any scalar ─┐
//! float, float interval ─ any float ┘   │                    │
//! string ─ any string ──────────────────┘                    ├─ any value
//! array ─ any array ──────┐                                  │
//! object ─ any object ────┼─ any compound ───────────────────┤
//! resource ─ any resource ┘                                  │
//! null ──────────────────────────────────────────────────────┘
//! ```
//!
//! Rules at each level handle right operands at the same level of abstraction: concrete
//! dispatchers handle concrete right operands, interval dispatchers add ranges, "any" dispatchers
//! add unknown values of scalar kinds, and the top of the chain handles compound and
//! unconstrained operands. A parent always sees the actual left operand, so its rules stay exact
//! for a concrete left value.
//!
//! Within a rule, the comparison semantics are chosen by the rule itself (the languages' loose
//! comparison depends on both types), and the remaining operator families are tried in a fixed
//! order by [`Call::cascade`]. Identity operators never reach the tables: they are decided before
//! dispatch, see [`identity`](crate::ops::identity).

mod any_value;
mod array;
mod boolean;
mod compound;
mod float;
mod integer;
mod null;
mod numeric;
mod object;
mod resource;
mod scalar;
mod string;

use std::fmt;

use log::debug;

use crate::config::{ArrayArithmeticPolicy, EvaluatorConfig};
use crate::context::EvaluationContext;
use crate::convert::{to_int_range, to_truth};
use crate::error::EvalError;
use crate::operator::{Family, Operator};
use crate::ops::identity::{identity, Kinds};
use crate::ops::{arithmetic, bitwise, comparison, logical, modulo, Num};
use crate::value::{AnyKind, Interval, Value};
use crate::warning::Warning;

/// Rule table selected by the shape of the left operand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Dispatcher {
    Null,
    Bool,
    AnyBool,
    Int,
    IntInterval,
    AnyInt,
    Float,
    FloatInterval,
    AnyFloat,
    AnyNumeric,
    String,
    AnyString,
    AnyScalar,
    Array,
    AnyArray,
    Object,
    AnyObject,
    Resource,
    AnyResource,
    AnyCompound,
    AnyValue,
}

impl Dispatcher {
    pub const ALL: [Dispatcher; 21] = [
        Dispatcher::Null,
        Dispatcher::Bool,
        Dispatcher::AnyBool,
        Dispatcher::Int,
        Dispatcher::IntInterval,
        Dispatcher::AnyInt,
        Dispatcher::Float,
        Dispatcher::FloatInterval,
        Dispatcher::AnyFloat,
        Dispatcher::AnyNumeric,
        Dispatcher::String,
        Dispatcher::AnyString,
        Dispatcher::AnyScalar,
        Dispatcher::Array,
        Dispatcher::AnyArray,
        Dispatcher::Object,
        Dispatcher::AnyObject,
        Dispatcher::Resource,
        Dispatcher::AnyResource,
        Dispatcher::AnyCompound,
        Dispatcher::AnyValue,
    ];

    /// Selects the dispatcher for a left operand.
    ///
    /// Long integers have no dispatcher.
    pub fn for_value(value: &Value) -> Result<Dispatcher, EvalError> {
        let dispatcher = match value {
            Value::Null => Dispatcher::Null,
            Value::Bool(_) => Dispatcher::Bool,
            Value::Int(_) => Dispatcher::Int,
            Value::IntInterval(_) => Dispatcher::IntInterval,
            Value::Float(_) => Dispatcher::Float,
            Value::FloatInterval(_) => Dispatcher::FloatInterval,
            Value::String(_) => Dispatcher::String,
            Value::Array(_) => Dispatcher::Array,
            Value::Object(_) => Dispatcher::Object,
            Value::Resource(_) => Dispatcher::Resource,
            Value::Long(_) | Value::LongInterval(_) | Value::Any(AnyKind::Long) => {
                return Err(EvalError::Unsupported {
                    kind: value.type_name(),
                })
            }
            Value::Any(AnyKind::Value) => Dispatcher::AnyValue,
            Value::Any(AnyKind::Scalar) => Dispatcher::AnyScalar,
            Value::Any(AnyKind::Numeric) => Dispatcher::AnyNumeric,
            Value::Any(AnyKind::Int) => Dispatcher::AnyInt,
            Value::Any(AnyKind::Float) => Dispatcher::AnyFloat,
            Value::Any(AnyKind::Bool) => Dispatcher::AnyBool,
            Value::Any(AnyKind::String) => Dispatcher::AnyString,
            Value::Any(AnyKind::Compound) => Dispatcher::AnyCompound,
            Value::Any(AnyKind::Array) => Dispatcher::AnyArray,
            Value::Any(AnyKind::Object) => Dispatcher::AnyObject,
            Value::Any(AnyKind::Resource) => Dispatcher::AnyResource,
        };
        Ok(dispatcher)
    }

    /// Next less specific dispatcher, or `None` at the end of the chain.
    pub fn parent(self) -> Option<Dispatcher> {
        let parent = match self {
            Dispatcher::Null => Dispatcher::AnyValue,
            Dispatcher::Bool => Dispatcher::AnyBool,
            Dispatcher::AnyBool => Dispatcher::AnyScalar,
            Dispatcher::Int | Dispatcher::IntInterval => Dispatcher::AnyInt,
            Dispatcher::AnyInt => Dispatcher::AnyNumeric,
            Dispatcher::Float | Dispatcher::FloatInterval => Dispatcher::AnyFloat,
            Dispatcher::AnyFloat => Dispatcher::AnyNumeric,
            Dispatcher::AnyNumeric => Dispatcher::AnyScalar,
            Dispatcher::String => Dispatcher::AnyString,
            Dispatcher::AnyString => Dispatcher::AnyScalar,
            Dispatcher::AnyScalar => Dispatcher::AnyValue,
            Dispatcher::Array => Dispatcher::AnyArray,
            Dispatcher::Object => Dispatcher::AnyObject,
            Dispatcher::Resource => Dispatcher::AnyResource,
            Dispatcher::AnyArray | Dispatcher::AnyObject | Dispatcher::AnyResource => Dispatcher::AnyCompound,
            Dispatcher::AnyCompound => Dispatcher::AnyValue,
            Dispatcher::AnyValue => return None,
        };
        Some(parent)
    }

    pub fn name(self) -> &'static str {
        match self {
            Dispatcher::Null => "null",
            Dispatcher::Bool => "bool",
            Dispatcher::AnyBool => "any bool",
            Dispatcher::Int => "int",
            Dispatcher::IntInterval => "int interval",
            Dispatcher::AnyInt => "any int",
            Dispatcher::Float => "float",
            Dispatcher::FloatInterval => "float interval",
            Dispatcher::AnyFloat => "any float",
            Dispatcher::AnyNumeric => "any numeric",
            Dispatcher::String => "string",
            Dispatcher::AnyString => "any string",
            Dispatcher::AnyScalar => "any scalar",
            Dispatcher::Array => "array",
            Dispatcher::AnyArray => "any array",
            Dispatcher::Object => "object",
            Dispatcher::AnyObject => "any object",
            Dispatcher::Resource => "resource",
            Dispatcher::AnyResource => "any resource",
            Dispatcher::AnyCompound => "any compound",
            Dispatcher::AnyValue => "any value",
        }
    }

    /// Applies this dispatcher's rule table to the right operand.
    fn rules(self, call: &mut Call<'_>, right: &Value) -> Result<Option<Value>, EvalError> {
        match self {
            Dispatcher::Null => null::null_rules(call, right),
            Dispatcher::Bool => boolean::bool_rules(call, right),
            Dispatcher::AnyBool => boolean::any_bool_rules(call, right),
            Dispatcher::Int => integer::int_rules(call, right),
            Dispatcher::IntInterval => integer::int_interval_rules(call, right),
            Dispatcher::AnyInt => integer::any_int_rules(call, right),
            Dispatcher::Float => float::float_rules(call, right),
            Dispatcher::FloatInterval => float::float_interval_rules(call, right),
            Dispatcher::AnyFloat => float::any_float_rules(call, right),
            Dispatcher::AnyNumeric => numeric::any_numeric_rules(call, right),
            Dispatcher::String => string::string_rules(call, right),
            Dispatcher::AnyString => string::any_string_rules(call, right),
            Dispatcher::AnyScalar => scalar::any_scalar_rules(call, right),
            Dispatcher::Array => array::array_rules(call, right),
            Dispatcher::AnyArray => array::any_array_rules(call, right),
            Dispatcher::Object => object::object_rules(call, right),
            Dispatcher::AnyObject => object::any_object_rules(call, right),
            Dispatcher::Resource => resource::resource_rules(call, right),
            Dispatcher::AnyResource => resource::any_resource_rules(call, right),
            Dispatcher::AnyCompound => compound::any_compound_rules(call, right),
            Dispatcher::AnyValue => any_value::any_value_rules(call, right),
        }
    }
}

impl fmt::Display for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameters of one evaluation, threaded through the rule tables.
pub struct Call<'a> {
    pub op: Operator,
    pub left: &'a Value,
    pub ctx: &'a mut dyn EvaluationContext,
    pub config: &'a EvaluatorConfig,
}

impl<'a> Call<'a> {
    pub fn new(
        op: Operator,
        left: &'a Value,
        ctx: &'a mut dyn EvaluationContext,
        config: &'a EvaluatorConfig,
    ) -> Self {
        Call { op, left, ctx, config }
    }

    fn warn(&mut self, warning: Warning) {
        self.ctx.emit_warning(warning);
    }

    fn truth(&self, value: &Value) -> Option<bool> {
        to_truth(&*self.ctx, value)
    }

    fn int_range(&self, value: &Value) -> Interval<i32> {
        to_int_range(&*self.ctx, value)
    }

    /// Loose comparison after converting both sides to bool.
    fn compare_truths(&self, right: &Value) -> Option<Value> {
        comparison::booleans(self.op, self.truth(self.left), self.truth(right))
    }

    /// Loose comparison of the numeric projections.
    fn compare_numbers(&self, right: &Value) -> Option<Value> {
        comparison::numbers(self.op, Num::of(self.left), Num::of(right))
    }

    /// An object compared with a number is converted to integer, which the language reports.
    fn compare_object_with_number(&mut self) -> Option<Value> {
        if !self.op.is_comparison() {
            return None;
        }
        self.warn(Warning::object_converted_to_integer());
        Some(Value::ANY_BOOL)
    }

    /// Returns the comparison result if there is one, otherwise tries the remaining families.
    fn cascade(&mut self, compared: Option<Value>, right: &Value) -> Result<Option<Value>, EvalError> {
        match compared {
            Some(value) => Ok(Some(value)),
            None => self.families(right),
        }
    }

    /// Arithmetic, logical, bitwise and modulo families, in this order.
    fn families(&mut self, right: &Value) -> Result<Option<Value>, EvalError> {
        let op = self.op;
        let (lk, rk) = (Kinds::of(self.left), Kinds::of(right));

        // The object is converted before the array operand is rejected.
        if op.is_numeric() {
            for kinds in [lk, rk] {
                if kinds == Kinds::OBJECT {
                    self.warn(Warning::object_converted_to_integer());
                }
            }
        }
        if matches!(op.family(), Family::Arithmetic | Family::Modulo)
            && (lk.intersects(Kinds::ARRAY) || rk.intersects(Kinds::ARRAY))
        {
            return self.array_arithmetic(right, lk, rk).map(Some);
        }

        if let Some(value) = arithmetic::arithmetic(self.ctx, op, Num::of(self.left), Num::of(right)) {
            return Ok(Some(value));
        }
        if let Some(value) = logical::logical(op, self.truth(self.left), self.truth(right)) {
            return Ok(Some(value));
        }
        if let Some(value) = self.bitwise(right, lk, rk) {
            return Ok(Some(value));
        }
        let (dividend, divisor) = (self.int_range(self.left), self.int_range(right));
        Ok(modulo::modulo(self.ctx, op, dividend, divisor))
    }

    fn bitwise(&self, right: &Value, lk: Kinds, rk: Kinds) -> Option<Value> {
        let op = self.op;
        let bytewise = matches!(op, Operator::BitAnd | Operator::BitOr | Operator::BitXor);
        if bytewise && lk.intersects(Kinds::STRING) && rk.intersects(Kinds::STRING) {
            if lk == Kinds::STRING && rk == Kinds::STRING {
                return match (self.left, right) {
                    (Value::String(a), Value::String(b)) if self.config.bytewise_strings => bitwise::strings(op, a, b),
                    _ => Some(Value::ANY_STRING),
                };
            }
            // Strings give a string, anything else an integer.
            debug!("{} {} {} => any scalar", self.left, op, right);
            return Some(Value::any(AnyKind::Scalar));
        }
        bitwise::bitwise(op, self.int_range(self.left), self.int_range(right))
    }

    /// Arithmetic or modulo where one side is, or may be, an array.
    fn array_arithmetic(&mut self, right: &Value, lk: Kinds, rk: Kinds) -> Result<Value, EvalError> {
        let (left_array, right_array) = (lk == Kinds::ARRAY, rk == Kinds::ARRAY);
        if self.op == Operator::Add && lk.intersects(Kinds::ARRAY) && rk.intersects(Kinds::ARRAY) {
            // Array union, or a failure if only one of them is an array.
            return Ok(if left_array && right_array {
                Value::any(AnyKind::Array)
            } else {
                Value::ANY
            });
        }
        if !left_array && !right_array {
            debug!("{} {} {}: operand may be an array", self.left, self.op, right);
            return Ok(Value::ANY);
        }
        match self.config.array_arithmetic {
            ArrayArithmeticPolicy::Warn => {
                self.warn(Warning::unsupported_operands(self.left.type_name(), self.op, right.type_name()));
                Ok(Value::ANY)
            }
            ArrayArithmeticPolicy::Reject => Err(EvalError::UnsupportedOperands {
                operator: self.op,
                left: self.left.type_name(),
                right: right.type_name(),
            }),
        }
    }
}

/// Right operands of the same scalar type as `null` or `bool`: every comparison goes through bool.
fn is_boolish(kinds: Kinds) -> bool {
    kinds.is_within(Kinds::NULL | Kinds::BOOL)
}

/// Resolves `call.left call.op right`.
///
/// Walks the dispatcher chain of the left operand until a rule applies. Reaching the end of the
/// chain means the rule tables are incomplete and is reported as [`EvalError::MissingRule`].
pub fn resolve(call: &mut Call<'_>, right: &Value) -> Result<Value, EvalError> {
    let first = Dispatcher::for_value(call.left)?;
    if right.is_long() {
        return Err(EvalError::Unsupported {
            kind: right.type_name(),
        });
    }

    if let Some(value) = identity(&*call.ctx, call.op, call.left, right) {
        debug!("identity: {} {} {} => {}", call.left, call.op, right, value);
        return Ok(value);
    }

    let mut dispatcher = Some(first);
    while let Some(current) = dispatcher {
        debug!("dispatch({}): {} {} {}", current, call.left, call.op, right);
        if let Some(value) = current.rules(call, right)? {
            debug!("dispatch({}): => {}", current, value);
            return Ok(value);
        }
        dispatcher = current.parent();
    }

    Err(EvalError::MissingRule {
        dispatcher: first.name(),
        operator: call.op,
        right: right.type_name(),
    })
}
