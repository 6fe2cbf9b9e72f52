//! Binary operation facade.
//!
//! [`Evaluator`] is the entry point of the crate: it evaluates one pair of abstract values with
//! [`evaluate`](Evaluator::evaluate), or every pair drawn from two [`ValueSet`]s with
//! [`evaluate_all`](Evaluator::evaluate_all).

use log::debug;

use crate::config::EvaluatorConfig;
use crate::context::EvaluationContext;
use crate::dispatch::{resolve, Call};
use crate::error::EvalError;
use crate::operator::Operator;
use crate::value::{AnyKind, ArrayRef, ObjectRef, Value};
use crate::value_set::ValueSet;
use crate::warning::Warning;

/// Abstract evaluator of binary operators.
///
/// The evaluator holds no per-call state: one instance can be shared by any number of analyses,
/// each passing its own [`EvaluationContext`].
///
/// # Examples
///
/// ```
/// use php_binop::context::Snapshot;
/// use php_binop::evaluator::Evaluator;
/// use php_binop::operator::Operator;
/// use php_binop::value::Value;
///
/// let evaluator = Evaluator::new();
/// let mut snapshot = Snapshot::new();
///
/// let sum = evaluator.evaluate(&mut snapshot, &Value::Int(i32::MAX), Operator::Add, &Value::Int(1));
/// assert_eq!(sum, Ok(Value::float(i32::MAX as f64 + 1.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates `left op right`.
    ///
    /// Warnings are emitted into `ctx`. Fails only for operands the evaluator does not model
    /// (long integers), for array arithmetic under
    /// [`ArrayArithmeticPolicy::Reject`](crate::config::ArrayArithmeticPolicy::Reject), or when no
    /// rule applies.
    pub fn evaluate(
        &self,
        ctx: &mut dyn EvaluationContext,
        left: &Value,
        op: Operator,
        right: &Value,
    ) -> Result<Value, EvalError> {
        resolve(&mut Call::new(op, left, ctx, &self.config), right)
    }

    /// Evaluates `left op right` for every pair of members and unions the results.
    ///
    /// An empty operand set gives an empty result. The first failing pair aborts the evaluation,
    /// and then no warning reaches `ctx`: warnings are held back until every pair succeeded.
    ///
    /// # Examples
    ///
    /// ```
    /// use php_binop::context::Snapshot;
    /// use php_binop::evaluator::Evaluator;
    /// use php_binop::operator::Operator;
    /// use php_binop::value::Value;
    /// use php_binop::value_set::ValueSet;
    ///
    /// let evaluator = Evaluator::new();
    /// let mut snapshot = Snapshot::new();
    /// let left: ValueSet = [Value::Int(1), Value::Int(2)].into_iter().collect();
    /// let right: ValueSet = [Value::Int(10), Value::Int(20)].into_iter().collect();
    ///
    /// let sums = evaluator.evaluate_all(&mut snapshot, &left, Operator::Add, &right).unwrap();
    /// assert_eq!(sums.to_string(), "{11, 12, 21, 22}");
    /// ```
    pub fn evaluate_all(
        &self,
        ctx: &mut dyn EvaluationContext,
        left: &ValueSet,
        op: Operator,
        right: &ValueSet,
    ) -> Result<ValueSet, EvalError> {
        let mut results = ValueSet::new();
        let mut deferred = Deferred::new(ctx);
        for l in left {
            for r in right {
                results.insert(self.evaluate(&mut deferred, l, op, r)?);
            }
        }
        deferred.commit();
        if self.config.collapse_results {
            collapse(&mut results);
        }
        Ok(results)
    }
}

/// Context that keeps warnings back until [`commit`](Deferred::commit).
struct Deferred<'a> {
    inner: &'a mut dyn EvaluationContext,
    warnings: Vec<Warning>,
}

impl<'a> Deferred<'a> {
    fn new(inner: &'a mut dyn EvaluationContext) -> Self {
        Deferred {
            inner,
            warnings: Vec::new(),
        }
    }

    fn commit(self) {
        let Deferred { inner, warnings } = self;
        for warning in warnings {
            inner.emit_warning(warning);
        }
    }
}

impl EvaluationContext for Deferred<'_> {
    fn emit_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    fn array_truth(&self, array: ArrayRef) -> Option<bool> {
        self.inner.array_truth(array)
    }

    fn array_to_int(&self, array: ArrayRef) -> Option<i32> {
        self.inner.array_to_int(array)
    }

    fn same_object(&self, a: ObjectRef, b: ObjectRef) -> Option<bool> {
        self.inner.same_object(a, b)
    }
}

/// Simplifies a result set without losing any of its members.
fn collapse(results: &mut ValueSet) {
    if results.has_any_of(AnyKind::Value) {
        let had_null = results.contains(&Value::Null);
        debug!("collapse: {} => any value", results);
        *results = ValueSet::singleton(Value::ANY);
        if had_null {
            results.insert(Value::Null);
        }
        return;
    }
    if results.contains(&Value::Bool(true)) && results.contains(&Value::Bool(false)) {
        debug!("collapse: {} => any bool", results);
        results.remove(&Value::Bool(true));
        results.remove(&Value::Bool(false));
        results.insert(Value::ANY_BOOL);
    }
}
