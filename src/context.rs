//! Evaluation context: the evaluator's view of the surrounding analysis.
//!
//! The evaluator never owns memory. Compound values are opaque handles, and whatever the
//! evaluator needs to know about them (array emptiness, object identity) is asked through
//! [`EvaluationContext`]. Warnings go back through the same trait.

use std::collections::HashMap;

use log::debug;

use crate::value::{ArrayRef, ObjectRef, ResourceRef, Value};
use crate::warning::{Warning, WarningCause};

/// Services the surrounding analysis provides to the evaluator.
pub trait EvaluationContext {
    /// Records a warning for the current program point.
    fn emit_warning(&mut self, warning: Warning);

    /// Native boolean projection of an array: `true` iff it is non-empty.
    ///
    /// Returns `None` when the memory model cannot tell.
    fn array_truth(&self, array: ArrayRef) -> Option<bool>;

    /// Native integer projection of an array (`0` for empty, `1` otherwise).
    fn array_to_int(&self, array: ArrayRef) -> Option<i32> {
        self.array_truth(array).map(i32::from)
    }

    /// Object-identity oracle: are the two handles the same instance?
    ///
    /// The same handle always denotes the same instance. Distinct handles are undecided unless
    /// the memory model overrides this.
    fn same_object(&self, a: ObjectRef, b: ObjectRef) -> Option<bool> {
        if a == b {
            Some(true)
        } else {
            None
        }
    }
}

/// In-memory context: a handle allocator with a warning log.
///
/// # Examples
///
/// ```
/// use php_binop::context::{EvaluationContext, Snapshot};
/// use php_binop::value::Value;
///
/// let mut snapshot = Snapshot::new();
/// let Value::Array(empty) = snapshot.new_array(0) else { unreachable!() };
/// assert_eq!(snapshot.array_truth(empty), Some(false));
/// ```
#[derive(Debug, Default)]
pub struct Snapshot {
    arrays: HashMap<ArrayRef, usize>,
    next_id: u32,
    warnings: Vec<Warning>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Allocates an array handle with `len` elements.
    pub fn new_array(&mut self, len: usize) -> Value {
        let array = ArrayRef::new(self.fresh_id());
        self.arrays.insert(array, len);
        Value::Array(array)
    }

    pub fn new_object(&mut self) -> Value {
        Value::Object(ObjectRef::new(self.fresh_id()))
    }

    pub fn new_resource(&mut self) -> Value {
        Value::Resource(ResourceRef::new(self.fresh_id()))
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn has_warning(&self, cause: WarningCause) -> bool {
        self.warnings.iter().any(|w| w.cause == cause)
    }
}

impl EvaluationContext for Snapshot {
    fn emit_warning(&mut self, warning: Warning) {
        debug!("warning: {}", warning);
        self.warnings.push(warning);
    }

    fn array_truth(&self, array: ArrayRef) -> Option<bool> {
        self.arrays.get(&array).map(|&len| len > 0)
    }
}
