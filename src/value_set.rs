//! Sets of abstract values.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use crate::value::{AnyKind, Value};

/// Set of possible values of an expression: "one of these, which one is undetermined".
///
/// Duplicates collapse and iteration order is the total order of [`Value`], so printing and
/// comparing sets is deterministic.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ValueSet {
    values: BTreeSet<Value>,
}

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(value: Value) -> Self {
        let mut set = Self::new();
        set.insert(value);
        set
    }

    /// Inserts a value, returning `true` if it was not present.
    pub fn insert(&mut self, value: Value) -> bool {
        self.values.insert(value)
    }

    pub fn remove(&mut self, value: &Value) -> bool {
        self.values.remove(value)
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Value> {
        self.values.iter()
    }

    /// Returns the only element of a one-element set.
    pub fn as_singleton(&self) -> Option<&Value> {
        if self.values.len() == 1 {
            self.values.iter().next()
        } else {
            None
        }
    }

    /// Checks whether some element of `self` covers `value` (see [`Value::covers`]).
    pub fn covers(&self, value: &Value) -> bool {
        self.values.iter().any(|v| v.covers(value))
    }

    /// Returns `true` if the set contains an "any value of kind K" element.
    pub fn has_any(&self) -> bool {
        self.values.iter().any(|v| matches!(v, Value::Any(_)))
    }

    pub fn has_any_of(&self, kind: AnyKind) -> bool {
        self.values.contains(&Value::Any(kind))
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ValueSet {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for ValueSet {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl IntoIterator for ValueSet {
    type Item = Value;
    type IntoIter = btree_set::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a Value;
    type IntoIter = btree_set::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl From<Value> for ValueSet {
    fn from(value: Value) -> Self {
        ValueSet::singleton(value)
    }
}

impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}
