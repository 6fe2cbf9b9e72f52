//! Abstract values.
//!
//! A [`Value`] describes the set of runtime values an expression may take at a program point.
//! The representation ranges from fully concrete (a single `int`, a single `string`, ...) through
//! numeric [intervals](Interval) up to "any value of kind K" abstractions ([`AnyKind`]).
//!
//! # Lattice
//!
//! Kinds form a small tree, rooted at [`AnyKind::Value`]:
//!
//! ```text
//!                     Value
//!                   /       \
//!             Scalar         Compound
//!          /   |    \        /   |    \
//!   Numeric  Bool  String  Array Object Resource
//!   /  |  \
//! Int Long Float
//! ```
//!
//! `null` belongs to `Value` only. A concrete value `v` is covered by an abstract value `a`
//! (written `v ⊑ a`) when `a` describes `v`; see [`Value::covers`]. Integers are also covered by
//! float intervals containing them: the evaluator promotes overflowing integer arithmetic to
//! floats, and a float interval is how it reports "some number in this range".
//!
//! # Examples
//!
//! ```
//! use php_binop::value::{AnyKind, Value};
//!
//! let range = Value::int_interval(1, 5);
//! assert!(range.covers(&Value::Int(3)));
//! assert!(!range.covers(&Value::Int(7)));
//!
//! // Single-point intervals collapse to scalars.
//! assert_eq!(Value::int_interval(4, 4), Value::Int(4));
//!
//! assert!(Value::any(AnyKind::Numeric).covers(&Value::float(0.5)));
//! ```

use std::fmt;

use ordered_float::OrderedFloat;

/// Double-precision float with a total order, so values can be stored in ordered sets.
pub type Float = OrderedFloat<f64>;

/// Kind constraint of an unknown value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AnyKind {
    Value,
    Scalar,
    Numeric,
    Int,
    Long,
    Float,
    Bool,
    String,
    Compound,
    Array,
    Object,
    Resource,
}

impl AnyKind {
    /// All kinds, most general first.
    pub const ALL: [AnyKind; 12] = [
        AnyKind::Value,
        AnyKind::Scalar,
        AnyKind::Numeric,
        AnyKind::Int,
        AnyKind::Long,
        AnyKind::Float,
        AnyKind::Bool,
        AnyKind::String,
        AnyKind::Compound,
        AnyKind::Array,
        AnyKind::Object,
        AnyKind::Resource,
    ];

    /// Direct generalization of this kind, or `None` for [`AnyKind::Value`].
    pub fn parent(self) -> Option<AnyKind> {
        match self {
            AnyKind::Value => None,
            AnyKind::Scalar | AnyKind::Compound => Some(AnyKind::Value),
            AnyKind::Numeric | AnyKind::Bool | AnyKind::String => Some(AnyKind::Scalar),
            AnyKind::Int | AnyKind::Long | AnyKind::Float => Some(AnyKind::Numeric),
            AnyKind::Array | AnyKind::Object | AnyKind::Resource => Some(AnyKind::Compound),
        }
    }

    /// Returns `true` if every value of kind `self` is also of kind `other`.
    pub fn is_within(self, other: AnyKind) -> bool {
        let mut kind = Some(self);
        while let Some(k) = kind {
            if k == other {
                return true;
            }
            kind = k.parent();
        }
        false
    }

    pub fn name(self) -> &'static str {
        match self {
            AnyKind::Value => "value",
            AnyKind::Scalar => "scalar",
            AnyKind::Numeric => "numeric",
            AnyKind::Int => "int",
            AnyKind::Long => "long",
            AnyKind::Float => "float",
            AnyKind::Bool => "bool",
            AnyKind::String => "string",
            AnyKind::Compound => "compound",
            AnyKind::Array => "array",
            AnyKind::Object => "object",
            AnyKind::Resource => "resource",
        }
    }
}

impl fmt::Display for AnyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Inclusive range `[start, end]`.
///
/// # Invariants
///
/// - `start <= end`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Copy + PartialOrd> Interval<T> {
    /// Creates a new interval.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or the bounds are unordered.
    pub fn new(start: T, end: T) -> Self {
        assert!(start <= end, "Interval bounds must satisfy start <= end");
        Interval { start, end }
    }

    /// Creates a new interval, or `None` if `start > end`.
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Interval { start, end })
        } else {
            None
        }
    }

    /// Creates the single-point interval `[value, value]`.
    pub fn point(value: T) -> Self {
        Interval { start: value, end: value }
    }

    pub fn start(self) -> T {
        self.start
    }

    pub fn end(self) -> T {
        self.end
    }

    pub fn is_point(self) -> bool {
        self.start == self.end
    }

    pub fn contains(self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    pub fn encloses(self, other: Interval<T>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn is_disjoint(self, other: Interval<T>) -> bool {
        self.end < other.start || other.end < self.start
    }
}

impl Interval<i32> {
    /// The whole `int` domain.
    pub const FULL: Interval<i32> = Interval {
        start: i32::MIN,
        end: i32::MAX,
    };

    pub fn to_float(self) -> Interval<Float> {
        Interval {
            start: OrderedFloat(self.start as f64),
            end: OrderedFloat(self.end as f64),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Handle of an array owned by the memory model.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ArrayRef(u32);

impl ArrayRef {
    pub fn new(id: u32) -> Self {
        ArrayRef(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }
}

/// Handle of an object owned by the memory model.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ObjectRef(u32);

impl ObjectRef {
    pub fn new(id: u32) -> Self {
        ObjectRef(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }
}

/// Handle of a resource owned by the memory model.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ResourceRef(u32);

impl ResourceRef {
    pub fn new(id: u32) -> Self {
        ResourceRef(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }
}

/// Abstract value.
///
/// The constructors [`Value::int_interval`] and [`Value::float_interval`] normalize
/// single-point intervals to scalars. Matching code still accepts point intervals built by hand.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Value {
    /// The undefined value.
    Null,
    Bool(bool),
    Int(i32),
    /// 64-bit integer. Present in the memory model, not supported by the evaluator.
    Long(i64),
    Float(Float),
    String(String),
    IntInterval(Interval<i32>),
    LongInterval(Interval<i64>),
    FloatInterval(Interval<Float>),
    Array(ArrayRef),
    Object(ObjectRef),
    Resource(ResourceRef),
    /// Unknown value of the given kind.
    Any(AnyKind),
}

impl Value {
    pub const ANY: Value = Value::Any(AnyKind::Value);
    pub const ANY_BOOL: Value = Value::Any(AnyKind::Bool);
    pub const ANY_INT: Value = Value::Any(AnyKind::Int);
    pub const ANY_FLOAT: Value = Value::Any(AnyKind::Float);
    pub const ANY_NUMERIC: Value = Value::Any(AnyKind::Numeric);
    pub const ANY_STRING: Value = Value::Any(AnyKind::String);

    pub fn float(value: f64) -> Value {
        Value::Float(OrderedFloat(value))
    }

    pub fn string(value: impl Into<String>) -> Value {
        Value::String(value.into())
    }

    pub fn any(kind: AnyKind) -> Value {
        Value::Any(kind)
    }

    /// Creates the integer interval `[start, end]`, collapsing a single point to [`Value::Int`]
    /// and the whole `int` domain to any int.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn int_interval(start: i32, end: i32) -> Value {
        if start == end {
            Value::Int(start)
        } else if start == i32::MIN && end == i32::MAX {
            Value::ANY_INT
        } else {
            Value::IntInterval(Interval::new(start, end))
        }
    }

    /// Creates the float interval `[start, end]`, collapsing a single point to [`Value::Float`].
    ///
    /// A NaN bound cannot delimit a range, so it widens the result to any float.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn float_interval(start: f64, end: f64) -> Value {
        if start.is_nan() || end.is_nan() {
            Value::ANY_FLOAT
        } else if start == end {
            Value::float(start)
        } else {
            Value::FloatInterval(Interval::new(OrderedFloat(start), OrderedFloat(end)))
        }
    }

    /// Creates the long interval `[start, end]`, collapsing a single point to [`Value::Long`].
    pub fn long_interval(start: i64, end: i64) -> Value {
        if start == end {
            Value::Long(start)
        } else {
            Value::LongInterval(Interval::new(start, end))
        }
    }

    /// Returns `true` for a single runtime value.
    pub fn is_concrete(&self) -> bool {
        match self {
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Long(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Array(_)
            | Value::Object(_)
            | Value::Resource(_) => true,
            Value::IntInterval(i) => i.is_point(),
            Value::LongInterval(i) => i.is_point(),
            Value::FloatInterval(i) => i.is_point(),
            Value::Any(_) => false,
        }
    }

    /// Returns `true` for the 64-bit integer family, which the evaluator does not model.
    pub fn is_long(&self) -> bool {
        matches!(
            self,
            Value::Long(_) | Value::LongInterval(_) | Value::Any(AnyKind::Long)
        )
    }

    /// Kind of a value, or `None` for `null`.
    pub fn kind(&self) -> Option<AnyKind> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(AnyKind::Bool),
            Value::Int(_) | Value::IntInterval(_) => Some(AnyKind::Int),
            Value::Long(_) | Value::LongInterval(_) => Some(AnyKind::Long),
            Value::Float(_) | Value::FloatInterval(_) => Some(AnyKind::Float),
            Value::String(_) => Some(AnyKind::String),
            Value::Array(_) => Some(AnyKind::Array),
            Value::Object(_) => Some(AnyKind::Object),
            Value::Resource(_) => Some(AnyKind::Resource),
            Value::Any(kind) => Some(*kind),
        }
    }

    /// Short human-readable name of the shape of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::IntInterval(_) => "int interval",
            Value::LongInterval(_) => "long interval",
            Value::FloatInterval(_) => "float interval",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Resource(_) => "resource",
            Value::Any(AnyKind::Value) => "any value",
            Value::Any(AnyKind::Scalar) => "any scalar",
            Value::Any(AnyKind::Numeric) => "any numeric",
            Value::Any(AnyKind::Int) => "any int",
            Value::Any(AnyKind::Long) => "any long",
            Value::Any(AnyKind::Float) => "any float",
            Value::Any(AnyKind::Bool) => "any bool",
            Value::Any(AnyKind::String) => "any string",
            Value::Any(AnyKind::Compound) => "any compound",
            Value::Any(AnyKind::Array) => "any array",
            Value::Any(AnyKind::Object) => "any object",
            Value::Any(AnyKind::Resource) => "any resource",
        }
    }

    /// Checks whether `other` is described by `self` (`other ⊑ self`).
    ///
    /// Integers are covered by float intervals that contain them. Any two equal values cover
    /// each other.
    pub fn covers(&self, other: &Value) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (Value::Any(AnyKind::Value), _) => true,
            (Value::Any(kind), other) => match other {
                Value::Null => false,
                Value::Any(inner) => inner.is_within(*kind),
                // Numbers of either width answer "numeric".
                _ => other.kind().map_or(false, |k| k.is_within(*kind)),
            },
            (Value::IntInterval(range), Value::Int(v)) => range.contains(*v),
            (Value::IntInterval(range), Value::IntInterval(inner)) => range.encloses(*inner),
            (Value::LongInterval(range), Value::Long(v)) => range.contains(*v),
            (Value::LongInterval(range), Value::LongInterval(inner)) => range.encloses(*inner),
            (Value::FloatInterval(range), Value::Float(v)) => range.contains(*v),
            (Value::FloatInterval(range), Value::FloatInterval(inner)) => range.encloses(*inner),
            (Value::FloatInterval(range), Value::Int(v)) => range.contains(OrderedFloat(*v as f64)),
            (Value::FloatInterval(range), Value::IntInterval(inner)) => range.encloses(inner.to_float()),
            (Value::FloatInterval(range), Value::Any(AnyKind::Int)) => range.encloses(Interval::FULL.to_float()),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}L", v),
            Value::Float(v) => write!(f, "{:?}", v.0),
            Value::String(s) => write!(f, "{:?}", s),
            Value::IntInterval(i) => write!(f, "int{}", i),
            Value::LongInterval(i) => write!(f, "long{}", i),
            Value::FloatInterval(i) => write!(f, "float[{:?}, {:?}]", i.start().0, i.end().0),
            Value::Array(a) => write!(f, "array#{}", a.id()),
            Value::Object(o) => write!(f, "object#{}", o.id()),
            Value::Resource(r) => write!(f, "resource#{}", r.id()),
            Value::Any(kind) => write!(f, "any {}", kind),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}
