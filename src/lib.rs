//! # php-binop: abstract evaluation of PHP binary operators
//!
//! **`php-binop`** computes what a binary operator of a PHP-like language yields when its operands
//! are only partially known, as a static analyzer sees them.
//! It is designed to be embedded into a dataflow analysis: the analysis owns memory and program
//! points, this crate decides `left op right`.
//!
//! ## Abstract values
//!
//! An operand is a [`Value`][crate::value::Value]: a concrete scalar (`null`, bool, int, float,
//! string), an inclusive numeric interval, an opaque compound handle (array, object, resource), or
//! "any value of kind K" for a kind of the type lattice (any int, any scalar, any value, ...).
//!
//! For every operator and every pair of operands, the result is the **smallest sound
//! over-approximation** of what the language would compute:
//!
//! - Two concrete scalars always give one concrete result, bit-exact with the language,
//!   including integer overflow promotion to float.
//! - Intervals give intervals. A result is concrete only if it holds for every member.
//! - Runtime diagnostics (division by zero, object to integer conversion, unsupported operands)
//!   are emitted as [warnings][crate::warning::Warning] next to a conservative result.
//!
//! ## Basic Usage
//!
//! ```rust
//! use php_binop::context::Snapshot;
//! use php_binop::evaluator::Evaluator;
//! use php_binop::operator::Operator;
//! use php_binop::value::Value;
//! use php_binop::warning::WarningCause;
//!
//! // 1. The evaluator is stateless; the context collects warnings and knows about arrays.
//! let evaluator = Evaluator::new();
//! let mut snapshot = Snapshot::new();
//!
//! // 2. Concrete operands: exact result.
//! let r = evaluator.evaluate(&mut snapshot, &Value::string("12abc"), Operator::Add, &Value::Int(1));
//! assert_eq!(r, Ok(Value::Int(13)));
//!
//! // 3. Interval operands: decided only when the whole range agrees.
//! let r = evaluator.evaluate(&mut snapshot, &Value::int_interval(1, 5), Operator::LessThan, &Value::Int(10));
//! assert_eq!(r, Ok(Value::Bool(true)));
//! let r = evaluator.evaluate(&mut snapshot, &Value::int_interval(1, 15), Operator::LessThan, &Value::Int(10));
//! assert_eq!(r, Ok(Value::ANY_BOOL));
//!
//! // 4. Division by zero: `false` and a warning.
//! let r = evaluator.evaluate(&mut snapshot, &Value::Int(5), Operator::Div, &Value::Int(0));
//! assert_eq!(r, Ok(Value::Bool(false)));
//! assert!(snapshot.has_warning(WarningCause::DivisionByZero));
//! ```
//!
//! ## Core Components
//!
//! - **[`evaluator`]**: The [`Evaluator`][crate::evaluator::Evaluator] facade, over single values and value sets.
//! - **[`dispatch`]**: Left-operand dispatchers and their fallback chain.
//! - **[`ops`]**: Operator families over projected operands: comparison, arithmetic, bitwise, logical, modulo, identity.
//! - **[`convert`]**: The language's implicit conversions.
//! - **[`context`]**: What the evaluator needs from the surrounding analysis.

pub mod config;
pub mod context;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod evaluator;
pub mod operator;
pub mod ops;
pub mod value;
pub mod value_set;
pub mod warning;
