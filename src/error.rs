//! Evaluation errors.
//!
//! Operand-type mismatches that the analyzed language tolerates at runtime are not errors: they
//! become [warnings](crate::warning::Warning) plus a conservative result. [`EvalError`] is reserved
//! for capability gaps and broken rule tables.

use thiserror::Error;

use crate::operator::Operator;

#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum EvalError {
    /// The operand kind is not modelled by the evaluator.
    #[error("{kind} values are not supported")]
    Unsupported { kind: &'static str },

    /// No rule of the dispatcher chain applied.
    #[error("no rule for `{operator}` with {right} right operand in {dispatcher} dispatcher")]
    MissingRule {
        dispatcher: &'static str,
        operator: Operator,
        right: &'static str,
    },

    /// Arithmetic on arrays rejected by [`ArrayArithmeticPolicy::Reject`](crate::config::ArrayArithmeticPolicy::Reject).
    #[error("unsupported operand types: {left} {operator} {right}")]
    UnsupportedOperands {
        operator: Operator,
        left: &'static str,
        right: &'static str,
    },
}

/// Error returned when parsing an unknown operator symbol.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("unknown binary operator `{0}`")]
pub struct ParseOperatorError(pub String);
