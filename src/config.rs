//! Evaluator configuration.

/// What to do with arithmetic between an array and a non-array operand.
///
/// The language aborts such scripts with a fatal error. An analyzer may prefer to keep going.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ArrayArithmeticPolicy {
    /// Emit `UNSUPPORTED_OPERAND_TYPE` and continue with any value.
    #[default]
    Warn,
    /// Fail the evaluation with [`EvalError::UnsupportedOperands`](crate::error::EvalError::UnsupportedOperands).
    Reject,
}

/// Configuration of an [`Evaluator`](crate::evaluator::Evaluator).
///
/// # Examples
///
/// ```
/// use php_binop::config::{ArrayArithmeticPolicy, EvaluatorConfig};
///
/// let config = EvaluatorConfig {
///     array_arithmetic: ArrayArithmeticPolicy::Reject,
///     ..Default::default()
/// };
/// assert!(config.collapse_results);
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Policy for array arithmetic (default: warn).
    pub array_arithmetic: ArrayArithmeticPolicy,
    /// Simplify result sets of `evaluate_all` (default: true).
    ///
    /// A set containing any value becomes any value, plus `null` if it was present. A set
    /// containing both `true` and `false` replaces them with any bool.
    pub collapse_results: bool,
    /// Evaluate `&`, `|`, `^` between two concrete strings bytewise (default: true).
    ///
    /// When disabled, such operations yield any string.
    pub bytewise_strings: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            array_arithmetic: ArrayArithmeticPolicy::Warn,
            collapse_results: true,
            bytewise_strings: true,
        }
    }
}
