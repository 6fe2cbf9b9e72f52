//! Analysis warnings emitted during evaluation.

use std::fmt;

use crate::operator::Operator;

/// Cause of an analysis warning.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum WarningCause {
    /// Division or modulo by a divisor that is, or may be, zero.
    DivisionByZero,
    /// An object took part in a numeric operation.
    ObjectConvertedToInteger,
    /// Arguments of a native call have the wrong type.
    ///
    /// Shares the warning sink with the evaluator but is only emitted by the surrounding analysis.
    WrongArgumentsType,
    /// Arithmetic between an array and a non-array.
    UnsupportedOperandType,
}

impl WarningCause {
    pub fn name(self) -> &'static str {
        match self {
            WarningCause::DivisionByZero => "DIVISION_BY_ZERO",
            WarningCause::ObjectConvertedToInteger => "OBJECT_CONVERTED_TO_INTEGER",
            WarningCause::WrongArgumentsType => "WRONG_ARGUMENTS_TYPE",
            WarningCause::UnsupportedOperandType => "UNSUPPORTED_OPERAND_TYPE",
        }
    }
}

impl fmt::Display for WarningCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A diagnostic: cause plus message.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Warning {
    pub cause: WarningCause,
    pub message: String,
}

impl Warning {
    pub fn new(cause: WarningCause, message: impl Into<String>) -> Self {
        Warning {
            cause,
            message: message.into(),
        }
    }

    pub fn division_by_zero() -> Self {
        Warning::new(WarningCause::DivisionByZero, "Division by zero")
    }

    pub fn possible_division_by_zero() -> Self {
        Warning::new(WarningCause::DivisionByZero, "Possible division by zero")
    }

    pub fn modulo_by_zero() -> Self {
        Warning::new(WarningCause::DivisionByZero, "Modulo by zero")
    }

    pub fn possible_modulo_by_zero() -> Self {
        Warning::new(WarningCause::DivisionByZero, "Possible modulo by zero")
    }

    pub fn object_converted_to_integer() -> Self {
        Warning::new(
            WarningCause::ObjectConvertedToInteger,
            "Object cannot be converted to integer",
        )
    }

    /// Arithmetic with an array operand, e.g. `array + int`.
    pub fn unsupported_operands(left: &str, op: Operator, right: &str) -> Self {
        Warning::new(
            WarningCause::UnsupportedOperandType,
            format!("Unsupported operand types: {} {} {}", left, op, right),
        )
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.cause, self.message)
    }
}
