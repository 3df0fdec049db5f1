//! Unified error types for the evaluation core
//!
//! Evaluation-time failures are always returned to the caller, never
//! swallowed or replaced with defaults. Programming errors (arity contract
//! violations, invalid casts) panic instead of returning a `Result`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::value::ValueType;

/// Recoverable failure raised while evaluating an operator or reading a variable.
///
/// Callers must treat this as "this particular composed expression could not
/// be evaluated this time", not as a crash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Division or modulus by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// A value's payload did not match the type an operator assumed
    #[error("Expected a value of type {expected} but got {actual}")]
    UnexpectedType {
        expected: ValueType,
        actual: ValueType,
    },

    /// A variable failed to produce its value (e.g. backing resource gone)
    #[error("Variable read failed: {0}")]
    VariableRead(String),
}

impl EvaluationError {
    /// Create an unexpected-type error
    pub fn unexpected_type(expected: ValueType, actual: ValueType) -> Self {
        Self::UnexpectedType { expected, actual }
    }

    /// Creates a variable read error.
    ///
    /// Use this in [`crate::variable::Variable`] implementations when the
    /// backing state can no longer produce a value, for example when the
    /// referenced world object was removed.
    pub fn variable_read(msg: impl Into<String>) -> Self {
        Self::VariableRead(msg.into())
    }
}

/// Construction-time failure from [`crate::operator::OperatorBuilder::build`].
///
/// Detected once at definition-build time, never at evaluation time. Does not
/// corrupt other builders or built operators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperatorBuilderError {
    /// A required builder field was never set
    #[error("Operator builder is missing required field '{0}'")]
    MissingField(&'static str),
}

impl OperatorBuilderError {
    /// Name of the missing field
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
        }
    }
}

/// A localizable message: a translation key plus positional arguments.
///
/// This core only produces key strings; string lookup and rendering happen in
/// the host's localization layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedMessage {
    /// Translation key
    pub key: String,
    /// Positional arguments substituted by the host at render time
    pub args: Vec<String>,
}

impl LocalizedMessage {
    /// Create a message with no arguments
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Create a message with positional arguments
    pub fn with_args(key: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            key: key.into(),
            args,
        }
    }
}

impl fmt::Display for LocalizedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}({})", self.key, self.args.join(", "))
        }
    }
}
