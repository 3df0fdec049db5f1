//! Variable abstraction: lazy, possibly-failing value producers
//!
//! A variable is a capability, not a value. The host supplies
//! implementations backed by constants, derived computations or references
//! into world state; this core only ever pulls values through the trait.

use crate::error::EvaluationError;
use crate::value::{Value, ValueType};

/// Lazily yields a typed value on demand.
///
/// Repeated calls are allowed but not required to be idempotent: backing
/// state may have changed between reads. A read may fail, for example when
/// the referenced world object is gone; operators propagate such failures
/// verbatim unless short-circuiting means the variable is never read at all.
///
/// A single instance is not guaranteed to be safe for concurrent evaluation
/// from multiple threads unless its backing state is.
#[cfg_attr(test, mockall::automock)]
pub trait Variable: Send + Sync {
    /// The type of value this variable produces
    fn value_type(&self) -> ValueType;

    /// Produce the current value, re-deriving it if needed
    fn value(&self) -> Result<Value, EvaluationError>;
}

/// A variable backed by a fixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    value: Value,
}

impl Constant {
    /// Create a constant variable holding the given value
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Create a constant boolean variable
    pub fn boolean(raw: bool) -> Self {
        Self::new(Value::boolean(raw))
    }

    /// Create a constant integer variable
    pub fn integer(raw: i32) -> Self {
        Self::new(Value::integer(raw))
    }
}

impl Variable for Constant {
    fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    fn value(&self) -> Result<Value, EvaluationError> {
        Ok(self.value.clone())
    }
}
