//! Value types and their immutable value payloads
//!
//! Each value family is identified by a [`ValueType`] tag; tags form a closed
//! set and are compared by equality. A [`Value`] is an immutable instance of
//! one family's payload. Cast rules live on the type tag: `cast` must only be
//! invoked where `can_cast` reports true, anything else is a programming
//! error and panics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EvaluationError;

/// Identifier for a family of runtime values and their cast rules.
///
/// One tag per family; statically known, never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
    Boolean,
    Integer,
}

impl ValueType {
    /// Stable lowercase name, used in localization keys and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
        }
    }

    /// Whether values of this type can be cast to `target`.
    ///
    /// Identity casts always succeed. Integers additionally cast to booleans
    /// (zero is false, anything else is true). Booleans do not cast to
    /// integers: a boolean is never a valid stand-in where an integer is
    /// declared.
    pub fn can_cast(&self, target: ValueType) -> bool {
        *self == target || matches!((self, target), (ValueType::Integer, ValueType::Boolean))
    }

    /// Cast `value` (which must belong to this type) to `target`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not of this type or if [`Self::can_cast`] is
    /// false for `target`. Both indicate a caller bug, not a runtime
    /// condition.
    pub fn cast(&self, value: &Value, target: ValueType) -> Value {
        assert_eq!(
            value.value_type(),
            *self,
            "cast invoked with a value of type {} on type {}",
            value.value_type(),
            self
        );
        assert!(
            self.can_cast(target),
            "invalid cast from {} to {}",
            self,
            target
        );
        match (value, target) {
            (value, target) if value.value_type() == target => value.clone(),
            (Value::Integer(raw), ValueType::Boolean) => Value::boolean(*raw != 0),
            _ => unreachable!("cast matrix and can_cast disagree"),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Immutable payload instance of one [`ValueType`].
///
/// Equality and hashing follow the payload; values of different types are
/// never equal (and never an error to compare).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum Value {
    Boolean(bool),
    Integer(i32),
}

impl Value {
    /// Create a boolean value
    pub fn boolean(raw: bool) -> Self {
        Self::Boolean(raw)
    }

    /// Create an integer value
    pub fn integer(raw: i32) -> Self {
        Self::Integer(raw)
    }

    /// The type tag of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
        }
    }

    /// The raw boolean payload, or an error if this is not a boolean
    pub fn as_boolean(&self) -> Result<bool, EvaluationError> {
        match self {
            Value::Boolean(raw) => Ok(*raw),
            other => Err(EvaluationError::unexpected_type(
                ValueType::Boolean,
                other.value_type(),
            )),
        }
    }

    /// The raw integer payload, or an error if this is not an integer
    pub fn as_integer(&self) -> Result<i32, EvaluationError> {
        match self {
            Value::Integer(raw) => Ok(*raw),
            other => Err(EvaluationError::unexpected_type(
                ValueType::Integer,
                other.value_type(),
            )),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(raw) => write!(f, "{}", raw),
            Value::Integer(raw) => write!(f, "{}", raw),
        }
    }
}
