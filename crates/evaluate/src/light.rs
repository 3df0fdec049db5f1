//! Light level derivation from values
//!
//! The host renders value-carrying blocks with a light level derived from
//! the value they currently hold. Calculators are registered per value type;
//! a value of an unregistered type falls back to the first registered type
//! it can cast to.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::value::{Value, ValueType};

/// Highest light level the host can render
pub const MAX_LIGHT_LEVEL: i32 = 15;

/// Derives a light level in `0..=MAX_LIGHT_LEVEL` from a value
pub type LightLevelCalculator = Arc<dyn Fn(&Value) -> i32 + Send + Sync>;

/// The value's type has no registered calculator and casts to none that do
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("The value {0} can not be used to derive a light level")]
pub struct LightLevelError(pub Value);

/// Registry mapping value types to light level calculators.
pub struct LightLevelRegistry {
    calculators: HashMap<ValueType, LightLevelCalculator>,
}

impl Default for LightLevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LightLevelRegistry {
    /// Create a registry with the built-in calculators: booleans light up
    /// fully when true, integers are clamped to the renderable range.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(
            ValueType::Boolean,
            Arc::new(|value| match value {
                Value::Boolean(true) => MAX_LIGHT_LEVEL,
                _ => 0,
            }),
        );
        registry.register(
            ValueType::Integer,
            Arc::new(|value| match value {
                Value::Integer(raw) => (*raw).clamp(0, MAX_LIGHT_LEVEL),
                _ => 0,
            }),
        );
        registry
    }

    /// Create an empty registry without built-in calculators.
    pub fn empty() -> Self {
        Self {
            calculators: HashMap::new(),
        }
    }

    /// Register a calculator for a value type, replacing any existing one.
    pub fn register(&mut self, value_type: ValueType, calculator: LightLevelCalculator) {
        self.calculators.insert(value_type, calculator);
    }

    /// The calculator registered for a value type, if any.
    pub fn calculator_for(&self, value_type: ValueType) -> Option<&LightLevelCalculator> {
        self.calculators.get(&value_type)
    }

    /// Derive the light level for a value.
    ///
    /// Uses the calculator registered for the value's own type when present,
    /// otherwise the first registered type the value can cast to.
    pub fn light_level(&self, value: &Value) -> Result<i32, LightLevelError> {
        if let Some(calculator) = self.calculators.get(&value.value_type()) {
            return Ok(calculator(value));
        }
        for (target, calculator) in &self.calculators {
            if value.value_type().can_cast(*target) {
                return Ok(calculator(&value.value_type().cast(value, *target)));
            }
        }
        Err(LightLevelError(value.clone()))
    }
}
