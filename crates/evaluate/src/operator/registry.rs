//! Process-wide registry of operator definitions

use std::sync::Arc;
use tracing::debug;

use super::builtins::{
    ARITHMETIC_ADDITION, ARITHMETIC_DIVISION, ARITHMETIC_MAX, ARITHMETIC_MIN, ARITHMETIC_MODULUS,
    ARITHMETIC_MULTIPLICATION, ARITHMETIC_SUBTRACTION, LOGICAL_AND, LOGICAL_NOT, LOGICAL_OR,
};
use super::Operator;

/// Registry of available operators.
///
/// Constructed once at startup and read-only thereafter; entries hold no
/// external resources, so there are no teardown semantics.
pub struct OperatorRegistry {
    operators: Vec<Arc<Operator>>,
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorRegistry {
    /// Create a new registry with all built-in operators.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(LOGICAL_AND.clone());
        registry.register(LOGICAL_OR.clone());
        registry.register(LOGICAL_NOT.clone());
        registry.register(ARITHMETIC_ADDITION.clone());
        registry.register(ARITHMETIC_SUBTRACTION.clone());
        registry.register(ARITHMETIC_MULTIPLICATION.clone());
        registry.register(ARITHMETIC_DIVISION.clone());
        registry.register(ARITHMETIC_MODULUS.clone());
        registry.register(ARITHMETIC_MAX.clone());
        registry.register(ARITHMETIC_MIN.clone());
        debug!(count = registry.operators.len(), "registered built-in operators");
        registry
    }

    /// Create an empty registry without built-in operators.
    pub fn empty() -> Self {
        Self {
            operators: Vec::new(),
        }
    }

    /// Register an operator.
    pub fn register(&mut self, operator: Arc<Operator>) {
        self.operators.push(operator);
    }

    /// Get an operator by its localization name.
    pub fn get(&self, name: &str) -> Option<Arc<Operator>> {
        self.operators
            .iter()
            .find(|operator| operator.name() == name)
            .cloned()
    }

    /// Get an operator by its display symbol.
    pub fn get_by_symbol(&self, symbol: &str) -> Option<Arc<Operator>> {
        self.operators
            .iter()
            .find(|operator| operator.symbol() == symbol)
            .cloned()
    }

    /// List all registered operator names.
    pub fn list_operators(&self) -> Vec<&str> {
        self.operators.iter().map(|o| o.name()).collect()
    }
}
