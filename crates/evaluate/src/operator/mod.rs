//! Operator definitions and their evaluation contract
//!
//! An [`Operator`] is an immutable description of a symbol, localization
//! identity, typed signature and evaluation function, constructed through
//! the immutable [`OperatorBuilder`]. The built-in library lives in
//! `builtins` and is exposed process-wide through [`OperatorRegistry`].

mod builder;
mod builtins;
mod registry;

pub use builder::OperatorBuilder;
pub use builtins::{
    ARITHMETIC_ADDITION, ARITHMETIC_DIVISION, ARITHMETIC_MAX, ARITHMETIC_MIN, ARITHMETIC_MODULUS,
    ARITHMETIC_MULTIPLICATION, ARITHMETIC_SUBTRACTION, LOGICAL_AND, LOGICAL_NOT, LOGICAL_OR,
};
pub use registry::OperatorRegistry;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::{EvaluationError, LocalizedMessage};
use crate::value::{Value, ValueType};
use crate::variable::Variable;

/// Localization key reported when a candidate signature has the wrong arity
pub const ERROR_WRONG_INPUT_LENGTH: &str = "operators.error.wrong_input_length";
/// Localization key reported when a candidate input type does not match
pub const ERROR_WRONG_INPUT_TYPE: &str = "operators.error.wrong_input_type";

/// How the host visually composes an operator in guis. Opaque to this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderPattern {
    Infix,
    Prefix,
    Suffix,
}

/// Arity-checked evaluation function of an operator.
///
/// The function assumes the variable slice already matches the operator's
/// declared arity; [`Operator::evaluate`] enforces that before delegating.
pub type OperatorFunction =
    Arc<dyn Fn(&[&dyn Variable]) -> Result<Value, EvaluationError> + Send + Sync>;

/// Derives an output type from the live input variables.
///
/// Used by operators whose true output type depends on actual input values
/// rather than being fixed at definition time.
pub type ConditionalOutputTypeDeriver =
    Arc<dyn Fn(&Operator, &[&dyn Variable]) -> ValueType + Send + Sync>;

/// Validates a candidate input signature proposed by a caller.
///
/// Returns `None` on success or a localizable error description otherwise.
pub type TypeValidator =
    Arc<dyn Fn(&Operator, &[ValueType]) -> Option<LocalizedMessage> + Send + Sync>;

/// Immutable operator definition: signature, evaluation behavior and
/// optional type-derivation/validation hooks.
///
/// Instances are built once through [`OperatorBuilder`] and never mutated;
/// they are safe to share across concurrently running evaluations.
#[derive(Clone)]
pub struct Operator {
    pub(crate) symbol: String,
    pub(crate) name: String,
    pub(crate) input_types: Vec<ValueType>,
    pub(crate) output_type: ValueType,
    pub(crate) function: OperatorFunction,
    pub(crate) render_pattern: RenderPattern,
    pub(crate) module_id: String,
    pub(crate) unlocalized_type: String,
    pub(crate) conditional_output_type_deriver: Option<ConditionalOutputTypeDeriver>,
    pub(crate) type_validator: Option<TypeValidator>,
}

impl Operator {
    /// Display token for this operator (e.g. `&&`)
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Localization name for this operator
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of inputs this operator takes
    pub fn arity(&self) -> usize {
        self.input_types.len()
    }

    /// Ordered declared input types
    pub fn input_types(&self) -> &[ValueType] {
        &self.input_types
    }

    /// Statically declared output type
    pub fn output_type(&self) -> ValueType {
        self.output_type
    }

    /// How the host visually composes this operator
    pub fn render_pattern(&self) -> RenderPattern {
        self.render_pattern
    }

    /// Namespace/module identifier for localization
    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    /// The kind-path segments joined with `.` (empty path yields an empty string)
    pub fn unlocalized_type(&self) -> &str {
        &self.unlocalized_type
    }

    /// Base localization key: `operators.<module id>.<kind path>.`.
    ///
    /// The host prepends its namespace and suffixes `name`/`basename` for the
    /// operator category, and `<operator name>.name`/`<operator name>.info`
    /// for operator-specific strings.
    pub fn localization_base_key(&self) -> String {
        if self.unlocalized_type.is_empty() {
            format!("operators.{}.", self.module_id)
        } else {
            format!("operators.{}.{}.", self.module_id, self.unlocalized_type)
        }
    }

    /// Evaluate this operator over the given variables, in order.
    ///
    /// Variables are read lazily by the evaluation function; short-circuiting
    /// operators may never read some of them.
    ///
    /// # Panics
    ///
    /// Panics when the variable slice length disagrees with the declared
    /// arity. That indicates the host wired an operator incorrectly and is a
    /// programming error, not a recoverable condition.
    pub fn evaluate(&self, variables: &[&dyn Variable]) -> Result<Value, EvaluationError> {
        assert_eq!(
            variables.len(),
            self.arity(),
            "operator '{}' expects {} input(s) but was given {}",
            self.name,
            self.arity(),
            variables.len()
        );
        (self.function)(variables)
    }

    /// The output type for the given live inputs.
    ///
    /// Delegates to the conditional-output-type deriver when one was supplied
    /// at build time; otherwise returns the statically declared output type.
    pub fn conditional_output_type(&self, variables: &[&dyn Variable]) -> ValueType {
        match &self.conditional_output_type_deriver {
            Some(deriver) => deriver(self, variables),
            None => self.output_type,
        }
    }

    /// Validate a candidate input signature proposed by a caller.
    ///
    /// With a validator hook, delegates to it. Without one, the candidate
    /// must have the declared arity and each candidate type must be identical
    /// to or castable to the declared type at that position.
    pub fn validate_types(&self, input: &[ValueType]) -> Option<LocalizedMessage> {
        if let Some(validator) = &self.type_validator {
            return validator(self, input);
        }
        if input.len() != self.input_types.len() {
            return Some(LocalizedMessage::with_args(
                ERROR_WRONG_INPUT_LENGTH,
                vec![
                    self.name.clone(),
                    input.len().to_string(),
                    self.input_types.len().to_string(),
                ],
            ));
        }
        for (position, (candidate, expected)) in
            input.iter().zip(self.input_types.iter()).enumerate()
        {
            if candidate != expected && !candidate.can_cast(*expected) {
                return Some(LocalizedMessage::with_args(
                    ERROR_WRONG_INPUT_TYPE,
                    vec![
                        self.name.clone(),
                        position.to_string(),
                        expected.name().to_string(),
                        candidate.name().to_string(),
                    ],
                ));
            }
        }
        None
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .field("name", &self.name)
            .field("input_types", &self.input_types)
            .field("output_type", &self.output_type)
            .field("render_pattern", &self.render_pattern)
            .field("module_id", &self.module_id)
            .field("unlocalized_type", &self.unlocalized_type)
            .finish_non_exhaustive()
    }
}
