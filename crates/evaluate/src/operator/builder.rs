//! Immutable builder for operators
//!
//! Every mutator returns a new builder instance and leaves the receiver
//! untouched, so partially configured builders can be shared and forked
//! freely. Appending the kinds "a", "b" and "c" results in the base
//! localization key `operators.<module id>.a.b.c.`; the host suffixes it
//! with `name`/`basename`, and with `<operator name>.name`/
//! `<operator name>.info` for operator-specific strings.

use std::sync::Arc;

use crate::error::{EvaluationError, LocalizedMessage, OperatorBuilderError};
use crate::value::{Value, ValueType};
use crate::variable::Variable;
use crate::MODULE_ID;

use super::{Operator, OperatorFunction, RenderPattern};

/// Persistent, field-accumulating constructor for [`Operator`].
///
/// Created through [`OperatorBuilder::for_output_type`]; materialized with
/// [`OperatorBuilder::build`].
#[derive(Clone)]
pub struct OperatorBuilder {
    symbol: Option<String>,
    operator_name: Option<String>,
    input_types: Option<Vec<ValueType>>,
    output_type: Option<ValueType>,
    function: Option<OperatorFunction>,
    render_pattern: Option<RenderPattern>,
    module_id: String,
    kinds: Vec<String>,
    conditional_output_type_deriver: Option<super::ConditionalOutputTypeDeriver>,
    type_validator: Option<super::TypeValidator>,
}

impl OperatorBuilder {
    /// Create a fresh builder with the given output type, the default module
    /// id and an empty kind path. All other fields start unset.
    pub fn for_output_type(output_type: ValueType) -> Self {
        Self {
            symbol: None,
            operator_name: None,
            input_types: None,
            output_type: Some(output_type),
            function: None,
            render_pattern: None,
            module_id: MODULE_ID.to_string(),
            kinds: Vec::new(),
            conditional_output_type_deriver: None,
            type_validator: None,
        }
    }

    /// Set the operator output value type.
    pub fn output(&self, output_type: ValueType) -> Self {
        Self {
            output_type: Some(output_type),
            ..self.clone()
        }
    }

    /// Set the operator symbol, used for display.
    pub fn symbol(&self, symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..self.clone()
        }
    }

    /// Set the operator name, used for localization.
    pub fn operator_name(&self, operator_name: impl Into<String>) -> Self {
        Self {
            operator_name: Some(operator_name.into()),
            ..self.clone()
        }
    }

    /// Set the symbol and operator name to the same token in one step.
    pub fn symbol_operator(&self, symbol_operator: impl Into<String>) -> Self {
        let token = symbol_operator.into();
        Self {
            symbol: Some(token.clone()),
            operator_name: Some(token),
            ..self.clone()
        }
    }

    /// Set the ordered input types for the operator.
    pub fn input_types(&self, input_types: Vec<ValueType>) -> Self {
        Self {
            input_types: Some(input_types),
            ..self.clone()
        }
    }

    /// Set the input types to `length` repetitions of the given type.
    pub fn input_types_repeated(&self, length: usize, default_type: ValueType) -> Self {
        self.input_types(vec![default_type; length])
    }

    /// Set a single input type.
    pub fn input_type(&self, input_type: ValueType) -> Self {
        self.input_types_repeated(1, input_type)
    }

    /// Set the evaluation function the operator should use.
    pub fn function(
        &self,
        function: impl Fn(&[&dyn Variable]) -> Result<Value, EvaluationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            function: Some(Arc::new(function)),
            ..self.clone()
        }
    }

    /// Set the render pattern for this operator in guis.
    pub fn render_pattern(&self, render_pattern: RenderPattern) -> Self {
        Self {
            render_pattern: Some(render_pattern),
            ..self.clone()
        }
    }

    /// Set the module id, by default the Fluxbound application id.
    pub fn module_id(&self, module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            ..self.clone()
        }
    }

    /// Append a localization key element. An absent segment is a no-op.
    pub fn append_kind<'a>(&self, kind: impl Into<Option<&'a str>>) -> Self {
        let mut kinds = self.kinds.clone();
        if let Some(kind) = kind.into() {
            kinds.push(kind.to_string());
        }
        Self {
            kinds,
            ..self.clone()
        }
    }

    /// Set the conditional output type deriver, used by
    /// [`Operator::conditional_output_type`].
    pub fn conditional_output_type_deriver(
        &self,
        deriver: impl Fn(&Operator, &[&dyn Variable]) -> ValueType + Send + Sync + 'static,
    ) -> Self {
        Self {
            conditional_output_type_deriver: Some(Arc::new(deriver)),
            ..self.clone()
        }
    }

    /// Set the type validator, used by [`Operator::validate_types`].
    pub fn type_validator(
        &self,
        validator: impl Fn(&Operator, &[ValueType]) -> Option<LocalizedMessage> + Send + Sync + 'static,
    ) -> Self {
        Self {
            type_validator: Some(Arc::new(validator)),
            ..self.clone()
        }
    }

    /// Build an operator from the current builder state.
    ///
    /// Fails with a construction error naming the first missing required
    /// field. The receiver is left untouched and can be reused. When no
    /// symbol was set explicitly, the operator name doubles as the symbol.
    pub fn build(&self) -> Result<Operator, OperatorBuilderError> {
        let output_type = self
            .output_type
            .ok_or(OperatorBuilderError::MissingField("output type"))?;
        let name = self
            .operator_name
            .clone()
            .ok_or(OperatorBuilderError::MissingField("operator name"))?;
        let input_types = self
            .input_types
            .clone()
            .ok_or(OperatorBuilderError::MissingField("input types"))?;
        let function = self
            .function
            .clone()
            .ok_or(OperatorBuilderError::MissingField("evaluation function"))?;
        let render_pattern = self
            .render_pattern
            .ok_or(OperatorBuilderError::MissingField("render pattern"))?;
        let symbol = self.symbol.clone().unwrap_or_else(|| name.clone());

        Ok(Operator {
            symbol,
            name,
            input_types,
            output_type,
            function,
            render_pattern,
            module_id: self.module_id.clone(),
            unlocalized_type: self.kinds.join("."),
            conditional_output_type_deriver: self.conditional_output_type_deriver.clone(),
            type_validator: self.type_validator.clone(),
        })
    }
}
