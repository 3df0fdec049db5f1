//! Fluxbound evaluation core.
//!
//! A small, strongly-typed operator/value evaluation engine embedded in the
//! Fluxbound host. Given a fixed set of value types and variables that lazily
//! produce values of those types, it evaluates user-composed operators over
//! those variables, producing a typed result or a descriptive, localizable
//! failure.
//!
//! The host's world placement, connector-network management, persistence and
//! GUI layers live outside this crate; they interact with it only through
//! [`Variable`] implementations and the [`Operator`] evaluation entry point.

pub mod error;
pub mod light;
pub mod operator;
pub mod value;
pub mod variable;

/// Identifier of the owning application, used as the default operator module id.
pub const MODULE_ID: &str = "fluxbound";

pub use error::{EvaluationError, LocalizedMessage, OperatorBuilderError};
pub use light::{LightLevelCalculator, LightLevelError, LightLevelRegistry, MAX_LIGHT_LEVEL};
pub use operator::{
    Operator, OperatorBuilder, OperatorRegistry, RenderPattern, ARITHMETIC_ADDITION,
    ARITHMETIC_DIVISION, ARITHMETIC_MAX, ARITHMETIC_MIN, ARITHMETIC_MODULUS,
    ARITHMETIC_MULTIPLICATION, ARITHMETIC_SUBTRACTION, LOGICAL_AND, LOGICAL_NOT, LOGICAL_OR,
};
pub use value::{Value, ValueType};
pub use variable::{Constant, Variable};
