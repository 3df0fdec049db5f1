//! Collection of available operators
//!
//! Built once at first use and never mutated afterward. Evaluation functions
//! are pure with respect to their variable inputs, read operands lazily and
//! apply algebraic-identity shortcuts where mathematically safe: a variable
//! read may be expensive or may itself fail, and forwarding an operand's
//! value verbatim avoids allocating a fresh one on the hot evaluation path.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::error::EvaluationError;
use crate::value::{Value, ValueType};
use crate::variable::Variable;

use super::{Operator, OperatorBuilder, RenderPattern};

/// Build a logical operator: `arity` boolean inputs, one boolean output.
fn logical_operator(
    symbol: &str,
    arity: usize,
    function: impl Fn(&[&dyn Variable]) -> Result<Value, EvaluationError> + Send + Sync + 'static,
) -> Arc<Operator> {
    Arc::new(
        OperatorBuilder::for_output_type(ValueType::Boolean)
            .symbol_operator(symbol)
            .input_types_repeated(arity, ValueType::Boolean)
            .render_pattern(RenderPattern::Infix)
            .append_kind("logical")
            .function(function)
            .build()
            .expect("logical operator definition is complete"),
    )
}

/// Build an arithmetic operator: two integer inputs, one integer output.
fn arithmetic_operator(
    symbol: &str,
    function: impl Fn(&[&dyn Variable]) -> Result<Value, EvaluationError> + Send + Sync + 'static,
) -> Arc<Operator> {
    Arc::new(
        OperatorBuilder::for_output_type(ValueType::Integer)
            .symbol_operator(symbol)
            .input_types_repeated(2, ValueType::Integer)
            .render_pattern(RenderPattern::Infix)
            .append_kind("arithmetic")
            .function(function)
            .build()
            .expect("arithmetic operator definition is complete"),
    )
}

/// Short-circuit logical AND operator with two input booleans and one output boolean.
pub static LOGICAL_AND: Lazy<Arc<Operator>> = Lazy::new(|| {
    logical_operator("&&", 2, |variables| {
        let a = variables[0].value()?.as_boolean()?;
        if !a {
            // Operand 0 alone determines the result; operand 1 is never read.
            Ok(Value::boolean(false))
        } else {
            variables[1].value()
        }
    })
});

/// Short-circuit logical OR operator with two input booleans and one output boolean.
pub static LOGICAL_OR: Lazy<Arc<Operator>> = Lazy::new(|| {
    logical_operator("||", 2, |variables| {
        let a = variables[0].value()?.as_boolean()?;
        if a {
            Ok(Value::boolean(true))
        } else {
            variables[1].value()
        }
    })
});

/// Logical NOT operator with one input boolean and one output boolean.
pub static LOGICAL_NOT: Lazy<Arc<Operator>> = Lazy::new(|| {
    logical_operator("!", 1, |variables| {
        let a = variables[0].value()?.as_boolean()?;
        Ok(Value::boolean(!a))
    })
});

/// Arithmetic ADD operator with two input integers and one output integer.
pub static ARITHMETIC_ADDITION: Lazy<Arc<Operator>> = Lazy::new(|| {
    arithmetic_operator("+", |variables| {
        let a_value = variables[0].value()?;
        let a = a_value.as_integer()?;
        if a == 0 {
            // a is the neutral element for addition
            variables[1].value()
        } else {
            let b_value = variables[1].value()?;
            let b = b_value.as_integer()?;
            if b == 0 {
                Ok(a_value)
            } else {
                Ok(Value::integer(a.wrapping_add(b)))
            }
        }
    })
});

/// Arithmetic MINUS operator with two input integers and one output integer.
pub static ARITHMETIC_SUBTRACTION: Lazy<Arc<Operator>> = Lazy::new(|| {
    arithmetic_operator("-", |variables| {
        let b = variables[1].value()?.as_integer()?;
        let a_value = variables[0].value()?;
        if b == 0 {
            // b is the neutral element for subtraction
            Ok(a_value)
        } else {
            Ok(Value::integer(a_value.as_integer()?.wrapping_sub(b)))
        }
    })
});

/// Arithmetic MULTIPLY operator with two input integers and one output integer.
pub static ARITHMETIC_MULTIPLICATION: Lazy<Arc<Operator>> = Lazy::new(|| {
    arithmetic_operator("*", |variables| {
        let a_value = variables[0].value()?;
        let a = a_value.as_integer()?;
        if a == 0 {
            // a is the absorbing element for multiplication; b is never read
            Ok(a_value)
        } else if a == 1 {
            variables[1].value()
        } else {
            let b_value = variables[1].value()?;
            let b = b_value.as_integer()?;
            if b == 1 {
                Ok(a_value)
            } else {
                Ok(Value::integer(a.wrapping_mul(b)))
            }
        }
    })
});

/// Arithmetic DIVIDE operator with two input integers and one output integer.
pub static ARITHMETIC_DIVISION: Lazy<Arc<Operator>> = Lazy::new(|| {
    arithmetic_operator("/", |variables| {
        let b = variables[1].value()?.as_integer()?;
        if b == 0 {
            Err(EvaluationError::DivisionByZero)
        } else if b == 1 {
            // b is the neutral element for division
            variables[0].value()
        } else {
            // Wrapping division: i32::MIN / -1 yields i32::MIN instead of
            // aborting, matching two's-complement integer semantics.
            let a = variables[0].value()?.as_integer()?;
            Ok(Value::integer(a.wrapping_div(b)))
        }
    })
});

/// Arithmetic MODULO operator with two input integers and one output integer.
pub static ARITHMETIC_MODULUS: Lazy<Arc<Operator>> = Lazy::new(|| {
    arithmetic_operator("%", |variables| {
        let b = variables[1].value()?.as_integer()?;
        if b == 0 {
            Err(EvaluationError::DivisionByZero)
        } else if b == 1 {
            // Any integer modulo one is zero; a is never read
            Ok(Value::integer(0))
        } else {
            let a = variables[0].value()?.as_integer()?;
            Ok(Value::integer(a.wrapping_rem(b)))
        }
    })
});

/// Arithmetic MAX operator with two input integers and one output integer.
pub static ARITHMETIC_MAX: Lazy<Arc<Operator>> = Lazy::new(|| {
    arithmetic_operator("max", |variables| {
        let a = variables[0].value()?.as_integer()?;
        let b = variables[1].value()?.as_integer()?;
        Ok(Value::integer(a.max(b)))
    })
});

/// Arithmetic MIN operator with two input integers and one output integer.
pub static ARITHMETIC_MIN: Lazy<Arc<Operator>> = Lazy::new(|| {
    arithmetic_operator("min", |variables| {
        let a = variables[0].value()?.as_integer()?;
        let b = variables[1].value()?.as_integer()?;
        Ok(Value::integer(a.min(b)))
    })
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::{Constant, MockVariable};

    /// A variable that fails when read; used to prove an operand is either
    /// skipped (no failure surfaces) or propagated verbatim.
    fn failing(value_type: ValueType) -> MockVariable {
        let mut variable = MockVariable::new();
        variable.expect_value_type().return_const(value_type);
        variable
            .expect_value()
            .returning(|| Err(EvaluationError::variable_read("backing state is gone")));
        variable
    }

    /// A variable that must never be read at all.
    fn never_read(value_type: ValueType) -> MockVariable {
        let mut variable = MockVariable::new();
        variable.expect_value_type().return_const(value_type);
        variable.expect_value().times(0);
        variable
    }

    fn evaluate(operator: &Operator, a: &dyn Variable, b: &dyn Variable) -> Result<Value, EvaluationError> {
        operator.evaluate(&[a, b])
    }

    #[test]
    fn test_and_truth_table() {
        for (a, b, expected) in [
            (false, false, false),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ] {
            let result = evaluate(&LOGICAL_AND, &Constant::boolean(a), &Constant::boolean(b));
            assert_eq!(result, Ok(Value::boolean(expected)), "{} && {}", a, b);
        }
    }

    #[test]
    fn test_and_short_circuits_on_false() {
        let b = never_read(ValueType::Boolean);
        let result = evaluate(&LOGICAL_AND, &Constant::boolean(false), &b);
        assert_eq!(result, Ok(Value::boolean(false)));
    }

    #[test]
    fn test_and_with_failing_second_operand() {
        // The failing operand is skipped entirely, so no failure surfaces.
        let b = failing(ValueType::Boolean);
        let result = evaluate(&LOGICAL_AND, &Constant::boolean(false), &b);
        assert_eq!(result, Ok(Value::boolean(false)));

        // With a true first operand the failure propagates verbatim.
        let b = failing(ValueType::Boolean);
        let result = evaluate(&LOGICAL_AND, &Constant::boolean(true), &b);
        assert_eq!(
            result,
            Err(EvaluationError::variable_read("backing state is gone"))
        );
    }

    #[test]
    fn test_or_truth_table() {
        for (a, b, expected) in [
            (false, false, false),
            (false, true, true),
            (true, false, true),
            (true, true, true),
        ] {
            let result = evaluate(&LOGICAL_OR, &Constant::boolean(a), &Constant::boolean(b));
            assert_eq!(result, Ok(Value::boolean(expected)), "{} || {}", a, b);
        }
    }

    #[test]
    fn test_or_short_circuits_on_true() {
        let b = never_read(ValueType::Boolean);
        let result = evaluate(&LOGICAL_OR, &Constant::boolean(true), &b);
        assert_eq!(result, Ok(Value::boolean(true)));

        let b = failing(ValueType::Boolean);
        let result = evaluate(&LOGICAL_OR, &Constant::boolean(true), &b);
        assert_eq!(result, Ok(Value::boolean(true)));
    }

    #[test]
    fn test_not() {
        let a = Constant::boolean(true);
        assert_eq!(
            LOGICAL_NOT.evaluate(&[&a]),
            Ok(Value::boolean(false))
        );
        let a = Constant::boolean(false);
        assert_eq!(LOGICAL_NOT.evaluate(&[&a]), Ok(Value::boolean(true)));
    }

    #[test]
    fn test_addition() {
        let result = evaluate(
            &ARITHMETIC_ADDITION,
            &Constant::integer(2),
            &Constant::integer(3),
        );
        assert_eq!(result, Ok(Value::integer(5)));
    }

    #[test]
    fn test_addition_zero_forwards_second_operand_unread_combined() {
        let result = evaluate(
            &ARITHMETIC_ADDITION,
            &Constant::integer(0),
            &Constant::integer(5),
        );
        assert_eq!(result, Ok(Value::integer(5)));

        let result = evaluate(
            &ARITHMETIC_ADDITION,
            &Constant::integer(5),
            &Constant::integer(0),
        );
        assert_eq!(result, Ok(Value::integer(5)));
    }

    #[test]
    fn test_subtraction() {
        let result = evaluate(
            &ARITHMETIC_SUBTRACTION,
            &Constant::integer(7),
            &Constant::integer(3),
        );
        assert_eq!(result, Ok(Value::integer(4)));

        // subtract(a, 0) == a for all a
        for a in [-3, 0, 12] {
            let result = evaluate(
                &ARITHMETIC_SUBTRACTION,
                &Constant::integer(a),
                &Constant::integer(0),
            );
            assert_eq!(result, Ok(Value::integer(a)));
        }
    }

    #[test]
    fn test_multiplication() {
        let result = evaluate(
            &ARITHMETIC_MULTIPLICATION,
            &Constant::integer(4),
            &Constant::integer(3),
        );
        assert_eq!(result, Ok(Value::integer(12)));
    }

    #[test]
    fn test_multiplication_by_zero_never_reads_second_operand() {
        let b = never_read(ValueType::Integer);
        let result = evaluate(&ARITHMETIC_MULTIPLICATION, &Constant::integer(0), &b);
        assert_eq!(result, Ok(Value::integer(0)));

        let b = failing(ValueType::Integer);
        let result = evaluate(&ARITHMETIC_MULTIPLICATION, &Constant::integer(0), &b);
        assert_eq!(result, Ok(Value::integer(0)));
    }

    #[test]
    fn test_multiplication_identity_forwards_operands() {
        let result = evaluate(
            &ARITHMETIC_MULTIPLICATION,
            &Constant::integer(1),
            &Constant::integer(9),
        );
        assert_eq!(result, Ok(Value::integer(9)));

        let result = evaluate(
            &ARITHMETIC_MULTIPLICATION,
            &Constant::integer(9),
            &Constant::integer(1),
        );
        assert_eq!(result, Ok(Value::integer(9)));
    }

    #[test]
    fn test_division() {
        let result = evaluate(
            &ARITHMETIC_DIVISION,
            &Constant::integer(12),
            &Constant::integer(4),
        );
        assert_eq!(result, Ok(Value::integer(3)));

        // Truncating integer division
        let result = evaluate(
            &ARITHMETIC_DIVISION,
            &Constant::integer(7),
            &Constant::integer(2),
        );
        assert_eq!(result, Ok(Value::integer(3)));
        let result = evaluate(
            &ARITHMETIC_DIVISION,
            &Constant::integer(-7),
            &Constant::integer(2),
        );
        assert_eq!(result, Ok(Value::integer(-3)));
    }

    #[test]
    fn test_division_by_zero_fails() {
        for a in [7, -7, 1] {
            let result = evaluate(
                &ARITHMETIC_DIVISION,
                &Constant::integer(a),
                &Constant::integer(0),
            );
            assert_eq!(result, Err(EvaluationError::DivisionByZero));
        }
    }

    #[test]
    fn test_division_by_one_forwards_first_operand() {
        for a in [-3, 0, 42] {
            let result = evaluate(
                &ARITHMETIC_DIVISION,
                &Constant::integer(a),
                &Constant::integer(1),
            );
            assert_eq!(result, Ok(Value::integer(a)));
        }
    }

    #[test]
    fn test_modulus() {
        let result = evaluate(
            &ARITHMETIC_MODULUS,
            &Constant::integer(10),
            &Constant::integer(3),
        );
        assert_eq!(result, Ok(Value::integer(1)));

        // Truncating division sign convention
        let result = evaluate(
            &ARITHMETIC_MODULUS,
            &Constant::integer(-10),
            &Constant::integer(3),
        );
        assert_eq!(result, Ok(Value::integer(-1)));
    }

    #[test]
    fn test_division_overflow_wraps() {
        // i32::MIN / -1 overflows two's complement; the result wraps back to
        // i32::MIN instead of crashing the evaluation.
        let result = evaluate(
            &ARITHMETIC_DIVISION,
            &Constant::integer(i32::MIN),
            &Constant::integer(-1),
        );
        assert_eq!(result, Ok(Value::integer(i32::MIN)));
    }

    #[test]
    fn test_modulus_overflow_wraps() {
        let result = evaluate(
            &ARITHMETIC_MODULUS,
            &Constant::integer(i32::MIN),
            &Constant::integer(-1),
        );
        assert_eq!(result, Ok(Value::integer(0)));
    }

    #[test]
    fn test_arithmetic_extremes_wrap() {
        let result = evaluate(
            &ARITHMETIC_ADDITION,
            &Constant::integer(i32::MAX),
            &Constant::integer(1),
        );
        assert_eq!(result, Ok(Value::integer(i32::MIN)));

        let result = evaluate(
            &ARITHMETIC_SUBTRACTION,
            &Constant::integer(i32::MIN),
            &Constant::integer(1),
        );
        assert_eq!(result, Ok(Value::integer(i32::MAX)));

        let result = evaluate(
            &ARITHMETIC_MULTIPLICATION,
            &Constant::integer(i32::MIN),
            &Constant::integer(-1),
        );
        assert_eq!(result, Ok(Value::integer(i32::MIN)));
    }

    #[test]
    fn test_modulus_by_zero_fails() {
        let result = evaluate(
            &ARITHMETIC_MODULUS,
            &Constant::integer(10),
            &Constant::integer(0),
        );
        assert_eq!(result, Err(EvaluationError::DivisionByZero));
    }

    #[test]
    fn test_modulus_by_one_is_zero_without_reading_first_operand() {
        let a = never_read(ValueType::Integer);
        let result = evaluate(&ARITHMETIC_MODULUS, &a, &Constant::integer(1));
        assert_eq!(result, Ok(Value::integer(0)));
    }

    #[test]
    fn test_max_and_min() {
        for (a, b) in [(3, 7), (7, 3), (-5, 2), (-5, -9), (4, 4)] {
            let result = evaluate(
                &ARITHMETIC_MAX,
                &Constant::integer(a),
                &Constant::integer(b),
            );
            assert_eq!(result, Ok(Value::integer(a.max(b))), "max({}, {})", a, b);

            let result = evaluate(
                &ARITHMETIC_MIN,
                &Constant::integer(a),
                &Constant::integer(b),
            );
            assert_eq!(result, Ok(Value::integer(a.min(b))), "min({}, {})", a, b);
        }
    }

    #[test]
    fn test_signatures_match_arity() {
        let unary: [&Lazy<Arc<Operator>>; 1] = [&LOGICAL_NOT];
        let binary = [
            &LOGICAL_AND,
            &LOGICAL_OR,
            &ARITHMETIC_ADDITION,
            &ARITHMETIC_SUBTRACTION,
            &ARITHMETIC_MULTIPLICATION,
            &ARITHMETIC_DIVISION,
            &ARITHMETIC_MODULUS,
            &ARITHMETIC_MAX,
            &ARITHMETIC_MIN,
        ];
        for operator in unary {
            assert_eq!(operator.arity(), 1, "{}", operator.symbol());
        }
        for operator in binary {
            assert_eq!(operator.arity(), 2, "{}", operator.symbol());
        }
    }

    #[test]
    fn test_localization_identity_of_builtins() {
        assert_eq!(LOGICAL_AND.unlocalized_type(), "logical");
        assert_eq!(
            LOGICAL_AND.localization_base_key(),
            "operators.fluxbound.logical."
        );
        assert_eq!(ARITHMETIC_MAX.unlocalized_type(), "arithmetic");
        assert_eq!(
            ARITHMETIC_MAX.localization_base_key(),
            "operators.fluxbound.arithmetic."
        );
    }

    #[test]
    fn test_variable_read_failure_propagates_verbatim() {
        let a = failing(ValueType::Integer);
        let result = evaluate(&ARITHMETIC_ADDITION, &a, &Constant::integer(1));
        assert_eq!(
            result,
            Err(EvaluationError::variable_read("backing state is gone"))
        );
    }
}
