use crate::error::{CalcError, Result};
use tracing::debug;

/// Minimum number of operands taken by the variadic operations.
pub const MIN_OPERANDS: usize = 2;

fn require_operands(operands: &[f64]) -> Result<()> {
    if operands.len() < MIN_OPERANDS {
        debug!(supplied = operands.len(), "rejecting short operand list");
        return Err(CalcError::InsufficientOperands {
            required: MIN_OPERANDS,
            supplied: operands.len(),
        });
    }
    Ok(())
}

// left fold over operands, seeded with the first one
fn fold_left(operands: &[f64], reduce_op: fn(f64, f64) -> f64) -> Result<f64> {
    require_operands(operands)?;
    Ok(operands[1..].iter().fold(operands[0], |acc, &x| reduce_op(acc, x)))
}

/// Sums all operands left to right.
pub fn add(operands: &[f64]) -> Result<f64> {
    fold_left(operands, |acc, x| acc + x)
}

/// Subtracts every operand after the first from the running result.
pub fn subtract(operands: &[f64]) -> Result<f64> {
    fold_left(operands, |acc, x| acc - x)
}

/// Multiplies all operands left to right. A NaN operand propagates even
/// if a zero factor is present.
pub fn multiply(operands: &[f64]) -> Result<f64> {
    fold_left(operands, |acc, x| acc * x)
}

/// Divides the first operand by each following one in turn.
///
/// All divisors are checked before any division happens, so a zero anywhere
/// after the first operand yields [`CalcError::DivisionByZero`]. Chains that
/// overflow through tiny divisors return infinity rather than an error.
pub fn divide(operands: &[f64]) -> Result<f64> {
    require_operands(operands)?;
    if operands[1..].iter().any(|&d| d == 0.0) {
        debug!(?operands, "zero divisor");
        return Err(CalcError::DivisionByZero);
    }
    fold_left(operands, |acc, x| acc / x)
}

pub fn sqrt(x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(CalcError::NegativeOperand(x));
    }
    Ok(x.sqrt())
}
