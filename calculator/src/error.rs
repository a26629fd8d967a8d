use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("at least {required} operands required, got {supplied}")]
    InsufficientOperands { required: usize, supplied: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of negative number {0}")]
    NegativeOperand(f64),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
