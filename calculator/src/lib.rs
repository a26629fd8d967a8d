#![deny(warnings)]

mod error;
pub use error::{CalcError, Result};

mod arith;
pub use arith::{add, divide, multiply, sqrt, subtract, MIN_OPERANDS};

mod expr;
pub use expr::{evaluate, Expression, Operator};
#[cfg(test)]
mod expr_test;
