use crate::arith::{add, divide, multiply, subtract};
use crate::error::{CalcError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match *self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    // go through the variadic functions so both entry points share one policy
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64> {
        let operands = [lhs, rhs];
        match *self {
            Operator::Add => add(&operands),
            Operator::Sub => subtract(&operands),
            Operator::Mul => multiply(&operands),
            Operator::Div => divide(&operands),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Operator> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single binary operation, `lhs op rhs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
}

fn parse_operand(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        Ok(_) => Err(CalcError::ParseError(format!("non-finite operand '{}'", token))),
        Err(e) => Err(CalcError::ParseError(format!("bad operand '{}': {}", token, e))),
    }
}

impl Expression {
    pub fn new(lhs: f64, op: Operator, rhs: f64) -> Expression {
        Expression { lhs, op, rhs }
    }

    pub fn eval(&self) -> Result<f64> {
        self.op.apply(self.lhs, self.rhs)
    }
}

impl FromStr for Expression {
    type Err = CalcError;

    // expects exactly "<number> <op> <number>", whitespace anywhere around tokens
    fn from_str(input: &str) -> Result<Expression> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let [lhs, op, rhs]: [&str; 3] = tokens.try_into().map_err(|t: Vec<&str>| {
            CalcError::ParseError(format!("expected 3 tokens, found {}", t.len()))
        })?;
        let expr = Expression {
            lhs: parse_operand(lhs)?,
            op: op.parse()?,
            rhs: parse_operand(rhs)?,
        };
        trace!(%expr, "parsed expression");
        Ok(expr)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

/// Parses and evaluates a single binary expression such as `"3 - 2"`.
pub fn evaluate(expression: &str) -> Result<f64> {
    expression.parse::<Expression>()?.eval()
}
