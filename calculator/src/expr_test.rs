use crate::error::{CalcError, Result};
use crate::expr::{evaluate, Expression, Operator};

#[test]
fn evaluate_basic() -> Result<()> {
    assert_eq!(evaluate("2 + 3")?, 5.0);
    assert_eq!(evaluate("2 + 4")?, 6.0);
    assert_eq!(evaluate("5 - 2")?, 3.0);
    assert_eq!(evaluate("4 * -4")?, -16.0);
    assert_eq!(evaluate("3 * -2")?, -6.0);
    assert_eq!(evaluate("-3 * 2")?, -6.0);
    assert_eq!(evaluate("10 / 2")?, 5.0);
    assert_eq!(evaluate("2.5 * 1.5")?, 3.75);
    Ok(())
}

#[test]
fn evaluate_whitespace() -> Result<()> {
    assert_eq!(evaluate("2  + 4 ")?, 6.0);
    assert_eq!(evaluate(" 2  +  4  ")?, 6.0);
    assert_eq!(evaluate("  2    +  -4  ")?, -2.0);
    assert_eq!(evaluate("\t7\n-\t1 ")?, 6.0);
    Ok(())
}

#[test]
fn unknown_operator() {
    assert_eq!(evaluate(" 10 & 2   "), Err(CalcError::UnknownOperator("&".to_string())));
    assert_eq!(evaluate(" 10  #  2"), Err(CalcError::UnknownOperator("#".to_string())));
    assert_eq!(evaluate("10 & 2"), Err(CalcError::UnknownOperator("&".to_string())));
    assert_eq!(evaluate("10 ** 2"), Err(CalcError::UnknownOperator("**".to_string())));
}

#[test]
fn bad_parse() {
    let bad = ["", "   ", "10 +", "10 + 2 + 3", "10+2", "x + 2", "2 + y", "inf + 1", "1 * NaN"];
    for input in bad.iter() {
        match evaluate(input) {
            Err(CalcError::ParseError(_)) => (),
            other => panic!("{:?} should fail to parse, got {:?}", input, other),
        }
    }
}

#[test]
fn division_by_zero() {
    assert_eq!(evaluate("1 / 0"), Err(CalcError::DivisionByZero));
    assert_eq!(evaluate("0 / -0"), Err(CalcError::DivisionByZero));
}

#[test]
fn parse_expression() -> Result<()> {
    let expr: Expression = " 3.5   /  -7 ".parse()?;
    assert_eq!(expr, Expression::new(3.5, Operator::Div, -7.0));
    assert_eq!(expr.to_string(), "3.5 / -7");
    assert_eq!(expr.eval()?, -0.5);
    Ok(())
}

#[test]
fn operators() -> Result<()> {
    for (sym, op) in [("+", Operator::Add), ("-", Operator::Sub), ("*", Operator::Mul), ("/", Operator::Div)] {
        assert_eq!(sym.parse::<Operator>()?, op);
        assert_eq!(op.to_string(), sym);
    }
    assert_eq!(Operator::Sub.apply(1.0, 3.0)?, -2.0);
    assert_eq!(Operator::Div.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
    Ok(())
}
