//! Arithmetic operations: `+ - * / %`
//!
//! All operands must be Numbers. Operators fold left to right over their
//! arguments; unary `-` negates. `/` and `%` error on a zero divisor.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn as_number(name: &str, position: usize, value: &Value) -> Result<i64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(EvalError::type_error(name, position, "Number", other)),
    }
}

fn fold(name: &'static str, env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    let _ = env;
    // `+`/`*` fold from their identities on zero args; `-`/`/`/`%` need at
    // least one operand to negate or divide.
    if args.is_empty() && matches!(name, "-" | "/" | "%") {
        return Err(EvalError::arity_error(name, "at least 1", 0));
    }

    let mut numbers = Vec::with_capacity(args.len());
    for (i, arg) in args.iter().enumerate() {
        numbers.push(as_number(name, i, arg)?);
    }

    let result = match name {
        "+" => numbers.iter().sum(),
        "*" => numbers.iter().fold(1i64, |acc, n| acc.wrapping_mul(*n)),
        "-" => {
            if numbers.len() == 1 {
                numbers[0].wrapping_neg()
            } else {
                let mut acc = numbers[0];
                for n in &numbers[1..] {
                    acc = acc.wrapping_sub(*n);
                }
                acc
            }
        }
        "/" => {
            let mut acc = numbers[0];
            for n in &numbers[1..] {
                if *n == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                acc = acc.wrapping_div(*n);
            }
            acc
        }
        "%" => {
            if numbers.len() != 2 {
                return Err(EvalError::arity_error(name, "2", numbers.len()));
            }
            if numbers[1] == 0 {
                return Err(EvalError::DivisionByZero);
            }
            numbers[0].wrapping_rem(numbers[1])
        }
        _ => unreachable!("unregistered arithmetic operator"),
    };

    Ok(Value::number(result))
}

macro_rules! arith_builtin {
    ($fn_name:ident, $op:literal) => {
        pub fn $fn_name(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
            fold($op, env, args)
        }
    };
}

arith_builtin!(add, "+");
arith_builtin!(sub, "-");
arith_builtin!(mul, "*");
arith_builtin!(div, "/");
arith_builtin!(rem, "%");

pub fn register(env: &Rc<Environment>) {
    env.put_local("+", Value::builtin("+", add));
    env.put_local("-", Value::builtin("-", sub));
    env.put_local("*", Value::builtin("*", mul));
    env.put_local("/", Value::builtin("/", div));
    env.put_local("%", Value::builtin("%", rem));
}
