//! Ordering (`< > <= >=`) and equality (`== !=`) operations.
//!
//! Ordering takes exactly two Numbers. Equality takes exactly two arguments
//! of any tag and compares them structurally (`Value::equal`), so `==`/`!=`
//! work across mismatched tags instead of requiring both sides to be
//! Numbers.

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

fn bool_value(b: bool) -> Value {
    Value::number(if b { 1 } else { 0 })
}

macro_rules! ordering_builtin {
    ($fn_name:ident, $op:literal, $cmp:expr) => {
        pub fn $fn_name(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
            if args.len() != 2 {
                return Err(EvalError::arity_error($op, "2", args.len()));
            }
            let a = as_number($op, 0, &args[0])?;
            let b = as_number($op, 1, &args[1])?;
            Ok(bool_value($cmp(a, b)))
        }
    };
}

ordering_builtin!(lt, "<", |a: i64, b: i64| a < b);
ordering_builtin!(gt, ">", |a: i64, b: i64| a > b);
ordering_builtin!(le, "<=", |a: i64, b: i64| a <= b);
ordering_builtin!(ge, ">=", |a: i64, b: i64| a >= b);

pub fn eq(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("==", "2", args.len()));
    }
    Ok(bool_value(args[0].equal(&args[1])))
}

pub fn ne(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("!=", "2", args.len()));
    }
    Ok(bool_value(!args[0].equal(&args[1])))
}

pub fn register(env: &Rc<Environment>) {
    env.put_local("<", Value::builtin("<", lt));
    env.put_local(">", Value::builtin(">", gt));
    env.put_local("<=", Value::builtin("<=", le));
    env.put_local(">=", Value::builtin(">=", ge));
    env.put_local("==", Value::builtin("==", eq));
    env.put_local("!=", Value::builtin("!=", ne));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Rc<Environment> {
        Environment::new()
    }

    #[test]
    fn ordering_on_numbers() {
        assert!(matches!(
            gt(&env(), vec![Value::Number(3), Value::Number(2)]).unwrap(),
            Value::Number(1)
        ));
        assert!(matches!(
            lt(&env(), vec![Value::Number(3), Value::Number(2)]).unwrap(),
            Value::Number(0)
        ));
    }

    #[test]
    fn ordering_requires_exactly_two_numbers() {
        assert!(gt(&env(), vec![Value::Number(1)]).is_err());
        assert!(gt(&env(), vec![Value::symbol("x"), Value::Number(1)]).is_err());
    }

    #[test]
    fn equality_is_cross_tag() {
        let r = eq(&env(), vec![Value::string("hi"), Value::symbol("hi")]).unwrap();
        assert!(matches!(r, Value::Number(0)));
    }

    #[test]
    fn equality_on_equal_qexprs() {
        let a = Value::QExpr(vec![Value::Number(1), Value::Number(2)]);
        let b = Value::QExpr(vec![Value::Number(1), Value::Number(2)]);
        assert!(matches!(eq(&env(), vec![a, b]).unwrap(), Value::Number(1)));
    }

    #[test]
    fn not_equal_is_negation_of_equal() {
        let r = ne(&env(), vec![Value::Number(1), Value::Number(2)]).unwrap();
        assert!(matches!(r, Value::Number(1)));
    }
}
