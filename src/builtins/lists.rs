//! List operations: `list`, `head`, `tail`, `join`, `eval`.
//!
//! `head`/`tail`/`join` operate on Q-Expressions only; `list` turns its
//! (already-evaluated) arguments into a Q-Expression; `eval` reinterprets a
//! Q-Expression as an S-Expression and evaluates it.

use crate::env::Environment;
use crate::error::EvalError;
use crate::eval::eval_quoted;
use crate::value::Value;
use std::rc::Rc;

fn require_qexpr(name: &str, position: usize, value: &Value) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::QExpr(children) => Ok(children.clone()),
        other => Err(EvalError::type_error(name, position, "Q-Expression", other)),
    }
}

pub fn list(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    Ok(Value::QExpr(args))
}

pub fn head(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("head", "1", args.len()));
    }
    let children = require_qexpr("head", 0, &args[0])?;
    if children.is_empty() {
        return Err(EvalError::not_empty_error("head", 0));
    }
    let first = Value::SExpr(args).take(0);
    match first {
        Value::QExpr(mut children) => {
            children.truncate(1);
            Ok(Value::QExpr(children))
        }
        _ => unreachable!("checked above"),
    }
}

pub fn tail(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("tail", "1", args.len()));
    }
    let children = require_qexpr("tail", 0, &args[0])?;
    if children.is_empty() {
        return Err(EvalError::not_empty_error("tail", 0));
    }
    let first = Value::SExpr(args).take(0);
    match first {
        Value::QExpr(mut children) => {
            children.remove(0);
            Ok(Value::QExpr(children))
        }
        _ => unreachable!("checked above"),
    }
}

pub fn join(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    let mut result = Value::qexpr();
    for (i, arg) in args.into_iter().enumerate() {
        require_qexpr("join", i, &arg)?;
        result = result.join(arg);
    }
    Ok(result)
}

pub fn eval(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("eval", "1", args.len()));
    }
    require_qexpr("eval", 0, &args[0])?;
    Ok(eval_quoted(Value::SExpr(args).take(0), env))
}

pub fn register(env: &Rc<Environment>) {
    env.put_local("list", Value::builtin("list", list));
    env.put_local("head", Value::builtin("head", head));
    env.put_local("tail", Value::builtin("tail", tail));
    env.put_local("join", Value::builtin("join", join));
    env.put_local("eval", Value::builtin("eval", eval));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Rc<Environment> {
        Environment::new()
    }

    #[test]
    fn list_wraps_args_as_qexpr() {
        let r = list(&env(), vec![Value::Number(1), Value::Number(2)]).unwrap();
        assert!(matches!(r, Value::QExpr(children) if children.len() == 2));
    }

    #[test]
    fn head_takes_first_child() {
        let q = Value::QExpr(vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
        let r = head(&env(), vec![q]).unwrap();
        assert!(r.equal(&Value::QExpr(vec![Value::Number(1)])));
    }

    #[test]
    fn head_of_empty_is_error() {
        let q = Value::qexpr();
        assert!(head(&env(), vec![q]).is_err());
    }

    #[test]
    fn tail_drops_first_child() {
        let q = Value::QExpr(vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
        let r = tail(&env(), vec![q]).unwrap();
        assert!(r.equal(&Value::QExpr(vec![Value::Number(2), Value::Number(3)])));
    }

    #[test]
    fn join_concatenates_left_to_right() {
        let a = Value::QExpr(vec![Value::Number(1), Value::Number(2)]);
        let b = Value::QExpr(vec![Value::Number(3), Value::Number(4)]);
        let r = join(&env(), vec![a, b]).unwrap();
        assert!(r.equal(&Value::QExpr(vec![
            Value::Number(1),
            Value::Number(2),
            Value::Number(3),
            Value::Number(4),
        ])));
    }

    #[test]
    fn join_is_associative_with_empty_identity() {
        let a = Value::QExpr(vec![Value::Number(1)]);
        let empty = Value::qexpr();
        let r = join(&env(), vec![a.clone(), empty]).unwrap();
        assert!(r.equal(&a));
    }

    #[test]
    fn head_then_join_tail_reconstructs_list() {
        let list_val = Value::QExpr(vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
        let h = head(&env(), vec![list_val.clone()]).unwrap();
        let t = tail(&env(), vec![list_val.clone()]).unwrap();
        let rejoined = join(&env(), vec![h, t]).unwrap();
        assert!(rejoined.equal(&list_val));
    }

    #[test]
    fn eval_reinterprets_qexpr_as_program() {
        let root = Environment::new();
        super::super::arithmetic::register(&root);
        let q = Value::QExpr(vec![Value::symbol("+"), Value::Number(1), Value::Number(2)]);
        let r = eval(&root, vec![q]).unwrap();
        assert!(matches!(r, Value::Number(3)));
    }

    #[test]
    fn eval_requires_qexpr() {
        assert!(eval(&env(), vec![Value::Number(1)]).is_err());
    }
}
