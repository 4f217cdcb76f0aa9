//! Binding forms: `def` (root environment) and `=` (current environment).
//!
//! Both take a Q-Expression of Symbols as the first argument and exactly
//! one value per symbol.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn symbol_names(name: &str, value: &Value) -> Result<Vec<String>, EvalError> {
    let children = match value {
        Value::QExpr(children) => children,
        other => return Err(EvalError::type_error(name, 0, "Q-Expression", other)),
    };

    let mut names = Vec::with_capacity(children.len());
    for (i, child) in children.iter().enumerate() {
        match child {
            Value::Symbol(s) => names.push(s.clone()),
            other => return Err(EvalError::type_error(name, i, "Symbol", other)),
        }
    }
    Ok(names)
}

fn bind(
    name: &'static str,
    env: &Rc<Environment>,
    args: Vec<Value>,
    global: bool,
) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity_error(name, "at least 1", 0));
    }

    let names = symbol_names(name, &args[0])?;
    let values = &args[1..];
    if names.len() != values.len() {
        return Err(EvalError::binding_arity_mismatch(name, names.len(), values.len()));
    }

    for (n, v) in names.into_iter().zip(values.iter().cloned()) {
        if global {
            env.put_global(n, v);
        } else {
            env.put_local(n, v);
        }
    }

    Ok(Value::sexpr())
}

pub fn def(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    bind("def", env, args, true)
}

pub fn put(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    bind("=", env, args, false)
}

pub fn register(env: &Rc<Environment>) {
    env.put_local("def", Value::builtin("def", def));
    env.put_local("=", Value::builtin("=", put));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn def_binds_in_root_even_from_child() {
        let root = Environment::new();
        let child = Environment::new_child(&root);
        def(
            &child,
            vec![
                Value::QExpr(vec![Value::symbol("x")]),
                Value::Number(42),
            ],
        )
        .unwrap();
        assert!(matches!(root.get("x"), Value::Number(42)));
    }

    #[test]
    fn assign_binds_locally() {
        let root = Environment::new();
        let child = Environment::new_child(&root);
        put(
            &child,
            vec![
                Value::QExpr(vec![Value::symbol("x")]),
                Value::Number(7),
            ],
        )
        .unwrap();
        assert!(matches!(child.get("x"), Value::Number(7)));
        assert!(matches!(root.get("x"), Value::Error(_)));
    }

    #[test]
    fn def_binds_multiple_symbols_in_order() {
        let root = Environment::new();
        def(
            &root,
            vec![
                Value::QExpr(vec![Value::symbol("a"), Value::symbol("b")]),
                Value::Number(1),
                Value::Number(2),
            ],
        )
        .unwrap();
        assert!(matches!(root.get("a"), Value::Number(1)));
        assert!(matches!(root.get("b"), Value::Number(2)));
    }

    #[test]
    fn arity_mismatch_between_symbols_and_values() {
        let root = Environment::new();
        let r = def(
            &root,
            vec![Value::QExpr(vec![Value::symbol("a"), Value::symbol("b")]), Value::Number(1)],
        );
        assert!(r.is_err());
    }

    #[test]
    fn first_argument_must_be_qexpr_of_symbols() {
        let root = Environment::new();
        assert!(def(&root, vec![Value::Number(1), Value::Number(2)]).is_err());
        assert!(def(
            &root,
            vec![Value::QExpr(vec![Value::Number(1)]), Value::Number(2)]
        )
        .is_err());
    }
}
