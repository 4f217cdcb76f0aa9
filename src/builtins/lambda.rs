//! `\` — lambda construction.
//!
//! `(\ {formals} {body})`: both arguments are Q-Expressions; formals must
//! be all Symbols, with `&` appearing at most once and followed by exactly
//! one symbol.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn validate_formals(formals: &[Value]) -> Result<(), EvalError> {
    let mut seen_ampersand = false;
    for (i, formal) in formals.iter().enumerate() {
        match formal {
            Value::Symbol(s) if s == "&" => {
                if seen_ampersand {
                    return Err(EvalError::LambdaFormat);
                }
                seen_ampersand = true;
                if formals.len() - i != 2 {
                    return Err(EvalError::LambdaFormat);
                }
            }
            Value::Symbol(_) => {}
            other => return Err(EvalError::type_error("\\", i, "Symbol", other)),
        }
    }
    Ok(())
}

pub fn lambda(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("\\", "2", args.len()));
    }

    let mut parent = Value::SExpr(args);
    let formals_value = parent.pop(0);
    let formals = match &formals_value {
        Value::QExpr(children) => children.clone(),
        other => return Err(EvalError::type_error("\\", 0, "Q-Expression", other)),
    };

    // after popping the formals, the body is the only child left: `take`
    // lifts it out and drops the now-empty parent.
    let body = parent.take(0);
    if !matches!(body, Value::QExpr(_)) {
        return Err(EvalError::type_error("\\", 1, "Q-Expression", &body));
    }

    validate_formals(&formals)?;

    let _ = env;
    Ok(Value::lambda(formals, body, Environment::new()))
}

pub fn register(env: &Rc<Environment>) {
    env.put_local("\\", Value::builtin("\\", lambda));
}
