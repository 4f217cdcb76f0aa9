// ABOUTME: The evaluator: eval, eval_sexpr, and the function call protocol

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Function, Value};
use std::collections::VecDeque;
use std::rc::Rc;

/// Reduces `value` to normal form using `env`. Symbols resolve through the
/// environment chain; S-Expressions are reduced via `eval_sexpr`; every
/// other tag (Number, String, Q-Expression, Function, Error) self-evaluates.
pub fn eval(value: Value, env: &Rc<Environment>) -> Value {
    match value {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(children) => eval_sexpr(children, env),
        other => other,
    }
}

/// Reinterprets a Q-Expression's children as an S-Expression and evaluates
/// it. Shared by the lambda call protocol and the `eval` builtin, since
/// both perform exactly this operation.
pub fn eval_quoted(body: Value, env: &Rc<Environment>) -> Value {
    match body {
        Value::QExpr(children) => eval(Value::SExpr(children), env),
        other => eval(other, env),
    }
}

fn eval_sexpr(children: Vec<Value>, env: &Rc<Environment>) -> Value {
    let mut evaluated = Vec::with_capacity(children.len());
    for child in children {
        let reduced = eval(child, env);
        if reduced.is_error() {
            return reduced;
        }
        evaluated.push(reduced);
    }

    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }
    if evaluated.len() == 1 {
        return evaluated.into_iter().next().unwrap();
    }

    let head = evaluated.remove(0);
    match head {
        Value::Fun(f) => call(env, f, evaluated),
        other => EvalError::not_a_function(&other).into(),
    }
}

/// Invokes `f` with already-reduced `args`. Built-ins run directly; lambdas
/// go through the currying/variadic binding protocol in `call_lambda`.
pub fn call(env: &Rc<Environment>, f: Function, args: Vec<Value>) -> Value {
    match f {
        Function::Builtin { func, .. } => func(env, args).unwrap_or_else(Value::from),
        Function::Lambda {
            formals,
            body,
            env: closure_env,
        } => call_lambda(env, formals, *body, closure_env, args),
    }
}

fn formal_name(value: &Value) -> Result<String, EvalError> {
    match value {
        Value::Symbol(name) => Ok(name.clone()),
        _ => Err(EvalError::LambdaFormat),
    }
}

fn call_lambda(
    caller_env: &Rc<Environment>,
    formals: Vec<Value>,
    body: Value,
    closure_env: Rc<Environment>,
    args: Vec<Value>,
) -> Value {
    let total_args = args.len();
    let total_formals = formals.len();

    // Partial application must not mutate the lambda it was called from, so
    // bindings accumulate in a fresh copy of the closure environment.
    let bound_env = closure_env.copy();
    let mut formals: VecDeque<Value> = formals.into_iter().collect();
    let mut args: VecDeque<Value> = args.into_iter().collect();

    while !args.is_empty() {
        if formals.is_empty() {
            return EvalError::too_many_arguments(total_args, total_formals).into();
        }

        let formal = formals.pop_front().unwrap();
        let name = match formal_name(&formal) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };

        if name == "&" {
            if formals.len() != 1 {
                return EvalError::LambdaFormat.into();
            }
            let rest_formal = formals.pop_front().unwrap();
            let rest_name = match formal_name(&rest_formal) {
                Ok(n) => n,
                Err(e) => return e.into(),
            };
            let remaining: Vec<Value> = args.drain(..).collect();
            bound_env.put_local(rest_name, Value::QExpr(remaining));
            break;
        }

        let arg = args.pop_front().unwrap();
        bound_env.put_local(name, arg);
    }

    // A trailing `&` formal with no variadic arguments supplied still binds
    // its following symbol, to an empty Q-Expression.
    let next_is_variadic_sentinel = matches!(
        formals.front(),
        Some(Value::Symbol(s)) if s == "&"
    );
    if next_is_variadic_sentinel {
        formals.pop_front();
        match formals.pop_front() {
            Some(rest_formal) => match formal_name(&rest_formal) {
                Ok(name) => bound_env.put_local(name, Value::qexpr()),
                Err(e) => return e.into(),
            },
            None => return EvalError::LambdaFormat.into(),
        }
    }

    if !formals.is_empty() {
        return Value::lambda(formals.into_iter().collect(), body, bound_env);
    }

    bound_env.call_with_parent(caller_env, || eval_quoted(body, &bound_env))
}
