//! I/O and meta built-ins: `load`, `print`, `error`.

use crate::env::Environment;
use crate::error::EvalError;
use crate::eval::eval;
use crate::parser;
use crate::reader;
use crate::value::Value;
use std::path::Path;
use std::rc::Rc;

pub fn load(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("load", "1", args.len()));
    }
    let path = match &args[0] {
        Value::String(s) => s.clone(),
        other => return Err(EvalError::type_error("load", 0, "String", other)),
    };

    let root = parser::parse_file(Path::new(&path))
        .map_err(|e| EvalError::file_error(&path, e.to_string()))?;

    let program = reader::read(&root);
    let forms = match program {
        Value::SExpr(children) => children,
        other => vec![other],
    };

    for form in forms {
        let result = eval(form, env);
        if let Value::Error(msg) = result {
            eprintln!("Error: {msg}");
        }
    }

    Ok(Value::sexpr())
}

pub fn print(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Ok(Value::sexpr())
}

pub fn error(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("error", "1", args.len()));
    }
    let message = match &args[0] {
        Value::String(s) => s.clone(),
        other => return Err(EvalError::type_error("error", 0, "String", other)),
    };
    Ok(Value::error(message))
}

pub fn register(env: &Rc<Environment>) {
    env.put_local("load", Value::builtin("load", load));
    env.put_local("print", Value::builtin("print", print));
    env.put_local("error", Value::builtin("error", error));
}
