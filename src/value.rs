// ABOUTME: Value types representing Lisp data structures and expressions

use crate::env::Environment;
use crate::error::EvalError;
use std::fmt;
use std::rc::Rc;

/// Bytes kept of an error message; matches the original interpreter's
/// fixed-size error buffer, given a precise meaning here (truncate at a
/// char boundary, never split a UTF-8 sequence).
pub const MAX_ERR_BYTES: usize = 4096;

/// Signature of a built-in function: takes the calling environment (some
/// built-ins, like `eval` and `load`, need it) and the already-evaluated
/// argument list, and produces a value or a typed evaluation error.
pub type BuiltinFn = fn(&Rc<Environment>, Vec<Value>) -> Result<Value, EvalError>;

#[derive(Clone)]
pub enum Function {
    Builtin {
        name: &'static str,
        func: BuiltinFn,
    },
    Lambda {
        formals: Vec<Value>,
        body: Box<Value>,
        env: Rc<Environment>,
    },
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin { name, .. } => write!(f, "Builtin({name})"),
            Function::Lambda { formals, body, .. } => {
                write!(f, "Lambda({formals:?} {body:?})")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    String(String),
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
    Fun(Function),
}

impl Value {
    pub fn number(n: i64) -> Value {
        Value::Number(n)
    }

    /// Wraps a message as an Error value, truncating to `MAX_ERR_BYTES`
    /// bytes at the nearest preceding char boundary.
    pub fn error(message: impl Into<String>) -> Value {
        let mut message = message.into();
        if message.len() > MAX_ERR_BYTES {
            let mut cut = MAX_ERR_BYTES;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            message.truncate(cut);
        }
        Value::Error(message)
    }

    pub fn symbol(name: impl Into<String>) -> Value {
        Value::Symbol(name.into())
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::String(s.into())
    }

    pub fn sexpr() -> Value {
        Value::SExpr(Vec::new())
    }

    pub fn qexpr() -> Value {
        Value::QExpr(Vec::new())
    }

    pub fn builtin(name: &'static str, func: BuiltinFn) -> Value {
        Value::Fun(Function::Builtin { name, func })
    }

    pub fn lambda(formals: Vec<Value>, body: Value, env: Rc<Environment>) -> Value {
        Value::Fun(Function::Lambda {
            formals,
            body: Box::new(body),
            env,
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::String(_) => "String",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Fun(_) => "Function",
        }
    }

    /// Appends `child` to an S/Q-Expression's children. Panics if `self`
    /// is not an expression value; callers only ever call this on values
    /// they just constructed as expressions.
    pub fn append(&mut self, child: Value) {
        match self {
            Value::SExpr(children) | Value::QExpr(children) => children.push(child),
            _ => panic!("append called on a non-expression value"),
        }
    }

    /// Removes and returns the child at `index`, shifting later children
    /// left. Panics on an out-of-range index or a non-expression value.
    pub fn pop(&mut self, index: usize) -> Value {
        match self {
            Value::SExpr(children) | Value::QExpr(children) => children.remove(index),
            _ => panic!("pop called on a non-expression value"),
        }
    }

    /// Pops the child at `index` and discards the rest of `self`.
    pub fn take(mut self, index: usize) -> Value {
        self.pop(index)
    }

    /// Concatenates `other`'s children onto `self`, consuming `other`.
    /// Both must be Q-Expressions.
    pub fn join(mut self, other: Value) -> Value {
        match (&mut self, other) {
            (Value::QExpr(a), Value::QExpr(b)) => {
                a.extend(b);
                self
            }
            _ => panic!("join called on non-Q-Expression values"),
        }
    }

    pub fn children(&self) -> &[Value] {
        match self {
            Value::SExpr(children) | Value::QExpr(children) => children,
            _ => panic!("children called on a non-expression value"),
        }
    }

    /// Structural equality. Two Lambdas are equal iff their formals and
    /// body match; their closure environments are never compared.
    pub fn equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) | (Value::QExpr(a), Value::QExpr(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equal(y))
            }
            (Value::Fun(Function::Builtin { name: a, .. }), Value::Fun(Function::Builtin { name: b, .. })) => {
                a == b
            }
            (
                Value::Fun(Function::Lambda {
                    formals: fa,
                    body: ba,
                    ..
                }),
                Value::Fun(Function::Lambda {
                    formals: fb,
                    body: bb,
                    ..
                }),
            ) => {
                fa.len() == fb.len()
                    && fa.iter().zip(fb.iter()).all(|(x, y)| x.equal(y))
                    && ba.equal(bb)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(msg) => write!(f, "Error: {msg}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::SExpr(children) => write_expr(f, children, '(', ')'),
            Value::QExpr(children) => write_expr(f, children, '{', '}'),
            Value::Fun(Function::Builtin { .. }) => write!(f, "<builtin>"),
            Value::Fun(Function::Lambda { formals, body, .. }) => {
                write!(f, "(\\ ")?;
                write_expr(f, formals, '{', '}')?;
                write!(f, " ")?;
                write!(f, "{body}")
            }
        }
    }
}

fn write_expr(f: &mut fmt::Formatter<'_>, children: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, "{close}")
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_display() {
        assert_eq!(format!("{}", Value::Number(42)), "42");
        assert_eq!(format!("{}", Value::Number(-7)), "-7");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", Value::error("boom")),
            "Error: boom"
        );
    }

    #[test]
    fn string_display_escapes() {
        assert_eq!(format!("{}", Value::string("a\nb")), "\"a\\nb\"");
        assert_eq!(format!("{}", Value::string("say \"hi\"")), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn sexpr_and_qexpr_display() {
        let s = Value::SExpr(vec![Value::Number(1), Value::Number(2)]);
        assert_eq!(format!("{}", s), "(1 2)");

        let q = Value::QExpr(vec![Value::Symbol("x".into())]);
        assert_eq!(format!("{}", q), "{x}");
    }

    #[test]
    fn equal_is_structural_and_lambda_ignores_env() {
        let env1 = Environment::new();
        let env2 = Environment::new();
        let l1 = Value::lambda(
            vec![Value::symbol("x")],
            Value::QExpr(vec![Value::symbol("x")]),
            env1,
        );
        let l2 = Value::lambda(
            vec![Value::symbol("x")],
            Value::QExpr(vec![Value::symbol("x")]),
            env2,
        );
        assert!(l1.equal(&l2));
    }

    #[test]
    fn error_truncates_at_char_boundary() {
        let long = "é".repeat(3000); // 2 bytes each -> 6000 bytes
        let v = Value::error(long);
        match v {
            Value::Error(s) => {
                assert!(s.len() <= MAX_ERR_BYTES);
                assert!(s.is_char_boundary(s.len()));
            }
            _ => panic!("expected Error"),
        }
    }

    #[test]
    fn join_concatenates_qexprs() {
        let a = Value::QExpr(vec![Value::Number(1)]);
        let b = Value::QExpr(vec![Value::Number(2), Value::Number(3)]);
        let joined = a.join(b);
        assert_eq!(joined.children().len(), 3);
    }
}
