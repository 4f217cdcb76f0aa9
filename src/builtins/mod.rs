//! Built-in functions, grouped by purpose: list operations, arithmetic,
//! ordering, equality, conditional, binding, lambda construction, and
//! I/O/meta. Every entry lands in the root
//! environment as an ordinary `Value::Fun(Function::Builtin)` binding —
//! there are no hard-coded special forms in the evaluator.

use crate::env::Environment;
use std::rc::Rc;

pub mod arithmetic;
pub mod binding;
pub mod comparison;
pub mod conditional;
pub mod io;
pub mod lambda;
pub mod lists;

pub fn register_builtins(env: &Rc<Environment>) {
    arithmetic::register(env);
    comparison::register(env);
    lists::register(env);
    conditional::register(env);
    binding::register(env);
    lambda::register(env);
    io::register(env);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn registers_every_builtin_symbol() {
        let env = Environment::new();
        register_builtins(&env);

        let names = [
            "+", "-", "*", "/", "%", "<", ">", "<=", ">=", "==", "!=", "list", "head", "tail",
            "join", "eval", "if", "def", "=", "\\", "load", "print", "error",
        ];
        for name in names {
            assert!(
                !matches!(env.get(name), Value::Error(_)),
                "builtin '{name}' was not registered"
            );
        }
    }
}
