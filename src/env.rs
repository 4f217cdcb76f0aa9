// ABOUTME: Environment module for managing variable bindings and scopes

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A scope of (name, value) bindings with an optional parent scope.
///
/// The parent link is a `RefCell` rather than a plain `Option<Rc<_>>`
/// because a lambda's closure environment needs its parent rebound, just
/// for the duration of one call, to whatever environment the lambda was
/// called from. That rebinding is transient: see `Environment::call_with_parent`.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates a new environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Creates a new child environment with a parent.
    pub fn new_child(parent: &Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(Some(Rc::clone(parent))),
        })
    }

    /// Looks up `name` in this scope, then walks up through parents.
    /// Returns an `Error` value (never panics) when the symbol is unbound,
    /// matching the original's `lenv_get`.
    pub fn get(&self, name: &str) -> Value {
        if let Some(value) = self.bindings.borrow().get(name) {
            return value.clone();
        }

        if let Some(parent) = self.parent.borrow().as_ref() {
            return parent.get(name);
        }

        Value::error(format!("Unbound symbol: '{name}'"))
    }

    /// Binds `name` in this scope, replacing any existing binding here.
    pub fn put_local(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Binds `name` in the root environment of this chain.
    pub fn put_global(self: &Rc<Self>, name: impl Into<String>, value: Value) {
        let mut current = Rc::clone(self);
        loop {
            let next = current.parent.borrow().clone();
            match next {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current.put_local(name, value);
    }

    /// Runs `f` with this environment's parent temporarily rebound to
    /// `caller`, restoring the previous parent afterward regardless of how
    /// `f` returns. This is the non-owning, transient parent pointer a
    /// lambda call needs: the closure environment must see the caller's
    /// scope only while its body is being evaluated.
    pub fn call_with_parent<T>(self: &Rc<Self>, caller: &Rc<Environment>, f: impl FnOnce() -> T) -> T {
        let previous = self.parent.replace(Some(Rc::clone(caller)));
        let result = f();
        *self.parent.borrow_mut() = previous;
        result
    }

    /// A deep-ish copy: a new environment with the same bindings and
    /// parent. Used when a Lambda value itself is cloned for partial
    /// application so that binding further formals doesn't mutate the
    /// original lambda's closure.
    pub fn copy(&self) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(self.bindings.borrow().clone()),
            parent: RefCell::new(self.parent.borrow().clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_local_and_get_roundtrip() {
        let env = Environment::new();
        env.put_local("x", Value::Number(42));
        assert!(matches!(env.get("x"), Value::Number(42)));
    }

    #[test]
    fn unbound_symbol_is_an_error_value() {
        let env = Environment::new();
        match env.get("undefined") {
            Value::Error(msg) => assert_eq!(msg, "Unbound symbol: 'undefined'"),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn child_shadows_parent() {
        let parent = Environment::new();
        parent.put_local("x", Value::Number(1));
        let child = Environment::new_child(&parent);
        child.put_local("x", Value::Number(2));
        assert!(matches!(child.get("x"), Value::Number(2)));
        assert!(matches!(parent.get("x"), Value::Number(1)));
    }

    #[test]
    fn child_sees_parent_bindings() {
        let parent = Environment::new();
        parent.put_local("x", Value::Number(7));
        let child = Environment::new_child(&parent);
        assert!(matches!(child.get("x"), Value::Number(7)));
    }

    #[test]
    fn put_global_walks_to_root() {
        let root = Environment::new();
        let child = Environment::new_child(&root);
        let grandchild = Environment::new_child(&child);
        grandchild.put_global("x", Value::Number(9));
        assert!(matches!(root.get("x"), Value::Number(9)));
        assert!(matches!(child.get("x"), Value::Number(9)));
    }

    #[test]
    fn call_with_parent_is_transient() {
        let closure_env = Environment::new();
        let caller_a = Environment::new();
        caller_a.put_local("a", Value::Number(1));
        let caller_b = Environment::new();
        caller_b.put_local("a", Value::Number(2));

        let seen_in_a = closure_env.call_with_parent(&caller_a, || closure_env.get("a"));
        assert!(matches!(seen_in_a, Value::Number(1)));

        // after the call, the rebind must not leak.
        assert!(closure_env.parent.borrow().is_none());

        let seen_in_b = closure_env.call_with_parent(&caller_b, || closure_env.get("a"));
        assert!(matches!(seen_in_b, Value::Number(2)));
    }
}
