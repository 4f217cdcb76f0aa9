// ABOUTME: Error types for evaluation failures in the Lisp interpreter

use crate::value::Value;
use thiserror::Error;

// ===== Arity constant strings (eliminates allocations in error paths) =====
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";
pub const ARITY_THREE: &str = "3";
pub const ARITY_AT_LEAST_ONE: &str = "at least 1";

#[derive(Error, Debug, Clone)]
pub enum EvalError {
    /// A function argument had the wrong type.
    #[error("Function '{function}' was passed incorrect type of argument for argument: {position}. Got '{actual}' expected '{expected}'")]
    TypeMismatch {
        function: String,
        position: usize,
        expected: String,
        actual: String,
    },

    /// A function was called with the wrong number of arguments.
    #[error("Function '{function}' was passed incorrect number of arguments. Got {actual}, expected {expected}")]
    ArityMismatch {
        function: String,
        expected: String,
        actual: usize,
    },

    /// A function argument that must be non-empty was empty.
    #[error("Function '{function}' was passed {{}} for argument at index {position}")]
    EmptyArgument { function: String, position: usize },

    /// `/` or `%` with a zero divisor.
    #[error("Cannot divide by zero!")]
    DivisionByZero,

    /// A symbol had no binding in the environment chain.
    #[error("Unbound symbol: '{0}'")]
    UndefinedSymbol(String),

    /// A lambda's formal parameter list used `&` incorrectly.
    #[error("'&' not followed by a single symbol")]
    LambdaFormat,

    /// A lambda call supplied more arguments than it has formals left to bind.
    #[error("Function was passed too many arguments (got {actual}, expected {expected})")]
    TooManyArguments { actual: usize, expected: usize },

    /// `def`/`=` received a symbol list whose length doesn't match the value count.
    #[error("{function} passed {symbols} symbols but {values} values.")]
    BindingArityMismatch {
        function: String,
        symbols: usize,
        values: usize,
    },

    /// The head of an S-Expression was not a Function.
    #[error("S-Expression starts with incorrect type. Got {actual}, expected Function.")]
    NotAFunction { actual: String },

    /// `load` could not read or parse a file.
    #[error("Could not load file {path}: {reason}")]
    FileError { path: String, reason: String },
}

impl EvalError {
    pub fn type_error(function: &str, position: usize, expected: &str, actual: &Value) -> Self {
        EvalError::TypeMismatch {
            function: function.to_string(),
            position,
            expected: expected.to_string(),
            actual: actual.type_name().to_string(),
        }
    }

    pub fn arity_error(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        EvalError::ArityMismatch {
            function: function.to_string(),
            expected: expected.into(),
            actual,
        }
    }

    pub fn not_empty_error(function: &str, position: usize) -> Self {
        EvalError::EmptyArgument {
            function: function.to_string(),
            position,
        }
    }

    pub fn too_many_arguments(actual: usize, expected: usize) -> Self {
        EvalError::TooManyArguments { actual, expected }
    }

    pub fn binding_arity_mismatch(function: &str, symbols: usize, values: usize) -> Self {
        EvalError::BindingArityMismatch {
            function: function.to_string(),
            symbols,
            values,
        }
    }

    pub fn not_a_function(actual: &Value) -> Self {
        EvalError::NotAFunction {
            actual: actual.type_name().to_string(),
        }
    }

    pub fn file_error(path: &str, reason: impl Into<String>) -> Self {
        EvalError::FileError {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Value {
        Value::error(err.to_string())
    }
}

#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    Syntax(String),

    #[error("Could not read file {path}: {reason}")]
    Io { path: String, reason: String },
}
