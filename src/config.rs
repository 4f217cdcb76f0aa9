// ABOUTME: Version, banner, and help text for the CLI/REPL driver

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WELCOME_MESSAGE: &str = "Lispy Version 0.1";
pub const WELCOME_SUBTITLE: &str = "A small Lisp interpreter.";
pub const WELCOME_FOOTER: &str = "Press Ctrl-D or type (quit) to exit.";

pub const HELP_TEXT: &str = r#"
Special forms, all ordinary built-in functions (no syntax is hard-coded):
  (\ {formals} {body})     construct a lambda
  (def {x} v)              bind x in the root environment
  (= {x} v)                bind x in the current environment
  (if cond {then} {else})  evaluate the selected branch

List operations:  list head tail join eval
Arithmetic:        + - * / %
Ordering:          < > <= >=
Equality:          == !=
I/O and meta:      load print error

Type (quit) or (exit) to leave the REPL.
"#;
