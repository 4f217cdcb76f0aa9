// ABOUTME: REPL syntax highlighting: numbers, strings, parens/braces, builtins

use rustyline::completion::Completer;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow;
use std::collections::HashSet;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_PARENS: &str = "\x1b[1;34m";
const COLOR_BRACES: &str = "\x1b[1;35m";
const COLOR_BUILTIN: &str = "\x1b[36m";
const COLOR_NUMBER: &str = "\x1b[33m";
const COLOR_STRING: &str = "\x1b[32m";
const COLOR_COMMENT: &str = "\x1b[90m";

pub struct LispHelper;

impl LispHelper {
    pub fn new() -> Self {
        LispHelper
    }

    /// Highlights a single evaluation result for the `=> ` line.
    pub fn highlight_output(value: &impl std::fmt::Display) -> String {
        value.to_string()
    }
}

impl Default for LispHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for LispHelper {}

impl Completer for LispHelper {
    type Candidate = String;
}

impl Hinter for LispHelper {
    type Hint = String;
}

impl Validator for LispHelper {}

impl Highlighter for LispHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let highlighted = highlight_line(line, &builtin_names());
        if highlighted == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(highlighted)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

fn is_symbol_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '{' | '}' | '"' | ';')
}

fn highlight_line(line: &str, builtins: &HashSet<&'static str>) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            ';' => {
                result.push_str(COLOR_COMMENT);
                while i < chars.len() && chars[i] != '\n' {
                    result.push(chars[i]);
                    i += 1;
                }
                result.push_str(COLOR_RESET);
            }

            '"' => {
                let start = i;
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                if i < chars.len() {
                    i += 1; // closing quote
                }
                let literal: String = chars[start..i].iter().collect();
                result.push_str(COLOR_STRING);
                result.push_str(&literal);
                result.push_str(COLOR_RESET);
            }

            '(' | ')' => {
                result.push_str(COLOR_PARENS);
                result.push(chars[i]);
                result.push_str(COLOR_RESET);
                i += 1;
            }

            '{' | '}' => {
                result.push_str(COLOR_BRACES);
                result.push(chars[i]);
                result.push_str(COLOR_RESET);
                i += 1;
            }

            c if c.is_ascii_digit() || (c == '-' && starts_number(&chars, i)) => {
                let start = i;
                if chars[i] == '-' {
                    i += 1;
                }
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                let num: String = chars[start..i].iter().collect();
                result.push_str(COLOR_NUMBER);
                result.push_str(&num);
                result.push_str(COLOR_RESET);
            }

            c if c.is_whitespace() => {
                result.push(c);
                i += 1;
            }

            _ => {
                let start = i;
                while i < chars.len() && !is_symbol_boundary(chars[i]) {
                    i += 1;
                }
                let symbol: String = chars[start..i].iter().collect();
                if builtins.contains(symbol.as_str()) {
                    result.push_str(COLOR_BUILTIN);
                    result.push_str(&symbol);
                    result.push_str(COLOR_RESET);
                } else {
                    result.push_str(&symbol);
                }
            }
        }
    }

    result
}

fn starts_number(chars: &[char], i: usize) -> bool {
    chars.get(i + 1).is_some_and(|c| c.is_ascii_digit())
}

fn builtin_names() -> HashSet<&'static str> {
    [
        "+", "-", "*", "/", "%", "<", ">", "<=", ">=", "==", "!=", "list", "head", "tail", "join",
        "eval", "if", "def", "=", "\\", "load", "print", "error",
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_is_highlighted() {
        let highlighted = highlight_line("42", &builtin_names());
        assert!(highlighted.contains(COLOR_NUMBER));
    }

    #[test]
    fn negative_number_is_highlighted() {
        let highlighted = highlight_line("-17", &builtin_names());
        assert!(highlighted.contains(COLOR_NUMBER));
    }

    #[test]
    fn string_is_highlighted() {
        let highlighted = highlight_line("\"hello\"", &builtin_names());
        assert!(highlighted.contains(COLOR_STRING));
    }

    #[test]
    fn parens_and_braces_are_highlighted() {
        let highlighted = highlight_line("(+ 1 2)", &builtin_names());
        assert!(highlighted.contains(COLOR_PARENS));
        let highlighted = highlight_line("{1 2}", &builtin_names());
        assert!(highlighted.contains(COLOR_BRACES));
    }

    #[test]
    fn builtin_symbol_is_highlighted() {
        let highlighted = highlight_line("(head {1 2})", &builtin_names());
        assert!(highlighted.contains(COLOR_BUILTIN));
    }

    #[test]
    fn user_symbol_is_not_highlighted_as_builtin() {
        let highlighted = highlight_line("my-var", &builtin_names());
        assert_eq!(highlighted, "my-var");
    }

    #[test]
    fn comment_is_highlighted() {
        let highlighted = highlight_line("; a comment", &builtin_names());
        assert!(highlighted.contains(COLOR_COMMENT));
    }
}
