// ABOUTME: Converts a parser-produced ParseNode tree into a Value

use crate::value::Value;

/// A node in the parse tree handed to the core by the external parser.
///
/// This is the "Parse Node contract" the evaluator core consumes: a `tag`
/// string tested by substring (`num`, `sym`, `str`, `sexpr`, `qexpr`,
/// `comment`, `regex`), a `contents` string for leaves, and an ordered list
/// of children. A root node produced by `parser::parse_str`/`parse_file` has
/// tag `">"`.
#[derive(Debug, Clone)]
pub struct ParseNode {
    pub tag: String,
    pub contents: String,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        ParseNode {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(tag: impl Into<String>, children: Vec<ParseNode>) -> Self {
        ParseNode {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    fn is_punctuation_child(&self) -> bool {
        if self.tag == "regex" || self.tag.contains("comment") {
            return true;
        }
        matches!(self.contents.as_str(), "(" | ")" | "{" | "}")
    }
}

/// Converts a `ParseNode` into a `Value`. Numeric overflow yields
/// `Value::error("Number too large!")` rather than a Rust panic.
pub fn read(node: &ParseNode) -> Value {
    if node.tag.contains("num") {
        return match node.contents.parse::<i64>() {
            Ok(n) => Value::number(n),
            Err(_) => Value::error("Number too large!"),
        };
    }

    if node.tag.contains("sym") {
        return Value::symbol(node.contents.clone());
    }

    if node.tag.contains("str") {
        return Value::string(unescape_string_literal(&node.contents));
    }

    let mut value = if node.tag == ">" || node.tag.contains("sexpr") {
        Value::sexpr()
    } else if node.tag.contains("qexpr") {
        Value::qexpr()
    } else {
        // Unknown leaf shape; treat the contents as a symbol rather than
        // silently dropping the node.
        return Value::symbol(node.contents.clone());
    };

    for child in &node.children {
        if child.is_punctuation_child() {
            continue;
        }
        value.append(read(child));
    }

    value
}

/// Strips the surrounding quotes from a string literal's raw contents and
/// applies standard C-style unescaping (`\n`, `\t`, `\r`, `\"`, `\\`, `\a`,
/// `\b`, `\f`, `\v`).
fn unescape_string_literal(raw: &str) -> String {
    let inner = raw.strip_prefix('"').unwrap_or(raw);
    let inner = inner.strip_suffix('"').unwrap_or(inner);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('a') => out.push('\u{7}'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
