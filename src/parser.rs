// ABOUTME: nom-based grammar turning source text into a ParseNode tree

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0, none_of},
    combinator::{map, opt, recognize},
    multi::{many0, many0_count},
    sequence::preceded,
    IResult, Parser,
};

use crate::error::ParseError;
use crate::reader::ParseNode;
use std::fs;
use std::path::Path;

/// Comments run from `;` to end of line; they become punctuation children
/// the reader skips, exactly like the parenthesis/brace tokens do.
fn comment(input: &str) -> IResult<&str, ParseNode> {
    map(
        recognize((char(';'), take_while(|c: char| c != '\n'))),
        |text: &str| ParseNode::leaf("comment", text),
    )
    .parse(input)
}

fn ws(input: &str) -> IResult<&str, ()> {
    map(
        many0_count(alt((map(multispace0, |_| ()), map(comment, |_| ())))),
        |_| (),
    )
    .parse(input)
}

fn number(input: &str) -> IResult<&str, ParseNode> {
    map(
        recognize((opt(char('-')), take_while1(|c: char| c.is_ascii_digit()))),
        |s: &str| ParseNode::leaf("number|num|regex", s),
    )
    .parse(input)
}

const SYMBOL_SPECIAL: &str = "_+-*/\\=<>!&%^?";

fn symbol(input: &str) -> IResult<&str, ParseNode> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || SYMBOL_SPECIAL.contains(c)),
        |s: &str| ParseNode::leaf("symbol|sym|regex", s),
    )
    .parse(input)
}

fn string_literal(input: &str) -> IResult<&str, ParseNode> {
    let (input, raw) = recognize((
        char('"'),
        many0(alt((recognize((char('\\'), none_of(""))), recognize(none_of("\"\\"))))),
        char('"'),
    ))
    .parse(input)?;
    Ok((input, ParseNode::leaf("string|str|regex", raw)))
}

fn punctuation(c: char) -> impl Fn(&str) -> IResult<&str, ParseNode> {
    move |input: &str| {
        let (input, s) = recognize(char(c)).parse(input)?;
        Ok((input, ParseNode::leaf("char|regex", s)))
    }
}

fn sexpr(input: &str) -> IResult<&str, ParseNode> {
    let (input, open) = punctuation('(')(input)?;
    let (input, _) = ws(input)?;
    let (input, mut body) = many0(preceded(ws, expr)).parse(input)?;
    let (input, _) = ws(input)?;
    let (input, close) = punctuation(')')(input)?;

    let mut children = vec![open];
    children.append(&mut body);
    children.push(close);
    Ok((input, ParseNode::branch("sexpr|>", children)))
}

fn qexpr(input: &str) -> IResult<&str, ParseNode> {
    let (input, open) = punctuation('{')(input)?;
    let (input, _) = ws(input)?;
    let (input, mut body) = many0(preceded(ws, expr)).parse(input)?;
    let (input, _) = ws(input)?;
    let (input, close) = punctuation('}')(input)?;

    let mut children = vec![open];
    children.append(&mut body);
    children.push(close);
    Ok((input, ParseNode::branch("qexpr|>", children)))
}

fn expr(input: &str) -> IResult<&str, ParseNode> {
    alt((sexpr, qexpr, number, string_literal, symbol, comment)).parse(input)
}

/// Parses a full program: zero or more top-level forms under a root `">"`
/// node.
pub fn parse_str(input: &str) -> Result<ParseNode, ParseError> {
    let (rest, _) = ws(input).map_err(|e| ParseError::Syntax(format!("{e:?}")))?;
    let (rest, children) = many0(preceded(ws, expr))
        .parse(rest)
        .map_err(|e| ParseError::Syntax(format!("{e:?}")))?;
    let (rest, _) = ws(rest).map_err(|e| ParseError::Syntax(format!("{e:?}")))?;

    if !rest.is_empty() {
        return Err(ParseError::Syntax(format!(
            "unexpected trailing input: '{rest}'"
        )));
    }

    Ok(ParseNode::branch(">", children))
}

/// Reads `path` from disk and parses its contents into a root `ParseNode`.
pub fn parse_file(path: &Path) -> Result<ParseNode, ParseError> {
    let contents = fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_str(&contents)
}
