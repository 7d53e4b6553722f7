//! Locators for declarations inside a contract body: events, the
//! constructor, modifiers, functions, and simple state variables.

use crate::result::Result;
use crate::scanner::{self, Span};
use regex::Regex;
use std::sync::LazyLock;

static EVENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bevent\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(").unwrap());

static CONSTRUCTOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bconstructor\s*\(").unwrap());

static MODIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bmodifier\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap());

static FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfunction\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(").unwrap());

static STATE_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:address|bool|string|bytes[0-9]*|u?int[0-9]*)\s+(?:(?:public|private|internal|constant|immutable)\s+)*([A-Za-z_$][A-Za-z0-9_$]*)\s*(?:=[^;]*)?;",
    )
    .unwrap()
});

/// An `event Name(...);` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDecl {
    pub name: String,
    /// From the `event` keyword through the terminating `;`.
    pub span: Span,
}

/// A constructor declaration including its balanced body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    /// From the `constructor` keyword through the body's closing `}`.
    pub span: Span,
}

/// A `modifier name(...) { ... }` declaration including its balanced body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierDecl {
    pub name: String,
    /// From the `modifier` keyword through the body's closing `}`.
    pub span: Span,
}

/// A function declaration header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    /// Byte offset of the `function` keyword.
    pub start: usize,
    /// Span of the parenthesized parameter list, parens included.
    pub params: Span,
    /// Byte offset of the body's `{` or of the terminating `;`.
    pub sig_end: usize,
}

impl FunctionDecl {
    /// Returns the header text between the parameter list and the body,
    /// i.e. visibility, mutability, attached modifiers, and returns clause.
    pub fn header_tail<'a>(&self, text: &'a str) -> &'a str {
        &text[self.params.end..self.sig_end]
    }
}

/// A simple state-variable declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateVarDecl {
    pub name: String,
    /// The full declaration line including its newline.
    pub span: Span,
}

/// Returns every event declaration in source order.
pub fn event_declarations(text: &str) -> Result<Vec<EventDecl>> {
    let mut events = Vec::new();
    for caps in EVENT.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let params = scanner::paren_span(text, whole.end() - 1)?;
        // allow an `anonymous` specifier between the params and the `;`
        let Some(semi) = text[params.end..].find(';') else {
            continue;
        };
        events.push(EventDecl {
            name: caps[1].to_string(),
            span: Span {
                start: whole.start(),
                end: params.end + semi + 1,
            },
        });
    }
    tracing::debug!("found {} event declarations", events.len());
    Ok(events)
}

/// Returns the first constructor declaration, or `None` when the file has
/// no constructor with a body.
pub fn constructor_decl(text: &str) -> Result<Option<ConstructorDecl>> {
    let Some(m) = CONSTRUCTOR.find(text) else {
        return Ok(None);
    };
    let params = scanner::paren_span(text, m.end() - 1)?;
    let Some(body) = body_after(text, params.end)? else {
        return Ok(None);
    };
    Ok(Some(ConstructorDecl {
        span: Span {
            start: m.start(),
            end: body.end,
        },
    }))
}

/// Returns every modifier declaration that carries a body, in source order.
pub fn modifier_declarations(text: &str) -> Result<Vec<ModifierDecl>> {
    let mut modifiers = Vec::new();
    for caps in MODIFIER.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let Some(body) = body_after(text, whole.end())? else {
            continue;
        };
        modifiers.push(ModifierDecl {
            name: caps[1].to_string(),
            span: Span {
                start: whole.start(),
                end: body.end,
            },
        });
    }
    Ok(modifiers)
}

/// Returns every function declaration header in source order.
pub fn function_declarations(text: &str) -> Result<Vec<FunctionDecl>> {
    let mut functions = Vec::new();
    for caps in FUNCTION.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let params = scanner::paren_span(text, whole.end() - 1)?;

        // scan past modifiers / returns clause to the body or `;`
        let mut i = params.end;
        let sig_end = loop {
            match scanner::next_code_byte(text, i)? {
                Some((j, b'(')) => i = scanner::paren_span(text, j)?.end,
                Some((j, b'{')) | Some((j, b';')) => break Some(j),
                Some((j, _)) => i = j + 1,
                None => break None,
            }
        };
        let Some(sig_end) = sig_end else {
            continue;
        };

        functions.push(FunctionDecl {
            name: caps[1].to_string(),
            start: whole.start(),
            params,
            sig_end,
        });
    }
    Ok(functions)
}

/// Returns simple single-line state-variable declarations. Spans cover the
/// whole line so removal leaves no blank residue.
pub fn state_variable_decls(text: &str) -> Vec<StateVarDecl> {
    STATE_VAR
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            StateVarDecl {
                name: caps[1].to_string(),
                span: Span {
                    start: scanner::line_start(text, whole.start()),
                    end: scanner::line_end(text, whole.end() - 1),
                },
            }
        })
        .collect()
}

/// Scans from `from` past any modifier invocations to the next `{` and
/// returns its balanced span; `None` when a `;` or the end of input arrives
/// first (bodyless declaration).
fn body_after(text: &str, from: usize) -> Result<Option<Span>> {
    let mut i = from;
    loop {
        match scanner::next_code_byte(text, i)? {
            Some((j, b'{')) => return Ok(Some(scanner::block_span(text, j)?)),
            Some((_, b';')) | None => return Ok(None),
            Some((j, b'(')) => i = scanner::paren_span(text, j)?.end,
            Some((j, _)) => i = j + 1,
        }
    }
}
