use crate::scanner::{self, Span};
use regex::Regex;
use std::sync::LazyLock;

static PRAGMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*pragma\s+solidity\s[^;]*;").unwrap());

static CONTRACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:abstract\s+)?contract\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap()
});

static IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^[ \t]*import\s+[^;]*?"([^"]+)"\s*;"#).unwrap());

/// The primary contract declaration of a source file: everything from the
/// `contract` keyword through the opening brace of the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractHeader {
    /// Declared contract name.
    pub name: String,
    /// Span from the `contract` keyword through the body's `{`.
    pub span: Span,
    /// Base types already listed in the `is` clause, without constructor
    /// arguments (`Base(arg)` is reported as `Base`).
    pub bases: Vec<String>,
    /// Byte offset of the body's opening `{`.
    pub body_open: usize,
}

/// Locates the `pragma solidity ...;` line, the insertion anchor for
/// imports. The span covers the full line including its newline.
pub fn pragma_line(text: &str) -> Option<Span> {
    let m = PRAGMA.find(text)?;
    Some(Span {
        start: scanner::line_start(text, m.start()),
        end: scanner::line_end(text, m.end() - 1),
    })
}

/// Returns the quoted paths of all `import ... ;` statements.
pub fn import_paths(text: &str) -> Vec<String> {
    IMPORT
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

/// Locates the first (primary) contract declaration and parses its
/// inheritance list. Returns `None` when the file declares no contract or
/// the header never opens a body.
pub fn contract_header(text: &str) -> Option<ContractHeader> {
    let caps = CONTRACT.captures(text)?;
    let whole = caps.get(0)?;
    let name = caps[1].to_string();

    let body_open = whole.end() + text[whole.end()..].find('{')?;
    let clause = &text[whole.end()..body_open];

    let bases = match clause.trim_start().strip_prefix("is") {
        Some(list) => list
            .split(',')
            .map(|base| {
                // `Base(arg)` inherits with constructor arguments
                let base = base.trim();
                base.split(|c: char| c == '(' || c.is_whitespace())
                    .next()
                    .unwrap_or("")
                    .to_string()
            })
            .filter(|base| !base.is_empty())
            .collect(),
        None => Vec::new(),
    };

    tracing::debug!("contract {} inherits {:?}", name, bases);

    Some(ContractHeader {
        name,
        span: Span {
            start: whole.start(),
            end: body_open + 1,
        },
        bases,
        body_open,
    })
}
