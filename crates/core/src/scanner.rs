//! Balanced-block scanner for Solidity source text.
//!
//! All body extraction goes through depth counting rather than non-greedy
//! regular expressions, so a modifier or constructor body containing nested
//! braces, string literals, or comments yields its exact span instead of a
//! span truncated at the first unrelated delimiter.

use crate::result::{Error, Result};

/// A half-open byte range `[start, end)` into a source buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Returns the byte length of the span.
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns the text the span covers.
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

/// Returns the span of the `{ ... }` block whose opening brace sits at
/// `open_idx`, including both braces.
pub fn block_span(text: &str, open_idx: usize) -> Result<Span> {
    delimited_span(text, open_idx, b'{', b'}')
}

/// Returns the span of the `( ... )` group whose opening paren sits at
/// `open_idx`, including both parens.
pub fn paren_span(text: &str, open_idx: usize) -> Result<Span> {
    delimited_span(text, open_idx, b'(', b')')
}

fn delimited_span(text: &str, open_idx: usize, open: u8, close: u8) -> Result<Span> {
    let bytes = text.as_bytes();
    if bytes.get(open_idx) != Some(&open) {
        return Err(Error::NotADelimiter {
            expected: open as char,
            offset: open_idx,
        });
    }

    let mut depth: usize = 0;
    let mut i = open_idx;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => {
                i = skip_string(bytes, i)?;
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = skip_line_comment(bytes, i);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = skip_block_comment(bytes, i)?;
                continue;
            }
            b if b == open => depth += 1,
            b if b == close => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Span {
                        start: open_idx,
                        end: i + 1,
                    });
                }
            }
            _ => {}
        }
        i += 1;
    }

    Err(Error::UnbalancedBlock(open_idx))
}

/// Returns the offset just past the end of the line containing `idx`.
pub fn line_end(text: &str, idx: usize) -> usize {
    match text[idx.min(text.len())..].find('\n') {
        Some(off) => idx + off + 1,
        None => text.len(),
    }
}

/// Returns the offset of the first byte of the line containing `idx`.
pub fn line_start(text: &str, idx: usize) -> usize {
    match text[..idx.min(text.len())].rfind('\n') {
        Some(off) => off + 1,
        None => 0,
    }
}

/// Returns the offset and value of the next byte that is neither whitespace
/// nor part of a comment, starting at `from`.
pub fn next_code_byte(text: &str, from: usize) -> Result<Option<(usize, u8)>> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b if b.is_ascii_whitespace() => i += 1,
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = skip_line_comment(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i)?,
            b => return Ok(Some((i, b))),
        }
    }
    Ok(None)
}

/// Skips a string literal starting at the quote at `start`, returning the
/// offset just past the closing quote.
fn skip_string(bytes: &[u8], start: usize) -> Result<usize> {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Ok(i + 1),
            _ => i += 1,
        }
    }
    Err(Error::UnterminatedString(start))
}

/// Skips a `//` comment starting at `start`, returning the offset just past
/// its terminating newline (or the end of input).
fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

/// Skips a `/* ... */` comment starting at `start`, returning the offset
/// just past the closing `*/`.
fn skip_block_comment(bytes: &[u8], start: usize) -> Result<usize> {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return Ok(i + 2);
        }
        i += 1;
    }
    Err(Error::UnterminatedComment(start))
}
