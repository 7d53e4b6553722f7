use aegis_core::Error;
use aegis_core::scanner::{block_span, line_end, line_start, next_code_byte, paren_span};

#[test]
fn test_block_span_spans_nested_braces() {
    let text = "modifier onlyOwner() { if (a) { b; } c; } rest";
    let open = text.find('{').unwrap();
    let span = block_span(text, open).unwrap();
    assert_eq!(span.slice(text), "{ if (a) { b; } c; }");
}

#[test]
fn test_block_span_ignores_braces_in_strings() {
    let text = r#"{ require(x, "open { brace"); }"#;
    let span = block_span(text, 0).unwrap();
    assert_eq!(span.end, text.len());
}

#[test]
fn test_block_span_ignores_braces_in_comments() {
    let text = "{\n  // a closing } in a comment\n  /* and } here */\n  a;\n}";
    let span = block_span(text, 0).unwrap();
    assert_eq!(span.end, text.len());
}

#[test]
fn test_block_span_unbalanced_is_an_error() {
    let text = "{ never closed";
    assert!(matches!(
        block_span(text, 0),
        Err(Error::UnbalancedBlock(0))
    ));
}

#[test]
fn test_block_span_wrong_anchor_is_an_error() {
    let text = "no brace here";
    assert!(matches!(
        block_span(text, 0),
        Err(Error::NotADelimiter { .. })
    ));
}

#[test]
fn test_paren_span_spans_nested_parens() {
    let text = "function f(mapping(address => uint256) storage m) external";
    let open = text.find('(').unwrap();
    let span = paren_span(text, open).unwrap();
    assert_eq!(
        span.slice(text),
        "(mapping(address => uint256) storage m)"
    );
}

#[test]
fn test_next_code_byte_skips_whitespace_and_comments() {
    let text = "  /* c */ // line\n  (";
    let (idx, byte) = next_code_byte(text, 0).unwrap().unwrap();
    assert_eq!(byte, b'(');
    assert_eq!(idx, text.len() - 1);
}

#[test]
fn test_next_code_byte_at_end_of_input() {
    assert_eq!(next_code_byte("  // only a comment", 0).unwrap(), None);
}

#[test]
fn test_line_bounds() {
    let text = "first\nsecond\nthird";
    let second = text.find("second").unwrap();
    assert_eq!(line_start(text, second), 6);
    assert_eq!(line_end(text, second), 13);
    // the final line has no newline
    let third = text.find("third").unwrap();
    assert_eq!(line_end(text, third), text.len());
}
