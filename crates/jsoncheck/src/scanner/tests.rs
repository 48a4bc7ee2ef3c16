use super::*;

#[test]
fn skip_whitespace_consumes_all_four_whitespace_bytes() {
    let mut s = Scanner::new(b" \t\r\n x");
    s.skip_whitespace();
    assert_eq!(s.peek(), Some(b'x'));
}

#[test]
fn skip_whitespace_is_a_no_op_on_non_whitespace() {
    let mut s = Scanner::new(b"x ");
    s.skip_whitespace();
    assert_eq!(s.pos, 0);
}

#[test]
fn skip_whitespace_stops_at_end_of_buffer() {
    let mut s = Scanner::new(b"   ");
    s.skip_whitespace();
    assert!(s.at_end());
    // Safe to call again at the end.
    s.skip_whitespace();
    assert!(s.at_end());
}

#[test]
fn expect_byte_advances_on_match() {
    let mut s = Scanner::new(b"[]");
    assert!(s.expect_byte(b'['));
    assert_eq!(s.pos, 1);
}

#[test]
fn expect_byte_does_not_advance_on_mismatch() {
    let mut s = Scanner::new(b"[]");
    assert!(!s.expect_byte(b'{'));
    assert_eq!(s.pos, 0);
    assert!(!s.expect_byte(b']'));
    assert_eq!(s.pos, 0);
}

#[test]
fn expect_byte_fails_at_end_of_buffer() {
    let mut s = Scanner::new(b"");
    assert!(!s.expect_byte(b'x'));
    assert_eq!(s.pos, 0);
}

#[test]
fn expect_literal_consumes_exact_prefix() {
    let mut s = Scanner::new(b"true,");
    assert!(s.expect_literal(b"true"));
    assert_eq!(s.peek(), Some(b','));
}

#[test]
fn expect_literal_does_not_advance_on_partial_match() {
    let mut s = Scanner::new(b"trXe");
    assert!(!s.expect_literal(b"true"));
    assert_eq!(s.pos, 0);
}

#[test]
fn expect_literal_is_case_sensitive() {
    let mut s = Scanner::new(b"True");
    assert!(!s.expect_literal(b"true"));
    assert_eq!(s.pos, 0);
}

#[test]
fn expect_literal_rejects_truncated_buffer() {
    // Pattern longer than the remaining input must not read out of range.
    let mut s = Scanner::new(b"tru");
    assert!(!s.expect_literal(b"true"));
    assert_eq!(s.pos, 0);
}

#[test]
fn bump_yields_bytes_then_none() {
    let mut s = Scanner::new(b"ab");
    assert_eq!(s.bump(), Some(b'a'));
    assert_eq!(s.bump(), Some(b'b'));
    assert_eq!(s.bump(), None);
    assert!(s.at_end());
}

#[test]
fn skip_while_counts_consumed_bytes() {
    let mut s = Scanner::new(b"12345,");
    assert_eq!(s.skip_while(|b| b.is_ascii_digit()), 5);
    assert_eq!(s.peek(), Some(b','));
    assert_eq!(s.skip_while(|b| b.is_ascii_digit()), 0);
}

#[test]
fn at_end_reflects_position() {
    let mut s = Scanner::new(b"x");
    assert!(!s.at_end());
    s.bump();
    assert!(s.at_end());
}
