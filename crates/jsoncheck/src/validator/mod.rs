//! Recursive-descent grammar engine: one consumption routine per JSON
//! construct, composed into a whole-document validator.
//!
//! Control flows top-down: [`check_with`] skips leading whitespace, calls
//! [`consume_value`] once, and requires end-of-buffer. `consume_value` is the
//! dispatcher — a match on the leading byte selects the consumer, which for
//! arrays and objects recurses back into `consume_value` for nested values.
//! The leading character sets are disjoint (`t`/`f`/`n` for keywords, `"`
//! for strings, `-`/digit for numbers, `[`, `{`), so no backtracking across
//! consumers is ever needed: a failure inside the chosen consumer is final.
//!
//! Whitespace rule: skipping is always the caller's explicit responsibility
//! before a value and around structural punctuation. The one place the
//! engine skips on its own is after a successful value, so the enclosing
//! consumer resumes directly on the separator or closer.
//!
//! Nested containers consume one level of a depth budget threaded through
//! the dispatcher; running out fails with a distinct error instead of
//! overflowing the call stack on adversarial input.

use crate::error::SyntaxError;
use crate::options::ValidatorOptions;
use crate::scanner::Scanner;

/// Tests whether `input` is a single well-formed JSON document.
///
/// Leading and trailing whitespace are permitted; any other bytes outside
/// the one value fail validation. The verdict is a pure function of the
/// bytes: no state is carried between calls.
#[must_use]
pub fn validate(input: &[u8]) -> bool {
    check(input).is_ok()
}

/// [`validate`] with explicit [`ValidatorOptions`].
#[must_use]
pub fn validate_with(input: &[u8], options: ValidatorOptions) -> bool {
    check_with(input, options).is_ok()
}

/// Validates `input`, reporting which grammar rule rejected it.
///
/// # Errors
///
/// Returns the [`SyntaxError`] for the first rule violated. The error is a
/// bare taxonomy — no positions or payloads are tracked.
pub fn check(input: &[u8]) -> Result<(), SyntaxError> {
    check_with(input, ValidatorOptions::default())
}

/// [`check`] with explicit [`ValidatorOptions`].
///
/// # Errors
///
/// See [`check`].
pub fn check_with(input: &[u8], options: ValidatorOptions) -> Result<(), SyntaxError> {
    let mut scanner = Scanner::new(input);
    scanner.skip_whitespace();
    consume_value(&mut scanner, options.max_depth)?;
    if scanner.at_end() {
        Ok(())
    } else {
        Err(SyntaxError::TrailingContent)
    }
}

/// Dispatcher: selects a consumer by the leading byte and runs it.
///
/// Expects the scanner to sit on the first significant byte of the value
/// (leading whitespace already skipped by the caller). On success, trailing
/// whitespace is skipped before returning.
fn consume_value(scanner: &mut Scanner<'_>, depth: usize) -> Result<(), SyntaxError> {
    match scanner.peek() {
        Some(b't' | b'f' | b'n') => consume_literal(scanner)?,
        Some(b'"') => consume_string(scanner)?,
        Some(b'-' | b'0'..=b'9') => consume_number(scanner)?,
        Some(b'[') => consume_array(scanner, depth)?,
        Some(b'{') => consume_object(scanner, depth)?,
        Some(_) => return Err(SyntaxError::ExpectedValue),
        None => return Err(SyntaxError::UnexpectedEndOfInput),
    }
    scanner.skip_whitespace();
    Ok(())
}

/// Matches exactly one of the keywords `true`, `false`, `null`.
///
/// No partial matches: `truefalse` consumes `true` here and is then rejected
/// by the caller's end-of-value check (end-of-input at the top level, or the
/// separator check inside a container).
fn consume_literal(scanner: &mut Scanner<'_>) -> Result<(), SyntaxError> {
    if scanner.expect_literal(b"true")
        || scanner.expect_literal(b"false")
        || scanner.expect_literal(b"null")
    {
        Ok(())
    } else {
        Err(SyntaxError::InvalidLiteral)
    }
}

/// Validates the shape of a quoted string without decoding it.
///
/// Any byte other than an unescaped `"` is a string character. Escapes are
/// checked against the allowed set only; `\uXXXX` is verified to carry four
/// hex digits but the code point is never computed, so surrogate halves
/// pass.
fn consume_string(scanner: &mut Scanner<'_>) -> Result<(), SyntaxError> {
    if !scanner.expect_byte(b'"') {
        return Err(SyntaxError::ExpectedValue);
    }
    loop {
        match scanner.bump() {
            None => return Err(SyntaxError::UnterminatedString),
            Some(b'"') => return Ok(()),
            Some(b'\\') => consume_escape(scanner)?,
            Some(_) => {}
        }
    }
}

/// Validates the byte(s) following a `\` inside a string.
fn consume_escape(scanner: &mut Scanner<'_>) -> Result<(), SyntaxError> {
    match scanner.bump() {
        Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => Ok(()),
        Some(b'u') => {
            for _ in 0..4 {
                match scanner.bump() {
                    Some(byte) if byte.is_ascii_hexdigit() => {}
                    _ => return Err(SyntaxError::InvalidEscape),
                }
            }
            Ok(())
        }
        _ => Err(SyntaxError::InvalidEscape),
    }
}

/// Consumes `-? int frac? exp?`.
///
/// The integer part is `0` exactly or a nonzero digit followed by more
/// digits; a digit after a leading zero is rejected here rather than left
/// for the trailing-content check. Once `.` or `e`/`E` is consumed its
/// digit run is mandatory — there is no rollback to treat the marker as not
/// part of the number.
fn consume_number(scanner: &mut Scanner<'_>) -> Result<(), SyntaxError> {
    scanner.expect_byte(b'-');
    match scanner.peek() {
        Some(b'0') => {
            scanner.bump();
            if matches!(scanner.peek(), Some(b'0'..=b'9')) {
                return Err(SyntaxError::InvalidNumber);
            }
        }
        Some(b'1'..=b'9') => {
            scanner.skip_while(|byte| byte.is_ascii_digit());
        }
        _ => return Err(SyntaxError::InvalidNumber),
    }
    if scanner.expect_byte(b'.') {
        consume_digit_run(scanner)?;
    }
    if scanner.expect_byte(b'e') || scanner.expect_byte(b'E') {
        let _ = scanner.expect_byte(b'+') || scanner.expect_byte(b'-');
        consume_digit_run(scanner)?;
    }
    Ok(())
}

/// One or more decimal digits.
fn consume_digit_run(scanner: &mut Scanner<'_>) -> Result<(), SyntaxError> {
    if scanner.skip_while(|byte| byte.is_ascii_digit()) == 0 {
        return Err(SyntaxError::InvalidNumber);
    }
    Ok(())
}

/// Consumes `[` `(value (, value)*)?` `]`.
///
/// The grammar requires a value immediately after every comma, so a
/// trailing comma fails in the recursive `consume_value` call.
fn consume_array(scanner: &mut Scanner<'_>, depth: usize) -> Result<(), SyntaxError> {
    if !scanner.expect_byte(b'[') {
        return Err(SyntaxError::ExpectedValue);
    }
    let depth = depth
        .checked_sub(1)
        .ok_or(SyntaxError::DepthLimitExceeded)?;
    scanner.skip_whitespace();
    if scanner.expect_byte(b']') {
        return Ok(());
    }
    loop {
        consume_value(scanner, depth)?;
        if scanner.expect_byte(b']') {
            return Ok(());
        }
        if !scanner.expect_byte(b',') {
            return Err(SyntaxError::ExpectedCommaOrClose);
        }
        scanner.skip_whitespace();
    }
}

/// Consumes `{` `(pair (, pair)*)?` `}` where `pair` is `string : value`.
///
/// Keys must be syntactically valid strings; bare identifiers or numbers in
/// key position are rejected before the string consumer runs.
fn consume_object(scanner: &mut Scanner<'_>, depth: usize) -> Result<(), SyntaxError> {
    if !scanner.expect_byte(b'{') {
        return Err(SyntaxError::ExpectedValue);
    }
    let depth = depth
        .checked_sub(1)
        .ok_or(SyntaxError::DepthLimitExceeded)?;
    scanner.skip_whitespace();
    if scanner.expect_byte(b'}') {
        return Ok(());
    }
    loop {
        if scanner.peek() != Some(b'"') {
            return Err(SyntaxError::ExpectedKey);
        }
        consume_string(scanner)?;
        scanner.skip_whitespace();
        if !scanner.expect_byte(b':') {
            return Err(SyntaxError::ExpectedColon);
        }
        scanner.skip_whitespace();
        consume_value(scanner, depth)?;
        if scanner.expect_byte(b'}') {
            return Ok(());
        }
        if !scanner.expect_byte(b',') {
            return Err(SyntaxError::ExpectedCommaOrClose);
        }
        scanner.skip_whitespace();
    }
}
