use thiserror::Error;

/// The grammar rule that rejected the input.
///
/// Variants deliberately carry no position or payload: the validator reports
/// a verdict, not diagnostics. The distinction that matters is between a
/// grammar violation inside a construct, leftover bytes after a complete
/// value ([`TrailingContent`]), and the nesting bound
/// ([`DepthLimitExceeded`]).
///
/// [`TrailingContent`]: SyntaxError::TrailingContent
/// [`DepthLimitExceeded`]: SyntaxError::DepthLimitExceeded
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// No value grammar rule matches the current byte.
    #[error("expected a JSON value")]
    ExpectedValue,
    /// The buffer ended where a value was required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A keyword position held none of `true`, `false`, `null`.
    #[error("invalid literal")]
    InvalidLiteral,
    /// The buffer ended before a string's closing quote.
    #[error("unterminated string")]
    UnterminatedString,
    /// A `\` was followed by a byte outside the escape set, or a `\u` escape
    /// had fewer than four hex digits.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A number violated the numeric grammar (leading zero, missing digit
    /// run after `.` or an exponent marker, bare sign).
    #[error("invalid number")]
    InvalidNumber,
    /// An object member did not start with a string key.
    #[error("expected string key")]
    ExpectedKey,
    /// An object key was not followed by `:`.
    #[error("expected ':' after object key")]
    ExpectedColon,
    /// An array or object element was not followed by `,` or its closer.
    #[error("expected ',' or closing bracket")]
    ExpectedCommaOrClose,
    /// A complete value was followed by non-whitespace bytes.
    #[error("trailing content after value")]
    TrailingContent,
    /// Arrays/objects nested deeper than [`max_depth`].
    ///
    /// [`max_depth`]: crate::ValidatorOptions::max_depth
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
}
