//! Tokenizing raw text into a numeric sample
//!
//! Input text is split into lines at `\n`, `\r\n`, or a lone `\r`, and each
//! line into whitespace-separated tokens. Every token becomes exactly one
//! sample value:
//!
//! - Tokens that parse as `f64` (decimal, scientific notation, `inf`, `nan`)
//!   are appended as-is. A single `_` between two digits is a digit
//!   separator and is ignored, so `1_000` is `1000`.
//! - Any other token is reported through the caller's diagnostic callback
//!   and [`INVALID_TOKEN_VALUE`] is appended in its place, so invalid tokens
//!   still count toward the sample size.
//!
//! Parsing never fails as a whole; one bad token does not affect the rest.
//!
//! # Examples
//!
//! ```
//! use descstat_analysis::parse::{InvalidToken, parse_sample};
//!
//! let mut diagnostics = vec![];
//! let sample = parse_sample("1 2\n3 abc\n", |diag| diagnostics.push(diag));
//!
//! assert_eq!(sample.values(), &[1.0, 2.0, 3.0, 0.0]);
//! assert_eq!(sample.invalid_tokens(), 1);
//! assert_eq!(
//!     diagnostics,
//!     vec![InvalidToken { line: 2, token: "abc".to_owned() }]
//! );
//! ```

use std::{borrow::Cow, iter, mem};

/// Value substituted for a token that is not a number.
///
/// Substituting rather than skipping keeps the sample size equal to the
/// token count, at the cost of pulling the mean and variance toward zero.
pub const INVALID_TOKEN_VALUE: f64 = 0.0;

/// A token that could not be parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid token at line {line}: '{token}'")]
pub struct InvalidToken {
    /// 1-based line number.
    pub line: usize,
    /// The offending token text.
    pub token: String,
}

/// Values of one input in token order.
///
/// The sample only grows while parsing; afterwards it is read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSample {
    values: Vec<f64>,
    invalid_tokens: usize,
}

impl NumericSample {
    fn push_valid(&mut self, value: f64) {
        self.values.push(value);
    }

    fn push_invalid(&mut self) {
        self.values.push(INVALID_TOKEN_VALUE);
        self.invalid_tokens += 1;
    }

    /// Returns all values, substituted ones included, in input order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns how many values were substituted for invalid tokens.
    #[must_use]
    pub fn invalid_tokens(&self) -> usize {
        self.invalid_tokens
    }
}

/// Removes `_` digit separators from `token`.
///
/// Returns `None` if any `_` is not surrounded by ASCII digits on both sides.
fn strip_digit_separators(token: &str) -> Option<Cow<'_, str>> {
    if !token.contains('_') {
        return Some(Cow::Borrowed(token));
    }
    let bytes = token.as_bytes();
    let digit_at = |idx: Option<usize>| {
        idx.and_then(|idx| bytes.get(idx))
            .is_some_and(u8::is_ascii_digit)
    };
    let separated = token
        .match_indices('_')
        .all(|(idx, _)| digit_at(idx.checked_sub(1)) && digit_at(Some(idx + 1)));
    separated.then(|| Cow::Owned(token.replace('_', "")))
}

/// Parses one token.
fn parse_token(token: &str) -> Option<f64> {
    strip_digit_separators(token)?.parse::<f64>().ok()
}

/// Splits `text` into lines ending at `\n`, `\r\n`, or a lone `\r`.
///
/// Like [`str::lines`], a final line terminator does not start an empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(['\r', '\n']) else {
            return Some(mem::take(&mut rest));
        };
        let line = &rest[..pos];
        let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator..];
        Some(line)
    })
}

/// Parses `text` into a [`NumericSample`].
///
/// `on_invalid` is called once per invalid token, in input order.
pub fn parse_sample<F>(text: &str, mut on_invalid: F) -> NumericSample
where
    F: FnMut(InvalidToken),
{
    let mut sample = NumericSample::default();
    for (idx, line) in split_lines(text).enumerate() {
        for token in line.split_whitespace() {
            if let Some(value) = parse_token(token) {
                sample.push_valid(value);
            } else {
                on_invalid(InvalidToken {
                    line: idx + 1,
                    token: token.to_owned(),
                });
                sample.push_invalid();
            }
        }
    }
    sample
}
