//! Character-scan integer token check
//!
//! The reference behaviour every other strategy is measured against.

use crate::IntegerClassify;

/// Returns true if `token` is an optional `-` followed by one or more ASCII digits.
///
/// No `+` sign, no whitespace, no separators. `"-"` and `""` are rejected.
#[inline]
pub fn is_integer(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    let start = usize::from(bytes[0] == b'-');
    if start == 1 && bytes.len() == 1 {
        return false;
    }

    for &byte in &bytes[start..] {
        if !byte.is_ascii_digit() {
            return false;
        }
    }
    true
}

/// Hand-written scan, one pass with early exit
pub struct CharCheckClassifier;

impl CharCheckClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CharCheckClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerClassify for CharCheckClassifier {
    #[inline]
    fn is_integer(&self, token: &str) -> bool {
        is_integer(token)
    }
}
