//! Baseline integer token checks
//!
//! Each one answers the same question as the scan in `scan.rs`, using a
//! more general tool.

use regex::Regex;

use crate::{IntegerClassify, Result};

/// Full-match pattern for an optionally negative run of ASCII digits.
/// `[0-9]` rather than `\d`, which is Unicode-aware in the regex crate.
pub const INTEGER_PATTERN: &str = r"^-?[0-9]+$";

/// Full 32-bit parse, failure means "not an integer"
///
/// Accepts a leading `+` and rejects anything outside `i32`, unlike the scan.
pub struct ParseIntClassifier;

impl IntegerClassify for ParseIntClassifier {
    #[inline]
    fn is_integer(&self, token: &str) -> bool {
        token.parse::<i32>().is_ok()
    }
}

/// Builds the regex on every call
pub struct RegexClassifier;

impl IntegerClassify for RegexClassifier {
    fn is_integer(&self, token: &str) -> bool {
        match Regex::new(INTEGER_PATTERN) {
            Ok(re) => re.is_match(token),
            Err(_) => false,
        }
    }
}

/// Regex compiled once up front
pub struct CompiledRegexClassifier {
    pattern: Regex,
}

impl CompiledRegexClassifier {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(INTEGER_PATTERN)?;
        Ok(Self { pattern })
    }
}

impl IntegerClassify for CompiledRegexClassifier {
    #[inline]
    fn is_integer(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::is_integer;

    #[test]
    fn test_parse_int_accepts_plus() {
        assert!(ParseIntClassifier.is_integer("+5"));
        assert!(!is_integer("+5"));
        assert!(!ParseIntClassifier.is_integer("+"));
    }

    #[test]
    fn test_parse_int_range() {
        assert!(ParseIntClassifier.is_integer("2147483647"));
        assert!(ParseIntClassifier.is_integer("-2147483648"));
        assert!(!ParseIntClassifier.is_integer("2147483648"));
        assert!(!ParseIntClassifier.is_integer("-2147483649"));
        // the scan has no range
        assert!(is_integer("2147483648"));
    }

    #[test]
    fn test_regex_is_anchored() {
        let compiled = CompiledRegexClassifier::new().unwrap();
        for token in ["a42", "42a", "4 2", "-13\n", "5-5"] {
            assert!(!RegexClassifier.is_integer(token), "{token:?}");
            assert!(!compiled.is_integer(token), "{token:?}");
        }
    }

    #[test]
    fn test_regex_ascii_digits_only() {
        let compiled = CompiledRegexClassifier::new().unwrap();
        assert!(!RegexClassifier.is_integer("\u{0663}"));
        assert!(!compiled.is_integer("\u{FF11}"));
    }
}
