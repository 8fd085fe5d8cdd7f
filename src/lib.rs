//! Integer Token Benchmark
//!
//! Goal: compare ways of deciding whether a token is a signed integer
//! literal (`-?[0-9]+`). The hand-written scan in `scan` is the reference;
//! `baselines` holds the parse and regex approaches it is timed against.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub mod baselines;
pub mod config;
pub mod corpus;
pub mod error;
pub mod scan;

pub use config::BenchConfig;
pub use error::{Error, Result};
pub use scan::is_integer;

use baselines::{CompiledRegexClassifier, ParseIntClassifier, RegexClassifier};
use scan::CharCheckClassifier;

/// Trait for integer token checks
pub trait IntegerClassify {
    /// Returns true if `token` is an integer literal by this strategy's rules.
    /// Never panics; malformed input is just `false`.
    fn is_integer(&self, token: &str) -> bool;

    /// Same as `is_integer`, with an absent token counted as `false`.
    #[inline]
    fn is_integer_opt(&self, token: Option<&str>) -> bool {
        token.is_some_and(|t| self.is_integer(t))
    }
}

impl<C: IntegerClassify + ?Sized> IntegerClassify for Box<C> {
    #[inline]
    fn is_integer(&self, token: &str) -> bool {
        (**self).is_integer(token)
    }
}

/// The strategies under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    ParseInt,
    Regex,
    RegexCompiled,
    CharCheck,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::ParseInt,
        Strategy::Regex,
        Strategy::RegexCompiled,
        Strategy::CharCheck,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::ParseInt => "parse_int",
            Strategy::Regex => "regex",
            Strategy::RegexCompiled => "regex_compiled",
            Strategy::CharCheck => "char_check",
        }
    }

    pub fn classifier(self) -> Result<Box<dyn IntegerClassify + Send + Sync>> {
        Ok(match self {
            Strategy::ParseInt => Box::new(ParseIntClassifier),
            Strategy::Regex => Box::new(RegexClassifier),
            Strategy::RegexCompiled => Box::new(CompiledRegexClassifier::new()?),
            Strategy::CharCheck => Box::new(CharCheckClassifier::new()),
        })
    }

    /// Whether this strategy accepts exactly the tokens the scan accepts.
    pub fn matches_scan(self) -> bool {
        !matches!(self, Strategy::ParseInt)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}
