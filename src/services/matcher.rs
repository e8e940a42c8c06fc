//! Name matching against the user supplied pattern

use crate::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Compiled, case-insensitive, unanchored pattern applied to bare entry names
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile `pattern`. A bad pattern is a startup error.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| Error::InvalidPattern(err.to_string()))?;

        Ok(Self { regex })
    }

    /// True when the pattern occurs anywhere in `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
