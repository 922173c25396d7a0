//! Regular expression flag sets.

use std::fmt;
use thiserror::Error;

bitflags::bitflags! {
    /// The flags a pattern is compiled with, matching the ECMAScript flag letters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RegexFlags: u8 {
        const NONE        = 0;
        const GLOBAL      = 1 << 0;
        const IGNORE_CASE = 1 << 1;
        const MULTILINE   = 1 << 2;
        const DOT_ALL     = 1 << 3;
        const UNICODE     = 1 << 4;
        const STICKY      = 1 << 5;
    }
}

/// Flag letters in canonical order.
const FLAG_LETTERS: [(char, RegexFlags); 6] = [
    ('g', RegexFlags::GLOBAL),
    ('i', RegexFlags::IGNORE_CASE),
    ('m', RegexFlags::MULTILINE),
    ('s', RegexFlags::DOT_ALL),
    ('u', RegexFlags::UNICODE),
    ('y', RegexFlags::STICKY),
];

/// Error produced when a flag string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagsError {
    #[error("Invalid regular expression flag '{0}'.")]
    Invalid(char),
    #[error("Duplicate regular expression flag '{0}'.")]
    Duplicate(char),
}

impl RegexFlags {
    /// Parse a flag string such as `"gi"` or `"uy"`.
    pub fn parse(text: &str) -> Result<Self, FlagsError> {
        let mut flags = RegexFlags::NONE;
        for ch in text.chars() {
            let flag = FLAG_LETTERS
                .iter()
                .find(|(letter, _)| *letter == ch)
                .map(|(_, flag)| *flag)
                .ok_or(FlagsError::Invalid(ch))?;
            if flags.contains(flag) {
                return Err(FlagsError::Duplicate(ch));
            }
            flags |= flag;
        }
        Ok(flags)
    }

    #[inline]
    pub fn is_unicode(&self) -> bool {
        self.contains(RegexFlags::UNICODE)
    }

    #[inline]
    pub fn is_ignore_case(&self) -> bool {
        self.contains(RegexFlags::IGNORE_CASE)
    }

    #[inline]
    pub fn is_dot_all(&self) -> bool {
        self.contains(RegexFlags::DOT_ALL)
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, flag) in FLAG_LETTERS {
            if self.contains(flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for RegexFlags {
    type Err = FlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegexFlags::parse(s)
    }
}
