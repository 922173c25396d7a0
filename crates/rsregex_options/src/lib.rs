//! rsregex_options: Pattern sources, lexer options and the `rsregex.json` config file.
//!
//! A [`RegexSource`] bundles everything the lexer needs: the pattern as UTF-16
//! code units, the flag set and the options object. The config file lets the
//! CLI read a batch of patterns together with shared flags and options.

use rsregex_core::{utf16, FlagsError, RegexFlags};
use serde::{Deserialize, Serialize};

/// Options that change lexing behavior independently of the flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegexOptions {
    /// Treat U+180E MONGOLIAN VOWEL SEPARATOR as whitespace in `\s` and `\S`,
    /// as Unicode versions before 6.3 did.
    #[serde(rename = "u180eWhitespace")]
    pub u180e_whitespace: bool,
}

impl RegexOptions {
    #[inline]
    pub fn is_u180e_whitespace(&self) -> bool {
        self.u180e_whitespace
    }
}

/// A pattern together with its flags and options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexSource {
    pattern: Vec<u16>,
    flags: RegexFlags,
    options: RegexOptions,
}

impl RegexSource {
    /// Create a source from pattern text.
    pub fn new(pattern: &str, flags: RegexFlags) -> Self {
        Self::from_utf16(utf16::encode_utf16(pattern), flags)
    }

    /// Create a source from raw UTF-16 code units, which may hold unpaired surrogates.
    pub fn from_utf16(pattern: Vec<u16>, flags: RegexFlags) -> Self {
        Self {
            pattern,
            flags,
            options: RegexOptions::default(),
        }
    }

    /// Create a source, parsing the flag string.
    pub fn parse(pattern: &str, flags: &str) -> Result<Self, FlagsError> {
        Ok(Self::new(pattern, RegexFlags::parse(flags)?))
    }

    pub fn with_options(mut self, options: RegexOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn pattern(&self) -> &[u16] {
        &self.pattern
    }

    /// The pattern as a display string.
    pub fn pattern_text(&self) -> String {
        utf16::decode_lossy(&self.pattern)
    }

    #[inline]
    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    #[inline]
    pub fn options(&self) -> RegexOptions {
        self.options
    }
}

/// The `rsregex.json` file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegexConfig {
    /// Flag letters applied to every pattern, e.g. `"iu"`.
    pub flags: Option<String>,
    pub options: Option<RegexOptions>,
    pub patterns: Option<Vec<String>>,
}

impl RegexConfig {
    /// The parsed flag set, defaulting to no flags.
    pub fn regex_flags(&self) -> Result<RegexFlags, FlagsError> {
        match self.flags {
            Some(ref flags) => RegexFlags::parse(flags),
            None => Ok(RegexFlags::NONE),
        }
    }
}

/// Parse a config file from a string.
pub fn parse_config(content: &str) -> Result<RegexConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a config file from a path.
pub fn parse_config_file(path: &str) -> Result<RegexConfig, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok(config)
}
