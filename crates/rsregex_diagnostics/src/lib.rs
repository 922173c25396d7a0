//! rsregex_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! This module defines every diagnostic message the pattern lexer can raise.
//! Each message has a stable numeric code that acts as its key; callers match
//! on the key and leave user-facing formatting to the reporting layer.

mod error;

pub use error::RegexSyntaxError;

use rsregex_core::text::TextSpan;
use std::fmt;

/// A diagnostic message template keyed by its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1501). This is the message key.
    pub code: u32,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A syntax error located in one of a batch of patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the pattern came from (an argument index, a config entry).
    pub origin: String,
    /// The span inside the pattern.
    pub span: TextSpan,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}): error RE{}: {}",
            self.origin, self.span.start, self.code, self.message_text
        )
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// The syntax errors accumulated while lexing a batch of patterns.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // ========================================================================
    // Escape sequences (1500-1519)
    // ========================================================================
    pub const ENDS_WITH_UNFINISHED_ESCAPE_SEQUENCE: DiagnosticMessage = diag!(1500, "Ends with an unfinished escape sequence.");
    pub const INVALID_ESCAPE: DiagnosticMessage = diag!(1501, "Invalid escape.");
    pub const INVALID_CONTROL_CHAR_ESCAPE: DiagnosticMessage = diag!(1502, "Invalid control character escape.");
    pub const INVALID_UNICODE_ESCAPE: DiagnosticMessage = diag!(1503, "Invalid Unicode escape.");
    pub const UNEXPECTED_END_OF_PATTERN: DiagnosticMessage = diag!(1504, "Unexpected end of pattern.");

    // ========================================================================
    // Unicode property escapes (1520-1539)
    // ========================================================================
    pub const INVALID_UNICODE_PROPERTY: DiagnosticMessage = diag!(1520, "Invalid Unicode property escape.");
    pub const ENDS_WITH_UNFINISHED_UNICODE_PROPERTY: DiagnosticMessage = diag!(1521, "Ends with an unfinished Unicode property escape.");
    pub const INVALID_UNICODE_PROPERTY_NAME_0: DiagnosticMessage = diag!(1522, "Invalid Unicode property name '{0}'.");
    pub const INVALID_UNICODE_PROPERTY_VALUE_0_1: DiagnosticMessage = diag!(1523, "Invalid value '{1}' for Unicode property '{0}'.");

    // ========================================================================
    // Character classes and unmatched delimiters (1540-1559)
    // ========================================================================
    pub const UNMATCHED_LEFT_BRACKET: DiagnosticMessage = diag!(1540, "Unterminated character class.");
    pub const UNMATCHED_RIGHT_BRACKET: DiagnosticMessage = diag!(1541, "Lone quantifier brackets: unmatched ']'.");
    pub const UNMATCHED_RIGHT_BRACE: DiagnosticMessage = diag!(1542, "Lone quantifier brackets: unmatched '}'.");
    pub const CHAR_CLASS_RANGE_OUT_OF_ORDER: DiagnosticMessage = diag!(1543, "Range out of order in character class.");
    pub const INVALID_CHARACTER_CLASS: DiagnosticMessage = diag!(1544, "Invalid character class.");

    // ========================================================================
    // Quantifiers (1560-1579)
    // ========================================================================
    pub const QUANTIFIER_WITHOUT_TARGET: DiagnosticMessage = diag!(1560, "Nothing to repeat.");
    pub const QUANTIFIER_ON_QUANTIFIER: DiagnosticMessage = diag!(1561, "Quantifier on quantifier.");
    pub const INCOMPLETE_QUANTIFIER: DiagnosticMessage = diag!(1562, "Incomplete quantifier.");
}
