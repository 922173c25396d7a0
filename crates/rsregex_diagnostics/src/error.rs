//! The single error kind raised while lexing a pattern.

use crate::{format_message, Diagnostic, DiagnosticMessage};
use rsregex_core::{RegexFlags, TextSpan};
use thiserror::Error;

/// A syntax error in a regular expression pattern.
///
/// Carries the pattern, the flags it was lexed with, and the key of the
/// message that describes the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid regular expression: /{pattern}/{flags}: {message_text}")]
pub struct RegexSyntaxError {
    /// The pattern text, with unpaired surrogates rendered as U+FFFD.
    pub pattern: String,
    pub flags: RegexFlags,
    /// The message key.
    pub code: u32,
    pub message_text: String,
    /// The span of the token being scanned when the error was raised.
    pub span: TextSpan,
}

impl RegexSyntaxError {
    pub fn new(
        pattern: String,
        flags: RegexFlags,
        message: &DiagnosticMessage,
        args: &[&str],
        span: TextSpan,
    ) -> Self {
        Self {
            pattern,
            flags,
            code: message.code,
            message_text: format_message(message.message, args),
            span,
        }
    }

    /// Whether this error was raised with the given message key.
    #[inline]
    pub fn is(&self, message: &DiagnosticMessage) -> bool {
        self.code == message.code
    }

    /// Convert into a located diagnostic for batch reporting.
    pub fn to_diagnostic(&self, origin: impl Into<String>) -> Diagnostic {
        Diagnostic {
            origin: origin.into(),
            span: self.span,
            message_text: self.message_text.clone(),
            code: self.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;

    #[test]
    fn test_display() {
        let err = RegexSyntaxError::new(
            "a**".to_string(),
            RegexFlags::UNICODE,
            &messages::QUANTIFIER_ON_QUANTIFIER,
            &[],
            TextSpan::new(2, 1),
        );
        assert_eq!(
            err.to_string(),
            "Invalid regular expression: /a**/u: Quantifier on quantifier."
        );
        assert!(err.is(&messages::QUANTIFIER_ON_QUANTIFIER));
        assert!(!err.is(&messages::QUANTIFIER_WITHOUT_TARGET));
    }

    #[test]
    fn test_to_diagnostic() {
        let err = RegexSyntaxError::new(
            "\\p{Foo}".to_string(),
            RegexFlags::UNICODE,
            &messages::INVALID_UNICODE_PROPERTY_NAME_0,
            &["Foo"],
            TextSpan::new(0, 7),
        );
        let diag = err.to_diagnostic("config[0]");
        assert_eq!(diag.code, messages::INVALID_UNICODE_PROPERTY_NAME_0.code);
        assert_eq!(diag.span, TextSpan::new(0, 7));
        assert_eq!(
            diag.to_string(),
            "config[0](0): error RE1522: Invalid Unicode property name 'Foo'."
        );
    }
}
