//! rsregex_lexer: Lexer for ECMAScript regular expression patterns.
//!
//! Produces typed tokens from a pattern and its flags, with support for:
//! - The strict unicode grammar and the legacy (Annex B) grammar
//! - Character classes, ranges and predefined class escapes
//! - Unicode property escapes (`\p{...}`, unicode mode only)
//! - Counted and shorthand quantifiers, with target validation
//! - Backreferences, including references to groups opened later
//! - Surrogate pairs, literal and escaped

mod char_codes;
mod lexer;
mod token;

pub use lexer::RegexLexer;
pub use token::{Quantifier, Token, TokenKind};

use rsregex_diagnostics::RegexSyntaxError;
use rsregex_options::RegexSource;

/// Tokenize a whole pattern, stopping at the first syntax error.
pub fn tokenize(source: &RegexSource) -> Result<Vec<Token>, RegexSyntaxError> {
    RegexLexer::new(source).collect()
}
