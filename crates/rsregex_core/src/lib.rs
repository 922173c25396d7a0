//! rsregex_core: Core types shared by the rsregex pattern lexer.
//!
//! Provides code point sets, flag sets, UTF-16 helpers and text spans used
//! throughout the lexing pipeline.

pub mod code_point_set;
pub mod flags;
pub mod text;
pub mod utf16;

// Re-export commonly used types
pub use code_point_set::{CodePointRange, CodePointSet, MAX_CODE_POINT};
pub use flags::{FlagsError, RegexFlags};
pub use text::{TextPos, TextSpan};
