//! rsregex_unicode: Shared Unicode tables consulted by the pattern lexer.
//!
//! - [`constants`]: the sets behind `.`, `\d`, `\s`, `\w` and their complements
//! - [`case_fold`]: case-insensitive closure of a set
//! - [`properties`]: `\p{...}` property name lookup
//!
//! Unicode character data (case folding, categories, scripts and binary
//! properties) comes from `regex_syntax`.
//!
//! All tables are built lazily on first use and are read-only afterwards,
//! so lexers on different threads can share them.

pub mod case_fold;
mod class;
pub mod constants;
pub mod properties;

pub use case_fold::apply_case_fold;
pub use constants::{constants, Constants};
pub use properties::{get_property, PropertyError};
