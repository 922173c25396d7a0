//! Tokens produced by the lexer.

use rsregex_core::CodePointSet;
use std::fmt;

/// Repetition bounds of a quantifier token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantifier {
    pub min: u32,
    /// `None` means unbounded.
    pub max: Option<u32>,
    pub greedy: bool,
}

impl Quantifier {
    pub fn new(min: u32, max: Option<u32>, greedy: bool) -> Self {
        Self { min, max, greedy }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{{{}}}", self.min)?,
            Some(max) => write!(f, "{{{},{}}}", self.min, max)?,
            None => write!(f, "{{{},}}", self.min)?,
        }
        if !self.greedy {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// A single lexical unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A set of code points matched at one position.
    CharClass(CodePointSet),
    Caret,
    Dollar,
    Alternation,
    CaptureGroupBegin,
    NonCaptureGroupBegin,
    LookAheadAssertionBegin,
    NegativeLookAheadAssertionBegin,
    LookBehindAssertionBegin,
    GroupEnd,
    Quantifier(Quantifier),
    WordBoundary,
    NonWordBoundary,
    /// A 1-based capture group number.
    BackReference(u32),
}

/// The payload-free discriminant of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    CharClass,
    Caret,
    Dollar,
    Alternation,
    CaptureGroupBegin,
    NonCaptureGroupBegin,
    LookAheadAssertionBegin,
    NegativeLookAheadAssertionBegin,
    LookBehindAssertionBegin,
    GroupEnd,
    Quantifier,
    WordBoundary,
    NonWordBoundary,
    BackReference,
}

impl TokenKind {
    /// Whether a quantifier may follow a token of this kind.
    #[inline]
    pub fn is_quantifiable(self) -> bool {
        matches!(
            self,
            TokenKind::CharClass | TokenKind::GroupEnd | TokenKind::BackReference
        )
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::CharClass(_) => TokenKind::CharClass,
            Token::Caret => TokenKind::Caret,
            Token::Dollar => TokenKind::Dollar,
            Token::Alternation => TokenKind::Alternation,
            Token::CaptureGroupBegin => TokenKind::CaptureGroupBegin,
            Token::NonCaptureGroupBegin => TokenKind::NonCaptureGroupBegin,
            Token::LookAheadAssertionBegin => TokenKind::LookAheadAssertionBegin,
            Token::NegativeLookAheadAssertionBegin => TokenKind::NegativeLookAheadAssertionBegin,
            Token::LookBehindAssertionBegin => TokenKind::LookBehindAssertionBegin,
            Token::GroupEnd => TokenKind::GroupEnd,
            Token::Quantifier(_) => TokenKind::Quantifier,
            Token::WordBoundary => TokenKind::WordBoundary,
            Token::NonWordBoundary => TokenKind::NonWordBoundary,
            Token::BackReference(_) => TokenKind::BackReference,
        }
    }

    pub fn char_class(&self) -> Option<&CodePointSet> {
        match self {
            Token::CharClass(set) => Some(set),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::CharClass(set) => write!(f, "CharClass {}", set),
            Token::Quantifier(quantifier) => write!(f, "Quantifier {}", quantifier),
            Token::BackReference(number) => write!(f, "BackReference \\{}", number),
            other => write!(f, "{:?}", other.kind()),
        }
    }
}
