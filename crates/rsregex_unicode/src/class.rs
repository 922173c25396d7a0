//! Conversions between [`CodePointSet`] and `regex_syntax` classes.
//!
//! `regex_syntax` classes hold `char`s, so surrogate code points never
//! cross the boundary; callers add them back where a set needs them.

use regex_syntax::hir::{Class, ClassUnicode, ClassUnicodeRange, Hir, HirKind};
use rsregex_core::{CodePointRange, CodePointSet};

pub(crate) const SURROGATES: CodePointRange = CodePointRange {
    lo: 0xD800,
    hi: 0xDFFF,
};

/// The non-surrogate part of `set` as a `regex_syntax` class.
pub(crate) fn to_class(set: &CodePointSet) -> ClassUnicode {
    let mut ranges = Vec::with_capacity(set.ranges().len() + 1);
    for range in set.ranges() {
        let below = (range.lo, range.hi.min(SURROGATES.lo - 1));
        let above = (range.lo.max(SURROGATES.hi + 1), range.hi);
        for (lo, hi) in [below, above] {
            if lo > hi {
                continue;
            }
            if let (Some(lo), Some(hi)) = (char::from_u32(lo), char::from_u32(hi)) {
                ranges.push(ClassUnicodeRange::new(lo, hi));
            }
        }
    }
    ClassUnicode::new(ranges)
}

pub(crate) fn from_class(class: &ClassUnicode) -> CodePointSet {
    class
        .iter()
        .map(|range| CodePointRange::new(range.start() as u32, range.end() as u32))
        .collect()
}

/// The code points matched by a translated `\p{..}` expression.
///
/// Single-member classes come back as literals, and empty ones as an
/// empty byte class.
pub(crate) fn from_hir(hir: &Hir) -> Option<CodePointSet> {
    match hir.kind() {
        HirKind::Class(Class::Unicode(class)) => Some(from_class(class)),
        HirKind::Class(Class::Bytes(class)) if class.ranges().is_empty() => {
            Some(CodePointSet::new())
        }
        HirKind::Literal(literal) => {
            let text = std::str::from_utf8(&literal.0).ok()?;
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(CodePointSet::from_code_point(ch as u32)),
                _ => None,
            }
        }
        _ => None,
    }
}
