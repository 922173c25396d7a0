//! Case-insensitive closure of code point sets.
//!
//! Two equivalence relations exist. Unicode mode uses simple case folding
//! (the `C` and `S` mappings of CaseFolding.txt), taken from `regex_syntax`.
//! Legacy mode uses the ECMAScript `Canonicalize` rule, which maps through
//! the uppercase form and never maps a non-ASCII code point onto ASCII; its
//! equivalence classes are precomputed once.

use crate::class::{from_class, to_class};
use rsregex_core::{CodePointSet, MAX_CODE_POINT};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

type EquivalenceClasses = Vec<Vec<u32>>;

static LEGACY_CLASSES: OnceLock<EquivalenceClasses> = OnceLock::new();

/// Close `set` under case equivalence.
pub fn apply_case_fold(set: &CodePointSet, unicode: bool) -> CodePointSet {
    if set.is_empty() || set.is_full() {
        return set.clone();
    }
    if unicode {
        simple_fold(set)
    } else {
        canonical_fold(set)
    }
}

/// Surrogates have no case mappings and pass through unchanged.
fn simple_fold(set: &CodePointSet) -> CodePointSet {
    let mut class = to_class(set);
    if let Err(err) = class.try_case_fold_simple() {
        // Only possible when regex-syntax is built without `unicode-case`.
        tracing::warn!(%err, "simple case folding unavailable");
        return set.clone();
    }
    let mut folded = set.clone();
    folded.add_set(&from_class(&class));
    folded
}

fn canonical_fold(set: &CodePointSet) -> CodePointSet {
    let classes = LEGACY_CLASSES.get_or_init(|| build_classes(canonicalize));
    let mut folded = set.clone();
    for class in classes {
        if class.iter().any(|&cp| set.contains(cp)) {
            for &cp in class {
                folded.add_code_point(cp);
            }
        }
    }
    folded
}

/// Group every code point by its canonical form, keeping non-trivial groups.
fn build_classes(canonical: fn(char) -> char) -> EquivalenceClasses {
    let mut groups: FxHashMap<u32, Vec<u32>> = FxHashMap::default();
    for cp in 0..=MAX_CODE_POINT {
        let Some(ch) = char::from_u32(cp) else {
            continue;
        };
        let key = canonical(ch);
        if key != ch {
            groups
                .entry(key as u32)
                .or_insert_with(|| vec![key as u32])
                .push(cp);
        }
    }
    let mut classes: EquivalenceClasses = groups
        .into_values()
        .map(|mut members| {
            members.sort_unstable();
            members.dedup();
            members
        })
        .filter(|members| members.len() > 1)
        .collect();
    classes.sort_unstable();
    tracing::debug!(count = classes.len(), "built case-fold equivalence classes");
    classes
}

/// The ECMAScript `Canonicalize` operation for non-unicode patterns,
/// defined on the full uppercase mapping.
fn canonicalize(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) if (ch as u32) >= 128 && (single as u32) < 128 => ch,
        (Some(single), None) => single,
        _ => ch,
    }
}
