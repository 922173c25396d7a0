//! Predefined character sets used by `.` and the class escapes `\d \D \s \S \w \W`.
//!
//! The sets are already closed under case folding where that matters, so the
//! lexer can hand them out without folding them again.

use rsregex_core::{CodePointRange, CodePointSet};
use std::sync::OnceLock;

/// Line terminators excluded from `.` unless the dot-all flag is set.
const LINE_TERMINATORS: [u32; 4] = [0x000A, 0x000D, 0x2028, 0x2029];

/// ECMAScript `WhiteSpace` and `LineTerminator` code points.
const WHITE_SPACE_RANGES: [(u32, u32); 10] = [
    (0x0009, 0x000D),
    (0x0020, 0x0020),
    (0x00A0, 0x00A0),
    (0x1680, 0x1680),
    (0x2000, 0x200A),
    (0x2028, 0x2029),
    (0x202F, 0x202F),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
    (0xFEFF, 0xFEFF),
];

/// MONGOLIAN VOWEL SEPARATOR, whitespace before Unicode 6.3.
const MONGOLIAN_VOWEL_SEPARATOR: u32 = 0x180E;

/// LATIN SMALL LETTER LONG S and KELVIN SIGN, which fold onto `s` and `k`.
const WORD_CHARS_FOLD_EXTRAS: [u32; 2] = [0x017F, 0x212A];

/// The full table of predefined sets.
#[derive(Debug)]
pub struct Constants {
    pub dot: CodePointSet,
    pub dot_all: CodePointSet,
    pub digits: CodePointSet,
    pub non_digits: CodePointSet,
    pub white_space: CodePointSet,
    pub non_white_space: CodePointSet,
    pub legacy_white_space: CodePointSet,
    pub legacy_non_white_space: CodePointSet,
    pub word_chars: CodePointSet,
    pub non_word_chars: CodePointSet,
    pub word_chars_unicode_ignore_case: CodePointSet,
    pub non_word_chars_unicode_ignore_case: CodePointSet,
}

impl Constants {
    fn build() -> Self {
        let dot = CodePointSet::from_ranges(
            LINE_TERMINATORS
                .iter()
                .map(|&cp| CodePointRange::single(cp)),
        )
        .create_inverse();

        let digits = CodePointSet::from_range('0' as u32, '9' as u32);

        let white_space = CodePointSet::from_ranges(
            WHITE_SPACE_RANGES
                .iter()
                .map(|&(lo, hi)| CodePointRange::new(lo, hi)),
        );
        let mut legacy_white_space = white_space.clone();
        legacy_white_space.add_code_point(MONGOLIAN_VOWEL_SEPARATOR);

        let word_chars = CodePointSet::from_ranges([
            CodePointRange::new('0' as u32, '9' as u32),
            CodePointRange::new('A' as u32, 'Z' as u32),
            CodePointRange::single('_' as u32),
            CodePointRange::new('a' as u32, 'z' as u32),
        ]);
        let mut word_chars_unicode_ignore_case = word_chars.clone();
        for cp in WORD_CHARS_FOLD_EXTRAS {
            word_chars_unicode_ignore_case.add_code_point(cp);
        }

        Self {
            dot,
            dot_all: CodePointSet::full(),
            non_digits: digits.create_inverse(),
            digits,
            non_white_space: white_space.create_inverse(),
            white_space,
            legacy_non_white_space: legacy_white_space.create_inverse(),
            legacy_white_space,
            non_word_chars: word_chars.create_inverse(),
            word_chars,
            non_word_chars_unicode_ignore_case: word_chars_unicode_ignore_case.create_inverse(),
            word_chars_unicode_ignore_case,
        }
    }
}

static CONSTANTS: OnceLock<Constants> = OnceLock::new();

/// Get the shared predefined sets (lazily initialized).
pub fn constants() -> &'static Constants {
    CONSTANTS.get_or_init(Constants::build)
}
