//! Lexer integration tests.
//!
//! Verifies that the lexer correctly tokenizes patterns in both the unicode
//! and the legacy grammar.

use pretty_assertions::assert_eq;
use rsregex_core::{CodePointSet, RegexFlags};
use rsregex_diagnostics::{messages, DiagnosticMessage, RegexSyntaxError};
use rsregex_lexer::{tokenize, Quantifier, Token, TokenKind};
use rsregex_options::{RegexOptions, RegexSource};

const LEGACY: RegexFlags = RegexFlags::NONE;
const UNICODE: RegexFlags = RegexFlags::UNICODE;

/// Helper: tokenize a pattern that must be valid.
fn lex(pattern: &str, flags: RegexFlags) -> Vec<Token> {
    match tokenize(&RegexSource::new(pattern, flags)) {
        Ok(tokens) => tokens,
        Err(err) => panic!("unexpected error for {:?}: {}", pattern, err),
    }
}

/// Helper: tokenize a pattern that must fail.
fn lex_err(pattern: &str, flags: RegexFlags) -> RegexSyntaxError {
    match tokenize(&RegexSource::new(pattern, flags)) {
        Ok(tokens) => panic!("expected an error for {:?}, got {:?}", pattern, tokens),
        Err(err) => err,
    }
}

fn assert_error(pattern: &str, flags: RegexFlags, expected: &DiagnosticMessage) {
    let err = lex_err(pattern, flags);
    assert!(
        err.is(expected),
        "{:?}: expected RE{}, got RE{} ({})",
        pattern,
        expected.code,
        err.code,
        err.message_text
    );
}

fn kinds(pattern: &str, flags: RegexFlags) -> Vec<TokenKind> {
    lex(pattern, flags).iter().map(Token::kind).collect()
}

fn class_of(chars: &str) -> Token {
    let mut set = CodePointSet::new();
    for ch in chars.chars() {
        set.add_code_point(ch as u32);
    }
    Token::CharClass(set)
}

fn code_point(cp: u32) -> Token {
    Token::CharClass(CodePointSet::from_code_point(cp))
}

fn quantifier(min: u32, max: Option<u32>, greedy: bool) -> Token {
    Token::Quantifier(Quantifier::new(min, max, greedy))
}

fn only_class(pattern: &str, flags: RegexFlags) -> CodePointSet {
    let tokens = lex(pattern, flags);
    assert_eq!(tokens.len(), 1, "{:?}", pattern);
    match tokens.into_iter().next() {
        Some(Token::CharClass(set)) => set,
        other => panic!("expected a char class, got {:?}", other),
    }
}

#[test]
fn test_empty_pattern() {
    assert!(lex("", UNICODE).is_empty());
    assert!(lex("", LEGACY).is_empty());
}

#[test]
fn test_literals_and_anchors() {
    assert_eq!(
        lex("^ab|c$", UNICODE),
        vec![
            Token::Caret,
            class_of("a"),
            class_of("b"),
            Token::Alternation,
            class_of("c"),
            Token::Dollar,
        ]
    );
}

#[test]
fn test_group_begins() {
    assert_eq!(
        kinds("(?=a)(?!b)(?<=c)(?:d)(e)", UNICODE),
        vec![
            TokenKind::LookAheadAssertionBegin,
            TokenKind::CharClass,
            TokenKind::GroupEnd,
            TokenKind::NegativeLookAheadAssertionBegin,
            TokenKind::CharClass,
            TokenKind::GroupEnd,
            TokenKind::LookBehindAssertionBegin,
            TokenKind::CharClass,
            TokenKind::GroupEnd,
            TokenKind::NonCaptureGroupBegin,
            TokenKind::CharClass,
            TokenKind::GroupEnd,
            TokenKind::CaptureGroupBegin,
            TokenKind::CharClass,
            TokenKind::GroupEnd,
        ]
    );
}

#[test]
fn test_negative_look_behind_is_a_capture_group() {
    // `(?<!` is not recognized, so `?` follows a group begin.
    assert_error("(?<!a)", UNICODE, &messages::QUANTIFIER_WITHOUT_TARGET);
}

// ============================================================================
// Quantifiers
// ============================================================================

#[test]
fn test_quantifier_forms() {
    let cases = [
        ("a{2,5}", quantifier(2, Some(5), true)),
        ("a{3}", quantifier(3, Some(3), true)),
        ("a{2,}", quantifier(2, None, true)),
        ("a*", quantifier(0, None, true)),
        ("a+", quantifier(1, None, true)),
        ("a?", quantifier(0, Some(1), true)),
        ("a{2,5}?", quantifier(2, Some(5), false)),
        ("a{3}?", quantifier(3, Some(3), false)),
        ("a{2,}?", quantifier(2, None, false)),
        ("a*?", quantifier(0, None, false)),
        ("a+?", quantifier(1, None, false)),
        ("a??", quantifier(0, Some(1), false)),
    ];
    for flags in [UNICODE, LEGACY] {
        for (pattern, expected) in &cases {
            assert_eq!(lex(pattern, flags), vec![class_of("a"), expected.clone()]);
        }
    }
}

#[test]
fn test_quantifier_targets() {
    assert_eq!(
        kinds("(a)+\\1*[b]?", UNICODE),
        vec![
            TokenKind::CaptureGroupBegin,
            TokenKind::CharClass,
            TokenKind::GroupEnd,
            TokenKind::Quantifier,
            TokenKind::BackReference,
            TokenKind::Quantifier,
            TokenKind::CharClass,
            TokenKind::Quantifier,
        ]
    );
}

#[test]
fn test_quantifier_without_target() {
    for flags in [UNICODE, LEGACY] {
        assert_error("*a", flags, &messages::QUANTIFIER_WITHOUT_TARGET);
        assert_error("a|+", flags, &messages::QUANTIFIER_WITHOUT_TARGET);
        assert_error("(?", flags, &messages::QUANTIFIER_WITHOUT_TARGET);
        assert_error("^*", flags, &messages::QUANTIFIER_WITHOUT_TARGET);
        assert_error("\\b+", flags, &messages::QUANTIFIER_WITHOUT_TARGET);
        assert_error("{1}", flags, &messages::QUANTIFIER_WITHOUT_TARGET);
    }
}

#[test]
fn test_quantifier_on_quantifier() {
    for flags in [UNICODE, LEGACY] {
        assert_error("a**", flags, &messages::QUANTIFIER_ON_QUANTIFIER);
        assert_error("a{2}+", flags, &messages::QUANTIFIER_ON_QUANTIFIER);
        assert_error("a??+", flags, &messages::QUANTIFIER_ON_QUANTIFIER);
    }
}

#[test]
fn test_incomplete_counted_quantifier() {
    assert_eq!(lex("a{", LEGACY), vec![class_of("a"), class_of("{")]);
    assert_error("a{", UNICODE, &messages::INCOMPLETE_QUANTIFIER);

    assert_eq!(
        lex("a{1,x}", LEGACY),
        vec![
            class_of("a"),
            class_of("{"),
            class_of("1"),
            class_of(","),
            class_of("x"),
            class_of("}"),
        ]
    );
    assert_error("a{1,x}", UNICODE, &messages::INCOMPLETE_QUANTIFIER);
    assert_error("a{,5}", UNICODE, &messages::INCOMPLETE_QUANTIFIER);

    // The abandoned bounds never open a group; only the literal `(` does.
    let tokens = lex("a{1,(b)\\2", LEGACY);
    assert_eq!(tokens[4], Token::CaptureGroupBegin);
    assert_eq!(tokens.last(), Some(&code_point(2)));
}

#[test]
fn test_literal_brace_is_quantifiable() {
    assert_eq!(
        lex("{*", LEGACY),
        vec![class_of("{"), quantifier(0, None, true)]
    );
}

#[test]
fn test_unmatched_closing_delimiters() {
    assert_error("a}", UNICODE, &messages::UNMATCHED_RIGHT_BRACE);
    assert_error("a]", UNICODE, &messages::UNMATCHED_RIGHT_BRACKET);
    assert_eq!(lex("}]", LEGACY), vec![class_of("}"), class_of("]")]);
}

// ============================================================================
// Backreferences
// ============================================================================

#[test]
fn test_backreference_to_open_group() {
    for flags in [UNICODE, LEGACY] {
        assert_eq!(
            lex("(a)\\1", flags),
            vec![
                Token::CaptureGroupBegin,
                class_of("a"),
                Token::GroupEnd,
                Token::BackReference(1),
            ]
        );
    }
}

#[test]
fn test_forward_backreference() {
    for flags in [UNICODE, LEGACY] {
        assert_eq!(
            lex("\\1(a)", flags),
            vec![
                Token::BackReference(1),
                Token::CaptureGroupBegin,
                class_of("a"),
                Token::GroupEnd,
            ]
        );
    }
    // Any later `(` counts, even inside a class.
    assert_eq!(lex("\\2[(]", LEGACY)[0], Token::BackReference(2));
}

#[test]
fn test_backreference_falls_back_to_escape() {
    assert_eq!(lex("\\1", LEGACY), vec![code_point(1)]);
    assert_eq!(lex("(a)\\2", LEGACY)[3], code_point(2));
    assert_eq!(lex("\\12", LEGACY), vec![code_point(0o12)]);
    assert_eq!(lex("\\8", LEGACY), vec![class_of("8")]);
    assert_error("\\1", UNICODE, &messages::INVALID_ESCAPE);
    assert_error("\\8", UNICODE, &messages::INVALID_ESCAPE);
}

#[test]
fn test_multi_digit_backreference() {
    let pattern = format!("{}\\10", "(a)".repeat(10));
    let tokens = lex(&pattern, UNICODE);
    assert_eq!(tokens.last(), Some(&Token::BackReference(10)));
}

// ============================================================================
// Escapes
// ============================================================================

#[test]
fn test_control_escapes() {
    assert_eq!(
        lex("\\t\\n\\v\\f\\r", UNICODE),
        vec![
            code_point(0x09),
            code_point(0x0A),
            code_point(0x0B),
            code_point(0x0C),
            code_point(0x0D),
        ]
    );
}

#[test]
fn test_control_letter_escapes() {
    assert_eq!(lex("\\cA\\cz", UNICODE), vec![code_point(1), code_point(26)]);
    assert_eq!(
        lex("\\c1", LEGACY),
        vec![class_of("\\"), class_of("c"), class_of("1")]
    );
    assert_eq!(lex("\\c", LEGACY), vec![class_of("\\"), class_of("c")]);
    assert_error("\\c1", UNICODE, &messages::INVALID_CONTROL_CHAR_ESCAPE);
    assert_error("\\c", UNICODE, &messages::INVALID_CONTROL_CHAR_ESCAPE);
}

#[test]
fn test_control_digit_in_legacy_class() {
    assert_eq!(lex("[\\c1]", LEGACY), vec![code_point(0x31 % 32)]);
    assert_eq!(lex("[\\c_]", LEGACY), vec![code_point(0x5F % 32)]);
    assert_error("[\\c1]", UNICODE, &messages::INVALID_CONTROL_CHAR_ESCAPE);
}

#[test]
fn test_nul_and_octal_escapes() {
    assert_eq!(lex("\\0", UNICODE), vec![code_point(0)]);
    assert_eq!(lex("\\0a", UNICODE), vec![code_point(0), class_of("a")]);
    assert_error("\\00", UNICODE, &messages::INVALID_ESCAPE);
    assert_eq!(lex("\\01", LEGACY), vec![code_point(1)]);
    assert_eq!(lex("\\08", LEGACY), vec![code_point(0), class_of("8")]);
    assert_eq!(lex("\\101", LEGACY), vec![class_of("A")]);
}

#[test]
fn test_hex_escapes() {
    for flags in [UNICODE, LEGACY] {
        assert_eq!(lex("\\x41\\u0042", flags), vec![class_of("A"), class_of("B")]);
    }
    assert_eq!(lex("\\xZ", LEGACY), vec![class_of("x"), class_of("Z")]);
    assert_eq!(
        lex("\\u00", LEGACY),
        vec![class_of("u"), class_of("0"), class_of("0")]
    );
    assert_error("\\xZ", UNICODE, &messages::INVALID_ESCAPE);
    assert_error("\\u00", UNICODE, &messages::INVALID_UNICODE_ESCAPE);
}

#[test]
fn test_braced_unicode_escape() {
    assert_eq!(lex("\\u{1F600}", UNICODE), vec![code_point(0x1F600)]);
    assert_eq!(lex("\\u{0000041}", UNICODE), vec![class_of("A")]);
    assert_error("\\u{}", UNICODE, &messages::INVALID_UNICODE_ESCAPE);
    assert_error("\\u{41", UNICODE, &messages::INVALID_UNICODE_ESCAPE);
    assert_error("\\u{110000}", UNICODE, &messages::INVALID_UNICODE_ESCAPE);
    // Legacy mode reads `\u` as `u` and `{2}` as a quantifier.
    assert_eq!(
        lex("\\u{2}", LEGACY),
        vec![class_of("u"), quantifier(2, Some(2), true)]
    );
}

#[test]
fn test_escaped_surrogate_pair() {
    assert_eq!(lex("\\uD83D\\uDE00", UNICODE), vec![code_point(0x1F600)]);
    assert_eq!(
        lex("\\uD83D\\uDE00", LEGACY),
        vec![code_point(0xD83D), code_point(0xDE00)]
    );
    assert_eq!(
        lex("\\uD83D\\u0041", UNICODE),
        vec![code_point(0xD83D), class_of("A")]
    );
    assert_eq!(
        lex("\\uD83D\\u{DE00}", UNICODE),
        vec![code_point(0xD83D), code_point(0xDE00)]
    );
    assert_error("\\uD83D\\u12", UNICODE, &messages::INVALID_UNICODE_ESCAPE);
}

#[test]
fn test_identity_escapes() {
    assert_eq!(
        lex("\\/\\.\\*\\\\", UNICODE),
        vec![class_of("/"), class_of("."), class_of("*"), class_of("\\")]
    );
    assert_eq!(lex("\\a\\-", LEGACY), vec![class_of("a"), class_of("-")]);
    assert_error("\\a", UNICODE, &messages::INVALID_ESCAPE);
    assert_error("\\-", UNICODE, &messages::INVALID_ESCAPE);
    assert_eq!(lex("[\\-]", UNICODE), vec![class_of("-")]);
}

#[test]
fn test_word_boundaries() {
    assert_eq!(
        lex("\\ba\\B", UNICODE),
        vec![Token::WordBoundary, class_of("a"), Token::NonWordBoundary]
    );
    assert_eq!(lex("[\\b]", UNICODE), vec![code_point(0x08)]);
}

#[test]
fn test_unfinished_escape() {
    for flags in [UNICODE, LEGACY] {
        assert_error("a\\", flags, &messages::ENDS_WITH_UNFINISHED_ESCAPE_SEQUENCE);
        assert_error("[\\", flags, &messages::ENDS_WITH_UNFINISHED_ESCAPE_SEQUENCE);
        assert_error("[a-\\", flags, &messages::ENDS_WITH_UNFINISHED_ESCAPE_SEQUENCE);
    }
}

// ============================================================================
// Predefined classes and dot
// ============================================================================

#[test]
fn test_predefined_classes() {
    let digits = only_class("\\d", UNICODE);
    assert_eq!(digits, CodePointSet::from_range('0' as u32, '9' as u32));
    assert_eq!(only_class("\\D", UNICODE), digits.create_inverse());
    let word = only_class("\\w", UNICODE);
    assert_eq!(word.size(), 63);
    assert!(only_class("\\s", LEGACY).contains(0xFEFF));
    assert!(!only_class("\\S", LEGACY).contains(' ' as u32));
}

#[test]
fn test_word_class_with_ignore_case() {
    let unicode = only_class("\\w", RegexFlags::UNICODE | RegexFlags::IGNORE_CASE);
    assert!(unicode.contains(0x017F));
    assert!(unicode.contains(0x212A));
    let legacy = only_class("\\w", RegexFlags::IGNORE_CASE);
    assert!(!legacy.contains(0x212A));
    let non_word = only_class("\\W", RegexFlags::UNICODE | RegexFlags::IGNORE_CASE);
    assert!(!non_word.contains(0x212A));
}

#[test]
fn test_u180e_whitespace_option() {
    let options = RegexOptions {
        u180e_whitespace: true,
    };
    let source = RegexSource::new("\\s\\S", LEGACY).with_options(options);
    let tokens = tokenize(&source).unwrap();
    assert!(tokens[0].char_class().unwrap().contains(0x180E));
    assert!(!tokens[1].char_class().unwrap().contains(0x180E));
    assert!(!only_class("\\s", LEGACY).contains(0x180E));
}

#[test]
fn test_dot() {
    let dot = only_class(".", UNICODE);
    assert!(dot.contains('a' as u32));
    assert!(!dot.contains('\n' as u32));
    assert!(!dot.contains('\r' as u32));
    assert!(!dot.contains(0x2028));
    let dot_all = only_class(".", RegexFlags::UNICODE | RegexFlags::DOT_ALL);
    assert!(dot_all.is_full());
}

// ============================================================================
// Character classes
// ============================================================================

#[test]
fn test_char_class_range() {
    let set = only_class("[a-z]", UNICODE);
    assert_eq!(set, CodePointSet::from_range(97, 122));
    let inverted = only_class("[^a-z]", UNICODE);
    assert_eq!(inverted, set.create_inverse());
    assert!(inverted.contains(0x10FFFF));
}

#[test]
fn test_char_class_atoms() {
    assert_eq!(lex("[abc]", UNICODE), vec![class_of("abc")]);
    assert_eq!(lex("[a-]", UNICODE), vec![class_of("a-")]);
    assert_eq!(lex("[-a]", UNICODE), vec![class_of("-a")]);
    assert_eq!(lex("[\\]]", UNICODE), vec![class_of("]")]);
    assert_eq!(lex("[a\\-z]", UNICODE), vec![class_of("a-z")]);
    assert!(only_class("[]", UNICODE).is_empty());
    assert!(only_class("[^]", UNICODE).is_full());
}

#[test]
fn test_char_class_escape_ranges() {
    assert_eq!(
        only_class("[\\x41-\\x43]", UNICODE),
        CodePointSet::from_range(0x41, 0x43)
    );
    assert_eq!(
        only_class("[\\u{1F600}-\\u{1F64F}]", UNICODE),
        CodePointSet::from_range(0x1F600, 0x1F64F)
    );
}

#[test]
fn test_char_class_out_of_order() {
    for flags in [UNICODE, LEGACY] {
        assert_error("[z-a]", flags, &messages::CHAR_CLASS_RANGE_OUT_OF_ORDER);
    }
}

#[test]
fn test_char_class_unterminated() {
    for flags in [UNICODE, LEGACY] {
        assert_error("[abc", flags, &messages::UNMATCHED_LEFT_BRACKET);
        assert_error("[a-", flags, &messages::UNMATCHED_LEFT_BRACKET);
    }
}

#[test]
fn test_class_escape_in_range() {
    assert_error("[\\d-z]", UNICODE, &messages::INVALID_CHARACTER_CLASS);
    assert_error("[a-\\d]", UNICODE, &messages::INVALID_CHARACTER_CLASS);

    let mut expected = CodePointSet::from_range('0' as u32, '9' as u32);
    expected.add_code_point('-' as u32);
    expected.add_code_point('z' as u32);
    assert_eq!(only_class("[\\d-z]", LEGACY), expected);

    let mut expected = CodePointSet::from_range('0' as u32, '9' as u32);
    expected.add_code_point('-' as u32);
    expected.add_code_point('a' as u32);
    assert_eq!(only_class("[a-\\d]", LEGACY), expected);

    // A trailing `-` after a class escape is fine in both modes.
    assert!(only_class("[\\d-]", UNICODE).contains('-' as u32));
}

// ============================================================================
// Case folding
// ============================================================================

#[test]
fn test_ignore_case_literals() {
    let flags = RegexFlags::IGNORE_CASE;
    assert_eq!(lex("a", flags), vec![class_of("aA")]);
    assert_eq!(only_class("[a-c]", flags).size(), 6);
    assert_eq!(lex("1", flags), vec![class_of("1")]);
}

#[test]
fn test_ignore_case_folds_before_inverting() {
    let set = only_class("[^a]", RegexFlags::IGNORE_CASE);
    assert!(!set.contains('a' as u32));
    assert!(!set.contains('A' as u32));
    assert!(set.contains('b' as u32));
}

#[test]
fn test_ignore_case_modes_differ() {
    let unicode = only_class("k", RegexFlags::IGNORE_CASE | RegexFlags::UNICODE);
    assert!(unicode.contains(0x212A));
    let legacy = only_class("k", RegexFlags::IGNORE_CASE);
    assert!(!legacy.contains(0x212A));
    assert!(legacy.contains('K' as u32));
}

#[test]
fn test_unicode_ignore_case_follows_simple_case_folding() {
    let flags = RegexFlags::IGNORE_CASE | RegexFlags::UNICODE;
    // Dotless and dotted I have no simple folding of their own.
    assert_eq!(only_class("i", flags), only_class("[iI]", UNICODE));
    assert_eq!(only_class("\u{0131}", flags), CodePointSet::from_code_point(0x0131));
    assert_eq!(only_class("\u{0130}", flags), CodePointSet::from_code_point(0x0130));
    assert!(!only_class("[a-z]", flags).contains(0x0131));

    let theta = only_class("\u{03F4}", flags);
    for cp in [0x0398, 0x03B8, 0x03D1, 0x03F4] {
        assert!(theta.contains(cp), "U+{:04X} missing from {}", cp, theta);
    }
    assert_eq!(theta.size(), 4);
}

// ============================================================================
// Unicode properties
// ============================================================================

#[test]
fn test_property_escapes() {
    let ascii = only_class("\\p{ASCII}", UNICODE);
    assert_eq!(ascii, CodePointSet::from_range(0, 0x7F));
    assert_eq!(only_class("\\P{ASCII}", UNICODE), ascii.create_inverse());
    assert_eq!(only_class("[\\p{ASCII}]", UNICODE), ascii);
    assert_eq!(only_class("[^\\P{ASCII}]", UNICODE), ascii);
    assert!(only_class("\\p{gc=Cc}", UNICODE).contains(0x1F));
}

#[test]
fn test_category_and_script_properties() {
    let upper = only_class("\\p{Lu}", UNICODE);
    assert!(upper.contains('Q' as u32));
    assert!(!upper.contains('q' as u32));
    assert!(only_class("\\p{L}", UNICODE).contains(0x00E9));
    assert!(only_class("\\p{Nd}", UNICODE).contains(0x0660));
    assert!(only_class("\\p{Script=Greek}", UNICODE).contains(0x03C9));
    assert!(only_class("\\p{sc=Latin}", UNICODE).contains('z' as u32));
    assert!(only_class("\\p{Emoji}", UNICODE).contains(0x1F600));
}

#[test]
fn test_property_names_are_case_sensitive() {
    assert_error("\\p{lu}", UNICODE, &messages::INVALID_UNICODE_PROPERTY_NAME_0);
    assert_error("\\p{Greek}", UNICODE, &messages::INVALID_UNICODE_PROPERTY_NAME_0);
    assert_error("\\p{sc=greek}", UNICODE, &messages::INVALID_UNICODE_PROPERTY_VALUE_0_1);
}

#[test]
fn test_property_errors() {
    assert_error("\\pL", UNICODE, &messages::INVALID_UNICODE_PROPERTY);
    assert_error("\\p{ASCII", UNICODE, &messages::ENDS_WITH_UNFINISHED_UNICODE_PROPERTY);
    assert_error("[\\p{ASCII", UNICODE, &messages::ENDS_WITH_UNFINISHED_UNICODE_PROPERTY);

    let err = lex_err("\\p{Foo}", UNICODE);
    assert!(err.is(&messages::INVALID_UNICODE_PROPERTY_NAME_0));
    assert!(err.message_text.contains("'Foo'"));

    let err = lex_err("\\p{gc=Foo}", UNICODE);
    assert!(err.is(&messages::INVALID_UNICODE_PROPERTY_VALUE_0_1));
    assert!(err.message_text.contains("'Foo'"));
    assert!(err.message_text.contains("'gc'"));
}

#[test]
fn test_property_escape_in_legacy_mode() {
    let tokens = lex("\\p{L}", LEGACY);
    assert_eq!(
        tokens,
        vec![
            class_of("p"),
            class_of("{"),
            class_of("L"),
            class_of("}"),
        ]
    );
}

// ============================================================================
// Surrogates
// ============================================================================

fn lex_utf16(units: Vec<u16>, flags: RegexFlags) -> Vec<Token> {
    tokenize(&RegexSource::from_utf16(units, flags)).unwrap()
}

#[test]
fn test_literal_surrogate_pair() {
    assert_eq!(
        lex_utf16(vec![0xD83D, 0xDE00], UNICODE),
        vec![code_point(0x1F600)]
    );
    assert_eq!(
        lex_utf16(vec![0xD83D, 0xDE00], LEGACY),
        vec![code_point(0xD83D), code_point(0xDE00)]
    );
}

#[test]
fn test_unpaired_surrogates() {
    assert_eq!(
        lex_utf16(vec![0xD83D, 0x61], UNICODE),
        vec![code_point(0xD83D), class_of("a")]
    );
    assert_eq!(lex_utf16(vec![0xDE00], UNICODE), vec![code_point(0xDE00)]);
    assert_eq!(lex_utf16(vec![0xD83D], UNICODE), vec![code_point(0xD83D)]);
}

#[test]
fn test_surrogate_pair_quantified_as_one_atom() {
    let tokens = lex("\u{1F600}+", UNICODE);
    assert_eq!(tokens, vec![code_point(0x1F600), quantifier(1, None, true)]);
}

#[test]
fn test_surrogate_pairs_in_class() {
    let set = only_class("[\u{1F600}-\u{1F64F}]", UNICODE);
    assert_eq!(set, CodePointSet::from_range(0x1F600, 0x1F64F));
    // Legacy mode sees code units: a lone lead, then the range DE00-D83D.
    assert_error("[\u{1F600}-\u{1F64F}]", LEGACY, &messages::CHAR_CLASS_RANGE_OUT_OF_ORDER);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_error_display() {
    let err = lex_err("a**", LEGACY);
    assert_eq!(
        err.to_string(),
        "Invalid regular expression: /a**/: Quantifier on quantifier."
    );
    let err = lex_err("(?<=a]", UNICODE);
    assert_eq!(
        err.to_string(),
        "Invalid regular expression: /(?<=a]/u: Lone quantifier brackets: unmatched ']'."
    );
}

#[test]
fn test_tokens_before_error_are_produced() {
    let source = RegexSource::new("ab{", UNICODE);
    let results: Vec<_> = rsregex_lexer::RegexLexer::new(&source).collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(results[2].is_err());
}
