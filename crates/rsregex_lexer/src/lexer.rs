//! The ECMAScript regular expression lexer.
//!
//! Converts a pattern into a stream of [`Token`]s, one per call to
//! [`RegexLexer::next_token`]. Two grammars are supported: the strict unicode
//! grammar (`u` flag) and the legacy grammar, which accepts the historical
//! forms of Annex B (octal escapes, literal `{` `}` `]`, forward references
//! to any later `(`, and so on).
//!
//! The lexer keeps only one token of lookback (to validate quantifier
//! targets) and a count of the capture groups opened so far (to tell
//! backreferences from octal escapes).

use crate::char_codes::*;
use crate::token::{Quantifier, Token, TokenKind};
use rsregex_core::{utf16, CodePointRange, CodePointSet, RegexFlags, TextPos, TextSpan};
use rsregex_diagnostics::{messages, DiagnosticMessage, RegexSyntaxError};
use rsregex_options::{RegexOptions, RegexSource};
use rsregex_unicode::{apply_case_fold, constants, get_property, PropertyError};

type LexResult<T> = Result<T, RegexSyntaxError>;

/// Lexer over a single pattern.
pub struct RegexLexer<'a> {
    /// The pattern as UTF-16 code units.
    pattern: &'a [u16],
    flags: RegexFlags,
    options: RegexOptions,
    /// Current position in the pattern.
    index: usize,
    /// Start of the token being scanned.
    token_start: usize,
    /// Kind of the most recently produced token.
    last_token: Option<TokenKind>,
    /// One more than the number of capture groups opened so far.
    n_groups: u32,
    /// Set once an error has been returned through the iterator.
    failed: bool,
}

impl<'a> RegexLexer<'a> {
    /// Create a new lexer for the given pattern source.
    pub fn new(source: &'a RegexSource) -> Self {
        Self {
            pattern: source.pattern(),
            flags: source.flags(),
            options: source.options(),
            index: 0,
            token_start: 0,
            last_token: None,
            n_groups: 1,
            failed: false,
        }
    }

    /// Whether there is input left to tokenize.
    #[inline]
    pub fn has_next(&self) -> bool {
        !self.at_end()
    }

    /// Produce the next token.
    ///
    /// Must only be called while [`has_next`](Self::has_next) is true;
    /// calling it at the end of the pattern is reported as a syntax error.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.token_start = self.index;
        let token = self.scan_token()?;
        self.last_token = Some(token.kind());
        tracing::trace!(kind = ?token.kind(), span = %self.token_span(), "token");
        Ok(token)
    }

    /// Span of the most recently produced token (or of the token being
    /// scanned when an error was raised).
    #[inline]
    pub fn token_span(&self) -> TextSpan {
        TextSpan::from_bounds(to_pos(self.token_start), to_pos(self.index))
    }

    /// Current position in the pattern, in code units.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    // ========================================================================
    // Scan primitives
    // ========================================================================

    #[inline]
    fn at_end(&self) -> bool {
        self.index >= self.pattern.len()
    }

    #[inline]
    fn current(&self) -> Option<u16> {
        self.pattern.get(self.index).copied()
    }

    #[inline]
    fn current_is(&self, pred: fn(u16) -> bool) -> bool {
        self.current().is_some_and(pred)
    }

    #[inline]
    fn consume(&mut self) -> Option<u16> {
        let unit = self.current()?;
        self.index += 1;
        Some(unit)
    }

    #[inline]
    fn advance(&mut self) {
        self.index += 1;
    }

    #[inline]
    fn retreat(&mut self) {
        self.index -= 1;
    }

    /// Whether the remaining input starts with `literal` (ASCII only).
    fn look_ahead(&self, literal: &str) -> bool {
        let rest = &self.pattern[self.index.min(self.pattern.len())..];
        rest.len() >= literal.len()
            && literal
                .bytes()
                .zip(rest)
                .all(|(expected, &unit)| u16::from(expected) == unit)
    }

    /// Consume `literal` if the remaining input starts with it.
    fn consuming_look_ahead(&mut self, literal: &str) -> bool {
        let matches = self.look_ahead(literal);
        if matches {
            self.index += literal.len();
        }
        matches
    }

    /// Whether `unit` occurs anywhere in the remaining input.
    fn find_char_ahead(&self, unit: u16) -> bool {
        self.pattern
            .get(self.index..)
            .is_some_and(|rest| rest.contains(&unit))
    }

    /// Try scanning: call `f`, and if it returns `None` restore the position.
    fn try_scan<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let save_index = self.index;
        let result = f(self);
        if result.is_none() {
            self.index = save_index;
        }
        result
    }

    /// Like [`try_scan`](Self::try_scan), for scans that may also fail hard.
    fn try_scan_result<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> LexResult<Option<T>>,
    ) -> LexResult<Option<T>> {
        let save_index = self.index;
        let result = f(self);
        if matches!(result, Ok(None)) {
            self.index = save_index;
        }
        result
    }

    #[inline]
    fn is_unicode(&self) -> bool {
        self.flags.is_unicode()
    }

    fn syntax_error(&self, message: &DiagnosticMessage, args: &[&str]) -> RegexSyntaxError {
        RegexSyntaxError::new(
            utf16::decode_lossy(self.pattern),
            self.flags,
            message,
            args,
            self.token_span(),
        )
    }

    /// Wrap a set into a char-class token, case folding and inverting it as needed.
    fn char_class(&self, set: CodePointSet, invert: bool) -> Token {
        let set = if self.flags.is_ignore_case() {
            apply_case_fold(&set, self.is_unicode())
        } else {
            set
        };
        Token::CharClass(if invert { set.create_inverse() } else { set })
    }

    fn single_char_class(&self, code_point: u32) -> Token {
        self.char_class(CodePointSet::from_code_point(code_point), false)
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    fn scan_token(&mut self) -> LexResult<Token> {
        let Some(c) = self.consume() else {
            return Err(self.syntax_error(&messages::UNEXPECTED_END_OF_PATTERN, &[]));
        };
        match c {
            DOT => {
                let table = constants();
                let set = if self.flags.is_dot_all() {
                    &table.dot_all
                } else {
                    &table.dot
                };
                Ok(self.char_class(set.clone(), false))
            }
            CARET => Ok(Token::Caret),
            DOLLAR_SIGN => Ok(Token::Dollar),
            OPEN_BRACE | ASTERISK | PLUS | QUESTION => self.scan_quantifier(c),
            CLOSE_BRACE if self.is_unicode() => {
                Err(self.syntax_error(&messages::UNMATCHED_RIGHT_BRACE, &[]))
            }
            BAR => Ok(Token::Alternation),
            OPEN_PAREN => Ok(self.scan_group_begin()),
            CLOSE_PAREN => Ok(Token::GroupEnd),
            OPEN_BRACKET => self.scan_char_class(),
            CLOSE_BRACKET if self.is_unicode() => {
                Err(self.syntax_error(&messages::UNMATCHED_RIGHT_BRACKET, &[]))
            }
            BACKSLASH => self.scan_escape(),
            _ if self.is_unicode() && utf16::is_high_surrogate(c) => {
                let code_point = self.finish_surrogate_pair(c);
                Ok(self.single_char_class(code_point))
            }
            _ => Ok(self.single_char_class(u32::from(c))),
        }
    }

    fn scan_group_begin(&mut self) -> Token {
        if self.consuming_look_ahead("?=") {
            Token::LookAheadAssertionBegin
        } else if self.consuming_look_ahead("?!") {
            Token::NegativeLookAheadAssertionBegin
        } else if self.consuming_look_ahead("?<=") {
            Token::LookBehindAssertionBegin
        } else if self.consuming_look_ahead("?:") {
            Token::NonCaptureGroupBegin
        } else {
            self.n_groups = self.n_groups.saturating_add(1);
            Token::CaptureGroupBegin
        }
    }

    // ========================================================================
    // Quantifiers
    // ========================================================================

    fn scan_quantifier(&mut self, c: u16) -> LexResult<Token> {
        let (min, max) = match c {
            OPEN_BRACE => match self.try_scan(Self::scan_counted_bounds) {
                Some(bounds) => bounds,
                None if self.is_unicode() => {
                    return Err(self.syntax_error(&messages::INCOMPLETE_QUANTIFIER, &[]));
                }
                None => {
                    tracing::debug!(index = self.token_start, "'{{' is not a quantifier, lexing it as a literal");
                    return Ok(self.single_char_class(u32::from(OPEN_BRACE)));
                }
            },
            ASTERISK => (0, None),
            PLUS => (1, None),
            _ => (0, Some(1)),
        };
        let greedy = !self.consuming_look_ahead("?");
        match self.last_token {
            Some(TokenKind::Quantifier) => {
                Err(self.syntax_error(&messages::QUANTIFIER_ON_QUANTIFIER, &[]))
            }
            Some(kind) if kind.is_quantifiable() => {
                Ok(Token::Quantifier(Quantifier::new(min, max, greedy)))
            }
            _ => Err(self.syntax_error(&messages::QUANTIFIER_WITHOUT_TARGET, &[])),
        }
    }

    /// Scan the `m}`, `m,}` or `m,n}` tail of a counted repetition.
    fn scan_counted_bounds(&mut self) -> Option<(u32, Option<u32>)> {
        let min = self.scan_decimal()?;
        if self.consuming_look_ahead(",}") {
            return Some((min, None));
        }
        if self.consuming_look_ahead("}") {
            return Some((min, Some(min)));
        }
        if !self.consuming_look_ahead(",") {
            return None;
        }
        let max = self.scan_decimal()?;
        self.consuming_look_ahead("}").then_some((min, Some(max)))
    }

    // ========================================================================
    // Escapes
    // ========================================================================

    fn scan_escape(&mut self) -> LexResult<Token> {
        let Some(c) = self.consume() else {
            return Err(self.syntax_error(&messages::ENDS_WITH_UNFINISHED_ESCAPE_SEQUENCE, &[]));
        };
        if (u16::from(b'1')..=_9).contains(&c) {
            let reference = self.try_scan(|lexer| {
                let number = lexer.scan_decimal_from(u32::from(c - _0));
                (number < lexer.n_groups || lexer.find_char_ahead(OPEN_PAREN)).then_some(number)
            });
            if let Some(number) = reference {
                if number >= self.n_groups {
                    tracing::debug!(number, "backreference to a group that is not open yet");
                }
                return Ok(Token::BackReference(number));
            }
        }
        match c {
            B_LOWER => Ok(Token::WordBoundary),
            B_UPPER => Ok(Token::NonWordBoundary),
            // Predefined classes are stored pre-folded, so they skip `char_class`.
            _ if is_predefined_class(c) => Ok(Token::CharClass(self.predefined_class(c))),
            P_LOWER | P_UPPER if self.is_unicode() => {
                let set = self.scan_property(c == P_UPPER)?;
                Ok(self.char_class(set, false))
            }
            _ => {
                let code_point = self.scan_escape_char(c, false)?;
                Ok(self.single_char_class(code_point))
            }
        }
    }

    fn is_class_escape(&self, c: u16) -> bool {
        is_predefined_class(c) || (self.is_unicode() && (c == P_LOWER || c == P_UPPER))
    }

    /// The set of a class escape; `c` must satisfy [`is_class_escape`](Self::is_class_escape).
    fn scan_class_escape(&mut self, c: u16) -> LexResult<CodePointSet> {
        if is_predefined_class(c) {
            Ok(self.predefined_class(c))
        } else {
            self.scan_property(c == P_UPPER)
        }
    }

    fn predefined_class(&self, c: u16) -> CodePointSet {
        let table = constants();
        let legacy_white_space = self.options.is_u180e_whitespace();
        let unicode_ignore_case = self.is_unicode() && self.flags.is_ignore_case();
        let set = match u8::try_from(c) {
            Ok(b's') if legacy_white_space => &table.legacy_white_space,
            Ok(b's') => &table.white_space,
            Ok(b'S') if legacy_white_space => &table.legacy_non_white_space,
            Ok(b'S') => &table.non_white_space,
            Ok(b'd') => &table.digits,
            Ok(b'D') => &table.non_digits,
            Ok(b'w') if unicode_ignore_case => &table.word_chars_unicode_ignore_case,
            Ok(b'w') => &table.word_chars,
            Ok(b'W') if unicode_ignore_case => &table.non_word_chars_unicode_ignore_case,
            _ => &table.non_word_chars,
        };
        set.clone()
    }

    /// Scan the `{name}` part of `\p{name}` / `\P{name}`.
    fn scan_property(&mut self, invert: bool) -> LexResult<CodePointSet> {
        if !self.consuming_look_ahead("{") {
            return Err(self.syntax_error(&messages::INVALID_UNICODE_PROPERTY, &[]));
        }
        let name_start = self.index;
        while self.current().is_some_and(|unit| unit != CLOSE_BRACE) {
            self.advance();
        }
        let name = utf16::decode_lossy(&self.pattern[name_start..self.index]);
        if !self.consuming_look_ahead("}") {
            return Err(self.syntax_error(&messages::ENDS_WITH_UNFINISHED_UNICODE_PROPERTY, &[]));
        }
        let set = get_property(&name).map_err(|err| match err {
            PropertyError::UnknownName(name) => {
                self.syntax_error(&messages::INVALID_UNICODE_PROPERTY_NAME_0, &[&name])
            }
            PropertyError::UnknownValue { name, value } => {
                self.syntax_error(&messages::INVALID_UNICODE_PROPERTY_VALUE_0_1, &[&name, &value])
            }
        })?;
        Ok(if invert { set.create_inverse() } else { set })
    }

    /// Resolve the escape `\c` (with `c` already consumed) to a code point.
    fn scan_escape_char(&mut self, c: u16, in_class: bool) -> LexResult<u32> {
        if in_class && c == B_LOWER {
            return Ok(u32::from(BACKSPACE));
        }
        match c {
            _0 => {
                if self.is_unicode() && self.current_is(is_decimal_digit) {
                    Err(self.syntax_error(&messages::INVALID_ESCAPE, &[]))
                } else if !self.is_unicode() && self.current_is(is_octal_digit) {
                    Ok(self.scan_octal(0))
                } else {
                    Ok(u32::from(NULL_CHARACTER))
                }
            }
            T_LOWER => Ok(u32::from(TAB)),
            N_LOWER => Ok(u32::from(LINE_FEED)),
            V_LOWER => Ok(u32::from(VERTICAL_TAB)),
            F_LOWER => Ok(u32::from(FORM_FEED)),
            R_LOWER => Ok(u32::from(CARRIAGE_RETURN)),
            C_LOWER => self.scan_control_escape(in_class),
            U_LOWER => self.scan_unicode_escape(),
            X_LOWER => match self.scan_hex(2, 2, 0xFF, &messages::INVALID_ESCAPE)? {
                Some(value) => Ok(value),
                None => {
                    tracing::debug!("incomplete \\x escape, lexing 'x' as a literal");
                    Ok(u32::from(c))
                }
            },
            MINUS if in_class => Ok(u32::from(c)),
            MINUS => self.escape_char_error(c, &messages::INVALID_ESCAPE),
            _ if !self.is_unicode() && is_octal_digit(c) => Ok(self.scan_octal(u32::from(c - _0))),
            _ if is_syntax_char(c) => Ok(u32::from(c)),
            _ => self.escape_char_error(c, &messages::INVALID_ESCAPE),
        }
    }

    /// Invalid escapes are errors in unicode mode and literals otherwise.
    fn escape_char_error(&self, c: u16, message: &DiagnosticMessage) -> LexResult<u32> {
        if self.is_unicode() {
            return Err(self.syntax_error(message, &[]));
        }
        tracing::debug!(unit = c, "invalid escape, lexing it as a literal");
        Ok(u32::from(c))
    }

    /// `\cX`, with the `c` already consumed.
    fn scan_control_escape(&mut self, in_class: bool) -> LexResult<u32> {
        let Some(letter) = self.current() else {
            self.retreat();
            return self.escape_char_error(BACKSLASH, &messages::INVALID_CONTROL_CHAR_ESCAPE);
        };
        if !self.is_unicode() && in_class && (is_decimal_digit(letter) || letter == UNDERSCORE) {
            self.advance();
            return Ok(u32::from(letter) % 32);
        }
        if !is_ascii_letter(letter) {
            // Back to the `c`, which is then lexed on its own.
            self.retreat();
            return self.escape_char_error(BACKSLASH, &messages::INVALID_CONTROL_CHAR_ESCAPE);
        }
        self.advance();
        let upper = letter & !0x20;
        Ok(u32::from(upper - (A_UPPER - 1)))
    }

    /// `\uXXXX`, `\u{X...}` and, in unicode mode, `\uLEAD\uTRAIL` pairs.
    fn scan_unicode_escape(&mut self) -> LexResult<u32> {
        if self.is_unicode() && self.consuming_look_ahead("{") {
            let value = self.scan_hex(1, usize::MAX, rsregex_core::MAX_CODE_POINT, &messages::INVALID_UNICODE_ESCAPE)?;
            return match value {
                Some(value) if self.consuming_look_ahead("}") => Ok(value),
                _ => Err(self.syntax_error(&messages::INVALID_UNICODE_ESCAPE, &[])),
            };
        }
        let Some(value) = self.scan_hex(4, 4, 0xFFFF, &messages::INVALID_UNICODE_ESCAPE)? else {
            tracing::debug!("incomplete \\u escape, lexing 'u' as a literal");
            return Ok(u32::from(U_LOWER));
        };
        let lead = value as u16;
        if self.is_unicode() && utf16::is_high_surrogate(lead) {
            if let Some(code_point) = self.try_scan_result(|lexer| lexer.scan_trail_escape(lead))? {
                return Ok(code_point);
            }
        }
        Ok(value)
    }

    /// A `\uXXXX` low surrogate escape completing `lead`.
    fn scan_trail_escape(&mut self, lead: u16) -> LexResult<Option<u32>> {
        if !self.consuming_look_ahead("\\u") || self.look_ahead("{") {
            return Ok(None);
        }
        let trail = self.scan_hex(4, 4, 0xFFFF, &messages::INVALID_UNICODE_ESCAPE)?;
        Ok(trail
            .map(|trail| trail as u16)
            .filter(|&trail| utf16::is_low_surrogate(trail))
            .map(|trail| utf16::to_code_point(lead, trail)))
    }

    /// In unicode mode, pair a high surrogate with an immediately following low one.
    fn finish_surrogate_pair(&mut self, lead: u16) -> u32 {
        match self.current() {
            Some(trail) if utf16::is_low_surrogate(trail) => {
                self.advance();
                utf16::to_code_point(lead, trail)
            }
            _ => {
                tracing::debug!(index = self.index - 1, "unpaired high surrogate");
                u32::from(lead)
            }
        }
    }

    // ========================================================================
    // Character classes
    // ========================================================================

    fn scan_char_class(&mut self) -> LexResult<Token> {
        let invert = self.consuming_look_ahead("^");
        let mut set = CodePointSet::new();
        while let Some(c) = self.consume() {
            if c == CLOSE_BRACKET {
                return Ok(self.char_class(set, invert));
            }
            self.scan_class_atom(c, &mut set)?;
        }
        Err(self.syntax_error(&messages::UNMATCHED_LEFT_BRACKET, &[]))
    }

    fn scan_class_atom(&mut self, c: u16, set: &mut CodePointSet) -> LexResult<()> {
        let lo = match c {
            BACKSLASH => {
                let Some(escaped) = self.consume() else {
                    return Err(self.syntax_error(&messages::ENDS_WITH_UNFINISHED_ESCAPE_SEQUENCE, &[]));
                };
                if self.is_class_escape(escaped) {
                    set.add_set(&self.scan_class_escape(escaped)?);
                    // A class escape on the left of `-` is tolerated only in legacy mode.
                    if self.is_unicode() && self.look_ahead("-") && !self.look_ahead("-]") {
                        return Err(self.syntax_error(&messages::INVALID_CHARACTER_CLASS, &[]));
                    }
                    return Ok(());
                }
                self.scan_escape_char(escaped, true)?
            }
            _ if self.is_unicode() && utf16::is_high_surrogate(c) => self.finish_surrogate_pair(c),
            _ => u32::from(c),
        };

        if !self.consuming_look_ahead("-") {
            set.add_code_point(lo);
            return Ok(());
        }
        if self.at_end() || self.look_ahead("]") {
            set.add_code_point(lo);
            set.add_code_point(u32::from(MINUS));
            return Ok(());
        }

        let hi = match self.consume() {
            Some(BACKSLASH) => {
                let Some(escaped) = self.consume() else {
                    return Err(self.syntax_error(&messages::ENDS_WITH_UNFINISHED_ESCAPE_SEQUENCE, &[]));
                };
                if self.is_class_escape(escaped) {
                    if self.is_unicode() {
                        return Err(self.syntax_error(&messages::INVALID_CHARACTER_CLASS, &[]));
                    }
                    tracing::debug!("class escape as a range bound, lexing '-' as a literal");
                    set.add_code_point(lo);
                    set.add_code_point(u32::from(MINUS));
                    set.add_set(&self.scan_class_escape(escaped)?);
                    return Ok(());
                }
                self.scan_escape_char(escaped, true)?
            }
            Some(unit) if self.is_unicode() && utf16::is_high_surrogate(unit) => {
                self.finish_surrogate_pair(unit)
            }
            Some(unit) => u32::from(unit),
            None => return Err(self.syntax_error(&messages::UNMATCHED_LEFT_BRACKET, &[])),
        };
        if hi < lo {
            return Err(self.syntax_error(&messages::CHAR_CLASS_RANGE_OUT_OF_ORDER, &[]));
        }
        set.add_range(CodePointRange::new(lo, hi));
        Ok(())
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    /// Scan a decimal number, or `None` if no digit follows.
    fn scan_decimal(&mut self) -> Option<u32> {
        if !self.current_is(is_decimal_digit) {
            return None;
        }
        Some(self.scan_decimal_from(0))
    }

    /// Continue a decimal number whose leading digits evaluated to `value`.
    /// Saturates at `u32::MAX`.
    fn scan_decimal_from(&mut self, mut value: u32) -> u32 {
        while let Some(unit) = self.current().filter(|&unit| is_decimal_digit(unit)) {
            self.advance();
            value = value
                .saturating_mul(10)
                .saturating_add(u32::from(unit - _0));
        }
        value
    }

    /// Up to two more octal digits after `first`, keeping the value within 0..=255.
    fn scan_octal(&mut self, first: u32) -> u32 {
        let mut value = first;
        for _ in 0..2 {
            let Some(unit) = self.current().filter(|&unit| is_octal_digit(unit)) else {
                break;
            };
            if value * 8 > 255 {
                break;
            }
            self.advance();
            value = value * 8 + u32::from(unit - _0);
        }
        value
    }

    /// Scan between `min_digits` and `max_digits` hex digits.
    ///
    /// With too few digits this is an error in unicode mode and `None`
    /// otherwise, and nothing is consumed. A value above `max_value` is an
    /// error in both modes.
    fn scan_hex(
        &mut self,
        min_digits: usize,
        max_digits: usize,
        max_value: u32,
        message: &DiagnosticMessage,
    ) -> LexResult<Option<u32>> {
        let (pattern, start) = (self.pattern, self.index);
        let digits = || {
            pattern[start..]
                .iter()
                .take(max_digits)
                .map_while(|&unit| hex_digit_value(unit))
        };
        if digits().count() < min_digits {
            if self.is_unicode() {
                return Err(self.syntax_error(message, &[]));
            }
            return Ok(None);
        }
        let mut value: u32 = 0;
        for digit in digits() {
            self.advance();
            value = value * 16 + digit;
            if value > max_value {
                return Err(self.syntax_error(message, &[]));
            }
        }
        Ok(Some(value))
    }
}

impl Iterator for RegexLexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.has_next() {
            return None;
        }
        let result = self.next_token();
        self.failed = result.is_err();
        Some(result)
    }
}

impl std::iter::FusedIterator for RegexLexer<'_> {}

fn to_pos(index: usize) -> TextPos {
    TextPos::try_from(index).unwrap_or(TextPos::MAX)
}
