//! UTF-16 code unit constants and classification helpers used by the lexer.

pub const NULL_CHARACTER: u16 = 0x00;
pub const BACKSPACE: u16 = 0x08;
pub const TAB: u16 = 0x09;
pub const LINE_FEED: u16 = 0x0A;
pub const VERTICAL_TAB: u16 = 0x0B;
pub const FORM_FEED: u16 = 0x0C;
pub const CARRIAGE_RETURN: u16 = 0x0D;

pub const DOLLAR_SIGN: u16 = b'$' as u16;
pub const OPEN_PAREN: u16 = b'(' as u16;
pub const CLOSE_PAREN: u16 = b')' as u16;
pub const ASTERISK: u16 = b'*' as u16;
pub const PLUS: u16 = b'+' as u16;
pub const MINUS: u16 = b'-' as u16;
pub const DOT: u16 = b'.' as u16;
pub const SLASH: u16 = b'/' as u16;
pub const _0: u16 = b'0' as u16;
pub const _7: u16 = b'7' as u16;
pub const _9: u16 = b'9' as u16;
pub const QUESTION: u16 = b'?' as u16;
pub const OPEN_BRACKET: u16 = b'[' as u16;
pub const BACKSLASH: u16 = b'\\' as u16;
pub const CLOSE_BRACKET: u16 = b']' as u16;
pub const CARET: u16 = b'^' as u16;
pub const UNDERSCORE: u16 = b'_' as u16;
pub const OPEN_BRACE: u16 = b'{' as u16;
pub const BAR: u16 = b'|' as u16;
pub const CLOSE_BRACE: u16 = b'}' as u16;

pub const A_UPPER: u16 = b'A' as u16;
pub const B_UPPER: u16 = b'B' as u16;
pub const F_UPPER: u16 = b'F' as u16;
pub const P_UPPER: u16 = b'P' as u16;
pub const Z_UPPER: u16 = b'Z' as u16;

pub const A_LOWER: u16 = b'a' as u16;
pub const B_LOWER: u16 = b'b' as u16;
pub const C_LOWER: u16 = b'c' as u16;
pub const F_LOWER: u16 = b'f' as u16;
pub const N_LOWER: u16 = b'n' as u16;
pub const P_LOWER: u16 = b'p' as u16;
pub const R_LOWER: u16 = b'r' as u16;
pub const T_LOWER: u16 = b't' as u16;
pub const U_LOWER: u16 = b'u' as u16;
pub const V_LOWER: u16 = b'v' as u16;
pub const X_LOWER: u16 = b'x' as u16;
pub const Z_LOWER: u16 = b'z' as u16;

#[inline]
pub fn is_decimal_digit(unit: u16) -> bool {
    (_0..=_9).contains(&unit)
}

#[inline]
pub fn is_octal_digit(unit: u16) -> bool {
    (_0..=_7).contains(&unit)
}

/// Value of a hex digit, or `None` if `unit` is not one.
#[inline]
pub fn hex_digit_value(unit: u16) -> Option<u32> {
    match unit {
        _0..=_9 => Some(u32::from(unit - _0)),
        A_UPPER..=F_UPPER => Some(u32::from(unit - A_UPPER) + 10),
        A_LOWER..=F_LOWER => Some(u32::from(unit - A_LOWER) + 10),
        _ => None,
    }
}

#[inline]
pub fn is_ascii_letter(unit: u16) -> bool {
    (A_UPPER..=Z_UPPER).contains(&unit) || (A_LOWER..=Z_LOWER).contains(&unit)
}

/// Characters that keep their literal meaning when escaped in unicode mode.
#[inline]
pub fn is_syntax_char(unit: u16) -> bool {
    matches!(
        unit,
        CARET
            | DOLLAR_SIGN
            | SLASH
            | BACKSLASH
            | DOT
            | ASTERISK
            | PLUS
            | QUESTION
            | OPEN_PAREN
            | CLOSE_PAREN
            | OPEN_BRACKET
            | CLOSE_BRACKET
            | OPEN_BRACE
            | CLOSE_BRACE
            | BAR
    )
}

/// The letters of `\s \S \d \D \w \W`.
#[inline]
pub fn is_predefined_class(unit: u16) -> bool {
    matches!(
        u8::try_from(unit),
        Ok(b's' | b'S' | b'd' | b'D' | b'w' | b'W')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_classes() {
        assert!(is_decimal_digit(b'9' as u16));
        assert!(!is_decimal_digit(b'a' as u16));
        assert!(is_octal_digit(b'7' as u16));
        assert!(!is_octal_digit(b'8' as u16));
    }

    #[test]
    fn test_hex_digit_value() {
        assert_eq!(hex_digit_value(b'0' as u16), Some(0));
        assert_eq!(hex_digit_value(b'a' as u16), Some(10));
        assert_eq!(hex_digit_value(b'F' as u16), Some(15));
        assert_eq!(hex_digit_value(b'g' as u16), None);
        assert_eq!(hex_digit_value(0xFF10), None);
    }

    #[test]
    fn test_syntax_and_class_letters() {
        assert!(is_syntax_char(b'/' as u16));
        assert!(!is_syntax_char(b'-' as u16));
        assert!(!is_syntax_char(b'a' as u16));
        assert!(is_predefined_class(b'W' as u16));
        assert!(!is_predefined_class(b'b' as u16));
        assert!(!is_predefined_class(0x0173));
    }
}
