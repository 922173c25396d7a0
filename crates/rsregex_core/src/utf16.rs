//! UTF-16 code unit helpers.

pub const MIN_HIGH_SURROGATE: u16 = 0xD800;
pub const MAX_HIGH_SURROGATE: u16 = 0xDBFF;
pub const MIN_LOW_SURROGATE: u16 = 0xDC00;
pub const MAX_LOW_SURROGATE: u16 = 0xDFFF;

/// Check if a code unit is the leading half of a surrogate pair.
#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    (MIN_HIGH_SURROGATE..=MAX_HIGH_SURROGATE).contains(&unit)
}

/// Check if a code unit is the trailing half of a surrogate pair.
#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    (MIN_LOW_SURROGATE..=MAX_LOW_SURROGATE).contains(&unit)
}

/// Combine a surrogate pair into one astral code point.
#[inline]
pub fn to_code_point(lead: u16, trail: u16) -> u32 {
    debug_assert!(is_high_surrogate(lead) && is_low_surrogate(trail));
    0x10000 + ((u32::from(lead - MIN_HIGH_SURROGATE)) << 10) + u32::from(trail - MIN_LOW_SURROGATE)
}

/// Encode a string as UTF-16 code units.
#[inline]
pub fn encode_utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Decode UTF-16 for display, replacing unpaired surrogates with U+FFFD.
#[inline]
pub fn decode_lossy(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}
