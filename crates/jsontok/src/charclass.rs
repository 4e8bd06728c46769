//! Byte classification flags, one table lookup per query.

/// Whitespace accepted between tokens.
pub(crate) const WHITESPACE: u8 = 1 << 0;
/// Bytes that terminate a decimal literal: whitespace plus `, : { } [ ]`.
pub(crate) const DELIM: u8 = 1 << 1;
/// Bytes that may appear inside a decimal literal.
pub(crate) const DECIMAL_BODY: u8 = 1 << 2;
/// Digits: the only bytes a decimal may legitimately end on.
pub(crate) const DECIMAL_DIGIT: u8 = 1 << 3;

static CLASS: [u8; 256] = build();

const fn mark(mut table: [u8; 256], bytes: &[u8], flag: u8) -> [u8; 256] {
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] |= flag;
        i += 1;
    }
    table
}

const fn build() -> [u8; 256] {
    let mut t = [0u8; 256];
    t = mark(t, b"\x08\x0C\n\t\r ", WHITESPACE);
    t = mark(t, b"\x08\x0C\n\t\r ,:{}[]", DELIM);
    t = mark(t, b"-0123456789+.eE", DECIMAL_BODY);
    t = mark(t, b"0123456789", DECIMAL_DIGIT);
    t
}

#[inline]
pub(crate) fn is(byte: u8, flag: u8) -> bool {
    CLASS[byte as usize] & flag != 0
}
