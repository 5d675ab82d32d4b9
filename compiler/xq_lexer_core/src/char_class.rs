//! XML 1.0 (fifth edition) character classes over code points.
//!
//! The lexer asks these questions on every code point, so ASCII is
//! answered by a 128-entry table and only non-ASCII falls through to the
//! range checks. Colons are excluded from the name classes: the lexer
//! scans NCNames and reports `:` as a separate token.

const WHITESPACE: u8 = 1 << 0;
const NAME_START: u8 = 1 << 1;
const NAME: u8 = 1 << 2;
const DIGIT: u8 = 1 << 3;
const HEX_DIGIT: u8 = 1 << 4;

/// Class bits for the ASCII range. Built at compile time.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=127, always fits in u8"
)]
static ASCII_CLASSES: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut i = 0usize;
    while i < 128 {
        let b = i as u8;
        let mut bits = 0;
        if matches!(b, b' ' | b'\t' | b'\r' | b'\n') {
            bits |= WHITESPACE;
        }
        if matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_') {
            bits |= NAME_START | NAME;
        }
        if matches!(b, b'-' | b'.') {
            bits |= NAME;
        }
        if b.is_ascii_digit() {
            bits |= NAME | DIGIT | HEX_DIGIT;
        }
        if matches!(b, b'a'..=b'f' | b'A'..=b'F') {
            bits |= HEX_DIGIT;
        }
        table[i] = bits;
        i += 1;
    }
    table
};

#[inline]
fn ascii_has(cp: u32, bit: u8) -> Option<bool> {
    if cp < 128 {
        Some(ASCII_CLASSES[cp as usize] & bit != 0)
    } else {
        None
    }
}

/// XML `S`: space, tab, carriage return, line feed.
#[inline]
pub fn is_whitespace(cp: u32) -> bool {
    ascii_has(cp, WHITESPACE).unwrap_or(false)
}

/// ASCII `0`-`9`.
#[inline]
pub fn is_digit(cp: u32) -> bool {
    ascii_has(cp, DIGIT).unwrap_or(false)
}

/// ASCII hexadecimal digit.
#[inline]
pub fn is_hex_digit(cp: u32) -> bool {
    ascii_has(cp, HEX_DIGIT).unwrap_or(false)
}

/// XML `NameStartChar` without `:`.
#[inline]
pub fn is_name_start_char(cp: u32) -> bool {
    ascii_has(cp, NAME_START).unwrap_or_else(|| is_non_ascii_name_start(cp))
}

/// XML `NameChar` without `:`.
#[inline]
pub fn is_name_char(cp: u32) -> bool {
    ascii_has(cp, NAME).unwrap_or_else(|| {
        is_non_ascii_name_start(cp)
            || cp == 0xB7
            || (0x0300..=0x036F).contains(&cp)
            || (0x203F..=0x2040).contains(&cp)
    })
}

fn is_non_ascii_name_start(cp: u32) -> bool {
    matches!(
        cp,
        0xC0..=0xD6
            | 0xD8..=0xF6
            | 0xF8..=0x2FF
            | 0x370..=0x37D
            | 0x37F..=0x1FFF
            | 0x200C..=0x200D
            | 0x2070..=0x218F
            | 0x2C00..=0x2FEF
            | 0x3001..=0xD7FF
            | 0xF900..=0xFDCF
            | 0xFDF0..=0xFFFD
            | 0x10000..=0xEFFFF
    )
}

#[cfg(test)]
mod tests;
