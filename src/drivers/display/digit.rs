//! 12x16 double-height digit font.
//!
//! Each glyph covers two pages. Bytes are interleaved per column: the even
//! byte is the lower page, the odd byte the upper page.

/// Glyph width in pixel columns
pub const DIGIT_WIDTH: u8 = 12;

/// First character covered by the table
pub const DIGIT_OFFSET: u8 = b',';

/// Digit glyphs for `,` `-` `.` `/` `0`-`9` `:`
pub static DIGITS: [[u8; 2 * DIGIT_WIDTH as usize]; 15] = [
    // ','
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xB8, 0x00, 0xF8, 0x00,
        0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '-'
    [
        0x00, 0x00, 0x00, 0x00, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80,
        0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x00, 0x00, 0x00, 0x00,
    ],
    // '.'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0x00, 0x38, 0x00,
        0x38, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '/'
    [
        0x00, 0x00, 0x18, 0x00, 0x1C, 0x00, 0x0E, 0x00, 0x07, 0x00, 0x03, 0x80,
        0x01, 0xC0, 0x00, 0xE0, 0x00, 0x70, 0x00, 0x38, 0x00, 0x1C, 0x00, 0x0E,
    ],
    // '0'
    [
        0x00, 0x00, 0x07, 0xF8, 0x1F, 0xFE, 0x1E, 0x06, 0x33, 0x03, 0x31, 0x83,
        0x30, 0xC3, 0x30, 0x63, 0x30, 0x33, 0x18, 0x1E, 0x1F, 0xFE, 0x07, 0xF8,
    ],
    // '1'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x0C, 0x30, 0x0C, 0x30, 0x0E,
        0x3F, 0xFF, 0x3F, 0xFF, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x00, 0x00,
    ],
    // '2'
    [
        0x00, 0x00, 0x30, 0x1C, 0x38, 0x1E, 0x3C, 0x07, 0x3E, 0x03, 0x37, 0x03,
        0x33, 0x83, 0x31, 0xC3, 0x30, 0xE3, 0x30, 0x77, 0x30, 0x3E, 0x30, 0x1C,
    ],
    // '3'
    [
        0x00, 0x00, 0x0C, 0x0C, 0x1C, 0x0E, 0x38, 0x07, 0x30, 0xC3, 0x30, 0xC3,
        0x30, 0xC3, 0x30, 0xC3, 0x30, 0xC3, 0x39, 0xE7, 0x1F, 0x7E, 0x0E, 0x3C,
    ],
    // '4'
    [
        0x00, 0x00, 0x03, 0xC0, 0x03, 0xE0, 0x03, 0x70, 0x03, 0x38, 0x03, 0x1C,
        0x03, 0x0E, 0x03, 0x07, 0x3F, 0xFF, 0x3F, 0xFF, 0x03, 0x00, 0x03, 0x00,
    ],
    // '5'
    [
        0x00, 0x00, 0x0C, 0x3F, 0x1C, 0x7F, 0x38, 0x63, 0x30, 0x63, 0x30, 0x63,
        0x30, 0x63, 0x30, 0x63, 0x30, 0x63, 0x38, 0xE3, 0x1F, 0xC3, 0x0F, 0x83,
    ],
    // '6'
    [
        0x00, 0x00, 0x0F, 0xC0, 0x1F, 0xF0, 0x39, 0xF8, 0x30, 0xDC, 0x30, 0xCE,
        0x30, 0xC7, 0x30, 0xC3, 0x30, 0xC3, 0x39, 0xC3, 0x1F, 0x80, 0x0F, 0x00,
    ],
    // '7'
    [
        0x00, 0x00, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x30, 0x03, 0x3C, 0x03,
        0x0F, 0x03, 0x03, 0xC3, 0x00, 0xF3, 0x00, 0x3F, 0x00, 0x0F, 0x00, 0x03,
    ],
    // '8'
    [
        0x00, 0x00, 0x0F, 0x00, 0x1F, 0xBC, 0x39, 0xFE, 0x30, 0xE7, 0x30, 0xC3,
        0x30, 0xC3, 0x30, 0xC3, 0x30, 0xE7, 0x39, 0xFE, 0x1F, 0xBC, 0x0F, 0x00,
    ],
    // '9'
    [
        0x00, 0x00, 0x00, 0x3C, 0x00, 0x7E, 0x30, 0xE7, 0x30, 0xC3, 0x30, 0xC3,
        0x38, 0xC3, 0x1C, 0xC3, 0x0E, 0xC3, 0x07, 0xE7, 0x03, 0xFE, 0x00, 0xFC,
    ],
    // ':'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x70, 0x1C, 0x70,
        0x1C, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
];

/// Glyph index for an ASCII character, as used by the digit-string program
#[inline]
pub fn index(c: u8) -> u8 {
    c.wrapping_sub(DIGIT_OFFSET)
}

/// Byte of `column` in the upper (`upper == true`) or lower page of glyph `index`.
///
/// Indices past the table render blank.
pub fn column(index: u8, column: u8, upper: bool) -> u8 {
    DIGITS
        .get(index as usize)
        .and_then(|glyph| glyph.get(2 * column as usize + upper as usize))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_ascii_digits() {
        assert_eq!(index(b','), 0);
        assert_eq!(index(b'0'), 4);
        assert_eq!(index(b'9'), 13);
        assert_eq!(index(b':'), 14);
    }

    #[test]
    fn one_has_a_full_height_stem() {
        let one = index(b'1');
        assert_eq!(column(one, 6, true), 0xFF);
        assert_eq!(column(one, 6, false), 0x3F);
    }

    #[test]
    fn out_of_range_is_blank() {
        assert_eq!(column(15, 0, true), 0);
        assert_eq!(column(index(b'A'), 3, false), 0);
        assert_eq!(column(0, DIGIT_WIDTH, false), 0);
    }
}
