//! Fixed-capacity text for the string programs

use heapless::Vec;

use super::font::FONT_WIDTH;
use crate::config::DISPLAY_COLUMNS;

/// Characters that fit on one text row
pub const TEXT_CAPACITY: usize = (DISPLAY_COLUMNS / FONT_WIDTH) as usize;

/// Byte string without terminator, at most one row long.
///
/// Implements [`ufmt::uWrite`] so numbers can be formatted straight into it:
///
/// ```
/// use oscale_firmware::drivers::display::Text;
///
/// let mut text = Text::new();
/// ufmt::uwrite!(text, "{}.{}", 123u16, 4u8).unwrap();
/// assert_eq!(text.as_bytes(), b"123.4");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text(Vec<u8, TEXT_CAPACITY>);

impl Text {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Copy `bytes` up to the first NUL; returns `false` if it had to truncate
    pub fn set(&mut self, bytes: &[u8]) -> bool {
        self.0.clear();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let fits = end.min(TEXT_CAPACITY);
        // Cannot fail: `fits` is within capacity
        let _ = self.0.extend_from_slice(&bytes[..fits]);
        fits == end
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ufmt::uWrite for Text {
    type Error = ();

    fn write_str(&mut self, s: &str) -> Result<(), ()> {
        self.0.extend_from_slice(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_stops_at_nul() {
        let mut text = Text::new();
        assert!(text.set(b"ab\0cd"));
        assert_eq!(text.as_bytes(), b"ab");
    }

    #[test]
    fn set_truncates_to_one_row() {
        let mut text = Text::new();
        assert!(!text.set(&[b'x'; TEXT_CAPACITY + 4]));
        assert_eq!(text.len(), TEXT_CAPACITY);
    }

    #[test]
    fn formats_with_ufmt() {
        let mut text = Text::new();
        ufmt::uwrite!(text, "{}:{}", 12u8, 5u8).unwrap();
        assert_eq!(text.as_bytes(), b"12:5");
    }

    #[test]
    fn overflowing_write_fails() {
        let mut text = Text::new();
        assert!(ufmt::uwrite!(text, "{}", "0123456789012345678901234").is_err());
    }
}
