use std::fmt;

use crate::error::{Error, Result};

/// 8-bit RGB color. Renders as lowercase `#rrggbb`; that convention is used
/// everywhere inside the crate, conversion from bare hex happens at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Accepts `#rrggbb` or bare `rrggbb`, any case. LLM replies are not
    /// trustworthy about the leading marker.
    pub fn from_hex(s: &str) -> Result<Color> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(Error::MalformedAdviceText(format!(
                "expected 6 hex digits in color {s:?}"
            )));
        }
        let v = u32::from_str_radix(digits, 16)
            .map_err(|_| Error::MalformedAdviceText(format!("bad hex color {s:?}")))?;

        Ok(Color {
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_with_marker() {
        assert_eq!(Color::new(0xff, 0x0a, 0xb3).hex(), "#ff0ab3");
        assert_eq!(Color::new(0, 0, 0).hex(), "#000000");
    }

    #[test]
    fn test_from_hex_accepts_both_forms() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::from_hex("00FF00").unwrap(), Color::new(0, 255, 0));
        assert_eq!(Color::from_hex("#C39E8e").unwrap(), Color::new(0xc3, 0x9e, 0x8e));
    }

    #[test]
    fn test_from_hex_rejects_junk() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("zzzzzz").is_err());
        assert!(Color::from_hex("#ff00000").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let c = Color::new(0xdf, 0xb8, 0xaa);
        assert_eq!(Color::from_hex(&c.to_string()).unwrap(), c);
    }
}
