use std::sync::OnceLock;

use regex::Regex;

use crate::color::Color;
use crate::error::{Error, Result};

/// Advice replies carry exactly this many recommendation lines.
pub const PALETTE_LINES: usize = 5;

/// One parsed recommendation: `N. #rrggbb (name): explanation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceLine {
    pub color: Color,
    pub name: String,
    pub text: String,
}

// The grammar the upstream reply must follow: a 6-digit hex code, optional
// whitespace, a parenthesized color name, then the explanation.
fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"#([0-9a-fA-F]{6})\s*\(([^)]+)\)\s*[:\-]?\s*").expect("advice tag pattern")
    })
}

/// Parses an upstream reply into its five recommendation lines. Any drift
/// from the expected convention fails with `MalformedAdviceText` instead of
/// silently corrupting displayed swatches.
pub fn parse_advice(text: &str) -> Result<Vec<AdviceLine>> {
    let mut lines = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(caps) = tag_re().captures(line) else {
            continue;
        };

        let color = Color::from_hex(&caps[1])?;
        let name = caps[2].trim().to_string();
        let rest = caps.get(0).map_or(line.len(), |m| m.end());
        let text = line[rest..].trim().to_string();

        lines.push(AdviceLine { color, name, text });
    }

    if lines.len() != PALETTE_LINES {
        return Err(Error::MalformedAdviceText(format!(
            "expected {PALETTE_LINES} advice lines, found {}",
            lines.len()
        )));
    }

    Ok(lines)
}

/// Removes `#hex (name)` tags from display text, leaving the prose.
pub fn strip_color_tags(text: &str) -> String {
    tag_re().replace_all(text, "").into_owned()
}
