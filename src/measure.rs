//! Content and content measurement.
//!
//! The layout engine needs the natural size of whatever the host renders inside
//! the balloon. Hosts with a real text engine implement [`TextMeasure`]; the
//! [`ProportionalMeasure`] default estimates the size from character widths.

use crate::render::defaults;
use crate::types::Size;

/// Tooltip content as declared by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    /// HTML-like markup; tags are not rendered, `<br>` breaks lines
    Markup(String),
}

impl Content {
    pub fn text(s: impl Into<String>) -> Self {
        Content::Text(s.into())
    }

    pub fn markup(s: impl Into<String>) -> Self {
        Content::Markup(s.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(s) | Content::Markup(s) => s.trim().is_empty(),
        }
    }

    /// Visible text with explicit line breaks resolved
    pub fn visible_text(&self) -> String {
        match self {
            Content::Text(s) => s.clone(),
            Content::Markup(s) => strip_markup(s),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

/// Measures content the way the host will render it.
pub trait TextMeasure {
    /// Natural size of `content` when lines may be at most `max_width` wide.
    fn measure(&self, content: &Content, max_width: f64) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&Content, f64) -> Size,
{
    fn measure(&self, content: &Content, max_width: f64) -> Size {
        self(content, max_width)
    }
}

/// Proportional character widths in hundredths of an average glyph.
#[rustfmt::skip]
const CHAR_WIDTHS: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Average glyph advance as a fraction of the font size
const AVERAGE_ADVANCE: f64 = 0.6;

/// Character-table estimate of rendered text size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalMeasure {
    pub font_size: f64,
    pub padding: f64,
    /// Line height as a multiple of the font size
    pub line_height: f64,
    pub uppercase: bool,
}

impl Default for ProportionalMeasure {
    fn default() -> Self {
        Self {
            font_size: defaults::FONT_SIZE,
            padding: defaults::PADDING,
            line_height: defaults::LINE_HEIGHT,
            uppercase: true,
        }
    }
}

impl ProportionalMeasure {
    /// Width of one line of text in pixels, without padding
    pub fn text_width(&self, text: &str) -> f64 {
        let hundredths: u32 = text
            .chars()
            .map(|c| {
                let c = if self.uppercase { c.to_ascii_uppercase() } else { c };
                if (' '..='~').contains(&c) {
                    u32::from(CHAR_WIDTHS[c as usize - 0x20])
                } else {
                    100
                }
            })
            .sum();
        f64::from(hundredths) * 0.01 * AVERAGE_ADVANCE * self.font_size
    }

    /// Greedy word wrap at `available` pixels. Words wider than a line stay whole.
    fn wrap(&self, text: &str, available: f64) -> Vec<String> {
        let mut lines = Vec::new();
        for hard_line in text.lines() {
            let mut current = String::new();
            for word in hard_line.split_whitespace() {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                if !current.is_empty() && self.text_width(&candidate) > available {
                    lines.push(std::mem::replace(&mut current, word.to_string()));
                } else {
                    current = candidate;
                }
            }
            lines.push(current);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }
}

impl TextMeasure for ProportionalMeasure {
    fn measure(&self, content: &Content, max_width: f64) -> Size {
        let text = content.visible_text();
        let available = (max_width - 2.0 * self.padding).max(0.0);
        let lines = self.wrap(&text, available);
        let widest = lines
            .iter()
            .map(|l| self.text_width(l))
            .fold(0.0_f64, f64::max);
        let line_px = self.font_size * self.line_height;
        Size::new(
            widest + 2.0 * self.padding,
            lines.len() as f64 * line_px + 2.0 * self.padding,
        )
    }
}

/// Drop tags, turn `<br>` into newlines and decode the common entities.
fn strip_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find(['<', '&']) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        if rest.starts_with('<') {
            let Some(end) = rest.find('>') else {
                // Unterminated tag: keep it as text
                out.push_str(rest);
                return out;
            };
            let name = rest[1..end].trim().trim_end_matches('/').trim();
            if name.eq_ignore_ascii_case("br") {
                out.push('\n');
            }
            rest = &rest[end + 1..];
        } else {
            let decoded = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>'), ("&nbsp;", ' '), ("&quot;", '"')]
                .into_iter()
                .find(|(entity, _)| rest.starts_with(entity));
            match decoded {
                Some((entity, ch)) => {
                    out.push(ch);
                    rest = &rest[entity.len()..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
        }
    }
    out.push_str(rest);
    out
}
