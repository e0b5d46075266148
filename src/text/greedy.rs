//! # Reference Shaper
//!
//! A greedy line breaker over UAX#14 break opportunities with uniform
//! advance metrics: every character is `advance_ratio × font_size` wide.
//! That is enough to exercise wrapping, alignment, and pagination without
//! any font data; a production backend substitutes a shaper with real
//! metrics behind the same trait.

use unicode_linebreak::{linebreaks, BreakOpportunity};

use super::{ShapedBlock, ShapedLine, TextAlign, TextShaper, TextStyle};

/// Greedy UAX#14 shaper with uniform advance metrics.
#[derive(Debug, Clone)]
pub struct GreedyShaper {
    advance_ratio: f64,
}

impl Default for GreedyShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyShaper {
    pub fn new() -> Self {
        Self { advance_ratio: 0.5 }
    }

    /// Override the per-character advance as a fraction of the font size.
    pub fn with_advance_ratio(ratio: f64) -> Self {
        Self {
            advance_ratio: ratio,
        }
    }
}

impl TextShaper for GreedyShaper {
    fn shape(
        &self,
        text: &str,
        max_width: u32,
        style: &TextStyle,
        align: TextAlign,
    ) -> ShapedBlock {
        let advance = self.advance_ratio * style.font_size;
        let line_step = style.line_height * style.font_size;
        let max_w = f64::from(max_width);

        let lines = break_lines(text, advance, max_w);

        let shaped: Vec<ShapedLine> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let trimmed = line.trim_end();
                let width = trimmed.chars().count() as f64 * advance;
                let x = match align {
                    TextAlign::Left => 0.0,
                    TextAlign::Center => ((max_w - width) / 2.0).max(0.0),
                    TextAlign::Right => (max_w - width).max(0.0),
                };
                ShapedLine {
                    text: trimmed.to_string(),
                    x,
                    y: i as f64 * line_step,
                    width,
                }
            })
            .collect();

        let height = (shaped.len() as f64 * line_step).ceil() as u32;

        ShapedBlock {
            lines: shaped,
            height,
            style: style.clone(),
        }
    }
}

/// Greedy assembly of break segments into lines of at most `max_w` width.
fn break_lines(text: &str, advance: f64, max_w: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_w = 0.0;

    for (segment, mandatory) in segments(text) {
        // Trailing whitespace hangs past the wrap edge, so the fit test
        // ignores it while the consumed width keeps it.
        let fit_w = segment.trim_end().chars().count() as f64 * advance;
        let full_w = segment.chars().count() as f64 * advance;

        if !current.is_empty() && current_w + fit_w > max_w {
            lines.push(std::mem::take(&mut current));
            current_w = 0.0;
        }

        if current.is_empty() && fit_w > max_w {
            // A single segment wider than the wrap width is split hard,
            // at least one character per line.
            let per_line = ((max_w / advance).floor() as usize).max(1);
            let chars: Vec<char> = segment.chars().collect();
            let mut start = 0;
            while chars.len() - start > per_line {
                lines.push(chars[start..start + per_line].iter().collect());
                start += per_line;
            }
            current = chars[start..].iter().collect();
            current_w = (chars.len() - start) as f64 * advance;
        } else {
            current.push_str(segment);
            current_w += full_w;
        }

        if mandatory {
            lines.push(std::mem::take(&mut current));
            current_w = 0.0;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split `text` at UAX#14 opportunities. Each segment carries whether a
/// mandatory break follows it.
fn segments(text: &str) -> Vec<(&str, bool)> {
    let mut result = Vec::new();
    let mut start = 0;
    for (offset, opportunity) in linebreaks(text) {
        // The final mandatory break at end-of-text is not a line break of
        // its own; the flush after the loop handles the last line.
        if offset == text.len() {
            result.push((&text[start..], false));
        } else {
            result.push((
                &text[start..offset],
                opportunity == BreakOpportunity::Mandatory,
            ));
        }
        start = offset;
    }
    if start < text.len() {
        result.push((&text[start..], false));
    }
    result
}
