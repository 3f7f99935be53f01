use crate::config::ChartConfig;

use super::TextBlock;

/// Wrap and measure a label. Width is estimated from character count —
/// good enough for layout since the renderer draws at the same estimate.
pub(super) fn measure_label(text: &str, config: &ChartConfig) -> TextBlock {
    let lines = wrap_line(text, config.wrap_chars);
    let max_chars = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = max_chars as f32 * config.char_width;
    let height = lines.len() as f32 * config.line_height;
    TextBlock {
        lines,
        width,
        height,
    }
}

/// Word-atomic wrapping: a line never splits a word, so a single word
/// longer than the threshold gets a line of its own. Empty input still
/// produces one (empty) line.
pub(super) fn wrap_line(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        if current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
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
