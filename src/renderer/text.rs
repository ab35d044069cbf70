//! Text layout helpers

/// Approximate glyph width as a fraction of the font size
pub const GLYPH_WIDTH_RATIO: f32 = 0.45;

/// Characters that fit in `max_width` pixels at `font_size`
pub fn chars_per_line(max_width: f32, font_size: f32) -> usize {
    ((max_width / (font_size * GLYPH_WIDTH_RATIO)).floor() as usize).max(1)
}

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Words longer than a line get a line of their own.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
