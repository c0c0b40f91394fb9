//! Greedy word wrapping for the notes footer.

use super::metrics::text_width;
use crate::elements::Font;

/// Wrap `text` to `max_width` points when set in `font` at `size`.
///
/// Breaks happen only at whitespace; a word is never split mid-character,
/// so a single word wider than `max_width` gets a line of its own and
/// overflows. Explicit newlines are hard breaks; an empty segment between
/// two of them is preserved as an empty line. Empty input wraps to nothing.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for segment in text.split('\n') {
        let mut words = segment.split_whitespace();
        let Some(first) = words.next() else {
            lines.push(String::new());
            continue;
        };

        let mut line = first.to_string();
        for word in words {
            let mut candidate = line.clone();
            candidate.push(' ');
            candidate.push_str(word);
            if text_width(&candidate, font, size) <= max_width {
                line = candidate;
            } else {
                lines.push(line);
                line = word.to_string();
            }
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 10.0;

    #[test]
    fn test_short_text_stays_on_one_line() {
        let lines = wrap_text("Fasting required", Font::Helvetica, SIZE, 412.0);
        assert_eq!(lines, vec!["Fasting required"]);
    }

    #[test]
    fn test_empty_text_wraps_to_nothing() {
        assert!(wrap_text("", Font::Helvetica, SIZE, 412.0).is_empty());
    }

    #[test]
    fn test_lines_never_exceed_width() {
        let text = "Patient must fast for twelve hours before the blood draw and \
                    bring previous laboratory results if any are available";
        let max_width = 150.0;
        let lines = wrap_text(text, Font::Helvetica, SIZE, max_width);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                text_width(line, Font::Helvetica, SIZE) <= max_width,
                "line too wide: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_rejoining_preserves_word_order() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let lines = wrap_text(text, Font::Helvetica, SIZE, 80.0);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_explicit_newlines_are_hard_breaks() {
        let lines = wrap_text("first\n\nsecond", Font::Helvetica, SIZE, 412.0);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_overlong_word_gets_its_own_line() {
        let lines = wrap_text(
            "ok pneumonoultramicroscopicsilicovolcanoconiosis ok",
            Font::Helvetica,
            SIZE,
            60.0,
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ok");
        assert_eq!(lines[2], "ok");
    }
}
