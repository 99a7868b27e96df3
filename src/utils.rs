use ratatui::text::Text;
use unicode_width::UnicodeWidthChar;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Estimate how many terminal rows a text occupies when rendered with
/// wrapping at `max_width` columns.
pub fn estimate_text_height(text: &Text, max_width: usize) -> usize {
    if max_width == 0 {
        return text.lines.len();
    }

    let mut height = 0;
    for line in &text.lines {
        let mut current_width = 0;
        let mut rows = 1;
        for span in &line.spans {
            for ch in span.content.chars() {
                let char_width = ch.width().unwrap_or(1);
                if current_width + char_width > max_width && current_width > 0 {
                    rows += 1;
                    current_width = char_width;
                } else {
                    current_width += char_width;
                }
            }
        }
        height += rows;
    }
    height
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height.saturating_sub(visible_height) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn test_truncate_string_no_truncation() {
        let s = "Short string";
        let result = truncate_string(s, 20);
        assert_eq!(result, "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_string(s, 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_exact_length() {
        let s = "Exactly twenty!!";
        let result = truncate_string(s, 20);
        assert_eq!(result, "Exactly twenty!!");
    }

    #[test]
    fn test_truncate_string_empty() {
        let s = "";
        let result = truncate_string(s, 20);
        assert_eq!(result, "");
    }

    #[test]
    fn test_estimate_height_single_short_line() {
        let text = Text::from("hello");
        assert_eq!(estimate_text_height(&text, 10), 1);
    }

    #[test]
    fn test_estimate_height_wrapping_line() {
        let text = Text::from("0123456789abcde");
        assert_eq!(estimate_text_height(&text, 10), 2);
    }

    #[test]
    fn test_estimate_height_multiple_lines() {
        let mut text = Text::default();
        text.push_line(Line::from("one"));
        text.push_line(Line::from(""));
        text.push_line(Line::from("three"));
        assert_eq!(estimate_text_height(&text, 10), 3);
    }

    #[test]
    fn test_estimate_height_empty_text() {
        let text = Text::default();
        assert_eq!(estimate_text_height(&text, 10), 0);
    }

    #[test]
    fn test_calculate_max_scroll() {
        assert_eq!(calculate_max_scroll(10, 4), 6);
        assert_eq!(calculate_max_scroll(3, 10), 0);
        assert_eq!(calculate_max_scroll(5, 5), 0);
    }
}
