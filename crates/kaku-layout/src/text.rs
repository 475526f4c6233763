use kaku_core::Romanizer;

use crate::canvas::{Canvas, FontSpec};

pub const MIN_FONT_SIZE: f32 = 6.0;

const ELLIPSIS: char = '…';

/// Text shown for an empty reading list
pub const NO_READINGS: &str = "none";

/// Upper-case the first character and lower-case the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Meanings as shown in the header row
pub fn meaning_text(meanings: &[String]) -> String {
    meanings
        .iter()
        .map(|m| capitalize(m))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lines drawn inside a reading cell
pub fn reading_lines(
    readings: &[String],
    show_romaji: bool,
    romanizer: &dyn Romanizer,
) -> Vec<String> {
    if readings.is_empty() {
        return vec![NO_READINGS.to_string()];
    }

    let mut lines = vec![readings.join(", ")];
    if show_romaji {
        lines.push(romanizer.romanize_all(readings).join(", "));
    }
    lines
}

/// Shrink `font` until `text` fits in `width`, stopping at [`MIN_FONT_SIZE`]
pub fn fit_font<C: Canvas + ?Sized>(canvas: &C, text: &str, font: FontSpec, width: f32) -> FontSpec {
    let mut fitted = font;
    while fitted.size > MIN_FONT_SIZE && canvas.text_width(text, fitted) > width {
        fitted = fitted.with_size((fitted.size - 0.5).max(MIN_FONT_SIZE));
    }
    fitted
}

/// Cut `text` so it fits in `width`, marking the cut with an ellipsis
pub fn truncate_to_width<C: Canvas + ?Sized>(
    canvas: &C,
    text: &str,
    font: FontSpec,
    width: f32,
) -> String {
    if canvas.text_width(text, font) <= width {
        return text.to_string();
    }

    let mut kept: Vec<char> = text.chars().collect();
    while !kept.is_empty() {
        kept.pop();
        let candidate: String = kept.iter().chain(std::iter::once(&ELLIPSIS)).collect();
        if canvas.text_width(&candidate, font) <= width {
            return candidate;
        }
    }

    String::new()
}

/// Greedy word wrap; words wider than a line are split between characters
pub fn wrap_lines<C: Canvas + ?Sized>(canvas: &C, text: &str, font: FontSpec, width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if canvas.text_width(&candidate, font) <= width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if canvas.text_width(word, font) <= width {
            current = word.to_string();
        } else {
            for c in word.chars() {
                current.push(c);
                if canvas.text_width(&current, font) > width && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, c.to_string()));
                }
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wrap and keep at most `max_lines`, ellipsizing the last kept line
pub fn wrap_clamped<C: Canvas + ?Sized>(
    canvas: &C,
    text: &str,
    font: FontSpec,
    width: f32,
    max_lines: usize,
) -> Vec<String> {
    let mut lines = wrap_lines(canvas, text, font, width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let marked = format!("{last}{ELLIPSIS}");
        *last = truncate_to_width(canvas, &marked, font, width);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::recording::RecordingCanvas;
    use kaku_lang_japanese::JapaneseRomanizer;

    fn canvas() -> RecordingCanvas {
        RecordingCanvas::new(Size::new(210.0, 297.0))
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sun"), "Sun");
        assert_eq!(capitalize("JAPAN"), "Japan");
        assert_eq!(capitalize(""), "");
        assert_eq!(meaning_text(&["day".into(), "japan".into()]), "Day, Japan");
    }

    #[test]
    fn test_empty_readings_render_none() {
        let lines = reading_lines(&[], true, &JapaneseRomanizer);
        assert_eq!(lines, vec!["none"]);
    }

    #[test]
    fn test_readings_native_then_romaji() {
        let readings = vec!["ニチ".to_string(), "ジツ".to_string()];
        let lines = reading_lines(&readings, true, &JapaneseRomanizer);
        assert_eq!(lines, vec!["ニチ, ジツ", "nichi, jitsu"]);
    }

    #[test]
    fn test_readings_without_romaji() {
        let readings = vec!["ひ".to_string()];
        let lines = reading_lines(&readings, false, &JapaneseRomanizer);
        assert_eq!(lines, vec!["ひ"]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let c = canvas();
        let font = FontSpec::bold(12.0);
        let text = "Going, Journey, Carry Out, Conduct, Act, Line, Row";
        let width = c.text_width("Going, Journey,", font);

        let lines = wrap_lines(&c, text, font, width);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(c.text_width(line, font) <= width + 1e-3, "{line} too wide");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_clamped_marks_cut() {
        let c = canvas();
        let font = FontSpec::regular(12.0);
        let width = c.text_width("aaaa bbbb", font);

        let lines = wrap_clamped(&c, "aaaa bbbb cccc dddd eeee ffff", font, width, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
    }

    #[test]
    fn test_fit_font_shrinks_but_not_below_min() {
        let c = canvas();
        let font = FontSpec::bold(12.0);
        let long = "x".repeat(400);

        let fitted = fit_font(&c, &long, font, 20.0);
        assert_eq!(fitted.size, MIN_FONT_SIZE);

        let short = fit_font(&c, "ok", font, 20.0);
        assert_eq!(short.size, 12.0);
    }

    #[test]
    fn test_truncate_to_width() {
        let c = canvas();
        let font = FontSpec::regular(8.0);
        let width = c.text_width("abcdef", font);

        assert_eq!(truncate_to_width(&c, "abc", font, width), "abc");
        let cut = truncate_to_width(&c, "abcdefghijkl", font, width);
        assert!(cut.ends_with('…'));
        assert!(c.text_width(&cut, font) <= width);
    }
}
