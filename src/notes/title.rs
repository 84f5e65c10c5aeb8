// src/notes/title.rs
//! Quick-note title inference.

use crate::constants::{QUICK_TITLE_MAX_CHARS, QUICK_TITLE_SOURCE_LIMIT, TIMESTAMP_DISPLAY_FORMAT};
use chrono::NaiveDateTime;

/// Infers a page title from note content.
///
/// The first line of the trimmed content becomes the title when it looks
/// like one — non-empty and shorter than [`QUICK_TITLE_SOURCE_LIMIT`] chars —
/// truncated to [`QUICK_TITLE_MAX_CHARS`] with an ellipsis when longer.
/// Otherwise the title falls back to a timestamped `Quick Note`.
pub fn infer_title(content: &str, now: NaiveDateTime) -> String {
    let first_line = content.trim().lines().next().unwrap_or("");
    let length = first_line.chars().count();

    if length == 0 || length >= QUICK_TITLE_SOURCE_LIMIT {
        return format!("Quick Note - {}", now.format(TIMESTAMP_DISPLAY_FORMAT));
    }

    if length > QUICK_TITLE_MAX_CHARS {
        let truncated: String = first_line.chars().take(QUICK_TITLE_MAX_CHARS).collect();
        format!("{}...", truncated)
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn short_first_line_becomes_the_title() {
        assert_eq!(
            infer_title("Standup notes\nmore detail below", at_noon()),
            "Standup notes"
        );
    }

    #[test]
    fn long_first_line_is_truncated_with_ellipsis() {
        let line = "a".repeat(60);
        let title = infer_title(&line, at_noon());
        assert_eq!(title, format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let line = "é".repeat(60);
        let title = infer_title(&line, at_noon());
        assert_eq!(title.chars().count(), 53); // 50 chars + "..."
    }

    #[test]
    fn prose_length_first_line_falls_back_to_timestamp() {
        let line = "x".repeat(120);
        assert_eq!(
            infer_title(&line, at_noon()),
            "Quick Note - 2025-06-01 12:30"
        );
    }

    #[test]
    fn empty_content_falls_back_to_timestamp() {
        assert_eq!(
            infer_title("   \n  ", at_noon()),
            "Quick Note - 2025-06-01 12:30"
        );
    }

    #[test]
    fn exactly_fifty_chars_is_kept_whole() {
        let line = "b".repeat(50);
        assert_eq!(infer_title(&line, at_noon()), line);
    }
}
