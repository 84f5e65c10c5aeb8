// src/notes/formatter.rs
//! Turns free-form note text into an ordered block sequence.
//!
//! Paragraphs are blank-line-delimited. A paragraph opening with a bullet
//! marker becomes a run of list items, one opening with `#` becomes a
//! heading, anything else a plain paragraph. The first block is always a
//! synthetic timestamp heading.

use crate::constants::{NOTE_ATTRIBUTION, TIMESTAMP_DISPLAY_FORMAT};
use crate::model::{Block, HeadingLevel};
use chrono::NaiveDateTime;

/// Bullet markers recognized at the start of a list paragraph or line.
const BULLET_MARKERS: [&str; 2] = ["- ", "* "];

fn starts_with_bullet(text: &str) -> bool {
    BULLET_MARKERS.iter().any(|marker| text.starts_with(marker))
}

/// Formats note text into blocks ready for the append-children endpoint.
///
/// Total over any input: the worst case is a single timestamp heading. The
/// timestamp comes from the caller, keeping this a pure function.
pub fn note_blocks(notes: &str, generated_at: NaiveDateTime) -> Vec<Block> {
    let mut blocks = vec![Block::heading(
        HeadingLevel::H3,
        format!(
            "Created by {} - {}",
            NOTE_ATTRIBUTION,
            generated_at.format(TIMESTAMP_DISPLAY_FORMAT)
        ),
    )];

    for paragraph in notes.trim().split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        if starts_with_bullet(paragraph) {
            for line in paragraph.lines() {
                let line = line.trim();
                // Lines without a bullet marker inside a list paragraph
                // are dropped.
                if starts_with_bullet(line) {
                    blocks.push(Block::bullet(&line[2..]));
                }
            }
        } else if paragraph.starts_with('#') {
            let marker_count = paragraph.chars().take_while(|&c| c == '#').count();
            blocks.push(Block::heading(
                HeadingLevel::clamp(marker_count),
                paragraph.trim_matches('#').trim(),
            ));
        } else {
            blocks.push(Block::paragraph(paragraph));
        }
    }

    blocks
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

    fn timestamp_heading() -> Block {
        Block::heading(
            HeadingLevel::H3,
            "Created by notion-scribe - 2025-06-01 12:30",
        )
    }

    #[test]
    fn empty_input_yields_only_timestamp_heading() {
        assert_eq!(note_blocks("", at_noon()), vec![timestamp_heading()]);
    }

    #[test]
    fn first_block_is_always_the_timestamp_heading() {
        for input in ["", "plain", "# heading", "- bullet"] {
            assert_eq!(note_blocks(input, at_noon())[0], timestamp_heading());
        }
    }

    #[test]
    fn single_heading_paragraph() {
        assert_eq!(
            note_blocks("# Title", at_noon()),
            vec![
                timestamp_heading(),
                Block::heading(HeadingLevel::H1, "Title"),
            ]
        );
    }

    #[test]
    fn heading_level_counts_markers() {
        let blocks = note_blocks("## Sub", at_noon());
        assert_eq!(blocks[1], Block::heading(HeadingLevel::H2, "Sub"));

        let blocks = note_blocks("### Sub", at_noon());
        assert_eq!(blocks[1], Block::heading(HeadingLevel::H3, "Sub"));
    }

    #[test]
    fn heading_level_is_clamped_at_three() {
        let blocks = note_blocks("##### Deep", at_noon());
        assert_eq!(blocks[1], Block::heading(HeadingLevel::H3, "Deep"));
    }

    #[test]
    fn trailing_hash_markers_are_stripped() {
        let blocks = note_blocks("## Title ##", at_noon());
        assert_eq!(blocks[1], Block::heading(HeadingLevel::H2, "Title"));
    }

    #[test]
    fn list_paragraph_emits_one_item_per_bullet_line() {
        assert_eq!(
            note_blocks("- a\n- b", at_noon()),
            vec![
                timestamp_heading(),
                Block::bullet("a"),
                Block::bullet("b"),
            ]
        );
    }

    #[test]
    fn star_bullets_are_accepted() {
        let blocks = note_blocks("* first\n* second", at_noon());
        assert_eq!(blocks[1], Block::bullet("first"));
        assert_eq!(blocks[2], Block::bullet("second"));
    }

    #[test]
    fn non_bullet_lines_inside_list_paragraph_are_dropped() {
        let blocks = note_blocks("- kept\nloose line\n- also kept", at_noon());
        assert_eq!(
            blocks,
            vec![
                timestamp_heading(),
                Block::bullet("kept"),
                Block::bullet("also kept"),
            ]
        );
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        assert_eq!(
            note_blocks("Para one\n\nPara two", at_noon()),
            vec![
                timestamp_heading(),
                Block::paragraph("Para one"),
                Block::paragraph("Para two"),
            ]
        );
    }

    #[test]
    fn blank_paragraphs_produce_nothing() {
        let blocks = note_blocks("one\n\n   \n\ntwo", at_noon());
        assert_eq!(
            blocks,
            vec![
                timestamp_heading(),
                Block::paragraph("one"),
                Block::paragraph("two"),
            ]
        );
    }

    #[test]
    fn classification_is_order_preserving() {
        let blocks = note_blocks("# Plan\n\n- a\n- b\n\nClosing thoughts", at_noon());
        assert_eq!(
            blocks,
            vec![
                timestamp_heading(),
                Block::heading(HeadingLevel::H1, "Plan"),
                Block::bullet("a"),
                Block::bullet("b"),
                Block::paragraph("Closing thoughts"),
            ]
        );

        let reordered = note_blocks("Closing thoughts\n\n# Plan\n\n- a\n- b", at_noon());
        assert_eq!(
            reordered,
            vec![
                timestamp_heading(),
                Block::paragraph("Closing thoughts"),
                Block::heading(HeadingLevel::H1, "Plan"),
                Block::bullet("a"),
                Block::bullet("b"),
            ]
        );
    }

    #[test]
    fn bullet_text_keeps_spacing_after_marker() {
        // Only the two marker characters are removed, matching the original
        // prefix-stripping behavior.
        let blocks = note_blocks("-  double spaced", at_noon());
        assert_eq!(blocks[1], Block::bullet(" double spaced"));
    }
}
