//! Plain-text story exports.

use crate::models::presentation::{Story, StoryField};

const STORY_SEPARATOR: &str = "---\n\n";

/// Every story with its placement and all eight beats, labelled.
pub fn summary_export(stories: &[Story]) -> String {
    stories
        .iter()
        .enumerate()
        .map(|(i, story)| {
            let mut block = format!("Story {} - Placement: {}\n\n", i + 1, story.placement);
            for field in StoryField::NARRATIVE {
                block.push_str(field.summary_label());
                block.push_str(": ");
                block.push_str(story.field(field));
                block.push('\n');
            }
            block.push('\n');
            block
        })
        .collect::<Vec<_>>()
        .join(STORY_SEPARATOR)
}

/// Every story by name and placement, followed by its non-empty beats without labels.
pub fn detail_export(stories: &[Story]) -> String {
    stories
        .iter()
        .map(|story| {
            let mut block = format!("{} - Placement: {}\n\n", story.name, story.placement);
            for text in filled_beats(story) {
                block.push_str(text);
                block.push_str("\n\n");
            }
            block
        })
        .collect::<Vec<_>>()
        .join(STORY_SEPARATOR)
}

/// Non-empty narrative beats in telling order.
pub fn filled_beats(story: &Story) -> Vec<&str> {
    StoryField::NARRATIVE
        .iter()
        .map(|&f| story.field(f))
        .filter(|text| !text.is_empty())
        .collect()
}
