//! Outline generation.
//!
//! `build_outline` walks a `PresentationData` snapshot once and produces a structured
//! `Outline`. The text export, the print page and the review screens all serialize that
//! same structure, so their ordering cannot drift apart.

pub mod text;

use crate::models::presentation::{is_blank, Placement, PresentationData, OutlineSlot};

pub use text::{outline_text, render_text};

pub const TITLE_PLACEHOLDER: &str = "[Add your title]";
pub const OPEN_PLACEHOLDER: &str = "[Add your opening]";
pub const RECAP_PLACEHOLDER: &str = "[Add recap]";
pub const CALL_TO_ACTION_PLACEHOLDER: &str = "[Add call to action]";
pub const DROP_MIC_PLACEHOLDER: &str = "[Add final statement]";

#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub title: String,
    pub open: String,
    pub opening_stories: Vec<String>,
    pub key_points: Vec<KeyPointNode>,
    pub recap: String,
    pub call_to_action: String,
    pub drop_mic: String,
    pub closing_stories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyPointNode {
    /// 1-based position among non-blank key points.
    pub number: usize,
    pub text: String,
    pub slot: OutlineSlot,
    pub stories: Vec<String>,
    pub sub_points: Vec<SubPointNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubPointNode {
    /// 1-based position among non-blank sub points of the parent.
    pub number: usize,
    pub text: String,
    pub slot: OutlineSlot,
    pub stories: Vec<String>,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Names of stories placed at `target`, in story order.
fn stories_at(data: &PresentationData, target: Placement) -> Vec<String> {
    data.stories
        .iter()
        .filter(|s| s.placement() == Some(target))
        .map(|s| s.name.clone())
        .collect()
}

/// Build the nested outline for a snapshot.
///
/// Blank key points and sub points are dropped before numbering. Sub points for the
/// `n`th rendered key point are read from index `n - 1` of `sub_points`.
pub fn build_outline(data: &PresentationData) -> Outline {
    let key_points = data
        .key_points
        .iter()
        .filter(|kp| !is_blank(kp))
        .enumerate()
        .map(|(i, text)| {
            let n = i + 1;
            let sub_points = data
                .sub_points_for(i)
                .iter()
                .filter(|sp| !is_blank(sp))
                .enumerate()
                .map(|(j, sp)| {
                    let m = j + 1;
                    SubPointNode {
                        number: m,
                        text: sp.clone(),
                        slot: OutlineSlot::SubPoint(n, m),
                        stories: stories_at(data, Placement::SubPoint(n, m)),
                    }
                })
                .collect();
            KeyPointNode {
                number: n,
                text: text.clone(),
                slot: OutlineSlot::KeyPoint(n),
                stories: stories_at(data, Placement::KeyPoint(n)),
                sub_points,
            }
        })
        .collect();

    Outline {
        title: or_placeholder(&data.title, TITLE_PLACEHOLDER),
        open: or_placeholder(&data.open, OPEN_PLACEHOLDER),
        opening_stories: stories_at(data, Placement::Opening),
        key_points,
        recap: or_placeholder(&data.close.recap, RECAP_PLACEHOLDER),
        call_to_action: or_placeholder(&data.close.call_to_action, CALL_TO_ACTION_PLACEHOLDER),
        drop_mic: or_placeholder(&data.close.drop_mic, DROP_MIC_PLACEHOLDER),
        closing_stories: stories_at(data, Placement::Closing),
    }
}

impl Outline {
    /// Every slot in render order, for attaching multimedia notes.
    pub fn slots(&self) -> Vec<OutlineSlot> {
        let mut out = vec![OutlineSlot::Open];
        for kp in &self.key_points {
            out.push(kp.slot);
            out.extend(kp.sub_points.iter().map(|sp| sp.slot));
        }
        out.push(OutlineSlot::QA);
        out.push(OutlineSlot::Close);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::presentation::Story;

    fn story(name: &str, placement: &str) -> Story {
        Story {
            name: name.into(),
            placement: placement.into(),
            ..Default::default()
        }
    }

    #[test]
    fn numbering_is_dense_over_non_blank_key_points() {
        let mut data = PresentationData::default();
        data.key_points = ["".into(), "B".into(), "C".into()];
        let outline = build_outline(&data);
        let numbered: Vec<(usize, &str)> = outline
            .key_points
            .iter()
            .map(|kp| (kp.number, kp.text.as_str()))
            .collect();
        assert_eq!(numbered, vec![(1, "B"), (2, "C")]);
        assert_eq!(outline.key_points[1].slot, OutlineSlot::KeyPoint(2));
    }

    #[test]
    fn whitespace_only_entries_are_skipped() {
        let mut data = PresentationData::default();
        data.key_points = ["  ".into(), "Real".into(), "\t\n".into()];
        data.sub_points.insert(0, vec![" ".into(), "Fact".into(), "".into()]);
        let outline = build_outline(&data);
        assert_eq!(outline.key_points.len(), 1);
        assert_eq!(outline.key_points[0].sub_points.len(), 1);
        assert_eq!(outline.key_points[0].sub_points[0].number, 1);
        assert_eq!(outline.key_points[0].sub_points[0].text, "Fact");
    }

    #[test]
    fn sub_point_story_only_under_its_slot() {
        let mut data = PresentationData::default();
        data.key_points = ["One".into(), "Two".into(), "".into()];
        data.sub_points.insert(1, vec!["Alpha".into(), "Beta".into(), "".into()]);
        data.stories = vec![story("Nested", "Key Point 2 - Sub Point 1")];
        let outline = build_outline(&data);

        assert!(outline.opening_stories.is_empty());
        assert!(outline.closing_stories.is_empty());
        assert!(outline.key_points[0].stories.is_empty());
        assert!(outline.key_points[1].stories.is_empty());
        assert_eq!(outline.key_points[1].sub_points[0].stories, vec!["Nested".to_string()]);
        assert!(outline.key_points[1].sub_points[1].stories.is_empty());
    }

    #[test]
    fn unplaced_and_unknown_stories_are_dropped() {
        let mut data = PresentationData::default();
        data.key_points = ["One".into(), "".into(), "".into()];
        data.stories = vec![story("Loose", ""), story("Typo", "Key point 1"), story("Far", "Key Point 3")];
        let outline = build_outline(&data);
        assert!(outline.opening_stories.is_empty());
        assert!(outline.closing_stories.is_empty());
        assert!(outline.key_points.iter().all(|kp| kp.stories.is_empty()));
    }

    #[test]
    fn stories_keep_array_order() {
        let mut data = PresentationData::default();
        data.stories = vec![story("First", "Opening"), story("Middle", "Closing"), story("Second", "Opening")];
        let outline = build_outline(&data);
        assert_eq!(outline.opening_stories, vec!["First".to_string(), "Second".to_string()]);
        assert_eq!(outline.closing_stories, vec!["Middle".to_string()]);
    }

    #[test]
    fn placeholders_fill_empty_fields() {
        let outline = build_outline(&PresentationData::default());
        assert_eq!(outline.title, TITLE_PLACEHOLDER);
        assert_eq!(outline.open, OPEN_PLACEHOLDER);
        assert_eq!(outline.recap, RECAP_PLACEHOLDER);
        assert_eq!(outline.call_to_action, CALL_TO_ACTION_PLACEHOLDER);
        assert_eq!(outline.drop_mic, DROP_MIC_PLACEHOLDER);
        assert!(outline.key_points.is_empty());
    }

    #[test]
    fn sub_points_follow_render_position() {
        // The second rendered key point reads sub point index 1, whatever its array index.
        let mut data = PresentationData::default();
        data.key_points = ["Trust".into(), "".into(), "Clarity".into()];
        data.sub_points.insert(1, vec!["Shown".into(), "".into(), "".into()]);
        data.sub_points.insert(2, vec!["Hidden".into(), "".into(), "".into()]);
        let outline = build_outline(&data);
        assert_eq!(outline.key_points[1].text, "Clarity");
        assert_eq!(outline.key_points[1].sub_points[0].text, "Shown");
    }

    #[test]
    fn slots_in_render_order() {
        let mut data = PresentationData::default();
        data.key_points = ["A".into(), "B".into(), "".into()];
        data.sub_points.insert(0, vec!["a1".into(), "".into(), "a3".into()]);
        let slots: Vec<String> = build_outline(&data).slots().iter().map(|s| s.key()).collect();
        assert_eq!(slots, vec!["open", "kp1", "kp1sp1", "kp1sp2", "kp2", "qa", "close"]);
    }

    #[test]
    fn building_does_not_mutate_and_is_repeatable() {
        let mut data = PresentationData::default();
        data.title = "Talk".into();
        data.key_points = ["X".into(), "".into(), "Y".into()];
        data.stories = vec![story("S", "Key Point 1")];
        let before = data.clone();
        let first = build_outline(&data);
        let second = build_outline(&data);
        assert_eq!(first, second);
        assert_eq!(data, before);
    }
}
