use askama::Template;

use crate::models::presentation::PresentationData;
use crate::models::steps::Step;
use super::{PageContext, SelectOption, TextField};

/// One entry in the progress bar.
pub struct ProgressItem {
    pub index: usize,
    pub title: &'static str,
    pub complete: bool,
    pub current: bool,
}

/// Header, progress bar, and navigation shared by every step view.
pub struct WizardFrame {
    pub index: usize,
    pub number: usize,
    pub total: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub progress: Vec<ProgressItem>,
    pub has_previous: bool,
    pub next_label: &'static str,
    pub can_advance: bool,
}

impl WizardFrame {
    pub fn build(step: Step, data: &PresentationData) -> Self {
        let progress = Step::ALL
            .iter()
            .map(|&s| ProgressItem {
                index: s.index(),
                title: s.title(),
                complete: s.is_complete(data),
                current: s == step,
            })
            .collect();
        Self {
            index: step.index(),
            number: step.index() + 1,
            total: Step::COUNT,
            title: step.title(),
            description: step.description(),
            progress,
            has_previous: step.previous().is_some(),
            next_label: if step.is_last() { "Generate Presentation" } else { "Next" },
            can_advance: step.can_advance(data),
        }
    }
}

#[derive(Template)]
#[template(path = "wizard/objectives.html")]
pub struct ObjectivesTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub fields: Vec<TextField>,
}

#[derive(Template)]
#[template(path = "wizard/core4.html")]
pub struct Core4Template {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub fields: Vec<TextField>,
}

#[derive(Template)]
#[template(path = "wizard/audience.html")]
pub struct AudienceTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub fields: Vec<TextField>,
}

#[derive(Template)]
#[template(path = "wizard/situation.html")]
pub struct SituationTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub time: TextField,
    pub settings: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "wizard/big_idea.html")]
pub struct BigIdeaTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub field: TextField,
    pub missing: bool,
}

#[derive(Template)]
#[template(path = "wizard/key_points.html")]
pub struct KeyPointsTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub fields: Vec<TextField>,
}

/// Sub point inputs under one non-blank key point.
pub struct SubPointGroup {
    pub key_point: String,
    pub fields: Vec<TextField>,
}

#[derive(Template)]
#[template(path = "wizard/sub_points.html")]
pub struct SubPointsTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub groups: Vec<SubPointGroup>,
}

pub struct StoryEditor {
    pub index: usize,
    pub number: usize,
    pub name: TextField,
    pub beats: Vec<TextField>,
    pub placement_name: String,
    pub placements: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "wizard/stories.html")]
pub struct StoriesTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub stories: Vec<StoryEditor>,
}

#[derive(Template)]
#[template(path = "wizard/open_close.html")]
pub struct OpenCloseTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub open: TextField,
    pub closing: Vec<TextField>,
}

/// One outline block on the review step, with its multimedia note fields.
pub struct ReviewSection {
    pub heading: String,
    pub lines: Vec<String>,
    pub stories: Vec<String>,
    pub nested: bool,
    pub slot_label: String,
    pub high: TextField,
    pub low: TextField,
}

#[derive(Template)]
#[template(path = "wizard/outline.html")]
pub struct OutlineReviewTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub sections: Vec<ReviewSection>,
}

pub struct MediaEntry {
    pub label: String,
    pub text: String,
    pub nested: bool,
}

/// Notes of one kind gathered from every outline slot.
pub struct MediaSummary {
    pub heading: &'static str,
    pub empty_message: String,
    pub entries: Vec<MediaEntry>,
}

/// Editable general multimedia list.
pub struct MediaList {
    pub kind: &'static str,
    pub heading: &'static str,
    pub items: Vec<TextField>,
}

#[derive(Template)]
#[template(path = "wizard/multimedia.html")]
pub struct MultimediaTemplate {
    pub ctx: PageContext,
    pub frame: WizardFrame,
    pub summaries: Vec<MediaSummary>,
    pub lists: Vec<MediaList>,
}
