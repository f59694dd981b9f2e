//! One view per wizard step. Each builds its template from the snapshot; the form it
//! renders posts back to `/wizard/{index}`, where `apply::apply_step` reads it.

use askama::Template;

use crate::models::outline::{build_outline, Outline};
use crate::models::presentation::{
    AudienceField, MediaKind, OutlineSlot, Placement, PresentationData, StoryField, is_blank,
    SETTING_OPTIONS, SUB_POINT_COUNT,
};
use crate::models::steps::Step;
use crate::templates_structs::{
    AudienceTemplate, BigIdeaTemplate, Core4Template, KeyPointsTemplate, MediaEntry, MediaList,
    MediaSummary, MultimediaTemplate, ObjectivesTemplate, OpenCloseTemplate, OutlineReviewTemplate,
    PageContext, ReviewSection, SelectOption, SituationTemplate, StoriesTemplate, StoryEditor,
    SubPointGroup, SubPointsTemplate, TextField, WizardFrame, outline_sections,
};

pub fn render_step(step: Step, ctx: PageContext, data: &PresentationData) -> askama::Result<String> {
    let frame = WizardFrame::build(step, data);
    match step {
        Step::Objectives => objectives(ctx, frame, data).render(),
        Step::Core4 => core4(ctx, frame, data).render(),
        Step::Audience => audience(ctx, frame, data).render(),
        Step::Situation => situation(ctx, frame, data).render(),
        Step::BigIdea => big_idea(ctx, frame, data).render(),
        Step::KeyPoints => key_points(ctx, frame, data).render(),
        Step::SubPoints => sub_points(ctx, frame, data).render(),
        Step::Stories => stories(ctx, frame, data).render(),
        Step::OpenClose => open_close(ctx, frame, data).render(),
        Step::Outline => outline_review(ctx, frame, data).render(),
        Step::Multimedia => multimedia(ctx, frame, data).render(),
    }
}

fn objectives(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> ObjectivesTemplate {
    let fields = vec![
        TextField::input("title", "Presentation Title", &data.title, "Enter your presentation title"),
        TextField::textarea("objective_0", "Objective 1", &data.objectives[0], "What do you want to achieve?"),
        TextField::textarea(
            "objective_1",
            "Objective 2 (Optional)",
            &data.objectives[1],
            "Secondary objective (if any)",
        ),
    ];
    ObjectivesTemplate { ctx, frame, fields }
}

fn core4(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> Core4Template {
    let fields = data
        .core4
        .iter()
        .enumerate()
        .map(|(i, v)| {
            TextField::input(
                format!("core_{i}"),
                format!("Core Value {}", i + 1),
                v,
                format!("Enter core value {}", i + 1),
            )
        })
        .collect();
    Core4Template { ctx, frame, fields }
}

fn audience(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> AudienceTemplate {
    let fields = AudienceField::ALL
        .iter()
        .map(|&f| {
            let value = data.audience.get(f);
            if f == AudienceField::Other {
                TextField::textarea(f.key(), f.label(), value, f.placeholder())
            } else {
                TextField::input(f.key(), f.label(), value, f.placeholder())
            }
        })
        .collect();
    AudienceTemplate { ctx, frame, fields }
}

fn situation(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> SituationTemplate {
    SituationTemplate {
        ctx,
        frame,
        time: TextField::input(
            "time",
            "How much time do you have for the presentation?",
            &data.situation.time,
            "e.g., 30 minutes, 1 hour, 2 hours",
        ),
        settings: SelectOption::list(
            "Select a setting",
            SETTING_OPTIONS.iter().map(|s| s.to_string()),
            &data.situation.setting,
        ),
    }
}

fn big_idea(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> BigIdeaTemplate {
    BigIdeaTemplate {
        ctx,
        frame,
        field: TextField::textarea(
            "big_idea",
            "My Big Idea",
            &data.big_idea,
            "Example: Presentations don't have to suck. They can be enjoyable for everyone.",
        ),
        missing: is_blank(&data.big_idea),
    }
}

fn key_points(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> KeyPointsTemplate {
    let fields = data
        .key_points
        .iter()
        .enumerate()
        .map(|(i, v)| {
            TextField::textarea(
                format!("key_point_{i}"),
                format!("Key Point {}", i + 1),
                v,
                format!("Enter key point {}", i + 1),
            )
        })
        .collect();
    KeyPointsTemplate { ctx, frame, fields }
}

/// Editors are keyed by the key point's array index, which is where the values are stored.
fn sub_points(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> SubPointsTemplate {
    let groups = data
        .key_points
        .iter()
        .enumerate()
        .filter(|(_, kp)| !is_blank(kp))
        .map(|(k, kp)| {
            let stored = data.sub_points_for(k);
            let fields = (0..SUB_POINT_COUNT)
                .map(|s| {
                    TextField::textarea(
                        format!("sub_point_{k}_{s}"),
                        format!("Sub Point {}", s + 1),
                        stored.get(s).map(String::as_str).unwrap_or(""),
                        format!("Supporting detail {}", s + 1),
                    )
                })
                .collect();
            SubPointGroup { key_point: kp.clone(), fields }
        })
        .collect();
    SubPointsTemplate { ctx, frame, groups }
}

fn stories(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> StoriesTemplate {
    let placement_values: Vec<String> = Placement::options().iter().map(ToString::to_string).collect();
    let stories = data
        .stories
        .iter()
        .enumerate()
        .map(|(i, story)| {
            let field_name = |f: StoryField| format!("story_{i}_{}", f.key());
            let name = TextField::input(
                field_name(StoryField::Name),
                StoryField::Name.prompt(),
                &story.name,
                StoryField::Name.placeholder(),
            );
            let beats = StoryField::NARRATIVE
                .iter()
                .map(|&f| TextField::textarea(field_name(f), f.prompt(), story.field(f), f.placeholder()))
                .collect();
            StoryEditor {
                index: i,
                number: i + 1,
                name,
                beats,
                placement_name: field_name(StoryField::Placement),
                placements: SelectOption::list(
                    StoryField::Placement.placeholder(),
                    placement_values.iter().cloned(),
                    &story.placement,
                ),
            }
        })
        .collect();
    StoriesTemplate { ctx, frame, stories }
}

fn open_close(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> OpenCloseTemplate {
    OpenCloseTemplate {
        ctx,
        frame,
        open: TextField::textarea(
            "open",
            "Opening",
            &data.open,
            "How will you open your presentation to establish the right tone?",
        ),
        closing: vec![
            TextField::textarea(
                "recap",
                "1. Recap the Big Idea",
                &data.close.recap,
                "Restate your big idea in a memorable way",
            ),
            TextField::textarea(
                "call_to_action",
                "2. Call to Action",
                &data.close.call_to_action,
                "What specific action do you want your audience to take?",
            ),
            TextField::textarea(
                "drop_mic",
                "3. Drop the Mic",
                &data.close.drop_mic,
                "Your powerful closing statement",
            ),
        ],
    }
}

fn media_field(data: &PresentationData, slot: OutlineSlot, kind: MediaKind) -> TextField {
    let key = slot.key();
    let value = data.media_note(&key).map(|n| n.get(kind)).unwrap_or("");
    let placeholder = format!("{} elements for {}", kind.label(), slot.label().to_lowercase());
    TextField::textarea(format!("media_{key}_{}", kind.key()), kind.label(), value, placeholder)
}

fn outline_review(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> OutlineReviewTemplate {
    let outline = build_outline(data);
    let sections = outline_sections(&outline)
        .into_iter()
        .zip(outline.slots())
        .map(|(section, slot)| ReviewSection {
            heading: section.heading,
            lines: section.lines,
            stories: section.stories,
            nested: section.nested,
            slot_label: slot.label(),
            high: media_field(data, slot, MediaKind::High),
            low: media_field(data, slot, MediaKind::Low),
        })
        .collect();
    OutlineReviewTemplate { ctx, frame, sections }
}

/// Non-empty notes of one kind, in outline order.
pub fn media_entries(outline: &Outline, data: &PresentationData, kind: MediaKind) -> Vec<MediaEntry> {
    outline
        .slots()
        .into_iter()
        .filter_map(|slot| {
            let text = data.media_note(&slot.key())?.get(kind);
            (!text.is_empty()).then(|| MediaEntry {
                label: slot.label(),
                text: text.to_string(),
                nested: slot.is_sub_point(),
            })
        })
        .collect()
}

fn multimedia(ctx: PageContext, frame: WizardFrame, data: &PresentationData) -> MultimediaTemplate {
    let outline = build_outline(data);
    let summaries = MediaKind::ALL
        .iter()
        .map(|&kind| MediaSummary {
            heading: kind.label(),
            empty_message: format!(
                "No {} multimedia items specified in your outline.",
                kind.label().to_lowercase()
            ),
            entries: media_entries(&outline, data, kind),
        })
        .collect();
    let lists = MediaKind::ALL
        .iter()
        .map(|&kind| MediaList {
            kind: kind.key(),
            heading: kind.label(),
            items: data
                .multimedia
                .items(kind)
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    TextField::input(
                        format!("{}_tech_{i}", kind.key()),
                        format!("Item {}", i + 1),
                        v,
                        format!("{} element", kind.label()),
                    )
                })
                .collect(),
        })
        .collect();
    MultimediaTemplate { ctx, frame, summaries, lists }
}
