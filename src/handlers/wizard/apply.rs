//! Copy submitted step fields into the record through its setters.
//!
//! Only fields present in the form are touched, so a partial post leaves the rest of
//! the step untouched. Unknown or out-of-range field names are ignored.

use crate::handlers::forms::FormFields;
use crate::models::presentation::{
    AudienceField, CloseField, MediaKind, OutlineSlot, PresentationData, StoryField,
};
use crate::models::steps::Step;

pub fn apply_step(step: Step, data: &mut PresentationData, form: &FormFields) {
    match step {
        Step::Objectives => apply_objectives(data, form),
        Step::Core4 => apply_core4(data, form),
        Step::Audience => apply_audience(data, form),
        Step::Situation => apply_situation(data, form),
        Step::BigIdea => {
            if let Some(v) = form.get("big_idea") {
                data.set_big_idea(v);
            }
        }
        Step::KeyPoints => {
            for (i, v) in indexed(form, "key_point_") {
                data.set_key_point(i, v);
            }
        }
        Step::SubPoints => apply_sub_points(data, form),
        Step::Stories => apply_stories(data, form),
        Step::OpenClose => apply_open_close(data, form),
        Step::Outline => apply_slot_media(data, form),
        Step::Multimedia => apply_media_lists(data, form),
    }
}

/// `{prefix}{n}` fields as `(n, value)`.
fn indexed<'a>(form: &'a FormFields, prefix: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    form.with_prefix(prefix)
        .filter_map(|(rest, v)| rest.parse::<usize>().ok().map(|i| (i, v)))
}

fn apply_objectives(data: &mut PresentationData, form: &FormFields) {
    if let Some(v) = form.get("title") {
        data.set_title(v);
    }
    for (i, v) in indexed(form, "objective_") {
        data.set_objective(i, v);
    }
}

fn apply_core4(data: &mut PresentationData, form: &FormFields) {
    for (i, v) in indexed(form, "core_") {
        data.set_core_value(i, v);
    }
}

fn apply_audience(data: &mut PresentationData, form: &FormFields) {
    for field in AudienceField::ALL {
        if let Some(v) = form.get(field.key()) {
            data.set_audience(field, v);
        }
    }
}

fn apply_situation(data: &mut PresentationData, form: &FormFields) {
    if let Some(v) = form.get("time") {
        data.set_situation_time(v);
    }
    if let Some(v) = form.get("setting") {
        data.set_situation_setting(v);
    }
}

/// `sub_point_{kp}_{sp}`
fn apply_sub_points(data: &mut PresentationData, form: &FormFields) {
    for (rest, v) in form.with_prefix("sub_point_") {
        let Some((kp, sp)) = rest.split_once('_') else { continue };
        if let (Ok(kp), Ok(sp)) = (kp.parse::<usize>(), sp.parse::<usize>()) {
            data.set_sub_point(kp, sp, v);
        }
    }
}

/// `story_{index}_{field}`
fn apply_stories(data: &mut PresentationData, form: &FormFields) {
    for (rest, v) in form.with_prefix("story_") {
        let Some((index, key)) = rest.split_once('_') else { continue };
        let (Ok(index), Some(field)) = (index.parse::<usize>(), StoryField::from_key(key)) else {
            continue;
        };
        data.set_story_field(index, field, v);
    }
}

fn apply_open_close(data: &mut PresentationData, form: &FormFields) {
    if let Some(v) = form.get("open") {
        data.set_open(v);
    }
    let close_fields = [
        ("recap", CloseField::Recap),
        ("call_to_action", CloseField::CallToAction),
        ("drop_mic", CloseField::DropMic),
    ];
    for (name, field) in close_fields {
        if let Some(v) = form.get(name) {
            data.set_close(field, v);
        }
    }
}

/// `media_{slot key}_{high|low}`
fn apply_slot_media(data: &mut PresentationData, form: &FormFields) {
    for (rest, v) in form.with_prefix("media_") {
        let Some((key, kind)) = rest.rsplit_once('_') else { continue };
        let (Some(slot), Some(kind)) = (OutlineSlot::parse(key), MediaKind::from_key(kind)) else {
            continue;
        };
        data.set_slot_media(slot, kind, v);
    }
}

/// `high_tech_{i}` / `low_tech_{i}`
fn apply_media_lists(data: &mut PresentationData, form: &FormFields) {
    for (kind, prefix) in [(MediaKind::High, "high_tech_"), (MediaKind::Low, "low_tech_")] {
        for (i, v) in indexed(form, prefix) {
            data.set_media_item(kind, i, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(body: &str) -> FormFields {
        FormFields::parse(body).unwrap()
    }

    #[test]
    fn objectives_and_title() {
        let mut data = PresentationData::default();
        apply_step(Step::Objectives, &mut data, &form("title=Q3+Review&objective_0=Grow&objective_1=&objective_9=x"));
        assert_eq!(data.title, "Q3 Review");
        assert_eq!(data.objectives, ["Grow".to_string(), String::new()]);
    }

    #[test]
    fn absent_fields_are_left_alone() {
        let mut data = PresentationData::default();
        data.title = "Keep me".into();
        apply_step(Step::Objectives, &mut data, &form("objective_0=Only"));
        assert_eq!(data.title, "Keep me");
    }

    #[test]
    fn audience_by_key() {
        let mut data = PresentationData::default();
        apply_step(Step::Audience, &mut data, &form("age=30s&jobTitle=Engineers&unknown=1"));
        assert_eq!(data.audience.age, "30s");
        assert_eq!(data.audience.job_title, "Engineers");
    }

    #[test]
    fn sub_points_by_pair() {
        let mut data = PresentationData::default();
        apply_step(Step::SubPoints, &mut data, &form("sub_point_2_1=Stat&sub_point_x_1=bad&sub_point_0_5=far"));
        assert_eq!(data.sub_points_for(2), ["", "Stat", ""]);
        assert_eq!(data.sub_points_for(0), ["", "", ""]);
    }

    #[test]
    fn stories_by_index_and_field() {
        let mut data = PresentationData::default();
        data.add_story();
        apply_step(
            Step::Stories,
            &mut data,
            &form("story_0_name=Bridge&story_0_placement=Key+Point+1&story_0_moral=x&story_3_name=ghost"),
        );
        assert_eq!(data.stories.len(), 1);
        assert_eq!(data.stories[0].name, "Bridge");
        assert_eq!(data.stories[0].placement, "Key Point 1");
    }

    #[test]
    fn open_close_fields() {
        let mut data = PresentationData::default();
        apply_step(Step::OpenClose, &mut data, &form("open=Hi&recap=R&call_to_action=C&drop_mic=D"));
        assert_eq!(data.open, "Hi");
        assert_eq!(data.close.recap, "R");
        assert_eq!(data.close.call_to_action, "C");
        assert_eq!(data.close.drop_mic, "D");
    }

    #[test]
    fn slot_media_by_key() {
        let mut data = PresentationData::default();
        apply_step(
            Step::Outline,
            &mut data,
            &form("media_open_high=Video&media_kp1sp2_low=Handout&media_bogus_high=x&media_qa_mid=y"),
        );
        assert_eq!(data.media_note("open").unwrap().high_tech, "Video");
        assert_eq!(data.media_note("kp1sp2").unwrap().low_tech, "Handout");
        assert_eq!(data.outline_multimedia.len(), 2);
    }

    #[test]
    fn media_lists_by_index() {
        let mut data = PresentationData::default();
        apply_step(Step::Multimedia, &mut data, &form("high_tech_0=Slides&low_tech_0=Props&low_tech_4=x"));
        assert_eq!(data.multimedia.high_tech, vec!["Slides".to_string()]);
        assert_eq!(data.multimedia.low_tech, vec!["Props".to_string()]);
    }
}
