use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::models::outline::build_outline;
use crate::models::presentation::{PresentationData, StoryField, is_blank};
use crate::models::stories::filled_beats;
use crate::session::PresentationStore;
use crate::session::state::load_presentation;
use crate::templates_structs::{OutputTemplate, PageContext, StoryCard, StoryDetail, outline_sections};

fn audience_line(data: &PresentationData) -> String {
    data.audience
        .filled()
        .into_iter()
        .map(|(field, value)| format!("{}: {value}", field.label()))
        .collect::<Vec<_>>()
        .join(" | ")
}

const UNTITLED: &str = "Your Presentation";

fn non_blank(items: &[String]) -> Vec<String> {
    items.iter().filter(|s| !is_blank(s)).cloned().collect()
}

pub fn build_output(ctx: PageContext, data: &PresentationData) -> OutputTemplate {
    let outline = build_outline(data);
    let stories = data
        .stories
        .iter()
        .map(|s| StoryCard {
            heading: format!("{} - Placement: {}", s.name, s.placement),
            scene: s.field(StoryField::Scene).to_string(),
            problem: s.field(StoryField::Problem).to_string(),
            insight: s.field(StoryField::Insight).to_string(),
        })
        .collect();
    let story_details = data
        .stories
        .iter()
        .map(|s| StoryDetail {
            heading: format!("{} - Placement: {}", s.name, s.placement),
            beats: filled_beats(s).into_iter().map(str::to_string).collect(),
        })
        .collect();

    OutputTemplate {
        ctx,
        title: if is_blank(&data.title) { UNTITLED.to_string() } else { data.title.clone() },
        big_idea: data.big_idea.clone(),
        core4: non_blank(&data.core4),
        audience_line: audience_line(data),
        situation_line: format!(
            "Time: {} | Setting: {}",
            data.situation.time, data.situation.setting
        ),
        sections: outline_sections(&outline),
        stories,
        story_details,
        high_tech: non_blank(&data.multimedia.high_tech),
        low_tech: non_blank(&data.multimedia.low_tech),
    }
}

/// GET /output
pub async fn show(store: web::Data<PresentationStore>, session: Session) -> Result<HttpResponse, AppError> {
    let data = load_presentation(&session, &store);
    let ctx = PageContext::build(&session);
    render(build_output(ctx, &data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::presentation::{AudienceField, Story};

    fn ctx() -> PageContext {
        PageContext { app_name: String::new(), csrf_token: String::new(), flash: None }
    }

    #[test]
    fn foundation_lines() {
        let mut data = PresentationData::default();
        data.set_audience(AudienceField::Age, "30s");
        data.set_audience(AudienceField::JobTitle, "Engineers");
        data.situation.time = "20 minutes".into();
        data.core4 = ["Bold".into(), " ".into(), "".into(), "Kind".into()];

        let out = build_output(ctx(), &data);
        assert_eq!(out.audience_line, "Age Range: 30s | Job Title/Role: Engineers");
        assert_eq!(out.situation_line, "Time: 20 minutes | Setting: ");
        assert_eq!(out.core4, vec!["Bold".to_string(), "Kind".to_string()]);
    }

    #[test]
    fn title_falls_back_when_blank() {
        let mut data = PresentationData::default();
        assert_eq!(build_output(ctx(), &data).title, "Your Presentation");
        data.title = "  ".into();
        assert_eq!(build_output(ctx(), &data).title, "Your Presentation");
        data.title = "Quarterly Review".into();
        assert_eq!(build_output(ctx(), &data).title, "Quarterly Review");
    }

    #[test]
    fn stories_and_details() {
        let mut data = PresentationData::default();
        data.stories.push(Story {
            name: "Bridge".into(),
            placement: "Opening".into(),
            scene: "River".into(),
            insight: "Trust".into(),
            ..Default::default()
        });
        let out = build_output(ctx(), &data);
        assert_eq!(out.stories[0].heading, "Bridge - Placement: Opening");
        assert_eq!(out.story_details[0].beats, vec!["River".to_string(), "Trust".to_string()]);
        assert!(out.high_tech.is_empty());
    }
}
