use askama::Template;

use super::{OutlineSection, PageContext};

/// Short story card for the "Your Stories" section.
pub struct StoryCard {
    pub heading: String,
    pub scene: String,
    pub problem: String,
    pub insight: String,
}

/// Full story with only the beats that were filled in.
pub struct StoryDetail {
    pub heading: String,
    pub beats: Vec<String>,
}

#[derive(Template)]
#[template(path = "output.html")]
pub struct OutputTemplate {
    pub ctx: PageContext,
    pub title: String,
    pub big_idea: String,
    pub core4: Vec<String>,
    pub audience_line: String,
    pub situation_line: String,
    pub sections: Vec<OutlineSection>,
    pub stories: Vec<StoryCard>,
    pub story_details: Vec<StoryDetail>,
    pub high_tech: Vec<String>,
    pub low_tech: Vec<String>,
}
