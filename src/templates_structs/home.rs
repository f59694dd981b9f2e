use askama::Template;

use super::PageContext;

pub struct StepCard {
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub steps: Vec<StepCard>,
    pub in_progress: bool,
}
