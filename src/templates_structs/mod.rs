// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::session::csrf;
use crate::session::state::take_flash;

mod common;
mod export;
mod home;
mod output;
mod wizard;

pub use self::common::{OutlineSection, SelectOption, TextField, outline_sections};
pub use self::export::OutlinePrintTemplate;
pub use self::home::{HomeTemplate, StepCard};
pub use self::output::{OutputTemplate, StoryCard, StoryDetail};
pub use self::wizard::{
    AudienceTemplate, BigIdeaTemplate, Core4Template, KeyPointsTemplate, MediaEntry, MediaList,
    MediaSummary, MultimediaTemplate, ObjectivesTemplate, OpenCloseTemplate, OutlineReviewTemplate,
    ProgressItem, ReviewSection, SituationTemplate, StoriesTemplate, StoryEditor, SubPointGroup,
    SubPointsTemplate, WizardFrame,
};

pub const APP_NAME: &str = "In-10 Approach";

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session),
        }
    }
}
