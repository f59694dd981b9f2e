use std::str::FromStr;

use crate::models::presentation::{MediaKind, PresentationData};
use crate::models::steps::Step;

/// What a step form's submit button asks for, after its fields are saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Save,
    Next,
    Back,
    Goto(usize),
    AddStory,
    RemoveStory(usize),
    AddMedia(MediaKind),
    RemoveMedia(MediaKind, usize),
}

impl FromStr for WizardAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || format!("unknown action '{s}'");
        let index = |v: &str| v.parse::<usize>().map_err(|_| bad());
        let kind = |v: &str| MediaKind::from_key(v).ok_or_else(bad);

        match s.split(':').collect::<Vec<_>>().as_slice() {
            ["save"] => Ok(WizardAction::Save),
            ["next"] => Ok(WizardAction::Next),
            ["back"] => Ok(WizardAction::Back),
            ["goto", n] => Ok(WizardAction::Goto(index(n)?)),
            ["add_story"] => Ok(WizardAction::AddStory),
            ["remove_story", i] => Ok(WizardAction::RemoveStory(index(i)?)),
            ["add_media", k] => Ok(WizardAction::AddMedia(kind(k)?)),
            ["remove_media", k, i] => Ok(WizardAction::RemoveMedia(kind(k)?, index(i)?)),
            _ => Err(bad()),
        }
    }
}

/// Where to send the browser after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Step(Step),
    Output,
}

impl Destination {
    pub fn path(self) -> String {
        match self {
            Destination::Step(step) => format!("/wizard/{}", step.index()),
            Destination::Output => "/output".to_string(),
        }
    }
}

/// Outcome of applying an action to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub destination: Destination,
    /// The step refused to advance (Big Idea still blank).
    pub blocked: bool,
}

impl Transition {
    fn to(destination: Destination) -> Self {
        Self { destination, blocked: false }
    }

    fn stay(step: Step) -> Self {
        Self::to(Destination::Step(step))
    }
}

/// Apply an action's record edits and decide where to go next.
pub fn perform(step: Step, action: WizardAction, data: &mut PresentationData) -> Transition {
    match action {
        WizardAction::Save => Transition::stay(step),
        WizardAction::Next if !step.can_advance(data) => Transition {
            destination: Destination::Step(step),
            blocked: true,
        },
        WizardAction::Next => match step.next() {
            Some(next) => Transition::to(Destination::Step(next)),
            None => Transition::to(Destination::Output),
        },
        WizardAction::Back => Transition::stay(step.previous().unwrap_or(step)),
        WizardAction::Goto(n) => Transition::stay(Step::from_index(n).unwrap_or(step)),
        WizardAction::AddStory => {
            data.add_story();
            Transition::stay(step)
        }
        WizardAction::RemoveStory(i) => {
            data.remove_story(i);
            Transition::stay(step)
        }
        WizardAction::AddMedia(kind) => {
            data.add_media_item(kind);
            Transition::stay(step)
        }
        WizardAction::RemoveMedia(kind, i) => {
            data.remove_media_item(kind, i);
            Transition::stay(step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_actions() {
        assert_eq!("save".parse(), Ok(WizardAction::Save));
        assert_eq!("next".parse(), Ok(WizardAction::Next));
        assert_eq!("back".parse(), Ok(WizardAction::Back));
        assert_eq!("goto:7".parse(), Ok(WizardAction::Goto(7)));
        assert_eq!("add_story".parse(), Ok(WizardAction::AddStory));
        assert_eq!("remove_story:2".parse(), Ok(WizardAction::RemoveStory(2)));
        assert_eq!("add_media:low".parse(), Ok(WizardAction::AddMedia(MediaKind::Low)));
        assert_eq!(
            "remove_media:high:0".parse(),
            Ok(WizardAction::RemoveMedia(MediaKind::High, 0))
        );
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["", "jump", "goto", "goto:x", "remove_story:-1", "add_media:mid", "next:1"] {
            assert!(raw.parse::<WizardAction>().is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn big_idea_blocks_next() {
        let mut data = PresentationData::default();
        let t = perform(Step::BigIdea, WizardAction::Next, &mut data);
        assert!(t.blocked);
        assert_eq!(t.destination, Destination::Step(Step::BigIdea));

        data.big_idea = "One idea".into();
        let t = perform(Step::BigIdea, WizardAction::Next, &mut data);
        assert!(!t.blocked);
        assert_eq!(t.destination, Destination::Step(Step::KeyPoints));
    }

    #[test]
    fn last_step_leads_to_output() {
        let mut data = PresentationData::default();
        let t = perform(Step::Multimedia, WizardAction::Next, &mut data);
        assert_eq!(t.destination, Destination::Output);
        assert_eq!(t.destination.path(), "/output");
    }

    #[test]
    fn back_and_goto_stay_in_range() {
        let mut data = PresentationData::default();
        assert_eq!(
            perform(Step::Objectives, WizardAction::Back, &mut data).destination,
            Destination::Step(Step::Objectives)
        );
        assert_eq!(
            perform(Step::Stories, WizardAction::Goto(3), &mut data).destination,
            Destination::Step(Step::Situation)
        );
        assert_eq!(
            perform(Step::Stories, WizardAction::Goto(42), &mut data).destination,
            Destination::Step(Step::Stories)
        );
    }

    #[test]
    fn goto_is_not_gated() {
        let mut data = PresentationData::default();
        let t = perform(Step::BigIdea, WizardAction::Goto(8), &mut data);
        assert!(!t.blocked);
        assert_eq!(t.destination.path(), "/wizard/8");
    }

    #[test]
    fn list_edits_stay_on_step() {
        let mut data = PresentationData::default();
        perform(Step::Stories, WizardAction::AddStory, &mut data);
        perform(Step::Stories, WizardAction::AddStory, &mut data);
        let t = perform(Step::Stories, WizardAction::RemoveStory(0), &mut data);
        assert_eq!(data.stories.len(), 1);
        assert_eq!(t.destination, Destination::Step(Step::Stories));

        perform(Step::Multimedia, WizardAction::AddMedia(MediaKind::Low), &mut data);
        assert_eq!(data.multimedia.low_tech.len(), 2);
        perform(Step::Multimedia, WizardAction::RemoveMedia(MediaKind::Low, 1), &mut data);
        assert_eq!(data.multimedia.low_tech.len(), 1);
    }
}
