//! The wizard's steps and their completion rules.

use crate::models::presentation::{is_blank, MediaKind, PresentationData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Objectives,
    Core4,
    Audience,
    Situation,
    BigIdea,
    KeyPoints,
    SubPoints,
    Stories,
    OpenClose,
    Outline,
    Multimedia,
}

impl Step {
    pub const ALL: [Step; 11] = [
        Step::Objectives,
        Step::Core4,
        Step::Audience,
        Step::Situation,
        Step::BigIdea,
        Step::KeyPoints,
        Step::SubPoints,
        Step::Stories,
        Step::OpenClose,
        Step::Outline,
        Step::Multimedia,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Objectives => "Objectives",
            Step::Core4 => "Core-4",
            Step::Audience => "Audience",
            Step::Situation => "Situation",
            Step::BigIdea => "Big Idea",
            Step::KeyPoints => "Key Points",
            Step::SubPoints => "Sub Points",
            Step::Stories => "Stories",
            Step::OpenClose => "Open & Close",
            Step::Outline => "Outline",
            Step::Multimedia => "Multi-Media",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::Objectives => "Define what you want to achieve",
            Step::Core4 => "Your brand values and identity",
            Step::Audience => "Know who you're presenting to",
            Step::Situation => "Time and setting considerations",
            Step::BigIdea => "Your central message",
            Step::KeyPoints => "Main topics (up to 3)",
            Step::SubPoints => "Supporting details",
            Step::Stories => "Engaging narratives",
            Step::OpenClose => "Strong beginning and ending",
            Step::Outline => "Review and plan multimedia",
            Step::Multimedia => "Visual and interactive elements",
        }
    }

    /// Whether the progress bar should tick this step.
    pub fn is_complete(self, data: &PresentationData) -> bool {
        match self {
            Step::Objectives => data.objectives.iter().any(|o| !is_blank(o)),
            Step::Core4 => data.core4.iter().any(|c| !is_blank(c)),
            Step::Audience => !data.audience.filled().is_empty(),
            Step::Situation => !data.situation.time.is_empty() || !data.situation.setting.is_empty(),
            Step::BigIdea => !is_blank(&data.big_idea),
            Step::KeyPoints => data.key_points.iter().any(|kp| !is_blank(kp)),
            Step::SubPoints => data
                .sub_points
                .values()
                .any(|sps| sps.iter().any(|sp| !is_blank(sp))),
            Step::Stories => !data.stories.is_empty(),
            Step::OpenClose => !is_blank(&data.open) || !is_blank(&data.close.recap),
            Step::Outline => data.outline_reviewed,
            Step::Multimedia => MediaKind::ALL
                .iter()
                .any(|&kind| data.multimedia.items(kind).iter().any(|i| !is_blank(i))),
        }
    }

    /// The Big Idea gates everything after it.
    pub fn can_advance(self, data: &PresentationData) -> bool {
        match self {
            Step::BigIdea => !is_blank(&data.big_idea),
            _ => true,
        }
    }
}

/// Completion by raw index. Unknown indices are never complete.
pub fn is_step_complete(data: &PresentationData, index: usize) -> bool {
    Step::from_index(index).is_some_and(|step| step.is_complete(data))
}
