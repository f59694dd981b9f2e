use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::placement::Placement;

pub const OBJECTIVE_COUNT: usize = 2;
pub const CORE4_COUNT: usize = 4;
pub const KEY_POINT_COUNT: usize = 3;
pub const SUB_POINT_COUNT: usize = 3;

/// Room types offered on the situation step. The empty option means "not chosen yet".
pub const SETTING_OPTIONS: &[&str] = &[
    "Conference room",
    "Board room",
    "Office",
    "Virtual",
    "Classroom",
    "Elevator",
    "Amphitheater",
    "Other",
];

/// Everything the wizard has collected so far. One record per browser session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationData {
    pub title: String,
    pub objectives: [String; OBJECTIVE_COUNT],
    pub core4: [String; CORE4_COUNT],
    pub audience: Audience,
    pub situation: Situation,
    pub big_idea: String,
    pub key_points: [String; KEY_POINT_COUNT],
    /// Keyed by 0-based key point index. Absent entries read as an empty triple.
    pub sub_points: BTreeMap<usize, Vec<String>>,
    pub stories: Vec<Story>,
    pub open: String,
    pub close: Close,
    pub multimedia: Multimedia,
    /// Keyed by `OutlineSlot::key()`.
    pub outline_multimedia: BTreeMap<String, MediaNote>,
    pub outline_reviewed: bool,
}

impl Default for PresentationData {
    fn default() -> Self {
        let sub_points = (0..KEY_POINT_COUNT)
            .map(|i| (i, vec![String::new(); SUB_POINT_COUNT]))
            .collect();
        Self {
            title: String::new(),
            objectives: Default::default(),
            core4: Default::default(),
            audience: Audience::default(),
            situation: Situation::default(),
            big_idea: String::new(),
            key_points: Default::default(),
            sub_points,
            stories: Vec::new(),
            open: String::new(),
            close: Close::default(),
            multimedia: Multimedia::default(),
            outline_multimedia: BTreeMap::new(),
            outline_reviewed: false,
        }
    }
}

impl PresentationData {
    /// Sub points stored under a key point index; empty when the index was never filled.
    pub fn sub_points_for(&self, key_point_index: usize) -> &[String] {
        self.sub_points
            .get(&key_point_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Multimedia note for an outline slot key, if one was entered.
    pub fn media_note(&self, slot_key: &str) -> Option<&MediaNote> {
        self.outline_multimedia.get(slot_key)
    }
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Audience {
    pub age: String,
    pub gender: String,
    pub race: String,
    pub demographics: String,
    pub geography: String,
    pub organization: String,
    pub job_title: String,
    pub hobbies: String,
    pub beliefs: String,
    pub other: String,
}

impl Audience {
    pub fn get(&self, field: AudienceField) -> &str {
        match field {
            AudienceField::Age => &self.age,
            AudienceField::Gender => &self.gender,
            AudienceField::Race => &self.race,
            AudienceField::Demographics => &self.demographics,
            AudienceField::Geography => &self.geography,
            AudienceField::Organization => &self.organization,
            AudienceField::JobTitle => &self.job_title,
            AudienceField::Hobbies => &self.hobbies,
            AudienceField::Beliefs => &self.beliefs,
            AudienceField::Other => &self.other,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: AudienceField) -> &mut String {
        match field {
            AudienceField::Age => &mut self.age,
            AudienceField::Gender => &mut self.gender,
            AudienceField::Race => &mut self.race,
            AudienceField::Demographics => &mut self.demographics,
            AudienceField::Geography => &mut self.geography,
            AudienceField::Organization => &mut self.organization,
            AudienceField::JobTitle => &mut self.job_title,
            AudienceField::Hobbies => &mut self.hobbies,
            AudienceField::Beliefs => &mut self.beliefs,
            AudienceField::Other => &mut self.other,
        }
    }

    /// Non-blank attributes as `(field, value)` pairs, in form order.
    pub fn filled(&self) -> Vec<(AudienceField, &str)> {
        AudienceField::ALL
            .iter()
            .map(|&f| (f, self.get(f)))
            .filter(|(_, v)| !is_blank(v))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceField {
    Age,
    Gender,
    Race,
    Demographics,
    Geography,
    Organization,
    JobTitle,
    Hobbies,
    Beliefs,
    Other,
}

impl AudienceField {
    pub const ALL: [AudienceField; 10] = [
        AudienceField::Age,
        AudienceField::Gender,
        AudienceField::Race,
        AudienceField::Demographics,
        AudienceField::Geography,
        AudienceField::Organization,
        AudienceField::JobTitle,
        AudienceField::Hobbies,
        AudienceField::Beliefs,
        AudienceField::Other,
    ];

    /// Form field name and export key.
    pub fn key(self) -> &'static str {
        match self {
            AudienceField::Age => "age",
            AudienceField::Gender => "gender",
            AudienceField::Race => "race",
            AudienceField::Demographics => "demographics",
            AudienceField::Geography => "geography",
            AudienceField::Organization => "organization",
            AudienceField::JobTitle => "jobTitle",
            AudienceField::Hobbies => "hobbies",
            AudienceField::Beliefs => "beliefs",
            AudienceField::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            AudienceField::Age => "Age Range",
            AudienceField::Gender => "Gender",
            AudienceField::Race => "Race/Ethnicity",
            AudienceField::Demographics => "Key Demographics",
            AudienceField::Geography => "Geography",
            AudienceField::Organization => "Organization",
            AudienceField::JobTitle => "Job Title/Role",
            AudienceField::Hobbies => "Hobbies & Interests",
            AudienceField::Beliefs => "Religion, Politics, Beliefs",
            AudienceField::Other => "Other Connecting Factors",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            AudienceField::Age => "e.g., 25-45",
            AudienceField::Gender => "e.g., Mixed, Predominantly male/female",
            AudienceField::Race => "e.g., Diverse, Predominantly one group",
            AudienceField::Demographics => "Education level, income, etc.",
            AudienceField::Geography => "Location, region",
            AudienceField::Organization => "Company, association, group",
            AudienceField::JobTitle => "Common job titles or roles",
            AudienceField::Hobbies => "Common interests or hobbies",
            AudienceField::Beliefs => "Shared beliefs or values",
            AudienceField::Other => "Any other factors that connect your audience members",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Situation {
    pub time: String,
    pub setting: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Close {
    pub recap: String,
    pub call_to_action: String,
    pub drop_mic: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseField {
    Recap,
    CallToAction,
    DropMic,
}

impl Close {
    pub(crate) fn slot_mut(&mut self, field: CloseField) -> &mut String {
        match field {
            CloseField::Recap => &mut self.recap,
            CloseField::CallToAction => &mut self.call_to_action,
            CloseField::DropMic => &mut self.drop_mic,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    pub name: String,
    pub scene: String,
    pub problem: String,
    pub conflict: String,
    pub stakes: String,
    pub hero: String,
    pub decision: String,
    pub resolution: String,
    pub insight: String,
    /// Raw placement tag as chosen in the editor. See `Placement::parse`.
    pub placement: String,
}

impl Story {
    /// Typed placement, or `None` when the tag is empty or not a known slot.
    pub fn placement(&self) -> Option<Placement> {
        Placement::parse(&self.placement)
    }

    pub fn field(&self, field: StoryField) -> &str {
        match field {
            StoryField::Name => &self.name,
            StoryField::Scene => &self.scene,
            StoryField::Problem => &self.problem,
            StoryField::Conflict => &self.conflict,
            StoryField::Stakes => &self.stakes,
            StoryField::Hero => &self.hero,
            StoryField::Decision => &self.decision,
            StoryField::Resolution => &self.resolution,
            StoryField::Insight => &self.insight,
            StoryField::Placement => &self.placement,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: StoryField) -> &mut String {
        match field {
            StoryField::Name => &mut self.name,
            StoryField::Scene => &mut self.scene,
            StoryField::Problem => &mut self.problem,
            StoryField::Conflict => &mut self.conflict,
            StoryField::Stakes => &mut self.stakes,
            StoryField::Hero => &mut self.hero,
            StoryField::Decision => &mut self.decision,
            StoryField::Resolution => &mut self.resolution,
            StoryField::Insight => &mut self.insight,
            StoryField::Placement => &mut self.placement,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryField {
    Name,
    Scene,
    Problem,
    Conflict,
    Stakes,
    Hero,
    Decision,
    Resolution,
    Insight,
    Placement,
}

impl StoryField {
    /// The eight narrative beats, in telling order.
    pub const NARRATIVE: [StoryField; 8] = [
        StoryField::Scene,
        StoryField::Problem,
        StoryField::Conflict,
        StoryField::Stakes,
        StoryField::Hero,
        StoryField::Decision,
        StoryField::Resolution,
        StoryField::Insight,
    ];

    pub fn key(self) -> &'static str {
        match self {
            StoryField::Name => "name",
            StoryField::Scene => "scene",
            StoryField::Problem => "problem",
            StoryField::Conflict => "conflict",
            StoryField::Stakes => "stakes",
            StoryField::Hero => "hero",
            StoryField::Decision => "decision",
            StoryField::Resolution => "resolution",
            StoryField::Insight => "insight",
            StoryField::Placement => "placement",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        std::iter::once(StoryField::Name)
            .chain(Self::NARRATIVE)
            .chain(std::iter::once(StoryField::Placement))
            .find(|f| f.key() == key)
    }

    /// Short label used in the summary export.
    pub fn summary_label(self) -> &'static str {
        match self {
            StoryField::Name => "Name",
            StoryField::Scene => "Setup",
            StoryField::Problem => "Problem",
            StoryField::Conflict => "Conflict",
            StoryField::Stakes => "Stakes",
            StoryField::Hero => "Hero",
            StoryField::Decision => "Decision",
            StoryField::Resolution => "Resolution",
            StoryField::Insight => "Insight",
            StoryField::Placement => "Placement",
        }
    }

    /// Editor heading for the narrative beats.
    pub fn prompt(self) -> &'static str {
        match self {
            StoryField::Name => "Story Name",
            StoryField::Scene => "1. Set the Scene",
            StoryField::Problem => "2. Establish the Problem",
            StoryField::Conflict => "3. Create Conflict",
            StoryField::Stakes => "4. Emphasize the Stakes",
            StoryField::Hero => "5. Introduce the Hero or Guide",
            StoryField::Decision => "6. Highlight the Key Decision",
            StoryField::Resolution => "7. Bring the story to Resolution",
            StoryField::Insight => "8. Reveal your Insight or Aha",
            StoryField::Placement => "Where will you use this story in your presentation?",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            StoryField::Name => "Give your story a memorable name",
            StoryField::Scene => "Where were you? What did you see, hear, smell, feel? Paint the picture...",
            StoryField::Problem => "What was the initial problem or challenge you faced?",
            StoryField::Conflict => "Who or what were you in conflict with? Make them real for your audience...",
            StoryField::Stakes => "What would happen if you failed? What was at risk?",
            StoryField::Hero => "Who helped you? What mentor, colleague, or unexpected source provided guidance?",
            StoryField::Decision => "What was the pivotal moment? What decision or action changed everything?",
            StoryField::Resolution => "How did the story conclude? What was the outcome?",
            StoryField::Insight => "What was your key insight? How does this lesson connect to your presentation point?",
            StoryField::Placement => "Select placement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Multimedia {
    pub high_tech: Vec<String>,
    pub low_tech: Vec<String>,
}

impl Default for Multimedia {
    fn default() -> Self {
        Self {
            high_tech: vec![String::new()],
            low_tech: vec![String::new()],
        }
    }
}

impl Multimedia {
    pub fn items(&self, kind: MediaKind) -> &[String] {
        match kind {
            MediaKind::High => &self.high_tech,
            MediaKind::Low => &self.low_tech,
        }
    }

    pub(crate) fn items_mut(&mut self, kind: MediaKind) -> &mut Vec<String> {
        match kind {
            MediaKind::High => &mut self.high_tech,
            MediaKind::Low => &mut self.low_tech,
        }
    }
}

/// Per-slot multimedia note from the outline review step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaNote {
    pub high_tech: String,
    pub low_tech: String,
}

impl MediaNote {
    pub fn get(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::High => &self.high_tech,
            MediaKind::Low => &self.low_tech,
        }
    }

    pub(crate) fn slot_mut(&mut self, kind: MediaKind) -> &mut String {
        match kind {
            MediaKind::High => &mut self.high_tech,
            MediaKind::Low => &mut self.low_tech,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    High,
    Low,
}

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::High, MediaKind::Low];

    pub fn key(self) -> &'static str {
        match self {
            MediaKind::High => "high",
            MediaKind::Low => "low",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "high" => Some(MediaKind::High),
            "low" => Some(MediaKind::Low),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::High => "High-Tech",
            MediaKind::Low => "Low-Tech",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_has_fixed_shapes() {
        let data = PresentationData::default();
        assert_eq!(data.objectives.len(), 2);
        assert_eq!(data.core4.len(), 4);
        assert_eq!(data.key_points.len(), 3);
        assert_eq!(data.sub_points.len(), 3);
        assert!(data.sub_points.values().all(|sp| sp.len() == 3));
        assert_eq!(data.multimedia.high_tech, vec![String::new()]);
        assert_eq!(data.multimedia.low_tech, vec![String::new()]);
        assert!(data.stories.is_empty());
        assert!(!data.outline_reviewed);
    }

    #[test]
    fn missing_sub_point_index_reads_empty() {
        let mut data = PresentationData::default();
        data.sub_points.remove(&1);
        assert!(data.sub_points_for(1).is_empty());
        assert!(data.sub_points_for(7).is_empty());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let data: PresentationData =
            serde_json::from_str(r#"{"title":"Hi","keyPoints":["A","",""]}"#).unwrap();
        assert_eq!(data.title, "Hi");
        assert_eq!(data.key_points[0], "A");
        assert_eq!(data.core4.len(), 4);
        assert_eq!(data.close, Close::default());
    }

    #[test]
    fn json_uses_camel_case_and_round_trips() {
        let mut data = PresentationData::default();
        data.big_idea = "Less is more".into();
        data.close.call_to_action = "Act".into();
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"bigIdea\""));
        assert!(json.contains("\"callToAction\""));
        let back: PresentationData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn audience_filled_skips_blank_values() {
        let audience = Audience {
            age: "25-45".into(),
            job_title: "  ".into(),
            other: "Runners".into(),
            ..Default::default()
        };
        let filled = audience.filled();
        assert_eq!(filled, vec![(AudienceField::Age, "25-45"), (AudienceField::Other, "Runners")]);
    }

    #[test]
    fn story_field_keys_resolve() {
        assert_eq!(StoryField::from_key("insight"), Some(StoryField::Insight));
        assert_eq!(StoryField::from_key("placement"), Some(StoryField::Placement));
        assert_eq!(StoryField::from_key("name"), Some(StoryField::Name));
        assert_eq!(StoryField::from_key("moral"), None);
        assert_eq!(AudienceField::from_key("jobTitle"), Some(AudienceField::JobTitle));
    }
}
