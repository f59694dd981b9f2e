use crate::models::outline::Outline;

/// One labelled input or textarea.
pub struct TextField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub multiline: bool,
}

impl TextField {
    pub fn input(name: impl Into<String>, label: impl Into<String>, value: &str, placeholder: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: value.to_string(),
            placeholder: placeholder.into(),
            multiline: false,
        }
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>, value: &str, placeholder: impl Into<String>) -> Self {
        Self {
            multiline: true,
            ..Self::input(name, label, value, placeholder)
        }
    }
}

pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Options with a leading empty choice; the one equal to `current` is selected.
    pub fn list(empty_label: &str, values: impl IntoIterator<Item = String>, current: &str) -> Vec<SelectOption> {
        std::iter::once(SelectOption {
            value: String::new(),
            label: empty_label.to_string(),
            selected: current.is_empty(),
        })
        .chain(values.into_iter().map(|v| SelectOption {
            selected: v == current,
            label: v.clone(),
            value: v,
        }))
        .collect()
    }
}

/// A flat outline block for on-screen rendering: heading, body lines, attached stories.
pub struct OutlineSection {
    pub heading: String,
    pub lines: Vec<String>,
    pub stories: Vec<String>,
    pub nested: bool,
    pub key_point: bool,
}

/// Flatten an outline into display blocks, preserving render order.
pub fn outline_sections(outline: &Outline) -> Vec<OutlineSection> {
    let mut out = vec![OutlineSection {
        heading: "OPEN:".to_string(),
        lines: vec![outline.open.clone()],
        stories: outline.opening_stories.clone(),
        nested: false,
        key_point: false,
    }];

    for kp in &outline.key_points {
        out.push(OutlineSection {
            heading: format!("KP{}: {}", kp.number, kp.text),
            lines: Vec::new(),
            stories: kp.stories.clone(),
            nested: false,
            key_point: true,
        });
        for sp in &kp.sub_points {
            out.push(OutlineSection {
                heading: format!("SP {}: {}", sp.number, sp.text),
                lines: Vec::new(),
                stories: sp.stories.clone(),
                nested: true,
                key_point: false,
            });
        }
    }

    out.push(OutlineSection {
        heading: "Q&A".to_string(),
        lines: Vec::new(),
        stories: Vec::new(),
        nested: false,
        key_point: false,
    });
    out.push(OutlineSection {
        heading: "CLOSE:".to_string(),
        lines: vec![
            format!("Recap: {}", outline.recap),
            format!("Call to Action: {}", outline.call_to_action),
            format!("Drop the Mic: {}", outline.drop_mic),
        ],
        stories: outline.closing_stories.clone(),
        nested: false,
        key_point: false,
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::outline::build_outline;
    use crate::models::presentation::{PresentationData, Story};

    #[test]
    fn sections_follow_outline_order() {
        let mut data = PresentationData::default();
        data.key_points = ["Trust".into(), "".into(), "Clarity".into()];
        data.sub_points.insert(0, vec!["Proof".into(), "".into(), "".into()]);
        data.stories = vec![Story {
            name: "B".into(),
            placement: "Key Point 1".into(),
            ..Default::default()
        }];
        let headings: Vec<String> = outline_sections(&build_outline(&data))
            .into_iter()
            .map(|s| s.heading)
            .collect();
        assert_eq!(headings, vec!["OPEN:", "KP1: Trust", "SP 1: Proof", "KP2: Clarity", "Q&A", "CLOSE:"]);
    }

    #[test]
    fn select_list_marks_current() {
        let opts = SelectOption::list("Pick", ["A".to_string(), "B".to_string()], "B");
        assert_eq!(opts.len(), 3);
        assert!(!opts[0].selected);
        assert!(opts[2].selected);

        let none = SelectOption::list("Pick", ["A".to_string()], "");
        assert!(none[0].selected);
    }
}
