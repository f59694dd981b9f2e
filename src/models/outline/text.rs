use std::fmt::Write;

use crate::models::presentation::PresentationData;

use super::{build_outline, Outline};

const SUB_INDENT: &str = "  ";
const SUB_STORY_INDENT: &str = "    ";

/// Plain-text serialization, used for the `.doc` download.
pub fn render_text(outline: &Outline) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_outline(&mut out, outline);
    out
}

pub fn outline_text(data: &PresentationData) -> String {
    render_text(&build_outline(data))
}

fn write_outline(out: &mut String, outline: &Outline) -> std::fmt::Result {
    writeln!(out, "PRESENTATION OUTLINE")?;
    writeln!(out)?;
    writeln!(out, "Title: {}", outline.title)?;
    writeln!(out)?;

    writeln!(out, "OPEN:")?;
    writeln!(out, "{}", outline.open)?;
    writeln!(out)?;
    for name in &outline.opening_stories {
        writeln!(out, "STORY: {name}")?;
    }
    if !outline.opening_stories.is_empty() {
        writeln!(out)?;
    }

    for kp in &outline.key_points {
        writeln!(out, "KP{}: {}", kp.number, kp.text)?;
        for name in &kp.stories {
            writeln!(out, "STORY: {name}")?;
        }
        for sp in &kp.sub_points {
            writeln!(out, "{SUB_INDENT}SP {}: {}", sp.number, sp.text)?;
            for name in &sp.stories {
                writeln!(out, "{SUB_STORY_INDENT}STORY: {name}")?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "Q&A")?;
    writeln!(out)?;

    writeln!(out, "CLOSE:")?;
    writeln!(out, "Recap: {}", outline.recap)?;
    writeln!(out, "Call to Action: {}", outline.call_to_action)?;
    writeln!(out, "Drop the Mic: {}", outline.drop_mic)?;
    writeln!(out)?;
    for name in &outline.closing_stories {
        writeln!(out, "STORY: {name}")?;
    }
    Ok(())
}
