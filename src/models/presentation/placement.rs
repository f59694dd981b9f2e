use std::fmt;

use super::types::{KEY_POINT_COUNT, SUB_POINT_COUNT};

/// Where a story is told within the outline.
///
/// Stored on `Story` as the display string (`"Key Point 2 - Sub Point 1"`) and parsed
/// back on demand. Numbers are the 1-based positions the outline renders, so a story
/// placed at `KeyPoint(2)` follows the second non-blank key point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Opening,
    KeyPoint(usize),
    SubPoint(usize, usize),
    Closing,
}

impl Placement {
    /// Every placement the story editor offers, in menu order.
    pub fn options() -> Vec<Placement> {
        let mut out = vec![Placement::Opening];
        for kp in 1..=KEY_POINT_COUNT {
            out.push(Placement::KeyPoint(kp));
            for sp in 1..=SUB_POINT_COUNT {
                out.push(Placement::SubPoint(kp, sp));
            }
        }
        out.push(Placement::Closing);
        out
    }

    /// Parse a stored tag. Empty, malformed, or out-of-range tags yield `None`.
    pub fn parse(tag: &str) -> Option<Placement> {
        match tag {
            "Opening" => return Some(Placement::Opening),
            "Closing" => return Some(Placement::Closing),
            _ => {}
        }

        let rest = tag.strip_prefix("Key Point ")?;
        let placement = match rest.split_once(" - Sub Point ") {
            Some((kp, sp)) => Placement::SubPoint(
                parse_bounded(kp, KEY_POINT_COUNT)?,
                parse_bounded(sp, SUB_POINT_COUNT)?,
            ),
            None => Placement::KeyPoint(parse_bounded(rest, KEY_POINT_COUNT)?),
        };
        Some(placement)
    }
}

/// Strict 1-based decimal; rejects signs, padding, and leading zeros.
pub(super) fn parse_position(s: &str) -> Option<usize> {
    if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_bounded(s: &str, max: usize) -> Option<usize> {
    parse_position(s).filter(|n| (1..=max).contains(n))
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Opening => write!(f, "Opening"),
            Placement::KeyPoint(kp) => write!(f, "Key Point {kp}"),
            Placement::SubPoint(kp, sp) => write!(f, "Key Point {kp} - Sub Point {sp}"),
            Placement::Closing => write!(f, "Closing"),
        }
    }
}
