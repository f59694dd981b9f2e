use std::fmt;

use super::placement::parse_position;

/// A position in the rendered outline that can carry multimedia notes.
///
/// Key point and sub point numbers are the 1-based render positions, the same numbers
/// printed as `KP{n}` / `SP {m}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlineSlot {
    Open,
    KeyPoint(usize),
    SubPoint(usize, usize),
    QA,
    Close,
}

impl OutlineSlot {
    /// Stable key used in `PresentationData::outline_multimedia` and in form field names.
    pub fn key(&self) -> String {
        match self {
            OutlineSlot::Open => "open".to_string(),
            OutlineSlot::KeyPoint(n) => format!("kp{n}"),
            OutlineSlot::SubPoint(n, m) => format!("kp{n}sp{m}"),
            OutlineSlot::QA => "qa".to_string(),
            OutlineSlot::Close => "close".to_string(),
        }
    }

    pub fn parse(key: &str) -> Option<OutlineSlot> {
        match key {
            "open" => return Some(OutlineSlot::Open),
            "qa" => return Some(OutlineSlot::QA),
            "close" => return Some(OutlineSlot::Close),
            _ => {}
        }
        let rest = key.strip_prefix("kp")?;
        match rest.split_once("sp") {
            Some((n, m)) => Some(OutlineSlot::SubPoint(parse_position(n)?, parse_position(m)?)),
            None => Some(OutlineSlot::KeyPoint(parse_position(rest)?)),
        }
    }

    /// Label shown next to a note in the multimedia summary.
    pub fn label(&self) -> String {
        match self {
            OutlineSlot::Open => "Open".to_string(),
            OutlineSlot::KeyPoint(n) => format!("Key Point {n}"),
            OutlineSlot::SubPoint(_, m) => format!("Sub Point {m}"),
            OutlineSlot::QA => "Q&A".to_string(),
            OutlineSlot::Close => "Close".to_string(),
        }
    }

    pub fn is_sub_point(&self) -> bool {
        matches!(self, OutlineSlot::SubPoint(..))
    }
}

impl fmt::Display for OutlineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_legacy_format() {
        assert_eq!(OutlineSlot::Open.key(), "open");
        assert_eq!(OutlineSlot::KeyPoint(2).key(), "kp2");
        assert_eq!(OutlineSlot::SubPoint(2, 3).key(), "kp2sp3");
        assert_eq!(OutlineSlot::QA.key(), "qa");
        assert_eq!(OutlineSlot::Close.key(), "close");
    }

    #[test]
    fn keys_parse_back() {
        for slot in [
            OutlineSlot::Open,
            OutlineSlot::KeyPoint(1),
            OutlineSlot::SubPoint(3, 2),
            OutlineSlot::QA,
            OutlineSlot::Close,
        ] {
            assert_eq!(OutlineSlot::parse(&slot.key()), Some(slot));
        }
    }

    #[test]
    fn malformed_keys_are_rejected() {
        for key in [
            "", "kp", "kp0", "kpx", "kp1sp", "kp1sp0", "sp1", "Open", "kp-1", "kp01", "kp+1", "kp1sp02",
        ] {
            assert_eq!(OutlineSlot::parse(key), None, "key {key:?} should not parse");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(OutlineSlot::KeyPoint(3).label(), "Key Point 3");
        assert_eq!(OutlineSlot::SubPoint(3, 1).label(), "Sub Point 1");
        assert_eq!(OutlineSlot::QA.label(), "Q&A");
    }
}
