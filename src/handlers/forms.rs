/// Decoded `application/x-www-form-urlencoded` body.
///
/// Step forms carry dynamic field names (`story_2_scene`, `media_kp1sp2_high`), so they
/// are read as ordered pairs rather than into a fixed struct.
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn parse(body: &str) -> Result<Self, serde_urlencoded::de::Error> {
        serde_urlencoded::from_str(body).map(FormFields)
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Fields whose name starts with `prefix`, with the prefix stripped.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.0
            .iter()
            .filter_map(move |(k, v)| k.strip_prefix(prefix).map(|rest| (rest, v.as_str())))
    }
}
