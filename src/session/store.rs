//! Server-side home for wizard records.
//!
//! The cookie only carries a random record id; the record itself stays in process
//! memory and is gone on restart. Records idle for longer than `IDLE_SECS` are swept
//! lazily on every write.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::models::presentation::PresentationData;

const IDLE_SECS: u64 = 60 * 60 * 24;

struct StoredRecord {
    data: PresentationData,
    touched: Instant,
}

#[derive(Clone)]
pub struct PresentationStore {
    records: Arc<Mutex<HashMap<String, StoredRecord>>>,
    idle: Duration,
}

impl Default for PresentationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationStore {
    pub fn new() -> Self {
        Self::with_idle_timeout(Duration::from_secs(IDLE_SECS))
    }

    pub fn with_idle_timeout(idle: Duration) -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            idle,
        }
    }

    /// Snapshot of the record under `id`, refreshing its idle clock.
    pub fn get(&self, id: &str) -> Option<PresentationData> {
        let mut map = self.records.lock().unwrap_or_else(|e| e.into_inner());
        map.get_mut(id).map(|record| {
            record.touched = Instant::now();
            record.data.clone()
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        let map = self.records.lock().unwrap_or_else(|e| e.into_inner());
        map.contains_key(id)
    }

    /// Store `data` under `id`, dropping records that have sat idle too long.
    pub fn put(&self, id: &str, data: PresentationData) {
        let mut map = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        let before = map.len();
        map.retain(|_, record| now.duration_since(record.touched) < self.idle);
        if map.len() < before {
            log::debug!("Swept {} idle presentation records", before - map.len());
        }
        map.insert(id.to_string(), StoredRecord { data, touched: now });
    }

    pub fn len(&self) -> usize {
        let map = self.records.lock().unwrap_or_else(|e| e.into_inner());
        map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get() {
        let store = PresentationStore::new();
        assert!(store.get("a").is_none());

        let mut data = PresentationData::default();
        data.title = "Hello".into();
        store.put("a", data);

        assert!(store.contains("a"));
        assert_eq!(store.get("a").map(|d| d.title), Some("Hello".to_string()));
        assert!(store.get("b").is_none());
    }

    #[test]
    fn clones_share_records() {
        let store = PresentationStore::new();
        let other = store.clone();
        store.put("a", PresentationData::default());
        assert!(other.contains("a"));
    }

    #[test]
    fn idle_records_are_swept_on_write() {
        let store = PresentationStore::with_idle_timeout(Duration::ZERO);
        store.put("old", PresentationData::default());
        store.put("new", PresentationData::default());
        assert!(!store.contains("old"));
        assert!(store.contains("new"));
        assert_eq!(store.len(), 1);
    }
}
