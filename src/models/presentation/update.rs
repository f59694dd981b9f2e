//! Narrow setters over `PresentationData`.
//!
//! Every write the wizard performs goes through one of these. Fixed-length arrays are
//! only ever overwritten in place; an out-of-range index is a no-op that returns `false`.

use super::slot::OutlineSlot;
use super::types::{
    AudienceField, CloseField, MediaKind, PresentationData, Story, StoryField, SUB_POINT_COUNT,
};

fn replace_at(items: &mut [String], index: usize, value: &str) -> bool {
    match items.get_mut(index) {
        Some(slot) => {
            *slot = value.to_string();
            true
        }
        None => false,
    }
}

impl PresentationData {
    pub fn set_title(&mut self, value: &str) {
        self.title = value.to_string();
    }

    pub fn set_objective(&mut self, index: usize, value: &str) -> bool {
        replace_at(&mut self.objectives, index, value)
    }

    pub fn set_core_value(&mut self, index: usize, value: &str) -> bool {
        replace_at(&mut self.core4, index, value)
    }

    pub fn set_audience(&mut self, field: AudienceField, value: &str) {
        *self.audience.slot_mut(field) = value.to_string();
    }

    pub fn set_situation_time(&mut self, value: &str) {
        self.situation.time = value.to_string();
    }

    pub fn set_situation_setting(&mut self, value: &str) {
        self.situation.setting = value.to_string();
    }

    pub fn set_big_idea(&mut self, value: &str) {
        self.big_idea = value.to_string();
    }

    pub fn set_key_point(&mut self, index: usize, value: &str) -> bool {
        replace_at(&mut self.key_points, index, value)
    }

    /// Write one sub point. A missing triple for `key_point` is created on first write.
    pub fn set_sub_point(&mut self, key_point: usize, index: usize, value: &str) -> bool {
        if key_point >= self.key_points.len() || index >= SUB_POINT_COUNT {
            return false;
        }
        let triple = self
            .sub_points
            .entry(key_point)
            .or_insert_with(|| vec![String::new(); SUB_POINT_COUNT]);
        if triple.len() < SUB_POINT_COUNT {
            triple.resize(SUB_POINT_COUNT, String::new());
        }
        replace_at(triple, index, value)
    }

    /// Append a blank story and return its index.
    pub fn add_story(&mut self) -> usize {
        self.stories.push(Story::default());
        self.stories.len() - 1
    }

    pub fn remove_story(&mut self, index: usize) -> bool {
        if index < self.stories.len() {
            self.stories.remove(index);
            true
        } else {
            false
        }
    }

    pub fn set_story_field(&mut self, index: usize, field: StoryField, value: &str) -> bool {
        match self.stories.get_mut(index) {
            Some(story) => {
                *story.slot_mut(field) = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_open(&mut self, value: &str) {
        self.open = value.to_string();
    }

    pub fn set_close(&mut self, field: CloseField, value: &str) {
        *self.close.slot_mut(field) = value.to_string();
    }

    pub fn add_media_item(&mut self, kind: MediaKind) {
        self.multimedia.items_mut(kind).push(String::new());
    }

    pub fn remove_media_item(&mut self, kind: MediaKind, index: usize) -> bool {
        let items = self.multimedia.items_mut(kind);
        if index < items.len() {
            items.remove(index);
            true
        } else {
            false
        }
    }

    pub fn set_media_item(&mut self, kind: MediaKind, index: usize, value: &str) -> bool {
        replace_at(self.multimedia.items_mut(kind), index, value)
    }

    pub fn set_slot_media(&mut self, slot: OutlineSlot, kind: MediaKind, value: &str) {
        let note = self.outline_multimedia.entry(slot.key()).or_default();
        *note.slot_mut(kind) = value.to_string();
    }

    pub fn mark_outline_reviewed(&mut self) {
        self.outline_reviewed = true;
    }
}
