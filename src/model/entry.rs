use std::collections::HashMap;

use super::calendar::CellKey;
use super::mood::MoodKind;

/// A committed mood + note for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub mood: MoodKind,
    pub note: String,
}

impl Entry {
    pub fn new(mood: MoodKind, note: impl Into<String>) -> Self {
        Entry {
            mood,
            note: note.into(),
        }
    }

    /// Whether the note carries any visible text
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}

/// All annotated days of the year, keyed by valid cell
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: HashMap<CellKey, Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: CellKey) -> Option<&Entry> {
        self.entries.get(&key)
    }

    /// Replace whatever was stored for `key`
    pub fn upsert(&mut self, key: CellKey, entry: Entry) {
        self.entries.insert(key, entry);
    }

    /// Delete the entry for `key`. Removing a missing entry is a no-op.
    pub fn remove(&mut self, key: CellKey) -> Option<Entry> {
        self.entries.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellKey, &Entry)> {
        self.entries.iter().map(|(k, e)| (*k, e))
    }

    /// Number of entries per mood, in picker order
    pub fn count_by_mood(&self) -> [(MoodKind, usize); 5] {
        let mut counts = MoodKind::ALL.map(|m| (m, 0usize));
        for entry in self.entries.values() {
            counts[entry.mood.index()].1 += 1;
        }
        counts
    }
}
