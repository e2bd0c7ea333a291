use chrono::Utc;
use uuid::Uuid;

use glasssuite_core::EntityKind;

use crate::model::{Clause, SavedQuery};

/// Maximum number of retained saved queries.
pub const SAVED_QUERY_CAP: usize = 25;

/// Log identifier: prefix, a random hex segment, millisecond time in hex.
pub fn uid(prefix: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    let millis = Utc::now().timestamp_millis();
    format!("{prefix}_{}_{millis:x}", &random[..12])
}

/// In-memory saved-query log, most-recent-first, capped at
/// [`SAVED_QUERY_CAP`]. Persistence belongs to the caller; this type only
/// orders and trims.
#[derive(Debug, Clone, Default)]
pub struct SavedQueryLog {
    entries: Vec<SavedQuery>,
}

impl SavedQueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted entries, enforcing the cap.
    pub fn from_entries(entries: Vec<SavedQuery>) -> Self {
        let mut log = Self { entries };
        log.entries.truncate(SAVED_QUERY_CAP);
        log
    }

    pub fn entries(&self) -> &[SavedQuery] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot the builder state at the head of the log. An empty trimmed
    /// name falls back to `"<entity label> query"`; entries beyond the cap
    /// drop off the tail silently.
    pub fn save(&mut self, name: &str, entity: EntityKind, clauses: Vec<Clause>) -> &SavedQuery {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            format!("{} query", entity.label())
        } else {
            trimmed.to_string()
        };
        let entry = SavedQuery {
            id: uid("q"),
            name,
            entity,
            clauses,
            created_at: Utc::now().timestamp_millis(),
        };
        self.entries.insert(0, entry);
        self.entries.truncate(SAVED_QUERY_CAP);
        &self.entries[0]
    }

    pub fn get(&self, id: &str) -> Option<&SavedQuery> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Remove by id; unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<SavedQuery> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
