// Keeps the list of things you asked for recently
//
// Newest first, one entry per query, capped. Plus a pointer to whichever
// entry is highlighted right now.

use crate::core::models::{Category, Destination, EntryId, RecentEntry};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Default number of recent entries kept
pub const DEFAULT_CAPACITY: usize = 5;

/// Titles longer than this get cut and an ellipsis appended
pub const DEFAULT_TITLE_MAX_CHARS: usize = 30;

const ELLIPSIS: char = '…';

/// Cut a query down to a display title.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-char.
pub fn truncate_title(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut title = text[..cut].to_string();
            title.push(ELLIPSIS);
            title
        }
        None => text.to_string(),
    }
}

pub struct RecencyTracker {
    entries: Vec<RecentEntry>,
    active: Option<EntryId>,
    capacity: usize,
}

impl RecencyTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            active: None,
            capacity: capacity.max(1),
        }
    }

    /// Start from an existing list (given newest first).
    ///
    /// Later duplicates of a query are dropped, anything past capacity too.
    /// Nothing is active afterwards.
    pub fn seeded(capacity: usize, entries: Vec<RecentEntry>) -> Self {
        let mut tracker = Self::new(capacity);
        for entry in entries {
            if tracker.entries.len() == tracker.capacity {
                break;
            }
            if tracker
                .entries
                .iter()
                .any(|existing| existing.full_query == entry.full_query)
            {
                continue;
            }
            tracker.entries.push(entry);
        }
        tracker
    }

    // Main entry point. Record a submission and make it the highlighted one.
    pub fn add_entry(
        &mut self,
        title: String,
        category: Category,
        full_query: String,
        destination: Destination,
    ) -> RecentEntry {
        let entry = RecentEntry {
            id: EntryId::new(),
            title,
            category,
            created_at: Utc::now(),
            full_query,
            destination,
        };

        // Same query again? The old one goes, the new one takes the front.
        self.entries
            .retain(|existing| existing.full_query != entry.full_query);
        self.entries.insert(0, entry.clone());

        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            debug!(evicted, capacity = self.capacity, "recent list over capacity");
        }

        self.active = Some(entry.id);
        debug!(id = %entry.id, category = %entry.category, "recent entry added");

        entry
    }

    /// Remove an entry. Unknown ids are ignored.
    pub fn remove_entry(&mut self, id: &EntryId) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != *id);

        if self.active.as_ref() == Some(id) {
            self.active = None;
        }

        if self.entries.len() != before {
            debug!(id = %id, "recent entry removed");
        }
    }

    /// Point the highlight somewhere, or nowhere.
    ///
    /// The id is not checked against the list. A stale id just means nothing
    /// is highlighted.
    pub fn set_active(&mut self, id: Option<EntryId>) {
        self.active = id;
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.active = None;
        debug!("recent list cleared");
    }

    /// Entries, newest first
    pub fn list(&self) -> &[RecentEntry] {
        &self.entries
    }

    pub fn active_id(&self) -> Option<EntryId> {
        self.active
    }

    pub fn is_active(&self, id: &EntryId) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn get(&self, id: &EntryId) -> Option<&RecentEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A few believable entries so a fresh session doesn't look empty
pub fn demo_entries(now: DateTime<Utc>) -> Vec<RecentEntry> {
    vec![
        RecentEntry {
            id: EntryId::new(),
            title: "Johnson v. State analysis".to_string(),
            category: Category::Analysis,
            created_at: now - Duration::hours(2),
            full_query: "Analyze the Johnson v. State case for precedent applicability"
                .to_string(),
            destination: Destination::Ask,
        },
        RecentEntry {
            id: EntryId::new(),
            title: "Series A investment docs".to_string(),
            category: Category::Draft,
            created_at: now - Duration::days(1),
            full_query: "Draft Series A investment documentation package".to_string(),
            destination: Destination::Draft,
        },
        RecentEntry {
            id: EntryId::new(),
            title: "GDPR compliance review".to_string(),
            category: Category::Workflow,
            created_at: now - Duration::days(2),
            full_query: "Run GDPR compliance review workflow for client data".to_string(),
            destination: Destination::Automate,
        },
    ]
}
