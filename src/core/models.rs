/// Data models shared by the tracker, the router and the palette
///
/// Entries are plain values. The "active" flag is not stored here; the
/// tracker keeps it as a separate pointer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a recent entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of work a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Analysis,
    Draft,
    Workflow,
}

/// Presentation descriptor for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub label: &'static str,
}

impl Category {
    /// The one place a category is turned into something displayable
    pub fn style(&self) -> CategoryStyle {
        match self {
            Category::Analysis => CategoryStyle {
                icon: "💬",
                label: "Analysis",
            },
            Category::Draft => CategoryStyle {
                icon: "✏️",
                label: "Draft",
            },
            Category::Workflow => CategoryStyle {
                icon: "⚡",
                label: "Workflow",
            },
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.style().label)
    }
}

/// Page a request lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Ask,
    Draft,
    Automate,
}

impl Destination {
    /// Route path of the destination page
    pub fn route(&self) -> &'static str {
        match self {
            Destination::Ask => "/ask",
            Destination::Draft => "/draft",
            Destination::Automate => "/automate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Destination::Ask => "Ask",
            Destination::Draft => "Draft",
            Destination::Automate => "Automate",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of classifying a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent {
    pub destination: Destination,
    pub category: Category,
}

impl Intent {
    pub const ANALYSIS: Intent = Intent {
        destination: Destination::Ask,
        category: Category::Analysis,
    };
    pub const DRAFT: Intent = Intent {
        destination: Destination::Draft,
        category: Category::Draft,
    };
    pub const WORKFLOW: Intent = Intent {
        destination: Destination::Automate,
        category: Category::Workflow,
    };
}

/// A request the user submitted recently
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub id: EntryId,
    pub title: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub full_query: String,
    pub destination: Destination,
}

/// Context handed to the destination page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub destination: Destination,
    pub query: Option<String>,
    pub category: Option<Category>,
    pub from_recent: bool,
    pub entry_id: Option<EntryId>,
}

impl NavigationRequest {
    /// Landing on a page with nothing to show yet
    pub fn landing(destination: Destination) -> Self {
        Self {
            destination,
            query: None,
            category: None,
            from_recent: false,
            entry_id: None,
        }
    }

    /// Reopening or freshly creating a recent entry
    pub fn for_entry(entry: &RecentEntry, from_recent: bool) -> Self {
        Self {
            destination: entry.destination,
            query: Some(entry.full_query.clone()),
            category: Some(entry.category),
            from_recent,
            entry_id: Some(entry.id),
        }
    }
}
