/// Command palette entries
///
/// Builds the list the palette shows: the two newest recent items as
/// suggestions, the rest of the history, then the fixed actions.

use crate::core::models::{Destination, EntryId, RecentEntry};
use crate::core::timestamps::format_relative;
use chrono::{DateTime, Utc};

/// How many recent items get promoted to suggestions (with shortcuts)
pub const SUGGESTED_COUNT: usize = 2;

/// Palette section, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaletteSection {
    Suggested,
    Recent,
    Actions,
}

impl PaletteSection {
    pub fn heading(&self) -> &'static str {
        match self {
            PaletteSection::Suggested => "Suggested",
            PaletteSection::Recent => "Recent",
            PaletteSection::Actions => "Actions",
        }
    }
}

/// What happens when an item is picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    /// Open a page fresh
    Navigate(Destination),
    /// Reopen a recent request
    OpenRecent(EntryId),
    /// Send typed text as a new request
    Submit(String),
}

/// One row in the palette
#[derive(Debug, Clone, PartialEq)]
pub struct CommandItem {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub icon: &'static str,
    pub shortcut: Option<String>,
    pub section: PaletteSection,
    pub action: PaletteAction,
}

/// Modifier key name shown in shortcuts
pub fn modifier_key() -> &'static str {
    if cfg!(target_os = "macos") {
        "⌘"
    } else {
        "Ctrl+"
    }
}

/// Build every palette item, in section order
pub fn build_items(recent: &[RecentEntry], now: DateTime<Utc>) -> Vec<CommandItem> {
    let modifier = modifier_key();

    let mut items: Vec<CommandItem> = recent
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let suggested = index < SUGGESTED_COUNT;
            let style = entry.category.style();
            CommandItem {
                id: format!("recent-{}", entry.id),
                title: entry.title.clone(),
                subtitle: Some(format!(
                    "{} • {}",
                    style.label,
                    format_relative(&entry.created_at, &now)
                )),
                icon: style.icon,
                shortcut: suggested.then(|| format!("{}{}", modifier, index + 1)),
                section: if suggested {
                    PaletteSection::Suggested
                } else {
                    PaletteSection::Recent
                },
                action: PaletteAction::OpenRecent(entry.id),
            }
        })
        .collect();

    items.extend(actions(modifier));
    items
}

fn actions(modifier: &str) -> Vec<CommandItem> {
    [
        (
            "new-analysis",
            "New Analysis",
            "Start a new legal analysis",
            "A",
            Destination::Ask,
        ),
        (
            "new-draft",
            "New Draft",
            "Create a new document",
            "D",
            Destination::Draft,
        ),
        (
            "run-workflow",
            "Run Workflow",
            "Start an automated workflow",
            "W",
            Destination::Automate,
        ),
    ]
    .into_iter()
    .map(|(id, title, subtitle, key, destination)| CommandItem {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        icon: action_icon(destination),
        shortcut: Some(format!("{}Shift+{}", modifier, key)),
        section: PaletteSection::Actions,
        action: PaletteAction::Navigate(destination),
    })
    .collect()
}

fn action_icon(destination: Destination) -> &'static str {
    use crate::core::models::Category;

    match destination {
        Destination::Ask => Category::Analysis.style().icon,
        Destination::Draft => Category::Draft.style().icon,
        Destination::Automate => Category::Workflow.style().icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recent::demo_entries;

    #[test]
    fn test_sections() {
        let now = Utc::now();
        let items = build_items(&demo_entries(now), now);

        let sections: Vec<_> = items.iter().map(|item| item.section).collect();
        assert_eq!(
            sections,
            vec![
                PaletteSection::Suggested,
                PaletteSection::Suggested,
                PaletteSection::Recent,
                PaletteSection::Actions,
                PaletteSection::Actions,
                PaletteSection::Actions,
            ]
        );
    }

    #[test]
    fn test_recent_items() {
        let now = Utc::now();
        let entries = demo_entries(now);
        let items = build_items(&entries, now);

        assert_eq!(items[0].title, "Johnson v. State analysis");
        assert_eq!(items[0].subtitle.as_deref(), Some("Analysis • 2 hours ago"));
        assert_eq!(items[0].icon, "💬");
        assert_eq!(items[0].action, PaletteAction::OpenRecent(entries[0].id));
        assert!(items[0].shortcut.as_deref().unwrap().ends_with('1'));
        assert!(items[1].shortcut.as_deref().unwrap().ends_with('2'));
        assert!(items[2].shortcut.is_none());
    }

    #[test]
    fn test_actions_without_history() {
        let items = build_items(&[], Utc::now());

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].action, PaletteAction::Navigate(Destination::Ask));
        assert_eq!(items[1].action, PaletteAction::Navigate(Destination::Draft));
        assert_eq!(items[2].action, PaletteAction::Navigate(Destination::Automate));
        assert_eq!(items[2].icon, "⚡");
    }
}
