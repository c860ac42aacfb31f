/// Command palette state
///
/// Open/closed, the filter text, and which row is selected. Keys go in,
/// an outcome comes out. Nothing here navigates by itself.

use crate::palette::commands::{CommandItem, PaletteAction, PaletteSection};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Keys the palette reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    Up,
    Down,
    Enter,
    Escape,
    /// Modifier + digit, picks a suggestion directly
    Shortcut(usize),
}

/// Result of handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteOutcome {
    /// Key did nothing visible (or only moved the selection)
    Ignored,
    Moved,
    Closed,
    Activated(PaletteAction),
}

pub struct CommandPalette {
    items: Vec<CommandItem>,
    visible: Vec<usize>,
    query: String,
    selected: usize,
    open: bool,
    matcher: SkimMatcherV2,
}

impl CommandPalette {
    pub fn new(items: Vec<CommandItem>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            visible,
            query: String::new(),
            selected: 0,
            open: false,
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Opening always starts from a blank filter at the top
    pub fn open(&mut self) {
        self.open = true;
        self.set_query("");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Change the filter. Selection jumps back to the first row.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.selected = 0;
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .map(|(index, _)| index)
            .collect();
    }

    fn matches(&self, item: &CommandItem) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }

        self.matcher.fuzzy_match(&item.title, query).is_some()
            || item
                .subtitle
                .as_deref()
                .map(|subtitle| self.matcher.fuzzy_match(subtitle, query).is_some())
                .unwrap_or(false)
    }

    /// Items passing the filter, in section order
    pub fn visible_items(&self) -> Vec<&CommandItem> {
        self.visible.iter().map(|&index| &self.items[index]).collect()
    }

    /// Visible items of one section
    pub fn section(&self, section: PaletteSection) -> Vec<&CommandItem> {
        self.visible_items()
            .into_iter()
            .filter(|item| item.section == section)
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&CommandItem> {
        self.visible
            .get(self.selected)
            .map(|&index| &self.items[index])
    }

    /// Activate the visible row at a 1-based position. Positions past the
    /// end are ignored and leave the palette open.
    pub fn select(&mut self, position: usize) -> PaletteOutcome {
        if !self.open {
            return PaletteOutcome::Ignored;
        }

        let Some(index) = position.checked_sub(1).filter(|i| *i < self.visible.len()) else {
            return PaletteOutcome::Ignored;
        };

        self.selected = index;
        let action = self.items[self.visible[index]].action.clone();
        self.activate(action)
    }

    pub fn handle_key(&mut self, key: PaletteKey) -> PaletteOutcome {
        if !self.open {
            return PaletteOutcome::Ignored;
        }

        match key {
            PaletteKey::Escape => {
                self.close();
                PaletteOutcome::Closed
            }
            PaletteKey::Down => {
                let last = self.visible.len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
                PaletteOutcome::Moved
            }
            PaletteKey::Up => {
                self.selected = self.selected.saturating_sub(1);
                PaletteOutcome::Moved
            }
            PaletteKey::Enter => {
                if let Some(item) = self.selected_item() {
                    let action = item.action.clone();
                    return self.activate(action);
                }

                // Nothing matches: whatever was typed becomes a new request
                let typed = self.query.trim().to_string();
                if typed.is_empty() {
                    PaletteOutcome::Ignored
                } else {
                    self.activate(PaletteAction::Submit(typed))
                }
            }
            PaletteKey::Shortcut(number) => {
                // Shortcuts ignore the filter
                let action = number.checked_sub(1).and_then(|position| {
                    self.items
                        .iter()
                        .filter(|item| item.section == PaletteSection::Suggested)
                        .nth(position)
                        .map(|item| item.action.clone())
                });

                match action {
                    Some(action) => self.activate(action),
                    None => PaletteOutcome::Ignored,
                }
            }
        }
    }

    fn activate(&mut self, action: PaletteAction) -> PaletteOutcome {
        self.close();
        PaletteOutcome::Activated(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Destination;
    use crate::core::recent::demo_entries;
    use crate::palette::commands::build_items;
    use chrono::Utc;

    fn palette() -> CommandPalette {
        let now = Utc::now();
        let mut palette = CommandPalette::new(build_items(&demo_entries(now), now));
        palette.open();
        palette
    }

    #[test]
    fn test_open_resets_state() {
        let mut palette = palette();
        palette.set_query("draft");
        palette.handle_key(PaletteKey::Down);
        palette.close();

        palette.open();
        assert_eq!(palette.query(), "");
        assert_eq!(palette.selected_index(), 0);
        assert_eq!(palette.visible_items().len(), 6);
    }

    #[test]
    fn test_filter_keeps_section_order() {
        let mut palette = palette();
        palette.set_query("workflow");

        let titles: Vec<_> = palette
            .visible_items()
            .iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(titles, vec!["GDPR compliance review", "Run Workflow"]);
        assert!(palette.section(PaletteSection::Suggested).is_empty());
    }

    #[test]
    fn test_short_query_matches_fuzzily() {
        let mut palette = palette();
        palette.set_query("ad");

        let titles: Vec<_> = palette
            .visible_items()
            .iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Series A investment docs", "New Draft", "Run Workflow"]
        );

        // Letters in order are enough, they don't have to be adjacent
        assert!(titles.iter().all(|title| !title.to_lowercase().contains("ad")));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut palette = palette();
        palette.set_query("NEW DRAFT");

        let titles: Vec<_> = palette
            .visible_items()
            .iter()
            .map(|item| item.title.as_str())
            .collect();
        assert!(titles.contains(&"New Draft"));
        assert!(!titles.contains(&"Run Workflow"));
    }

    #[test]
    fn test_query_change_resets_selection() {
        let mut palette = palette();
        palette.handle_key(PaletteKey::Down);
        palette.handle_key(PaletteKey::Down);
        assert_eq!(palette.selected_index(), 2);

        palette.set_query("new");
        assert_eq!(palette.selected_index(), 0);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut palette = palette();

        palette.handle_key(PaletteKey::Up);
        assert_eq!(palette.selected_index(), 0);

        for _ in 0..20 {
            palette.handle_key(PaletteKey::Down);
        }
        assert_eq!(palette.selected_index(), 5);

        palette.set_query("zzzzqqq");
        palette.handle_key(PaletteKey::Down);
        assert_eq!(palette.selected_index(), 0);
        assert!(palette.selected_item().is_none());
    }

    #[test]
    fn test_enter_activates_and_closes() {
        let mut palette = palette();
        for _ in 0..3 {
            palette.handle_key(PaletteKey::Down);
        }

        let outcome = palette.handle_key(PaletteKey::Enter);
        assert_eq!(
            outcome,
            PaletteOutcome::Activated(PaletteAction::Navigate(Destination::Ask))
        );
        assert!(!palette.is_open());
    }

    #[test]
    fn test_select_by_position() {
        let mut palette = palette();

        assert_eq!(
            palette.select(4),
            PaletteOutcome::Activated(PaletteAction::Navigate(Destination::Ask))
        );
        assert!(!palette.is_open());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut palette = palette();

        assert_eq!(palette.select(99), PaletteOutcome::Ignored);
        assert_eq!(palette.select(7), PaletteOutcome::Ignored);
        assert_eq!(palette.select(0), PaletteOutcome::Ignored);
        assert!(palette.is_open());
        assert_eq!(palette.selected_index(), 0);

        palette.set_query("workflow");
        assert_eq!(palette.select(3), PaletteOutcome::Ignored);
        assert_eq!(
            palette.select(2),
            PaletteOutcome::Activated(PaletteAction::Navigate(Destination::Automate))
        );
    }

    #[test]
    fn test_enter_with_no_match_submits_query() {
        let mut palette = palette();
        palette.set_query("  zzzzqqq  ");

        let outcome = palette.handle_key(PaletteKey::Enter);
        assert_eq!(
            outcome,
            PaletteOutcome::Activated(PaletteAction::Submit("zzzzqqq".to_string()))
        );
    }

    #[test]
    fn test_shortcuts() {
        let now = Utc::now();
        let entries = demo_entries(now);
        let mut palette = CommandPalette::new(build_items(&entries, now));
        palette.open();

        assert_eq!(
            palette.handle_key(PaletteKey::Shortcut(2)),
            PaletteOutcome::Activated(PaletteAction::OpenRecent(entries[1].id))
        );

        palette.open();
        assert_eq!(palette.handle_key(PaletteKey::Shortcut(3)), PaletteOutcome::Ignored);
        assert_eq!(palette.handle_key(PaletteKey::Shortcut(0)), PaletteOutcome::Ignored);
        assert!(palette.is_open());
    }

    #[test]
    fn test_closed_palette_ignores_keys() {
        let mut palette = palette();
        assert_eq!(palette.handle_key(PaletteKey::Escape), PaletteOutcome::Closed);
        assert_eq!(palette.handle_key(PaletteKey::Enter), PaletteOutcome::Ignored);
    }
}
