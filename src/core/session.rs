// One user's workspace session
//
// Owns the recent list and the composer. Whoever needs them gets the session
// passed in; nothing reaches for global state.

use crate::config::DeskConfig;
use crate::core::composer::Composer;
use crate::core::models::{Destination, EntryId, NavigationRequest};
use crate::core::recent::{demo_entries, RecencyTracker};
use crate::error::Result;
use crate::palette::{build_items, CommandPalette, PaletteAction};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

pub struct DeskSession {
    tracker: RecencyTracker,
    composer: Composer,
}

impl DeskSession {
    pub fn new(config: &DeskConfig) -> Self {
        let tracker = if config.seed_demo_history {
            RecencyTracker::seeded(config.recent_capacity, demo_entries(Utc::now()))
        } else {
            RecencyTracker::new(config.recent_capacity)
        };

        info!(
            capacity = tracker.capacity(),
            seeded = tracker.len(),
            "session started"
        );

        Self {
            tracker,
            composer: Composer::new(config.title_max_chars),
        }
    }

    /// Submit text from a composer.
    ///
    /// Empty text is rejected before anything changes.
    pub fn submit(&mut self, text: &str) -> Result<NavigationRequest> {
        let submission = self.composer.prepare(text)?;

        let entry = self.tracker.add_entry(
            submission.title,
            submission.intent.category,
            submission.full_query,
            submission.intent.destination,
        );

        info!(
            destination = %entry.destination,
            category = %entry.category,
            "request submitted"
        );

        Ok(NavigationRequest::for_entry(&entry, false))
    }

    /// Reopen a recent entry. None if it's no longer in the list.
    pub fn open_recent(&mut self, id: &EntryId) -> Option<NavigationRequest> {
        let request = self
            .tracker
            .get(id)
            .map(|entry| NavigationRequest::for_entry(entry, true))?;

        self.tracker.set_active(Some(*id));
        debug!(id = %id, "recent entry reopened");
        Some(request)
    }

    /// Land on a page with a fresh composer. Nothing stays highlighted.
    pub fn land_on(&mut self, destination: Destination) -> NavigationRequest {
        self.tracker.set_active(None);
        NavigationRequest::landing(destination)
    }

    pub fn remove_recent(&mut self, id: &EntryId) {
        self.tracker.remove_entry(id);
    }

    pub fn clear_history(&mut self) {
        self.tracker.clear_all();
    }

    pub fn tracker(&self) -> &RecencyTracker {
        &self.tracker
    }

    /// A palette over the current history, already open
    pub fn palette(&self, now: DateTime<Utc>) -> CommandPalette {
        let mut palette = CommandPalette::new(build_items(self.tracker.list(), now));
        palette.open();
        palette
    }

    /// Carry out whatever the palette picked
    pub fn apply_palette_action(
        &mut self,
        action: PaletteAction,
    ) -> Result<Option<NavigationRequest>> {
        match action {
            PaletteAction::Navigate(destination) => Ok(Some(self.land_on(destination))),
            PaletteAction::OpenRecent(id) => Ok(self.open_recent(&id)),
            PaletteAction::Submit(text) => self.submit(&text).map(Some),
        }
    }

    /// End of session. History goes with it.
    pub fn teardown(mut self) {
        let dropped = self.tracker.len();
        self.tracker.clear_all();
        info!(dropped, "session ended");
    }
}
