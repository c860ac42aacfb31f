/// Command palette
///
/// Quick access to recent requests and the main actions, driven by keys.

pub mod commands;
pub mod state;

pub use commands::{build_items, CommandItem, PaletteAction, PaletteSection};
pub use state::{CommandPalette, PaletteKey, PaletteOutcome};
