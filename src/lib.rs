/// lexdesk library
///
/// Core of the legal workspace shell: recent request history, request
/// routing, and the command palette.

pub mod config;
pub mod core;
pub mod error;
pub mod intelligence;
pub mod logging;
pub mod palette;

// Re-exports for convenience
pub use crate::config::DeskConfig;
pub use crate::core::DeskSession;
pub use crate::error::{DeskError, Result};
