/// Core functionality modules
///
/// Recent history, submission handling, the session that ties them together,
/// and the delayed navigation used to simulate thinking time.

pub mod composer;
pub mod models;
pub mod recent;
pub mod scheduler;
pub mod session;
pub mod timestamps;

pub use composer::{Composer, Submission};
pub use models::{Category, CategoryStyle, Destination, EntryId, Intent, NavigationRequest, RecentEntry};
pub use recent::{truncate_title, RecencyTracker};
pub use scheduler::NavigationScheduler;
pub use session::DeskSession;
pub use timestamps::format_relative;
