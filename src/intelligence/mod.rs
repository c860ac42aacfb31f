/// Intelligence module
///
/// Works out what the user is asking for from what they typed.

pub mod router;

pub use router::{classify, IntentRouter};
