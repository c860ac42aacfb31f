/// Delayed navigation
///
/// The workspace pretends to think for a moment before it opens a page.
/// That pause is a real task with a handle: a newer request cancels the
/// pending one, and tearing down the scheduler cancels whatever is left.

use crate::core::models::NavigationRequest;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Delivers navigation requests after a fixed delay, latest request wins
pub struct NavigationScheduler {
    delay: Duration,
    sender: mpsc::UnboundedSender<NavigationRequest>,
    pending: Option<JoinHandle<()>>,
}

impl NavigationScheduler {
    /// Create a scheduler and the receiving end delivered requests arrive on
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<NavigationRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                sender,
                pending: None,
            },
            receiver,
        )
    }

    /// Schedule a navigation, superseding anything still pending.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn schedule(&mut self, request: NavigationRequest) {
        if self.cancel() {
            debug!("pending navigation superseded");
        }

        if self.delay.is_zero() {
            let _ = self.sender.send(request);
            return;
        }

        let sender = self.sender.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(request);
        }));
    }

    /// Cancel the pending navigation. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// End of session. Nothing pending gets delivered after this.
    pub fn teardown(mut self) {
        if self.cancel() {
            debug!("pending navigation cancelled on teardown");
        }
    }
}

impl Drop for NavigationScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
