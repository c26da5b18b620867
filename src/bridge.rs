//! Async delivery of grant results
//!
//! The platform answers permission prompts on its own schedule. Hosts push
//! each [`GrantResult`] into a [`GrantSender`]; a single task owning the
//! dispatcher drains the receiving end with [`ActionDispatcher::run`], so
//! results are applied one at a time, in arrival order.

use tokio::sync::mpsc;

use crate::dispatcher::ActionDispatcher;
use crate::permissions::GrantResult;

/// Sending half of the grant channel, held by the host
pub type GrantSender = mpsc::UnboundedSender<GrantResult>;

/// Receiving half of the grant channel, drained by the dispatcher
pub type GrantReceiver = mpsc::UnboundedReceiver<GrantResult>;

/// Create a new grant result channel
pub fn grant_channel() -> (GrantSender, GrantReceiver) {
    mpsc::unbounded_channel()
}

impl ActionDispatcher {
    /// Apply grant results until every sender is dropped.
    ///
    /// Returns how many results were handled (matching token, all granted).
    pub async fn run(&mut self, mut results: GrantReceiver) -> usize {
        let mut handled = 0;
        while let Some(result) = results.recv().await {
            if self.on_grant_result(&result) {
                handled += 1;
            }
        }
        tracing::debug!("Grant channel closed after {} handled results", handled);
        handled
    }
}
