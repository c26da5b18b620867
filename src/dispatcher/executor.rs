//! Executor trait definition

use anyhow::Result;

use crate::action::SmsAction;

/// Performs the actual platform operation for an authorized action
///
/// The dispatcher only calls this once the required permission is held (or
/// the platform does not check permissions at runtime).
pub trait ActionExecutor: Send {
    fn execute(&mut self, action: SmsAction) -> Result<()>;
}

impl<F> ActionExecutor for F
where
    F: FnMut(SmsAction) -> Result<()> + Send,
{
    fn execute(&mut self, action: SmsAction) -> Result<()> {
        self(action)
    }
}
