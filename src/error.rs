//! Error types.
//!
//! Permission outcomes (denied, token mismatch, unknown action) are ordinary
//! return values; these types cover the failures around them.

use thiserror::Error;

use crate::action::SmsAction;
use crate::permissions::Permission;

/// Error returned when an interactive permission request cannot be issued.
#[derive(Debug, Error)]
pub enum PermissionError {
    /// No host is attached to show the prompt.
    #[error("permission host unavailable")]
    HostUnavailable,

    /// The host refused to issue the request.
    #[error("failed to request {permission}: {reason}")]
    RequestFailed {
        /// The permission that was being requested.
        permission: Permission,
        /// Why the host refused.
        reason: String,
    },
}

/// Error returned by [`ActionDispatcher::handle`](crate::ActionDispatcher::handle).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The executor failed while performing the action.
    #[error("executing {action} failed: {source}")]
    Execution {
        action: SmsAction,
        #[source]
        source: anyhow::Error,
    },
}

/// Error returned while loading a [`DispatcherConfig`](crate::DispatcherConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dispatcher config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}
