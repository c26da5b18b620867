//! Permission-gated dispatch of SMS actions.
//!
//! A host application asks for an action (read the inbox, send a message,
//! ...). The [`ActionDispatcher`] looks up the runtime permission the action
//! needs, runs it right away when the permission is already held, and
//! otherwise parks it while the host shows the interactive permission prompt.
//! The prompt's answer comes back through
//! [`ActionDispatcher::on_permission_result`] (or the async [`bridge`]).

pub mod action;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod permissions;

pub use action::SmsAction;
pub use bridge::{grant_channel, GrantReceiver, GrantSender};
pub use config::{DispatcherConfig, PendingPolicy};
pub use dispatcher::{ActionDispatcher, ActionExecutor, Dispatch, DispatcherState, PendingRequest};
pub use error::{ConfigError, DispatchError, PermissionError};
pub use permissions::{
    GrantOutcome, GrantResult, HostResolver, Permission, PermissionPrompt, PermissionResolver,
    RequestToken,
};
