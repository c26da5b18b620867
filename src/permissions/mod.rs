//! Runtime permissions for SMS actions
//!
//! This module provides the resolver seam the dispatcher talks to, the
//! grant results the platform sends back, and a channel-backed resolver for
//! hosts that answer prompts out of band.

mod grant;
mod resolver;

pub use grant::{GrantOutcome, GrantResult, GrantSummary, PERMISSION_DENIED, PERMISSION_GRANTED};
pub use resolver::{HostResolver, Permission, PermissionPrompt, PermissionResolver, RequestToken};
