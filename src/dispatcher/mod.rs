//! Permission-gated action dispatch
//!
//! The [`ActionDispatcher`] owns one pending-request slot. Each request
//! cycle moves `Idle → PendingPermission → Idle`, ending either in the
//! action being executed or in the denied permissions being reported.

mod executor;
mod handler;

pub use executor::ActionExecutor;
pub use handler::{
    ActionDispatcher, DeniedListener, Dispatch, DispatcherState, GrantedListener, PendingRequest,
};
