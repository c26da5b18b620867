//! Action dispatcher implementation
//!
//! Routes each requested action through a permission check before handing
//! it to the executor, parking it while the user answers a prompt.

use super::executor::ActionExecutor;
use crate::action::SmsAction;
use crate::config::{DispatcherConfig, PendingPolicy};
use crate::error::DispatchError;
use crate::permissions::{GrantResult, GrantSummary, PermissionResolver, RequestToken};

/// Called when every requested permission was granted.
///
/// A registered listener decides whether and how to resume; the dispatcher
/// does not also execute the action.
pub type GrantedListener = Box<dyn FnMut(SmsAction, &mut dyn ActionExecutor) + Send>;

/// Called with the names of the denied permissions
pub type DeniedListener = Box<dyn FnMut(Vec<String>) + Send>;

/// An action waiting on a permission prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub action: SmsAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Idle,
    PendingPermission,
}

/// What [`ActionDispatcher::handle`] did with an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The action ran
    Executed,
    /// A prompt was issued; the action runs once the result comes back
    Deferred { token: RequestToken },
    /// Unknown action, nothing happened
    Ignored,
    /// No resolver is bound (or it could not issue the prompt)
    Unavailable,
    /// Another prompt is in flight and the policy refuses to replace it
    Rejected { pending: SmsAction },
}

/// Dispatches SMS actions behind runtime permission checks
pub struct ActionDispatcher {
    config: DispatcherConfig,
    executor: Box<dyn ActionExecutor>,
    resolver: Option<Box<dyn PermissionResolver>>,
    pending: Option<PendingRequest>,
    on_granted: Option<GrantedListener>,
    on_denied: Option<DeniedListener>,
}

impl ActionDispatcher {
    /// Create a dispatcher with no resolver bound
    pub fn new(config: DispatcherConfig, executor: impl ActionExecutor + 'static) -> Self {
        Self {
            config,
            executor: Box::new(executor),
            resolver: None,
            pending: None,
            on_granted: None,
            on_denied: None,
        }
    }

    /// Builder-style [`bind_resolver`](Self::bind_resolver)
    pub fn with_resolver(mut self, resolver: impl PermissionResolver + 'static) -> Self {
        self.bind_resolver(resolver);
        self
    }

    /// Attach the resolver for the current host
    pub fn bind_resolver(&mut self, resolver: impl PermissionResolver + 'static) {
        tracing::debug!("Binding permission resolver");
        self.resolver = Some(Box::new(resolver));
    }

    /// Detach the resolver. A pending request stays parked.
    pub fn unbind_resolver(&mut self) -> Option<Box<dyn PermissionResolver>> {
        tracing::debug!("Unbinding permission resolver");
        self.resolver.take()
    }

    pub fn is_bound(&self) -> bool {
        self.resolver.is_some()
    }

    pub fn set_on_permission_granted<F>(&mut self, listener: F)
    where
        F: FnMut(SmsAction, &mut dyn ActionExecutor) + Send + 'static,
    {
        self.on_granted = Some(Box::new(listener));
    }

    pub fn set_on_permission_denied<F>(&mut self, listener: F)
    where
        F: FnMut(Vec<String>) + Send + 'static,
    {
        self.on_denied = Some(Box::new(listener));
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// The token this dispatcher tags its requests with
    pub fn request_code(&self) -> RequestToken {
        self.config.request_code
    }

    pub fn pending(&self) -> Option<&PendingRequest> {
        self.pending.as_ref()
    }

    pub fn state(&self) -> DispatcherState {
        if self.pending.is_some() {
            DispatcherState::PendingPermission
        } else {
            DispatcherState::Idle
        }
    }

    /// Handle a method-channel call by name
    pub fn dispatch_method(&mut self, method: &str) -> Result<Dispatch, DispatchError> {
        self.handle(SmsAction::from_method(method))
    }

    /// Execute `action` if its permission is held, otherwise ask for it.
    pub fn handle(&mut self, action: SmsAction) -> Result<Dispatch, DispatchError> {
        let Some(permission) = action.required_permission() else {
            tracing::debug!("Ignoring unknown action");
            return Ok(Dispatch::Ignored);
        };

        if !self.config.runtime_permissions() {
            return self.execute(action);
        }

        let Some(resolver) = self.resolver.as_ref() else {
            tracing::warn!("No permission resolver bound, cannot run {}", action);
            return Ok(Dispatch::Unavailable);
        };

        if resolver.has_permission(permission) {
            return self.execute(action);
        }

        let token = self.config.request_code;
        let previous = match (self.pending, self.config.pending_policy) {
            (Some(pending), PendingPolicy::RejectWhilePending) => {
                tracing::warn!(
                    "Rejecting {}: still waiting on permission for {}",
                    action,
                    pending.action
                );
                return Ok(Dispatch::Rejected {
                    pending: pending.action,
                });
            }
            (Some(pending), PendingPolicy::LastWriteWins) => {
                tracing::warn!("Replacing pending {} with {}", pending.action, action);
                Some(pending)
            }
            (None, _) => None,
        };

        self.pending = Some(PendingRequest { token, action });
        if let Err(e) = resolver.request_permissions(permission, token) {
            tracing::warn!("Permission request for {} failed: {}", action, e);
            self.pending = previous;
            return Ok(Dispatch::Unavailable);
        }

        tracing::debug!("Deferred {} until {} is answered", action, permission);
        Ok(Dispatch::Deferred { token })
    }

    /// Handle a [`GrantResult`] delivered by the platform
    pub fn on_grant_result(&mut self, result: &GrantResult) -> bool {
        self.on_permission_result(result.token, &result.permissions, &result.results)
    }

    /// Handle the platform's answer to a permission prompt.
    ///
    /// Returns `true` only when the result belonged to this dispatcher and
    /// every permission was granted.
    pub fn on_permission_result(
        &mut self,
        token: RequestToken,
        permissions: &[String],
        results: &[i32],
    ) -> bool {
        if token != self.config.request_code {
            tracing::debug!("Ignoring permission result for token {}", token);
            return false;
        }

        let Some(pending) = self.pending.take() else {
            tracing::warn!("Permission result for token {} with nothing pending", token);
            return false;
        };

        let summary = GrantSummary::fold(permissions, results);
        if summary.all_granted {
            tracing::info!("Permissions granted for {}", pending.action);
            match self.on_granted.as_mut() {
                Some(listener) => listener(pending.action, self.executor.as_mut()),
                None => {
                    if let Err(e) = self.executor.execute(pending.action) {
                        tracing::error!("Executing {} failed: {:#}", pending.action, e);
                    }
                }
            }
            return true;
        }

        tracing::warn!(
            "Permissions denied for {}: {:?}",
            pending.action,
            summary.denied
        );
        if let Some(listener) = self.on_denied.as_mut() {
            listener(summary.denied);
        }
        false
    }

    fn execute(&mut self, action: SmsAction) -> Result<Dispatch, DispatchError> {
        tracing::debug!("Executing {}", action);
        self.executor
            .execute(action)
            .map_err(|source| DispatchError::Execution { action, source })?;
        Ok(Dispatch::Executed)
    }
}
