//! Permission resolver seam
//!
//! The dispatcher never talks to the platform directly. It asks a
//! [`PermissionResolver`] whether a permission is held and, if not, asks it
//! to show the interactive prompt. The answer is delivered later through the
//! grant channel, never as a return value.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::grant::{GrantResult, PERMISSION_DENIED, PERMISSION_GRANTED};
use crate::error::PermissionError;

/// Integer correlating a permission request with its result callback
pub type RequestToken = i32;

/// A runtime permission an SMS action can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    ReadSms,
    SendSms,
}

impl Permission {
    /// The platform name of this permission
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ReadSms => "android.permission.READ_SMS",
            Permission::SendSms => "android.permission.SEND_SMS",
        }
    }

    /// Look up a permission by its platform name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "android.permission.READ_SMS" => Some(Permission::ReadSms),
            "android.permission.SEND_SMS" => Some(Permission::SendSms),
            _ => None,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow view of the platform permission subsystem
pub trait PermissionResolver: Send {
    /// Whether `permission` is currently granted. Must not prompt.
    fn has_permission(&self, permission: Permission) -> bool;

    /// Show the interactive prompt for `permission`, tagged with `token`.
    ///
    /// Returns once the request is issued; the user's answer arrives as a
    /// [`GrantResult`] carrying the same token.
    fn request_permissions(
        &self,
        permission: Permission,
        token: RequestToken,
    ) -> Result<(), PermissionError>;
}

/// A prompt the host should show to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionPrompt {
    pub permission: Permission,
    pub token: RequestToken,
}

/// Resolver backed by an in-memory grant set and a prompt channel
///
/// Clones share the same grant set, so the host side can keep one clone to
/// record answers while the dispatcher owns another.
#[derive(Debug, Clone)]
pub struct HostResolver {
    granted: Arc<RwLock<HashSet<Permission>>>,
    prompts: mpsc::UnboundedSender<PermissionPrompt>,
}

impl HostResolver {
    /// Create a resolver and the receiving end of its prompt channel
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PermissionPrompt>) {
        let (prompts, rx) = mpsc::unbounded_channel();
        let resolver = Self {
            granted: Arc::new(RwLock::new(HashSet::new())),
            prompts,
        };
        (resolver, rx)
    }

    /// Mark `permission` as granted
    pub fn grant(&self, permission: Permission) {
        tracing::info!("Permission granted: {}", permission);
        self.write_granted().insert(permission);
    }

    /// Mark `permission` as not granted
    pub fn revoke(&self, permission: Permission) {
        tracing::info!("Permission revoked: {}", permission);
        self.write_granted().remove(&permission);
    }

    /// Record the user's answer to `prompt` and build the matching result
    pub fn answer(&self, prompt: PermissionPrompt, granted: bool) -> GrantResult {
        let code = if granted {
            self.grant(prompt.permission);
            PERMISSION_GRANTED
        } else {
            self.revoke(prompt.permission);
            PERMISSION_DENIED
        };
        GrantResult::new(
            prompt.token,
            vec![prompt.permission.as_str().to_string()],
            vec![code],
        )
    }

    fn write_granted(&self) -> std::sync::RwLockWriteGuard<'_, HashSet<Permission>> {
        self.granted.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl PermissionResolver for HostResolver {
    fn has_permission(&self, permission: Permission) -> bool {
        self.granted
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&permission)
    }

    fn request_permissions(
        &self,
        permission: Permission,
        token: RequestToken,
    ) -> Result<(), PermissionError> {
        tracing::debug!("Requesting {} (token {})", permission, token);
        self.prompts
            .send(PermissionPrompt { permission, token })
            .map_err(|_| PermissionError::HostUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_names() {
        assert_eq!(Permission::ReadSms.as_str(), "android.permission.READ_SMS");
        assert_eq!(
            Permission::from_name("android.permission.SEND_SMS"),
            Some(Permission::SendSms)
        );
        assert_eq!(Permission::from_name("SEND_SMS"), None);
    }

    #[test]
    fn test_grant_and_revoke() {
        let (resolver, _rx) = HostResolver::new();
        assert!(!resolver.has_permission(Permission::ReadSms));

        resolver.grant(Permission::ReadSms);
        assert!(resolver.has_permission(Permission::ReadSms));
        assert!(!resolver.has_permission(Permission::SendSms));

        resolver.revoke(Permission::ReadSms);
        assert!(!resolver.has_permission(Permission::ReadSms));
    }

    #[test]
    fn test_clones_share_grants() {
        let (resolver, _rx) = HostResolver::new();
        let host_side = resolver.clone();
        host_side.grant(Permission::SendSms);
        assert!(resolver.has_permission(Permission::SendSms));
    }

    #[test]
    fn test_request_forwards_prompt() {
        let (resolver, mut rx) = HostResolver::new();
        resolver.request_permissions(Permission::SendSms, 9).unwrap();

        let prompt = rx.try_recv().unwrap();
        assert_eq!(prompt.permission, Permission::SendSms);
        assert_eq!(prompt.token, 9);
    }

    #[test]
    fn test_request_without_host() {
        let (resolver, rx) = HostResolver::new();
        drop(rx);

        let err = resolver
            .request_permissions(Permission::ReadSms, 1)
            .unwrap_err();
        assert!(matches!(err, PermissionError::HostUnavailable));
    }

    #[test]
    fn test_answer_builds_result() {
        let (resolver, _rx) = HostResolver::new();
        let prompt = PermissionPrompt {
            permission: Permission::ReadSms,
            token: 3,
        };

        let result = resolver.answer(prompt, true);
        assert_eq!(result.token, 3);
        assert_eq!(result.permissions, vec!["android.permission.READ_SMS"]);
        assert_eq!(result.results, vec![PERMISSION_GRANTED]);
        assert!(resolver.has_permission(Permission::ReadSms));

        let result = resolver.answer(prompt, false);
        assert_eq!(result.results, vec![PERMISSION_DENIED]);
        assert!(!resolver.has_permission(Permission::ReadSms));
    }
}
