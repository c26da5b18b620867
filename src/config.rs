//! Dispatcher configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::permissions::RequestToken;

/// First SDK level that enforces runtime permissions (Android 6.0).
pub const RUNTIME_PERMISSIONS_SDK: u32 = 23;

/// Environment variable that overrides [`DispatcherConfig::sdk_version`].
pub const SDK_VERSION_ENV: &str = "SMS_GATE_SDK_VERSION";

/// What to do when an action needs a prompt while another one is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingPolicy {
    /// Replace the parked action with the new one
    #[default]
    LastWriteWins,
    /// Refuse the new action and leave the parked one alone
    RejectWhilePending,
}

/// Configuration for an [`ActionDispatcher`](crate::ActionDispatcher)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Token attached to every permission request this dispatcher issues
    pub request_code: RequestToken,
    /// SDK level of the platform we're running on
    pub sdk_version: u32,
    pub pending_policy: PendingPolicy,
}

impl DispatcherConfig {
    /// Create a config with the given request token
    pub fn new(request_code: RequestToken) -> Self {
        Self {
            request_code,
            ..Self::default()
        }
    }

    pub fn with_sdk_version(mut self, sdk_version: u32) -> Self {
        self.sdk_version = sdk_version;
        self
    }

    pub fn with_pending_policy(mut self, policy: PendingPolicy) -> Self {
        self.pending_policy = policy;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply the `SMS_GATE_SDK_VERSION` override, if set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        match std::env::var(SDK_VERSION_ENV) {
            Ok(value) => self.with_sdk_override(&value),
            Err(_) => Ok(self),
        }
    }

    fn with_sdk_override(self, value: &str) -> Result<Self, ConfigError> {
        let sdk = value
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidEnv {
                key: SDK_VERSION_ENV,
                value: value.to_string(),
            })?;
        Ok(self.with_sdk_version(sdk))
    }

    /// Whether the platform checks permissions at runtime.
    ///
    /// Below [`RUNTIME_PERMISSIONS_SDK`] permissions are granted at install
    /// time, so actions can run without asking.
    pub fn runtime_permissions(&self) -> bool {
        self.sdk_version >= RUNTIME_PERMISSIONS_SDK
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            request_code: 1,
            sdk_version: RUNTIME_PERMISSIONS_SDK,
            pending_policy: PendingPolicy::default(),
        }
    }
}
