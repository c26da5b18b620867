//! SMS actions the host can request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::permissions::Permission;

/// An operation requested by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmsAction {
    GetInbox,
    GetSent,
    GetDraft,
    GetConversations,
    SendSms,
    SendMultipartSms,
    SendSmsIntent,
    /// Anything the host sent that we don't recognize
    NoSuchMethod,
}

impl SmsAction {
    /// Every recognized action, in method-channel order.
    pub const ALL: [SmsAction; 7] = [
        SmsAction::GetInbox,
        SmsAction::GetSent,
        SmsAction::GetDraft,
        SmsAction::GetConversations,
        SmsAction::SendSms,
        SmsAction::SendMultipartSms,
        SmsAction::SendSmsIntent,
    ];

    /// Map a method-channel name to an action.
    ///
    /// Unrecognized names map to [`SmsAction::NoSuchMethod`] rather than
    /// failing, so the dispatcher can treat them as a no-op.
    pub fn from_method(name: &str) -> Self {
        match name {
            "getInbox" => SmsAction::GetInbox,
            "getSent" => SmsAction::GetSent,
            "getDraft" => SmsAction::GetDraft,
            "getConversations" => SmsAction::GetConversations,
            "sendSms" => SmsAction::SendSms,
            "sendMultipartSms" => SmsAction::SendMultipartSms,
            "sendSmsIntent" => SmsAction::SendSmsIntent,
            _ => SmsAction::NoSuchMethod,
        }
    }

    /// The method-channel name for this action.
    pub fn method_name(&self) -> &'static str {
        match self {
            SmsAction::GetInbox => "getInbox",
            SmsAction::GetSent => "getSent",
            SmsAction::GetDraft => "getDraft",
            SmsAction::GetConversations => "getConversations",
            SmsAction::SendSms => "sendSms",
            SmsAction::SendMultipartSms => "sendMultipartSms",
            SmsAction::SendSmsIntent => "sendSmsIntent",
            SmsAction::NoSuchMethod => "noSuchMethod",
        }
    }

    /// The runtime permission this action needs, if any.
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            SmsAction::GetInbox
            | SmsAction::GetSent
            | SmsAction::GetDraft
            | SmsAction::GetConversations => Some(Permission::ReadSms),
            SmsAction::SendSms | SmsAction::SendMultipartSms | SmsAction::SendSmsIntent => {
                Some(Permission::SendSms)
            }
            SmsAction::NoSuchMethod => None,
        }
    }

    pub fn is_read(&self) -> bool {
        self.required_permission() == Some(Permission::ReadSms)
    }

    pub fn is_send(&self) -> bool {
        self.required_permission() == Some(Permission::SendSms)
    }
}

impl FromStr for SmsAction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_method(s))
    }
}

impl fmt::Display for SmsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}
