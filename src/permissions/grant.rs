//! Grant results delivered by the platform

use serde::{Deserialize, Serialize};

use super::resolver::RequestToken;

/// Platform code for a granted permission
pub const PERMISSION_GRANTED: i32 = 0;
/// Platform code for a denied permission
pub const PERMISSION_DENIED: i32 = -1;

/// Outcome for a single permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrantOutcome {
    Granted,
    Denied,
}

impl GrantOutcome {
    /// Classify a platform result code. Anything but an explicit grant is a denial.
    pub fn from_code(code: i32) -> Self {
        if code == PERMISSION_GRANTED {
            GrantOutcome::Granted
        } else {
            GrantOutcome::Denied
        }
    }
}

/// The platform's answer to a permission request
///
/// `results[i]` is the outcome for `permissions[i]`; the two vectors are
/// order-correlated and must not be reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantResult {
    pub token: RequestToken,
    pub permissions: Vec<String>,
    pub results: Vec<i32>,
}

impl GrantResult {
    pub fn new(token: RequestToken, permissions: Vec<String>, results: Vec<i32>) -> Self {
        Self {
            token,
            permissions,
            results,
        }
    }

    pub fn summarize(&self) -> GrantSummary {
        GrantSummary::fold(&self.permissions, &self.results)
    }
}

/// Folded view of a [`GrantResult`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantSummary {
    pub all_granted: bool,
    /// Names of denied permissions, in request order
    pub denied: Vec<String>,
}

impl GrantSummary {
    /// Fold results pairwise with the permission names they answer.
    ///
    /// An empty result set means the prompt was interrupted before the user
    /// answered, so every requested permission counts as denied. A
    /// permission with no matching result is denied as well.
    pub fn fold<S: AsRef<str>>(permissions: &[S], results: &[i32]) -> Self {
        if results.is_empty() {
            return Self {
                all_granted: false,
                denied: permissions.iter().map(|p| p.as_ref().to_string()).collect(),
            };
        }

        let len = permissions.len().max(results.len());
        let mut denied = Vec::new();
        let all_granted = (0..len).fold(true, |acc, i| {
            let outcome = results
                .get(i)
                .map_or(GrantOutcome::Denied, |code| GrantOutcome::from_code(*code));
            if outcome == GrantOutcome::Denied {
                if let Some(name) = permissions.get(i) {
                    denied.push(name.as_ref().to_string());
                }
            }
            acc && outcome == GrantOutcome::Granted
        });

        Self {
            all_granted,
            denied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_granted() {
        let summary = GrantSummary::fold(&["READ_SMS", "SEND_SMS"], &[0, 0]);
        assert!(summary.all_granted);
        assert!(summary.denied.is_empty());
    }

    #[test]
    fn test_partial_denial_keeps_order() {
        let summary = GrantSummary::fold(&["A", "B", "C"], &[-1, 0, -1]);
        assert!(!summary.all_granted);
        assert_eq!(summary.denied, vec!["A", "C"]);
    }

    #[test]
    fn test_unknown_code_is_denied() {
        let summary = GrantSummary::fold(&["SEND_SMS"], &[2]);
        assert!(!summary.all_granted);
        assert_eq!(summary.denied, vec!["SEND_SMS"]);
    }

    #[test]
    fn test_empty_results_is_interrupted() {
        let summary = GrantSummary::fold(&["SEND_SMS"], &[]);
        assert!(!summary.all_granted);
        assert_eq!(summary.denied, vec!["SEND_SMS"]);

        let summary = GrantSummary::fold::<&str>(&[], &[]);
        assert!(!summary.all_granted);
    }

    #[test]
    fn test_missing_result_is_denied() {
        let summary = GrantSummary::fold(&["READ_SMS", "SEND_SMS"], &[0]);
        assert!(!summary.all_granted);
        assert_eq!(summary.denied, vec!["SEND_SMS"]);
    }

    #[test]
    fn test_summarize() {
        let result = GrantResult::new(1, vec!["SEND_SMS".to_string()], vec![PERMISSION_DENIED]);
        assert_eq!(result.summarize().denied, vec!["SEND_SMS"]);
    }
}
