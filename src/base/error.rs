//! Error types for the bridge.
//!
//! The faithful read and write operations never fail. Errors only surface
//! from the opt-in checked contract ([`CookieBridge::write_verified`]) and
//! from configuration loading.
//!
//! [`CookieBridge::write_verified`]: crate::bridge::CookieBridge::write_verified

use std::fmt;
use thiserror::Error;

/// Why the store did not honour a verified write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A non-expiring write was not visible on the next read.
    NotVisible,
    /// An expiring write (deletion) left the value visible.
    StillPresent,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotVisible => f.write_str("cookie not visible after write"),
            RejectReason::StillPresent => f.write_str("cookie still present after expiring write"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Cookie `{name}` rejected by store: {reason}")]
    Rejected { name: String, reason: RejectReason },
    #[error("Invalid bridge configuration: {0}")]
    InvalidConfig(String),
}

impl BridgeError {
    pub fn rejected(name: impl Into<String>, reason: RejectReason) -> Self {
        BridgeError::Rejected {
            name: name.into(),
            reason,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        BridgeError::InvalidConfig(message.into())
    }

    /// Returns true if the error came from the platform store rather than the caller.
    pub fn is_rejection(&self) -> bool {
        matches!(self, BridgeError::Rejected { .. })
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::invalid_config(err.to_string())
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let err = BridgeError::rejected("session", RejectReason::NotVisible);
        assert_eq!(
            err.to_string(),
            "Cookie `session` rejected by store: cookie not visible after write"
        );
        assert!(err.is_rejection());
    }

    #[test]
    fn test_json_error_maps_to_invalid_config() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err = BridgeError::from(parse.unwrap_err());
        assert!(matches!(err, BridgeError::InvalidConfig(_)));
        assert!(!err.is_rejection());
    }
}
