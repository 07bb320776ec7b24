//! Bridge configuration.

use crate::base::error::BridgeResult;
use serde::{Deserialize, Serialize};

/// Order in which a keyed read returns duplicate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadOrder {
    /// Left to right, as the values appear in the cookie header.
    #[default]
    Appearance,
    /// Right to left. Matches bindings that accumulated matches by prepending.
    Reversed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub read_order: ReadOrder,
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_order(mut self, order: ReadOrder) -> Self {
        self.read_order = order;
        self
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use cookiebridge::base::config::{BridgeConfig, ReadOrder};
    ///
    /// let config = BridgeConfig::from_json(r#"{"read_order":"reversed"}"#)?;
    /// assert_eq!(config.read_order, ReadOrder::Reversed);
    /// # Ok::<(), cookiebridge::base::error::BridgeError>(())
    /// ```
    pub fn from_json(json: &str) -> BridgeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> BridgeResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = BridgeConfig::from_json("{}").unwrap();
        assert_eq!(config, BridgeConfig::default());
        assert_eq!(config.read_order, ReadOrder::Appearance);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BridgeConfig::new().read_order(ReadOrder::Reversed);
        let json = config.to_json().unwrap();
        assert_eq!(json, r#"{"read_order":"reversed"}"#);
        assert_eq!(BridgeConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_unknown_order_is_rejected() {
        assert!(BridgeConfig::from_json(r#"{"read_order":"sideways"}"#).is_err());
    }
}
