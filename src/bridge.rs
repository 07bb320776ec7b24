//! The cookie bridge.
//!
//! [`CookieBridge`] exposes the cookie store to an async host as deferred,
//! one-shot operations. Each `async fn` does nothing until first polled; it
//! then performs one synchronous store call and resolves immediately with
//! its result. There are no suspension points and nothing to cancel.
//!
//! # Example
//!
//! ```rust
//! use cookiebridge::bridge::CookieBridge;
//! use cookiebridge::cookies::memory::MemoryCookieStore;
//! use cookiebridge::cookies::options::CookieWriteOptions;
//!
//! # futures::executor::block_on(async {
//! let bridge = CookieBridge::new(MemoryCookieStore::new());
//!
//! bridge.write(&CookieWriteOptions::new().path("/"), "session", "abc 123").await;
//!
//! assert_eq!(bridge.read_all().await, "session=abc%20123");
//! assert_eq!(bridge.read_decoded("session").await, vec!["abc 123"]);
//! # });
//! ```

use crate::base::config::{BridgeConfig, ReadOrder};
use crate::base::error::{BridgeError, BridgeResult, RejectReason};
use crate::cookies::directive;
use crate::cookies::header::{self, CookieEntry};
use crate::cookies::options::CookieWriteOptions;
use crate::cookies::store::CookieStore;
use std::sync::Arc;
use time::OffsetDateTime;

/// Result of a keyed [`CookieBridge::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Vec<String>),
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// The raw values, empty when nothing was found.
    pub fn into_values(self) -> Vec<String> {
        match self {
            Lookup::Found(values) => values,
            Lookup::NotFound => Vec::new(),
        }
    }
}

impl From<Vec<String>> for Lookup {
    fn from(values: Vec<String>) -> Self {
        if values.is_empty() {
            Lookup::NotFound
        } else {
            Lookup::Found(values)
        }
    }
}

/// Async access to one cookie store.
///
/// Cloning is cheap; clones share the store.
pub struct CookieBridge<S> {
    store: Arc<S>,
    config: BridgeConfig,
}

impl<S> Clone for CookieBridge<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S: CookieStore> CookieBridge<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, BridgeConfig::default())
    }

    pub fn with_config(store: S, config: BridgeConfig) -> Self {
        Self::from_shared(Arc::new(store), config)
    }

    /// Build a bridge over a store that is also held elsewhere.
    pub fn from_shared(store: Arc<S>, config: BridgeConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// The raw cookie header string, verbatim. Empty when there are no cookies.
    pub async fn read_all(&self) -> String {
        let raw = self.store.read();
        tracing::debug!(len = raw.len(), "read cookie header");
        raw
    }

    /// Raw values stored under `key`, in the configured [`ReadOrder`].
    ///
    /// Returns an empty vec when `key` is absent.
    pub async fn read(&self, key: &str) -> Vec<String> {
        let values = header::values_for(&self.store.read(), key, self.config.read_order);
        tracing::debug!(key = %key, count = values.len(), "keyed cookie read");
        values
    }

    /// Like [`read`](Self::read), with each value percent-decoded.
    pub async fn read_decoded(&self, key: &str) -> Vec<String> {
        self.read(key)
            .await
            .iter()
            .map(|value| directive::decode_value(value))
            .collect()
    }

    /// Every visible cookie, in header order.
    pub async fn entries(&self) -> Vec<CookieEntry> {
        header::parse(&self.store.read())
    }

    /// Keyed read that distinguishes a missing cookie from an empty one.
    pub async fn lookup(&self, key: &str) -> Lookup {
        Lookup::from(self.read(key).await)
    }

    /// Write one cookie. `value` is percent-encoded; attributes come from `options`.
    ///
    /// Always succeeds. A store that refuses the directive drops it silently;
    /// use [`write_verified`](Self::write_verified) to detect that.
    pub async fn write(&self, options: &CookieWriteOptions, key: &str, value: &str) {
        let directive = directive::build(options, key, value, OffsetDateTime::now_utc());
        self.write_raw(&directive).await;
    }

    /// Hand a pre-assembled directive to the store verbatim.
    pub async fn write_raw(&self, directive: &str) {
        tracing::debug!(len = directive.len(), "writing cookie directive");
        self.store.write(directive);
    }

    /// Write one cookie, then read back to check the store kept it.
    ///
    /// A write that expires immediately is a deletion: it must change the
    /// values visible under `key`, unless there were none to begin with. Any
    /// other write must leave the encoded value visible to this document; a
    /// cookie scoped to a path that does not cover the document reports as
    /// rejected.
    pub async fn write_verified(
        &self,
        options: &CookieWriteOptions,
        key: &str,
        value: &str,
    ) -> BridgeResult<()> {
        let before = header::values_for(&self.store.read(), key, ReadOrder::Appearance);

        let now = OffsetDateTime::now_utc();
        let directive = directive::build(options, key, value, now);
        self.write_raw(&directive).await;

        let after = header::values_for(&self.store.read(), key, ReadOrder::Appearance);
        let expiring = directive::expiration_time(&directive, now).is_some_and(|at| at <= now);

        let reason = if expiring {
            if after.is_empty() || after != before {
                return Ok(());
            }
            RejectReason::StillPresent
        } else {
            let encoded = directive::encode_value(value);
            if after.iter().any(|stored| *stored == encoded) {
                return Ok(());
            }
            RejectReason::NotVisible
        };

        tracing::warn!(key = %key, %reason, "cookie write not honoured by store");
        Err(BridgeError::rejected(key, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::memory::MemoryCookieStore;

    #[tokio::test]
    async fn test_read_all_on_empty_store() {
        let bridge = CookieBridge::new(MemoryCookieStore::new());
        assert_eq!(bridge.read_all().await, "");
    }

    #[tokio::test]
    async fn test_session_scenario() {
        let bridge = CookieBridge::new(MemoryCookieStore::new());
        let options = CookieWriteOptions::new().path("/").secure(false);

        bridge.write(&options, "session", "abc 123").await;

        assert_eq!(bridge.read("session").await, vec!["abc%20123"]);
        assert_eq!(bridge.read_decoded("session").await, vec!["abc 123"]);
    }

    #[tokio::test]
    async fn test_lookup() {
        let bridge = CookieBridge::new(MemoryCookieStore::new());
        bridge.write_raw("flag=").await;

        assert_eq!(bridge.lookup("flag").await, Lookup::Found(vec![String::new()]));
        assert_eq!(bridge.lookup("missing").await, Lookup::NotFound);
        assert!(bridge.lookup("missing").await.into_values().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let bridge = CookieBridge::new(MemoryCookieStore::new());
        let other = bridge.clone();

        other.write(&CookieWriteOptions::default(), "a", "1").await;

        assert_eq!(bridge.read("a").await, vec!["1"]);
        assert_eq!(bridge.store().len(), 1);
    }

    #[test]
    fn test_lookup_from_values() {
        assert_eq!(Lookup::from(Vec::new()), Lookup::NotFound);
        assert!(Lookup::from(vec!["x".to_string()]).is_found());
    }
}
