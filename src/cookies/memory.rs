//! In-memory cookie store with browser semantics.
//!
//! Stands in for `document.cookie` on native targets and in tests. The store
//! belongs to one document (host + path) and behaves like the browser does
//! for that document:
//!
//! - a write replaces the cookie with the same name, domain and path, and
//!   leaves every other cookie alone
//! - an expiry at or before the time of the write deletes the cookie
//! - directives the browser would refuse are dropped without a signal:
//!   unparsable input, `secure` from an insecure origin, a domain that is a
//!   public suffix or does not cover the host, and oversized cookies
//! - reads list only unexpired cookies whose path covers the document path,
//!   longest path first, then in order of creation

use crate::cookies::directive;
use crate::cookies::header::SEPARATOR;
use crate::cookies::store::CookieStore;
use cookie::Cookie;
use psl::{List, Psl};
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;

/// Maximum combined size of name and value in bytes.
const MAX_COOKIE_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredCookie {
    name: String,
    value: String,
    /// `None` for host-only cookies.
    domain: Option<String>,
    path: String,
    expiration_time: Option<OffsetDateTime>,
}

impl StoredCookie {
    fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expiration_time.is_some_and(|expiry| expiry <= now)
    }

    fn same_identity(&self, other: &StoredCookie) -> bool {
        self.name == other.name && self.domain == other.domain && self.path == other.path
    }
}

pub struct MemoryCookieStore {
    host: String,
    document_path: String,
    secure_origin: bool,
    cookies: Mutex<Vec<StoredCookie>>,
}

impl Default for MemoryCookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCookieStore {
    /// A store for `https://localhost/`.
    pub fn new() -> Self {
        Self::for_document("localhost", "/")
    }

    /// A store for the document at `host` and `path`, served over a secure origin.
    pub fn for_document(host: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            host: host.into().to_lowercase(),
            document_path: if path.starts_with('/') {
                path
            } else {
                "/".to_string()
            },
            secure_origin: true,
            cookies: Mutex::new(Vec::new()),
        }
    }

    /// Whether the document was served over a secure origin. Insecure
    /// documents cannot set `secure` cookies.
    pub fn secure_origin(mut self, secure: bool) -> Self {
        self.secure_origin = secure;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn document_path(&self) -> &str {
        &self.document_path
    }

    /// Number of unexpired cookies, including ones hidden from this document's path.
    pub fn len(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        self.lock().iter().filter(|c| !c.is_expired(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StoredCookie>> {
        self.cookies.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Turn a directive into a cookie, or `None` if the browser would drop it.
    fn accept(&self, directive: &str, now: OffsetDateTime) -> Option<StoredCookie> {
        let parsed = match Cookie::parse(directive) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(error = %err, "dropping unparsable cookie directive");
                return None;
            }
        };

        if parsed.name().len() + parsed.value().len() > MAX_COOKIE_SIZE {
            tracing::debug!(name = %parsed.name(), "dropping oversized cookie");
            return None;
        }

        if parsed.secure().unwrap_or(false) && !self.secure_origin {
            tracing::debug!(name = %parsed.name(), "dropping secure cookie from insecure origin");
            return None;
        }

        let domain = match parsed.domain() {
            Some(domain) => {
                let domain = domain.trim_start_matches('.').to_lowercase();
                if !domain_accepts(&domain, &self.host) {
                    tracing::debug!(name = %parsed.name(), domain = %domain, "dropping cookie for foreign domain");
                    return None;
                }
                Some(domain)
            }
            None => None,
        };

        let path = match parsed.path() {
            Some(path) if path.starts_with('/') => path.to_string(),
            _ => default_path(&self.document_path).to_string(),
        };

        Some(StoredCookie {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path,
            expiration_time: directive::expiration_time(directive, now),
        })
    }
}

impl CookieStore for MemoryCookieStore {
    fn read(&self) -> String {
        let now = OffsetDateTime::now_utc();
        let cookies = self.lock();

        let mut visible: Vec<&StoredCookie> = cookies
            .iter()
            .filter(|c| !c.is_expired(now) && path_matches(&c.path, &self.document_path))
            .collect();
        visible.sort_by(|a, b| b.path.len().cmp(&a.path.len()));

        visible
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    fn write(&self, directive: &str) {
        let now = OffsetDateTime::now_utc();
        let Some(cookie) = self.accept(directive, now) else {
            return;
        };

        let mut cookies = self.lock();
        let existing = cookies.iter().position(|c| c.same_identity(&cookie));

        if cookie.is_expired(now) {
            if let Some(idx) = existing {
                cookies.remove(idx);
            }
            tracing::debug!(name = %cookie.name, removed = existing.is_some(), "cookie expired on write");
            return;
        }

        // Replacing keeps the original position, so creation order is stable.
        match existing {
            Some(idx) => cookies[idx] = cookie,
            None => cookies.push(cookie),
        }
    }
}

fn is_public_suffix(domain: &str) -> bool {
    List.suffix(domain.as_bytes())
        .is_some_and(|suffix| suffix.as_bytes() == domain.as_bytes())
}

/// A `Domain` attribute is accepted if it is the host itself, or a parent of
/// the host that is not a public suffix.
fn domain_accepts(domain: &str, host: &str) -> bool {
    if domain == host {
        return true;
    }
    if domain.is_empty() || is_public_suffix(domain) {
        return false;
    }
    host.strip_suffix(domain)
        .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Directory of the document path, per RFC 6265 section 5.1.4.
fn default_path(document_path: &str) -> &str {
    match document_path.rfind('/') {
        Some(0) | None => "/",
        Some(idx) => &document_path[..idx],
    }
}

/// RFC 6265 path matching.
fn path_matches(cookie_path: &str, request_path: &str) -> bool {
    if cookie_path == request_path {
        return true;
    }
    match request_path.strip_prefix(cookie_path) {
        Some(rest) => cookie_path.ends_with('/') || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        assert_eq!(default_path("/"), "/");
        assert_eq!(default_path("/index.html"), "/");
        assert_eq!(default_path("/app/page"), "/app");
        assert_eq!(default_path("/app/sub/"), "/app/sub");
    }

    #[test]
    fn test_path_matches() {
        assert!(path_matches("/", "/anything"));
        assert!(path_matches("/app", "/app"));
        assert!(path_matches("/app", "/app/page"));
        assert!(path_matches("/app/", "/app/page"));
        assert!(!path_matches("/app", "/application"));
        assert!(!path_matches("/app/page", "/app"));
    }

    #[test]
    fn test_domain_accepts() {
        assert!(domain_accepts("example.com", "example.com"));
        assert!(domain_accepts("example.com", "www.example.com"));
        assert!(!domain_accepts("ample.com", "www.example.com"));
        assert!(!domain_accepts("other.com", "example.com"));
        assert!(!domain_accepts("com", "example.com"));
        assert!(!domain_accepts("co.uk", "shop.example.co.uk"));
    }

    #[test]
    fn test_host_is_its_own_domain_even_when_suffix() {
        assert!(domain_accepts("localhost", "localhost"));
    }

    #[test]
    fn test_for_document_normalizes() {
        let store = MemoryCookieStore::for_document("Example.COM", "relative");
        assert_eq!(store.host(), "example.com");
        assert_eq!(store.document_path(), "/");
    }

    #[test]
    fn test_replacement_keeps_position() {
        let store = MemoryCookieStore::new();
        store.write("a=1");
        store.write("b=2");
        store.write("a=3");
        assert_eq!(store.read(), "a=3; b=2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear() {
        let store = MemoryCookieStore::new();
        store.write("a=1");
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.read(), "");
    }
}
