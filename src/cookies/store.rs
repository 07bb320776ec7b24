//! The platform cookie store capability.
//!
//! The bridge never touches a global: it is handed a [`CookieStore`] that
//! owns the real cookie state. In a browser that is
//! [`DocumentCookieStore`](crate::cookies::document::DocumentCookieStore);
//! in tests and on native targets it is
//! [`MemoryCookieStore`](crate::cookies::memory::MemoryCookieStore).

use std::sync::Arc;

/// Read and write access to an ambient cookie store.
///
/// Both operations are infallible from the caller's point of view. A store
/// that refuses a directive drops it silently, the way `document.cookie` does.
pub trait CookieStore: Send + Sync {
    /// Snapshot of the cookie header string: visible `name=value` pairs joined by `"; "`.
    fn read(&self) -> String;

    /// Hand one cookie directive to the store.
    fn write(&self, directive: &str);
}

impl<S: CookieStore + ?Sized> CookieStore for Arc<S> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, directive: &str) {
        (**self).write(directive)
    }
}

impl<S: CookieStore + ?Sized> CookieStore for Box<S> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, directive: &str) {
        (**self).write(directive)
    }
}
