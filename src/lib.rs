//! # cookiebridge
//!
//! Async access to the browser cookie store.
//!
//! `cookiebridge` exposes `document.cookie` to an async host as two kinds of
//! deferred, always-successful operations: read the cookie header (whole, or
//! the values under one key) and write a single cookie, either from
//! structured options or as a pre-built directive.
//!
//! The store is injected, never global. Browser builds use
//! `DocumentCookieStore`; native builds and tests use
//! [`MemoryCookieStore`](cookies::memory::MemoryCookieStore), which follows
//! the browser's rules for replacing, expiring and refusing cookies.
//!
//! ## Quick Start
//!
//! ```rust
//! use cookiebridge::bridge::CookieBridge;
//! use cookiebridge::cookies::memory::MemoryCookieStore;
//! use cookiebridge::cookies::options::CookieWriteOptions;
//!
//! # futures::executor::block_on(async {
//! let bridge = CookieBridge::new(MemoryCookieStore::for_document("example.com", "/"));
//!
//! let options = CookieWriteOptions::new().path("/").max_age(3600);
//! bridge.write(&options, "theme", "dark").await;
//!
//! assert_eq!(bridge.read("theme").await, vec!["dark"]);
//! # });
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Errors and configuration
//! - [`bridge`] - The async [`CookieBridge`](bridge::CookieBridge)
//! - [`cookies`] - Directive assembly, header parsing, stores
//! - `wasm` - Promise-returning JavaScript exports (wasm32 only)

pub mod base;
pub mod bridge;
pub mod cookies;
#[cfg(target_arch = "wasm32")]
pub mod wasm;
