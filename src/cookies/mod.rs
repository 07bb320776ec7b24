//! Cookie directives, header parsing and the platform store.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`options`] | [`CookieWriteOptions`](options::CookieWriteOptions) and [`Expiry`](options::Expiry) |
//! | [`directive`] | Assembling `name=value;attr=...` strings, value encoding, cookie dates |
//! | [`header`] | Splitting the `"; "`-joined header string into entries |
//! | [`store`] | The [`CookieStore`](store::CookieStore) capability |
//! | [`memory`] | In-memory store with browser semantics |
//! | `document` | `document.cookie` store (wasm32 only) |
//!
//! # Building a directive
//!
//! ```rust
//! use cookiebridge::cookies::directive;
//! use cookiebridge::cookies::options::CookieWriteOptions;
//! use time::OffsetDateTime;
//!
//! let options = CookieWriteOptions::new()
//!     .path("/")
//!     .domain("example.com")
//!     .secure(true);
//! let line = directive::build(&options, "theme", "dark mode", OffsetDateTime::now_utc());
//! assert_eq!(line, "theme=dark%20mode;path=/;domain=example.com;secure");
//! ```
//!
//! # Reading the header
//!
//! ```rust
//! use cookiebridge::base::config::ReadOrder;
//! use cookiebridge::cookies::header;
//!
//! let values = header::values_for("a=1; b=2; a=3", "a", ReadOrder::Appearance);
//! assert_eq!(values, vec!["1", "3"]);
//! ```

pub mod directive;
#[cfg(target_arch = "wasm32")]
pub mod document;
pub mod header;
pub mod memory;
pub mod options;
pub mod store;
