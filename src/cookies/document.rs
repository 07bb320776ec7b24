//! `document.cookie` backed store for wasm32 browser builds.

use crate::cookies::store::CookieStore;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// The current browsing context's cookie store.
///
/// Holds no handle: the document is looked up on every call, so the store is
/// `Send + Sync` and sees whatever document is current.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookieStore;

impl DocumentCookieStore {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<HtmlDocument> {
        window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }
}

impl CookieStore for DocumentCookieStore {
    fn read(&self) -> String {
        let Some(document) = Self::document() else {
            tracing::warn!("no HTML document available, reading empty cookie header");
            return String::new();
        };

        document.cookie().unwrap_or_else(|err| {
            tracing::warn!(error = ?err, "document.cookie read failed");
            String::new()
        })
    }

    fn write(&self, directive: &str) {
        let Some(document) = Self::document() else {
            tracing::warn!("no HTML document available, dropping cookie write");
            return;
        };

        if let Err(err) = document.set_cookie(directive) {
            tracing::warn!(error = ?err, "document.cookie write failed");
        }
    }
}
