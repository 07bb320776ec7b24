//! JavaScript exports for browser builds.
//!
//! Every export returns a `Promise` that resolves exactly once and never
//! rejects, so a host effect runtime can sequence cookie access like any
//! other async effect.
//!
//! ```js
//! import { CookieOptions, readCookie, writeCookie } from "cookiebridge";
//!
//! const options = new CookieOptions();
//! options.setPath("/");
//! await writeCookie(options, "session", "abc 123");
//! const values = await readCookie("session"); // ["abc%20123"]
//! ```

use crate::bridge::CookieBridge;
use crate::cookies::document::DocumentCookieStore;
use crate::cookies::options::CookieWriteOptions;
use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Attributes for `writeCookie`.
#[wasm_bindgen(js_name = CookieOptions)]
#[derive(Debug, Clone, Default)]
pub struct JsCookieOptions {
    inner: CookieWriteOptions,
}

#[wasm_bindgen(js_class = CookieOptions)]
impl JsCookieOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(js_name = setPath)]
    pub fn set_path(&mut self, path: String) {
        self.inner.path = Some(path);
    }

    #[wasm_bindgen(js_name = setDomain)]
    pub fn set_domain(&mut self, domain: String) {
        self.inner.domain = Some(domain);
    }

    /// Literal expiration date. Replaces a max-age.
    #[wasm_bindgen(js_name = setExpires)]
    pub fn set_expires(&mut self, date: String) {
        self.inner = std::mem::take(&mut self.inner).expires(date);
    }

    /// Seconds until expiry, fractions truncated. Replaces a literal date.
    /// NaN and infinities are ignored.
    #[wasm_bindgen(js_name = setMaxAge)]
    pub fn set_max_age(&mut self, seconds: f64) {
        self.inner = std::mem::take(&mut self.inner).max_age_secs_f64(seconds);
    }

    #[wasm_bindgen(js_name = setSecure)]
    pub fn set_secure(&mut self, secure: bool) {
        self.inner.secure = secure;
    }
}

fn bridge() -> CookieBridge<DocumentCookieStore> {
    CookieBridge::new(DocumentCookieStore::new())
}

/// Resolves with the raw `document.cookie` string.
#[wasm_bindgen(js_name = readCookies)]
pub fn read_cookies() -> Promise {
    future_to_promise(async move {
        let raw = bridge().read_all().await;
        Ok(JsValue::from_str(&raw))
    })
}

/// Resolves with every raw value stored under `key`, possibly none.
#[wasm_bindgen(js_name = readCookie)]
pub fn read_cookie(key: String) -> Promise {
    future_to_promise(async move {
        let values: Array = bridge()
            .read(&key)
            .await
            .into_iter()
            .map(JsValue::from)
            .collect();
        Ok(values.into())
    })
}

/// Writes one cookie with a percent-encoded value.
#[wasm_bindgen(js_name = writeCookie)]
pub fn write_cookie(options: &JsCookieOptions, key: String, value: String) -> Promise {
    let options = options.inner.clone();
    future_to_promise(async move {
        bridge().write(&options, &key, &value).await;
        Ok(JsValue::UNDEFINED)
    })
}

/// Writes a pre-assembled cookie directive verbatim.
#[wasm_bindgen(js_name = writeRawCookie)]
pub fn write_raw_cookie(directive: String) -> Promise {
    future_to_promise(async move {
        bridge().write_raw(&directive).await;
        Ok(JsValue::UNDEFINED)
    })
}
