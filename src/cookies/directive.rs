//! Cookie directive assembly.
//!
//! A directive is the single `name=value[;attr=val]...` string handed to the
//! platform store in one write. Attributes are always emitted in the order
//! `path`, `domain`, `expires`, `secure` so output is deterministic.

use crate::cookies::options::{CookieWriteOptions, Expiry};
use cookie::Cookie;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

/// Characters left unescaped in a value: ASCII alphanumerics and `-_.!~*'()`.
const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a cookie value so it cannot break the directive grammar.
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, VALUE_ENCODE_SET).to_string()
}

/// Reverse [`encode_value`]. Invalid UTF-8 sequences are replaced.
pub fn decode_value(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Render an instant as a cookie date, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
pub fn format_expires(when: OffsetDateTime) -> String {
    let format = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    when.to_offset(UtcOffset::UTC)
        .format(&format)
        .unwrap_or_default()
}

/// Resolve an expiry into the text of an `expires` clause.
///
/// Returns `None` when a max-age overflows the representable date range.
pub fn resolve_expiry(expiry: &Expiry, now: OffsetDateTime) -> Option<String> {
    match expiry {
        Expiry::Expires(date) => Some(date.clone()),
        Expiry::MaxAge(seconds) => now
            .checked_add(Duration::seconds(*seconds))
            .map(format_expires),
    }
}

/// Build the directive for a structured write.
///
/// ```
/// use cookiebridge::cookies::directive;
/// use cookiebridge::cookies::options::CookieWriteOptions;
/// use time::OffsetDateTime;
///
/// let options = CookieWriteOptions::new().path("/");
/// let directive = directive::build(&options, "session", "abc 123", OffsetDateTime::now_utc());
/// assert_eq!(directive, "session=abc%20123;path=/");
/// ```
pub fn build(options: &CookieWriteOptions, key: &str, value: &str, now: OffsetDateTime) -> String {
    let mut directive = format!("{}={}", key, encode_value(value));

    if let Some(path) = &options.path {
        directive.push_str(";path=");
        directive.push_str(path);
    }

    if let Some(domain) = &options.domain {
        directive.push_str(";domain=");
        directive.push_str(domain);
    }

    if let Some(expiry) = &options.expiry {
        match resolve_expiry(expiry, now) {
            Some(expires) => {
                directive.push_str(";expires=");
                directive.push_str(&expires);
            }
            None => {
                tracing::warn!(key = %key, ?expiry, "expiry out of range, writing session cookie");
            }
        }
    }

    if options.secure {
        directive.push_str(";secure");
    }

    directive
}

/// Absolute expiration of a directive, if it carries one.
///
/// `Max-Age` takes precedence over `Expires`, as in browsers. Returns `None`
/// for session cookies and for directives that do not parse.
pub fn expiration_time(directive: &str, now: OffsetDateTime) -> Option<OffsetDateTime> {
    let parsed = Cookie::parse(directive).ok()?;
    if let Some(max_age) = parsed.max_age() {
        return now.checked_add(max_age);
    }
    parsed.expires_datetime()
}
