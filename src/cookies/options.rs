use crate::cookies::directive;
use time::OffsetDateTime;

/// When a written cookie expires.
///
/// The two forms are mutually exclusive: a directive carries at most one
/// expiration clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    /// A literal date string, emitted verbatim.
    Expires(String),
    /// Seconds from the moment the directive is built.
    MaxAge(i64),
}

impl Expiry {
    /// Expire at a fixed instant, rendered in cookie date format.
    pub fn at(when: OffsetDateTime) -> Self {
        Expiry::Expires(directive::format_expires(when))
    }
}

/// Optional attributes for a structured cookie write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieWriteOptions {
    pub path: Option<String>,
    pub domain: Option<String>,
    pub expiry: Option<Expiry>,
    pub secure: bool,
}

impl CookieWriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set a literal expiration date. Replaces any previous expiry.
    pub fn expires(mut self, date: impl Into<String>) -> Self {
        self.expiry = Some(Expiry::Expires(date.into()));
        self
    }

    /// Expire `seconds` after the write. Replaces any previous expiry.
    pub fn max_age(mut self, seconds: i64) -> Self {
        self.expiry = Some(Expiry::MaxAge(seconds));
        self
    }

    /// Max-age from a floating point count, as JavaScript hosts pass it.
    /// Fractions are truncated. NaN and infinities leave the expiry unchanged.
    pub fn max_age_secs_f64(self, seconds: f64) -> Self {
        if !seconds.is_finite() {
            return self;
        }
        self.max_age(seconds as i64)
    }

    pub fn expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}
