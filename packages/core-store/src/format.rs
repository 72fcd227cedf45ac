//! Output format hints for codecs.

use std::borrow::Cow;
use std::fmt;

/// The textual form a codec should render the tree as.
///
/// MIME-type-like strings, so a codec can be asked for a format it has never
/// heard of and answer with `Error::UnsupportedFormat`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format(pub Cow<'static, str>);

impl Format {
    /// `export const metadata = {...}` (`text/javascript`)
    pub const JS_MODULE: Format = Format(Cow::Borrowed("text/javascript"));

    /// `export const metadata: Metadata = {...}` (`text/typescript`)
    pub const TS_MODULE: Format = Format(Cow::Borrowed("text/typescript"));

    /// The bare tree as JSON (`application/json`)
    pub const JSON: Format = Format(Cow::Borrowed("application/json"));

    /// Create a format from a static string.
    pub const fn from_static(s: &'static str) -> Self {
        Format(Cow::Borrowed(s))
    }

    /// Create a format from an owned string.
    pub fn new(s: impl Into<String>) -> Self {
        Format(Cow::Owned(s.into()))
    }

    /// Get the format string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is JSON format.
    pub fn is_json(&self) -> bool {
        self == &Self::JSON
    }

    /// Check if this renders as a module declaration (JS or TS).
    pub fn is_module(&self) -> bool {
        self == &Self::JS_MODULE || self == &Self::TS_MODULE
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&'static str> for Format {
    fn from(s: &'static str) -> Self {
        Format(Cow::Borrowed(s))
    }
}

impl From<String> for Format {
    fn from(s: String) -> Self {
        Format(Cow::Owned(s))
    }
}

impl AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
