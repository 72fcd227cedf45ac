//! Field bindings: which input writes where, and how its text becomes a value.

use metagen_core_store::{Error, FieldPath, Value};

use crate::section::Section;

/// The kind of input widget, which decides how raw text is coerced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text, stored verbatim.
    Text,
    /// Multi-line text, stored verbatim.
    MultiLine,
    /// Checkbox, stored as a boolean.
    Checkbox,
    /// Text parsed as a base-10 integer, the way `parseInt` does it.
    Integer,
}

impl FieldKind {
    /// Turn raw input into the value written at `path`.
    ///
    /// Text is never rejected. A checkbox only has two states, so text that
    /// names neither is an input error.
    pub fn coerce(self, path: &FieldPath, raw: &str) -> Result<Value, Error> {
        match self {
            FieldKind::Text | FieldKind::MultiLine => Ok(Value::from(raw)),
            FieldKind::Checkbox => parse_checkbox(raw).map(Value::Bool).ok_or_else(|| {
                Error::input(
                    path,
                    format!("'{}' is not a checkbox state (use true/false, on/off, yes/no)", raw),
                )
            }),
            FieldKind::Integer => Ok(parse_int(raw)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::MultiLine => "multi-line text",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Integer => "integer",
        }
    }
}

fn parse_checkbox(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" | "checked" => Some(true),
        "false" | "off" | "no" | "0" | "unchecked" => Some(false),
        _ => None,
    }
}

/// `parseInt(raw, 10)`: leading whitespace, optional sign, then the longest
/// run of digits. No digits is `NaN` in a browser, which lands in the
/// generated code as `null`, so it becomes `Value::Null` here.
pub fn parse_int(raw: &str) -> Value {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Value::Null;
    }

    let digits = &unsigned[..digits_len];
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };

    match signed.parse::<i64>() {
        Ok(n) if n.unsigned_abs() <= MAX_EXACT_INTEGER => Value::Integer(n),
        // Past 2^53 a browser only has the nearest double.
        _ => signed.parse::<f64>().map(Value::Float).unwrap_or(Value::Null),
    }
}

/// Largest magnitude a double holds without rounding (2^53).
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// How an input addresses the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// A plain key on the root map.
    TopLevel,
    /// A dotted path into the tree.
    Nested,
}

/// One input on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Dotted path (or root key for top-level bindings).
    pub path: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub section: Section,
    pub binding: Binding,
}

impl FieldSpec {
    const fn nested(
        path: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: FieldKind,
        section: Section,
    ) -> Self {
        Self {
            path,
            label,
            placeholder,
            kind,
            section,
            binding: Binding::Nested,
        }
    }

    const fn top_level(
        path: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: FieldKind,
        section: Section,
    ) -> Self {
        Self {
            path,
            label,
            placeholder,
            kind,
            section,
            binding: Binding::TopLevel,
        }
    }

    pub fn field_path(&self) -> FieldPath {
        match self.binding {
            Binding::TopLevel => FieldPath::from_components([self.path]),
            Binding::Nested => FieldPath::from_components(self.path.split('.')),
        }
    }
}

use FieldKind::{Checkbox, Integer, MultiLine, Text};
use Section::{Base, OpenGraph, Robots, Twitter, Verification};

/// Every input on the form, in display order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::top_level("metadataBase", "Metadata Base", "https://example.com", Text, Base),
    FieldSpec::nested("title.default", "Default Title", "My App", Text, Base),
    FieldSpec::nested("title.template", "Title Template", "%s | My App", Text, Base),
    FieldSpec::top_level("description", "Description", "Page Description", MultiLine, Base),
    FieldSpec::nested("alternates.canonical", "Canonical URL", "/", Text, Base),
    FieldSpec::nested("openGraph.title", "OG Title", "OG Title", Text, OpenGraph),
    FieldSpec::nested("openGraph.description", "OG Description", "OG Description", Text, OpenGraph),
    FieldSpec::nested("openGraph.url", "OG URL", "OG URL", Text, OpenGraph),
    FieldSpec::nested("openGraph.siteName", "OG Site Name", "OG Site Name", Text, OpenGraph),
    FieldSpec::nested("openGraph.images.0.url", "OG Image URL", "OG Image URL", Text, OpenGraph),
    FieldSpec::nested("robots.index", "Index", "", Checkbox, Robots),
    FieldSpec::nested("robots.follow", "Follow", "", Checkbox, Robots),
    FieldSpec::nested("robots.googleBot.index", "GoogleBot Index", "", Checkbox, Robots),
    FieldSpec::nested("robots.googleBot.follow", "GoogleBot Follow", "", Checkbox, Robots),
    FieldSpec::nested(
        "robots.googleBot.max-video-preview",
        "GoogleBot Max Video Preview",
        "GoogleBot Max Video Preview",
        Integer,
        Robots,
    ),
    FieldSpec::nested(
        "robots.googleBot.max-image-preview",
        "GoogleBot Max Image Preview",
        "GoogleBot Max Image Preview",
        Text,
        Robots,
    ),
    FieldSpec::nested(
        "robots.googleBot.max-snippet",
        "GoogleBot Max Snippet",
        "GoogleBot Max Snippet",
        Integer,
        Robots,
    ),
    FieldSpec::nested("twitter.title", "Twitter Title", "Twitter Title", Text, Twitter),
    FieldSpec::nested("twitter.description", "Twitter Description", "Twitter Description", Text, Twitter),
    FieldSpec::nested("twitter.creator", "Twitter Creator", "Twitter Creator", Text, Twitter),
    FieldSpec::nested("twitter.images.0", "Twitter Image URL", "Twitter Image URL", Text, Twitter),
    FieldSpec::nested(
        "verification.google",
        "Google Verification",
        "Google Verification",
        Text,
        Verification,
    ),
    FieldSpec::nested(
        "verification.yandex",
        "Yandex Verification",
        "Yandex Verification",
        Text,
        Verification,
    ),
];

/// The input bound to `path`, if any.
pub fn find(path: &FieldPath) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|field| &field.field_path() == path)
}

/// Inputs belonging to `section`, in display order.
pub fn in_section(section: Section) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |field| field.section == section)
}
