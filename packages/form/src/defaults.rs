//! The tree every session starts from.

use metagen_core_store::Value;

/// The default metadata tree.
///
/// Key order here is the key order of the generated code.
pub fn default_metadata() -> Value {
    Value::from_entries([
        ("metadataBase", Value::from("")),
        (
            "alternates",
            Value::from_entries([("canonical", Value::from("/"))]),
        ),
        (
            "title",
            Value::from_entries([
                ("default", Value::from("")),
                ("template", Value::from("%s | My App")),
            ]),
        ),
        ("description", Value::from("")),
        (
            "openGraph",
            Value::from_entries([
                ("title", Value::from("")),
                ("description", Value::from("")),
                ("url", Value::from("")),
                ("siteName", Value::from("")),
                ("locale", Value::from("en_US")),
                ("type", Value::from("website")),
                (
                    "images",
                    Value::Array(vec![Value::from_entries([("url", Value::from(""))])]),
                ),
            ]),
        ),
        (
            "robots",
            Value::from_entries([
                ("index", Value::from(true)),
                ("follow", Value::from(true)),
                (
                    "googleBot",
                    Value::from_entries([
                        ("index", Value::from(true)),
                        ("follow", Value::from(true)),
                        ("max-video-preview", Value::from(-1i64)),
                        ("max-image-preview", Value::from("large")),
                        ("max-snippet", Value::from(-1i64)),
                    ]),
                ),
            ]),
        ),
        (
            "twitter",
            Value::from_entries([
                ("card", Value::from("summary_large_image")),
                ("title", Value::from("")),
                ("description", Value::from("")),
                ("siteId", Value::from("")),
                ("creator", Value::from("")),
                ("creatorId", Value::from("")),
                ("images", Value::Array(vec![Value::from("")])),
            ]),
        ),
        (
            "verification",
            Value::from_entries([("google", Value::from("")), ("yandex", Value::from(""))]),
        ),
    ])
}
