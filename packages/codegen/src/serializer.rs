//! Tree to declaration text.

use metagen_core_store::Value;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use crate::convert::value_to_json;
use crate::declaration::Declaration;
use crate::number::JsFormatter;

/// Render `tree` as `export const metadata = {...}` with two-space
/// indentation.
///
/// The tree part matches `JSON.stringify(tree, null, 2)` byte for byte:
/// keys in map order, `{}`/`[]` for empty containers, JSON string escapes.
///
/// ```rust
/// use metagen_core_store::Value;
///
/// let tree = Value::from_entries([("title", Value::from("Home"))]);
/// assert_eq!(
///     metagen_codegen::serialize(&tree),
///     "export const metadata = {\n  \"title\": \"Home\"\n}"
/// );
/// ```
pub fn serialize(tree: &Value) -> String {
    Serializer::default().serialize(tree)
}

/// Serializer with a configurable [`Declaration`].
///
/// Every call renders the whole tree again; nothing is cached between calls.
#[derive(Clone, Debug, Default)]
pub struct Serializer {
    declaration: Declaration,
}

impl Serializer {
    pub fn new(declaration: Declaration) -> Self {
        Self { declaration }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    /// The full declaration: head followed by the tree.
    pub fn serialize(&self, tree: &Value) -> String {
        let mut out = self.declaration.head();
        out.push_str(&self.render_json(tree));
        out
    }

    /// The full declaration, or the writer error that stopped it.
    pub fn try_serialize(&self, tree: &Value) -> serde_json::Result<String> {
        let mut out = self.declaration.head();
        out.push_str(&self.try_render_json(tree)?);
        Ok(out)
    }

    /// Just the tree, as indented JSON.
    pub fn render_json(&self, tree: &Value) -> String {
        match self.try_render_json(tree) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("falling back to serde_json number output: {}", e);
                value_to_json(tree).to_string()
            }
        }
    }

    /// Like [`render_json`](Self::render_json), surfacing writer failures
    /// instead of falling back.
    pub fn try_render_json(&self, tree: &Value) -> serde_json::Result<String> {
        let json = value_to_json(tree);
        let mut out = Vec::new();
        match self.declaration.effective_indent() {
            0 => write_json(&json, &mut out, CompactFormatter)?,
            width => {
                let indent = " ".repeat(width);
                write_json(&json, &mut out, PrettyFormatter::with_indent(indent.as_bytes()))?
            }
        }
        // Formatters only ever write valid UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

fn write_json<F: Formatter>(
    json: &serde_json::Value,
    out: &mut Vec<u8>,
    formatter: F,
) -> serde_json::Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(out, JsFormatter::new(formatter));
    json.serialize(&mut ser)
}
