//! Codec implementation over the serializer.

use metagen_core_store::{Codec, Error, Format, Value};

use crate::declaration::Declaration;
use crate::serializer::Serializer;

/// The type Next.js exports for page metadata.
pub const NEXT_METADATA_TYPE: &str = "Metadata";

/// A codec that renders the metadata tree in any of the supported formats.
///
/// - `Format::JS_MODULE`: `export const metadata = {...}`
/// - `Format::TS_MODULE`: the same with a `: Metadata` annotation, preceded
///   by the `import type` line when the annotation is Next's own type
/// - `Format::JSON`: the bare tree
///
/// # Example
///
/// ```rust
/// use metagen_codegen::MetadataCodec;
/// use metagen_core_store::{Codec, Format, Value};
///
/// let codec = MetadataCodec::default();
/// let text = codec.encode(&Value::map(), &Format::TS_MODULE).unwrap();
/// assert_eq!(
///     text,
///     "import type { Metadata } from 'next'\n\nexport const metadata: Metadata = {}"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataCodec {
    declaration: Declaration,
}

impl MetadataCodec {
    pub fn new(declaration: Declaration) -> Self {
        Self { declaration }
    }
}

impl Codec for MetadataCodec {
    fn encode(&self, value: &Value, format: &Format) -> Result<String, Error> {
        if !self.supports(format) {
            return Err(Error::UnsupportedFormat(format.clone()));
        }

        if format.is_json() {
            return Serializer::new(self.declaration.clone())
                .try_render_json(value)
                .map_err(|e| Error::encode(format.clone(), e.to_string()));
        }

        if format == &Format::TS_MODULE {
            let declaration = match &self.declaration.type_annotation {
                Some(_) => self.declaration.clone(),
                None => self.declaration.clone().typed(NEXT_METADATA_TYPE),
            };
            let body = Serializer::new(declaration.clone())
                .try_serialize(value)
                .map_err(|e| Error::encode(format.clone(), e.to_string()))?;
            return Ok(match declaration.type_annotation.as_deref() {
                Some(NEXT_METADATA_TYPE) => {
                    format!("import type {{ {} }} from 'next'\n\n{}", NEXT_METADATA_TYPE, body)
                }
                _ => body,
            });
        }

        Serializer::new(self.declaration.clone().untyped())
            .try_serialize(value)
            .map_err(|e| Error::encode(format.clone(), e.to_string()))
    }

    fn supports(&self, format: &Format) -> bool {
        format.is_json() || format.is_module()
    }
}
