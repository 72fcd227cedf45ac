//! metagen codegen: the metadata tree as source text
//!
//! - `serialize`: `export const metadata = {...}`, two-space indented
//! - `Serializer` + `Declaration`: binding name, type annotation, indent
//! - `MetadataCodec`: `Codec` over JS module, TS module and bare JSON
//! - Value -> serde_json conversion, with browser number rendering
//!
//! # Example
//!
//! ```rust
//! use metagen_core_store::{path, RecordStore, Value};
//!
//! let mut store = RecordStore::new();
//! store.set(&path!("title.default"), Value::from("Hello"));
//!
//! let code = metagen_codegen::serialize(store.root());
//! assert!(code.starts_with("export const metadata = {"));
//! assert!(code.contains("\"default\": \"Hello\""));
//! ```

mod codec;
mod convert;
mod declaration;
mod number;
mod serializer;

pub use codec::{MetadataCodec, NEXT_METADATA_TYPE};
pub use convert::value_to_json;
pub use declaration::{Declaration, MAX_INDENT};
pub use serializer::{serialize, Serializer};
