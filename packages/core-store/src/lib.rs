//! metagen core store: the nested record layer
//!
//! - `Value`: the metadata tree (maps, arrays, leaves)
//! - `FieldPath`: dotted location in the tree (`openGraph.images.0.url`)
//! - `RecordStore`: owns one tree; writes by path never fail
//! - `Codec` + `Format`: how the tree is turned into text
//!
//! # Example
//!
//! ```rust
//! use metagen_core_store::{path, Reader, RecordStore, Value, Writer};
//!
//! let mut store = RecordStore::new();
//! store.write(&path!("robots.googleBot.index"), Value::from(false));
//! assert_eq!(store.read(&path!("robots.googleBot.index")), Some(&Value::from(false)));
//! ```

mod error;
mod format;
mod path;
mod record_store;
mod traits;
mod value;

pub use error::Error;
pub use format::Format;
pub use path::{FieldPath, PathError};
pub use record_store::RecordStore;
pub use traits::{Codec, Reader, Store, Writer};
pub use value::Value;

pub use indexmap::IndexMap;
