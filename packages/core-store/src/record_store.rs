//! The nested record store.
//!
//! One mutable tree, written by path. This is the only state the form keeps
//! about the metadata itself.

use crate::{FieldPath, Reader, Value, Writer};

/// An in-memory store holding a single metadata tree.
///
/// # Example
///
/// ```rust
/// use metagen_core_store::{path, RecordStore, Value};
///
/// let mut store = RecordStore::new();
/// store.set(&path!("title.default"), Value::from("Hello"));
///
/// assert_eq!(store.get(&path!("title.default")), Some(&Value::from("Hello")));
/// assert!(store.get(&path!("title")).unwrap().is_map());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    root: Value,
}

impl RecordStore {
    /// Create a store holding an empty map.
    pub fn new() -> Self {
        Self { root: Value::map() }
    }

    /// Create a store with initial data.
    pub fn with_data(root: Value) -> Self {
        Self { root }
    }

    /// Get a reference to the root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Get a mutable reference to the root value.
    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    /// Consume the store, returning the tree.
    pub fn into_root(self) -> Value {
        self.root
    }

    /// Write `value` at `path`, creating intermediate maps as needed.
    pub fn set(&mut self, path: &FieldPath, value: Value) {
        log::trace!("set {} = {:?}", path, value);
        self.root.set(path, value);
    }

    /// Write a single key on the root map.
    ///
    /// Used by inputs bound by plain name (`metadataBase`, `description`)
    /// rather than by dotted path. The key is taken verbatim.
    pub fn set_top_level(&mut self, name: &str, value: Value) {
        self.set(&FieldPath::from_components([name]), value);
    }

    /// Read the value at `path`.
    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        self.root.get(path)
    }
}

impl Reader for RecordStore {
    fn read(&self, from: &FieldPath) -> Option<&Value> {
        self.get(from)
    }
}

impl Writer for RecordStore {
    fn write(&mut self, to: &FieldPath, value: Value) {
        self.set(to, value);
    }
}
