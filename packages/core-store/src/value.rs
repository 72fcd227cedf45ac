//! The Value type - the metadata tree.
//!
//! A dynamically-typed tree of maps, arrays and leaves. Every form field is
//! bound to some location in one of these, and the generated code is a
//! rendering of the whole tree.

use indexmap::IndexMap;

use crate::FieldPath;

/// A node in the metadata tree.
///
/// # Design Notes
///
/// - Uses `IndexMap` so keys keep their insertion order. The generated code
///   lists keys in the order the default tree declares them, and replacing
///   an existing key keeps its position.
/// - Uses `i64` for integers (`max-snippet`, `max-video-preview`).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value. Also what an unparseable integer input becomes.
    #[default]
    Null,
    /// Boolean value (checkbox fields).
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Key-value map with string keys, in insertion order.
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Create a null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(IndexMap::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Build a map from `(key, value)` pairs, keeping their order.
    ///
    /// ```rust
    /// use metagen_core_store::Value;
    ///
    /// let title = Value::from_entries([
    ///     ("default", Value::from("")),
    ///     ("template", Value::from("%s | My App")),
    /// ]);
    /// assert!(title.is_map());
    /// ```
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Maps and arrays can be descended into; everything else is a leaf.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Array(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Short name of the variant, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    /// Get a reference to a nested value by path.
    ///
    /// Returns `None` if the path doesn't exist or can't be navigated
    /// (e.g., trying to index into a string).
    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        let mut current = self;
        for component in path.iter() {
            current = match current {
                Value::Map(map) => map.get(component)?,
                Value::Array(arr) => {
                    let index: usize = component.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    /// Get a mutable reference to a nested value by path.
    pub fn get_mut(&mut self, path: &FieldPath) -> Option<&mut Value> {
        let mut current = self;
        for component in path.iter() {
            current = match current {
                Value::Map(map) => map.get_mut(component)?,
                Value::Array(arr) => {
                    let index: usize = component.parse().ok()?;
                    arr.get_mut(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    /// Set a value at a path. Last write wins.
    ///
    /// Walking the path, every position before the last must hold a map or
    /// an array; whatever else is found there (nothing, null, a string, a
    /// boolean) is replaced with an empty map first. An empty path replaces
    /// the whole tree.
    ///
    /// Arrays are indexed by numeric components. An index past the end pads
    /// the array with nulls, up to a bounded gap. A non-numeric component, or
    /// an index too far past the end, turns the array into a map.
    ///
    /// This never fails: colliding values are overwritten, not rejected.
    pub fn set(&mut self, path: &FieldPath, value: Value) {
        set_at(self, &path.components, value);
    }
}

fn set_at(node: &mut Value, components: &[String], value: Value) {
    let Some((head, rest)) = components.split_first() else {
        *node = value;
        return;
    };

    let slot = child_slot(node, head);
    if rest.is_empty() {
        *slot = value;
    } else {
        set_at(slot, rest, value);
    }
}

/// Largest key a browser treats as an array index (2^32 - 2).
const MAX_ARRAY_INDEX: usize = 4_294_967_294;

/// Most nulls a single write may append to an array.
const MAX_ARRAY_GAP: usize = 1024;

/// Length `arr` must grow to so that `index` is addressable, or `None` when
/// the index is no array index or would open too wide a gap.
fn array_len_for(arr: &[Value], index: usize) -> Option<usize> {
    if index > MAX_ARRAY_INDEX || index.saturating_sub(arr.len()) > MAX_ARRAY_GAP {
        return None;
    }
    index.checked_add(1).map(|len| len.max(arr.len()))
}

/// Find (or make room for) the child `key` of `node`, coercing `node` into a
/// container that can hold it.
///
/// An index beyond what an array can reasonably address is treated like a
/// named key: the array becomes a map holding that key.
fn child_slot<'a>(node: &'a mut Value, key: &str) -> &'a mut Value {
    let index = key.parse::<usize>().ok();
    let grow_to = match (&*node, index) {
        (Value::Array(arr), Some(index)) => array_len_for(arr, index),
        _ => None,
    };

    match (node, index, grow_to) {
        (Value::Array(arr), Some(index), Some(len)) => {
            arr.resize(len, Value::Null);
            &mut arr[index]
        }
        (Value::Map(map), _, _) => map.entry(key.to_string()).or_insert(Value::Null),
        (other, _, _) => {
            if !other.is_null() {
                log::debug!("replacing {} with a map to hold key '{}'", other.kind(), key);
            }
            *other = Value::map();
            child_slot(other, key)
        }
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn get_nested_value() {
        let mut value = Value::map();
        value.set(&path!("title.default"), Value::from("Hello"));

        assert_eq!(value.get(&path!("title.default")), Some(&Value::from("Hello")));
        let title = value.get(&path!("title")).unwrap();
        assert!(title.is_map());
        assert_eq!(value.get(&path!("nonexistent")), None);
    }

    #[test]
    fn set_creates_intermediate_maps() {
        let mut value = Value::map();
        value.set(&path!("a.b.c"), Value::from(1i64));

        let expected = Value::from_entries([(
            "a",
            Value::from_entries([("b", Value::from_entries([("c", Value::Integer(1))]))]),
        )]);
        assert_eq!(value, expected);
    }

    #[test]
    fn set_on_null_root_creates_map() {
        let mut value = Value::Null;
        value.set(&path!("a"), Value::from(true));
        assert_eq!(value, Value::from_entries([("a", Value::Bool(true))]));
    }

    #[test]
    fn set_replaces_leaf_intermediate() {
        let mut value = Value::from_entries([("robots", Value::Bool(true))]);
        value.set(&path!("robots.index"), Value::from(false));

        assert_eq!(
            value.get(&path!("robots")),
            Some(&Value::from_entries([("index", Value::Bool(false))]))
        );
    }

    #[test]
    fn set_replaces_falsy_intermediate() {
        let mut value = Value::from_entries([("title", Value::from(""))]);
        value.set(&path!("title.default"), Value::from("x"));
        assert_eq!(value.get(&path!("title.default")), Some(&Value::from("x")));
    }

    #[test]
    fn set_overwrites_final_container() {
        let mut value = Value::from_entries([(
            "title",
            Value::from_entries([("default", Value::from(""))]),
        )]);
        value.set(&path!("title"), Value::from("flat"));
        assert_eq!(value.get(&path!("title")), Some(&Value::from("flat")));
        assert_eq!(value.get(&path!("title.default")), None);
    }

    #[test]
    fn set_keeps_key_position() {
        let mut value = Value::from_entries([
            ("first", Value::from(1i64)),
            ("second", Value::from(2i64)),
            ("third", Value::from(3i64)),
        ]);
        value.set(&path!("second"), Value::from("two"));

        let Value::Map(map) = &value else {
            panic!("expected map");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["first", "second", "third"]);
    }

    #[test]
    fn set_into_array_element() {
        let mut value = Value::from_entries([(
            "images",
            Value::Array(vec![Value::from_entries([("url", Value::from(""))])]),
        )]);
        value.set(&path!("images.0.url"), Value::from("https://example.com/og.png"));

        assert_eq!(
            value.get(&path!("images.0.url")),
            Some(&Value::from("https://example.com/og.png"))
        );
        assert_eq!(value.get(&path!("images")).map(|v| v.is_array()), Some(true));
    }

    #[test]
    fn set_past_array_end_pads_with_null() {
        let mut value = Value::from_entries([("images", Value::Array(vec![Value::from("a")]))]);
        value.set(&path!("images.3"), Value::from("d"));

        assert_eq!(
            value.get(&path!("images")),
            Some(&Value::Array(vec![
                Value::from("a"),
                Value::Null,
                Value::Null,
                Value::from("d"),
            ]))
        );
    }

    #[test]
    fn set_array_hole_then_descend() {
        let mut value = Value::from_entries([("images", Value::array())]);
        value.set(&path!("images.1.url"), Value::from("u"));

        assert_eq!(value.get(&path!("images.0")), Some(&Value::Null));
        assert_eq!(value.get(&path!("images.1.url")), Some(&Value::from("u")));
    }

    #[test]
    fn set_named_key_on_array_becomes_map() {
        let mut value = Value::from_entries([("images", Value::Array(vec![Value::from("a")]))]);
        value.set(&path!("images.url"), Value::from("u"));

        assert_eq!(
            value.get(&path!("images")),
            Some(&Value::from_entries([("url", Value::from("u"))]))
        );
    }

    #[test]
    fn set_huge_index_on_array_becomes_map() {
        for key in ["18446744073709551615", "4294967295", "9999999999"] {
            let mut value =
                Value::from_entries([("images", Value::Array(vec![Value::from("a")]))]);
            value.set(&FieldPath::from_components(["images", key]), Value::from("x"));

            assert_eq!(
                value.get(&path!("images")),
                Some(&Value::from_entries([(key, Value::from("x"))])),
                "{}",
                key
            );
        }
    }

    #[test]
    fn set_index_past_max_gap_becomes_map() {
        let mut value = Value::from_entries([("images", Value::array())]);
        value.set(&path!("images.1025"), Value::from("far"));
        assert!(value.get(&path!("images")).unwrap().is_map());

        let mut value = Value::from_entries([("images", Value::array())]);
        value.set(&path!("images.1024"), Value::from("near"));
        let images = value.get(&path!("images")).unwrap();
        assert!(images.is_array());
        assert_eq!(value.get(&path!("images.1024")), Some(&Value::from("near")));
        assert_eq!(value.get(&path!("images.1023")), Some(&Value::Null));
    }

    #[test]
    fn set_empty_path_replaces_root() {
        let mut value = Value::from_entries([("a", Value::from(1i64))]);
        value.set(&FieldPath::root(), Value::from("root"));
        assert_eq!(value, Value::from("root"));
    }

    #[test]
    fn set_then_get_roundtrips_for_various_paths() {
        let paths = [
            "metadataBase",
            "title.default",
            "openGraph.images.0.url",
            "robots.googleBot.max-snippet",
            "twitter.images.0",
            "deep.new.branch.leaf",
        ];
        let mut tree = Value::map();
        for (i, p) in paths.iter().enumerate() {
            let path = path!(p);
            tree.set(&path, Value::Integer(i as i64));
            assert_eq!(tree.get(&path), Some(&Value::Integer(i as i64)), "{}", p);
        }
    }

    #[test]
    fn get_through_leaf_is_none() {
        let value = Value::from_entries([("title", Value::from("x"))]);
        assert_eq!(value.get(&path!("title.default")), None);
    }

    #[test]
    fn get_bad_array_index_is_none() {
        let value = Value::from_entries([("images", Value::Array(vec![Value::from("a")]))]);
        assert_eq!(value.get(&path!("images.5")), None);
        assert_eq!(value.get(&path!("images.first")), None);
    }

    #[test]
    fn get_mut_allows_in_place_edit() {
        let mut value = Value::from_entries([("n", Value::from(1i64))]);
        if let Some(Value::Integer(n)) = value.get_mut(&path!("n")) {
            *n += 1;
        }
        assert_eq!(value.get(&path!("n")).and_then(Value::as_i64), Some(2));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(-1i64).as_i64(), Some(-1));
        assert_eq!(Value::Null.as_str(), None);
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(vec!["a", "b"]).kind(), "array");
    }
}
