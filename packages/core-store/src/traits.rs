//! Core traits: Reader, Writer, Codec.

use crate::{Error, FieldPath, Format, Value};

/// Read values from paths.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `&dyn Reader`.
pub trait Reader {
    /// Read the value at a path.
    ///
    /// # Returns
    ///
    /// * `None` - Nothing is stored at the path.
    /// * `Some(value)` - The value (or subtree) at the path.
    fn read(&self, from: &FieldPath) -> Option<&Value>;
}

/// Write values to paths.
///
/// Writes are total: a store creates whatever structure the path needs and
/// overwrites whatever is in the way.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `&mut dyn Writer`.
pub trait Writer {
    /// Write a value to a path, replacing what was there.
    fn write(&mut self, to: &FieldPath, value: Value);
}

/// Combined read/write.
pub trait Store: Reader + Writer {}
impl<T: Reader + Writer> Store for T {}

/// Renders a tree as text in some format.
///
/// # Implementing Custom Codecs
///
/// ```rust
/// use metagen_core_store::{Codec, Error, Format, Value};
///
/// struct KeyCount;
///
/// impl Codec for KeyCount {
///     fn encode(&self, value: &Value, format: &Format) -> Result<String, Error> {
///         if format != &Format::from_static("text/x-key-count") {
///             return Err(Error::UnsupportedFormat(format.clone()));
///         }
///         match value {
///             Value::Map(map) => Ok(map.len().to_string()),
///             _ => Ok("0".to_string()),
///         }
///     }
///
///     fn supports(&self, format: &Format) -> bool {
///         format.as_str() == "text/x-key-count"
///     }
/// }
/// ```
pub trait Codec {
    /// Encode a Value into text.
    fn encode(&self, value: &Value, format: &Format) -> Result<String, Error>;

    /// Check if this codec supports a format.
    fn supports(&self, format: &Format) -> bool;
}

// Blanket implementations for references and boxes

impl<T: Reader + ?Sized> Reader for &T {
    fn read(&self, from: &FieldPath) -> Option<&Value> {
        (**self).read(from)
    }
}

impl<T: Reader + ?Sized> Reader for &mut T {
    fn read(&self, from: &FieldPath) -> Option<&Value> {
        (**self).read(from)
    }
}

impl<T: Writer + ?Sized> Writer for &mut T {
    fn write(&mut self, to: &FieldPath, value: Value) {
        (**self).write(to, value)
    }
}

impl<T: Reader + ?Sized> Reader for Box<T> {
    fn read(&self, from: &FieldPath) -> Option<&Value> {
        self.as_ref().read(from)
    }
}

impl<T: Writer + ?Sized> Writer for Box<T> {
    fn write(&mut self, to: &FieldPath, value: Value) {
        self.as_mut().write(to, value)
    }
}

impl<T: Codec + ?Sized> Codec for Box<T> {
    fn encode(&self, value: &Value, format: &Format) -> Result<String, Error> {
        self.as_ref().encode(value, format)
    }

    fn supports(&self, format: &Format) -> bool {
        self.as_ref().supports(format)
    }
}
