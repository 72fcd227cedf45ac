//! Dotted field paths into the metadata tree.

use std::fmt;

/// Errors related to field path parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty.
    Empty,
    /// A segment between two dots (or at either end) was empty.
    EmptySegment { position: usize },
    /// A bracketed index was malformed.
    InvalidIndex { segment: String, message: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "empty field path"),
            PathError::EmptySegment { position } => {
                write!(f, "empty path segment at position {}", position)
            }
            PathError::InvalidIndex { segment, message } => {
                write!(f, "invalid index in '{}': {}", segment, message)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A location in the metadata tree.
///
/// Components are plain strings. Whether a component addresses a map key or
/// an array index is decided by the container found at that position when
/// the path is walked, so `openGraph.images.0.url` indexes into the
/// `images` array while `title.default` is two map lookups.
///
/// Keys may contain anything except `.`, so hyphenated keys such as
/// `robots.googleBot.max-video-preview` need no quoting.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldPath {
    pub components: Vec<String>,
}

impl FieldPath {
    /// The empty path, addressing the root of the tree.
    pub fn root() -> Self {
        FieldPath {
            components: Vec::new(),
        }
    }

    /// Parse a dotted path.
    ///
    /// # Path Syntax
    ///
    /// - Components are separated by `.`
    /// - `name[0]` is shorthand for `name.0`
    /// - Empty components are rejected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metagen_core_store::FieldPath;
    ///
    /// let path = FieldPath::parse("openGraph.images.0.url").unwrap();
    /// assert_eq!(path.len(), 4);
    ///
    /// assert_eq!(
    ///     FieldPath::parse("openGraph.images[0].url").unwrap(),
    ///     path,
    /// );
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let mut components = Vec::new();
        for (position, piece) in s.split('.').enumerate() {
            if piece.is_empty() {
                return Err(PathError::EmptySegment { position });
            }
            Self::split_brackets(piece, &mut components)?;
        }

        Ok(FieldPath { components })
    }

    /// Expand `images[0][1]` into `images`, `0`, `1`.
    fn split_brackets(piece: &str, out: &mut Vec<String>) -> Result<(), PathError> {
        let Some(open) = piece.find('[') else {
            if piece.contains(']') {
                return Err(PathError::InvalidIndex {
                    segment: piece.to_string(),
                    message: "unmatched ']'".to_string(),
                });
            }
            out.push(piece.to_string());
            return Ok(());
        };

        if open > 0 {
            out.push(piece[..open].to_string());
        }

        let mut rest = &piece[open..];
        while !rest.is_empty() {
            let inner = rest
                .strip_prefix('[')
                .and_then(|r| r.split_once(']'))
                .ok_or_else(|| PathError::InvalidIndex {
                    segment: piece.to_string(),
                    message: "expected '[<index>]'".to_string(),
                })?;
            let (index, tail) = inner;
            if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
                return Err(PathError::InvalidIndex {
                    segment: piece.to_string(),
                    message: format!("'{}' is not an array index", index),
                });
            }
            out.push(index.to_string());
            rest = tail;
        }

        Ok(())
    }

    /// Create a path from components without parsing.
    ///
    /// Components are taken verbatim, so a component may itself contain a
    /// `.` when built this way.
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldPath {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this path is empty (root path).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// The final component, if any.
    pub fn last(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &FieldPath) -> FieldPath {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        FieldPath { components }
    }

    /// Append a single component.
    #[must_use]
    pub fn child(&self, component: impl Into<String>) -> FieldPath {
        let mut components = self.components.clone();
        components.push(component.into());
        FieldPath { components }
    }

    /// Check if this path has the given prefix.
    pub fn has_prefix(&self, prefix: &FieldPath) -> bool {
        prefix.components.len() <= self.components.len()
            && prefix.components == self.components[..prefix.components.len()]
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("."))
    }
}

impl std::str::FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::parse(s)
    }
}

impl std::ops::Index<usize> for FieldPath {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

/// Macro for creating field paths from literals.
///
/// # Example
///
/// ```rust
/// use metagen_core_store::path;
///
/// let p = path!("robots.googleBot.max-snippet");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::FieldPath::parse($s).expect("invalid path literal")
    };
}
