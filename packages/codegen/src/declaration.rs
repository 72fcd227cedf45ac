//! The left-hand side of the generated code.

/// Widest indentation a browser's `JSON.stringify` accepts.
pub const MAX_INDENT: usize = 10;

/// How the generated declaration reads: `<keyword> <name>[: <type>] = `.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub keyword: String,
    pub name: String,
    pub type_annotation: Option<String>,
    /// Spaces per nesting level. 0 renders the tree on one line; values
    /// above [`MAX_INDENT`] are clamped.
    pub indent: usize,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            keyword: "export const".to_string(),
            name: "metadata".to_string(),
            type_annotation: None,
            indent: 2,
        }
    }
}

impl Declaration {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn typed(mut self, type_annotation: impl Into<String>) -> Self {
        self.type_annotation = Some(type_annotation.into());
        self
    }

    #[must_use]
    pub fn untyped(mut self) -> Self {
        self.type_annotation = None;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn effective_indent(&self) -> usize {
        self.indent.min(MAX_INDENT)
    }

    /// Everything before the tree, including the trailing `= `.
    pub fn head(&self) -> String {
        match &self.type_annotation {
            Some(ty) => format!("{} {}: {} = ", self.keyword, self.name, ty),
            None => format!("{} {} = ", self.keyword, self.name),
        }
    }
}
