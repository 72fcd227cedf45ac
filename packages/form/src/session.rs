//! One user's form: the metadata tree, section visibility and the last
//! generated code.

use metagen_codegen::Serializer;
use metagen_core_store::{Error, FieldPath, RecordStore, Value};

use crate::defaults::default_metadata;
use crate::field::{self, Binding, FieldSpec};
use crate::section::{Section, Visibility};

/// What the form's single button does right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Render the tree into the output area.
    Generate,
    /// Every section is hidden; bring them back.
    Reset,
}

/// State owned by one form session.
///
/// The generated code is only refreshed by [`FormSession::generate`] (or a
/// [`FormSession::submit`] that generates). Editing fields leaves it as it
/// was.
#[derive(Clone, Debug)]
pub struct FormSession {
    store: RecordStore,
    visibility: Visibility,
    serializer: Serializer,
    generated: String,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// A session over the default tree with the default declaration.
    pub fn new() -> Self {
        Self::with_serializer(Serializer::default())
    }

    pub fn with_serializer(serializer: Serializer) -> Self {
        Self {
            store: RecordStore::with_data(default_metadata()),
            visibility: Visibility::default(),
            serializer,
            generated: String::new(),
        }
    }

    /// The whole metadata tree.
    pub fn metadata(&self) -> &Value {
        self.store.root()
    }

    pub fn value(&self, path: &FieldPath) -> Option<&Value> {
        self.store.get(path)
    }

    /// Write a typed value, bypassing any field coercion.
    pub fn set(&mut self, path: &FieldPath, value: Value) {
        self.store.set(path, value);
    }

    /// Apply raw input at `path` as the bound field would.
    ///
    /// The field's kind decides the stored value; a path with no field takes
    /// the text as a string. Returns the value written.
    pub fn input(&mut self, path: &FieldPath, raw: &str) -> Result<Value, Error> {
        let value = match field::find(path) {
            Some(spec) => {
                let value = spec.kind.coerce(path, raw)?;
                self.write_field(spec, value.clone());
                value
            }
            None => {
                log::debug!("no field bound to '{}', storing text", path);
                let value = Value::from(raw);
                self.store.set(path, value.clone());
                value
            }
        };
        Ok(value)
    }

    fn write_field(&mut self, spec: &FieldSpec, value: Value) {
        match spec.binding {
            Binding::TopLevel => self.store.set_top_level(spec.path, value),
            Binding::Nested => self.store.set(&spec.field_path(), value),
        }
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visibility.is_visible(section)
    }

    /// Hide a section. Returns whether it was shown before.
    pub fn hide(&mut self, section: Section) -> bool {
        self.visibility.hide(section)
    }

    pub fn reset_visibility(&mut self) {
        self.visibility.reset();
    }

    pub fn all_hidden(&self) -> bool {
        self.visibility.all_hidden()
    }

    /// Fields of the shown sections with their current values, in form order.
    pub fn visible_fields(&self) -> impl Iterator<Item = (&'static FieldSpec, Option<&Value>)> {
        field::FIELDS
            .iter()
            .filter(move |spec| self.visibility.is_visible(spec.section))
            .map(move |spec| (spec, self.store.get(&spec.field_path())))
    }

    pub fn primary_action(&self) -> Action {
        if self.all_hidden() {
            Action::Reset
        } else {
            Action::Generate
        }
    }

    /// Press the form's button.
    pub fn submit(&mut self) -> Action {
        let action = self.primary_action();
        match action {
            Action::Generate => {
                self.generate();
            }
            Action::Reset => self.reset_visibility(),
        }
        action
    }

    /// Render the tree now and keep the text as the generated code.
    pub fn generate(&mut self) -> &str {
        self.generated = self.serializer.serialize(self.store.root());
        log::debug!("generated {} bytes of metadata code", self.generated.len());
        &self.generated
    }

    /// The text from the last [`generate`](Self::generate); empty before the
    /// first one.
    pub fn generated_code(&self) -> &str {
        &self.generated
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metagen_core_store::path;

    #[test]
    fn starts_from_default_tree() {
        let session = FormSession::new();
        assert_eq!(session.metadata(), &default_metadata());
        assert_eq!(session.generated_code(), "");
        assert_eq!(session.primary_action(), Action::Generate);
    }

    #[test]
    fn input_coerces_by_field_kind() {
        let mut session = FormSession::new();

        assert_eq!(
            session.input(&path!("robots.index"), "off").unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            session
                .input(&path!("robots.googleBot.max-snippet"), "160")
                .unwrap(),
            Value::Integer(160)
        );
        assert_eq!(
            session
                .input(&path!("robots.googleBot.max-video-preview"), "unlimited")
                .unwrap(),
            Value::Null
        );
        assert_eq!(
            session.value(&path!("robots.googleBot.max-video-preview")),
            Some(&Value::Null)
        );
    }

    #[test]
    fn bad_checkbox_leaves_tree_alone() {
        let mut session = FormSession::new();
        assert!(session.input(&path!("robots.follow"), "sometimes").is_err());
        assert_eq!(session.metadata(), &default_metadata());
    }

    #[test]
    fn unbound_path_stores_text() {
        let mut session = FormSession::new();
        session.input(&path!("openGraph.locale"), "de_DE").unwrap();
        session.input(&path!("keywords.0"), "next").unwrap();

        assert_eq!(session.value(&path!("openGraph.locale")), Some(&Value::from("de_DE")));
        assert_eq!(session.value(&path!("keywords.0")), Some(&Value::from("next")));
    }

    #[test]
    fn generated_code_is_not_live() {
        let mut session = FormSession::new();
        session.generate();
        let before = session.generated_code().to_string();

        session.input(&path!("title.default"), "Changed").unwrap();
        assert_eq!(session.generated_code(), before);

        session.generate();
        assert_ne!(session.generated_code(), before);
        assert!(session.generated_code().contains("\"default\": \"Changed\""));
    }

    #[test]
    fn visibility_does_not_touch_tree() {
        let mut session = FormSession::new();
        session.input(&path!("twitter.title"), "Tweet").unwrap();
        let tree = session.metadata().clone();

        assert!(session.hide(Section::Twitter));
        assert_eq!(session.metadata(), &tree);
        assert!(session.generate().contains("\"title\": \"Tweet\""));

        session.reset_visibility();
        assert_eq!(session.metadata(), &tree);
    }

    #[test]
    fn visible_fields_follow_sections() {
        let mut session = FormSession::new();
        assert_eq!(session.visible_fields().count(), field::FIELDS.len());

        session.hide(Section::Robots);
        assert!(session
            .visible_fields()
            .all(|(spec, _)| spec.section != Section::Robots));
        assert_eq!(session.visible_fields().count(), field::FIELDS.len() - 7);

        let (first, value) = session.visible_fields().next().unwrap();
        assert_eq!(first.path, "metadataBase");
        assert_eq!(value, Some(&Value::from("")));
    }

    #[test]
    fn submit_generates_until_everything_is_hidden() {
        let mut session = FormSession::new();
        assert_eq!(session.submit(), Action::Generate);
        assert!(session.generated_code().starts_with("export const metadata = {"));

        for section in Section::ALL {
            session.hide(section);
        }
        assert_eq!(session.primary_action(), Action::Reset);
        assert_eq!(session.submit(), Action::Reset);
        assert!(!session.all_hidden());
        assert_eq!(session.primary_action(), Action::Generate);
    }

    #[test]
    fn custom_serializer_is_used() {
        use metagen_codegen::Declaration;

        let mut session =
            FormSession::with_serializer(Serializer::new(Declaration::default().with_name("meta")));
        assert!(session.generate().starts_with("export const meta = {"));
        assert_eq!(session.serializer().declaration().name, "meta");
    }
}
