//! Form sections and which of them are shown.
//!
//! Visibility is presentation state. Hiding a section never touches the
//! metadata tree, and a hidden section's values still appear in the
//! generated code.

use std::fmt;
use std::str::FromStr;

/// A group of fields that can be hidden as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Base,
    OpenGraph,
    Robots,
    Twitter,
    Verification,
}

impl Section {
    /// Every section, in form order.
    pub const ALL: [Section; 5] = [
        Section::Base,
        Section::OpenGraph,
        Section::Robots,
        Section::Twitter,
        Section::Verification,
    ];

    /// Heading shown above the section's fields.
    pub fn title(self) -> &'static str {
        match self {
            Section::Base => "Base",
            Section::OpenGraph => "Open Graph",
            Section::Robots => "Robots",
            Section::Twitter => "Twitter",
            Section::Verification => "Verification",
        }
    }

    /// Identifier used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Section::Base => "base",
            Section::OpenGraph => "openGraph",
            Section::Robots => "robots",
            Section::Twitter => "twitter",
            Section::Verification => "verification",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Returned when a name matches no section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown section '{}' (expected one of: base, openGraph, robots, twitter, verification)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(Section::Base),
            "opengraph" | "open-graph" | "open_graph" | "og" => Ok(Section::OpenGraph),
            "robots" => Ok(Section::Robots),
            "twitter" => Ok(Section::Twitter),
            "verification" => Ok(Section::Verification),
            _ => Err(UnknownSection(s.to_string())),
        }
    }
}

/// Shown/hidden flag per section. Everything starts shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visibility {
    shown: [bool; Section::ALL.len()],
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            shown: [true; Section::ALL.len()],
        }
    }
}

impl Visibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.shown[section.index()]
    }

    /// Hide a section. Returns whether it was shown before.
    pub fn hide(&mut self, section: Section) -> bool {
        std::mem::replace(&mut self.shown[section.index()], false)
    }

    /// Show every section again.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn all_hidden(&self) -> bool {
        self.shown.iter().all(|shown| !shown)
    }

    /// Sections currently shown, in form order.
    pub fn visible(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(move |section| self.is_visible(*section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_section_names() {
        assert_eq!("base".parse(), Ok(Section::Base));
        assert_eq!("openGraph".parse(), Ok(Section::OpenGraph));
        assert_eq!("OG".parse(), Ok(Section::OpenGraph));
        assert_eq!("open-graph".parse(), Ok(Section::OpenGraph));
        assert_eq!(" Robots ".parse(), Ok(Section::Robots));
        assert_eq!("twitter".parse(), Ok(Section::Twitter));
        assert_eq!("VERIFICATION".parse(), Ok(Section::Verification));
        assert!("facebook".parse::<Section>().is_err());
    }

    #[test]
    fn key_roundtrips_through_parse() {
        for section in Section::ALL {
            assert_eq!(section.key().parse(), Ok(section));
        }
    }

    #[test]
    fn all_shown_initially() {
        let visibility = Visibility::new();
        assert!(Section::ALL.iter().all(|s| visibility.is_visible(*s)));
        assert!(!visibility.all_hidden());
        assert_eq!(visibility.visible().count(), 5);
    }

    #[test]
    fn hide_reports_previous_state() {
        let mut visibility = Visibility::new();
        assert!(visibility.hide(Section::Twitter));
        assert!(!visibility.hide(Section::Twitter));
        assert!(!visibility.is_visible(Section::Twitter));
        assert!(visibility.is_visible(Section::Robots));
    }

    #[test]
    fn all_hidden_then_reset() {
        let mut visibility = Visibility::new();
        for section in Section::ALL {
            visibility.hide(section);
        }
        assert!(visibility.all_hidden());
        assert_eq!(visibility.visible().count(), 0);

        visibility.reset();
        assert_eq!(visibility, Visibility::default());
    }

    #[test]
    fn unknown_section_message_lists_choices() {
        let err = "nope".parse::<Section>().unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert!(err.to_string().contains("openGraph"));
    }
}
