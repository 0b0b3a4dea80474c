//! Delimiter roles and the four-character delimiter set.

use std::fmt;

use crate::errors::InvalidDelimiterError;
use crate::validate::validate_delimiter;

/// Default character opening a section header.
pub const DEFAULT_SECTION_START: char = '[';
/// Default character closing a section header.
pub const DEFAULT_SECTION_END: char = ']';
/// Default character introducing a comment.
pub const DEFAULT_COMMENT: char = '#';
/// Default character separating a key from its value.
pub const DEFAULT_KEY_VALUE_ASSIGNMENT: char = '=';

/// Position a delimiter character occupies in the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DelimiterRole {
    /// Opens a section header, `[` by default.
    SectionStart,
    /// Closes a section header, `]` by default.
    SectionEnd,
    /// Starts a comment, `#` by default.
    Comment,
    /// Separates key from value, `=` by default.
    KeyValueAssignment,
}

impl DelimiterRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::SectionStart,
        Self::SectionEnd,
        Self::Comment,
        Self::KeyValueAssignment,
    ];

    /// Human-readable name used in diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use ini_grammar::DelimiterRole;
    ///
    /// assert_eq!(DelimiterRole::KeyValueAssignment.as_str(), "key/value assignment");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SectionStart => "section start",
            Self::SectionEnd => "section end",
            Self::Comment => "comment",
            Self::KeyValueAssignment => "key/value assignment",
        }
    }

    /// Whether changing this role invalidates the section matcher.
    #[must_use]
    pub const fn affects_section(self) -> bool {
        matches!(self, Self::SectionStart | Self::SectionEnd)
    }
}

impl fmt::Display for DelimiterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four characters a grammar is synthesised from.
///
/// A `DelimiterSet` is plain data; nothing stops it holding a conflicting
/// combination until [`validate`](Self::validate) or
/// [`Grammar::compile`](crate::Grammar::compile) is called on it.
///
/// # Examples
///
/// ```
/// use ini_grammar::{DelimiterRole, DelimiterSet};
///
/// let set = DelimiterSet::default().with(DelimiterRole::Comment, ';');
/// assert_eq!(set.comment, ';');
/// assert!(set.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelimiterSet {
    /// Opens a section header.
    pub section_start: char,
    /// Closes a section header.
    pub section_end: char,
    /// Starts a comment.
    pub comment: char,
    /// Separates a key from its value.
    pub key_value_assignment: char,
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self {
            section_start: DEFAULT_SECTION_START,
            section_end: DEFAULT_SECTION_END,
            comment: DEFAULT_COMMENT,
            key_value_assignment: DEFAULT_KEY_VALUE_ASSIGNMENT,
        }
    }
}

impl DelimiterSet {
    /// Build a set from its four characters without validating it.
    #[must_use]
    pub const fn new(
        section_start: char,
        section_end: char,
        comment: char,
        key_value_assignment: char,
    ) -> Self {
        Self {
            section_start,
            section_end,
            comment,
            key_value_assignment,
        }
    }

    /// Character currently assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: DelimiterRole) -> char {
        match role {
            DelimiterRole::SectionStart => self.section_start,
            DelimiterRole::SectionEnd => self.section_end,
            DelimiterRole::Comment => self.comment,
            DelimiterRole::KeyValueAssignment => self.key_value_assignment,
        }
    }

    /// Return a copy with `role` reassigned to `value`.
    #[must_use]
    pub const fn with(mut self, role: DelimiterRole, value: char) -> Self {
        match role {
            DelimiterRole::SectionStart => self.section_start = value,
            DelimiterRole::SectionEnd => self.section_end = value,
            DelimiterRole::Comment => self.comment = value,
            DelimiterRole::KeyValueAssignment => self.key_value_assignment = value,
        }
        self
    }

    /// Iterate over `(role, character)` pairs in role order.
    pub fn entries(&self) -> impl Iterator<Item = (DelimiterRole, char)> {
        let set = *self;
        DelimiterRole::ALL
            .into_iter()
            .map(move |role| (role, set.get(role)))
    }

    /// Check every role against the delimiter rules.
    ///
    /// Roles are checked in [`DelimiterRole::ALL`] order and the first
    /// offending character is reported.
    ///
    /// # Errors
    /// Returns [`InvalidDelimiterError`] when a character is a control or
    /// whitespace character, or when two roles share a character.
    pub fn validate(&self) -> Result<(), InvalidDelimiterError> {
        self.entries()
            .try_for_each(|(role, candidate)| validate_delimiter(candidate, role, self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_set_uses_classic_ini_delimiters() {
        let set = DelimiterSet::default();
        assert_eq!(set, DelimiterSet::new('[', ']', '#', '='));
        assert!(set.validate().is_ok());
    }

    #[rstest]
    #[case(DelimiterRole::SectionStart, '<')]
    #[case(DelimiterRole::SectionEnd, '>')]
    #[case(DelimiterRole::Comment, ';')]
    #[case(DelimiterRole::KeyValueAssignment, ':')]
    fn with_replaces_only_the_named_role(#[case] role: DelimiterRole, #[case] value: char) {
        let original = DelimiterSet::default();
        let updated = original.with(role, value);
        for other in DelimiterRole::ALL {
            let expected = if other == role {
                value
            } else {
                original.get(other)
            };
            assert_eq!(updated.get(other), expected, "role {other}");
        }
    }

    #[test]
    fn entries_follow_role_order() {
        let pairs: Vec<_> = DelimiterSet::default().entries().collect();
        assert_eq!(
            pairs,
            vec![
                (DelimiterRole::SectionStart, '['),
                (DelimiterRole::SectionEnd, ']'),
                (DelimiterRole::Comment, '#'),
                (DelimiterRole::KeyValueAssignment, '='),
            ]
        );
    }

    #[test]
    fn only_section_roles_affect_the_section_matcher() {
        assert!(DelimiterRole::SectionStart.affects_section());
        assert!(DelimiterRole::SectionEnd.affects_section());
        assert!(!DelimiterRole::Comment.affects_section());
        assert!(!DelimiterRole::KeyValueAssignment.affects_section());
    }

    #[test]
    fn role_display_matches_as_str() {
        for role in DelimiterRole::ALL {
            assert_eq!(role.to_string(), role.as_str());
        }
    }
}
