//! Grammar synthesis from a delimiter set.

mod matcher;
mod synthesis;
pub mod templates;

pub use matcher::{CommentMatcher, KeyValueCaptures, KeyValueMatcher, SectionMatcher};
pub use synthesis::{
    comment_pattern, escape_section_delimiter, is_section_metacharacter, key_value_pattern,
    section_name_class, section_pattern,
};

use crate::delimiter::{DelimiterRole, DelimiterSet};
use crate::errors::InvalidDelimiterError;
use crate::validate::validate_delimiter;

/// Immutable snapshot of the matchers derived from one [`DelimiterSet`].
///
/// Every matcher is consistent with [`delimiters`](Self::delimiters); a new
/// delimiter produces a new `Grammar` rather than mutating this one, so a
/// snapshot may be shared read-only across threads.
///
/// # Examples
/// ```
/// use ini_grammar::{DelimiterSet, Grammar};
///
/// let grammar = Grammar::compile(&DelimiterSet::new('<', '>', ';', ':'))
///     .unwrap_or_else(|err| panic!("{err}"));
/// assert!(grammar.section_matcher().is_match("<core>"));
/// assert!(grammar.comment_matcher().is_match("; note"));
/// assert!(grammar.key_value_matcher().is_match("name: value"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    delimiters: DelimiterSet,
    comment: CommentMatcher,
    section: SectionMatcher,
    key_value: KeyValueMatcher,
}

impl Grammar {
    /// Validate `delimiters` as a whole and synthesise all three matchers.
    ///
    /// # Errors
    /// Returns [`InvalidDelimiterError`] for the first role whose character
    /// is rejected; nothing is synthesised in that case.
    pub fn compile(delimiters: &DelimiterSet) -> Result<Self, InvalidDelimiterError> {
        delimiters.validate()?;
        let grammar = Self {
            delimiters: *delimiters,
            comment: CommentMatcher::new(delimiters.comment)?,
            section: SectionMatcher::new(delimiters.section_start, delimiters.section_end)?,
            key_value: KeyValueMatcher::new(delimiters.key_value_assignment)?,
        };
        log::debug!(
            "compiled grammar: comment `{}`, section `{}`, key/value `{}`",
            grammar.comment,
            grammar.section,
            grammar.key_value
        );
        Ok(grammar)
    }

    /// Derive a grammar with `role` reassigned to `value`.
    ///
    /// Only the matcher that depends on `role` is synthesised again; the
    /// others are carried over unchanged.
    ///
    /// # Errors
    /// Returns [`InvalidDelimiterError`] when `value` is rejected for `role`.
    /// `self` is left untouched.
    pub fn with_delimiter(
        &self,
        role: DelimiterRole,
        value: char,
    ) -> Result<Self, InvalidDelimiterError> {
        validate_delimiter(value, role, &self.delimiters)?;
        let delimiters = self.delimiters.with(role, value);
        let mut next = self.clone();
        match role {
            DelimiterRole::SectionStart | DelimiterRole::SectionEnd => {
                next.section =
                    SectionMatcher::new(delimiters.section_start, delimiters.section_end)?;
                log::debug!("regenerated section matcher: `{}`", next.section);
            }
            DelimiterRole::Comment => {
                next.comment = CommentMatcher::new(value)?;
                log::debug!("regenerated comment matcher: `{}`", next.comment);
            }
            DelimiterRole::KeyValueAssignment => {
                next.key_value = KeyValueMatcher::new(value)?;
                log::debug!("regenerated key/value matcher: `{}`", next.key_value);
            }
        }
        next.delimiters = delimiters;
        Ok(next)
    }

    /// The delimiters this grammar was synthesised from.
    #[must_use]
    pub const fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Matcher for comment text.
    #[must_use]
    pub const fn comment_matcher(&self) -> &CommentMatcher {
        &self.comment
    }

    /// Matcher for section header lines.
    #[must_use]
    pub const fn section_matcher(&self) -> &SectionMatcher {
        &self.section
    }

    /// Matcher for key/value lines.
    #[must_use]
    pub const fn key_value_matcher(&self) -> &KeyValueMatcher {
        &self.key_value
    }
}

impl Default for Grammar {
    #[expect(
        clippy::expect_used,
        reason = "the default delimiters are distinct printable characters"
    )]
    fn default() -> Self {
        Self::compile(&DelimiterSet::default()).expect("default delimiters must compile")
    }
}
