//! Parser configuration: the current grammar plus the behaviour flags.
//!
//! A [`ParserConfiguration`] is handed to a parser session and read at each
//! line. Delimiter setters validate the candidate and synthesise the
//! dependent matcher before anything is replaced, so a rejected change
//! leaves the previous grammar in effect.

use ini_grammar_policy::ParserPolicy;

use crate::delimiter::{DelimiterRole, DelimiterSet};
use crate::errors::InvalidDelimiterError;
use crate::grammar::{CommentMatcher, Grammar, KeyValueMatcher, SectionMatcher};

/// Grammar and policy consumed by an INI parser.
///
/// # Examples
///
/// ```
/// use ini_grammar::ParserConfiguration;
///
/// let mut config = ParserConfiguration::new();
/// config.set_comment_char(';').unwrap_or_else(|err| panic!("{err}"));
/// assert!(config.comment_matcher().is_match("; note"));
///
/// // The comment character cannot double as the assignment character.
/// assert!(config.set_key_value_assignment_char(';').is_err());
/// assert_eq!(config.key_value_assignment_char(), '=');
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfiguration {
    grammar: Grammar,
    policy: ParserPolicy,
}

impl ParserConfiguration {
    /// Configuration with the default delimiters and policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration synthesised from `delimiters` with the default policy.
    ///
    /// # Errors
    /// Returns [`InvalidDelimiterError`] when the set breaks a delimiter
    /// rule.
    pub fn with_delimiters(delimiters: &DelimiterSet) -> Result<Self, InvalidDelimiterError> {
        Ok(Self {
            grammar: Grammar::compile(delimiters)?,
            policy: ParserPolicy::default(),
        })
    }

    /// Replace the policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ParserPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace all four delimiters at once.
    ///
    /// # Errors
    /// Returns [`InvalidDelimiterError`] when the set breaks a delimiter
    /// rule; the current grammar stays in effect.
    pub fn set_delimiters(&mut self, delimiters: &DelimiterSet) -> Result<(), InvalidDelimiterError> {
        self.grammar = Grammar::compile(delimiters)?;
        Ok(())
    }

    /// Assign `value` to `role` and regenerate the dependent matcher.
    ///
    /// # Errors
    /// Returns [`InvalidDelimiterError`] when `value` is a control or
    /// whitespace character or is held by another role; the current grammar
    /// stays in effect.
    pub fn set_delimiter(
        &mut self,
        role: DelimiterRole,
        value: char,
    ) -> Result<(), InvalidDelimiterError> {
        self.grammar = self.grammar.with_delimiter(role, value)?;
        Ok(())
    }

    /// Set the character opening a section header.
    ///
    /// # Errors
    /// See [`set_delimiter`](Self::set_delimiter).
    pub fn set_section_start_char(&mut self, value: char) -> Result<(), InvalidDelimiterError> {
        self.set_delimiter(DelimiterRole::SectionStart, value)
    }

    /// Set the character closing a section header.
    ///
    /// # Errors
    /// See [`set_delimiter`](Self::set_delimiter).
    pub fn set_section_end_char(&mut self, value: char) -> Result<(), InvalidDelimiterError> {
        self.set_delimiter(DelimiterRole::SectionEnd, value)
    }

    /// Set the character introducing a comment.
    ///
    /// # Errors
    /// See [`set_delimiter`](Self::set_delimiter).
    pub fn set_comment_char(&mut self, value: char) -> Result<(), InvalidDelimiterError> {
        self.set_delimiter(DelimiterRole::Comment, value)
    }

    /// Set the character separating keys from values.
    ///
    /// # Errors
    /// See [`set_delimiter`](Self::set_delimiter).
    pub fn set_key_value_assignment_char(
        &mut self,
        value: char,
    ) -> Result<(), InvalidDelimiterError> {
        self.set_delimiter(DelimiterRole::KeyValueAssignment, value)
    }

    /// Current delimiters.
    #[must_use]
    pub const fn delimiters(&self) -> &DelimiterSet {
        self.grammar.delimiters()
    }

    /// Current section start character.
    #[must_use]
    pub const fn section_start_char(&self) -> char {
        self.delimiters().section_start
    }

    /// Current section end character.
    #[must_use]
    pub const fn section_end_char(&self) -> char {
        self.delimiters().section_end
    }

    /// Current comment character.
    #[must_use]
    pub const fn comment_char(&self) -> char {
        self.delimiters().comment
    }

    /// Current key/value assignment character.
    #[must_use]
    pub const fn key_value_assignment_char(&self) -> char {
        self.delimiters().key_value_assignment
    }

    /// The grammar in effect.
    #[must_use]
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// An owned copy of the grammar in effect, unaffected by later changes.
    #[must_use]
    pub fn snapshot(&self) -> Grammar {
        self.grammar.clone()
    }

    /// Matcher for comment text.
    #[must_use]
    pub const fn comment_matcher(&self) -> &CommentMatcher {
        self.grammar.comment_matcher()
    }

    /// Matcher for section header lines.
    #[must_use]
    pub const fn section_matcher(&self) -> &SectionMatcher {
        self.grammar.section_matcher()
    }

    /// Matcher for key/value lines.
    #[must_use]
    pub const fn key_value_matcher(&self) -> &KeyValueMatcher {
        self.grammar.key_value_matcher()
    }

    /// The behaviour flags.
    #[must_use]
    pub const fn policy(&self) -> &ParserPolicy {
        &self.policy
    }

    /// Mutable access to the behaviour flags.
    pub fn policy_mut(&mut self) -> &mut ParserPolicy {
        &mut self.policy
    }

    /// Whether keys may appear before any section header.
    #[must_use]
    pub const fn allow_keys_without_section(&self) -> bool {
        self.policy.allow_keys_without_section
    }

    /// Set whether keys may appear before any section header.
    pub fn set_allow_keys_without_section(&mut self, enabled: bool) {
        self.policy.allow_keys_without_section = enabled;
    }

    /// Whether a repeated key overwrites the earlier value.
    #[must_use]
    pub const fn allow_duplicate_keys(&self) -> bool {
        self.policy.allow_duplicate_keys
    }

    /// Set whether a repeated key overwrites the earlier value.
    pub fn set_allow_duplicate_keys(&mut self, enabled: bool) {
        self.policy.allow_duplicate_keys = enabled;
    }

    /// Whether repeated section headers are merged.
    #[must_use]
    pub const fn allow_duplicate_sections(&self) -> bool {
        self.policy.allow_duplicate_sections
    }

    /// Set whether repeated section headers are merged.
    pub fn set_allow_duplicate_sections(&mut self, enabled: bool) {
        self.policy.allow_duplicate_sections = enabled;
    }

    /// Whether the parser raises errors instead of returning an empty result.
    #[must_use]
    pub const fn throw_on_error(&self) -> bool {
        self.policy.throw_on_error
    }

    /// Set whether the parser raises errors instead of returning an empty
    /// result.
    pub fn set_throw_on_error(&mut self, enabled: bool) {
        self.policy.throw_on_error = enabled;
    }
}
