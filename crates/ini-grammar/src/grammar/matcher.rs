//! Compiled matchers for the three line kinds.
//!
//! Matchers compare equal when their pattern sources are identical, so two
//! grammars synthesised from the same delimiters are equal.

use std::fmt;

use regex::Regex;

use super::synthesis::{comment_source, compile_embedded, compile_section, key_value_source};
use crate::delimiter::DelimiterRole;
use crate::errors::InvalidDelimiterError;

/// Recognises comment text introduced by the comment delimiter.
///
/// The pattern is unanchored, so a comment may begin anywhere in the line.
#[derive(Debug, Clone)]
pub struct CommentMatcher {
    regex: Regex,
}

impl CommentMatcher {
    /// Synthesise the matcher for `comment`.
    ///
    /// # Errors
    /// Returns [`InvalidDelimiterError`] if no pattern can be compiled for
    /// the character.
    pub fn new(comment: char) -> Result<Self, InvalidDelimiterError> {
        compile_embedded(comment, DelimiterRole::Comment, comment_source).map(|regex| Self { regex })
    }

    /// Whether `line` contains a comment.
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// The comment text in `line`, delimiter included.
    ///
    /// # Examples
    /// ```
    /// use ini_grammar::CommentMatcher;
    ///
    /// let matcher = CommentMatcher::new(';').unwrap_or_else(|err| panic!("{err}"));
    /// assert_eq!(matcher.find("key = value ; note"), Some("; note"));
    /// ```
    #[must_use]
    pub fn find<'h>(&self, line: &'h str) -> Option<&'h str> {
        self.regex.find(line).map(|m| m.as_str())
    }

    /// The pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled regular expression.
    #[must_use]
    pub const fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

/// Recognises a section header line.
#[derive(Debug, Clone)]
pub struct SectionMatcher {
    regex: Regex,
}

impl SectionMatcher {
    /// Synthesise the matcher for headers written `start name end`.
    ///
    /// # Errors
    /// Returns [`InvalidDelimiterError`] if the section pattern fails to
    /// compile.
    pub fn new(start: char, end: char) -> Result<Self, InvalidDelimiterError> {
        compile_section(start, end).map(|regex| Self { regex })
    }

    /// Whether `line` is a section header.
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// The pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled regular expression.
    #[must_use]
    pub const fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

/// Raw key and value tokens captured from a key/value line.
///
/// Neither token is trimmed; the parser decides how to treat surrounding
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValueCaptures<'h> {
    /// Leading whitespace and key, up to the assignment delimiter.
    pub key: &'h str,
    /// Everything after the assignment delimiter.
    pub value: &'h str,
}

/// Recognises a `key <assignment> value` line.
#[derive(Debug, Clone)]
pub struct KeyValueMatcher {
    regex: Regex,
}

impl KeyValueMatcher {
    /// Synthesise the matcher for `assignment`.
    ///
    /// # Errors
    /// Returns [`InvalidDelimiterError`] if no pattern can be compiled for
    /// the character.
    pub fn new(assignment: char) -> Result<Self, InvalidDelimiterError> {
        compile_embedded(
            assignment,
            DelimiterRole::KeyValueAssignment,
            key_value_source,
        )
        .map(|regex| Self { regex })
    }

    /// Whether `line` is a key/value line.
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Split `line` into its raw key and value tokens.
    ///
    /// Groups that do not take part in the match yield empty strings.
    ///
    /// # Examples
    /// ```
    /// use ini_grammar::KeyValueMatcher;
    ///
    /// let matcher = KeyValueMatcher::new('=').unwrap_or_else(|err| panic!("{err}"));
    /// let captures = matcher.captures("key = value").unwrap_or_else(|| panic!("no match"));
    /// assert_eq!(captures.key, "key ");
    /// assert_eq!(captures.value, " value");
    /// ```
    #[must_use]
    pub fn captures<'h>(&self, line: &'h str) -> Option<KeyValueCaptures<'h>> {
        let caps = self.regex.captures(line)?;
        let group = |index| caps.get(index).map_or("", |m| m.as_str());
        Some(KeyValueCaptures {
            key: group(1),
            value: group(2),
        })
    }

    /// The pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled regular expression.
    #[must_use]
    pub const fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

macro_rules! impl_source_identity {
    ($($matcher:ty),+ $(,)?) => {
        $(
            impl PartialEq for $matcher {
                fn eq(&self, other: &Self) -> bool {
                    self.as_str() == other.as_str()
                }
            }

            impl Eq for $matcher {}

            impl fmt::Display for $matcher {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_source_identity!(CommentMatcher, SectionMatcher, KeyValueMatcher);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn section(start: char, end: char) -> SectionMatcher {
        SectionMatcher::new(start, end).unwrap_or_else(|err| panic!("section matcher: {err}"))
    }

    fn key_value(assignment: char) -> KeyValueMatcher {
        KeyValueMatcher::new(assignment).unwrap_or_else(|err| panic!("key/value matcher: {err}"))
    }

    #[rstest]
    #[case("[Section1]")]
    #[case("  [Section1]  ")]
    #[case("[ spaced name ]")]
    #[case("[a.b-c/d:e]")]
    #[case("[x\\y~z]")]
    fn default_section_accepts_headers(#[case] line: &str) {
        assert!(section('[', ']').is_match(line), "{line:?}");
    }

    #[rstest]
    #[case("[]")]
    #[case("Section1]")]
    #[case("[Section1")]
    #[case("[Section1] trailing")]
    #[case("x [Section1]")]
    #[case("[a]b]")]
    fn default_section_rejects_non_headers(#[case] line: &str) {
        assert!(!section('[', ']').is_match(line), "{line:?}");
    }

    #[test]
    fn key_value_captures_raw_tokens() {
        let captures = key_value('=')
            .captures("  name.sub =  spaced value ")
            .unwrap_or_else(|| panic!("expected key/value match"));
        assert_eq!(captures.key, "  name.sub ");
        assert_eq!(captures.value, "  spaced value ");
    }

    #[test]
    fn key_value_keeps_later_assignments_in_value() {
        let captures = key_value('=')
            .captures("url=http://host/?a=b")
            .unwrap_or_else(|| panic!("expected key/value match"));
        assert_eq!(captures.key, "url");
        assert_eq!(captures.value, "http://host/?a=b");
    }

    #[test]
    fn key_value_rejects_lines_without_assignment() {
        assert!(key_value('=').captures("just text").is_none());
    }

    #[test]
    fn comment_find_returns_text_from_delimiter() {
        let matcher =
            CommentMatcher::new('#').unwrap_or_else(|err| panic!("comment matcher: {err}"));
        assert_eq!(matcher.find("# a comment"), Some("# a comment"));
        assert_eq!(matcher.find("no comment here"), None);
    }

    #[test]
    fn matchers_compare_by_pattern_source() {
        assert_eq!(section('[', ']'), section('[', ']'));
        assert_ne!(section('[', ']'), section('<', '>'));
        assert_eq!(key_value(':').to_string(), key_value(':').as_str());
    }
}
