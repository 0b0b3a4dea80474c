//! Pure functions turning delimiter characters into pattern sources.
//!
//! Section delimiters are always escaped when they are pattern
//! metacharacters. Comment and assignment delimiters are embedded as they
//! are, so a metacharacter such as `.` keeps its pattern meaning; only when
//! that literal embedding does not compile at all does [`compile_embedded`]
//! retry with the escaped character.

use regex::Regex;

use super::templates::{
    KEY_TOKEN, LEADING_WHITESPACE, REST_OF_LINE, SECTION_METACHARACTERS, SECTION_NAME_CLASSES,
    SECTION_NAME_PUNCTUATION, TRAILING_WHITESPACE, VALUE_TOKEN,
};
use crate::delimiter::DelimiterRole;
use crate::errors::{DelimiterRejection, InvalidDelimiterError};

/// Whether `delimiter` is escaped before joining the section pattern.
#[must_use]
pub fn is_section_metacharacter(delimiter: char) -> bool {
    SECTION_METACHARACTERS.contains(delimiter)
}

/// Render a section delimiter for embedding in the section pattern.
///
/// # Examples
/// ```
/// use ini_grammar::escape_section_delimiter;
///
/// assert_eq!(escape_section_delimiter('('), r"\(");
/// assert_eq!(escape_section_delimiter('<'), "<");
/// ```
#[must_use]
pub fn escape_section_delimiter(delimiter: char) -> String {
    let mut out = String::with_capacity(2);
    if is_section_metacharacter(delimiter) {
        out.push('\\');
    }
    out.push(delimiter);
    out
}

/// Character class matching one section-name character.
#[must_use]
pub fn section_name_class() -> String {
    let mut class = String::with_capacity(SECTION_NAME_PUNCTUATION.len() * 2 + 8);
    class.push('[');
    for ch in SECTION_NAME_PUNCTUATION.chars() {
        class.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
    }
    class.push_str(SECTION_NAME_CLASSES);
    class.push(']');
    class
}

/// Build the section-header pattern for the given delimiters.
///
/// # Examples
/// ```
/// use ini_grammar::section_pattern;
///
/// let source = section_pattern('[', ']');
/// assert!(source.starts_with(r"^(\s*?)\["));
/// assert!(source.ends_with(r"\](\s*?)$"));
/// ```
#[must_use]
pub fn section_pattern(start: char, end: char) -> String {
    format!(
        r"{LEADING_WHITESPACE}{start}\s*{name}+\s*{end}{TRAILING_WHITESPACE}",
        start = escape_section_delimiter(start),
        name = section_name_class(),
        end = escape_section_delimiter(end),
    )
}

/// Build the comment pattern, embedding `comment` without escaping.
///
/// # Examples
/// ```
/// use ini_grammar::comment_pattern;
///
/// assert_eq!(comment_pattern('#'), "#.*");
/// assert_eq!(comment_pattern('.'), "..*");
/// ```
#[must_use]
pub fn comment_pattern(comment: char) -> String {
    comment_source(comment.encode_utf8(&mut [0; 4]))
}

/// Build the key/value pattern, embedding `assignment` without escaping.
///
/// # Examples
/// ```
/// use ini_grammar::key_value_pattern;
///
/// assert_eq!(
///     key_value_pattern('='),
///     r"^(\s*[_\.\d\w]*\s*)=([\s\d\w\W\.]*)$"
/// );
/// ```
#[must_use]
pub fn key_value_pattern(assignment: char) -> String {
    key_value_source(assignment.encode_utf8(&mut [0; 4]))
}

pub(crate) fn comment_source(fragment: &str) -> String {
    format!("{fragment}{REST_OF_LINE}")
}

pub(crate) fn key_value_source(fragment: &str) -> String {
    format!("{KEY_TOKEN}{fragment}{VALUE_TOKEN}")
}

/// Compile the section pattern for `start` and `end`.
pub(crate) fn compile_section(start: char, end: char) -> Result<Regex, InvalidDelimiterError> {
    Regex::new(&section_pattern(start, end)).map_err(|err| {
        InvalidDelimiterError::new(
            start,
            DelimiterRole::SectionStart,
            DelimiterRejection::Pattern(err),
        )
    })
}

/// Compile a pattern that embeds `delimiter` literally, retrying with the
/// escaped character if the literal form is not valid pattern syntax.
///
/// The error reported is the one produced by the literal form.
pub(crate) fn compile_embedded(
    delimiter: char,
    role: DelimiterRole,
    build: fn(&str) -> String,
) -> Result<Regex, InvalidDelimiterError> {
    let literal = delimiter.to_string();
    Regex::new(&build(&literal)).or_else(|literal_err| {
        log::debug!(
            "{role} delimiter {delimiter:?} is not valid pattern syntax ({literal_err}); embedding it escaped"
        );
        Regex::new(&build(&regex::escape(&literal))).map_err(|_| {
            InvalidDelimiterError::new(delimiter, role, DelimiterRejection::Pattern(literal_err))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('^')]
    #[case('$')]
    #[case('.')]
    #[case('|')]
    #[case('?')]
    #[case('*')]
    #[case('+')]
    #[case('(')]
    #[case(')')]
    #[case('[')]
    #[case(']')]
    #[case('{')]
    #[case('}')]
    #[case('\\')]
    fn escapes_section_metacharacters(#[case] delimiter: char) {
        assert_eq!(escape_section_delimiter(delimiter), format!("\\{delimiter}"));
    }

    #[rstest]
    #[case('<')]
    #[case('>')]
    #[case('#')]
    #[case('§')]
    fn embeds_plain_section_delimiters_verbatim(#[case] delimiter: char) {
        assert_eq!(escape_section_delimiter(delimiter), delimiter.to_string());
    }

    #[test]
    fn default_section_pattern_is_stable() {
        assert_eq!(
            section_pattern('[', ']'),
            r"^(\s*?)\[\s*[_\{\}\#\+;%\(\)=\?\&\$,:/\.\-\\\~\w\d\s]+\s*\](\s*?)$"
        );
    }

    #[test]
    fn section_name_class_compiles() {
        let class = section_name_class();
        let regex = Regex::new(&format!("^{class}+$"))
            .unwrap_or_else(|err| panic!("name class should compile: {err}"));
        assert!(regex.is_match("Section_1 {a}#+;%()=?&$,:/.-\\~"));
        assert!(!regex.is_match("a]b"));
        assert!(!regex.is_match("a[b"));
    }

    #[test]
    fn comment_and_assignment_are_not_escaped() {
        assert_eq!(comment_pattern('('), "(.*");
        assert_eq!(key_value_pattern('*'), r"^(\s*[_\.\d\w]*\s*)*([\s\d\w\W\.]*)$");
    }

    #[test]
    fn compile_embedded_keeps_valid_literal_syntax() {
        let regex = compile_embedded('.', DelimiterRole::Comment, comment_source)
            .unwrap_or_else(|err| panic!("'.' should compile: {err}"));
        assert_eq!(regex.as_str(), "..*");
    }

    #[test]
    fn compile_embedded_escapes_broken_literal_syntax() {
        let regex = compile_embedded('(', DelimiterRole::Comment, comment_source)
            .unwrap_or_else(|err| panic!("'(' should compile escaped: {err}"));
        assert_eq!(regex.as_str(), r"\(.*");
    }

    #[test]
    fn compile_embedded_escapes_broken_assignment() {
        let regex = compile_embedded('\\', DelimiterRole::KeyValueAssignment, key_value_source)
            .unwrap_or_else(|err| panic!("'\\' should compile escaped: {err}"));
        assert_eq!(regex.as_str(), r"^(\s*[_\.\d\w]*\s*)\\([\s\d\w\W\.]*)$");
    }
}
