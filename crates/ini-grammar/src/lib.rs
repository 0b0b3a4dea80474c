//! Delimiter-driven grammar configuration for INI-style parsers.
//!
//! The crate turns four delimiter characters (section start, section end,
//! comment and key/value assignment) into compiled matchers for the three
//! line kinds an INI parser distinguishes. Every delimiter change is
//! validated and the dependent matcher synthesised again before the change
//! takes effect. The behaviour flags a parser consults for malformed or
//! duplicate input are re-exported from `ini-grammar-policy`.
//!
//! Parsing itself is left to the consumer: this crate only produces the
//! grammar and stores the policy.

mod config;
mod delimiter;
mod errors;
mod grammar;
mod validate;

pub use config::ParserConfiguration;
pub use delimiter::{
    DEFAULT_COMMENT, DEFAULT_KEY_VALUE_ASSIGNMENT, DEFAULT_SECTION_END, DEFAULT_SECTION_START,
    DelimiterRole, DelimiterSet,
};
pub use errors::{DelimiterRejection, InvalidDelimiterError};
pub use grammar::templates;
pub use grammar::{
    CommentMatcher, Grammar, KeyValueCaptures, KeyValueMatcher, SectionMatcher, comment_pattern,
    escape_section_delimiter, is_section_metacharacter, key_value_pattern, section_name_class,
    section_pattern,
};
pub use ini_grammar_policy::ParserPolicy;
pub use validate::validate_delimiter;
