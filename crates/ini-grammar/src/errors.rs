//! Error types raised when a delimiter cannot join the grammar.

use thiserror::Error;

use crate::delimiter::DelimiterRole;

/// Why a candidate delimiter was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DelimiterRejection {
    /// The candidate is a control character.
    #[error("control characters cannot be delimiters")]
    Control,
    /// The candidate is a whitespace character.
    #[error("whitespace characters cannot be delimiters")]
    Whitespace,
    /// The candidate is already assigned to another role.
    #[error("already used as the {0} delimiter")]
    Collision(DelimiterRole),
    /// The synthesised pattern failed to compile.
    #[error("produces an invalid pattern: {0}")]
    Pattern(regex::Error),
}

/// A delimiter change refused by the validator or the synthesiser.
///
/// Returned before any state is modified, so the grammar in effect prior to
/// the call remains valid.
///
/// # Examples
/// ```
/// use ini_grammar::{DelimiterRejection, DelimiterRole, InvalidDelimiterError};
///
/// let err = InvalidDelimiterError::new('\t', DelimiterRole::Comment, DelimiterRejection::Whitespace);
/// assert_eq!(
///     err.to_string(),
///     "invalid comment delimiter '\\t': whitespace characters cannot be delimiters"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {role} delimiter {character:?}: {reason}")]
pub struct InvalidDelimiterError {
    /// The offending character.
    pub character: char,
    /// The role the character was meant to take.
    pub role: DelimiterRole,
    /// Why it was refused.
    pub reason: DelimiterRejection,
}

impl InvalidDelimiterError {
    /// Describe a rejected delimiter.
    #[must_use]
    pub const fn new(character: char, role: DelimiterRole, reason: DelimiterRejection) -> Self {
        Self {
            character,
            role,
            reason,
        }
    }
}
