//! Delimiter validation applied before any grammar is synthesised.

use crate::delimiter::{DelimiterRole, DelimiterSet};
use crate::errors::{DelimiterRejection, InvalidDelimiterError};

/// Check that `candidate` may take `role` alongside the other delimiters of
/// `current`.
///
/// The character currently held by `role` itself is ignored, so reassigning
/// a role to its present value always passes. Section start and section end
/// must differ from each other as well as from the comment and assignment
/// characters.
///
/// # Errors
/// Returns [`InvalidDelimiterError`] when `candidate` is a control character,
/// a whitespace character, or equal to the delimiter of another role.
///
/// # Examples
/// ```
/// use ini_grammar::{validate_delimiter, DelimiterRole, DelimiterSet};
///
/// let current = DelimiterSet::default();
/// assert!(validate_delimiter(';', DelimiterRole::Comment, &current).is_ok());
/// assert!(validate_delimiter('#', DelimiterRole::KeyValueAssignment, &current).is_err());
/// ```
pub fn validate_delimiter(
    candidate: char,
    role: DelimiterRole,
    current: &DelimiterSet,
) -> Result<(), InvalidDelimiterError> {
    let rejection = if candidate.is_control() {
        Some(DelimiterRejection::Control)
    } else if candidate.is_whitespace() {
        Some(DelimiterRejection::Whitespace)
    } else {
        current
            .entries()
            .find(|&(other, value)| other != role && value == candidate)
            .map(|(other, _)| DelimiterRejection::Collision(other))
    };

    rejection.map_or(Ok(()), |reason| {
        log::debug!("rejected {role} delimiter {candidate:?}: {reason}");
        Err(InvalidDelimiterError::new(candidate, role, reason))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rejection_for(candidate: char, role: DelimiterRole) -> Option<DelimiterRejection> {
        validate_delimiter(candidate, role, &DelimiterSet::default())
            .err()
            .map(|err| err.reason)
    }

    #[rstest]
    #[case('\0')]
    #[case('\u{1b}')]
    #[case('\u{7f}')]
    #[case('\u{85}')]
    fn rejects_control_characters(#[case] candidate: char) {
        for role in DelimiterRole::ALL {
            assert_eq!(
                rejection_for(candidate, role),
                Some(DelimiterRejection::Control),
                "{candidate:?} as {role}"
            );
        }
    }

    #[rstest]
    #[case(' ')]
    #[case('\u{a0}')]
    #[case('\u{2003}')]
    #[case('\u{3000}')]
    fn rejects_whitespace_characters(#[case] candidate: char) {
        for role in DelimiterRole::ALL {
            assert_eq!(
                rejection_for(candidate, role),
                Some(DelimiterRejection::Whitespace),
                "{candidate:?} as {role}"
            );
        }
    }

    #[rstest]
    #[case(DelimiterRole::KeyValueAssignment, '#', DelimiterRole::Comment)]
    #[case(DelimiterRole::Comment, '=', DelimiterRole::KeyValueAssignment)]
    #[case(DelimiterRole::SectionStart, ']', DelimiterRole::SectionEnd)]
    #[case(DelimiterRole::SectionEnd, '[', DelimiterRole::SectionStart)]
    #[case(DelimiterRole::SectionStart, '#', DelimiterRole::Comment)]
    #[case(DelimiterRole::SectionEnd, '=', DelimiterRole::KeyValueAssignment)]
    fn rejects_collisions_with_other_roles(
        #[case] role: DelimiterRole,
        #[case] candidate: char,
        #[case] holder: DelimiterRole,
    ) {
        assert_eq!(
            rejection_for(candidate, role),
            Some(DelimiterRejection::Collision(holder))
        );
    }

    #[test]
    fn accepts_reassigning_the_current_value() {
        let current = DelimiterSet::default();
        for (role, value) in current.entries() {
            assert!(validate_delimiter(value, role, &current).is_ok(), "{role}");
        }
    }

    #[test]
    fn reports_candidate_and_role() {
        let Err(err) = validate_delimiter('\n', DelimiterRole::SectionEnd, &DelimiterSet::default())
        else {
            panic!("newline should be rejected");
        };
        assert_eq!(err.character, '\n');
        assert_eq!(err.role, DelimiterRole::SectionEnd);
    }

    #[test]
    fn set_validation_reports_first_conflicting_role() {
        let set = DelimiterSet::new('[', ']', ';', ';');
        let Err(err) = set.validate() else {
            panic!("duplicate delimiters should be rejected");
        };
        assert_eq!(err.role, DelimiterRole::Comment);
        assert_eq!(
            err.reason,
            DelimiterRejection::Collision(DelimiterRole::KeyValueAssignment)
        );
    }
}
