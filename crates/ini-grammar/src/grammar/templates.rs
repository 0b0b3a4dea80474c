//! Fixed pattern fragments the grammar is assembled from.
//!
//! Only the delimiter characters vary between grammars; everything else in
//! the synthesised patterns comes from the constants below.

/// Characters escaped with a single backslash before a section delimiter is
/// embedded in the section pattern.
///
/// Besides the classic `^ $ . | ? * + ( )` set this covers the bracket, brace
/// and backslash characters, which the regex engine also parses as syntax.
pub const SECTION_METACHARACTERS: &str = r"^$.|?*+()[]{}\";

/// Punctuation accepted inside a section name, in addition to word
/// characters, digits and whitespace.
pub const SECTION_NAME_PUNCTUATION: &str = r"_{}#+;%()=?&$,:/.-\~";

/// Character classes accepted inside a section name besides
/// [`SECTION_NAME_PUNCTUATION`].
pub const SECTION_NAME_CLASSES: &str = r"\w\d\s";

/// Optional whitespace before the section start delimiter.
pub const LEADING_WHITESPACE: &str = r"^(\s*?)";

/// Optional whitespace after the section end delimiter, up to end of line.
pub const TRAILING_WHITESPACE: &str = r"(\s*?)$";

/// Remainder of the line after a comment delimiter.
pub const REST_OF_LINE: &str = ".*";

/// Leading whitespace and key token, captured as group 1.
pub const KEY_TOKEN: &str = r"^(\s*[_\.\d\w]*\s*)";

/// Value token up to end of line, captured as group 2.
pub const VALUE_TOKEN: &str = r"([\s\d\w\W\.]*)$";
