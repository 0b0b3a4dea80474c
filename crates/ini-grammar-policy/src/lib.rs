//! Parser behaviour flags for ini-grammar.
//!
//! This crate holds the policy switches an INI parser consults when it meets
//! malformed or duplicate input. The flags carry no synthesis logic of their
//! own, so they live apart from the grammar crate and can be shared by parser
//! implementations without pulling in the regex stack.
//!
//! Defaults may be overridden through environment variables prefixed with
//! `INI_GRAMMAR_`; see [`ParserPolicy::from_env`].

/// Environment variable overriding [`ParserPolicy::allow_keys_without_section`].
pub const ALLOW_KEYS_WITHOUT_SECTION_ENV: &str = "INI_GRAMMAR_ALLOW_KEYS_WITHOUT_SECTION";
/// Environment variable overriding [`ParserPolicy::allow_duplicate_keys`].
pub const ALLOW_DUPLICATE_KEYS_ENV: &str = "INI_GRAMMAR_ALLOW_DUPLICATE_KEYS";
/// Environment variable overriding [`ParserPolicy::allow_duplicate_sections`].
pub const ALLOW_DUPLICATE_SECTIONS_ENV: &str = "INI_GRAMMAR_ALLOW_DUPLICATE_SECTIONS";
/// Environment variable overriding [`ParserPolicy::throw_on_error`].
pub const THROW_ON_ERROR_ENV: &str = "INI_GRAMMAR_THROW_ON_ERROR";

/// Behaviour switches read by a parser at each relevant decision point.
///
/// Assigning a flag never fails and has no side effects; the grammar crate
/// only stores and returns these values.
///
/// # Examples
///
/// ```
/// use ini_grammar_policy::ParserPolicy;
///
/// let policy = ParserPolicy::default().with_allow_duplicate_keys(true);
/// assert!(policy.allow_duplicate_keys);
/// assert!(policy.throw_on_error);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent switch consumed by the parser"
)]
pub struct ParserPolicy {
    /// Accept keys that appear before any section header instead of failing.
    pub allow_keys_without_section: bool,
    /// Let a repeated key inside one section overwrite the earlier value.
    pub allow_duplicate_keys: bool,
    /// Merge repeated section headers instead of failing.
    pub allow_duplicate_sections: bool,
    /// Surface parse failures as errors rather than an empty result.
    pub throw_on_error: bool,
}

impl Default for ParserPolicy {
    fn default() -> Self {
        Self {
            allow_keys_without_section: true,
            allow_duplicate_keys: false,
            allow_duplicate_sections: false,
            throw_on_error: true,
        }
    }
}

impl ParserPolicy {
    /// Return a copy with `allow_keys_without_section` replaced.
    #[must_use]
    pub const fn with_allow_keys_without_section(mut self, enabled: bool) -> Self {
        self.allow_keys_without_section = enabled;
        self
    }

    /// Return a copy with `allow_duplicate_keys` replaced.
    #[must_use]
    pub const fn with_allow_duplicate_keys(mut self, enabled: bool) -> Self {
        self.allow_duplicate_keys = enabled;
        self
    }

    /// Return a copy with `allow_duplicate_sections` replaced.
    #[must_use]
    pub const fn with_allow_duplicate_sections(mut self, enabled: bool) -> Self {
        self.allow_duplicate_sections = enabled;
        self
    }

    /// Return a copy with `throw_on_error` replaced.
    #[must_use]
    pub const fn with_throw_on_error(mut self, enabled: bool) -> Self {
        self.throw_on_error = enabled;
        self
    }

    /// Load the policy from `INI_GRAMMAR_*` environment variables.
    ///
    /// Missing or unparseable values keep their defaults.
    ///
    /// # Environment Variables
    ///
    /// - `INI_GRAMMAR_ALLOW_KEYS_WITHOUT_SECTION`
    /// - `INI_GRAMMAR_ALLOW_DUPLICATE_KEYS`
    /// - `INI_GRAMMAR_ALLOW_DUPLICATE_SECTIONS`
    /// - `INI_GRAMMAR_THROW_ON_ERROR`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the policy through an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use ini_grammar_policy::{ParserPolicy, THROW_ON_ERROR_ENV};
    ///
    /// let policy = ParserPolicy::from_lookup(|name| {
    ///     (name == THROW_ON_ERROR_ENV).then(|| "off".to_string())
    /// });
    /// assert!(!policy.throw_on_error);
    /// ```
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |name: &str, fallback: bool| {
            lookup(name)
                .as_deref()
                .and_then(parse_env_bool)
                .unwrap_or(fallback)
        };
        Self {
            allow_keys_without_section: flag(
                ALLOW_KEYS_WITHOUT_SECTION_ENV,
                defaults.allow_keys_without_section,
            ),
            allow_duplicate_keys: flag(ALLOW_DUPLICATE_KEYS_ENV, defaults.allow_duplicate_keys),
            allow_duplicate_sections: flag(
                ALLOW_DUPLICATE_SECTIONS_ENV,
                defaults.allow_duplicate_sections,
            ),
            throw_on_error: flag(THROW_ON_ERROR_ENV, defaults.throw_on_error),
        }
    }
}

fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "Yes" | "on" | "ON" | "On" => Some(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "No" | "off" | "OFF" | "Off" => {
            Some(false)
        }
        _ => None,
    }
}
