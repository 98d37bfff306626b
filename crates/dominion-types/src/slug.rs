//! Canonical nation slug derivation.
//!
//! A nation's display name is free text supplied by the founding agent.
//! The slug is the canonical, URL-safe, comparable key derived from that
//! name, and it is the addressable identity of the nation everywhere else
//! in the system: policies and candidates are keyed by slug, and the
//! directory's uniqueness constraint is declared over it.
//!
//! Distinct display names may normalize to the same slug. That is expected
//! and is not this module's problem: collisions are arbitrated by the
//! nation directory's unique index at insert time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Canonical, URL-safe key derived from a nation's display name.
///
/// Construct via [`NationSlug::normalize`] when deriving from free text,
/// or [`NationSlug::from_raw`] when reading back a value that was already
/// canonicalized at write time (e.g. a database column or URL path
/// segment).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NationSlug(String);

impl NationSlug {
    /// Derive the canonical slug from a free-text nation name.
    ///
    /// The transformation, in order: lowercase, trim surrounding
    /// whitespace, delete every character outside `[a-z0-9 -]`, collapse
    /// each run of whitespace and/or hyphens to a single hyphen.
    ///
    /// The function is total (never fails) and idempotent:
    /// `normalize(normalize(s).as_str()) == normalize(s)` for all inputs.
    /// It can produce an empty slug (e.g. from `"!!!"`); callers that
    /// need a non-empty key must check [`NationSlug::is_empty`].
    pub fn normalize(name: &str) -> Self {
        let lowered = name.to_lowercase();
        let trimmed = lowered.trim();

        let mut slug = String::with_capacity(trimmed.len());
        // Tracks an open run of separator characters (whitespace or
        // hyphens). The run is flushed as a single hyphen when the next
        // kept character arrives, or at end of input.
        let mut in_break = false;
        for ch in trimmed.chars() {
            match ch {
                'a'..='z' | '0'..='9' => {
                    if in_break {
                        slug.push('-');
                        in_break = false;
                    }
                    slug.push(ch);
                }
                '-' => in_break = true,
                c if c.is_whitespace() => in_break = true,
                // Everything else is deleted without closing the run.
                _ => {}
            }
        }
        if in_break {
            slug.push('-');
        }

        Self(slug)
    }

    /// Wrap a string that is already in canonical form.
    ///
    /// Used when reading slugs back from storage or from URL path
    /// segments. No normalization is applied; a non-canonical value will
    /// simply never match a stored nation.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the slug is empty.
    ///
    /// An empty slug means the source name contained no usable
    /// characters; the nation directory rejects such names.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for NationSlug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NationSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_documented_example() {
        let slug = NationSlug::normalize("The Red Crab Society!!");
        assert_eq!(slug.as_str(), "the-red-crab-society");
    }

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(NationSlug::normalize("Atlantis").as_str(), "atlantis");
        assert_eq!(NationSlug::normalize("New  Avalon").as_str(), "new-avalon");
        assert_eq!(NationSlug::normalize("ATLANTIS!").as_str(), "atlantis");
    }

    #[test]
    fn collapses_mixed_separator_runs() {
        assert_eq!(NationSlug::normalize("a - b").as_str(), "a-b");
        assert_eq!(NationSlug::normalize("a--b").as_str(), "a-b");
        assert_eq!(NationSlug::normalize("a \t\n b").as_str(), "a-b");
    }

    #[test]
    fn strips_punctuation_without_joining_words() {
        // The separator run stays open across deleted characters.
        assert_eq!(NationSlug::normalize("a ! b").as_str(), "a-b");
        assert_eq!(NationSlug::normalize("a!b").as_str(), "ab");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "The Red Crab Society!!",
            "  spaced   out  ",
            "ünïcödé nation",
            "--edge--case--",
            "!!!",
            "",
        ];
        for input in inputs {
            let once = NationSlug::normalize(input);
            let twice = NationSlug::normalize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn is_total_on_hostile_input() {
        // Control characters, emoji, RTL text: never panics, never errors.
        let slug = NationSlug::normalize("\u{0}\u{7f}🌍West-Land\u{202e}");
        assert_eq!(slug.as_str(), "west-land");
    }

    #[test]
    fn empty_when_no_usable_characters() {
        assert!(NationSlug::normalize("").is_empty());
        assert!(NationSlug::normalize("!!!").is_empty());
        assert!(NationSlug::normalize("   ").is_empty());
        assert!(!NationSlug::normalize("x").is_empty());
    }

    #[test]
    fn serializes_as_plain_string() {
        let slug = NationSlug::normalize("Atlantis");
        let json = serde_json::to_string(&slug).unwrap_or_default();
        assert_eq!(json, "\"atlantis\"");
    }
}
