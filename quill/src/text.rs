//! Free-text normalization and placeholder substitution.
//!
//! `clamp` runs on every free-text field right before interpolation and once
//! more on the fully joined output; `substitute` runs last, after the final
//! clamp. Both are pure.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("static regex"));

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("static regex"));

/// Collapses runs of three or more newlines into exactly two, then trims the
/// whole string. Idempotent: clamping an already-clamped string is a no-op.
pub fn clamp(s: &str) -> String {
    BLANK_RUNS.replace_all(s, "\n\n").trim().to_string()
}

/// Single-pass `{NAME}` substitution against `vars`.
///
/// A token is a brace-delimited identifier of letters, digits, and
/// underscores. Bound identifiers are replaced (braces included) with the
/// mapped value; unbound tokens pass through verbatim. Inserted values are
/// not re-scanned, so substitution never recurses. Keys containing other
/// characters can never match and are silently inert.
pub fn substitute(s: &str, vars: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(s, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn clamp_collapses_blank_runs_and_trims() {
        assert_eq!(clamp("  a\n\n\n\nb\n"), "a\n\nb");
        assert_eq!(clamp("a\n\nb"), "a\n\nb");
    }

    /// Clamping an already-clamped string returns it unchanged.
    #[test]
    fn clamp_is_idempotent() {
        let inputs = ["", "one line", "a\nb", "a\n\nb\n\nc", "  x\n\n\n\ny  "];
        for s in inputs {
            let once = clamp(s);
            assert_eq!(clamp(&once), once);
        }
    }

    #[test]
    fn substitute_replaces_bound_tokens() {
        let v = vars(&[("LANG", "Rust"), ("NAME", "quill")]);
        assert_eq!(
            substitute("Write {LANG} for {NAME}.", &v),
            "Write Rust for quill."
        );
    }

    /// Unbound placeholders pass through verbatim, braces included.
    #[test]
    fn substitute_leaves_unbound_tokens() {
        let v = BTreeMap::new();
        assert_eq!(substitute("keep {UNBOUND} here", &v), "keep {UNBOUND} here");
    }

    /// Substitution is single-pass: inserted values are not re-scanned.
    #[test]
    fn substitute_is_not_recursive() {
        let v = vars(&[("X", "{Y}"), ("Y", "boom")]);
        assert_eq!(substitute("{X}", &v), "{Y}");
    }

    /// Keys outside the identifier syntax never match any token.
    #[test]
    fn substitute_malformed_keys_are_inert() {
        let v = vars(&[("BAD KEY", "nope"), ("A-B", "nope")]);
        assert_eq!(substitute("{BAD KEY} {A-B}", &v), "{BAD KEY} {A-B}");
    }

    #[test]
    fn substitute_ignores_non_identifier_braces() {
        let v = vars(&[("K", "v")]);
        assert_eq!(substitute("{} {1 2} {K}", &v), "{} {1 2} v");
    }
}
