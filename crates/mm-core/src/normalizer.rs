//! Normalizer: turns a raw search query into a set of lowercase terms.
//!
//! Tokens are split on whitespace runs, single-character tokens are dropped,
//! and every surviving token contributes its naive singular/plural variant so
//! that `ship` and `ships` normalise to overlapping sets.

use std::collections::BTreeSet;

/// A deduplicated, ordered set of lowercase search terms.
pub type TermSet = BTreeSet<String>;

/// Normalise `query` into its search terms.
///
/// An empty or whitespace-only query (or one made only of single characters)
/// yields an empty set, which the matcher treats as "match everything".
pub fn normalize(query: &str) -> TermSet {
    let lowered = query.trim().to_lowercase();
    let mut terms = TermSet::new();

    for token in lowered.split_whitespace() {
        if token.chars().count() <= 1 {
            continue;
        }
        terms.extend(inflections(token));
    }

    terms
}

/// The token itself plus its synthesised plural and singular forms.
///
/// Plural: append `s` unless the token already ends in `s`.
/// Singular: drop a trailing `s` when the token is longer than two characters.
pub fn inflections(token: &str) -> Vec<String> {
    let mut forms = vec![token.to_string()];

    if token.ends_with('s') {
        if token.chars().count() > 2 {
            forms.push(token[..token.len() - 1].to_string());
        }
    } else {
        forms.push(format!("{token}s"));
    }

    forms
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn set(terms: &[&str]) -> TermSet {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn lowercases_and_adds_plural() {
        assert_eq!(normalize("  NAVY "), set(&["navy", "navys"]));
    }

    #[test]
    fn plural_token_gets_singular() {
        assert_eq!(normalize("ships"), set(&["ships", "ship"]));
    }

    #[test]
    fn multi_word_query_splits_on_whitespace_runs() {
        assert_eq!(
            normalize("air \t  force"),
            set(&["air", "airs", "force", "forces"])
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   \t\n ")]
    #[case::single_chars("a b c")]
    fn degenerate_queries_normalise_to_empty(#[case] query: &str) {
        assert!(normalize(query).is_empty());
    }

    #[test]
    fn two_letter_s_token_keeps_no_singular() {
        // "as" ends in s but is too short to strip.
        assert_eq!(normalize("as"), set(&["as"]));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(normalize("ship ships SHIP"), set(&["ship", "ships"]));
    }

    #[test]
    fn multibyte_single_char_is_dropped() {
        assert!(normalize("é").is_empty());
    }
}
