//! Domain-specific assertion macros for mentormatch harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! records involved rather than dumping whole structs.

/// Assert that a search result has exactly these names, in order.
///
/// ```rust
/// assert_names!(search_clusters("water", &clusters), ["Navy", "Coast Guard"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let actual: Vec<String> = $results.iter().map(|r| r.name.clone()).collect();
        let expected: Vec<String> = vec![$($name.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "result names differ");
    }};
}

/// Assert that every record in `$small` also appears in `$big` (by id).
#[macro_export]
macro_rules! assert_id_subset {
    ($small:expr, $big:expr) => {{
        let big: std::collections::BTreeSet<u32> = $big.iter().map(|r| r.id).collect();
        let missing: Vec<u32> = $small
            .iter()
            .map(|r| r.id)
            .filter(|id| !big.contains(id))
            .collect();
        assert!(
            missing.is_empty(),
            "assert_id_subset! failed: ids {:?} missing from the larger result",
            missing
        );
    }};
}

/// Names of the records in a result, for snapshots and ad-hoc checks.
pub fn names<T, F>(results: &[T], name: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    results.iter().map(|r| name(r).to_string()).collect()
}
