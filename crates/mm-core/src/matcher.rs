//! Entity matcher: decides whether one catalog record satisfies a query.
//!
//! Match classes are tried in a fixed order and the first hit is reported.
//! The order only matters for explaining a result; the include/exclude
//! decision is a plain OR over all classes.
//!
//! 1. [`MatchClass::Everything`]: the query had no usable terms.
//! 2. [`MatchClass::Direct`]: a raw term is a substring of a direct field.
//! 3. Entity-specific routing:
//!    [`MatchClass::ExpandedName`] for clusters (the cluster's own name is an
//!    expanded term), [`MatchClass::ClusterMembership`] for mentors (the
//!    mentor's cluster matched the same query through the cluster table).
//! 4. [`MatchClass::ExpandedKeyword`]: a curated keyword contains, or is
//!    contained in, an expanded term.
//! 5. [`MatchClass::ExpandedText`]: an expanded term appears in the
//!    description or bio.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::expansion::{ExpansionTable, CLUSTER_TABLE, MENTOR_TABLE};
use crate::normalizer::TermSet;
use crate::types::{CareerCluster, Mentor};

/// Ids of clusters that matched a query through the cluster-oriented table.
pub type ClusterIds = BTreeSet<u32>;

/// Why an entity was included in a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchClass {
    Everything,
    Direct,
    ExpandedName,
    ClusterMembership,
    ExpandedKeyword,
    ExpandedText,
}

impl std::fmt::Display for MatchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MatchClass::Everything => "everything",
            MatchClass::Direct => "direct",
            MatchClass::ExpandedName => "expanded_name",
            MatchClass::ClusterMembership => "cluster_membership",
            MatchClass::ExpandedKeyword => "expanded_keyword",
            MatchClass::ExpandedText => "expanded_text",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Searchable capability
// ---------------------------------------------------------------------------

/// Borrowed view of the fields an entity exposes to the matcher.
///
/// Absent optional fields are `None` or empty and simply contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fields<'a> {
    pub name: &'a str,
    pub title: Option<&'a str>,
    pub company: Option<&'a str>,
    /// Free text: a cluster description or a mentor bio.
    pub text: Option<&'a str>,
    pub expertise: &'a [String],
    pub cluster_name: Option<&'a str>,
    pub keywords: &'a [String],
}

/// A catalog record the matching engine can filter.
pub trait Searchable {
    /// Whether searching this entity type needs the clusters matched by the
    /// same query (rule 3 for mentors).
    const CLUSTER_ROUTED: bool = false;

    /// The expansion table tuned for this entity type.
    fn expansion_table() -> &'static ExpansionTable
    where
        Self: Sized;

    fn fields(&self) -> Fields<'_>;

    /// Entity-specific rule 3. `expanded` is lowercase.
    fn route(&self, expanded: &TermSet, related_clusters: &ClusterIds) -> Option<MatchClass>;
}

impl Searchable for CareerCluster {
    fn expansion_table() -> &'static ExpansionTable {
        &CLUSTER_TABLE
    }

    fn fields(&self) -> Fields<'_> {
        Fields {
            name: &self.name,
            text: Some(&self.description),
            ..Fields::default()
        }
    }

    fn route(&self, expanded: &TermSet, _related_clusters: &ClusterIds) -> Option<MatchClass> {
        expanded
            .contains(&self.name.to_lowercase())
            .then_some(MatchClass::ExpandedName)
    }
}

impl Searchable for Mentor {
    const CLUSTER_ROUTED: bool = true;

    fn expansion_table() -> &'static ExpansionTable {
        &MENTOR_TABLE
    }

    fn fields(&self) -> Fields<'_> {
        Fields {
            name: &self.name,
            title: Some(&self.title),
            company: Some(&self.company),
            text: self.bio.as_deref(),
            expertise: &self.expertise,
            cluster_name: self.cluster_name.as_deref(),
            keywords: self.keywords.as_deref().unwrap_or_default(),
        }
    }

    fn route(&self, _expanded: &TermSet, related_clusters: &ClusterIds) -> Option<MatchClass> {
        related_clusters
            .contains(&self.cluster_id)
            .then_some(MatchClass::ClusterMembership)
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Classify `entity` against a query, returning the first match class that
/// admits it, or `None` when it is excluded.
pub fn classify<T: Searchable>(
    entity: &T,
    raw: &TermSet,
    expanded: &TermSet,
    related_clusters: &ClusterIds,
) -> Option<MatchClass> {
    if raw.is_empty() {
        return Some(MatchClass::Everything);
    }

    let fields = entity.fields();
    debug_assert!(!fields.name.is_empty(), "searchable entity without a name");

    let direct: Vec<String> = [
        Some(fields.name),
        fields.title,
        fields.company,
        fields.text,
        fields.cluster_name,
    ]
    .into_iter()
    .flatten()
    .chain(fields.expertise.iter().map(String::as_str))
    .chain(fields.keywords.iter().map(String::as_str))
    .map(str::to_lowercase)
    .collect();

    if raw.iter().any(|term| direct.iter().any(|field| field.contains(term.as_str()))) {
        return Some(MatchClass::Direct);
    }

    if let Some(class) = entity.route(expanded, related_clusters) {
        return Some(class);
    }

    let keyword_hit = fields.keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        expanded
            .iter()
            .any(|term| keyword.contains(term.as_str()) || term.contains(keyword.as_str()))
    });
    if keyword_hit {
        return Some(MatchClass::ExpandedKeyword);
    }

    if let Some(text) = fields.text {
        let text = text.to_lowercase();
        if expanded.iter().any(|term| text.contains(term.as_str())) {
            return Some(MatchClass::ExpandedText);
        }
    }

    None
}

/// Context-free match decision: rules 1, 2, 4 and 5 plus cluster name
/// routing. Mentor cluster membership needs [`classify`] with related ids.
pub fn matches<T: Searchable>(entity: &T, raw: &TermSet, expanded: &TermSet) -> bool {
    classify(entity, raw, expanded, &ClusterIds::new()).is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
