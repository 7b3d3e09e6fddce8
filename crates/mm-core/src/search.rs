//! Search layer: query engine with keyword expansion.
//!
//! [`Query::parse`] normalises and expands a raw query once; the engine then
//! runs a stable filter over the catalog, preserving catalog order. There is
//! no relevance ranking. Mentor searches additionally resolve which clusters
//! the same query matches through the cluster table so that a search for
//! `military` surfaces every mentor filed under a military branch.
//!
//! Everything here is pure and synchronous; callers fetch catalogs however
//! they like and hand in slices.

use crate::expansion::{ExpansionTable, CLUSTER_TABLE};
use crate::matcher::{classify, ClusterIds, MatchClass, Searchable};
use crate::normalizer::{normalize, TermSet};
use crate::types::{CareerCluster, Mentor};

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A normalised query and its expansion through one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Terms from the query itself, with singular/plural variants.
    pub raw: TermSet,
    /// `raw` plus every related term from the expansion table.
    pub expanded: TermSet,
}

impl Query {
    pub fn parse(query: &str, table: &ExpansionTable) -> Self {
        let raw = normalize(query);
        let expanded = table.expand(&raw);
        Self { raw, expanded }
    }

    /// Parse with the table tuned for `T`.
    pub fn for_entity<T: Searchable>(query: &str) -> Self {
        Self::parse(query, T::expansion_table())
    }

    /// True when the query has no usable terms and matches every entity.
    pub fn is_everything(&self) -> bool {
        self.raw.is_empty()
    }
}

/// One search result and the rule that admitted it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a, T> {
    pub entity: &'a T,
    pub class: MatchClass,
}

// ---------------------------------------------------------------------------
// Lazy filter
// ---------------------------------------------------------------------------

/// Lazy, order-preserving iterator over the entities that match a query.
pub struct Matches<'a, T> {
    query: Query,
    related_clusters: ClusterIds,
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T: Searchable> Iterator for Matches<'a, T> {
    type Item = Hit<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        for entity in self.inner.by_ref() {
            if let Some(class) = classify(
                entity,
                &self.query.raw,
                &self.query.expanded,
                &self.related_clusters,
            ) {
                return Some(Hit { entity, class });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The matching engine. Borrows the cluster catalog so mentor searches can
/// route through cluster membership.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'c> {
    clusters: &'c [CareerCluster],
}

impl<'c> SearchEngine<'c> {
    pub fn new(clusters: &'c [CareerCluster]) -> Self {
        Self { clusters }
    }

    /// Ids of clusters that `query` matches through the cluster table.
    pub fn related_clusters(&self, query: &str) -> ClusterIds {
        let cluster_query = Query::parse(query, &CLUSTER_TABLE);
        if cluster_query.is_everything() {
            return ClusterIds::new();
        }

        let none = ClusterIds::new();
        self.clusters
            .iter()
            .filter(|cluster| {
                classify(*cluster, &cluster_query.raw, &cluster_query.expanded, &none).is_some()
            })
            .map(|cluster| cluster.id)
            .collect()
    }

    /// Lazily filter `catalog` by `query`.
    pub fn iter<'a, T: Searchable>(&self, query: &str, catalog: &'a [T]) -> Matches<'a, T> {
        let parsed = Query::for_entity::<T>(query);
        let related_clusters = if T::CLUSTER_ROUTED && !parsed.is_everything() {
            self.related_clusters(query)
        } else {
            ClusterIds::new()
        };

        tracing::debug!(
            query,
            table = T::expansion_table().name(),
            raw = parsed.raw.len(),
            expanded = parsed.expanded.len(),
            related_clusters = related_clusters.len(),
            catalog = catalog.len(),
            "search started"
        );

        Matches {
            query: parsed,
            related_clusters,
            inner: catalog.iter(),
        }
    }

    /// Every hit with the rule that admitted it, in catalog order.
    pub fn explain<'a, T: Searchable>(&self, query: &str, catalog: &'a [T]) -> Vec<Hit<'a, T>> {
        let hits: Vec<_> = self.iter(query, catalog).collect();
        for hit in &hits {
            tracing::trace!(name = hit.entity.fields().name, class = %hit.class, "matched");
        }
        hits
    }

    /// Filter `catalog` by `query`, preserving order.
    pub fn search<T: Searchable + Clone>(&self, query: &str, catalog: &[T]) -> Vec<T> {
        let results: Vec<T> = self
            .iter(query, catalog)
            .map(|hit| hit.entity.clone())
            .collect();
        tracing::debug!(query, hits = results.len(), "search finished");
        results
    }
}

/// Search the cluster catalog.
pub fn search_clusters(query: &str, clusters: &[CareerCluster]) -> Vec<CareerCluster> {
    SearchEngine::new(clusters).search(query, clusters)
}

/// Search mentors, routing through the clusters in `clusters`.
pub fn search_mentors(query: &str, mentors: &[Mentor], clusters: &[CareerCluster]) -> Vec<Mentor> {
    SearchEngine::new(clusters).search(query, mentors)
}

/// Like [`SearchEngine::search`] but keeps the [`MatchClass`] of every hit.
pub fn search_explained<'a, T: Searchable>(
    query: &str,
    catalog: &'a [T],
    clusters: &[CareerCluster],
) -> Vec<Hit<'a, T>> {
    SearchEngine::new(clusters).explain(query, catalog)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
