//! Catalog: the in-process record set every backend wraps.
//!
//! A [`Catalog`] doubles as the on-disk JSON document read by
//! [`FileStore`](crate::FileStore): `{clusters, mentors, keywords}` plus
//! optional availability, event, counselor, session, notification and
//! newsletter lists. Mutations keep ids monotonic and keep each mentor's
//! denormalised `clusterName` in step with its `clusterId`.
//!
//! Scheduling operations live in [`crate::schedule`].

use mm_core::{
    CareerCluster, CareerEvent, CareerKeyword, Category, Counselor, CounselorAvailability,
    CounselorSession, Mentor, MentorAvailability, MentorSession, NewCareerKeyword, NewMentor,
    NewsletterSubscription, Notification,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub clusters: Vec<CareerCluster>,
    #[serde(default)]
    pub mentors: Vec<Mentor>,
    #[serde(default)]
    pub keywords: Vec<CareerKeyword>,
    #[serde(default)]
    pub availability: Vec<MentorAvailability>,
    #[serde(default)]
    pub events: Vec<CareerEvent>,
    #[serde(default)]
    pub counselors: Vec<Counselor>,
    #[serde(default)]
    pub counselor_availability: Vec<CounselorAvailability>,
    #[serde(default)]
    pub mentor_sessions: Vec<MentorSession>,
    #[serde(default)]
    pub counselor_sessions: Vec<CounselorSession>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub newsletter: Vec<NewsletterSubscription>,
}

impl Catalog {
    /// Recompute every mentor's `cluster_name` from its `cluster_id`.
    ///
    /// A stored copy that disagrees with the cluster record is replaced and
    /// logged; a dangling `cluster_id` clears the name.
    pub fn reconcile(&mut self) {
        for i in 0..self.mentors.len() {
            let resolved = self.cluster_name(self.mentors[i].cluster_id);
            let mentor = &mut self.mentors[i];
            if mentor.cluster_name.is_some() && mentor.cluster_name != resolved {
                tracing::warn!(
                    mentor = mentor.id,
                    stored = ?mentor.cluster_name,
                    resolved = ?resolved,
                    "stale clusterName replaced"
                );
            }
            mentor.cluster_name = resolved;
        }
    }

    fn cluster_name(&self, cluster_id: u32) -> Option<String> {
        self.cluster(cluster_id).map(|c| c.name.clone())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn cluster(&self, id: u32) -> Option<&CareerCluster> {
        self.clusters.iter().find(|c| c.id == id)
    }

    pub fn clusters_by_category(&self, category: Category) -> Vec<CareerCluster> {
        self.clusters
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect()
    }

    pub fn mentor(&self, id: u32) -> Option<&Mentor> {
        self.mentors.iter().find(|m| m.id == id)
    }

    pub fn mentors_by_cluster(&self, cluster_id: u32) -> Vec<Mentor> {
        self.mentors
            .iter()
            .filter(|m| m.cluster_id == cluster_id)
            .cloned()
            .collect()
    }

    pub fn keywords_by_cluster(&self, cluster_id: u32) -> Vec<CareerKeyword> {
        self.keywords
            .iter()
            .filter(|k| k.cluster_id == cluster_id)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over keyword text.
    pub fn search_keywords(&self, fragment: &str) -> Vec<CareerKeyword> {
        let needle = fragment.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| k.keyword.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn availability(&self, mentor_id: u32) -> Result<Vec<MentorAvailability>> {
        if self.mentor(mentor_id).is_none() {
            return Err(StoreError::NotFound {
                kind: "mentor",
                id: mentor_id,
            });
        }
        Ok(self
            .availability
            .iter()
            .filter(|slot| slot.mentor_id == mentor_id)
            .cloned()
            .collect())
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Add a keyword. Text is trimmed and must be unique case-insensitively.
    pub fn create_keyword(&mut self, new: NewCareerKeyword) -> Result<CareerKeyword> {
        let text = new.keyword.trim();
        if text.is_empty() {
            return Err(StoreError::Blank("keyword"));
        }
        if self.cluster(new.cluster_id).is_none() {
            return Err(StoreError::UnknownCluster(new.cluster_id));
        }
        let lowered = text.to_lowercase();
        if self.keywords.iter().any(|k| k.keyword.to_lowercase() == lowered) {
            return Err(StoreError::DuplicateKeyword(text.to_string()));
        }

        let keyword = CareerKeyword {
            id: next_id("keyword", self.keywords.iter().map(|k| k.id))?,
            cluster_id: new.cluster_id,
            keyword: text.to_string(),
        };
        self.keywords.push(keyword.clone());
        Ok(keyword)
    }

    /// Add a mentor, assigning the next id.
    ///
    /// `cluster_name` always comes from the cluster record. Absent keywords
    /// are filled from the cluster's career keywords.
    pub fn insert_mentor(&mut self, new: NewMentor) -> Result<Mentor> {
        let cluster_name = self
            .cluster_name(new.cluster_id)
            .ok_or(StoreError::UnknownCluster(new.cluster_id))?;

        let id = next_id("mentor", self.mentors.iter().map(|m| m.id))?;
        let mut mentor = new.with_id(id);

        if mentor.cluster_name.as_deref().is_some_and(|n| n != cluster_name) {
            tracing::warn!(
                mentor = id,
                stored = ?mentor.cluster_name,
                resolved = %cluster_name,
                "clusterName disagrees with clusterId; using the cluster record"
            );
        }
        mentor.cluster_name = Some(cluster_name);

        if mentor.keywords.is_none() {
            mentor.keywords = Some(
                self.keywords_by_cluster(mentor.cluster_id)
                    .into_iter()
                    .map(|k| k.keyword)
                    .collect(),
            );
        }

        self.mentors.push(mentor.clone());
        Ok(mentor)
    }
}

/// One past the largest id in use, or 1 for an empty table.
pub(crate) fn next_id(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<u32> {
    match ids.max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(kind)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
