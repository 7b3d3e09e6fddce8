//! Catalog fixtures used across harnesses.

use chrono::{DateTime, TimeZone, Utc};
use mm_core::{CareerCluster, Mentor};
use mm_store::{seed, Catalog, MemoryStore};

use super::builders::{ClusterBuilder, MentorBuilder};

/// The instant seed availability is anchored at.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
}

/// The full built-in catalog.
pub fn seed_catalog() -> Catalog {
    seed::catalog(fixed_now())
}

pub fn seed_store() -> MemoryStore {
    MemoryStore::seeded_at(fixed_now())
}

/// A small mixed catalog: two Florida clusters and three military branches.
pub fn small_clusters() -> Vec<CareerCluster> {
    vec![
        ClusterBuilder::new(1, "Finance")
            .description("Careers in financial services")
            .build(),
        ClusterBuilder::new(2, "Information Technology")
            .description("Careers in computing and digital technology")
            .build(),
        ClusterBuilder::new(3, "Navy")
            .military()
            .description("Careers in the U.S. Navy")
            .build(),
        ClusterBuilder::new(4, "Air Force")
            .military()
            .description("Careers in the U.S. Air Force")
            .build(),
        ClusterBuilder::new(5, "Coast Guard")
            .military()
            .description("Careers in the U.S. Coast Guard")
            .build(),
    ]
}

/// Mentors over [`small_clusters`], including a bare record and a dangling
/// cluster reference.
pub fn small_mentors() -> Vec<Mentor> {
    let clusters = small_clusters();
    vec![
        MentorBuilder::new(1, "Jane Doe")
            .bio("I fly planes")
            .keywords(["aviation"])
            .cluster(&clusters[0])
            .build(),
        MentorBuilder::new(2, "Raj Patel")
            .title("Financial Advisor")
            .company("Secure Wealth Management")
            .expertise(["Investment Planning"])
            .keywords(["banking", "money"])
            .cluster(&clusters[0])
            .build(),
        MentorBuilder::new(3, "Lt. Sofia Rodriguez")
            .title("Navy Lieutenant")
            .company("U.S. Navy")
            .cluster(&clusters[2])
            .build(),
        MentorBuilder::new(4, "Bare Record").build(),
        MentorBuilder::new(5, "Ghost Sailor")
            .title("Deckhand")
            .cluster_id(404)
            .build(),
    ]
}
