//! mm-core: mentormatch core library.
//!
//! Catalog types, configuration, and the keyword-expansion matching engine
//! that relates free-text queries to career clusters and mentors.
//!
//! # Architecture
//!
//! ```text
//! query ──► normalizer ──► expansion table ──► matcher ──► filtered catalog
//!                              (cluster | mentor)   ▲
//!                                                   └── related cluster ids
//! ```
//!
//! Everything in the engine is pure and synchronous. Storage lives in
//! `mm-store`; the HTTP surface lives in `mm-server`.

pub mod config;
pub mod expansion;
pub mod matcher;
pub mod normalizer;
pub mod search;
pub mod types;

pub use expansion::{ExpansionTable, CLUSTER_TABLE, MENTOR_TABLE};
pub use matcher::{classify, matches, ClusterIds, MatchClass, Searchable};
pub use normalizer::{normalize, TermSet};
pub use search::{search_clusters, search_explained, search_mentors, Hit, Query, SearchEngine};
pub use types::{
    CareerCluster, CareerEvent, CareerKeyword, Category, Counselor, CounselorAvailability,
    CounselorSession, Mentor, MentorAvailability, MentorSession, NewCareerEvent,
    NewCareerKeyword, NewCounselorSession, NewMentor, NewMentorSession, NewsletterSubscription,
    Notification, NotificationKind, SessionStatus, UnknownCategory, UnknownStatus,
};
