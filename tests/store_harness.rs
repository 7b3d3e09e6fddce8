#![allow(unused)]
//! Catalog store integration harness.
//!
//! # What this covers
//!
//! - **Backend parity**: the in-memory and JSON-file backends answer every
//!   read and search identically for the same catalog.
//! - **Keyword creation**: uniqueness, cluster validation, persistence.
//! - **Mentor insertion**: id assignment, `clusterName` derived from the
//!   cluster record, keywords defaulted from the cluster.
//! - **Availability**: ten slots per seeded mentor, unknown mentors rejected.
//! - **Scheduling**: events, counselors, session ownership, notifications and
//!   newsletter rules hold on both backends.
//!
//! # Running
//!
//! ```sh
//! cargo test --test store_harness
//! ```

mod common;
use common::*;

use std::sync::Arc;

use chrono::Duration;
use mm_core::{
    Category, NewCareerEvent, NewCareerKeyword, NewCounselorSession, NewMentor,
    NewMentorSession, SessionStatus,
};
use mm_store::{CatalogStore, FileStore, MemoryStore, StoreError, Subscribed};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

/// A backend plus whatever keeps it alive.
struct Backend {
    store: Arc<dyn CatalogStore>,
    _dir: Option<TempDir>,
}

fn memory() -> Backend {
    Backend {
        store: Arc::new(seed_store()),
        _dir: None,
    }
}

fn file() -> Backend {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::create(dir.path().join("catalog.json"), &seed_catalog()).unwrap();
    Backend {
        store: Arc::new(store),
        _dir: Some(dir),
    }
}

fn new_mentor(cluster_id: u32) -> NewMentor {
    NewMentor {
        name: "Ana Ruiz".into(),
        title: "Harbor Pilot".into(),
        company: "Port Tampa Bay".into(),
        avatar_url: None,
        rating: 44,
        years_experience: 12,
        location: "Tampa, FL".into(),
        expertise: vec!["Ship Handling".into()],
        bio: None,
        cluster_id,
        cluster_name: Some("Stale Name".into()),
        keywords: None,
    }
}

// ---------------------------------------------------------------------------
// Parity
// ---------------------------------------------------------------------------

#[test]
fn backends_agree_on_searches() {
    let memory = memory();
    let file = file();
    for query in ["", "water", "military", "air force", "money", "ships", "Doctor", "xyz123nonsense"] {
        assert_eq!(
            memory.store.search_clusters(query).unwrap(),
            file.store.search_clusters(query).unwrap(),
            "cluster search {query:?}"
        );
        assert_eq!(
            memory.store.search_mentors(query).unwrap(),
            file.store.search_mentors(query).unwrap(),
            "mentor search {query:?}"
        );
    }
}

#[rstest]
#[case::memory(memory())]
#[case::file(file())]
fn reads(#[case] backend: Backend) {
    let store = &backend.store;
    assert_eq!(store.clusters().unwrap().len(), 23);
    assert_eq!(store.clusters_by_category(Category::Military).unwrap().len(), 6);
    assert_eq!(store.cluster(19).unwrap().map(|c| c.name), Some("Navy".to_string()));
    assert_eq!(store.cluster(0).unwrap(), None);

    assert_eq!(store.mentors().unwrap().len(), 23);
    let navy = store.mentors_by_cluster(19).unwrap();
    assert_names!(navy, ["Lt. Sofia Rodriguez"]);
    assert_eq!(store.mentor(99).unwrap(), None);

    let service = store.search_keywords("SERV").unwrap();
    assert_eq!(service.len(), 1);
    assert_eq!(service[0].keyword, "service");
}

#[rstest]
#[case::memory(memory())]
#[case::file(file())]
fn create_keyword_rules(#[case] backend: Backend) {
    let store = &backend.store;
    let created = store
        .create_keyword(NewCareerKeyword { cluster_id: 6, keyword: "Turbines".into() })
        .unwrap();
    assert_eq!(created.cluster_id, 6);
    assert!(store.keywords_by_cluster(6).unwrap().contains(&created));

    assert!(matches!(
        store.create_keyword(NewCareerKeyword { cluster_id: 6, keyword: "turbines".into() }),
        Err(StoreError::DuplicateKeyword(_))
    ));
    assert!(matches!(
        store.create_keyword(NewCareerKeyword { cluster_id: 77, keyword: "warp".into() }),
        Err(StoreError::UnknownCluster(77))
    ));
}

#[rstest]
#[case::memory(memory())]
#[case::file(file())]
fn insert_mentor_derives_cluster_fields(#[case] backend: Backend) {
    let store = &backend.store;
    let mentor = store.insert_mentor(new_mentor(19)).unwrap();

    assert_eq!(mentor.id, 24);
    assert_eq!(mentor.cluster_name.as_deref(), Some("Navy"));
    let cluster_keywords: Vec<String> = store
        .keywords_by_cluster(19)
        .unwrap()
        .into_iter()
        .map(|k| k.keyword)
        .collect();
    assert_eq!(mentor.keywords, Some(cluster_keywords));

    // The new mentor is immediately searchable through its cluster.
    let found = store.search_mentors("navy").unwrap();
    assert!(found.iter().any(|m| m.id == 24));
}

#[rstest]
#[case::memory(memory())]
#[case::file(file())]
fn availability(#[case] backend: Backend) {
    let store = &backend.store;
    let slots = store.availability(3).unwrap();
    assert_eq!(slots.len(), 10);
    assert!(slots.iter().all(|s| s.mentor_id == 3));
    assert!(slots.windows(2).all(|w| w[0].date < w[1].date));
    assert!(matches!(
        store.availability(500),
        Err(StoreError::NotFound { kind: "mentor", id: 500 })
    ));
}

#[test]
fn file_backend_survives_reopen() {
    let backend = file();
    let dir = backend._dir.as_ref().unwrap();
    backend
        .store
        .insert_mentor(new_mentor(22))
        .unwrap();

    let reopened = FileStore::open(dir.path().join("catalog.json")).unwrap();
    let coast_guard = reopened.mentors_by_cluster(22).unwrap();
    assert_names!(coast_guard, ["Ens. Lily Nguyen", "Ana Ruiz"]);
}

// ---------------------------------------------------------------------------
// Scheduling
// ---------------------------------------------------------------------------

#[test]
fn backends_agree_on_schedule_reads() {
    let memory = memory();
    let file = file();
    let now = fixed_now();
    assert_eq!(memory.store.events().unwrap(), file.store.events().unwrap());
    assert_eq!(
        memory.store.upcoming_events(now).unwrap(),
        file.store.upcoming_events(now).unwrap()
    );
    assert_eq!(memory.store.counselors().unwrap(), file.store.counselors().unwrap());
    assert_eq!(
        memory.store.counselor_availability(2).unwrap(),
        file.store.counselor_availability(2).unwrap()
    );
}

#[rstest]
#[case::memory(memory())]
#[case::file(file())]
fn event_rules(#[case] backend: Backend) {
    let store = &backend.store;
    let now = fixed_now();
    assert_eq!(store.events().unwrap().len(), 4);
    assert_eq!(store.upcoming_events(now).unwrap().len(), 3);

    let new = NewCareerEvent {
        title: "Harbor Tour".into(),
        description: "Walk the port with a pilot".into(),
        location: "Port Tampa Bay".into(),
        event_date: now + Duration::days(1),
        registration_url: None,
        image_url: None,
        cluster_id: Some(19),
    };
    let event = store.create_event(new.clone(), Some(11), now).unwrap();
    assert_eq!(event.id, 5);
    assert_eq!(store.events_by_cluster(19).unwrap(), vec![event.clone()]);
    assert_eq!(store.upcoming_events(now).unwrap()[0], event);
    assert_eq!(store.notifications(11, true).unwrap()[0].event_id, Some(5));

    let orphan = NewCareerEvent { cluster_id: Some(404), ..new };
    assert!(matches!(
        store.create_event(orphan, None, now),
        Err(StoreError::UnknownCluster(404))
    ));
}

#[rstest]
#[case::memory(memory())]
#[case::file(file())]
fn session_rules(#[case] backend: Backend) {
    let store = &backend.store;
    let now = fixed_now();

    let session = store
        .create_mentor_session(
            NewMentorSession {
                student_id: 4,
                mentor_id: 19,
                date: now + Duration::minutes(30),
                status: SessionStatus::Scheduled,
                notes: None,
            },
            now,
        )
        .unwrap();
    // Too close for either reminder.
    assert_eq!(store.notifications(4, false).unwrap().len(), 1);

    assert!(matches!(
        store.update_mentor_session_status(session.id, 5, SessionStatus::Cancelled),
        Err(StoreError::NotOwner { .. })
    ));
    let cancelled = store
        .update_mentor_session_status(session.id, 4, SessionStatus::Cancelled)
        .unwrap();
    assert_eq!(cancelled.status, SessionStatus::Cancelled);

    let booked = store
        .create_counselor_session(
            NewCounselorSession {
                student_id: 4,
                counselor_id: 1,
                session_date: now + Duration::days(2),
                duration: 45,
                session_type: "  Career Planning ".into(),
                notes: None,
                status: SessionStatus::Scheduled,
                meeting_link: None,
            },
            now,
        )
        .unwrap();
    assert_eq!(booked.session_type, "Career Planning");
    assert_eq!(store.counselor_sessions(4).unwrap(), vec![booked.clone()]);
    assert!(matches!(
        store.update_counselor_session_status(booked.id + 1, 4, SessionStatus::Completed),
        Err(StoreError::NotFound { .. })
    ));
}

#[rstest]
#[case::memory(memory())]
#[case::file(file())]
fn notification_and_newsletter_rules(#[case] backend: Backend) {
    let store = &backend.store;
    let now = fixed_now();
    store
        .create_mentor_session(
            NewMentorSession {
                student_id: 9,
                mentor_id: 1,
                date: now + Duration::days(3),
                status: SessionStatus::Scheduled,
                notes: None,
            },
            now,
        )
        .unwrap();

    let notes = store.notifications(9, false).unwrap();
    assert_eq!(notes.len(), 3);
    let read = store.mark_notification_read(notes[2].id).unwrap();
    assert!(read.is_read);
    assert_eq!(store.notifications(9, true).unwrap().len(), 2);
    store.delete_notification(notes[0].id).unwrap();
    assert!(matches!(
        store.delete_notification(notes[0].id),
        Err(StoreError::NotFound { kind: "notification", .. })
    ));

    assert!(matches!(
        store.subscribe_newsletter("sam@example.com", now).unwrap(),
        Subscribed::New(_)
    ));
    assert!(matches!(
        store.subscribe_newsletter(" Sam@Example.com ", now).unwrap(),
        Subscribed::Existing(_)
    ));
    assert!(matches!(
        store.subscribe_newsletter("@example.com", now),
        Err(StoreError::InvalidEmail(_))
    ));
}

#[test]
fn file_backend_keeps_schedule_across_reopen() {
    let backend = file();
    let dir = backend._dir.as_ref().unwrap();
    backend
        .store
        .subscribe_newsletter("lee@example.net", fixed_now())
        .unwrap();

    let reopened = FileStore::open(dir.path().join("catalog.json")).unwrap();
    assert!(matches!(
        reopened.subscribe_newsletter("lee@example.net", fixed_now()).unwrap(),
        Subscribed::Existing(_)
    ));
    assert_eq!(reopened.events().unwrap().len(), 4);
}
