//! mm-store: catalog storage for mentormatch.
//!
//! [`CatalogStore`] is the seam between the HTTP layer and wherever clusters,
//! mentors and keywords live. Backends only supply records; keyword search
//! over clusters and mentors is a provided method that hands the catalog to
//! the shared engine in `mm_core::search`, so every backend matches the
//! same way.
//!
//! Two backends ship here:
//!
//! - [`MemoryStore`]: the built-in seed catalog held in memory.
//! - [`FileStore`]: a JSON catalog document on disk, rewritten on mutation.

pub mod catalog;
pub mod error;
pub mod file;
pub mod memory;
pub mod schedule;
pub mod seed;

use chrono::{DateTime, Utc};
use mm_core::{
    CareerCluster, CareerEvent, CareerKeyword, Category, Counselor, CounselorAvailability,
    CounselorSession, Mentor, MentorAvailability, MentorSession, NewCareerEvent,
    NewCareerKeyword, NewCounselorSession, NewMentor, NewMentorSession, Notification,
    SessionStatus,
};

pub use catalog::Catalog;
pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use schedule::Subscribed;

/// Read/write access to a mentormatch catalog.
///
/// Methods are synchronous and may block on I/O; async callers should run
/// them on a blocking thread. Operations that depend on the time take `now`.
pub trait CatalogStore: Send + Sync {
    fn clusters(&self) -> Result<Vec<CareerCluster>>;
    fn cluster(&self, id: u32) -> Result<Option<CareerCluster>>;
    fn clusters_by_category(&self, category: Category) -> Result<Vec<CareerCluster>>;

    fn mentors(&self) -> Result<Vec<Mentor>>;
    fn mentor(&self, id: u32) -> Result<Option<Mentor>>;
    fn mentors_by_cluster(&self, cluster_id: u32) -> Result<Vec<Mentor>>;

    fn keywords(&self) -> Result<Vec<CareerKeyword>>;
    fn keywords_by_cluster(&self, cluster_id: u32) -> Result<Vec<CareerKeyword>>;
    /// Case-insensitive substring search over keyword text.
    fn search_keywords(&self, fragment: &str) -> Result<Vec<CareerKeyword>>;
    fn create_keyword(&self, new: NewCareerKeyword) -> Result<CareerKeyword>;

    fn insert_mentor(&self, new: NewMentor) -> Result<Mentor>;
    /// Slots for a known mentor; an unknown mentor is `NotFound`.
    fn availability(&self, mentor_id: u32) -> Result<Vec<MentorAvailability>>;

    /// All career events, soonest first.
    fn events(&self) -> Result<Vec<CareerEvent>>;
    fn event(&self, id: u32) -> Result<Option<CareerEvent>>;
    fn upcoming_events(&self, now: DateTime<Utc>) -> Result<Vec<CareerEvent>>;
    fn events_by_cluster(&self, cluster_id: u32) -> Result<Vec<CareerEvent>>;
    /// Add an event, notifying `notify` when given.
    fn create_event(
        &self,
        new: NewCareerEvent,
        notify: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<CareerEvent>;

    /// Active counselors ordered by name.
    fn counselors(&self) -> Result<Vec<Counselor>>;
    fn counselor(&self, id: u32) -> Result<Option<Counselor>>;
    fn counselor_availability(&self, counselor_id: u32) -> Result<Vec<CounselorAvailability>>;

    fn mentor_sessions(&self, student_id: u32) -> Result<Vec<MentorSession>>;
    fn create_mentor_session(
        &self,
        new: NewMentorSession,
        now: DateTime<Utc>,
    ) -> Result<MentorSession>;
    fn update_mentor_session_status(
        &self,
        id: u32,
        student_id: u32,
        status: SessionStatus,
    ) -> Result<MentorSession>;

    fn counselor_sessions(&self, student_id: u32) -> Result<Vec<CounselorSession>>;
    fn create_counselor_session(
        &self,
        new: NewCounselorSession,
        now: DateTime<Utc>,
    ) -> Result<CounselorSession>;
    fn update_counselor_session_status(
        &self,
        id: u32,
        student_id: u32,
        status: SessionStatus,
    ) -> Result<CounselorSession>;

    /// A user's notifications, newest first.
    fn notifications(&self, user_id: u32, unread_only: bool) -> Result<Vec<Notification>>;
    fn mark_notification_read(&self, id: u32) -> Result<Notification>;
    fn delete_notification(&self, id: u32) -> Result<()>;

    fn subscribe_newsletter(&self, email: &str, now: DateTime<Utc>) -> Result<Subscribed>;

    /// Keyword search over clusters, in catalog order.
    fn search_clusters(&self, query: &str) -> Result<Vec<CareerCluster>> {
        let clusters = self.clusters()?;
        Ok(mm_core::search_clusters(query, &clusters))
    }

    /// Keyword search over mentors, routed through cluster membership.
    fn search_mentors(&self, query: &str) -> Result<Vec<Mentor>> {
        let clusters = self.clusters()?;
        let mentors = self.mentors()?;
        Ok(mm_core::search_mentors(query, &mentors, &clusters))
    }
}

/// Implements the read methods of [`CatalogStore`] for a backend that
/// exposes `fn read(&self) -> RwLockReadGuard<'_, Catalog>`.
macro_rules! catalog_reads {
    () => {
        fn clusters(&self) -> $crate::Result<Vec<mm_core::CareerCluster>> {
            Ok(self.read().clusters.clone())
        }

        fn cluster(&self, id: u32) -> $crate::Result<Option<mm_core::CareerCluster>> {
            Ok(self.read().cluster(id).cloned())
        }

        fn clusters_by_category(
            &self,
            category: mm_core::Category,
        ) -> $crate::Result<Vec<mm_core::CareerCluster>> {
            Ok(self.read().clusters_by_category(category))
        }

        fn mentors(&self) -> $crate::Result<Vec<mm_core::Mentor>> {
            Ok(self.read().mentors.clone())
        }

        fn mentor(&self, id: u32) -> $crate::Result<Option<mm_core::Mentor>> {
            Ok(self.read().mentor(id).cloned())
        }

        fn mentors_by_cluster(&self, cluster_id: u32) -> $crate::Result<Vec<mm_core::Mentor>> {
            Ok(self.read().mentors_by_cluster(cluster_id))
        }

        fn keywords(&self) -> $crate::Result<Vec<mm_core::CareerKeyword>> {
            Ok(self.read().keywords.clone())
        }

        fn keywords_by_cluster(
            &self,
            cluster_id: u32,
        ) -> $crate::Result<Vec<mm_core::CareerKeyword>> {
            Ok(self.read().keywords_by_cluster(cluster_id))
        }

        fn search_keywords(&self, fragment: &str) -> $crate::Result<Vec<mm_core::CareerKeyword>> {
            Ok(self.read().search_keywords(fragment))
        }

        fn availability(
            &self,
            mentor_id: u32,
        ) -> $crate::Result<Vec<mm_core::MentorAvailability>> {
            self.read().availability(mentor_id)
        }

        fn events(&self) -> $crate::Result<Vec<mm_core::CareerEvent>> {
            Ok(self.read().events_by_date())
        }

        fn event(&self, id: u32) -> $crate::Result<Option<mm_core::CareerEvent>> {
            Ok(self.read().event(id).cloned())
        }

        fn upcoming_events(
            &self,
            now: chrono::DateTime<chrono::Utc>,
        ) -> $crate::Result<Vec<mm_core::CareerEvent>> {
            Ok(self.read().upcoming_events(now))
        }

        fn events_by_cluster(&self, cluster_id: u32) -> $crate::Result<Vec<mm_core::CareerEvent>> {
            Ok(self.read().events_by_cluster(cluster_id))
        }

        fn counselors(&self) -> $crate::Result<Vec<mm_core::Counselor>> {
            Ok(self.read().active_counselors())
        }

        fn counselor(&self, id: u32) -> $crate::Result<Option<mm_core::Counselor>> {
            Ok(self.read().counselor(id).cloned())
        }

        fn counselor_availability(
            &self,
            counselor_id: u32,
        ) -> $crate::Result<Vec<mm_core::CounselorAvailability>> {
            self.read().counselor_availability(counselor_id)
        }

        fn mentor_sessions(&self, student_id: u32) -> $crate::Result<Vec<mm_core::MentorSession>> {
            Ok(self.read().mentor_sessions(student_id))
        }

        fn counselor_sessions(
            &self,
            student_id: u32,
        ) -> $crate::Result<Vec<mm_core::CounselorSession>> {
            Ok(self.read().counselor_sessions(student_id))
        }

        fn notifications(
            &self,
            user_id: u32,
            unread_only: bool,
        ) -> $crate::Result<Vec<mm_core::Notification>> {
            Ok(self.read().notifications_for(user_id, unread_only))
        }
    };
}

/// Implements the write methods of [`CatalogStore`] for a backend that
/// exposes `fn mutate<T>(&self, f: impl FnOnce(&mut Catalog) -> Result<T>) -> Result<T>`.
macro_rules! catalog_writes {
    () => {
        fn create_keyword(
            &self,
            new: mm_core::NewCareerKeyword,
        ) -> $crate::Result<mm_core::CareerKeyword> {
            let keyword = self.mutate(|c| c.create_keyword(new))?;
            tracing::debug!(id = keyword.id, keyword = %keyword.keyword, "keyword created");
            Ok(keyword)
        }

        fn insert_mentor(&self, new: mm_core::NewMentor) -> $crate::Result<mm_core::Mentor> {
            let mentor = self.mutate(|c| c.insert_mentor(new))?;
            tracing::debug!(id = mentor.id, cluster = mentor.cluster_id, "mentor inserted");
            Ok(mentor)
        }

        fn create_event(
            &self,
            new: mm_core::NewCareerEvent,
            notify: Option<u32>,
            now: chrono::DateTime<chrono::Utc>,
        ) -> $crate::Result<mm_core::CareerEvent> {
            let event = self.mutate(|c| c.create_event(new, notify, now))?;
            tracing::debug!(id = event.id, title = %event.title, "career event created");
            Ok(event)
        }

        fn create_mentor_session(
            &self,
            new: mm_core::NewMentorSession,
            now: chrono::DateTime<chrono::Utc>,
        ) -> $crate::Result<mm_core::MentorSession> {
            let session = self.mutate(|c| c.create_mentor_session(new, now))?;
            tracing::debug!(id = session.id, mentor = session.mentor_id, "mentor session booked");
            Ok(session)
        }

        fn update_mentor_session_status(
            &self,
            id: u32,
            student_id: u32,
            status: mm_core::SessionStatus,
        ) -> $crate::Result<mm_core::MentorSession> {
            self.mutate(|c| c.update_mentor_session_status(id, student_id, status))
        }

        fn create_counselor_session(
            &self,
            new: mm_core::NewCounselorSession,
            now: chrono::DateTime<chrono::Utc>,
        ) -> $crate::Result<mm_core::CounselorSession> {
            let session = self.mutate(|c| c.create_counselor_session(new, now))?;
            tracing::debug!(
                id = session.id,
                counselor = session.counselor_id,
                "counselor session booked"
            );
            Ok(session)
        }

        fn update_counselor_session_status(
            &self,
            id: u32,
            student_id: u32,
            status: mm_core::SessionStatus,
        ) -> $crate::Result<mm_core::CounselorSession> {
            self.mutate(|c| c.update_counselor_session_status(id, student_id, status))
        }

        fn mark_notification_read(&self, id: u32) -> $crate::Result<mm_core::Notification> {
            self.mutate(|c| c.mark_notification_read(id))
        }

        fn delete_notification(&self, id: u32) -> $crate::Result<()> {
            self.mutate(|c| c.delete_notification(id))
        }

        fn subscribe_newsletter(
            &self,
            email: &str,
            now: chrono::DateTime<chrono::Utc>,
        ) -> $crate::Result<$crate::Subscribed> {
            self.mutate(|c| c.subscribe_newsletter(email, now))
        }
    };
}

pub(crate) use {catalog_reads, catalog_writes};
