//! Scheduling records: career events, counselors, booked sessions, in-app
//! notifications and newsletter subscriptions.
//!
//! Every operation that depends on the current time takes `now` explicitly
//! so the HTTP layer can inject a clock and tests can pin one.

use chrono::{DateTime, Duration, Utc};
use mm_core::{
    CareerEvent, Counselor, CounselorAvailability, CounselorSession, MentorSession,
    NewCareerEvent, NewCounselorSession, NewMentorSession, NewsletterSubscription, Notification,
    NotificationKind, SessionStatus,
};

use crate::catalog::{next_id, Catalog};
use crate::error::{Result, StoreError};

/// Outcome of [`Catalog::subscribe_newsletter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscribed {
    /// A new subscription, or a lapsed one reactivated.
    New(NewsletterSubscription),
    /// The address was already subscribed; nothing changed.
    Existing(NewsletterSubscription),
}

impl Subscribed {
    pub fn subscription(&self) -> &NewsletterSubscription {
        match self {
            Subscribed::New(sub) | Subscribed::Existing(sub) => sub,
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Blank(field));
    }
    Ok(())
}

fn day(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn clock(date: DateTime<Utc>) -> String {
    date.format("%H:%M UTC").to_string()
}

fn by_date_then_id<T>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, u32)) {
    items.sort_by_key(|item| key(item));
}

impl Catalog {
    // -----------------------------------------------------------------------
    // Career events
    // -----------------------------------------------------------------------

    /// All events, soonest first.
    pub fn events_by_date(&self) -> Vec<CareerEvent> {
        let mut events = self.events.clone();
        by_date_then_id(&mut events, |e| (e.event_date, e.id));
        events
    }

    pub fn event(&self, id: u32) -> Option<&CareerEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events at or after `now`, soonest first.
    pub fn upcoming_events(&self, now: DateTime<Utc>) -> Vec<CareerEvent> {
        let mut events = self.events_by_date();
        events.retain(|e| e.event_date >= now);
        events
    }

    pub fn events_by_cluster(&self, cluster_id: u32) -> Vec<CareerEvent> {
        let mut events = self.events_by_date();
        events.retain(|e| e.cluster_id == Some(cluster_id));
        events
    }

    /// Add an event. A referenced cluster must exist. When `notify` names a
    /// user, that user gets an event notification.
    pub fn create_event(
        &mut self,
        new: NewCareerEvent,
        notify: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<CareerEvent> {
        require("title", &new.title)?;
        require("description", &new.description)?;
        require("location", &new.location)?;
        if let Some(cluster_id) = new.cluster_id {
            if self.cluster(cluster_id).is_none() {
                return Err(StoreError::UnknownCluster(cluster_id));
            }
        }

        let id = next_id("career event", self.events.iter().map(|e| e.id))?;
        let event = new.with_id(id, now);

        if let Some(user_id) = notify {
            let message = format!(
                "A new career event \"{}\" has been scheduled for {} at {}.",
                event.title,
                day(event.event_date),
                clock(event.event_date)
            );
            self.push_notification(
                user_id,
                (None, Some(event.id)),
                "New Career Event",
                message,
                NotificationKind::Event,
                now,
            )?;
        }

        self.events.push(event.clone());
        Ok(event)
    }

    // -----------------------------------------------------------------------
    // Counselors
    // -----------------------------------------------------------------------

    /// Active counselors ordered by name.
    pub fn active_counselors(&self) -> Vec<Counselor> {
        let mut counselors: Vec<Counselor> =
            self.counselors.iter().filter(|c| c.is_active).cloned().collect();
        counselors.sort_by(|a, b| a.name.cmp(&b.name));
        counselors
    }

    pub fn counselor(&self, id: u32) -> Option<&Counselor> {
        self.counselors.iter().find(|c| c.id == id)
    }

    /// Open weekly windows for a counselor, in stored order.
    pub fn counselor_availability(&self, counselor_id: u32) -> Result<Vec<CounselorAvailability>> {
        if self.counselor(counselor_id).is_none() {
            return Err(StoreError::NotFound {
                kind: "counselor",
                id: counselor_id,
            });
        }
        Ok(self
            .counselor_availability
            .iter()
            .filter(|slot| slot.counselor_id == counselor_id && slot.is_available)
            .cloned()
            .collect())
    }

    // -----------------------------------------------------------------------
    // Mentor sessions
    // -----------------------------------------------------------------------

    /// A student's mentor sessions, latest first.
    pub fn mentor_sessions(&self, student_id: u32) -> Vec<MentorSession> {
        let mut sessions: Vec<MentorSession> = self
            .mentor_sessions
            .iter()
            .filter(|s| s.student_id == student_id)
            .cloned()
            .collect();
        by_date_then_id(&mut sessions, |s| (s.date, s.id));
        sessions.reverse();
        sessions
    }

    /// Book a mentor session and queue its confirmation and reminders.
    ///
    /// Overlapping bookings are accepted.
    pub fn create_mentor_session(
        &mut self,
        new: NewMentorSession,
        now: DateTime<Utc>,
    ) -> Result<MentorSession> {
        let mentor_name = self
            .mentor(new.mentor_id)
            .map(|m| m.name.clone())
            .ok_or(StoreError::UnknownRecord {
                kind: "mentor",
                id: new.mentor_id,
            })?;

        let id = next_id("mentor session", self.mentor_sessions.iter().map(|s| s.id))?;
        let session = MentorSession {
            id,
            student_id: new.student_id,
            mentor_id: new.mentor_id,
            date: new.date,
            status: new.status,
            notes: new.notes,
            created_at: now,
        };

        self.session_notifications(&session, &mentor_name, now)?;
        self.mentor_sessions.push(session.clone());
        Ok(session)
    }

    fn session_notifications(
        &mut self,
        session: &MentorSession,
        mentor: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let link = (Some(session.id), None);
        let (date, student) = (session.date, session.student_id);

        self.push_notification(
            student,
            link,
            "Session Scheduled",
            format!(
                "Your mentorship session with {mentor} has been scheduled for {} at {}.",
                day(date),
                clock(date)
            ),
            NotificationKind::Confirmation,
            now,
        )?;

        if date - Duration::days(1) > now {
            self.push_notification(
                student,
                link,
                "Session Tomorrow",
                format!(
                    "Reminder: Your mentorship session with {mentor} is tomorrow at {}.",
                    clock(date)
                ),
                NotificationKind::Reminder,
                now,
            )?;
        }

        if date - Duration::hours(1) > now {
            self.push_notification(
                student,
                link,
                "Session Starting Soon",
                format!(
                    "Your mentorship session with {mentor} will begin in 1 hour at {}.",
                    clock(date)
                ),
                NotificationKind::Reminder,
                now,
            )?;
        }
        Ok(())
    }

    /// Change a mentor session's status on behalf of its student.
    pub fn update_mentor_session_status(
        &mut self,
        id: u32,
        student_id: u32,
        status: SessionStatus,
    ) -> Result<MentorSession> {
        const KIND: &str = "mentor session";
        let session = self
            .mentor_sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound { kind: KIND, id })?;
        if session.student_id != student_id {
            return Err(StoreError::NotOwner { kind: KIND, id });
        }
        session.status = status;
        Ok(session.clone())
    }

    // -----------------------------------------------------------------------
    // Counselor sessions
    // -----------------------------------------------------------------------

    /// A student's counselor sessions, latest first.
    pub fn counselor_sessions(&self, student_id: u32) -> Vec<CounselorSession> {
        let mut sessions: Vec<CounselorSession> = self
            .counselor_sessions
            .iter()
            .filter(|s| s.student_id == student_id)
            .cloned()
            .collect();
        by_date_then_id(&mut sessions, |s| (s.session_date, s.id));
        sessions.reverse();
        sessions
    }

    pub fn create_counselor_session(
        &mut self,
        new: NewCounselorSession,
        now: DateTime<Utc>,
    ) -> Result<CounselorSession> {
        require("sessionType", &new.session_type)?;
        if self.counselor(new.counselor_id).is_none() {
            return Err(StoreError::UnknownRecord {
                kind: "counselor",
                id: new.counselor_id,
            });
        }

        let id = next_id("counselor session", self.counselor_sessions.iter().map(|s| s.id))?;
        let session = CounselorSession {
            id,
            student_id: new.student_id,
            counselor_id: new.counselor_id,
            session_date: new.session_date,
            duration: new.duration,
            session_type: new.session_type.trim().to_string(),
            notes: new.notes,
            status: new.status,
            meeting_link: new.meeting_link,
            created_at: now,
        };
        self.counselor_sessions.push(session.clone());
        Ok(session)
    }

    pub fn update_counselor_session_status(
        &mut self,
        id: u32,
        student_id: u32,
        status: SessionStatus,
    ) -> Result<CounselorSession> {
        const KIND: &str = "counselor session";
        let session = self
            .counselor_sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound { kind: KIND, id })?;
        if session.student_id != student_id {
            return Err(StoreError::NotOwner { kind: KIND, id });
        }
        session.status = status;
        Ok(session.clone())
    }

    // -----------------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------------

    fn push_notification(
        &mut self,
        user_id: u32,
        (session_id, event_id): (Option<u32>, Option<u32>),
        title: &str,
        message: String,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let id = next_id("notification", self.notifications.iter().map(|n| n.id))?;
        self.notifications.push(Notification {
            id,
            user_id,
            session_id,
            event_id,
            title: title.to_string(),
            message,
            kind,
            is_read: false,
            created_at: now,
        });
        Ok(())
    }

    /// A user's notifications, newest first. Ties go to the later id.
    pub fn notifications_for(&self, user_id: u32, unread_only: bool) -> Vec<Notification> {
        let mut out: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !(unread_only && n.is_read))
            .cloned()
            .collect();
        by_date_then_id(&mut out, |n| (n.created_at, n.id));
        out.reverse();
        out
    }

    pub fn mark_notification_read(&mut self, id: u32) -> Result<Notification> {
        let note = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NotFound { kind: "notification", id })?;
        note.is_read = true;
        Ok(note.clone())
    }

    pub fn delete_notification(&mut self, id: u32) -> Result<()> {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() == before {
            return Err(StoreError::NotFound { kind: "notification", id });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Newsletter
    // -----------------------------------------------------------------------

    /// Subscribe `email`. Addresses compare case-insensitively; a lapsed
    /// subscription is reactivated rather than duplicated.
    pub fn subscribe_newsletter(&mut self, email: &str, now: DateTime<Utc>) -> Result<Subscribed> {
        let email = email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid {
            return Err(StoreError::InvalidEmail(email.to_string()));
        }

        let lowered = email.to_lowercase();
        if let Some(sub) = self
            .newsletter
            .iter_mut()
            .find(|s| s.email.to_lowercase() == lowered)
        {
            if sub.is_active {
                return Ok(Subscribed::Existing(sub.clone()));
            }
            sub.is_active = true;
            sub.subscribed_at = now;
            return Ok(Subscribed::New(sub.clone()));
        }

        let sub = NewsletterSubscription {
            id: next_id("newsletter subscription", self.newsletter.iter().map(|s| s.id))?,
            email: email.to_string(),
            subscribed_at: now,
            is_active: true,
        };
        self.newsletter.push(sub.clone());
        Ok(Subscribed::New(sub))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mm_core::{CareerCluster, Category, NewMentor};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    fn catalog() -> Catalog {
        let mut c = Catalog {
            clusters: vec![CareerCluster {
                id: 1,
                name: "Health Science".into(),
                category: Category::Florida,
                description: "Careers in healthcare and medical science".into(),
                icon_name: "ri-hospital-line".into(),
            }],
            counselors: vec![
                Counselor {
                    id: 1,
                    name: "Mark Thompson".into(),
                    title: "Career Counselor".into(),
                    department: "Career Services".into(),
                    email: "m.thompson@example.edu".into(),
                    phone: None,
                    bio: None,
                    specialties: vec![],
                    avatar_url: None,
                    office_location: None,
                    office_hours: None,
                    is_active: true,
                },
                Counselor {
                    id: 2,
                    name: "Ava Brooks".into(),
                    title: "Retired Advisor".into(),
                    department: "Student Success Center".into(),
                    email: "a.brooks@example.edu".into(),
                    phone: None,
                    bio: None,
                    specialties: vec![],
                    avatar_url: None,
                    office_location: None,
                    office_hours: None,
                    is_active: false,
                },
            ],
            ..Catalog::default()
        };
        c.insert_mentor(NewMentor {
            name: "Dr. Emily Chen".into(),
            title: "Pediatrician".into(),
            company: "Tampa General".into(),
            avatar_url: None,
            rating: 49,
            years_experience: 12,
            location: "Tampa, FL".into(),
            expertise: vec![],
            bio: None,
            cluster_id: 1,
            cluster_name: None,
            keywords: None,
        })
        .unwrap();
        c
    }

    fn event(title: &str, days: i64, cluster_id: Option<u32>) -> NewCareerEvent {
        NewCareerEvent {
            title: title.into(),
            description: "Meet local employers".into(),
            location: "Tampa Convention Center".into(),
            event_date: now() + Duration::days(days),
            registration_url: None,
            image_url: None,
            cluster_id,
        }
    }

    #[test]
    fn events_sort_and_filter() {
        let mut c = catalog();
        c.create_event(event("Later", 20, None), None, now()).unwrap();
        c.create_event(event("Past", -3, Some(1)), None, now()).unwrap();
        c.create_event(event("Soon", 2, Some(1)), None, now()).unwrap();

        let titles = |events: Vec<CareerEvent>| -> Vec<String> {
            events.into_iter().map(|e| e.title).collect()
        };
        assert_eq!(titles(c.events_by_date()), ["Past", "Soon", "Later"]);
        assert_eq!(titles(c.upcoming_events(now())), ["Soon", "Later"]);
        assert_eq!(titles(c.events_by_cluster(1)), ["Past", "Soon"]);
        assert!(c.notifications.is_empty());
    }

    #[test]
    fn event_validation_and_notification() {
        let mut c = catalog();
        assert!(matches!(
            c.create_event(event("Orphan", 1, Some(9)), None, now()),
            Err(StoreError::UnknownCluster(9))
        ));
        assert!(matches!(
            c.create_event(event("  ", 1, None), None, now()),
            Err(StoreError::Blank("title"))
        ));

        let created = c.create_event(event("Health Fair", 3, Some(1)), Some(7), now()).unwrap();
        let notes = c.notifications_for(7, false);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Event);
        assert_eq!(notes[0].event_id, Some(created.id));
        assert_eq!(
            notes[0].message,
            "A new career event \"Health Fair\" has been scheduled for June 5, 2025 at 12:00 UTC."
        );
    }

    #[test]
    fn counselors_hide_inactive_and_sort_by_name() {
        let mut c = catalog();
        c.counselors.push(Counselor {
            id: 3,
            name: "Dr. Sarah Mitchell".into(),
            ..c.counselors[0].clone()
        });
        let names: Vec<String> = c.active_counselors().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Dr. Sarah Mitchell", "Mark Thompson"]);
        assert!(c.counselor(2).is_some());
    }

    #[test]
    fn counselor_availability_skips_closed_windows() {
        let mut c = catalog();
        let window = |id, day: &str, open| CounselorAvailability {
            id,
            counselor_id: 1,
            day_of_week: day.into(),
            start_time: "09:00".into(),
            end_time: "17:00".into(),
            is_available: open,
        };
        c.counselor_availability = vec![window(1, "Monday", true), window(2, "Tuesday", false)];

        let days: Vec<String> = c
            .counselor_availability(1)
            .unwrap()
            .into_iter()
            .map(|w| w.day_of_week)
            .collect();
        assert_eq!(days, ["Monday"]);
        assert!(matches!(
            c.counselor_availability(42),
            Err(StoreError::NotFound { kind: "counselor", id: 42 })
        ));
    }

    #[test]
    fn mentor_session_queues_confirmation_and_reminders() {
        let mut c = catalog();
        let session = c
            .create_mentor_session(
                NewMentorSession {
                    student_id: 7,
                    mentor_id: 1,
                    date: now() + Duration::days(3),
                    status: SessionStatus::Scheduled,
                    notes: None,
                },
                now(),
            )
            .unwrap();
        assert_eq!(session.id, 1);

        let titles: Vec<String> = c
            .notifications_for(7, false)
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, ["Session Starting Soon", "Session Tomorrow", "Session Scheduled"]);
        assert_eq!(
            c.notifications[0].message,
            "Your mentorship session with Dr. Emily Chen has been scheduled for June 5, 2025 at 12:00 UTC."
        );
    }

    #[test]
    fn imminent_session_skips_past_reminders() {
        let mut c = catalog();
        c.create_mentor_session(
            NewMentorSession {
                student_id: 7,
                mentor_id: 1,
                date: now() + Duration::minutes(30),
                status: SessionStatus::Scheduled,
                notes: None,
            },
            now(),
        )
        .unwrap();
        assert_eq!(c.notifications.len(), 1);
    }

    #[test]
    fn mentor_session_requires_known_mentor() {
        let mut c = catalog();
        let err = c
            .create_mentor_session(
                NewMentorSession {
                    student_id: 7,
                    mentor_id: 99,
                    date: now(),
                    status: SessionStatus::Scheduled,
                    notes: None,
                },
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownRecord { kind: "mentor", id: 99 }));
        assert!(c.notifications.is_empty());
    }

    #[test]
    fn only_the_owner_changes_session_status() {
        let mut c = catalog();
        let new = NewCounselorSession {
            student_id: 7,
            counselor_id: 1,
            session_date: now() + Duration::days(1),
            duration: 45,
            session_type: " Course Planning ".into(),
            notes: None,
            status: SessionStatus::Scheduled,
            meeting_link: None,
        };
        let session = c.create_counselor_session(new, now()).unwrap();
        assert_eq!(session.session_type, "Course Planning");

        assert!(matches!(
            c.update_counselor_session_status(session.id, 8, SessionStatus::Cancelled),
            Err(StoreError::NotOwner { kind: "counselor session", .. })
        ));
        let updated = c
            .update_counselor_session_status(session.id, 7, SessionStatus::Cancelled)
            .unwrap();
        assert_eq!(updated.status, SessionStatus::Cancelled);
        assert!(matches!(
            c.update_mentor_session_status(5, 7, SessionStatus::Completed),
            Err(StoreError::NotFound { kind: "mentor session", id: 5 })
        ));
    }

    #[test]
    fn sessions_list_latest_first() {
        let mut c = catalog();
        for days in [1, 5, 3] {
            c.create_mentor_session(
                NewMentorSession {
                    student_id: 7,
                    mentor_id: 1,
                    date: now() + Duration::days(days),
                    status: SessionStatus::Scheduled,
                    notes: None,
                },
                now(),
            )
            .unwrap();
        }
        let ids: Vec<u32> = c.mentor_sessions(7).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, [2, 3, 1]);
        assert!(c.mentor_sessions(8).is_empty());
    }

    #[test]
    fn notifications_read_and_delete() {
        let mut c = catalog();
        c.create_event(event("Expo", 4, None), Some(7), now()).unwrap();
        c.create_event(event("Fair", 6, None), Some(7), now()).unwrap();

        let read = c.mark_notification_read(1).unwrap();
        assert!(read.is_read);
        let unread: Vec<u32> = c.notifications_for(7, true).into_iter().map(|n| n.id).collect();
        assert_eq!(unread, [2]);

        c.delete_notification(2).unwrap();
        assert!(matches!(
            c.delete_notification(2),
            Err(StoreError::NotFound { kind: "notification", id: 2 })
        ));
        assert!(c.mark_notification_read(2).is_err());
    }

    #[test]
    fn newsletter_subscription_is_idempotent() {
        let mut c = catalog();
        let first = c.subscribe_newsletter(" student@example.edu ", now()).unwrap();
        assert!(matches!(first, Subscribed::New(_)));
        assert_eq!(first.subscription().email, "student@example.edu");

        let again = c.subscribe_newsletter("STUDENT@example.edu", now()).unwrap();
        assert!(matches!(again, Subscribed::Existing(_)));
        assert_eq!(c.newsletter.len(), 1);

        c.newsletter[0].is_active = false;
        let back = c.subscribe_newsletter("student@example.edu", now()).unwrap();
        assert!(matches!(back, Subscribed::New(ref s) if s.id == 1 && s.is_active));

        for bad in ["", "no-at-sign", "@example.edu", "student@"] {
            assert!(matches!(
                c.subscribe_newsletter(bad, now()),
                Err(StoreError::InvalidEmail(_))
            ));
        }
    }
}
