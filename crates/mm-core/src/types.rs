//! Core types for mm-core.
//!
//! This module defines the catalog records shared across the workspace: the
//! [`CareerCluster`] taxonomy, the [`Mentor`] profiles classified by it, the
//! curated [`CareerKeyword`] tags, and [`MentorAvailability`] slots. It also
//! holds the scheduling records built around them: career events,
//! counselors, booked sessions, notifications and newsletter subscriptions.
//! Field names serialise in camelCase to match the public JSON API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which family a career cluster belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// One of the Florida career and technical education clusters.
    Florida,
    /// A U.S. military branch.
    Military,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Florida => write!(f, "florida"),
            Category::Military => write!(f, "military"),
        }
    }
}

/// Returned when a category tag is neither `florida` nor `military`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown career category: {0:?}")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "florida" => Ok(Category::Florida),
            "military" => Ok(Category::Military),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// A named career category used to classify mentors and anchor search.
///
/// `name` is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerCluster {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Remix Icon class name, e.g. `ri-ship-line`.
    pub icon_name: String,
}

/// A mentor profile.
///
/// `cluster_name` is a denormalised copy of the referenced cluster's name.
/// Stores recompute it from `cluster_id` on insert; see
/// `mm_store::CatalogStore::insert_mentor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Rating in tenths of a star (48 = 4.8 stars).
    pub rating: u8,
    pub years_experience: u32,
    pub location: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub cluster_id: u32,
    #[serde(default)]
    pub cluster_name: Option<String>,
    /// Curated tags. `None` means the mentor was never tagged, which is
    /// distinct from an explicitly empty list.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// Insert payload for a [`Mentor`]; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMentor {
    pub name: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub rating: u8,
    pub years_experience: u32,
    pub location: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub cluster_id: u32,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl NewMentor {
    pub fn with_id(self, id: u32) -> Mentor {
        Mentor {
            id,
            name: self.name,
            title: self.title,
            company: self.company,
            avatar_url: self.avatar_url,
            rating: self.rating,
            years_experience: self.years_experience,
            location: self.location,
            expertise: self.expertise,
            bio: self.bio,
            cluster_id: self.cluster_id,
            cluster_name: self.cluster_name,
            keywords: self.keywords,
        }
    }
}

/// A curated tag attached to a cluster. Keyword text is unique per catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerKeyword {
    pub id: u32,
    pub cluster_id: u32,
    pub keyword: String,
}

/// Insert payload for a [`CareerKeyword`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCareerKeyword {
    pub cluster_id: u32,
    pub keyword: String,
}

/// A bookable slot on a mentor's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorAvailability {
    pub id: u32,
    pub mentor_id: u32,
    pub date: DateTime<Utc>,
    pub is_available: bool,
}

// ---------------------------------------------------------------------------
// Events and counselors
// ---------------------------------------------------------------------------

/// A dated career event, optionally tied to one cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerEvent {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub cluster_id: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a [`CareerEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCareerEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub cluster_id: Option<u32>,
}

impl NewCareerEvent {
    pub fn with_id(self, id: u32, created_at: DateTime<Utc>) -> CareerEvent {
        CareerEvent {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            event_date: self.event_date,
            registration_url: self.registration_url,
            image_url: self.image_url,
            cluster_id: self.cluster_id,
            created_at,
        }
    }
}

fn active() -> bool {
    true
}

/// An in-house school counselor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counselor {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub department: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub office_location: Option<String>,
    #[serde(default)]
    pub office_hours: Option<String>,
    /// Inactive counselors are hidden from listings but still resolvable by id.
    #[serde(default = "active")]
    pub is_active: bool,
}

/// A recurring weekly window in which a counselor takes appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounselorAvailability {
    pub id: u32,
    pub counselor_id: u32,
    /// English day name, e.g. `Monday`.
    pub day_of_week: String,
    /// `HH:MM`, local to the counselor's office.
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "active")]
    pub is_available: bool,
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// Lifecycle of a booked session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Scheduled => write!(f, "scheduled"),
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Returned when a status is not one of `scheduled`, `completed`, `cancelled`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown session status: {0:?}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for SessionStatus {
    type Err = UnknownStatus;

    // Exact match: status values are wire tokens, not free text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(SessionStatus::Scheduled),
            "completed" => Ok(SessionStatus::Completed),
            "cancelled" => Ok(SessionStatus::Cancelled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// A student's booking with a mentor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorSession {
    pub id: u32,
    pub student_id: u32,
    pub mentor_id: u32,
    pub date: DateTime<Utc>,
    pub status: SessionStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a [`MentorSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMentorSession {
    pub student_id: u32,
    pub mentor_id: u32,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_duration() -> u32 {
    30
}

/// A student's booking with a counselor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounselorSession {
    pub id: u32,
    pub student_id: u32,
    pub counselor_id: u32,
    pub session_date: DateTime<Utc>,
    /// Minutes.
    pub duration: u32,
    /// Free-form topic, e.g. `College Applications`.
    pub session_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: SessionStatus,
    #[serde(default)]
    pub meeting_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a [`CounselorSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCounselorSession {
    pub student_id: u32,
    pub counselor_id: u32,
    pub session_date: DateTime<Utc>,
    #[serde(default = "default_duration")]
    pub duration: u32,
    pub session_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default)]
    pub meeting_link: Option<String>,
}

// ---------------------------------------------------------------------------
// Notifications and newsletter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Confirmation,
    Reminder,
    Event,
}

/// An in-app message for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub session_id: Option<u32>,
    #[serde(default)]
    pub event_id: Option<u32>,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: u32,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    #[serde(default = "active")]
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_round_trips_through_str() {
        assert_eq!("Military".parse::<Category>(), Ok(Category::Military));
        assert_eq!(Category::Florida.to_string(), "florida");
        assert!("navy".parse::<Category>().is_err());
    }

    #[test]
    fn mentor_serialises_camel_case() {
        let mentor = NewMentor {
            name: "Jane Doe".into(),
            title: "Pilot".into(),
            company: "U.S. Air Force".into(),
            avatar_url: None,
            rating: 48,
            years_experience: 9,
            location: "Tampa, FL".into(),
            expertise: vec![],
            bio: None,
            cluster_id: 20,
            cluster_name: Some("Air Force".into()),
            keywords: None,
        }
        .with_id(1);

        let json = serde_json::to_value(&mentor).unwrap();
        assert_eq!(json["yearsExperience"], 9);
        assert_eq!(json["clusterName"], "Air Force");
        assert!(json["keywords"].is_null());
    }

    #[test]
    fn mentor_deserialises_with_missing_optionals() {
        let json = r#"{
            "id": 3, "name": "A", "title": "B", "company": "C",
            "rating": 45, "yearsExperience": 2, "location": "Miami, FL",
            "clusterId": 1
        }"#;
        let mentor: Mentor = serde_json::from_str(json).unwrap();
        assert!(mentor.bio.is_none());
        assert!(mentor.keywords.is_none());
        assert!(mentor.expertise.is_empty());
    }

    #[test]
    fn session_status_parses_wire_tokens_only() {
        assert_eq!("cancelled".parse::<SessionStatus>(), Ok(SessionStatus::Cancelled));
        assert!("Cancelled".parse::<SessionStatus>().is_err());
        assert!("done".parse::<SessionStatus>().is_err());
        assert_eq!(SessionStatus::default().to_string(), "scheduled");
    }

    #[test]
    fn counselor_session_defaults() {
        let json = r#"{
            "studentId": 7, "counselorId": 1,
            "sessionDate": "2025-06-03T15:00:00Z",
            "sessionType": "Course Planning"
        }"#;
        let new: NewCounselorSession = serde_json::from_str(json).unwrap();
        assert_eq!(new.duration, 30);
        assert_eq!(new.status, SessionStatus::Scheduled);
        assert!(new.meeting_link.is_none());
    }

    #[test]
    fn notification_kind_serialises_as_type() {
        let note = Notification {
            id: 1,
            user_id: 7,
            session_id: Some(2),
            event_id: None,
            title: "Session Scheduled".into(),
            message: "hi".into(),
            kind: NotificationKind::Confirmation,
            is_read: false,
            created_at: DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["type"], "confirmation");
        assert_eq!(json["isRead"], false);
        assert!(json["eventId"].is_null());
    }

    #[test]
    fn counselor_is_active_by_default() {
        let json = r#"{"id": 1, "name": "Mark Thompson", "title": "Career Counselor",
                      "department": "Career Services", "email": "m@example.edu"}"#;
        let counselor: Counselor = serde_json::from_str(json).unwrap();
        assert!(counselor.is_active);
        assert!(counselor.specialties.is_empty());
    }
}
