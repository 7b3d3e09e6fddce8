//! Route handlers.
//!
//! Handlers are thin: parse and validate the request, call the store, shape
//! the response. Path ids and query strings are parsed by hand so that a
//! malformed request gets the same JSON error body as every other failure.
//!
//! There is no login. Routes acting on a student's records take the
//! student's id explicitly, in the query string or the body.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use mm_core::{
    CareerCluster, CareerEvent, CareerKeyword, Category, Counselor, CounselorAvailability,
    CounselorSession, Mentor, MentorAvailability, MentorSession, NewCareerEvent,
    NewCareerKeyword, NewCounselorSession, NewMentorSession, Notification, SessionStatus,
};
use mm_store::Subscribed;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::SharedState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    keyword: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentParams {
    student_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserParams {
    user_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    student_id: u32,
    status: String,
}

#[derive(Debug, Deserialize)]
pub struct Subscription {
    email: String,
}

fn parse_id(raw: &str, message: &'static str) -> Result<u32, ApiError> {
    raw.trim().parse().map_err(|_| ApiError::bad_request(message))
}

/// Unwrap a query string, turning any malformed one into `message`.
fn query<T>(params: Result<Query<T>, QueryRejection>, message: &'static str) -> Result<T, ApiError> {
    params.map(|Query(params)| params).map_err(|rejection| {
        tracing::debug!(%rejection, "rejected query string");
        ApiError::bad_request(message)
    })
}

fn body<T>(payload: Result<Json<T>, JsonRejection>, message: &'static str) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(%rejection, "rejected request body");
        ApiError::bad_request(message)
    })
}

fn status_update(
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<(u32, SessionStatus), ApiError> {
    let update = body(payload, "Invalid status value")?;
    let status = update
        .status
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid status value"))?;
    Ok((update.student_id, status))
}

/// Session status changes answer with the session wording for both
/// missing and foreign sessions.
fn session_error(err: ApiError) -> ApiError {
    match err {
        ApiError::NotFound(_) => ApiError::not_found("Session not found"),
        ApiError::Forbidden(_) => ApiError::forbidden("Not authorized to modify this session"),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Career clusters
// ---------------------------------------------------------------------------

pub async fn list_clusters(State(state): State<SharedState>) -> ApiResult<Vec<CareerCluster>> {
    state
        .run("Failed to fetch career clusters", |store| store.clusters())
        .await
        .map(Json)
}

pub async fn clusters_by_category(
    State(state): State<SharedState>,
    Path(category): Path<String>,
) -> ApiResult<Vec<CareerCluster>> {
    let category: Category = category
        .parse()
        .map_err(|err: mm_core::UnknownCategory| ApiError::bad_request(err.to_string()))?;
    state
        .run("Failed to fetch career clusters by category", move |store| {
            store.clusters_by_category(category)
        })
        .await
        .map(Json)
}

pub async fn search_clusters(
    State(state): State<SharedState>,
    params: Result<Query<KeywordParams>, QueryRejection>,
) -> ApiResult<Vec<CareerCluster>> {
    let keyword = query(params, "Keyword parameter is required")?
        .keyword
        .ok_or_else(|| ApiError::bad_request("Keyword parameter is required"))?;
    let (keyword, found) = state
        .run("Failed to search career clusters", move |store| {
            let found = store.search_clusters(&keyword)?;
            Ok((keyword, found))
        })
        .await?;
    tracing::debug!(%keyword, hits = found.len(), "cluster search");
    Ok(Json(found))
}

pub async fn get_cluster(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<CareerCluster> {
    let id = parse_id(&id, "Invalid cluster ID")?;
    state
        .run("Failed to fetch career cluster", move |store| store.cluster(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Career cluster not found"))
}

// ---------------------------------------------------------------------------
// Career keywords
// ---------------------------------------------------------------------------

pub async fn list_keywords(State(state): State<SharedState>) -> ApiResult<Vec<CareerKeyword>> {
    state
        .run("Failed to fetch career keywords", |store| store.keywords())
        .await
        .map(Json)
}

pub async fn keywords_by_cluster(
    State(state): State<SharedState>,
    Path(cluster_id): Path<String>,
) -> ApiResult<Vec<CareerKeyword>> {
    let cluster_id = parse_id(&cluster_id, "Invalid cluster ID")?;
    state
        .run("Failed to fetch keywords by cluster", move |store| {
            store.keywords_by_cluster(cluster_id)
        })
        .await
        .map(Json)
}

pub async fn search_keywords(
    State(state): State<SharedState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Vec<CareerKeyword>> {
    let search = query(params, "Search parameter is required")?
        .search
        .ok_or_else(|| ApiError::bad_request("Search parameter is required"))?;
    state
        .run("Failed to search keywords", move |store| store.search_keywords(&search))
        .await
        .map(Json)
}

pub async fn create_keyword(
    State(state): State<SharedState>,
    payload: Result<Json<NewCareerKeyword>, JsonRejection>,
) -> Result<(StatusCode, Json<CareerKeyword>), ApiError> {
    let new = body(payload, "Invalid keyword data")?;
    let keyword = state
        .run("Failed to create keyword", move |store| store.create_keyword(new))
        .await?;
    tracing::info!(id = keyword.id, keyword = %keyword.keyword, "keyword created");
    Ok((StatusCode::CREATED, Json(keyword)))
}

// ---------------------------------------------------------------------------
// Mentors
// ---------------------------------------------------------------------------

pub async fn list_mentors(State(state): State<SharedState>) -> ApiResult<Vec<Mentor>> {
    state
        .run("Failed to fetch mentors", |store| store.mentors())
        .await
        .map(Json)
}

pub async fn search_mentors(
    State(state): State<SharedState>,
    params: Result<Query<KeywordParams>, QueryRejection>,
) -> ApiResult<Vec<Mentor>> {
    let keyword = query(params, "Keyword parameter is required")?
        .keyword
        .ok_or_else(|| ApiError::bad_request("Keyword parameter is required"))?;
    let (keyword, found) = state
        .run("Failed to search mentors", move |store| {
            let found = store.search_mentors(&keyword)?;
            Ok((keyword, found))
        })
        .await?;
    tracing::debug!(%keyword, hits = found.len(), "mentor search");
    Ok(Json(found))
}

pub async fn mentors_by_cluster(
    State(state): State<SharedState>,
    Path(cluster_id): Path<String>,
) -> ApiResult<Vec<Mentor>> {
    let cluster_id = parse_id(&cluster_id, "Invalid cluster ID")?;
    state
        .run("Failed to fetch mentors by cluster", move |store| {
            store.mentors_by_cluster(cluster_id)
        })
        .await
        .map(Json)
}

pub async fn get_mentor(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Mentor> {
    let id = parse_id(&id, "Invalid mentor ID")?;
    state
        .run("Failed to fetch mentor", move |store| store.mentor(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Mentor not found"))
}

pub async fn mentor_availability(
    State(state): State<SharedState>,
    Path(mentor_id): Path<String>,
) -> ApiResult<Vec<MentorAvailability>> {
    let mentor_id = parse_id(&mentor_id, "Invalid mentor ID")?;
    state
        .run("Failed to fetch mentor availability", move |store| {
            store.availability(mentor_id)
        })
        .await
        .map(Json)
}

// ---------------------------------------------------------------------------
// Career events
// ---------------------------------------------------------------------------

pub async fn list_events(State(state): State<SharedState>) -> ApiResult<Vec<CareerEvent>> {
    state
        .run("Failed to fetch career events", |store| store.events())
        .await
        .map(Json)
}

pub async fn upcoming_events(State(state): State<SharedState>) -> ApiResult<Vec<CareerEvent>> {
    let now = state.now();
    state
        .run("Failed to fetch upcoming career events", move |store| {
            store.upcoming_events(now)
        })
        .await
        .map(Json)
}

pub async fn events_by_cluster(
    State(state): State<SharedState>,
    Path(cluster_id): Path<String>,
) -> ApiResult<Vec<CareerEvent>> {
    let cluster_id = parse_id(&cluster_id, "Invalid cluster ID")?;
    state
        .run("Failed to fetch career events by cluster", move |store| {
            store.events_by_cluster(cluster_id)
        })
        .await
        .map(Json)
}

pub async fn get_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<CareerEvent> {
    let id = parse_id(&id, "Invalid event ID")?;
    state
        .run("Failed to fetch career event", move |store| store.event(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Career event not found"))
}

/// `?userId=` names the user to notify about the new event.
pub async fn create_event(
    State(state): State<SharedState>,
    params: Result<Query<UserParams>, QueryRejection>,
    payload: Result<Json<NewCareerEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<CareerEvent>), ApiError> {
    let notify = query(params, "Invalid user ID")?.user_id;
    let new = body(payload, "Invalid event data")?;
    let now = state.now();
    let event = state
        .run("Failed to create career event", move |store| {
            store.create_event(new, notify, now)
        })
        .await?;
    tracing::info!(id = event.id, title = %event.title, "career event created");
    Ok((StatusCode::CREATED, Json(event)))
}

// ---------------------------------------------------------------------------
// Counselors
// ---------------------------------------------------------------------------

pub async fn list_counselors(State(state): State<SharedState>) -> ApiResult<Vec<Counselor>> {
    state
        .run("Failed to fetch counselors", |store| store.counselors())
        .await
        .map(Json)
}

pub async fn get_counselor(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Counselor> {
    let id = parse_id(&id, "Invalid counselor ID")?;
    state
        .run("Failed to fetch counselor", move |store| store.counselor(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Counselor not found"))
}

pub async fn counselor_availability(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<CounselorAvailability>> {
    let id = parse_id(&id, "Invalid counselor ID")?;
    state
        .run("Failed to fetch counselor availability", move |store| {
            store.counselor_availability(id)
        })
        .await
        .map(Json)
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

pub async fn list_mentor_sessions(
    State(state): State<SharedState>,
    params: Result<Query<StudentParams>, QueryRejection>,
) -> ApiResult<Vec<MentorSession>> {
    let student_id = query(params, "studentId parameter is required")?
        .student_id
        .ok_or_else(|| ApiError::bad_request("studentId parameter is required"))?;
    state
        .run("Failed to fetch mentor sessions", move |store| {
            store.mentor_sessions(student_id)
        })
        .await
        .map(Json)
}

pub async fn create_mentor_session(
    State(state): State<SharedState>,
    payload: Result<Json<NewMentorSession>, JsonRejection>,
) -> Result<(StatusCode, Json<MentorSession>), ApiError> {
    let new = body(payload, "Invalid session data")?;
    let now = state.now();
    let session = state
        .run("Failed to create mentor session", move |store| {
            store.create_mentor_session(new, now)
        })
        .await?;
    tracing::info!(id = session.id, mentor = session.mentor_id, "mentor session booked");
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn update_mentor_session_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> ApiResult<MentorSession> {
    let id = parse_id(&id, "Invalid session ID")?;
    let (student_id, status) = status_update(payload)?;
    state
        .run("Failed to update session status", move |store| {
            store.update_mentor_session_status(id, student_id, status)
        })
        .await
        .map(Json)
        .map_err(session_error)
}

pub async fn list_counselor_sessions(
    State(state): State<SharedState>,
    params: Result<Query<StudentParams>, QueryRejection>,
) -> ApiResult<Vec<CounselorSession>> {
    let student_id = query(params, "studentId parameter is required")?
        .student_id
        .ok_or_else(|| ApiError::bad_request("studentId parameter is required"))?;
    state
        .run("Failed to fetch counselor sessions", move |store| {
            store.counselor_sessions(student_id)
        })
        .await
        .map(Json)
}

pub async fn create_counselor_session(
    State(state): State<SharedState>,
    payload: Result<Json<NewCounselorSession>, JsonRejection>,
) -> Result<(StatusCode, Json<CounselorSession>), ApiError> {
    let new = body(payload, "Invalid session data")?;
    let now = state.now();
    let session = state
        .run("Failed to create counselor session", move |store| {
            store.create_counselor_session(new, now)
        })
        .await?;
    tracing::info!(
        id = session.id,
        counselor = session.counselor_id,
        "counselor session booked"
    );
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn update_counselor_session_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> ApiResult<CounselorSession> {
    let id = parse_id(&id, "Invalid session ID")?;
    let (student_id, status) = status_update(payload)?;
    state
        .run("Failed to update session status", move |store| {
            store.update_counselor_session_status(id, student_id, status)
        })
        .await
        .map(Json)
        .map_err(session_error)
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

async fn notifications_for(
    state: SharedState,
    params: Result<Query<UserParams>, QueryRejection>,
    unread_only: bool,
) -> ApiResult<Vec<Notification>> {
    let user_id = query(params, "userId parameter is required")?
        .user_id
        .ok_or_else(|| ApiError::bad_request("userId parameter is required"))?;
    state
        .run("Failed to fetch notifications", move |store| {
            store.notifications(user_id, unread_only)
        })
        .await
        .map(Json)
}

pub async fn list_notifications(
    State(state): State<SharedState>,
    params: Result<Query<UserParams>, QueryRejection>,
) -> ApiResult<Vec<Notification>> {
    notifications_for(state, params, false).await
}

pub async fn unread_notifications(
    State(state): State<SharedState>,
    params: Result<Query<UserParams>, QueryRejection>,
) -> ApiResult<Vec<Notification>> {
    notifications_for(state, params, true).await
}

pub async fn mark_notification_read(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Notification> {
    let id = parse_id(&id, "Invalid notification ID")?;
    state
        .run("Failed to mark notification as read", move |store| {
            store.mark_notification_read(id)
        })
        .await
        .map(Json)
}

pub async fn delete_notification(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "Invalid notification ID")?;
    state
        .run("Failed to delete notification", move |store| {
            store.delete_notification(id)
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Newsletter
// ---------------------------------------------------------------------------

pub async fn subscribe_newsletter(
    State(state): State<SharedState>,
    payload: Result<Json<Subscription>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Subscription { email } = body(payload, "Valid email address is required")?;
    let now = state.now();
    let subscribed = state
        .run("Failed to subscribe to newsletter", move |store| {
            store.subscribe_newsletter(&email, now)
        })
        .await?;
    Ok(match subscribed {
        Subscribed::New(subscription) => {
            tracing::info!(id = subscription.id, "newsletter subscription added");
            (
                StatusCode::CREATED,
                Json(json!({ "message": "Successfully subscribed to newsletter" })),
            )
        }
        Subscribed::Existing(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Already subscribed to newsletter" })),
        ),
    })
}

pub async fn healthz() -> &'static str {
    "ok"
}
