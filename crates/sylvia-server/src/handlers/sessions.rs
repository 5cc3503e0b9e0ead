//! Session lifecycle handlers: the right-panel actions.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sylvia_core::{LearningPathEntry, Resource, TimerState};

use crate::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: String,
    pub current_step: String,
    pub progress_percent: u8,
    pub message_count: usize,
    pub resources: Vec<Resource>,
    pub learning_path: Vec<LearningPathEntry>,
    pub timer: TimerState,
    pub timer_display: String,
}

/// GET /api/v1/session - the live session
pub async fn get_session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    let session = store.session();
    Json(SessionView {
        id: session.id.clone(),
        current_step: session.current_step.clone(),
        progress_percent: session.progress_percent,
        message_count: session.messages.len(),
        resources: session.resources.clone(),
        learning_path: session.learning_path.clone(),
        timer: session.timer,
        timer_display: session.timer.display(),
    })
}

/// POST /api/v1/session/clear - empty the conversation, keep snapshots
pub async fn clear_session_handler(State(state): State<AppState>) -> impl IntoResponse {
    {
        let mut store = state.store.write().await;
        store.clear_session();
    }
    state.persist().await;
    StatusCode::NO_CONTENT
}

#[derive(Debug, Deserialize, Default)]
pub struct SaveSessionRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SnapshotView {
    /// Index into the full history, usable with the load endpoint
    pub index: usize,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub message_count: usize,
    pub progress_percent: u8,
}

/// POST /api/v1/session/save - snapshot the live session
pub async fn save_session_handler(
    State(state): State<AppState>,
    Json(req): Json<SaveSessionRequest>,
) -> impl IntoResponse {
    let view = {
        let mut store = state.store.write().await;
        let snapshot = store.save_snapshot(req.name);
        SnapshotView {
            index: store.saved_snapshots().len() - 1,
            name: snapshot.name,
            timestamp: snapshot.timestamp,
            message_count: snapshot.messages.len(),
            progress_percent: snapshot.progress_percent,
        }
    };
    state.persist().await;
    (StatusCode::CREATED, Json(view))
}

#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub snapshot_taken: bool,
}

/// POST /api/v1/session/new - auto-save a non-empty conversation, then
/// start over
pub async fn new_session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = {
        let mut store = state.store.write().await;
        let snapshot_taken = store.new_session();
        NewSessionResponse {
            session_id: store.session().id.clone(),
            snapshot_taken,
        }
    };
    state.persist().await;
    (StatusCode::CREATED, Json(response))
}

/// GET /api/v1/session/export - transcript download, purely derived
pub async fn export_session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let transcript = {
        let store = state.store.read().await;
        store.export()
    };
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"transcript.txt\"".to_string(),
            ),
        ],
        transcript,
    )
}

/// GET /api/v1/session/saved - the most recent snapshots, capped
pub async fn list_saved_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    let views: Vec<SnapshotView> = store
        .recent_snapshots()
        .iter()
        .enumerate()
        .map(|(visible, s)| SnapshotView {
            index: store.visible_snapshot_index(visible),
            name: s.name.clone(),
            timestamp: s.timestamp,
            message_count: s.messages.len(),
            progress_percent: s.progress_percent,
        })
        .collect();
    Json(views)
}

#[derive(Debug, Deserialize)]
pub struct LoadSessionRequest {
    pub index: usize,
}

/// POST /api/v1/session/load - restore messages and progress from a
/// snapshot (resources, learning path and timer stay as they are)
pub async fn load_session_handler(
    State(state): State<AppState>,
    Json(req): Json<LoadSessionRequest>,
) -> impl IntoResponse {
    let result = {
        let mut store = state.store.write().await;
        store.load_snapshot(req.index)
    };
    match result {
        Ok(()) => {
            state.persist().await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(e.to_string(), "SNAPSHOT_NOT_FOUND")),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TimerRequest {
    Preset { minutes: u32 },
    Start,
    Pause,
    Reset,
}

#[derive(Debug, Serialize)]
pub struct TimerResponse {
    pub timer: TimerState,
    pub display: String,
}

/// POST /api/v1/timer - explicit, user-triggered timer actions only
pub async fn timer_handler(
    State(state): State<AppState>,
    Json(req): Json<TimerRequest>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    match req {
        TimerRequest::Preset { minutes } => store.timer_preset(minutes),
        TimerRequest::Start => store.timer_start(),
        TimerRequest::Pause => store.timer_pause(),
        TimerRequest::Reset => store.timer_reset(),
    }
    let timer = store.session().timer;
    Json(TimerResponse {
        timer,
        display: timer.display(),
    })
}
