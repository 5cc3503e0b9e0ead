//! Resource management handlers, including the upload/download
//! boundary: arbitrary bytes in, the same bytes out, no transformation.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use base64::Engine;
use serde::Deserialize;

use sylvia_core::UploadedFile;

use crate::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadPayload {
    pub file_name: String,
    pub mime: String,
    /// File contents, base64-encoded for the JSON wire
    pub data_base64: String,
}

#[derive(Debug, Deserialize)]
pub struct AddResourceRequest {
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub upload: Option<UploadPayload>,
}

/// POST /api/v1/resources - add a resource, optionally with a file
pub async fn add_resource_handler(
    State(state): State<AppState>,
    Json(req): Json<AddResourceRequest>,
) -> impl IntoResponse {
    let upload = match req.upload {
        Some(payload) => {
            let data = match base64::engine::general_purpose::STANDARD.decode(&payload.data_base64)
            {
                Ok(data) => data,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(serde_json::json!(ErrorResponse::new(
                            format!("Invalid upload payload: {}", e),
                            "BAD_UPLOAD"
                        ))),
                    )
                }
            };
            Some(UploadedFile::new(payload.file_name, payload.mime, data))
        }
        None => None,
    };

    let outcome = state
        .handle_add_resource(&req.name, &req.kind, req.link.as_deref(), upload)
        .await;

    if outcome.added {
        state.persist().await;
        (StatusCode::CREATED, Json(serde_json::json!(outcome.view)))
    } else {
        // Validation failure: the panel re-renders with the warning
        // inline and no state change.
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!(outcome.view)),
        )
    }
}

/// GET /api/v1/uploads/:upload_id - byte-for-byte download of an
/// uploaded file under its original name and MIME type
pub async fn download_handler(
    State(state): State<AppState>,
    Path(upload_id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.read().await;
    match store.download(&upload_id) {
        Some(file) => (
            [
                (header::CONTENT_TYPE, file.mime.clone()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file.name),
                ),
            ],
            file.data.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                format!("Upload not found: {}", upload_id),
                "UPLOAD_NOT_FOUND",
            )),
        )
            .into_response(),
    }
}
