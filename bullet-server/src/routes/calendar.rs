//! Calendar endpoints: download for subscribers, update for the spreadsheet.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::info;

use bullet_core::publish;

use crate::routes::AppError;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Name offered to clients saving the file.
pub const DOWNLOAD_FILENAME: &str = "bullet.ics";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bullet", get(download))
        .route("/update", post(update))
}

/// Request body for an update: the sheet as CSV text
#[derive(Deserialize)]
pub struct UpdateRequest {
    pub calendar: String,
}

/// GET /bullet - The current calendar file, never cached
async fn download(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.calendar_path();

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::new(
                StatusCode::NOT_FOUND,
                "Calendar has not been generated yet",
            ));
        }
        Err(e) => return Err(e.into()),
    };

    let disposition = format!("attachment; filename=\"{DOWNLOAD_FILENAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar".to_string()),
            (header::CACHE_CONTROL, "no-store".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// POST /update - Regenerate the calendar from a fresh export
async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    authorize(&state, &headers)?;

    let req: UpdateRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let _guard = state.write_lock.lock().await;

    let options = state.options.clone();
    let output_dir = state.output_dir.clone();
    let path =
        tokio::task::spawn_blocking(move || publish(&req.calendar, &options, &output_dir))
            .await??;

    info!(path = %path.display(), "Calendar updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Missing key is 403, wrong key is 401.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let presented = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::new(StatusCode::FORBIDDEN, "Not authenticated"))?;

    if !state.api_key_matches(presented) {
        return Err(AppError::new(StatusCode::UNAUTHORIZED, "Invalid API key"));
    }

    Ok(())
}
