//! Request handlers
//!
//! Route semantics: `/` serves the embedded front-end, `/api/info`
//! probes metadata for a URL, `/api/download` delegates the actual
//! fetch to the extraction engine and streams the produced file back.

use crate::extractor::{available_qualities, format_expr, is_youtube_url};
use crate::server::AppState;
use crate::utils::error::TubeserveError;
use crate::utils::paths;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;
use tokio_util::io::ReaderStream;
use tracing::{error, info};

const ERR_URL_REQUIRED: &str = "URL is required";
const ERR_INVALID_URL: &str = "Invalid or unsupported URL";
const ERR_FETCH_INFO: &str = "Could not fetch video info. Please check the URL.";
const ERR_FILE_NOT_FOUND: &str = "File not found after download";

/// JSON error response with an HTTP status
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

// ============================================================
// Page and asset routes
// ============================================================

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/style.css"),
    )
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        include_str!("../../static/app.js"),
    )
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "engine": state.extractor.id(),
        "engine_ready": state.extractor.ready(),
        "uptime_seconds": (Utc::now() - state.started_at).num_seconds(),
    }))
}

// ============================================================
// API routes
// ============================================================

#[derive(Debug, Deserialize)]
pub struct InfoRequest {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    title: String,
    thumbnail: String,
    duration: String,
    author: String,
    webpage_url: String,
    qualities: Vec<String>,
}

/// POST /api/info: metadata for a video URL
pub async fn video_info(
    State(state): State<AppState>,
    Json(request): Json<InfoRequest>,
) -> Result<Json<InfoResponse>, ApiError> {
    let url = require_url(request.url)?;

    let info = state.extractor.probe(&url).await.map_err(|err| {
        error!("Info probe failed for {}: {}", url, err);
        ApiError::bad_request(ERR_FETCH_INFO)
    })?;

    let qualities = available_qualities(&info.formats);
    Ok(Json(InfoResponse {
        title: info.title,
        thumbnail: info.thumbnail.unwrap_or_default(),
        duration: format_duration(info.duration),
        author: info
            .uploader
            .unwrap_or_else(|| "Unknown Author".to_string()),
        webpage_url: info.url,
        qualities,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    url: Option<String>,
    quality: Option<String>,
}

/// GET /api/download: fetch the video and stream it back as an attachment
pub async fn download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    let url = require_url(query.url)?;
    let quality = query
        .quality
        .filter(|q| !q.trim().is_empty())
        .unwrap_or_else(|| state.settings.default_quality.clone());
    let expr = format_expr(&quality);

    info!("Download requested: {} at {}", url, quality);

    let scratch = paths::create_scratch_dir(&state.settings.downloads_root)
        .await
        .map_err(|err| {
            error!("Failed to create scratch directory: {}", err);
            ApiError::internal(err.to_string())
        })?;

    let produced = state
        .extractor
        .fetch(&url, &expr, &scratch)
        .await
        .map_err(|err| {
            error!("Download failed for {}: {}", url, err);
            engine_error(err)
        })?;

    serve_file(&produced).await
}

fn require_url(url: Option<String>) -> Result<String, ApiError> {
    let url = url.map(|u| u.trim().to_string()).unwrap_or_default();
    if url.is_empty() {
        return Err(ApiError::bad_request(ERR_URL_REQUIRED));
    }
    if !is_youtube_url(&url) {
        return Err(ApiError::bad_request(ERR_INVALID_URL));
    }
    Ok(url)
}

fn engine_error(err: TubeserveError) -> ApiError {
    match err {
        TubeserveError::InvalidUrl(_) => ApiError::bad_request(err.to_string()),
        TubeserveError::FileMissing => ApiError::internal(ERR_FILE_NOT_FOUND),
        other => ApiError::internal(other.to_string()),
    }
}

/// Stream a file from disk as an attachment.
async fn serve_file(path: &Path) -> Result<Response, ApiError> {
    let file = tokio::fs::File::open(path).await.map_err(|err| {
        error!("Produced file {} unreadable: {}", path.display(), err);
        ApiError::internal(ERR_FILE_NOT_FOUND)
    })?;
    let length = file.metadata().await.ok().map(|m| m.len());

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(path))
        .header(header::CONTENT_DISPOSITION, attachment_disposition(path));
    if let Some(length) = length {
        builder = builder.header(header::CONTENT_LENGTH, length);
    }

    let body = Body::from_stream(ReaderStream::new(file));
    builder
        .body(body)
        .map_err(|err| ApiError::internal(err.to_string()))
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("m4a") => "audio/mp4",
        Some("mp3") => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

/// Build a Content-Disposition value that is always a valid header.
/// Video titles can contain anything; non-ASCII and quote characters
/// are replaced so the header never needs escaping.
fn attachment_disposition(path: &Path) -> HeaderValue {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("video.mp4");
    let safe: String = filename
        .chars()
        .map(|c| {
            if c == '"' || !(c.is_ascii_graphic() || c == ' ') {
                '_'
            } else {
                c
            }
        })
        .collect();
    HeaderValue::from_str(&format!("attachment; filename=\"{}\"", safe))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"video.mp4\""))
}

/// Format a duration in seconds as M:SS.
fn format_duration(seconds: Option<f64>) -> String {
    let total = seconds.unwrap_or(0.0).max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
