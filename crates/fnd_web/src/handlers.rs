use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use fnd_core::{validate_text, Article, BatchRow, Error, Prediction};
use fnd_inference::batch;
use crate::AppState;

/// Error envelope: validation problems come back as 422 with an inline
/// message, everything else as 500.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub label: u8,
    pub verdict: String,
}

impl From<Prediction> for AnalyzeResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            label: prediction.label.as_u8(),
            verdict: prediction.verdict().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub rows: Vec<BatchRow>,
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "model": state.detector.name() }))
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(article): Json<Article>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    validate_text(&article.text)?;
    let label = state.detector.classify(&article.text).await?;
    let prediction = Prediction {
        text: article.text,
        label,
    };
    Ok(Json(AnalyzeResponse::from(prediction)))
}

pub async fn analyze_batch(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<BatchResponse>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("invalid multipart upload: {}", e)))?
        .ok_or_else(|| Error::Validation("no file uploaded".to_string()))?;

    // Uploads without a filename are treated as plain text.
    let filename = field.file_name().unwrap_or("upload.txt").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| Error::Validation(format!("failed to read upload: {}", e)))?;

    let texts = batch::extract_texts(&filename, &bytes)?;
    let rows = batch::run_batch(state.detector.as_ref(), texts).await?;
    Ok(Json(BatchResponse { rows }))
}
