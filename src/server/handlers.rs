//! Request handlers.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::error::ApiError;
use super::AppState;
use crate::directory::fetch_all;
use crate::enquiry::classify;
use crate::sitemap;

/// Columns the legacy full sitemap needs; the directory sitemap fetches the
/// full row for filtering and slugs.
const ID_COLUMNS: [&str; 2] = ["id", "updated_at"];

pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_message_id: Option<String>,
}

/// `POST /api/send-email` — classify the enquiry and send both emails.
pub async fn send_email(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SendEmailResponse>, ApiError> {
    let form_type = body.get("formType").and_then(Value::as_str);
    let data = body.get("data").and_then(Value::as_object);
    let (Some(form_type), Some(data)) = (form_type, data) else {
        return Err(ApiError::BadRequest("Missing formType or data".into()));
    };

    let form = classify(data).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    info!(
        form_type,
        variant = form.variant().as_str(),
        "enquiry received"
    );

    let receipt = state
        .dispatcher
        .dispatch(&form)
        .await
        .map_err(|e| ApiError::SendFailed(e.to_string()))?;

    Ok(Json(SendEmailResponse {
        success: true,
        message: "Enquiry submitted successfully".into(),
        admin_message_id: receipt.admin_message_id,
        user_message_id: receipt.user_message_id,
    }))
}

/// `GET /api/sitemap-directory` — quality-filtered provider sitemap.
pub async fn sitemap_directory(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = fetch_all(state.store.as_ref(), &[])
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;
    let xml = sitemap::directory_sitemap(&state.config.base_url, &rows)
        .map_err(|e| ApiError::Upstream(e.to_string()))?;
    Ok(xml_response(xml))
}

/// `GET /api/sitemap-pages` — legacy full sitemap (static pages + every row).
pub async fn sitemap_pages(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = fetch_all(state.store.as_ref(), &ID_COLUMNS)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;
    let xml = sitemap::pages_sitemap(&state.config.base_url, &rows)
        .map_err(|e| ApiError::Upstream(e.to_string()))?;
    Ok(xml_response(xml))
}

/// `GET /api/sitemap-index` — lists the two sub-sitemaps.
pub async fn sitemap_index(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let xml = sitemap::sitemap_index(&state.config.base_url)
        .map_err(|e| ApiError::Upstream(e.to_string()))?;
    Ok(xml_response(xml))
}

/// Sitemaps are cacheable for an hour at the edge.
fn xml_response(xml: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        xml,
    )
}
