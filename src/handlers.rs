use crate::errors::AppError;
use crate::models::*;
use crate::store::SubmissionStore;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
pub struct AppState {
    /// Flat-file submission store, one collection per category.
    pub store: SubmissionStore,
}

/// Builds the API router. Middleware layers (CORS, tracing, body limit) are
/// applied by the caller.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/banking-info", get(banking_info))
        .route("/api/account-interests", get(list_account_interests))
        .route("/api/account-interest", post(submit_account_interest))
        .route("/api/contacts", get(list_contacts))
        .route("/api/contact", post(submit_contact))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
///
/// Always answers 200 regardless of storage state.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "message": "Bank Portal API is running"
        })),
    )
}

/// GET /api/banking-info
///
/// Serves the fixed banking reference document (regulatory summary,
/// account-opening requirements, loan eligibility and products).
pub async fn banking_info() -> Json<BankingInfo> {
    Json(BankingInfo::current())
}

/// GET /api/account-interests
///
/// Returns every stored account-interest record in submission order.
pub async fn list_account_interests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountInterestRecord>>, AppError> {
    let records = state
        .store
        .account_interests()
        .await
        .map_err(AppError::FetchFailed)?;
    Ok(Json(records))
}

/// POST /api/account-interest
///
/// Validates field presence, then appends the submission to the
/// account-interest collection. Validation failures never touch storage.
///
/// # Returns
///
/// * `200 {"success": true, "message": ..., "id": N}` on success.
/// * `400 {"success": false, "message": ...}` when required fields are missing.
/// * `500 {"success": false, "message": ...}` on storage failure.
pub async fn submit_account_interest(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AccountInterestPayload>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("Rejected account interest body: {}", e);
        AppError::Validation("Invalid request body".to_string())
    })?;

    let submission = payload
        .validate()
        .ok_or_else(|| AppError::Validation("Missing required fields".to_string()))?;

    let record = state
        .store
        .append_account_interest(submission)
        .await
        .map_err(AppError::SubmissionFailed)?;

    tracing::info!("Account interest submitted: id={}", record.id);
    Ok(Json(json!({
        "success": true,
        "message": "Account interest recorded",
        "id": record.id
    })))
}

/// GET /api/contacts
///
/// Returns every stored contact message in submission order.
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContactRecord>>, AppError> {
    let records = state.store.contacts().await.map_err(AppError::FetchFailed)?;
    Ok(Json(records))
}

/// POST /api/contact
///
/// Same contract as the account-interest endpoint, for contact messages.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("Rejected contact body: {}", e);
        AppError::Validation("Invalid request body".to_string())
    })?;

    let submission = payload
        .validate()
        .ok_or_else(|| AppError::Validation("Missing required fields".to_string()))?;

    let record = state
        .store
        .append_contact(submission)
        .await
        .map_err(AppError::SubmissionFailed)?;

    tracing::info!("Contact message submitted: id={}", record.id);
    Ok(Json(json!({
        "success": true,
        "message": "Message received",
        "id": record.id
    })))
}

/// Fallback for any unmatched route.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}
