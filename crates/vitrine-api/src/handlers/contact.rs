//! Contact form endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;
use vitrine_commerce::validate::ContactPayload;

use crate::error::ApiError;

/// Acknowledgement returned for a valid submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// `POST /api/contact`
///
/// Validates and acknowledges; no mail is sent. Delivery is a stub.
pub async fn submit(
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid contact data"))?;
    let form = payload
        .validate()
        .map_err(|details| ApiError::validation("Invalid contact data", details))?;

    tracing::info!(name = %form.name, "contact form received");
    Ok(Json(ContactResponse {
        success: true,
        message: "Mensagem enviada com sucesso!".to_string(),
    }))
}
