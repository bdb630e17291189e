use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use cropguide_ai::Classification;
use cropguide_core::MeasurementError;
use cropguide_infra::PersistenceError;

use crate::app::dto;

pub fn measurement_error_to_response(err: MeasurementError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "invalid_measurement",
            "field": err.field(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

/// The submission could not be logged. The classification is still returned
/// alongside the error.
pub fn persistence_error_to_response(
    err: PersistenceError,
    classification: &Classification,
) -> axum::response::Response {
    let mut body = dto::classification_to_json(classification);
    body["error"] = json!("persistence_error");
    body["message"] = json!(err.to_string());
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
