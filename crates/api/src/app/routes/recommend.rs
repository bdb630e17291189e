use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Extension, rejection::FormRejection},
    http::StatusCode,
    response::IntoResponse,
};

use cropguide_infra::SubmissionRecord;

use crate::app::{dto, errors, services::AppServices};

/// Classify one form submission and log it.
///
/// Invalid measurements are rejected before anything is recorded. A recording
/// failure is reported as a server error, but the computed recommendation is
/// still returned in the body.
pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> axum::response::Response {
    let fields = match form {
        Ok(Form(pairs)) => first_values(pairs),
        Err(rejection) => {
            tracing::warn!("rejected submission body: {rejection}");
            return errors::json_error(rejection.status(), "invalid_request", rejection.body_text());
        }
    };

    let classification = match services.pipeline().classify(&fields) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(field = e.field(), "rejected submission: {e}");
            return errors::measurement_error_to_response(e);
        }
    };

    let record = SubmissionRecord::from_classification(&classification);
    tracing::info!(
        submission_id = %record.id,
        cluster_id = %classification.cluster_id,
        crops = classification.crops.len(),
        "classified submission"
    );

    if let Err(e) = services.recorder().record(&record).await {
        tracing::error!(submission_id = %record.id, "failed to record submission: {e}");
        return errors::persistence_error_to_response(e, &classification);
    }

    (StatusCode::OK, Json(dto::classification_to_json(&classification))).into_response()
}

/// Collapse repeated form keys; the first occurrence wins.
fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut fields = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        fields.entry(key).or_insert(value);
    }
    fields
}

pub async fn catalog(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(dto::catalog_to_json(services.pipeline().catalog()))
}
