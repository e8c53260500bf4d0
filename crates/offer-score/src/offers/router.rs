use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Utc;
use serde_json::json;

use super::domain::OfferRecord;
use super::export::{ExportError, ExportFormat};
use super::service::{OfferEvaluationService, OfferServiceError, RebalanceRequest};

/// Router builder exposing evaluation, export and weight rebalancing endpoints.
pub fn offer_router(service: Arc<OfferEvaluationService>) -> Router {
    Router::new()
        .route("/api/v1/offers/evaluate", post(evaluate_handler))
        .route("/api/v1/offers/export/:format", post(export_handler))
        .route("/api/v1/weights/rebalance", post(rebalance_handler))
        .with_state(service)
}

fn error_response(error: OfferServiceError) -> Response {
    match error {
        OfferServiceError::Validation(error) => {
            let payload = json!({
                "error": error.to_string(),
                "issues": error.issues,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        OfferServiceError::Export(ExportError::UnsupportedFormat(format)) => {
            let payload = json!({
                "error": format!("unsupported export format '{format}'"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<OfferEvaluationService>>,
    axum::Json(offer): axum::Json<OfferRecord>,
) -> Response {
    match service.evaluate(&offer) {
        Ok(evaluation) => (StatusCode::OK, axum::Json(evaluation)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler(
    State(service): State<Arc<OfferEvaluationService>>,
    Path(format): Path<String>,
    axum::Json(offer): axum::Json<OfferRecord>,
) -> Response {
    let format = match format.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(error) => return error_response(error.into()),
    };

    match service.export(&offer, format, Utc::now()) {
        Ok(document) => {
            let disposition = format!("attachment; filename=\"{}\"", document.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, document.content_type),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                document.body,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rebalance_handler(
    State(service): State<Arc<OfferEvaluationService>>,
    axum::Json(request): axum::Json<RebalanceRequest>,
) -> Response {
    match service.rebalance(&request) {
        Ok(weights) => (StatusCode::OK, axum::Json(weights)).into_response(),
        Err(error) => error_response(error),
    }
}
