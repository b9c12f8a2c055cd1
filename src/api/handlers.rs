use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::AppState;

use super::models::{ErrorResponse, GenerateListingRequest, GenerateListingResponse};

pub const GENERATION_FAILED: &str = "An error occurred while generating the listing.";

pub async fn generate_listing(
    State(state): State<AppState>,
    payload: Result<Json<GenerateListingRequest>, JsonRejection>,
) -> Response {
    // A body sent without a JSON content type reads as an empty object.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::MissingJsonContentType(_)) => GenerateListingRequest::default(),
        Err(rejection) => return rejection.into_response(),
    };

    match state.completions.complete(payload.prompt.as_ref()).await {
        Ok(listing) => (StatusCode::OK, Json(GenerateListingResponse { listing })).into_response(),
        Err(err) => {
            tracing::error!(
                error = %err,
                upstream_status = ?err.status(),
                "Error generating listing"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: GENERATION_FAILED.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
