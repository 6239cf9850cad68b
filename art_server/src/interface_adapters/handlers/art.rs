use crate::domain::VisualizeError;
use crate::interface_adapters::protocol::{GenerateArtRequest, GenerateArtResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{GenerateArtCommand, GenerateArtUseCase};
use axum::{
    Json, body::Bytes, extract::State, extract::rejection::BytesRejection, http::StatusCode,
};
use std::sync::Arc;

// Handler for POST /api/generate-art. Every outcome, including a body that
// fails to parse, is answered with the JSON envelope. The body is parsed as
// JSON whatever its content type says.
#[tracing::instrument(
    name = "generate_art",
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn generate_art(
    State(state): State<Arc<AppState>>,
    payload: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<GenerateArtResponse>) {
    let bytes = match payload {
        Ok(bytes) => bytes,
        Err(rejection) => return map_rejection(rejection),
    };
    let body = match serde_json::from_slice::<GenerateArtRequest>(&bytes) {
        Ok(body) => body,
        Err(err) => return map_visualize_error(VisualizeError::InvalidRequest(err.to_string())),
    };

    let command = GenerateArtCommand {
        art_type: body.art_type_id().map(str::to_string),
        image: body.image,
    };
    let use_case = GenerateArtUseCase {
        model: state.model.as_ref(),
        strategy: state.strategy.as_ref(),
    };

    match use_case.execute(command).await {
        Ok(image) => {
            tracing::info!(mime_type = %image.mime_type, "art generated successfully.");
            (
                StatusCode::OK,
                Json(GenerateArtResponse::success(image.to_data_url())),
            )
        }
        Err(err) => map_visualize_error(err),
    }
}

fn map_visualize_error(err: VisualizeError) -> (StatusCode, Json<GenerateArtResponse>) {
    let kind = err.kind();
    // Only a missing image is the caller's fault; everything else is a 500.
    let status = match err {
        VisualizeError::MissingImage => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %err, ?kind, "failed to generate art.");
    } else {
        tracing::warn!(error = %err, ?kind, "rejected art request.");
    }

    (
        status,
        Json(GenerateArtResponse::failure(err.to_string(), kind)),
    )
}

// Oversized bodies keep their 413; any other unreadable body is a 500.
fn map_rejection(rejection: BytesRejection) -> (StatusCode, Json<GenerateArtResponse>) {
    let status = match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let err = VisualizeError::InvalidRequest(rejection.body_text());
    if status.is_server_error() {
        tracing::error!(error = %err, %status, "failed to read art request body.");
    } else {
        tracing::warn!(error = %err, %status, "rejected art request body.");
    }

    (
        status,
        Json(GenerateArtResponse::failure(err.to_string(), err.kind())),
    )
}
