//! Letter handlers for the Web API.

use axum::{extract::State, Json};
use std::sync::Arc;
use utoipa;

use crate::datetime::{normalize_unix_seconds, now_unix};
use crate::db::{LetterRepository, NewLetter};
use crate::dispatch::Dispatcher;
use crate::web::dto::{
    is_valid_email, CreateLetterRequest, CreateLetterResponse, DispatchResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/letters - Create a delayed letter.
#[utoipa::path(
    post,
    path = "/letters",
    tag = "letters",
    request_body = CreateLetterRequest,
    responses(
        (status = 200, description = "Letter stored for future delivery", body = CreateLetterResponse),
        (status = 400, description = "Missing or invalid fields, or delivery date not in the future"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_letter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateLetterRequest>,
) -> Result<Json<CreateLetterResponse>, ApiError> {
    // Validate input (first failure wins)
    if req.recipient_email.is_empty()
        || req.subject.is_empty()
        || req.content.is_empty()
        || req.delivery_date == 0
    {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    if !is_valid_email(&req.recipient_email) {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    let now = now_unix();
    let delivery_date = normalize_unix_seconds(req.delivery_date);

    if delivery_date <= now {
        return Err(ApiError::bad_request("Delivery date must be in the future"));
    }

    let new_letter = NewLetter::new(
        &req.recipient_email,
        &req.subject,
        &req.content,
        delivery_date,
        req.is_public,
        now,
    );

    let letter = LetterRepository::new(state.db.pool())
        .insert(&new_letter)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save letter: {}", e);
            ApiError::internal("Failed to save letter")
        })?;

    Ok(Json(CreateLetterResponse {
        success: true,
        id: letter.id,
    }))
}

/// POST /api/letters/dispatch - Deliver due letters.
#[utoipa::path(
    post,
    path = "/letters/dispatch",
    tag = "letters",
    responses(
        (status = 200, description = "Dispatch counters for this invocation", body = DispatchResponse),
        (status = 500, description = "Mail transport not configured, or storage failure")
    )
)]
pub async fn dispatch_letters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DispatchResponse>, ApiError> {
    let (mailer, from_email) = match (&state.mailer, &state.from_email) {
        (Some(mailer), Some(from_email)) => (mailer, from_email),
        _ => {
            tracing::error!("Dispatch requested but mail transport is not configured");
            return Err(ApiError::internal("Mail transport is not configured"));
        }
    };

    let outcome = Dispatcher::new(state.db.pool(), mailer.as_ref(), from_email)
        .with_batch_size(state.dispatch_batch_size)
        .run(now_unix())
        .await?;

    Ok(Json(DispatchResponse::from_outcome(outcome)))
}
