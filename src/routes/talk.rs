use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;

use crate::{
    error::AppError,
    message::{TalkRequest, TalkResponse},
    services::relay::relay,
    state::SharedState,
};

pub const GREETING: &str = "Hello I am Traffic AI , Please use post method /talk to talk with me ...I will help you with Traffic Related Data";

pub async fn greeting_handler() -> Json<&'static str> {
    Json(GREETING)
}

// Malformed JSON is answered like a body without `message`; a body that
// cannot be buffered keeps its own status (413 when over the limit).
pub async fn talk_handler(
    State(state): State<SharedState>,
    payload: Result<Json<TalkRequest>, JsonRejection>,
) -> Result<Json<TalkResponse>, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::BytesRejection(rejection)) => return Err(rejection.into()),
        Err(rejection) => {
            debug!(%rejection, "unreadable talk body");
            return Err(AppError::MissingField);
        }
    };

    let message = payload.message().ok_or(AppError::MissingField)?;

    let reply = relay(
        state.completions.as_ref(),
        &state.config.model,
        state.config.max_tokens,
        message,
    )
    .await?;

    Ok(Json(TalkResponse { reply }))
}
