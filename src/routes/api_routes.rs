use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::errors::AppError;
use crate::service::relay_service::RelayService;

/// POST `/api/chat` — relays `{ messages }` upstream and answers `{ reply }`.
///
/// A body that is not JSON is handled like one without `messages`.
pub async fn chat_handler(
    State(svc): State<RelayService>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            debug!("Unreadable chat body: {rejection}");
            Value::Null
        }
    };
    let messages = body.get("messages").unwrap_or(&Value::Null);
    info!("Received messages: {messages}");

    match svc.relay(&body).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => {
            if let AppError::Upstream(cause) = &err {
                error!("Chat relay failed: {cause}");
            }
            err.into_response()
        }
    }
}
