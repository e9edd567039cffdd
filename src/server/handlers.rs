use super::types::ErrorResponse;
use crate::{
    Result,
    lambda::{FUNCTION_NAME, FunctionInvoker},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

/// Returned when the function ran but produced no payload.
pub const FALLBACK_MESSAGE: &str = "Lambda function invoked successfully!";

#[derive(Clone)]
pub struct AppState {
    pub invoker: Arc<dyn FunctionInvoker>,
}

/// Invokes [`FUNCTION_NAME`] and returns its payload as text, or
/// [`FALLBACK_MESSAGE`] when the payload is empty.
pub async fn invoke_named_function(invoker: &dyn FunctionInvoker) -> Result<String> {
    let response = invoker.invoke(FUNCTION_NAME).await?;
    let text = response.payload_text();
    if text.is_empty() {
        return Ok(FALLBACK_MESSAGE.to_string());
    }
    Ok(text.into_owned())
}

pub async fn invoke_lambda(
    State(state): State<AppState>,
) -> std::result::Result<String, (StatusCode, Json<ErrorResponse>)> {
    info!("Received invoke request for function: {}", FUNCTION_NAME);

    match invoke_named_function(state.invoker.as_ref()).await {
        Ok(output) => {
            info!("Successfully invoked function: {}", FUNCTION_NAME);
            Ok(output)
        }
        Err(e) => {
            error!("Failed to invoke function {}: {}", FUNCTION_NAME, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal Server Error".to_string(),
                }),
            ))
        }
    }
}
