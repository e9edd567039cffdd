use std::borrow::Cow;

/// Name of the remote function invoked by the gateway.
pub const FUNCTION_NAME: &str = "DataConsistencyFunction";

/// Result of a single synchronous invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationResponse {
    pub status_code: i32,
    pub payload: Vec<u8>,
    /// Set when the function ran but reported an error (`Handled`/`Unhandled`).
    pub function_error: Option<String>,
    pub executed_version: Option<String>,
}

impl InvocationResponse {
    pub fn with_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code: 200,
            payload: payload.into(),
            ..Default::default()
        }
    }

    /// Decodes the payload as UTF-8, replacing invalid sequences.
    pub fn payload_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}
