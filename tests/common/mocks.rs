use async_trait::async_trait;
use simple_app::{
    Error, Result,
    lambda::{FunctionInvoker, InvocationResponse},
};
use std::sync::{Arc, Mutex};

/// Scripted invoker that records every function name it is asked to invoke
#[derive(Debug, Clone)]
pub struct MockInvoker {
    pub response: InvocationResponse,
    pub error: Option<String>,
    pub invocations: Arc<Mutex<Vec<String>>>,
}

impl MockInvoker {
    pub fn new() -> Self {
        Self {
            response: InvocationResponse::default(),
            error: None,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_payload(mut self, payload: &[u8]) -> Self {
        self.response = InvocationResponse::with_payload(payload);
        self
    }

    pub fn with_response(mut self, response: InvocationResponse) -> Self {
        self.response = response;
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl FunctionInvoker for MockInvoker {
    async fn invoke(&self, function_name: &str) -> Result<InvocationResponse> {
        self.invocations
            .lock()
            .unwrap()
            .push(function_name.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::invocation(error.clone()));
        }

        Ok(self.response.clone())
    }
}

impl Default for MockInvoker {
    fn default() -> Self {
        Self::new()
    }
}
