use super::types::InvocationResponse;
use crate::{Error, Result, config::LambdaConfig};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_lambda::{Client, error::DisplayErrorContext, types::InvocationType};
use tracing::{debug, instrument, warn};

#[async_trait]
pub trait FunctionInvoker: Send + Sync {
    /// Invokes `function_name` synchronously with no payload.
    async fn invoke(&self, function_name: &str) -> Result<InvocationResponse>;
}

/// [`FunctionInvoker`] backed by the AWS Lambda `Invoke` API.
pub struct AwsLambdaInvoker {
    client: Client,
}

impl AwsLambdaInvoker {
    /// Builds a client from the default AWS provider chain, applying the
    /// region and endpoint overrides from `config`.
    ///
    /// Credentials are resolved lazily by the SDK, so missing credentials
    /// surface as an error from [`FunctionInvoker::invoke`].
    pub async fn from_env(config: &LambdaConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        debug!(
            region = ?sdk_config.region(),
            endpoint_url = ?config.endpoint_url,
            "created lambda client"
        );

        Self::from_client(Client::new(&sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FunctionInvoker for AwsLambdaInvoker {
    #[instrument(skip(self))]
    async fn invoke(&self, function_name: &str) -> Result<InvocationResponse> {
        debug!("invoking lambda function");

        let output = self
            .client
            .invoke()
            .function_name(function_name)
            .invocation_type(InvocationType::RequestResponse)
            .send()
            .await
            .map_err(|e| {
                Error::invocation(format!(
                    "failed to invoke '{}': {}",
                    function_name,
                    DisplayErrorContext(&e)
                ))
            })?;

        let response = InvocationResponse {
            status_code: output.status_code(),
            payload: output
                .payload()
                .map(|blob| blob.as_ref().to_vec())
                .unwrap_or_default(),
            function_error: output.function_error().map(str::to_string),
            executed_version: output.executed_version().map(str::to_string),
        };

        // The API call itself succeeded; the error payload is handed back as-is.
        if let Some(function_error) = &response.function_error {
            warn!(
                function_error = %function_error,
                payload = %response.payload_text(),
                "lambda function reported an error"
            );
        }

        debug!(
            status_code = response.status_code,
            payload_size = response.payload.len(),
            executed_version = ?response.executed_version,
            "lambda invocation completed"
        );

        Ok(response)
    }
}
