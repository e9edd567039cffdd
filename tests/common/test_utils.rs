use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use simple_app::{
    Result,
    lambda::FunctionInvoker,
    server::{handlers::AppState, router},
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Build the application router around the given invoker
pub fn create_test_app(invoker: impl FunctionInvoker + 'static) -> Router {
    router(AppState {
        invoker: Arc::new(invoker),
    })
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 3000
  logs:
    level: "debug"

lambda:
  region: "us-east-1"
  endpoint_url: "http://localhost:9001"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
