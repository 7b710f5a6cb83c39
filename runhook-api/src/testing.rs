//! Local stand-ins for the metadata server and the job-run API

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
    routing::get,
};

use crate::config::ApiConfig;
use runhook_core::domain::job::JobTarget;

/// Request received by the job-run stub
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Bytes,
}

pub type CapturedLog = Arc<Mutex<Vec<Captured>>>;

pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Metadata server answering `/token` with a fixed status and body
pub async fn metadata_stub(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/token",
        get(move |headers: HeaderMap| async move {
            match headers.get("Metadata-Flavor") {
                Some(value) if value == "Google" => (status, body),
                _ => (StatusCode::FORBIDDEN, ""),
            }
        }),
    );
    format!("{}/token", spawn(app).await)
}

/// Job-run API recording every request and answering with `status`
pub async fn job_api_stub(status: StatusCode) -> (String, CapturedLog) {
    let captured: CapturedLog = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    let app = Router::new().fallback(
        move |method: Method, uri: Uri, headers: HeaderMap, body: Bytes| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(Captured {
                    method,
                    path: uri.path().to_string(),
                    authorization: headers
                        .get(AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body,
                });
                status
            }
        },
    );

    (spawn(app).await, captured)
}

/// Configuration pointing at the two stubs
pub fn stub_config(metadata_url: String, run_endpoint: String) -> ApiConfig {
    let mut config = ApiConfig::new(JobTarget::new("us-east4", "test-project", "test-job"));
    config.metadata_url = metadata_url;
    config.run_endpoint = run_endpoint;
    config
}
