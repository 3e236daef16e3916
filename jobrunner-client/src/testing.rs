//! Scripted transport for unit tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{JobRunnerError, Result};
use crate::request::HttpRequest;
use crate::transport::{HttpResponse, Transport};

/// Replays queued responses and records every request it receives
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a 200 `application/json` response with the given job status
    pub fn with_status(self, status: &str) -> Self {
        self.with_response(json_response(&format!(
            r#"{{"name":"RebuildIndex","status":"{}"}}"#,
            status
        )))
    }

    pub fn with_response(self, response: HttpResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| JobRunnerError::communication("no scripted response left"))
    }
}

pub fn json_response(body: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        content_type: Some("application/json;charset=UTF-8".to_string()),
        body: body.to_string(),
    }
}
