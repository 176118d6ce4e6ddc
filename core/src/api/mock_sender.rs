use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use reqwest::{Request, RequestBuilder, Response};
use serde_json::Value;
use crate::api::remote_call::HttpSender;

// Thread-safe mock that captures requests for inspection
pub(super) struct MockSender {
    pub responses: Arc<Mutex<Vec<Result<Response, reqwest::Error>>>>,
    pub captured_requests: Arc<Mutex<Vec<Request>>>,
}

impl MockSender {
    pub fn new(responses: Vec<Result<Response, reqwest::Error>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_captured_requests(&self) -> std::sync::MutexGuard<'_, Vec<Request>> {
        self.captured_requests.lock().unwrap()
    }

    pub fn captured_json_body(&self, index: usize) -> Value {
        let requests = self.get_captured_requests();
        let bytes = requests[index]
            .body()
            .and_then(|body| body.as_bytes())
            .expect("request has no buffered body");
        serde_json::from_slice(bytes).expect("request body is not JSON")
    }
}

#[async_trait]
impl HttpSender for MockSender {
    async fn send(&self, request: RequestBuilder) -> Result<Response, reqwest::Error> {
        let built_request = request.build()?;
        self.captured_requests.lock().unwrap().push(built_request.try_clone().unwrap());

        let mut responses = self.responses.lock().unwrap();
        assert!(!responses.is_empty(), "MockSender has no response queued");
        responses.remove(0)
    }
}
