use std::sync::Mutex;
use async_trait::async_trait;
use serde_json::Value;
use crate::api::api_key::ApiKey;
use crate::api::remote_call::RemoteCall;
use crate::api::Error;

/// Answers every call with a pre-set body, or fails when none is set.
pub(super) struct StubCaller {
    response: Mutex<Option<Value>>,
    pub calls: Mutex<Vec<(String, Value)>>,
}

impl StubCaller {
    pub fn failing() -> Self {
        Self {
            response: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn responding(response: Value) -> Self {
        let stub = Self::failing();
        stub.set_response(Some(response));
        stub
    }

    pub fn set_response(&self, response: Option<Value>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> (String, Value) {
        self.calls.lock().unwrap().last().cloned().expect("no call recorded")
    }
}

#[async_trait]
impl RemoteCall for StubCaller {
    async fn call(&self, _api_key: &ApiKey, method: &str, data: Value) -> Result<Value, Error> {
        self.calls.lock().unwrap().push((method.to_string(), data));

        self.response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Request to {} failed", method).into())
    }
}
