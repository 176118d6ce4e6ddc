use crate::api::api_key::ApiKey;
use crate::api::remote_call::{HttpRemoteCall, RemoteCall};
use crate::api::responses::{RawResponse, CONNECTED_MESSAGE};
use crate::api::Error;
use log::{error, warn};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Message and code of the most recent failed call.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct ErrorState {
    pub message: String,
    pub code: Option<i64>,
}

pub struct ApiClient<C: RemoteCall = HttpRemoteCall> {
    pub(super) caller: C,
    pub(super) api_key: ApiKey,
    pub(super) last_error: Mutex<ErrorState>,
    pub(super) last_response: Mutex<Option<RawResponse>>,
}

impl ApiClient<HttpRemoteCall> {
    pub fn new(api_key: &str) -> ApiClient<HttpRemoteCall> {
        Self::with_caller(api_key, HttpRemoteCall::new())
    }
}

impl<C: RemoteCall> ApiClient<C> {
    pub fn with_caller(api_key: &str, caller: C) -> ApiClient<C> {
        Self {
            caller,
            api_key: ApiKey::new(api_key),
            last_error: Mutex::new(ErrorState::default()),
            last_response: Mutex::new(None),
        }
    }

    /// Pings the API. Without an API key no request is made.
    pub async fn is_connected(&self) -> bool {
        if self.api_key.is_empty() {
            return false;
        }

        let response = self.call("helper/ping", json!({})).await;
        response
            .success_field("msg")
            .and_then(Value::as_str)
            .is_some_and(|msg| msg == CONNECTED_MESSAGE)
    }

    pub fn has_error(&self) -> bool {
        !lock(&self.last_error).message.is_empty()
    }

    pub fn get_error_message(&self) -> String {
        lock(&self.last_error).message.clone()
    }

    pub fn get_error_code(&self) -> Option<i64> {
        lock(&self.last_error).code
    }

    /// Response of the most recent call, `None` before the first one.
    pub fn get_last_response(&self) -> Option<RawResponse> {
        lock(&self.last_response).clone()
    }

    pub(super) async fn call_with<T: Serialize + Sync>(
        &self,
        method: &str,
        request: &T,
    ) -> RawResponse {
        match serde_json::to_value(request) {
            Ok(data) => self.call(method, data).await,
            Err(e) => self.record_failure(method, Error::Serialization(e)),
        }
    }

    /// Dispatches `method` and records the outcome as the client's error
    /// state and last response. Never fails; failures come back as
    /// `RawResponse::NoResponse` or an error-shaped body.
    pub(super) async fn call(&self, method: &str, data: Value) -> RawResponse {
        *lock(&self.last_error) = ErrorState::default();

        let result = if self.api_key.is_empty() {
            Err(Error::MissingApiKey)
        } else {
            self.caller.call(&self.api_key, method, data).await
        };

        let response = match result {
            Ok(value) => {
                let response = RawResponse::Json(value);
                if let Some(service_error) = response.service_error() {
                    warn!(
                        "MailChimp method {} returned error {:?}: {}",
                        method, service_error.code, service_error.message
                    );
                    *lock(&self.last_error) = ErrorState {
                        message: service_error.message,
                        code: service_error.code,
                    };
                }
                response
            }
            Err(e) => return self.record_failure(method, e),
        };

        *lock(&self.last_response) = Some(response.clone());
        response
    }

    fn record_failure(&self, method: &str, e: Error) -> RawResponse {
        error!("MailChimp method {} failed: {}", method, e);
        *lock(&self.last_error) = ErrorState {
            message: e.to_string(),
            code: None,
        };
        *lock(&self.last_response) = Some(RawResponse::NoResponse);
        RawResponse::NoResponse
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
