use crate::api::api_key::ApiKey;
use crate::api::Error;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Performs one MailChimp API method call and returns the decoded body.
#[async_trait]
pub trait RemoteCall: Send + Sync {
    async fn call(&self, api_key: &ApiKey, method: &str, data: Value) -> Result<Value, Error>;
}

#[async_trait]
pub trait HttpSender: Send + Sync {
    async fn send(&self, request: RequestBuilder) -> Result<Response, reqwest::Error>;
}

pub struct DefaultSender;

#[async_trait]
impl HttpSender for DefaultSender {
    async fn send(&self, request: RequestBuilder) -> Result<Response, reqwest::Error> {
        request.send().await
    }
}

/// `RemoteCall` over HTTPS: `POST {endpoint}{method}.json` with the API key
/// folded into the JSON body.
pub struct HttpRemoteCall<S: HttpSender = DefaultSender> {
    pub(super) client: Client,
    pub(super) sender: S,
    pub(super) endpoint: Option<String>,
}

impl HttpRemoteCall<DefaultSender> {
    pub fn new() -> HttpRemoteCall<DefaultSender> {
        Self::with_dependencies(DefaultSender, None)
    }
}

impl Default for HttpRemoteCall<DefaultSender> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HttpSender> HttpRemoteCall<S> {
    /// `endpoint` overrides the URL derived from the key's datacenter.
    pub fn with_dependencies(sender: S, endpoint: Option<String>) -> HttpRemoteCall<S> {
        let client = build_client(Client::builder().timeout(REQUEST_TIMEOUT));

        Self {
            client,
            sender,
            endpoint,
        }
    }

    pub(super) fn method_url(&self, api_key: &ApiKey, method: &str) -> String {
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| api_key.endpoint());
        format!("{}/{}.json", endpoint.trim_end_matches('/'), method)
    }
}

#[async_trait]
impl<S: HttpSender> RemoteCall for HttpRemoteCall<S> {
    async fn call(&self, api_key: &ApiKey, method: &str, data: Value) -> Result<Value, Error> {
        let mut body = match data {
            Value::Object(fields) => fields,
            Value::Null => serde_json::Map::new(),
            other => {
                return Err(anyhow::anyhow!(
                    "Request data for {} must be an object, got {}",
                    method,
                    other
                )
                .into());
            }
        };
        body.insert("apikey".to_string(), Value::String(api_key.expose().to_string()));
        let payload = serde_json::to_vec(&body).map_err(Error::Serialization)?;

        let url = self.method_url(api_key, method);
        debug!("Calling MailChimp method {}", method);

        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(payload);

        let response = self.sender.send(request)
            .await
            .map_err(anyhow::Error::from)?;

        decode_response(response).await
    }
}

// A builder failure loses the configured timeout, so it is logged.
pub(super) fn build_client(builder: ClientBuilder) -> Client {
    builder.build().unwrap_or_else(|e| {
        warn!("Failed to build HTTP client, using reqwest defaults: {}", e);
        Client::new()
    })
}

/// MailChimp reports API errors with a 5xx status and a JSON error body, so
/// any body that parses is handed back regardless of status.
pub(super) async fn decode_response(response: Response) -> Result<Value, Error> {
    let status = response.status();
    let body = response.text().await.map_err(anyhow::Error::from)?;

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            body,
        }),
        Err(e) => Err(Error::Deserialization(Box::new(e))),
    }
}
