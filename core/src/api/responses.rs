use serde_json::Value;
use std::fmt;

/// Error code MailChimp returns when the address is already on the list.
pub const ALREADY_SUBSCRIBED_CODE: i64 = 214;

/// `msg` field of a successful `helper/ping`.
pub const CONNECTED_MESSAGE: &str = "Everything's Chimpy!";

/// What a remote call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// The call never produced a decodable body.
    NoResponse,
    Json(Value),
}

impl RawResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RawResponse::Json(value) => Some(value),
            RawResponse::NoResponse => None,
        }
    }

    pub fn service_error(&self) -> Option<ServiceError> {
        self.as_json().and_then(ServiceError::from_value)
    }

    /// Field of an object response that is not error-shaped.
    pub(super) fn success_field(&self, name: &str) -> Option<&Value> {
        let value = self.as_json()?;
        if ServiceError::from_value(value).is_some() {
            return None;
        }
        value.as_object()?.get(name)
    }

    /// `data` sequence of a list-style response.
    pub(super) fn data(&self) -> Option<Vec<Value>> {
        self.success_field("data")?.as_array().cloned()
    }
}

/// An error-shaped response body: `{"error": "...", "code": 214}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceError {
    pub message: String,
    pub code: Option<i64>,
}

impl ServiceError {
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let message = match fields.get("error")? {
            Value::String(message) => message.clone(),
            Value::Null => return None,
            other => other.to_string(),
        };
        let code = fields.get("code").and_then(parse_code);

        Some(Self { message, code })
    }

    pub fn is_already_subscribed(&self) -> bool {
        self.code == Some(ALREADY_SUBSCRIBED_CODE)
    }
}

// The API is not consistent about sending codes as numbers or strings.
fn parse_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Result of `subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
    Error,
}

impl SubscribeOutcome {
    pub fn is_subscribed(&self) -> bool {
        matches!(self, SubscribeOutcome::Subscribed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscribeOutcome::Subscribed => "subscribed",
            SubscribeOutcome::AlreadySubscribed => "already_subscribed",
            SubscribeOutcome::Error => "error",
        }
    }
}

impl fmt::Display for SubscribeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_error_accepts_numeric_and_string_codes() {
        let numeric = ServiceError::from_value(&json!({ "error": "Error message", "code": -99 }));
        let textual = ServiceError::from_value(&json!({ "error": "error message", "code": "214" }));

        assert_eq!(numeric.unwrap().code, Some(-99));
        let textual = textual.unwrap();
        assert_eq!(textual.message, "error message");
        assert!(textual.is_already_subscribed());
    }

    #[test]
    fn service_error_is_none_for_success_shapes() {
        assert!(ServiceError::from_value(&json!({ "data": [] })).is_none());
        assert!(ServiceError::from_value(&json!([{ "error": "inside array" }])).is_none());
        assert!(ServiceError::from_value(&json!({ "error": null })).is_none());
    }

    #[test]
    fn data_ignores_error_shaped_objects() {
        let response = RawResponse::Json(json!({ "error": "nope", "code": 1, "data": ["x"] }));

        assert_eq!(response.data(), None);
    }

    #[test]
    fn subscribe_outcome_strings() {
        assert_eq!(SubscribeOutcome::AlreadySubscribed.to_string(), "already_subscribed");
        assert_eq!(SubscribeOutcome::Error.to_string(), "error");
        assert!(SubscribeOutcome::Subscribed.is_subscribed());
    }
}
