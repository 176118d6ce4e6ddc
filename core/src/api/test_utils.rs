use http::StatusCode;
use reqwest::Response;
use serde_json::Value;

pub(super) fn create_ok_response_with_payload(payload: Vec<u8>) -> Response {
    create_response(StatusCode::OK, payload)
}

pub(super) fn create_json_response(status: StatusCode, body: &Value) -> Response {
    create_response(status, serde_json::to_vec(body).unwrap())
}

pub(super) fn create_error_response(status: StatusCode, body: &str) -> Response {
    create_response(status, body.as_bytes().to_vec())
}

fn create_response(status: StatusCode, payload: Vec<u8>) -> Response {
    Response::from(
        http::response::Builder::new()
            .status(status)
            .body(payload)
            .unwrap()
    )
}

// reqwest has no public constructor for its error type; an unparsable URL
// yields one at build time.
pub(super) fn create_transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err()
}
