//! # MC4WP Core SDK
//!
//! This crate provides a thin client for the MailChimp list management API
//! used by MailChimp for WordPress: connection checks, subscribing addresses
//! and reading lists, interest groupings and merge fields.

mod api;

pub use api::{
    ApiClient, ApiKey, DefaultSender, Error, HttpRemoteCall, HttpSender, ListsApi, RawResponse,
    RemoteCall, ServiceError, SubscribeOptions, SubscribeOutcome, SubscribersApi,
    UnsubscribeOptions, ALREADY_SUBSCRIBED_CODE, CONNECTED_MESSAGE, DEFAULT_ENDPOINT,
    REQUEST_TIMEOUT,
};
