//! MailChimp 2.0 list management API

mod api_client;
mod api_key;
mod error;
mod lists;
mod remote_call;
mod requests;
mod responses;
mod subscribers;

#[cfg(test)]
mod mock_sender;
#[cfg(test)]
mod stub_caller;
#[cfg(test)]
mod test_utils;

pub use api_client::ApiClient;
pub use api_key::{ApiKey, DEFAULT_ENDPOINT};
pub use error::Error;
pub use lists::ListsApi;
pub use remote_call::{DefaultSender, HttpRemoteCall, HttpSender, RemoteCall, REQUEST_TIMEOUT};
pub use requests::{SubscribeOptions, UnsubscribeOptions};
pub use responses::{
    RawResponse, ServiceError, SubscribeOutcome, ALREADY_SUBSCRIBED_CODE, CONNECTED_MESSAGE,
};
pub use subscribers::SubscribersApi;
