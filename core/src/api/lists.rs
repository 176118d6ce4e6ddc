use crate::api::remote_call::RemoteCall;
use crate::api::responses::RawResponse;
use crate::ApiClient;
use log::warn;
use serde_json::{json, Value};

const LIST_LIMIT: u32 = 100;

/// Lists, interest groupings and merge fields of the account.
#[async_trait::async_trait]
pub trait ListsApi {
    /// `data` of `lists/list`, or `None` if the call failed.
    async fn get_lists(&self) -> Option<Vec<Value>>;
    async fn get_lists_by_ids(&self, list_ids: &[&str]) -> Option<Vec<Value>>;
    /// The interest groupings of a list. The API answers with a bare array
    /// here, not a `data` wrapper.
    async fn get_list_groupings(&self, list_id: &str) -> Option<Vec<Value>>;
    async fn get_lists_with_merge_vars(&self, list_ids: &[&str]) -> Option<Vec<Value>>;
}

#[async_trait::async_trait]
impl<C: RemoteCall> ListsApi for ApiClient<C> {
    async fn get_lists(&self) -> Option<Vec<Value>> {
        self.get_lists_by_ids(&[]).await
    }

    async fn get_lists_by_ids(&self, list_ids: &[&str]) -> Option<Vec<Value>> {
        let mut args = json!({ "limit": LIST_LIMIT });
        if !list_ids.is_empty() {
            args["filters"] = json!({ "list_id": list_ids.join(",") });
        }

        let response = self.call("lists/list", args).await;
        data_or_warn("lists/list", &response)
    }

    async fn get_list_groupings(&self, list_id: &str) -> Option<Vec<Value>> {
        let response = self.call("lists/interest-groupings", json!({ "id": list_id })).await;

        match response {
            RawResponse::Json(Value::Array(groupings)) => Some(groupings),
            _ => None,
        }
    }

    async fn get_lists_with_merge_vars(&self, list_ids: &[&str]) -> Option<Vec<Value>> {
        let response = self.call("lists/merge-vars", json!({ "id": list_ids })).await;
        data_or_warn("lists/merge-vars", &response)
    }
}

pub(super) fn data_or_warn(method: &str, response: &RawResponse) -> Option<Vec<Value>> {
    let data = response.data();
    if data.is_none() && response.as_json().is_some() && response.service_error().is_none() {
        warn!("MailChimp method {} answered without a data sequence", method);
    }
    data
}
