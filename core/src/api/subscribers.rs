use crate::api::lists::data_or_warn;
use crate::api::remote_call::RemoteCall;
use crate::api::requests::{
    MemberInfoRequest, SubscribeOptions, SubscribeRequest, UnsubscribeOptions, UnsubscribeRequest,
};
use crate::api::responses::SubscribeOutcome;
use crate::ApiClient;
use log::warn;
use serde_json::Value;

/// Membership of addresses on a list.
#[async_trait::async_trait]
pub trait SubscribersApi {
    async fn subscribe(
        &self,
        list_id: &str,
        email: &str,
        options: SubscribeOptions,
    ) -> SubscribeOutcome;
    async fn unsubscribe(&self, list_id: &str, email: &str, options: UnsubscribeOptions) -> bool;
    async fn get_subscriber_info(&self, list_id: &str, emails: &[&str]) -> Option<Vec<Value>>;
    async fn list_has_subscriber(&self, list_id: &str, email: &str) -> bool;
}

#[async_trait::async_trait]
impl<C: RemoteCall> SubscribersApi for ApiClient<C> {
    async fn subscribe(
        &self,
        list_id: &str,
        email: &str,
        options: SubscribeOptions,
    ) -> SubscribeOutcome {
        let request = SubscribeRequest::new(list_id, email, options);
        let response = self.call_with("lists/subscribe", &request).await;

        if let Some(service_error) = response.service_error() {
            return if service_error.is_already_subscribed() {
                SubscribeOutcome::AlreadySubscribed
            } else {
                SubscribeOutcome::Error
            };
        }

        match response.success_field("email") {
            Some(_) => SubscribeOutcome::Subscribed,
            None => {
                if response.as_json().is_some() {
                    warn!("lists/subscribe answered without subscriber identity");
                }
                SubscribeOutcome::Error
            }
        }
    }

    async fn unsubscribe(&self, list_id: &str, email: &str, options: UnsubscribeOptions) -> bool {
        let request = UnsubscribeRequest::new(list_id, email, options);
        let response = self.call_with("lists/unsubscribe", &request).await;
        response
            .success_field("complete")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    async fn get_subscriber_info(&self, list_id: &str, emails: &[&str]) -> Option<Vec<Value>> {
        let request = MemberInfoRequest::new(list_id, emails);
        let response = self.call_with("lists/member-info", &request).await;

        data_or_warn("lists/member-info", &response)
    }

    async fn list_has_subscriber(&self, list_id: &str, email: &str) -> bool {
        self.get_subscriber_info(list_id, &[email])
            .await
            .and_then(|members| members.into_iter().next())
            .and_then(|member| {
                member
                    .get("status")
                    .and_then(Value::as_str)
                    .map(|status| status == "subscribed")
            })
            .unwrap_or(false)
    }
}
