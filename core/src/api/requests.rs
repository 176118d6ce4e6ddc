use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(super) struct EmailRef {
    pub email: String,
}

impl EmailRef {
    pub fn new(email: &str) -> Self {
        Self { email: email.to_string() }
    }
}

/// Optional arguments of `lists/subscribe`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscribeOptions {
    pub merge_vars: Map<String, Value>,
    pub email_type: String,
    pub double_optin: bool,
    pub update_existing: bool,
    pub replace_interests: bool,
    pub send_welcome: bool,
}

impl Default for SubscribeOptions {
    fn default() -> Self {
        Self {
            merge_vars: Map::new(),
            email_type: "html".to_string(),
            double_optin: true,
            update_existing: false,
            replace_interests: true,
            send_welcome: false,
        }
    }
}

impl SubscribeOptions {
    pub fn with_merge_var(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.merge_vars.insert(name.to_string(), value.into());
        self
    }
}

#[derive(Serialize)]
pub(super) struct SubscribeRequest {
    id: String,
    email: EmailRef,
    merge_vars: Map<String, Value>,
    email_type: String,
    double_optin: bool,
    update_existing: bool,
    replace_interests: bool,
    send_welcome: bool,
}

impl SubscribeRequest {
    pub fn new(list_id: &str, email: &str, options: SubscribeOptions) -> Self {
        Self {
            id: list_id.to_string(),
            email: EmailRef::new(email),
            merge_vars: options.merge_vars,
            email_type: options.email_type,
            double_optin: options.double_optin,
            update_existing: options.update_existing,
            replace_interests: options.replace_interests,
            send_welcome: options.send_welcome,
        }
    }
}

/// Optional arguments of `lists/unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsubscribeOptions {
    pub delete_member: bool,
    pub send_goodbye: bool,
    pub send_notify: bool,
}

impl Default for UnsubscribeOptions {
    fn default() -> Self {
        Self {
            delete_member: false,
            send_goodbye: true,
            send_notify: true,
        }
    }
}

#[derive(Serialize)]
pub(super) struct UnsubscribeRequest {
    id: String,
    email: EmailRef,
    delete_member: bool,
    send_goodbye: bool,
    send_notify: bool,
}

impl UnsubscribeRequest {
    pub fn new(list_id: &str, email: &str, options: UnsubscribeOptions) -> Self {
        Self {
            id: list_id.to_string(),
            email: EmailRef::new(email),
            delete_member: options.delete_member,
            send_goodbye: options.send_goodbye,
            send_notify: options.send_notify,
        }
    }
}

#[derive(Serialize)]
pub(super) struct MemberInfoRequest {
    id: String,
    emails: Vec<EmailRef>,
}

impl MemberInfoRequest {
    pub fn new(list_id: &str, emails: &[&str]) -> Self {
        Self {
            id: list_id.to_string(),
            emails: emails.iter().map(|email| EmailRef::new(email)).collect(),
        }
    }
}
