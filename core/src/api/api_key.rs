use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const DEFAULT_ENDPOINT: &str = "https://api.mailchimp.com/2.0/";

/// MailChimp API key. The `usN` part after the first dash names the
/// datacenter that serves the account.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: &str) -> Self {
        Self(key.trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(super) fn expose(&self) -> &str {
        &self.0
    }

    pub fn datacenter(&self) -> Option<&str> {
        self.0
            .split_once('-')
            .map(|(_, dc)| dc)
            .filter(|dc| !dc.is_empty())
    }

    /// Base URL for API methods, e.g. `https://us2.api.mailchimp.com/2.0/`.
    pub fn endpoint(&self) -> String {
        match self.datacenter() {
            Some(dc) => format!("https://{}.api.mailchimp.com/2.0/", dc),
            None => DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}
