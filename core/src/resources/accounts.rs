use serde_json::Value;

use crate::client::ReplyClient;
use crate::error::ReplyError;
use crate::transport::{ReqwestTransport, Transport};

/// Email accounts connected to the API key's user.
#[derive(Debug)]
pub struct Accounts<'a, T = ReqwestTransport> {
    client: &'a ReplyClient<T>,
}

impl<'a, T: Transport> Accounts<'a, T> {
    pub(crate) fn new(client: &'a ReplyClient<T>) -> Self {
        Self { client }
    }

    pub async fn list_email_accounts(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v1/emailAccounts")
            .await
            .map_err(|e| ReplyError::new("getting list of email accounts", e))
    }

    /// Shared page URL of the current user.
    pub async fn shared_page_url(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v1/SharedPageUrl")
            .await
            .map_err(|e| ReplyError::new("getting shared page URL for the current user", e))
    }
}
