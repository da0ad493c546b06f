use serde_json::Value;

use crate::client::ReplyClient;
use crate::error::ReplyError;
use crate::transport::{ReqwestTransport, Transport};

/// Blacklisted domains and email addresses.
#[derive(Debug)]
pub struct Blacklist<'a, T = ReqwestTransport> {
    client: &'a ReplyClient<T>,
}

impl<'a, T: Transport> Blacklist<'a, T> {
    pub(crate) fn new(client: &'a ReplyClient<T>) -> Self {
        Self { client }
    }

    pub async fn list_all(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v1/Blacklist")
            .await
            .map_err(|e| ReplyError::new("getting list of all blacklisted domains and emails", e))
    }

    pub async fn list_domains(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v1/Blacklist?outputType=Domains")
            .await
            .map_err(|e| ReplyError::new("getting list of blacklisted domains", e))
    }

    pub async fn list_emails(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v1/Blacklist?outputType=Emails")
            .await
            .map_err(|e| ReplyError::new("getting list of blacklisted emails", e))
    }

    pub async fn add_domain(&self, domain: &str) -> Result<Value, ReplyError> {
        self.client
            .post_empty(&format!("/v1/Blacklist?domain={domain}"))
            .await
            .map_err(|e| ReplyError::new(format!("adding {domain} to blacklist"), e))
    }

    pub async fn remove_domain(&self, domain: &str) -> Result<Value, ReplyError> {
        self.client
            .delete(&format!("/v1/Blacklist?domain={domain}"))
            .await
            .map_err(|e| ReplyError::new(format!("removing {domain} from blacklist"), e))
    }
}
