use std::fmt::Display;

use serde_json::Value;

use crate::client::ReplyClient;
use crate::error::ReplyError;
use crate::transport::{ReqwestTransport, Transport};

/// Email templates.
#[derive(Debug)]
pub struct Templates<'a, T = ReqwestTransport> {
    client: &'a ReplyClient<T>,
}

impl<'a, T: Transport> Templates<'a, T> {
    pub(crate) fn new(client: &'a ReplyClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_template_by_id(&self, id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/templates?id={id}"))
            .await
            .map_err(|e| ReplyError::new(format!("getting list of templates by ID {id}"), e))
    }

    pub async fn list_templates(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v1/templates")
            .await
            .map_err(|e| ReplyError::new("getting list of templates", e))
    }
}
