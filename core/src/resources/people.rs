//! Contacts ("people" in the remote API).

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::client::ReplyClient;
use crate::error::ReplyError;
use crate::transport::{ReqwestTransport, Transport};

#[derive(Debug)]
pub struct People<'a, T = ReqwestTransport> {
    client: &'a ReplyClient<T>,
}

impl<'a, T: Transport> People<'a, T> {
    pub(crate) fn new(client: &'a ReplyClient<T>) -> Self {
        Self { client }
    }

    pub async fn list_contacts(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v1/people")
            .await
            .map_err(|e| ReplyError::new("getting list of contacts", e))
    }

    pub async fn get_contact_by_id(&self, id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/people?id={id}"))
            .await
            .map_err(|e| ReplyError::new(format!("getting contact by ID {id}"), e))
    }

    pub async fn get_contact_by_email(&self, email: &str) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/people?email={email}"))
            .await
            .map_err(|e| ReplyError::new(format!("getting contact by email {email}"), e))
    }

    pub async fn get_contact_status_in_campaign(&self, email: &str) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/stats/status_in_campaign?email={email}"))
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("getting contact status in campaign by email {email}"),
                    e,
                )
            })
    }

    /// Campaigns (sequences) the contact takes part in.
    pub async fn list_campaigns_for_contact(&self, id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/people/{id}/sequences"))
            .await
            .map_err(|e| {
                ReplyError::new(format!("getting list of campaigns for contact by ID {id}"), e)
            })
    }

    pub async fn get_list_by_id(&self, id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/people/list/{id}"))
            .await
            .map_err(|e| ReplyError::new(format!("getting list of contacts by list ID {id}"), e))
    }

    pub async fn get_list_by_name(&self, name: &str) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/people/list?name={name}"))
            .await
            .map_err(|e| {
                ReplyError::new(format!("getting list of contacts by list name {name}"), e)
            })
    }

    pub async fn create_contact<P>(&self, contact: &P) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .post_json("/v1/people", contact)
            .await
            .map_err(|e| ReplyError::new("creating a new contact", e))
    }

    /// The remote service matches the contact on the `email` field of the
    /// payload and updates it in place.
    pub async fn update_contact_by_email<P>(&self, contact: &P) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .post_json("/v1/people", contact)
            .await
            .map_err(|e| ReplyError::new("updating contact by email", e))
    }

    pub async fn delete_contact_by_id(&self, id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .delete(&format!("/v1/people/?id={id}"))
            .await
            .map_err(|e| ReplyError::new(format!("deleting contact by ID {id}"), e))
    }

    pub async fn delete_contact_by_email(&self, email: &str) -> Result<Value, ReplyError> {
        self.client
            .delete(&format!("/v1/people/?email={email}"))
            .await
            .map_err(|e| ReplyError::new(format!("deleting contact by email {email}"), e))
    }
}
