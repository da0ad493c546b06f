//! Campaign actions: pushing contacts into campaigns, removing them and
//! changing their status.

use serde::Serialize;
use serde_json::Value;

use crate::client::ReplyClient;
use crate::error::ReplyError;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{CampaignContact, ContactDomain, ContactEmail};

#[derive(Debug)]
pub struct Actions<'a, T = ReqwestTransport> {
    client: &'a ReplyClient<T>,
}

impl<'a, T: Transport> Actions<'a, T> {
    pub(crate) fn new(client: &'a ReplyClient<T>) -> Self {
        Self { client }
    }

    pub async fn push_contact_to_campaign(
        &self,
        campaign_id: u64,
        email: &str,
    ) -> Result<Value, ReplyError> {
        let body = CampaignContact {
            campaign_id,
            email,
            force_push: None,
        };
        self.client
            .post_json("/v1/actions/pushtocampaign", &body)
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("pushing {email} to campaign with ID {campaign_id}"),
                    e,
                )
            })
    }

    /// Creates the contact from `contact` and pushes it into the campaign
    /// named by the payload's `campaignId`.
    pub async fn create_and_push_contact_to_campaign<P>(
        &self,
        contact: &P,
    ) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .post_json("/v1/actions/addandpushtocampaign", contact)
            .await
            .map_err(|e| ReplyError::new("creating and pushing contact to campaign", e))
    }

    /// Push even when the contact is already active in another campaign.
    pub async fn force_push_contact_to_campaign(
        &self,
        campaign_id: u64,
        email: &str,
    ) -> Result<Value, ReplyError> {
        let body = CampaignContact {
            campaign_id,
            email,
            force_push: Some(true),
        };
        self.client
            .post_json("/v1/actions/pushtocampaign", &body)
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("force-pushing {email} to campaign with ID {campaign_id}"),
                    e,
                )
            })
    }

    pub async fn remove_contact_from_campaign(
        &self,
        campaign_id: u64,
        email: &str,
    ) -> Result<Value, ReplyError> {
        let body = CampaignContact {
            campaign_id,
            email,
            force_push: None,
        };
        self.client
            .post_json("/v1/actions/removepersonfromcampaignbyid", &body)
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("removing {email} from campaign with ID {campaign_id}"),
                    e,
                )
            })
    }

    pub async fn remove_contact_from_all_campaigns(&self, email: &str) -> Result<Value, ReplyError> {
        self.client
            .post_json(
                "/v1/actions/removepersonfromallcampaigns",
                &ContactEmail { email },
            )
            .await
            .map_err(|e| ReplyError::new(format!("removing {email} from all campaigns"), e))
    }

    pub async fn mark_replied_by_email(&self, email: &str) -> Result<Value, ReplyError> {
        self.client
            .post_json("/v1/actions/markasreplied", &ContactEmail { email })
            .await
            .map_err(|e| ReplyError::new(format!("marking {email} as 'Replied'"), e))
    }

    pub async fn mark_replied_by_domain(&self, domain: &str) -> Result<Value, ReplyError> {
        self.client
            .post_json("/v1/actions/markasreplied", &ContactDomain { domain })
            .await
            .map_err(|e| ReplyError::new(format!("marking {domain} as 'Replied'"), e))
    }

    pub async fn mark_finished_by_email(&self, email: &str) -> Result<Value, ReplyError> {
        self.client
            .post_json("/v1/actions/markasfinished", &ContactEmail { email })
            .await
            .map_err(|e| ReplyError::new(format!("marking {email} as 'Finished'"), e))
    }

    pub async fn mark_finished_by_domain(&self, domain: &str) -> Result<Value, ReplyError> {
        self.client
            .post_json("/v1/actions/markasfinished", &ContactDomain { domain })
            .await
            .map_err(|e| ReplyError::new(format!("marking {domain} as 'Finished'"), e))
    }

    pub async fn unmark_out_of_office(&self, email: &str) -> Result<Value, ReplyError> {
        self.client
            .post_json("/v1/actions/unmark-as-out-of-office", &ContactEmail { email })
            .await
            .map_err(|e| ReplyError::new(format!("unmarking {email} as 'Out of Office'"), e))
    }
}
