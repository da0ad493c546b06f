//! Campaigns, their steps and schedules.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::client::ReplyClient;
use crate::error::ReplyError;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::VariantToggle;

#[derive(Debug)]
pub struct Campaigns<'a, T = ReqwestTransport> {
    client: &'a ReplyClient<T>,
}

impl<'a, T: Transport> Campaigns<'a, T> {
    pub(crate) fn new(client: &'a ReplyClient<T>) -> Self {
        Self { client }
    }

    /// The name is percent-encoded; campaign names routinely contain spaces.
    pub async fn get_campaign_by_name(&self, name: &str) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/campaigns?name={}", urlencoding::encode(name)))
            .await
            .map_err(|e| ReplyError::new(format!("fetching campaign details for {name}"), e))
    }

    pub async fn get_campaign_by_id(&self, id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/campaigns?id={id}"))
            .await
            .map_err(|e| ReplyError::new(format!("fetching campaign details by ID {id}"), e))
    }

    pub async fn list_schedules(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v2/schedules")
            .await
            .map_err(|e| ReplyError::new("fetching list of campaign schedules", e))
    }

    pub async fn list_default_schedules(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v2/schedules/default")
            .await
            .map_err(|e| ReplyError::new("fetching list of default campaign schedules", e))
    }

    pub async fn list_campaigns(&self) -> Result<Value, ReplyError> {
        self.client
            .get("/v1/campaigns")
            .await
            .map_err(|e| ReplyError::new("fetching list of campaigns", e))
    }

    pub async fn list_contacts_in_campaign(&self, id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/campaigns/{id}/people"))
            .await
            .map_err(|e| {
                ReplyError::new(format!("fetching list of contacts per campaign by ID {id}"), e)
            })
    }

    pub async fn create_with_custom_step_text<P>(&self, campaign: &P) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.create(campaign, "Custom step text").await
    }

    pub async fn create_with_template_step_text<P>(&self, campaign: &P) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.create(campaign, "Template step text").await
    }

    pub async fn create_with_multiple_steps_and_variants<P>(
        &self,
        campaign: &P,
    ) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.create(campaign, "Multiple steps and variants").await
    }

    pub async fn create_with_custom_schedule<P>(&self, campaign: &P) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.create(campaign, "Custom schedule").await
    }

    // All creation variants hit the same endpoint; only the payload shape differs.
    async fn create<P>(&self, campaign: &P, variant: &str) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .post_json("/v2/campaigns", campaign)
            .await
            .map_err(|e| ReplyError::new(format!("creating campaign ({variant})"), e))
    }

    pub async fn list_steps(&self, campaign_id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v2/campaigns/{campaign_id}/steps"))
            .await
            .map_err(|e| {
                ReplyError::new(format!("getting list of campaign steps by ID {campaign_id}"), e)
            })
    }

    pub async fn get_step(
        &self,
        campaign_id: impl Display,
        step_id: impl Display,
    ) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v2/campaigns/{campaign_id}/steps/{step_id}"))
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("getting step with ID {step_id} from campaign with ID {campaign_id}"),
                    e,
                )
            })
    }

    pub async fn add_step<P>(&self, campaign_id: impl Display, step: &P) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .post_json(&format!("/v2/campaigns/{campaign_id}/steps"), step)
            .await
            .map_err(|e| {
                ReplyError::new(format!("adding step to campaign with ID {campaign_id}"), e)
            })
    }

    pub async fn update_step<P>(
        &self,
        campaign_id: impl Display,
        step_id: impl Display,
        step: &P,
    ) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .patch_json(&format!("/v2/campaigns/{campaign_id}/steps/{step_id}"), step)
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("updating step with ID {step_id} in campaign with ID {campaign_id}"),
                    e,
                )
            })
    }

    pub async fn delete_step(
        &self,
        campaign_id: impl Display,
        step_id: impl Display,
    ) -> Result<Value, ReplyError> {
        self.client
            .delete(&format!("/v2/campaigns/{campaign_id}/steps/{step_id}"))
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("deleting step with ID {step_id} from campaign with ID {campaign_id}"),
                    e,
                )
            })
    }

    pub async fn update_settings<P>(
        &self,
        campaign_id: impl Display,
        settings: &P,
    ) -> Result<Value, ReplyError>
    where
        P: Serialize + ?Sized,
    {
        self.client
            .patch_json(&format!("/v2/campaigns/{campaign_id}"), settings)
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("updating settings in campaign with ID {campaign_id}"),
                    e,
                )
            })
    }

    pub async fn start(&self, campaign_id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .post_empty(&format!("/v2/campaigns/{campaign_id}/start"))
            .await
            .map_err(|e| ReplyError::new(format!("starting campaign with ID {campaign_id}"), e))
    }

    pub async fn pause(&self, campaign_id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .post_empty(&format!("/v2/campaigns/{campaign_id}/pause"))
            .await
            .map_err(|e| ReplyError::new(format!("pausing campaign with ID {campaign_id}"), e))
    }

    pub async fn archive(&self, campaign_id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .post_empty(&format!("/v2/campaigns/{campaign_id}/archive"))
            .await
            .map_err(|e| ReplyError::new(format!("archiving campaign with ID {campaign_id}"), e))
    }

    pub async fn toggle_email_step_variant(
        &self,
        sequence_id: impl Display,
        activate: bool,
    ) -> Result<Value, ReplyError> {
        self.client
            .post_json(
                &format!("/v2/campaigns/{sequence_id}/variants/toggle"),
                &VariantToggle::from(activate),
            )
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("toggling the email step variant with sequenceID {sequence_id}"),
                    e,
                )
            })
    }
}
