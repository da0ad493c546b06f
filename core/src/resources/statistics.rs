use std::fmt::Display;

use serde_json::Value;

use crate::client::ReplyClient;
use crate::error::ReplyError;
use crate::transport::{ReqwestTransport, Transport};

/// Contact and campaign statistics.
#[derive(Debug)]
pub struct Statistics<'a, T = ReqwestTransport> {
    client: &'a ReplyClient<T>,
}

impl<'a, T: Transport> Statistics<'a, T> {
    pub(crate) fn new(client: &'a ReplyClient<T>) -> Self {
        Self { client }
    }

    pub async fn contact_statistics(&self, email: &str) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/stats/person?email={email}"))
            .await
            .map_err(|e| ReplyError::new(format!("getting contact statistics for {email}"), e))
    }

    /// Alias of `contact_statistics`: same endpoint, same error text.
    pub async fn contact_statistics_te(&self, email: &str) -> Result<Value, ReplyError> {
        self.contact_statistics(email).await
    }

    pub async fn campaign_statistics(&self, campaign_id: impl Display) -> Result<Value, ReplyError> {
        self.client
            .get(&format!(
                "/v1/stats/GetPeopleSentPerCampaign?campaignId={campaign_id}"
            ))
            .await
            .map_err(|e| {
                ReplyError::new(format!("getting campaign statistics for ID {campaign_id}"), e)
            })
    }

    /// Step statistics between `from` and `to`, passed through as given.
    pub async fn campaign_step_statistics(
        &self,
        campaign_id: impl Display,
        step_id: impl Display,
        from: &str,
        to: &str,
    ) -> Result<Value, ReplyError> {
        self.client
            .get(&format!(
                "/v1/Stats/CampaignStep?campaignId={campaign_id}&stepId={step_id}&from={from}&to={to}"
            ))
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!(
                        "getting campaign step statistics with ID {step_id} for campaign with ID {campaign_id}"
                    ),
                    e,
                )
            })
    }

    pub async fn campaign_click_statistics(
        &self,
        campaign_id: impl Display,
    ) -> Result<Value, ReplyError> {
        self.client
            .get(&format!("/v1/Stats/CampaignClicks?campaignId={campaign_id}"))
            .await
            .map_err(|e| {
                ReplyError::new(
                    format!("getting campaign click statistics for ID {campaign_id}"),
                    e,
                )
            })
    }
}
