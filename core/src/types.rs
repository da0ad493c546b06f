//! Request payloads the client builds itself.
//!
//! # Design
//! Contacts, campaigns and the other remote entities are opaque to this
//! crate and travel as `serde_json::Value` or any caller-supplied
//! `Serialize` type. Only the small fixed bodies of the action and variant
//! calls are modelled here, with the remote service's camelCase field names.

use serde::Serialize;

/// Body of the push / force-push / remove-from-campaign actions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignContact<'a> {
    pub campaign_id: u64,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_push: Option<bool>,
}

/// Body addressing a single contact by email.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactEmail<'a> {
    pub email: &'a str,
}

/// Body addressing every contact of a domain.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactDomain<'a> {
    pub domain: &'a str,
}

/// Body of the email step variant toggle. The remote service expects the
/// flag as the strings `"True"` / `"False"`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VariantToggle {
    pub activate: &'static str,
}

impl From<bool> for VariantToggle {
    fn from(activate: bool) -> Self {
        Self {
            activate: if activate { "True" } else { "False" },
        }
    }
}
