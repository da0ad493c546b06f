//! Asynchronous client for the Reply.io REST API.
//!
//! # Overview
//! `ReplyClient` attaches the account's API key to every request, sends it
//! through a `Transport` and returns the decoded JSON body. Operations are
//! grouped by resource area:
//!
//! ```no_run
//! # async fn run() -> Result<(), reply_core::ReplyError> {
//! let client = reply_core::ReplyClient::new("my-api-key");
//! let contact = client.people().get_contact_by_email("ada@example.com").await?;
//! client.actions().push_contact_to_campaign(42, "ada@example.com").await?;
//! # let _ = contact;
//! # Ok(())
//! # }
//! ```
//!
//! # Design
//! - The client is stateless apart from its configuration; each call is one
//!   request with no retry and no timeout.
//! - Remote entities stay opaque `serde_json::Value`s.
//! - Failures are classified by status code (`ApiError`) and wrapped with a
//!   description of the failed operation (`ReplyError`).

pub mod client;
pub mod error;
pub mod http;
pub mod resources;
pub mod transport;
pub mod types;

pub use client::{ReplyClient, DEFAULT_BASE_URL};
pub use error::{status_message, ApiError, ReplyError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{RecordingTransport, ReqwestTransport, Transport};
pub use types::{CampaignContact, ContactDomain, ContactEmail, VariantToggle};
