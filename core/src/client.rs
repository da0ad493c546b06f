//! Authenticated request dispatcher for the Reply.io API.
//!
//! # Design
//! `ReplyClient` holds the base URL, the API key and a `Transport`; it keeps
//! no other state between calls. A call is split into `build_request`, which
//! produces plain `HttpRequest` data, and `dispatch`, which hands it to the
//! transport and interprets the response. Every call is a single attempt.
//!
//! Resource handles (`people()`, `campaigns()`, ...) borrow the client and
//! add one method per remote operation on top of the helpers here.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, API_KEY_HEADER, JSON_CONTENT_TYPE};
use crate::resources::{Accounts, Actions, Blacklist, Campaigns, People, Statistics, Templates};
use crate::transport::{ReqwestTransport, Transport};

/// Production endpoint of the Reply.io API.
pub const DEFAULT_BASE_URL: &str = "https://api.reply.io";

/// Client for the Reply.io API.
#[derive(Clone)]
pub struct ReplyClient<T = ReqwestTransport> {
    base_url: String,
    api_key: String,
    transport: T,
}

impl ReplyClient<ReqwestTransport> {
    /// Client for the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Self {
        Self::with_transport(api_key, base_url, ReqwestTransport::new())
    }
}

impl<T: Transport> ReplyClient<T> {
    pub fn with_transport(api_key: impl Into<String>, base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn accounts(&self) -> Accounts<'_, T> {
        Accounts::new(self)
    }

    pub fn actions(&self) -> Actions<'_, T> {
        Actions::new(self)
    }

    pub fn blacklist(&self) -> Blacklist<'_, T> {
        Blacklist::new(self)
    }

    pub fn campaigns(&self) -> Campaigns<'_, T> {
        Campaigns::new(self)
    }

    pub fn people(&self) -> People<'_, T> {
        People::new(self)
    }

    pub fn statistics(&self) -> Statistics<'_, T> {
        Statistics::new(self)
    }

    pub fn templates(&self) -> Templates<'_, T> {
        Templates::new(self)
    }

    /// Build a request for `path` (relative to the base URL).
    ///
    /// The API key header is always attached; the JSON content type only
    /// when `json_content_type` is set.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        json_content_type: bool,
    ) -> HttpRequest {
        let mut headers = vec![(API_KEY_HEADER.to_string(), self.api_key.clone())];
        if json_content_type {
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }

    /// Send a built request and decode the response body.
    pub async fn dispatch(&self, request: HttpRequest) -> Result<Value, ApiError> {
        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");
        let url = request.url.clone();
        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!(url = %url, error = ?e, "request did not complete");
        })?;
        check_status(&response).inspect_err(|_| {
            tracing::warn!(url = %url, status = response.status, "request rejected");
        })?;
        Ok(decode_body(&response.body))
    }

    /// Build and dispatch in one step.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        json_content_type: bool,
    ) -> Result<Value, ApiError> {
        let request = self.build_request(method, path, body, json_content_type);
        self.dispatch(request).await
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Get, path, None, false).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Post, path, None, false).await
    }

    pub(crate) async fn post_json<P>(&self, path: &str, payload: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let body = to_json(payload)?;
        self.execute(HttpMethod::Post, path, Some(body), true).await
    }

    pub(crate) async fn patch_json<P>(&self, path: &str, payload: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let body = to_json(payload)?;
        self.execute(HttpMethod::Patch, path, Some(body), true).await
    }

    /// Deletes always carry the JSON content type, even without a body.
    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Delete, path, None, true).await
    }
}

impl<T> fmt::Debug for ReplyClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplyClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn to_json<P: Serialize + ?Sized>(payload: &P) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

/// JSON bodies decode to their value. Anything else, an empty body included,
/// comes back verbatim as a JSON string.
fn decode_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
