//! Execution of built requests.
//!
//! # Design
//! `Transport` is the only place that performs I/O. It returns an
//! `HttpResponse` for every status the server answers with, so status
//! interpretation stays in the dispatcher. `ReqwestTransport` is the
//! production implementation; `RecordingTransport` answers from memory and
//! keeps every request it was given.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes an `HttpRequest` and returns the server's response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `reqwest`-backed transport. Single attempt, no timeout.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// In-memory transport that records requests and replays one canned
/// response (or transport failure) for each of them.
#[derive(Debug)]
pub struct RecordingTransport {
    reply: Result<HttpResponse, ApiError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    /// Answer every request with `status` and `body`.
    pub fn respond_with(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.into(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request as if the server could not be reached.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            reply: Err(ApiError::Transport(reason.into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.reply.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{API_KEY_HEADER, JSON_CONTENT_TYPE};
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(method: HttpMethod, url: String, body: Option<&str>) -> HttpRequest {
        let mut headers = vec![(API_KEY_HEADER.to_string(), "key-123".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        HttpRequest {
            method,
            url,
            headers,
            body: body.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn reqwest_transport_sends_headers_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/people"))
            .and(query_param("email", "ada@example.com"))
            .and(header("X-Api-Key", "key-123"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":7}"#))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/v1/people?email=ada@example.com", server.uri());
        let response = ReqwestTransport::new()
            .send(request(HttpMethod::Get, url, None))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"id":7}"#);
    }

    #[tokio::test]
    async fn reqwest_transport_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/v2/campaigns/9/steps/3"))
            .and(header("Content-Type", "application/json"))
            .and(body_string(r#"{"delayInMinutes":60}"#))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/v2/campaigns/9/steps/3", server.uri());
        let response = ReqwestTransport::new()
            .send(request(HttpMethod::Patch, url, Some(r#"{"delayInMinutes":60}"#)))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn reqwest_transport_returns_error_statuses_as_responses() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/Blacklist"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not listed"))
            .mount(&server)
            .await;

        let url = format!("{}/v1/Blacklist?domain=example.com", server.uri());
        let response = ReqwestTransport::new()
            .send(request(HttpMethod::Delete, url, None))
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, "not listed");
    }

    #[tokio::test]
    async fn reqwest_transport_reports_unreachable_hosts() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = ReqwestTransport::new()
            .send(request(HttpMethod::Get, format!("http://{addr}/v1/people"), None))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn recording_transport_keeps_requests_in_order() {
        let transport = RecordingTransport::respond_with(200, "[]");
        for url in ["http://a/1", "http://a/2"] {
            transport
                .send(request(HttpMethod::Get, url.to_string(), None))
                .await
                .unwrap();
        }

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["http://a/1", "http://a/2"]);
        assert_eq!(transport.last_request().unwrap().url, "http://a/2");
    }

    #[tokio::test]
    async fn unreachable_transport_fails_every_request() {
        let transport = RecordingTransport::unreachable("no route to host");
        let err = transport
            .send(request(HttpMethod::Post, "http://a/".to_string(), Some("{}")))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Transport("no route to host".to_string()));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn recording_transport_keeps_requests_after_a_panic_while_locked() {
        let transport = RecordingTransport::respond_with(200, "{}");
        transport
            .send(request(HttpMethod::Get, "http://a/1".to_string(), None))
            .await
            .unwrap();

        let joined = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = transport.requests.lock().unwrap();
                panic!("failed while holding the request log");
            })
            .join()
        });
        assert!(joined.is_err());
        assert!(transport.requests.is_poisoned());

        transport
            .send(request(HttpMethod::Get, "http://a/2".to_string(), None))
            .await
            .unwrap();
        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["http://a/1", "http://a/2"]);
    }
}
