//! HTTP Transport Abstraction
//!
//! The catalog service is consumed exclusively through unauthenticated GET
//! requests, so the transport surface is a single `get` call.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

use crate::error::Result;

/// A read-only request against the catalog service.
#[derive(Debug, Clone)]
pub struct GetRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
}

impl GetRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Standard header for the catalog API's JSON endpoints.
    pub fn accept_json(self) -> Self {
        self.header("Accept", "application/json")
    }
}

/// HTTP response
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl HttpResponse {
    /// Check if response status is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if response status indicates a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if response status indicates a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// Async HTTP transport trait
///
/// Implementations are expected to:
/// - perform exactly one attempt per call; nothing in this system retries,
///   a failure is either tolerated or propagated by the layer above
/// - surface non-2xx statuses as a normal [`HttpResponse`], not an error
/// - return [`TransportError`](crate::error::TransportError) only for
///   connection-level failures
///
/// # Example
///
/// ```ignore
/// use catalog_bridge::http::{GetRequest, HttpTransport};
///
/// async fn fetch_shelves(transport: &dyn HttpTransport) -> catalog_bridge::error::Result<u16> {
///     let request = GetRequest::new("https://catalog.test/users/u1/shelves").accept_json();
///     let response = transport.get(request).await?;
///     Ok(response.status)
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a GET request
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails, TLS validation fails, or
    /// the request times out.
    async fn get(&self, request: GetRequest) -> Result<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_builder() {
        let request = GetRequest::new("https://catalog.test/forms/f1")
            .header("User-Agent", "test")
            .accept_json();

        assert_eq!(request.url, "https://catalog.test/forms/f1");
        assert_eq!(request.headers.get("User-Agent"), Some(&"test".to_string()));
        assert_eq!(
            request.headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_http_response_status_checks() {
        let response = HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from("test"),
        };

        assert!(response.is_success());
        assert!(!response.is_client_error());
        assert!(!response.is_server_error());

        let response = HttpResponse {
            status: 404,
            headers: HashMap::new(),
            body: Bytes::new(),
        };

        assert!(!response.is_success());
        assert!(response.is_client_error());
    }
}
