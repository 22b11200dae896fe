//! # Client Configuration
//!
//! Builder for [`ClientConfig`] in a fail-fast style: every required piece
//! is validated up front with an actionable message rather than surfacing
//! later as a broken request.
//!
//! ## Required
//!
//! - `origin` - catalog service origin URL
//! - `owner_id` - the fixed catalog owner whose shelves are listed
//!
//! ## Optional (with defaults)
//!
//! - `transport` - HTTP transport (default: reqwest, behind the
//!   `reqwest-transport` feature)
//! - `observer` - failure-diagnostics sink (default: forwards to `tracing`)
//! - `strategy` - book-page fetch strategy (default: client-side slice)
//! - `max_in_flight` - fan-out bound (default: 8)
//!
//! ## Usage
//!
//! ```ignore
//! use catalog_client::config::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .origin("https://api.example.com")
//!     .owner_id("5a8411b53ed02c04187ff02a")
//!     .max_in_flight(16)
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{CatalogError, Result};
use catalog_bridge::{FailureObserver, HttpTransport, TracingObserver};
use std::sync::Arc;

/// How `list_shelf_books` obtains one page of a shelf's collection.
///
/// All strategies produce identical externally observable semantics:
/// `total` is always the complete collection size and the page window is
/// `[offset, offset + limit)`. Which wire format the live upstream
/// actually supports varies across API versions, so the choice is
/// configuration rather than code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationStrategy {
    /// Fetch the complete form-id collection and slice it locally.
    #[default]
    ClientSlice,

    /// Push `limit`/`offset` down to the upstream forms endpoint; a second
    /// unbounded fetch still supplies the collection total.
    UpstreamParams,

    /// Fetch the shelf with `expand=forms` and slice the inlined records.
    ExpandForms,
}

/// Everything the catalog client needs to operate.
///
/// Use [`ClientConfig::builder`] to construct instances.
#[derive(Clone)]
pub struct ClientConfig {
    /// Catalog service origin, e.g. `https://api.example.com`
    pub origin: String,

    /// Fixed catalog-owner identifier whose shelves are listed
    pub owner_id: String,

    /// Transport that moves the bytes
    pub transport: Arc<dyn HttpTransport>,

    /// Sink for tolerated-failure diagnostics
    pub observer: Arc<dyn FailureObserver>,

    /// Book-page fetch strategy
    pub strategy: PaginationStrategy,

    /// Maximum concurrently outstanding per-item requests
    pub max_in_flight: usize,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("origin", &self.origin)
            .field("owner_id", &self.owner_id)
            .field("transport", &"HttpTransport { ... }")
            .field("observer", &"FailureObserver { ... }")
            .field("strategy", &self.strategy)
            .field("max_in_flight", &self.max_in_flight)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

#[cfg(feature = "reqwest-transport")]
fn provide_default_transport() -> Result<Arc<dyn HttpTransport>> {
    Ok(Arc::new(bridge_reqwest::ReqwestTransport::new()))
}

#[cfg(not(feature = "reqwest-transport"))]
fn provide_default_transport() -> Result<Arc<dyn HttpTransport>> {
    Err(CatalogError::Config(
        "No HTTP transport provided. \
         Enable the 'reqwest-transport' feature for the default transport, \
         or inject one with .transport()."
            .to_string(),
    ))
}

/// Builder for [`ClientConfig`] instances.
#[derive(Default)]
pub struct ClientConfigBuilder {
    origin: Option<String>,
    owner_id: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    observer: Option<Arc<dyn FailureObserver>>,
    strategy: PaginationStrategy,
    max_in_flight: Option<usize>,
}

impl ClientConfigBuilder {
    /// Sets the catalog service origin (required).
    ///
    /// A trailing slash is trimmed so URL building stays uniform.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Sets the catalog-owner identifier (required).
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Sets the HTTP transport implementation.
    ///
    /// If not provided, the reqwest-based default is used when the
    /// `reqwest-transport` feature is enabled.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the failure-diagnostics observer.
    ///
    /// Default: [`TracingObserver`], which forwards events to `tracing`.
    pub fn observer(mut self, observer: Arc<dyn FailureObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Sets the book-page fetch strategy.
    ///
    /// Default: [`PaginationStrategy::ClientSlice`].
    pub fn strategy(mut self, strategy: PaginationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the maximum number of concurrently outstanding per-item
    /// requests.
    ///
    /// Default: 8. Must be at least 1 and at most 128.
    pub fn max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = Some(max_in_flight);
        self
    }

    /// Builds the final `ClientConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] when a required field is missing,
    /// the origin is not an http(s) URL, no transport is available, or
    /// `max_in_flight` is out of range.
    pub fn build(self) -> Result<ClientConfig> {
        let origin = self.origin.ok_or_else(|| {
            CatalogError::Config("Origin is required. Use .origin() to set it.".to_string())
        })?;
        let origin = origin.trim_end_matches('/').to_string();
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            return Err(CatalogError::Config(
                "Origin must be an http(s) URL".to_string(),
            ));
        }

        let owner_id = self.owner_id.ok_or_else(|| {
            CatalogError::Config("Owner id is required. Use .owner_id() to set it.".to_string())
        })?;
        if owner_id.is_empty() {
            return Err(CatalogError::Config("Owner id cannot be empty".to_string()));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => provide_default_transport()?,
        };

        let observer = self
            .observer
            .unwrap_or_else(|| Arc::new(TracingObserver));

        let max_in_flight = self.max_in_flight.unwrap_or(8);
        if max_in_flight == 0 {
            return Err(CatalogError::Config(
                "max_in_flight must be greater than 0".to_string(),
            ));
        }
        if max_in_flight > 128 {
            return Err(CatalogError::Config(
                "max_in_flight exceeds maximum of 128".to_string(),
            ));
        }

        Ok(ClientConfig {
            origin,
            owner_id,
            transport,
            observer,
            strategy: self.strategy,
            max_in_flight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_bridge::error::Result as TransportResult;
    use catalog_bridge::{GetRequest, HttpResponse, TransportError};

    struct UnreachableTransport;

    #[async_trait]
    impl HttpTransport for UnreachableTransport {
        async fn get(&self, request: GetRequest) -> TransportResult<HttpResponse> {
            Err(TransportError::NotAvailable(request.url))
        }
    }

    #[test]
    fn test_builder_requires_origin() {
        let result = ClientConfig::builder().owner_id("owner-1").build();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Origin is required"));
    }

    #[test]
    fn test_builder_requires_owner_id() {
        let result = ClientConfig::builder()
            .origin("https://catalog.test")
            .build();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Owner id is required"));
    }

    #[test]
    fn test_builder_rejects_non_http_origin() {
        let result = ClientConfig::builder()
            .origin("ftp://catalog.test")
            .owner_id("owner-1")
            .build();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("http(s)"));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = ClientConfig::builder()
            .origin("https://catalog.test/")
            .owner_id("owner-1")
            .transport(Arc::new(UnreachableTransport))
            .build()
            .unwrap();

        assert_eq!(config.origin, "https://catalog.test");
    }

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::builder()
            .origin("https://catalog.test")
            .owner_id("owner-1")
            .transport(Arc::new(UnreachableTransport))
            .build()
            .unwrap();

        assert_eq!(config.strategy, PaginationStrategy::ClientSlice);
        assert_eq!(config.max_in_flight, 8);
    }

    #[test]
    fn test_builder_rejects_zero_fan_out() {
        let result = ClientConfig::builder()
            .origin("https://catalog.test")
            .owner_id("owner-1")
            .transport(Arc::new(UnreachableTransport))
            .max_in_flight(0)
            .build();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must be greater than 0"));
    }

    #[test]
    fn test_builder_rejects_excessive_fan_out() {
        let result = ClientConfig::builder()
            .origin("https://catalog.test")
            .owner_id("owner-1")
            .transport(Arc::new(UnreachableTransport))
            .max_in_flight(1024)
            .build();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[cfg(feature = "reqwest-transport")]
    #[test]
    fn test_builder_provides_default_transport() {
        let config = ClientConfig::builder()
            .origin("https://catalog.test")
            .owner_id("owner-1")
            .build()
            .unwrap();

        assert_eq!(config.owner_id, "owner-1");
    }

    #[test]
    fn test_builder_with_strategy() {
        let config = ClientConfig::builder()
            .origin("https://catalog.test")
            .owner_id("owner-1")
            .transport(Arc::new(UnreachableTransport))
            .strategy(PaginationStrategy::ExpandForms)
            .build()
            .unwrap();

        assert_eq!(config.strategy, PaginationStrategy::ExpandForms);
    }

    #[test]
    fn test_config_is_cloneable() {
        let config = ClientConfig::builder()
            .origin("https://catalog.test")
            .owner_id("owner-1")
            .transport(Arc::new(UnreachableTransport))
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.origin, config.origin);
        assert_eq!(cloned.max_in_flight, config.max_in_flight);
    }
}
