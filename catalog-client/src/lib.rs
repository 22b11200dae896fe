//! # Catalog Client
//!
//! Read-only data-access core for the upstream library-catalog service.
//!
//! ## Overview
//!
//! The upstream API exposes shelves owned by a single catalog user; each
//! shelf is a collection of opaque "form" ids that resolve to individual
//! book records. This crate normalizes those responses into two stable
//! record types ([`Shelf`] and [`Book`]) and layers consistent
//! offset/limit pagination on top of collections the upstream does not
//! paginate consistently.
//!
//! - Top-level fetch failures abort the operation; per-item failures are
//!   tolerated: counts default to zero, unresolvable books are dropped.
//! - Per-item fan-out is bounded and order-preserving; nothing retries and
//!   nothing caches.
//! - The transport and the failure-diagnostics sink are injected through
//!   `catalog-bridge`, so tests run against a scripted fake transport.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_client::{CatalogClient, ClientConfig, PageRequest};
//!
//! let config = ClientConfig::builder()
//!     .origin("https://api.example.com")
//!     .owner_id("5a8411b53ed02c04187ff02a")
//!     .build()?;
//!
//! let client = CatalogClient::new(config);
//! let shelves = client.list_shelves(PageRequest::new(12, 0)).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod page;
pub mod types;

pub use client::CatalogClient;
pub use config::{ClientConfig, PaginationStrategy};
pub use error::{CatalogError, Result};
pub use models::{Author, Book, Price, Shelf};
pub use page::{Page, PageRequest};
