//! # Catalog Bridge
//!
//! Boundary between the catalog client core and whatever actually moves
//! bytes.
//!
//! ## Overview
//!
//! The client core never talks to the network directly; every request goes
//! through the [`HttpTransport`](http::HttpTransport) trait defined here.
//! Hosts inject a transport (the default reqwest-backed one lives in
//! `bridge-reqwest`) and, optionally, a
//! [`FailureObserver`](observe::FailureObserver) that receives a structured
//! event for every tolerated failure instead of having those vanish into a
//! fixed logging sink.
//!
//! ## Traits
//!
//! - [`HttpTransport`](http::HttpTransport) - read-only async HTTP against
//!   the catalog service
//! - [`FailureObserver`](observe::FailureObserver) - sink for failure
//!   diagnostics (dropped items, defaulted counts, transport failures)
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds so client operations can
//! fan out across async tasks safely.

pub mod error;
pub mod http;
pub mod observe;

pub use error::TransportError;
pub use http::{GetRequest, HttpResponse, HttpTransport};
pub use observe::{FailureEvent, FailureObserver, NullObserver, TracingObserver};
