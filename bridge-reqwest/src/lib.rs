//! # Reqwest Transport
//!
//! Default [`HttpTransport`](catalog_bridge::http::HttpTransport)
//! implementation for hosts that do not inject their own, backed by a
//! pooled `reqwest` client with rustls TLS.

mod http;

pub use http::ReqwestTransport;
