//! Workspace placeholder crate.
//!
//! Exposes the member crates' feature flags under one roof so a host
//! application can depend on `catalog-workspace` and toggle the documented
//! features without wiring each member crate individually.

#[cfg(feature = "reqwest-transport")]
pub use catalog_client;
