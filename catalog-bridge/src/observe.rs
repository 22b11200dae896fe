//! Failure Diagnostics
//!
//! Tolerated failures (a dropped book, a defaulted count) never surface as
//! errors, so hosts that want visibility into them register an observer.
//! Every failure path in the client emits one structured event.

use serde::Serialize;
use tracing::warn;

/// A failure on the request path, described for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FailureEvent {
    /// A request failed outright: network failure or non-2xx status.
    TransportFailure { url: String, cause: String },

    /// A per-item detail fetch failed; the item was dropped from the result.
    ItemDropped {
        url: String,
        item_id: String,
        cause: String,
    },

    /// A shelf's book-count lookup failed; the count defaulted to zero.
    CountDefaulted { shelf_id: String, cause: String },
}

impl FailureEvent {
    /// Stable kind tag, matching the serialized `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TransportFailure { .. } => "transport-failure",
            Self::ItemDropped { .. } => "item-dropped",
            Self::CountDefaulted { .. } => "count-defaulted",
        }
    }
}

/// Observer for failure diagnostics.
///
/// Implementations must be cheap: events are emitted inline on the request
/// path, and the client does not await them.
pub trait FailureObserver: Send + Sync {
    fn record(&self, event: FailureEvent);
}

/// Default observer: forwards every event to `tracing` at WARN.
#[derive(Debug, Default, Clone)]
pub struct TracingObserver;

impl FailureObserver for TracingObserver {
    fn record(&self, event: FailureEvent) {
        match &event {
            FailureEvent::TransportFailure { url, cause } => {
                warn!(kind = event.kind(), url = %url, cause = %cause, "catalog request failed");
            }
            FailureEvent::ItemDropped {
                url,
                item_id,
                cause,
            } => {
                warn!(kind = event.kind(), url = %url, item_id = %item_id, cause = %cause, "catalog item dropped");
            }
            FailureEvent::CountDefaulted { shelf_id, cause } => {
                warn!(kind = event.kind(), shelf_id = %shelf_id, cause = %cause, "book count defaulted to zero");
            }
        }
    }
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone)]
pub struct NullObserver;

impl FailureObserver for NullObserver {
    fn record(&self, _event: FailureEvent) {}
}
