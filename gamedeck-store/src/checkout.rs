//! Checkout: merging cart contents into a client record.

use std::time::Duration;

use gamedeck_catalog::types::{CartLine, Client, LineKind};
use gamedeck_db::StoreError;
use thiserror::Error;

/// Simulated payment round-trip duration used by the default checkout path.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The payment step could not complete. Library, subscription flag,
    /// and cart are all left unchanged.
    #[error("payment failed: {0}")]
    PaymentFailed(String),
    /// Persisting the updated client failed; nothing was committed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Merge cart lines into a client record.
///
/// Game lines add their id to the library unless already owned; any plan
/// line marks the client subscribed. Only the subscription fact is
/// recorded, not the tier. Pure: the input client is untouched.
pub fn reconcile(client: &Client, lines: &[CartLine]) -> Client {
    let mut updated = client.clone();
    for line in lines {
        match line.kind {
            LineKind::Game => {
                if !updated.owns(&line.id) {
                    updated.library.push(line.id.clone());
                }
            }
            LineKind::Plan => {
                updated.is_subscribed = true;
            }
        }
    }
    updated
}
