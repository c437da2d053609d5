//! The webhook → notification pipeline.
//!
//! Each call runs a single sale through the following steps, stopping at the first one that does not succeed:
//! 1. The body is read into a [`SaleEvent`](crate::sale_event::SaleEvent). This never fails.
//! 2. The channel's [`SaleGate`](crate::gate::SaleGate) is applied. Rejected sales end here with
//!    [`RelayOutcome::Ignored`].
//! 3. The notification is composed, with the commission formatted according to the channel.
//! 4. The notification is handed to the [`NotificationSink`] and the call waits for it to settle.
use std::fmt::Debug;

use log::*;
use serde_json::Value;
use thiserror::Error;

use crate::{
    channels::ChannelProfile,
    extractor::extract_gated_sale,
    gate::SaleRejection,
    notification::{compose_message, NotificationMessage},
    traits::{NotificationError, NotificationSink},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The notification was accepted by the sink.
    Notified(NotificationMessage),
    /// The sale did not pass the channel's gate. Nothing was sent.
    Ignored(SaleRejection),
}

#[derive(Debug, Clone, Error)]
pub enum RelayError {
    #[error("Could not deliver the sale notification. {0}")]
    Delivery(#[from] NotificationError),
}

pub struct SaleRelayApi<S> {
    sink: S,
}

impl<S> Debug for SaleRelayApi<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SaleRelayApi")
    }
}

impl<S> SaleRelayApi<S>
where S: NotificationSink
{
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub async fn relay_sale(&self, channel: &ChannelProfile, body: &Value) -> Result<RelayOutcome, RelayError> {
        let sale = match extract_gated_sale(body, &channel.gate) {
            Ok(sale) => sale,
            Err(rejection) => {
                info!("📬 [{}] {rejection}", channel.name);
                return Ok(RelayOutcome::Ignored(rejection));
            },
        };
        debug!("📬 [{}] Sale accepted: {sale}", channel.name);
        let message = compose_message(&sale, channel);
        trace!("📬 [{}] Notification composed: {message}", channel.name);
        if let Err(e) = self.sink.send(&message).await {
            warn!("📣 [{}] Notification for {} was not delivered. {e}", channel.name, sale.product_name);
            return Err(e.into());
        }
        info!("📣 [{}] Notification sent: {message}", channel.name);
        Ok(RelayOutcome::Notified(message))
    }
}
