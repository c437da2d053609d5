//! Commission Engine
//!
//! The provider-agnostic core of the commission relay. It turns storefront "order paid" webhooks into short push
//! notifications that tell the seller what they earned, formatted in the right currency and locale.
//!
//! The library is split into:
//! 1. [`mod@currency`]: locale-aware currency formatting over static currency and locale tables.
//! 2. [`mod@extractor`] and [`mod@gate`]: reading sales out of arbitrary webhook bodies, and deciding which ones are
//!    worth a notification.
//! 3. [`mod@channels`]: the route-keyed table that says how each webhook path formats its sales.
//! 4. [`SaleRelayApi`]: the pipeline tying it all together. Delivery goes through the [`NotificationSink`] trait, so
//!    any push service can be plugged in.
pub mod channels;
pub mod currency;
pub mod extractor;
pub mod gate;
pub mod notification;
mod relay_api;
pub mod sale_event;
pub mod traits;

pub use channels::{ChannelConfigError, ChannelProfile, ChannelTable};
pub use notification::NotificationMessage;
pub use relay_api::{RelayError, RelayOutcome, SaleRelayApi};
pub use sale_event::SaleEvent;
pub use traits::{NotificationError, NotificationSink};
