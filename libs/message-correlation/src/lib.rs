//! # Message Correlation Library
//!
//! Guarantees that messages crossing service boundaries carry a correlation
//! id in their headers, generating a UUID v4 when one is absent. The
//! concrete message and transport types stay external: implement the
//! [`OutboundMessage`] / [`InboundMessage`] contracts on a broker client's
//! wrappers and the accessors come along as extension traits.
//!
//! ## What it provides
//!
//! - **Get-or-create** on an outbound message: reuse the existing header
//!   value, or generate, store, and return a new one.
//! - **Copy-on-write** on a bare header map: the identical map back when a
//!   correlation id is present, an extended copy when not. Shared maps are
//!   never mutated.
//! - **Set** and **get** accessors with a configurable header key
//!   (default [`DEFAULT_CORRELATION_ID_HEADER`]).
//! - A Kafka header bridge behind the `kafka` feature.
//!
//! ## Usage
//!
//! ```
//! use message_correlation::{HeaderMap, OutboundMessage, OutboundMessageExt};
//!
//! struct SenderMessage {
//!     headers: HeaderMap,
//! }
//!
//! impl OutboundMessage for SenderMessage {
//!     fn headers(&self) -> &HeaderMap {
//!         &self.headers
//!     }
//!     fn headers_mut(&mut self) -> &mut HeaderMap {
//!         &mut self.headers
//!     }
//! }
//!
//! let mut message = SenderMessage { headers: HeaderMap::new() };
//! let id = message.correlation_id();
//! // Stable once generated
//! assert_eq!(message.correlation_id(), id);
//! ```

pub mod correlation;
pub mod error;
pub mod headers;
#[cfg(feature = "kafka")]
pub mod kafka;
pub mod message;

pub use correlation::{
    new_correlation_id, HeaderMapExt, InboundMessageExt, OutboundMessageExt,
    DEFAULT_CORRELATION_ID_HEADER,
};
pub use error::{CorrelationError, CorrelationResult};
pub use headers::{HeaderMap, HeaderValue};
pub use message::{InboundMessage, OutboundMessage};
