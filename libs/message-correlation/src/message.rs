//! Collaborator contracts for transport message types
//!
//! The concrete message types belong to the broker client in use; this
//! library only requires access to their header maps. Implement these
//! traits on the transport's message wrappers to get the correlation
//! accessors from [`crate::correlation`] for free.

use crate::headers::HeaderMap;

/// A message about to be handed to a transport.
///
/// The caller owns the message until it is sent and may mutate its headers
/// freely.
pub trait OutboundMessage {
    fn headers(&self) -> &HeaderMap;
    fn headers_mut(&mut self) -> &mut HeaderMap;
}

/// A message received from a transport.
///
/// Owned by the receiving framework; this library only reads from it.
pub trait InboundMessage {
    fn headers(&self) -> &HeaderMap;
}
