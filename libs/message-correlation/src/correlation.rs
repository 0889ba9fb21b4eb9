//! Correlation ID accessors for message headers
//!
//! Guarantees that messages crossing a broker boundary carry a correlation
//! id, generating one when absent.
//!
//! ## Propagation Pattern
//! ```text
//! Producer
//!   ↓ (correlation_id() generates or reuses the header value)
//! Broker message headers
//!   ↓ (transport delivers headers unchanged)
//! Consumer
//!   ↓ (correlation_id() reads the header, absent → None)
//! Structured logs / downstream messages
//! ```
//!
//! Two write disciplines, matching who owns the data:
//! - An outbound message is owned by the caller, so [`OutboundMessageExt`]
//!   mutates its header map in place.
//! - A bare [`HeaderMap`] may be shared, so [`HeaderMapExt`] is
//!   copy-on-write: the same map comes back (reference identity) when no
//!   change is needed, and an extended copy when one is.

use std::borrow::Cow;

use tracing::debug;
use uuid::Uuid;

use crate::error::{CorrelationError, CorrelationResult};
use crate::headers::HeaderMap;
use crate::message::{InboundMessage, OutboundMessage};

/// Default header key carrying the correlation id.
///
/// Every accessor has an `*_in` variant accepting a different key.
pub const DEFAULT_CORRELATION_ID_HEADER: &str = "CorrelationId";

/// Generate a new correlation id: a UUID v4 in canonical 36-character
/// textual form. Uniqueness rests on the generator's statistical
/// guarantees alone.
pub fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

fn require(name: &'static str, value: &str) -> CorrelationResult<()> {
    if value.is_empty() {
        return Err(CorrelationError::InvalidArgument(name));
    }
    Ok(())
}

fn get_or_insert(headers: &mut HeaderMap, header: &str) -> String {
    if let Some(value) = headers.get_present(header) {
        return value.to_string();
    }
    let correlation_id = new_correlation_id();
    debug!(%correlation_id, header, "generated correlation id for outbound message");
    headers.insert(header, correlation_id.clone());
    correlation_id
}

fn ensure_present<'a>(headers: &'a HeaderMap, header: &str) -> Cow<'a, HeaderMap> {
    if headers.get_present(header).is_some() {
        return Cow::Borrowed(headers);
    }
    let correlation_id = new_correlation_id();
    debug!(%correlation_id, header, "generated correlation id for header map");
    let mut extended = headers.clone();
    extended.insert(header, correlation_id);
    Cow::Owned(extended)
}

/// Correlation accessors for any [`OutboundMessage`].
pub trait OutboundMessageExt {
    /// Value of the correlation id header under
    /// [`DEFAULT_CORRELATION_ID_HEADER`], rendered as a string. If the
    /// header is missing or null, a new id is generated, stored on the
    /// message in place, and returned.
    fn correlation_id(&mut self) -> String;

    /// Same as [`correlation_id`](OutboundMessageExt::correlation_id) under
    /// an explicit header key.
    fn correlation_id_in(&mut self, correlation_id_header: &str) -> CorrelationResult<String>;

    /// Unconditionally store `correlation_id` under
    /// [`DEFAULT_CORRELATION_ID_HEADER`], overwriting any existing value.
    /// No format is imposed on the value. Returns the message for chaining.
    fn set_correlation_id(&mut self, correlation_id: &str) -> CorrelationResult<&mut Self>;

    /// Same as [`set_correlation_id`](OutboundMessageExt::set_correlation_id)
    /// under an explicit header key.
    fn set_correlation_id_in(
        &mut self,
        correlation_id: &str,
        correlation_id_header: &str,
    ) -> CorrelationResult<&mut Self>;
}

impl<M: OutboundMessage> OutboundMessageExt for M {
    fn correlation_id(&mut self) -> String {
        get_or_insert(self.headers_mut(), DEFAULT_CORRELATION_ID_HEADER)
    }

    fn correlation_id_in(&mut self, correlation_id_header: &str) -> CorrelationResult<String> {
        require("correlation_id_header", correlation_id_header)?;
        Ok(get_or_insert(self.headers_mut(), correlation_id_header))
    }

    fn set_correlation_id(&mut self, correlation_id: &str) -> CorrelationResult<&mut Self> {
        self.set_correlation_id_in(correlation_id, DEFAULT_CORRELATION_ID_HEADER)
    }

    fn set_correlation_id_in(
        &mut self,
        correlation_id: &str,
        correlation_id_header: &str,
    ) -> CorrelationResult<&mut Self> {
        require("correlation_id", correlation_id)?;
        require("correlation_id_header", correlation_id_header)?;
        self.headers_mut().insert(correlation_id_header, correlation_id);
        Ok(self)
    }
}

/// Correlation lookup for any [`InboundMessage`].
pub trait InboundMessageExt {
    /// Value of the correlation id header under
    /// [`DEFAULT_CORRELATION_ID_HEADER`], or `None` when the header is
    /// missing or null. Absence is a normal result, never an error.
    fn correlation_id(&self) -> Option<String>;

    /// Same as [`correlation_id`](InboundMessageExt::correlation_id) under
    /// an explicit header key.
    fn correlation_id_in(&self, correlation_id_header: &str) -> CorrelationResult<Option<String>>;
}

impl<M: InboundMessage> InboundMessageExt for M {
    fn correlation_id(&self) -> Option<String> {
        self.headers()
            .get_present(DEFAULT_CORRELATION_ID_HEADER)
            .map(|value| value.to_string())
    }

    fn correlation_id_in(&self, correlation_id_header: &str) -> CorrelationResult<Option<String>> {
        require("correlation_id_header", correlation_id_header)?;
        Ok(self
            .headers()
            .get_present(correlation_id_header)
            .map(|value| value.to_string()))
    }
}

/// Copy-on-write correlation guarantee for a header map that may be shared.
pub trait HeaderMapExt {
    /// The same map (reference identity, no copy, no mutation) when a
    /// non-null value already sits under [`DEFAULT_CORRELATION_ID_HEADER`];
    /// otherwise an owned copy of all entries plus a freshly generated id.
    /// The original map is never modified.
    fn with_correlation_id(&self) -> Cow<'_, HeaderMap>;

    /// Same as [`with_correlation_id`](HeaderMapExt::with_correlation_id)
    /// under an explicit header key.
    fn with_correlation_id_in(
        &self,
        correlation_id_header: &str,
    ) -> CorrelationResult<Cow<'_, HeaderMap>>;
}

impl HeaderMapExt for HeaderMap {
    fn with_correlation_id(&self) -> Cow<'_, HeaderMap> {
        ensure_present(self, DEFAULT_CORRELATION_ID_HEADER)
    }

    fn with_correlation_id_in(
        &self,
        correlation_id_header: &str,
    ) -> CorrelationResult<Cow<'_, HeaderMap>> {
        require("correlation_id_header", correlation_id_header)?;
        Ok(ensure_present(self, correlation_id_header))
    }
}
