//! Kafka header bridge for rdkafka producers and consumers
//!
//! Maps a [`HeaderMap`] onto rdkafka's header representation so that
//! correlation ids survive the hop through a Kafka topic. Enable with the
//! `kafka` cargo feature.

use rdkafka::message::{Header, Headers, OwnedHeaders};

use crate::headers::HeaderMap;

/// Append every non-null entry of `headers` to an outgoing Kafka header
/// set, string-rendered.
pub fn inject(mut kafka_headers: OwnedHeaders, headers: &HeaderMap) -> OwnedHeaders {
    for (key, value) in headers.iter() {
        if value.is_null() {
            continue;
        }
        let rendered = value.to_string();
        kafka_headers = kafka_headers.insert(Header {
            key,
            value: Some(rendered.as_str()),
        });
    }
    kafka_headers
}

/// Collect the UTF-8 headers of a consumed message into a [`HeaderMap`].
///
/// Values that are missing or not valid UTF-8 are skipped; Kafka carries
/// raw bytes and only textual headers are meaningful here.
pub fn extract<H: Headers>(kafka_headers: &H) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for header in kafka_headers.iter() {
        if let Some(value) = header.value {
            if let Ok(text) = std::str::from_utf8(value) {
                headers.insert(header.key, text);
            }
        }
    }
    headers
}
