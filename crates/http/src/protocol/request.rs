//! HTTP request types.
//!
//! A request is split into a [`RequestHeader`], which holds everything parsed from
//! the request line and the header section, and a body capability that the handler
//! may or may not consume. The path is kept exactly as it appeared on the wire: it
//! is neither URL-decoded nor normalized.

use std::collections::HashMap;

use bytes::Bytes;
use http::Method;

use crate::protocol::ParseError;

/// The three space separated parts of the first line of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// Raw bytes of the request target
    pub path: Bytes,
    /// Everything after the second space, not validated
    pub version: Bytes,
}

/// Request header fields keyed by lower-cased name.
///
/// Values are stored trimmed, as raw bytes. When a name appears more than once
/// the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    inner: HashMap<String, Bytes>,
}

impl HeaderFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, lower-casing the name and trimming both name and value.
    pub fn insert(&mut self, name: &str, value: impl Into<Bytes>) {
        let value = value.into();
        let trimmed = value.slice_ref(value.trim_ascii());
        self.inner.insert(name.trim().to_ascii_lowercase(), trimmed);
    }

    /// Looks a field up by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.inner.get(name).or_else(|| self.inner.get(&name.to_ascii_lowercase())).map(Bytes::as_ref)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Everything known about a request before its body is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeader {
    request_line: RequestLine,
    headers: HeaderFields,
}

impl RequestHeader {
    pub fn new(request_line: RequestLine, headers: HeaderFields) -> Self {
        Self { request_line, headers }
    }

    pub fn method(&self) -> &Method {
        &self.request_line.method
    }

    /// The raw request target, query string included.
    pub fn path(&self) -> &[u8] {
        &self.request_line.path
    }

    pub fn version(&self) -> &[u8] {
        &self.request_line.version
    }

    pub fn headers(&self) -> &HeaderFields {
        &self.headers
    }

    /// Number of body bytes the client declared with `Content-Length`.
    ///
    /// A missing header means there is no body.
    pub fn content_length(&self) -> Result<u64, ParseError> {
        let Some(value) = self.headers.get("content-length") else {
            return Ok(0);
        };

        let value = String::from_utf8_lossy(value);
        value.parse::<u64>().map_err(|e| ParseError::invalid_content_length(format!("value {value:?} is not u64: {e}")))
    }

    /// Attaches a body capability, producing a full [`Request`].
    pub fn body<B>(self, body: B) -> Request<B> {
        Request { header: self, body }
    }
}

/// A parsed request header together with a body of type `B`.
#[derive(Debug)]
pub struct Request<B> {
    header: RequestHeader,
    body: B,
}

impl<B> Request<B> {
    pub fn header(&self) -> &RequestHeader {
        &self.header
    }

    pub fn method(&self) -> &Method {
        self.header.method()
    }

    pub fn path(&self) -> &[u8] {
        self.header.path()
    }

    pub fn headers(&self) -> &HeaderFields {
        self.header.headers()
    }

    pub fn into_parts(self) -> (RequestHeader, B) {
        (self.header, self.body)
    }
}
