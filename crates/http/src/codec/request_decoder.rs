//! HTTP request header decoder
//!
//! Consumes the request line and header section line by line, producing a
//! [`RequestHeader`]. The body is left in the buffer untouched; it is read later,
//! on demand, with a [`LengthDecoder`](crate::codec::LengthDecoder).
//!
//! # Example
//!
//! ```
//! use lite_http::codec::RequestDecoder;
//! use tokio_util::codec::Decoder;
//! use bytes::BytesMut;
//!
//! let mut decoder = RequestDecoder::new();
//! let mut buffer = BytesMut::from(&b"GET /user-agent HTTP/1.1\r\nUser-Agent: curl\r\n\r\n"[..]);
//! let header = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(header.path(), b"/user-agent");
//! assert_eq!(header.headers().get("user-agent"), Some(&b"curl"[..]));
//! ```

use crate::codec::LineDecoder;
use crate::codec::header::{is_header_end, parse_header_line, parse_request_line};
use crate::protocol::{HeaderFields, ParseError, RequestHeader, RequestLine};
use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::trace;

/// A decoder for the head of an HTTP request.
///
/// # State Machine
///
/// The decoder keeps its progress in the `partial` field, so it can be fed a
/// buffer that grows across several reads:
/// - `None`: waiting for the request line
/// - `Some(_)`: request line seen, collecting header lines until the empty line
#[derive(Debug, Default)]
pub struct RequestDecoder {
    line_decoder: LineDecoder,
    partial: Option<(RequestLine, HeaderFields)>,
}

impl RequestDecoder {
    /// Creates a new `RequestDecoder` instance
    pub fn new() -> Self {
        Default::default()
    }
}

impl Decoder for RequestDecoder {
    type Item = RequestHeader;
    type Error = ParseError;

    /// # Returns
    ///
    /// - `Ok(Some(header))`: the header section is complete
    /// - `Ok(None)`: need more data to proceed
    /// - `Err(_)`: the request line could not be parsed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        while let Some(line) = self.line_decoder.decode(src)? {
            match self.partial.take() {
                None => {
                    let request_line = parse_request_line(&line)?;
                    trace!(method = %request_line.method, path = %String::from_utf8_lossy(&request_line.path), "parsed request line");
                    self.partial = Some((request_line, HeaderFields::new()));
                }
                Some((request_line, headers)) if is_header_end(&line) => {
                    trace!(header_count = headers.len(), "parsed header section");
                    return Ok(Some(RequestHeader::new(request_line, headers)));
                }
                Some((request_line, mut headers)) => {
                    if let Some((name, value)) = parse_header_line(&line) {
                        headers.insert(&name, value);
                    }
                    self.partial = Some((request_line, headers));
                }
            }
        }

        Ok(None)
    }

    /// A stream that closes before sending anything is a clean close, anything
    /// else ending before the empty line is [`ParseError::UnexpectedEof`].
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(header) = self.decode(src)? {
            return Ok(Some(header));
        }

        if src.is_empty() && self.partial.is_none() {
            return Ok(None);
        }

        Err(ParseError::UnexpectedEof)
    }
}
