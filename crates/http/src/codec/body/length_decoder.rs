//! Decoder for request bodies whose size is given by the Content-Length header,
//! as defined in [RFC 9112 Section 6.2](https://www.rfc-editor.org/rfc/rfc9112#section-6.2).

use std::cmp;

use crate::protocol::ParseError;
use bytes::{Bytes, BytesMut};
use tokio_util::codec::Decoder;

/// Upper bound for the up-front buffer reservation, the declared length is not trusted
const MAX_RESERVE: usize = 64 * 1024;

/// A decoder that yields the whole body at once, once exactly `length` bytes
/// are buffered.
///
/// A stream that ends before then is an error rather than a short body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthDecoder {
    /// The number of bytes the body must contain
    length: usize,
}

impl LengthDecoder {
    /// Creates a new LengthDecoder instance.
    ///
    /// # Arguments
    /// * `length` - The exact body length, specified by Content-Length header
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Decoder for LengthDecoder {
    type Item = Bytes;
    type Error = ParseError;

    /// # Returns
    /// * `Ok(Some(bytes))` once `length` bytes are available
    /// * `Ok(None)` when more data is needed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() >= self.length {
            return Ok(Some(src.split_to(self.length).freeze()));
        }

        src.reserve(cmp::min(self.length - src.len(), MAX_RESERVE));
        Ok(None)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(bytes) => Ok(Some(bytes)),
            None => Err(ParseError::incomplete_body(self.length as u64, src.len() as u64)),
        }
    }
}
