//! Decoder that splits a byte stream into `\n` terminated lines.

use bytes::{Bytes, BytesMut};
use tokio_util::codec::Decoder;

use crate::protocol::ParseError;

/// Yields every line including its terminating `\n`.
///
/// There is no limit on the line length: bytes accumulate in the buffer until a
/// `\n` shows up or the stream ends. At the end of the stream whatever is left
/// is returned as a final, unterminated line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineDecoder {
    /// How far the buffer has already been searched for `\n`
    searched: usize,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for LineDecoder {
    type Item = Bytes;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let start = self.searched.min(src.len());
        match src[start..].iter().position(|b| *b == b'\n') {
            Some(offset) => {
                self.searched = 0;
                Ok(Some(src.split_to(start + offset + 1).freeze()))
            }
            None => {
                self.searched = src.len();
                Ok(None)
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }

        self.searched = 0;
        if src.is_empty() { Ok(None) } else { Ok(Some(src.split().freeze())) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_after_newline() {
        let mut buffer = BytesMut::from(&b"GET / HTTP/1.1\r\nHost: a\r\n"[..]);
        let mut decoder = LineDecoder::new();

        assert_eq!(&decoder.decode(&mut buffer).unwrap().unwrap()[..], b"GET / HTTP/1.1\r\n");
        assert_eq!(&decoder.decode(&mut buffer).unwrap().unwrap()[..], b"Host: a\r\n");
        assert!(decoder.decode(&mut buffer).unwrap().is_none());
        assert!(buffer.is_empty());
    }

    #[test]
    fn waits_for_the_rest_of_a_line() {
        let mut buffer = BytesMut::from(&b"User-Age"[..]);
        let mut decoder = LineDecoder::new();

        assert!(decoder.decode(&mut buffer).unwrap().is_none());

        buffer.extend_from_slice(b"nt: x\r\n\r\n");
        assert_eq!(&decoder.decode(&mut buffer).unwrap().unwrap()[..], b"User-Agent: x\r\n");
        assert_eq!(&decoder.decode(&mut buffer).unwrap().unwrap()[..], b"\r\n");
    }

    #[test]
    fn eof_returns_partial_line() {
        let mut buffer = BytesMut::from(&b"partial"[..]);
        let mut decoder = LineDecoder::new();

        assert_eq!(&decoder.decode_eof(&mut buffer).unwrap().unwrap()[..], b"partial");
        assert!(decoder.decode_eof(&mut buffer).unwrap().is_none());
    }
}
