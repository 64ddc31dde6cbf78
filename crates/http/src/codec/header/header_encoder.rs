//! Serializes the status line and header section of a response.
//!
//! Headers are written in the order the handler declared them, with the casing it
//! used. `Content-Length` is the one exception: it is computed from the body and
//! written last, so its value always matches the bytes that follow.

use crate::protocol::{header, Response, SendError};

use bytes::{BufMut, BytesMut};

use std::io;
use std::io::Write;
use tokio_util::codec::Encoder;

/// Initial buffer size allocated for header serialization
const INIT_HEADER_SIZE: usize = 1024;

/// Encoder for the head of a [`Response`], implementing the [`Encoder`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEncoder;

impl Encoder<&Response> for HeaderEncoder {
    type Error = SendError;

    /// Encodes `HTTP/1.1 <code> <reason>\r\n`, the headers and the blank line.
    fn encode(&mut self, response: &Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(INIT_HEADER_SIZE);

        let status = response.status();
        write!(FastWrite(dst), "HTTP/1.1 {} {}\r\n", status.as_str(), status.canonical_reason().unwrap_or_default())?;

        for (name, value) in response.headers() {
            if name.eq_ignore_ascii_case(header::CONTENT_LENGTH) {
                continue;
            }
            put_header(dst, name, value.as_bytes());
        }

        if let Some(body) = response.body_bytes() {
            put_header(dst, header::CONTENT_LENGTH, body.len().to_string().as_bytes());
        }

        dst.put_slice(b"\r\n");
        Ok(())
    }
}

fn put_header(dst: &mut BytesMut, name: &str, value: &[u8]) {
    dst.put_slice(name.as_bytes());
    dst.put_slice(b": ");
    dst.put_slice(value);
    dst.put_slice(b"\r\n");
}

/// Writer adapter so `write!` can format straight into a `BytesMut`.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
