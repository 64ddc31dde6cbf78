use std::io::{self, Write};

use bytes::{BufMut, Bytes, BytesMut};
use flate2::Compression;
use flate2::write::GzEncoder;

/// A content coding the server knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

impl ContentEncoding {
    /// Picks the coding to apply for a raw `Accept-Encoding` value.
    ///
    /// The match is a plain substring test: quality values are not parsed, so
    /// `gzip;q=0` still selects gzip and so does `x-gzip`.
    pub fn select(accept_encoding: &[u8]) -> Option<Self> {
        accept_encoding.windows(4).any(|token| token == b"gzip").then_some(Self::Gzip)
    }

    /// The token written to `Content-Encoding`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
        }
    }

    pub fn encode(&self, data: &[u8]) -> io::Result<Bytes> {
        match self {
            Self::Gzip => {
                let mut encoder = GzEncoder::new(BytesMut::with_capacity(data.len() + 32).writer(), Compression::default());
                encoder.write_all(data)?;
                Ok(encoder.finish()?.into_inner().freeze())
            }
        }
    }
}
