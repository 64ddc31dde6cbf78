use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::{LengthDecoder, LineDecoder, RequestDecoder};
use crate::protocol::{ParseError, RequestHeader};

/// Initial read buffer capacity
const INIT_BUFFER_SIZE: usize = 8 * 1024;

/// Buffered reader over the read half of a connection.
///
/// All reads go through one lookahead buffer, so line reads, header decoding and
/// fixed-length body reads can be interleaved freely: bytes that were read from
/// the socket but not yet consumed stay buffered for the next call.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buffer: BytesMut,
    eof: bool,
}

impl<R> LineReader<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, INIT_BUFFER_SIZE)
    }

    pub fn with_capacity(reader: R, buffer_size: usize) -> Self {
        Self { reader, buffer: BytesMut::with_capacity(buffer_size), eof: false }
    }

    /// Returns the next line including its `\n`.
    ///
    /// When the stream ends the unterminated rest is returned, and after that an
    /// empty `Bytes`.
    pub async fn read_line(&mut self) -> Result<Bytes, ParseError> {
        Ok(self.read_frame(&mut LineDecoder::new()).await?.unwrap_or_default())
    }

    /// Returns exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// [`ParseError::IncompleteBody`] if the stream ends first.
    pub async fn read_exact(&mut self, n: usize) -> Result<Bytes, ParseError> {
        match self.read_frame(&mut LengthDecoder::new(n)).await? {
            Some(bytes) => Ok(bytes),
            None => Err(ParseError::incomplete_body(n as u64, 0)),
        }
    }

    /// Reads the request line and header section.
    ///
    /// Returns `Ok(None)` if the peer closed the connection without sending anything.
    pub async fn read_request_header(&mut self) -> Result<Option<RequestHeader>, ParseError> {
        self.read_frame(&mut RequestDecoder::new()).await
    }

    /// Drives `decoder` against the buffer, reading more from the stream until it
    /// produces a frame or the stream ends.
    pub async fn read_frame<D>(&mut self, decoder: &mut D) -> Result<Option<D::Item>, D::Error>
    where
        D: Decoder,
    {
        loop {
            if self.eof {
                return decoder.decode_eof(&mut self.buffer);
            }

            if let Some(frame) = decoder.decode(&mut self.buffer)? {
                return Ok(Some(frame));
            }

            self.buffer.reserve(1);
            let read = self.reader.read_buf(&mut self.buffer).await?;
            trace!(read, buffered = self.buffer.len(), "filled read buffer");
            if read == 0 {
                self.eof = true;
            }
        }
    }

    /// Bytes read from the stream but not consumed yet.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn lines_then_exact_bytes() {
        let mut reader = LineReader::new(&b"first\r\nsecond\r\nbody-bytes"[..]);

        assert_eq!(&reader.read_line().await.unwrap()[..], b"first\r\n");
        assert_eq!(&reader.read_line().await.unwrap()[..], b"second\r\n");
        assert_eq!(&reader.read_exact(4).await.unwrap()[..], b"body");
        assert_eq!(reader.buffered(), b"-bytes");
        assert_eq!(&reader.read_line().await.unwrap()[..], b"-bytes");
        assert!(reader.read_line().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn keeps_lookahead_across_small_reads() {
        let (mut client, server) = tokio::io::duplex(4);
        let mut reader = LineReader::with_capacity(server, 4);

        let writer = tokio::spawn(async move {
            client.write_all(b"POST /files/x HTTP/1.1\r\nContent-Length: 10\r\n\r\n0123456789").await.unwrap();
        });

        let header = reader.read_request_header().await.unwrap().unwrap();
        let length = usize::try_from(header.content_length().unwrap()).unwrap();
        assert_eq!(&reader.read_exact(length).await.unwrap()[..], b"0123456789");

        writer.await.unwrap();
    }

    #[tokio::test]
    async fn exact_read_past_end_fails() {
        let mut reader = LineReader::new(&b"abc"[..]);

        let err = reader.read_exact(10).await.unwrap_err();
        assert!(matches!(err, ParseError::IncompleteBody { expected: 10, received: 3 }));
    }

    #[tokio::test]
    async fn closed_before_request() {
        let mut reader = LineReader::new(&b""[..]);
        assert!(reader.read_request_header().await.unwrap().is_none());
    }
}
