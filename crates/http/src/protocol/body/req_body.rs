use bytes::Bytes;
use tokio::io::AsyncRead;
use tracing::trace;

use crate::connection::LineReader;
use crate::protocol::ParseError;

/// On-demand reader for a request body framed by `Content-Length`.
///
/// Holds a mutable borrow of the connection reader for as long as the handler
/// runs; dropping it without calling [`ReqBody::bytes`] leaves the body unread,
/// which is fine because the connection closes after one request.
///
/// The declared length is only checked when the body is read, so an unusable
/// `Content-Length` fails the handlers that need a body and nobody else.
#[derive(Debug)]
pub struct ReqBody<'conn, R> {
    reader: &'conn mut LineReader<R>,
    length: Result<u64, ParseError>,
}

impl<'conn, R> ReqBody<'conn, R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(reader: &'conn mut LineReader<R>, length: Result<u64, ParseError>) -> Self {
        Self { reader, length }
    }

    /// Reads exactly the declared number of bytes.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidContentLength`] when the declared length is not a
    ///   number or does not fit in memory
    /// - [`ParseError::IncompleteBody`] when the client closes the stream before
    ///   the declared length has arrived
    pub async fn bytes(self) -> Result<Bytes, ParseError> {
        let declared = self.length?;
        let length = usize::try_from(declared)
            .map_err(|e| ParseError::invalid_content_length(format!("value {declared} does not fit in memory: {e}")))?;

        trace!(length, "reading request body");
        self.reader.read_exact(length).await
    }
}
