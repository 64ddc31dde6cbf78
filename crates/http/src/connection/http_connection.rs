use std::error::Error;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{error, info, warn};

use crate::connection::{LineReader, MessageWriter};
use crate::handler::Handler;
use crate::protocol::{HttpError, ReqBody, Response};

/// Initial read and write buffer capacity
const BUFFER_SIZE: usize = 8 * 1024;

/// An HTTP connection that serves exactly one request.
///
/// The connection moves through `Accepted → Parsing → Dispatching → Responding →
/// Closed` and never goes back: once the response is written the write half is
/// shut down and the connection is consumed.
///
/// # Type Parameters
///
/// * `R`: The async readable stream type
/// * `W`: The async writable stream type
#[derive(Debug)]
pub struct HttpConnection<R, W> {
    reader: LineReader<R>,
    writer: MessageWriter<W>,
}

impl<R, W> HttpConnection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: LineReader::with_capacity(reader, BUFFER_SIZE),
            writer: MessageWriter::with_capacity(writer, BUFFER_SIZE),
        }
    }

    /// Reads one request, hands it to `handler` and writes the response.
    ///
    /// A request that can't be parsed is answered with `400 Bad Request` and the
    /// parse error is returned. A handler error is answered with
    /// `500 Internal Server Error`. A peer that closes without sending anything
    /// gets no response. The response is the only thing ever written: there are
    /// no interim `1xx` responses.
    pub async fn process<H>(mut self, handler: Arc<H>) -> Result<(), HttpError>
    where
        H: for<'conn> Handler<ReqBody<'conn, R>>,
    {
        let header = match self.reader.read_request_header().await {
            Ok(Some(header)) => header,
            Ok(None) => {
                info!("cant read request, connection closed by peer");
                return Ok(());
            }
            Err(e) => {
                warn!(cause = %e, "can't parse request");
                self.send_response(Response::bad_request()).await?;
                return Err(e.into());
            }
        };

        let content_length = header.content_length();

        info!(method = %header.method(), path = %String::from_utf8_lossy(header.path()), "dispatching request");
        let request = header.body(ReqBody::new(&mut self.reader, content_length));
        let response = match handler.call(request).await {
            Ok(response) => response,
            Err(e) => {
                let cause: Box<dyn Error + Send + Sync> = e.into();
                error!("handle request error, cause: {}", cause);
                Response::internal_server_error()
            }
        };

        self.send_response(response).await
    }

    async fn send_response(&mut self, response: Response) -> Result<(), HttpError> {
        info!(status = response.status().as_u16(), "sending response");
        self.writer.write(response)?;
        self.writer.close().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{header, ParseError, Request};
    use bytes::Bytes;
    use std::convert::Infallible;
    use std::io;
    use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream, ReadHalf};

    type TestBody<'conn> = ReqBody<'conn, ReadHalf<DuplexStream>>;

    /// Answers with the request body, or `400` when it can't be read.
    struct BodyEcho;

    impl<'conn> Handler<TestBody<'conn>> for BodyEcho {
        type Error = Infallible;

        async fn call(&self, req: Request<TestBody<'conn>>) -> Result<Response, Self::Error> {
            let (_header, body) = req.into_parts();
            match body.bytes().await {
                Ok(bytes) => Ok(Response::ok().header(header::CONTENT_TYPE, "text/plain").body(bytes)),
                Err(_) => Ok(Response::bad_request()),
            }
        }
    }

    /// Answers with the `User-Agent` value and never touches the body.
    struct UserAgent;

    impl<'conn> Handler<TestBody<'conn>> for UserAgent {
        type Error = Infallible;

        async fn call(&self, req: Request<TestBody<'conn>>) -> Result<Response, Self::Error> {
            let user_agent = req.headers().get("user-agent").unwrap_or_default();
            Ok(Response::ok().body(Bytes::copy_from_slice(user_agent)))
        }
    }

    struct Failing;

    impl<'conn> Handler<TestBody<'conn>> for Failing {
        type Error = io::Error;

        async fn call(&self, _req: Request<TestBody<'conn>>) -> Result<Response, Self::Error> {
            Err(io::Error::other("boom"))
        }
    }

    async fn roundtrip<H>(handler: H, request: &[u8]) -> (Result<(), HttpError>, Vec<u8>)
    where
        H: for<'conn> Handler<TestBody<'conn>>,
    {
        let (mut client, server) = tokio::io::duplex(64 * 1024);
        let (reader, writer) = tokio::io::split(server);

        client.write_all(request).await.unwrap();
        client.shutdown().await.unwrap();

        let result = HttpConnection::new(reader, writer).process(Arc::new(handler)).await;

        let mut response = Vec::new();
        client.read_to_end(&mut response).await.unwrap();
        (result, response)
    }

    #[tokio::test]
    async fn serves_one_request() {
        let (result, response) = roundtrip(BodyEcho, b"POST /x HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello").await;

        assert!(result.is_ok());
        assert_eq!(&response[..], b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello");
    }

    #[tokio::test]
    async fn malformed_request_gets_bad_request() {
        let (result, response) = roundtrip(BodyEcho, b"NONSENSE\r\n\r\n").await;

        assert!(matches!(result, Err(HttpError::RequestError { source: ParseError::MalformedRequestLine { .. } })));
        assert_eq!(&response[..], b"HTTP/1.1 400 Bad Request\r\n\r\n");
    }

    #[tokio::test]
    async fn invalid_content_length_only_fails_body_readers() {
        let request = b"GET /user-agent HTTP/1.1\r\nUser-Agent: ua\r\nContent-Length: abc\r\n\r\n";

        let (result, response) = roundtrip(UserAgent, request).await;
        assert!(result.is_ok());
        assert_eq!(&response[..], b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nua");

        let (result, response) = roundtrip(BodyEcho, request).await;
        assert!(result.is_ok());
        assert_eq!(&response[..], b"HTTP/1.1 400 Bad Request\r\n\r\n");
    }

    #[tokio::test]
    async fn handler_error_gets_internal_server_error() {
        let (result, response) = roundtrip(Failing, b"GET / HTTP/1.1\r\n\r\n").await;

        assert!(result.is_ok());
        assert_eq!(&response[..], b"HTTP/1.1 500 Internal Server Error\r\n\r\n");
    }

    #[tokio::test]
    async fn silent_peer_gets_nothing() {
        let (result, response) = roundtrip(BodyEcho, b"").await;

        assert!(result.is_ok());
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn expect_header_gets_no_interim_response() {
        let (result, response) = roundtrip(UserAgent, b"GET / HTTP/1.1\r\nExpect: 100-continue\r\n\r\n").await;

        assert!(result.is_ok());
        assert_eq!(&response[..], b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
    }
}
