//! The protocol core of a small, single-request HTTP/1.1 server.
//!
//! Each connection carries exactly one request: the request line and headers are
//! parsed, the request is handed to a [`handler::Handler`], the response is
//! serialized and written in one go, and the connection is closed. There is no
//! keep-alive, no pipelining and no chunked transfer encoding.
//!
//! # Example
//!
//! ```no_run
//! use std::convert::Infallible;
//! use std::sync::Arc;
//! use lite_http::connection::HttpConnection;
//! use lite_http::handler::Handler;
//! use lite_http::protocol::{header, ReqBody, Request, Response};
//! use tokio::io::AsyncRead;
//! use tokio::net::TcpListener;
//! use tracing::{error, warn};
//!
//! struct Hello;
//!
//! impl<'conn, R: AsyncRead + Unpin + Send> Handler<ReqBody<'conn, R>> for Hello {
//!     type Error = Infallible;
//!
//!     async fn call(&self, _req: Request<ReqBody<'conn, R>>) -> Result<Response, Self::Error> {
//!         Ok(Response::ok().header(header::CONTENT_TYPE, "text/plain").body("Hello World!"))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let tcp_listener = TcpListener::bind("127.0.0.1:4221").await.unwrap();
//!     let handler = Arc::new(Hello);
//!
//!     loop {
//!         let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
//!             Ok(stream_and_addr) => stream_and_addr,
//!             Err(e) => {
//!                 warn!(cause = %e, "failed to accept");
//!                 continue;
//!             }
//!         };
//!
//!         let handler = Arc::clone(&handler);
//!         tokio::spawn(async move {
//!             let (reader, writer) = tcp_stream.into_split();
//!             if let Err(e) = HttpConnection::new(reader, writer).process(handler).await {
//!                 error!("service has error, cause {}, connection shutdown", e);
//!             }
//!         });
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! - [`connection`]: the per-connection state machine and buffered reader/writer
//! - [`protocol`]: request, response and error types
//! - [`codec`]: line, header and body decoders, response encoder
//! - [`handler`]: the [`Handler`](handler::Handler) trait applications implement
//!
//! # Limitations
//!
//! - No limit on line length, header count or body size
//! - No read timeouts: a slow client holds its task until it sends or disconnects
//! - HTTP/1.1 only, no TLS

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
