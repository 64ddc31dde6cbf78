//! HTTP codec module for decoding requests and encoding responses
//!
//! Every piece here is a `tokio_util` [`Decoder`](tokio_util::codec::Decoder) or
//! [`Encoder`](tokio_util::codec::Encoder) working on a `BytesMut`, so they can all
//! be driven against one shared read buffer by
//! [`LineReader`](crate::connection::LineReader).
//!
//! # Architecture
//!
//! - Request handling:
//!   - [`LineDecoder`]: splits the stream into `\n` terminated lines
//!   - [`RequestDecoder`]: request line plus header section, via the `header` helpers
//!   - [`LengthDecoder`]: exactly `Content-Length` body bytes
//!
//! - Response handling:
//!   - [`ResponseEncoder`]: status line, ordered headers, computed `Content-Length`, body
//!
//! # Example
//!
//! ```
//! use lite_http::codec::ResponseEncoder;
//! use lite_http::protocol::{header, Response};
//! use tokio_util::codec::Encoder;
//! use bytes::BytesMut;
//!
//! let response = Response::ok().header(header::CONTENT_TYPE, "text/plain").body("abc");
//! let mut buffer = BytesMut::new();
//! ResponseEncoder::new().encode(response, &mut buffer).unwrap();
//! assert_eq!(&buffer[..], b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc");
//! ```

mod body;
mod header;
mod line_decoder;
mod request_decoder;
mod response_encoder;

pub use body::LengthDecoder;
pub use header::{HeaderEncoder, is_header_end, parse_header_line, parse_request_line};
pub use line_decoder::LineDecoder;
pub use request_decoder::RequestDecoder;
pub use response_encoder::ResponseEncoder;
