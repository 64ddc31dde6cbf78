//! HTTP request body access.
//!
//! The body is never read eagerly. A handler receives a [`ReqBody`], which borrows
//! the connection's [`LineReader`](crate::connection::LineReader) and reads exactly
//! the declared `Content-Length` only when asked. Bytes already buffered while the
//! header section was parsed are served first, so nothing read ahead is lost.

mod req_body;

pub use req_body::ReqBody;
