//! HTTP connection handling module
//!
//! # Components
//!
//! - [`LineReader`]: buffered reader over the read half; serves lines, the request
//!   header and fixed-length bodies from one lookahead buffer
//! - [`MessageWriter`]: encodes a response into a buffer and writes it in one go
//! - [`HttpConnection`]: drives one request through parse, dispatch and respond,
//!   then closes the connection (no keep-alive)

mod http_connection;
mod line_reader;
mod message_writer;

pub use http_connection::HttpConnection;
pub use line_reader::LineReader;
pub use message_writer::MessageWriter;
